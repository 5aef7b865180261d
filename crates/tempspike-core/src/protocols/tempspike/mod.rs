//! ThermoPro TempSpike XR (TP862b / TP863b) dual-probe thermometer.
//!
//! One transmission is a single FSK PCM row of 165..=173 bits: slicer
//! jitter, the 32-bit sync word `d2 55 2d d4`, then a 9-byte payload
//! window:
//!
//! ```text
//! byte 0    id
//! byte 1    0x40 docked, 0x10 color (1 = white)
//! bytes 2-4 two 12-bit raw temperatures, MSB-first, split at byte 3
//!           (raw = celsius * 10 + 500)
//! byte 5    0xc0 == 0xc0 when the booster base is transmitting
//! byte 6    0x30 probe battery, 0x0c == 0x0c probe role, 0x03 booster
//!           battery
//! bytes 7-8 CRC-8 (poly 0x07, init 0x00) XOR 0xdb, then its complement
//! ```
//!
//! A transmission comes from either the probe or the booster, so the
//! absent role's battery reading is suppressed from output instead of
//! being reported as a false zero.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use error::DecodeError;
pub use parser::decode_tempspike;

use crate::registry::{DeviceDescriptor, DeviceEntry, Modulation};

/// Modulation timing handed to the host's demodulator matching logic.
pub fn descriptor() -> DeviceDescriptor {
    DeviceDescriptor {
        name: layout::DEVICE_NAME,
        modulation: Modulation::FskPcm,
        pulse_width_us: layout::PULSE_WIDTH_US,
        symbol_width_us: layout::SYMBOL_WIDTH_US,
        reset_gap_us: layout::RESET_GAP_US,
        fields: layout::OUTPUT_FIELDS,
    }
}

/// Registry entry: the descriptor plus the pure decode function.
pub fn entry() -> DeviceEntry {
    DeviceEntry {
        descriptor: descriptor(),
        decode: decode_tempspike,
    }
}

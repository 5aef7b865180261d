/// Sync word preceding the payload, searched at bit granularity.
pub const SYNC_PATTERN: [u8; 4] = [0xd2, 0x55, 0x2d, 0xd4];
pub const SYNC_BITS: usize = SYNC_PATTERN.len() * 8;

/// Tolerated row length band; jitter from the slicer moves real
/// transmissions a few bits either way.
pub const MIN_ROW_BITS: usize = 165;
pub const MAX_ROW_BITS: usize = 173;

/// Payload window following the sync word.
pub const WINDOW_BYTES: usize = 9;
pub const WINDOW_BITS: usize = WINDOW_BYTES * 8;

/// Bytes covered by the checksum, and the trailer positions.
pub const CHECKED_BYTES: usize = 7;
pub const CHECKSUM_OFFSET: usize = 7;
pub const COMPLEMENT_OFFSET: usize = 8;

/// The transmitter offsets the raw CRC-8 by a fixed mask.
pub const CRC_POLY: u8 = 0x07;
pub const CRC_INIT: u8 = 0x00;
pub const CRC_FINAL_XOR: u8 = 0xdb;

pub const ID_OFFSET: usize = 0;

pub const FLAGS_OFFSET: usize = 1;
pub const COLOR_MASK: u8 = 0x10;
pub const DOCKED_MASK: u8 = 0x40;

/// 12-bit temperatures: byte 2 + high nibble of byte 3 (internal),
/// low nibble of byte 3 + byte 4 (ambient).
pub const INTERNAL_HI_OFFSET: usize = 2;
pub const TEMP_SPLIT_OFFSET: usize = 3;
pub const AMBIENT_LO_OFFSET: usize = 4;

pub const ROLE_OFFSET: usize = 5;
pub const BOOSTER_ROLE_MASK: u8 = 0xc0;

pub const BATTERY_OFFSET: usize = 6;
pub const PROBE_BATTERY_MASK: u8 = 0x30;
pub const PROBE_ROLE_MASK: u8 = 0x0c;
pub const BOOSTER_BATTERY_MASK: u8 = 0x03;

/// Raw temperature encoding: `raw = celsius * 10 + 500`.
pub const TEMP_RAW_BIAS: u16 = 500;

pub const MODEL: &str = "ThermoPro-TempSpikeXR";
pub const INTEGRITY_TYPE: &str = "CRC";

pub const DEVICE_NAME: &str =
    "ThermoPro TempSpike XR TP862b / TP863b Wireless Dual-Probe Meat Thermometer";

/// FSK PCM timing handed to the demodulator's matching logic.
pub const PULSE_WIDTH_US: u32 = 104;
pub const SYMBOL_WIDTH_US: u32 = 104;
pub const RESET_GAP_US: u32 = 2000;

pub const OUTPUT_FIELDS: &[&str] = &[
    "model",
    "id",
    "color",
    "is_docked",
    "temperature_int_C",
    "temperature_amb_C",
    "is_probe",
    "is_booster",
    "probe_batery",
    "booster_battery",
    "mic",
];

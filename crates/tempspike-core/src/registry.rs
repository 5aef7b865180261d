//! Device registration for the dispatch loop.
//!
//! The registry is an explicit value built at startup and passed by
//! reference to the decode driver; decoders themselves stay pure
//! functions. Descriptors carry the modulation timing the demodulator
//! needs before the decoder ever sees bits.

use crate::ThermometerReading;
use crate::bitbuf::BitCapture;
use crate::protocols::tempspike;
use crate::protocols::tempspike::DecodeError;

/// Demodulation scheme of a registered device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modulation {
    /// Pulse-code modulation over frequency-shift keying.
    FskPcm,
}

/// Declarative registration metadata for one device.
///
/// # Examples
/// ```
/// use tempspike_core::default_registry;
///
/// let registry = default_registry();
/// let descriptor = &registry.entries()[0].descriptor;
/// assert_eq!(descriptor.pulse_width_us, 104);
/// ```
#[derive(Debug, Clone)]
pub struct DeviceDescriptor {
    pub name: &'static str,
    pub modulation: Modulation,
    /// Shortest pulse the demodulator should expect, in microseconds.
    pub pulse_width_us: u32,
    /// Symbol period in microseconds.
    pub symbol_width_us: u32,
    /// Gap that ends a transmission, in microseconds.
    pub reset_gap_us: u32,
    /// Output fields in report order.
    pub fields: &'static [&'static str],
}

/// A decoder: one capture in, one validated reading or error out.
pub type DecodeFn = fn(&BitCapture) -> Result<ThermometerReading, DecodeError>;

#[derive(Debug, Clone)]
pub struct DeviceEntry {
    pub descriptor: DeviceDescriptor,
    pub decode: DecodeFn,
}

/// Registered devices, offered to each capture in registration order.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<DeviceEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: DeviceEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[DeviceEntry] {
        &self.entries
    }
}

/// Registry with every supported device registered.
pub fn default_registry() -> Registry {
    let mut registry = Registry::new();
    registry.register(tempspike::entry());
    registry
}

#[cfg(test)]
mod tests {
    use super::{Modulation, default_registry};

    #[test]
    fn default_registry_registers_the_tempspike() {
        let registry = default_registry();
        assert_eq!(registry.entries().len(), 1);

        let descriptor = &registry.entries()[0].descriptor;
        assert_eq!(descriptor.modulation, Modulation::FskPcm);
        assert_eq!(descriptor.pulse_width_us, 104);
        assert_eq!(descriptor.symbol_width_us, 104);
        assert_eq!(descriptor.reset_gap_us, 2000);
        assert!(descriptor.fields.contains(&"temperature_int_C"));
        assert!(descriptor.fields.contains(&"probe_batery"));
    }
}

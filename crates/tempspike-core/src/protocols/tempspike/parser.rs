use log::{debug, trace};

use crate::ThermometerReading;
use crate::bitbuf::BitCapture;
use crate::protocols::common::checksum::crc8;
use crate::protocols::common::reader::optional_flag;

use super::error::DecodeError;
use super::layout;
use super::reader::FrameReader;

/// Decode one captured transmission into a validated reading.
///
/// Pure function: locate the sync word, validate the trailer, extract
/// the bit-packed fields. Every failure identifies why the capture is
/// not a usable frame; none of them is fatal to the caller.
pub fn decode_tempspike(capture: &BitCapture) -> Result<ThermometerReading, DecodeError> {
    let window = locate_window(capture)?;
    validate_window(&window)?;
    Ok(build_reading(&FrameReader::new(&window)))
}

fn locate_window(capture: &BitCapture) -> Result<[u8; layout::WINDOW_BYTES], DecodeError> {
    let rows = capture.rows();
    if rows.len() > 1 {
        debug!("ambiguous capture: {} rows", rows.len());
        return Err(DecodeError::TooManyRows { rows: rows.len() });
    }

    let bits = rows.first().map_or(0, |row| row.len_bits());
    if bits < layout::MIN_ROW_BITS {
        debug!("row too short: {bits} bits, need {}", layout::MIN_ROW_BITS);
        return Err(DecodeError::TooShort { bits });
    }
    if bits > layout::MAX_ROW_BITS {
        debug!("row too long: {bits} bits, cap {}", layout::MAX_ROW_BITS);
        return Err(DecodeError::TooLong { bits });
    }

    let row = &rows[0];
    let offset = row
        .find(&layout::SYNC_PATTERN, layout::SYNC_BITS, 0)
        .ok_or(DecodeError::SyncNotFound)?;
    trace!("sync word at bit {offset}");

    let mut window = [0u8; layout::WINDOW_BYTES];
    if !row.extract_bytes(offset + layout::SYNC_BITS, layout::WINDOW_BITS, &mut window) {
        debug!("payload window overruns row: sync at bit {offset} of {bits}");
        return Err(DecodeError::TooShort { bits });
    }
    Ok(window)
}

fn validate_window(window: &[u8; layout::WINDOW_BYTES]) -> Result<(), DecodeError> {
    let reader = FrameReader::new(window);
    let checksum = reader.checksum();
    let complement = reader.complement();
    if complement != !checksum {
        debug!(
            "trailer bytes are not complements: {checksum:#04x} vs {complement:#04x}, \
             expected {:#04x}",
            !checksum
        );
        return Err(DecodeError::ChecksumFormatInvalid {
            checksum,
            complement,
        });
    }

    let computed =
        crc8(reader.checked_bytes(), layout::CRC_POLY, layout::CRC_INIT) ^ layout::CRC_FINAL_XOR;
    if computed != checksum {
        debug!("checksum mismatch: frame {checksum:#04x}, computed {computed:#04x}");
        return Err(DecodeError::ChecksumMismatch {
            expected: checksum,
            computed,
        });
    }
    Ok(())
}

fn build_reading(reader: &FrameReader<'_>) -> ThermometerReading {
    let is_probe = reader.is_probe();
    let is_booster = reader.is_booster();

    ThermometerReading {
        model: layout::MODEL.to_string(),
        id: format!("{:02x}", reader.id()),
        color: if reader.is_white() { "white" } else { "black" }.to_string(),
        is_docked: optional_flag(reader.is_docked()),
        temperature_int_c: raw_to_celsius(reader.internal_raw()),
        temperature_amb_c: raw_to_celsius(reader.ambient_raw()),
        is_probe: optional_flag(is_probe),
        is_booster: optional_flag(is_booster),
        probe_battery: is_probe.then(|| reader.probe_battery()),
        booster_battery: is_booster.then(|| reader.booster_battery()),
        mic: layout::INTEGRITY_TYPE.to_string(),
    }
}

fn raw_to_celsius(raw: u16) -> f64 {
    (raw as f64 - layout::TEMP_RAW_BIAS as f64) / 10.0
}

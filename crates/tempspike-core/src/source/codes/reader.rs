use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use super::layout;

/// Drop everything from the first comment character on.
pub(crate) fn strip_comment(line: &str) -> &str {
    match line.find(layout::COMMENT) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Split an optional leading RFC3339 timestamp off a capture line.
///
/// Returns the timestamp as fractional Unix seconds plus the remainder
/// of the line; lines without a parseable leading timestamp come back
/// unchanged.
pub(crate) fn take_timestamp(input: &str) -> (Option<f64>, &str) {
    let trimmed = input.trim_start();
    let token_end = trimmed
        .find(char::is_whitespace)
        .unwrap_or(trimmed.len());
    let (token, rest) = trimmed.split_at(token_end);
    match parse_rfc3339_seconds(token) {
        Some(ts) => (Some(ts), rest),
        None => (None, trimmed),
    }
}

pub(crate) fn parse_rfc3339_seconds(token: &str) -> Option<f64> {
    let dt = OffsetDateTime::parse(token, &Rfc3339).ok()?;
    Some(dt.unix_timestamp() as f64 + dt.nanosecond() as f64 * 1e-9)
}

/// Decode a hex nibble string, MSB-first; an odd trailing nibble fills
/// the high half of the final byte.
pub(crate) fn decode_hex_nibbles(hex: &str) -> Option<Vec<u8>> {
    let mut data = Vec::with_capacity(hex.len().div_ceil(2));
    let mut nibbles = hex.chars().map(|c| c.to_digit(16));
    loop {
        let hi = match nibbles.next() {
            Some(digit) => digit? as u8,
            None => break,
        };
        let lo = match nibbles.next() {
            Some(digit) => digit? as u8,
            None => {
                data.push(hi << 4);
                break;
            }
        };
        data.push((hi << 4) | lo);
    }
    Some(data)
}

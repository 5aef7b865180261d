use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::bitbuf::{BitCapture, BitRow};
use crate::source::{CaptureEvent, CaptureSource, SourceError};

use super::error::{CodesSourceError, malformed};
use super::layout;
use super::reader;

/// Capture source backed by a codes text file: one capture per line in
/// the demodulator's `{bits}hex` notation, with optional leading
/// RFC3339 timestamps and `#` comments.
pub struct CodesFileSource {
    lines: Lines<BufReader<File>>,
    line: u64,
}

impl CodesFileSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path).map_err(SourceError::from)?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
            line: 0,
        })
    }
}

impl CaptureSource for CodesFileSource {
    fn next_capture(&mut self) -> Result<Option<CaptureEvent>, SourceError> {
        for line in self.lines.by_ref() {
            let line = line.map_err(SourceError::Io)?;
            self.line += 1;
            let data = reader::strip_comment(&line).trim();
            if data.is_empty() {
                continue;
            }
            let event = parse_capture_line(data, self.line).map_err(SourceError::from)?;
            return Ok(Some(event));
        }
        Ok(None)
    }
}

pub(crate) fn parse_capture_line(data: &str, line: u64) -> Result<CaptureEvent, CodesSourceError> {
    let (ts, rest) = reader::take_timestamp(data);
    let mut rows = Vec::new();
    for token in rest.split_whitespace() {
        rows.push(parse_row(token, line)?);
    }
    if rows.is_empty() {
        return Err(malformed(line, "no bit rows on line"));
    }
    Ok(CaptureEvent {
        ts,
        line,
        capture: BitCapture::new(rows),
    })
}

fn parse_row(token: &str, line: u64) -> Result<BitRow, CodesSourceError> {
    let rest = token.strip_prefix(layout::ROW_OPEN).ok_or_else(|| {
        malformed(line, format!("expected '{{bits}}hex' row, got '{token}'"))
    })?;
    let (bits_str, hex) = rest
        .split_once(layout::ROW_CLOSE)
        .ok_or_else(|| malformed(line, format!("unterminated bit count in '{token}'")))?;
    let bits: usize = bits_str
        .parse()
        .map_err(|_| malformed(line, format!("invalid bit count '{bits_str}'")))?;
    if bits == 0 || bits > layout::MAX_ROW_BITS {
        return Err(malformed(line, format!("bit count {bits} out of range")));
    }

    let expected_nibbles = bits.div_ceil(4);
    if hex.len() != expected_nibbles {
        return Err(malformed(
            line,
            format!(
                "expected {expected_nibbles} hex digits for {bits} bits, got {}",
                hex.len()
            ),
        ));
    }
    let data = reader::decode_hex_nibbles(hex)
        .ok_or_else(|| malformed(line, format!("invalid hex digits in '{hex}'")))?;
    Ok(BitRow::new(data, bits))
}

pub const COMMENT: char = '#';
pub const ROW_OPEN: char = '{';
pub const ROW_CLOSE: char = '}';

/// Upper bound on a single row; anything larger is a corrupt line, not
/// a capture.
pub const MAX_ROW_BITS: usize = 4096;

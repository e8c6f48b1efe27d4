#![no_std]

pub static ERROR_ZERO_GENESIS_RATE: &[u8] = b"Initial exchange rate can not be zero.";

pub static ERROR_UNAUTHORIZED: &[u8] = b"Caller is not authorized to submit updates.";

pub static ERROR_DIVISION_BY_ZERO: &[u8] = b"Division by zero.";

pub static ERROR_SAMPLE_VALUE_OVERFLOW: &[u8] = b"Sample value exceeds storage width.";

pub static ERROR_SAMPLE_TIMESTAMP_OVERFLOW: &[u8] = b"Sample timestamp exceeds storage width.";

pub static ERROR_EMPTY_SERIES: &[u8] = b"Historical series is empty.";

pub static ERROR_INDEX_OUT_OF_RANGE: &[u8] = b"Historical index out of range.";

pub static ERROR_INVALID_WINDOW_SIZE: &[u8] = b"Invalid window size.";

pub static ERROR_INVALID_MAX_SWING: &[u8] = b"Invalid max swing.";

pub static ERROR_INVALID_DECIMAL_ADJUSTMENT: &[u8] = b"Invalid decimal adjustment.";

pub static ERROR_INVALID_RATE_SOURCE: &[u8] = b"Invalid rate source.";

pub static ERROR_UPDATER_NOT_FOUND: &[u8] = b"Updater not found.";

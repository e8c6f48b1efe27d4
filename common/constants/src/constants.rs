#![no_std]

/// Fixed-point scale used for rates, prices and fractions (1.0 == 10^18)
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// Default maximum swing between two consecutive samples (1%)
pub const DEFAULT_MAX_SWING: u128 = 10_000_000_000_000_000;

/// Exclusive upper bound for the max swing fraction (100%)
pub const MAX_SWING_LIMIT: u128 = WAD;

pub const MIN_WINDOW_SIZE: usize = 1;
pub const MAX_WINDOW_SIZE: usize = 500;

/// Storage width of a sample value, in bits
pub const SAMPLE_VALUE_BITS: u32 = 224;

/// Largest timestamp a sample can carry (32-bit seconds)
pub const MAX_SAMPLE_TIMESTAMP: u64 = u32::MAX as u64;

/// The underlying fund is priced on its net asset value
pub const INCLUDE_FEE_IN_AUM: bool = false;

multiversx_sc::imports!();

use common_constants::{MAX_SAMPLE_TIMESTAMP, SAMPLE_VALUE_BITS};
use common_errors::{
    ERROR_EMPTY_SERIES, ERROR_INDEX_OUT_OF_RANGE, ERROR_SAMPLE_TIMESTAMP_OVERFLOW,
    ERROR_SAMPLE_VALUE_OVERFLOW,
};
use common_structs::Sample;

/// Append-only log of accepted samples.
///
/// Entries are never rewritten or removed. Positions are 0-based here and
/// translated to the 1-based `VecMapper` underneath.
#[multiversx_sc::module]
pub trait SeriesModule: crate::storage::StorageModule {
    fn append_sample(&self, timestamp: u64, value: BigUint) -> Sample<Self::Api> {
        self.require_fits_sample(timestamp, &value);

        let sample = Sample::new(timestamp, value);
        self.history().push(&sample);

        sample
    }

    fn last_sample(&self) -> Sample<Self::Api> {
        let history = self.history();
        require!(!history.is_empty(), ERROR_EMPTY_SERIES);

        history.get(history.len())
    }

    fn sample_at(&self, index: usize) -> Sample<Self::Api> {
        let history = self.history();
        require!(index < history.len(), ERROR_INDEX_OUT_OF_RANGE);

        history.get(index + 1)
    }

    fn series_length(&self) -> usize {
        self.history().len()
    }

    /// Samples are packed as a 32-bit timestamp and a 224-bit value;
    /// anything wider is refused instead of truncated.
    fn require_fits_sample(&self, timestamp: u64, value: &BigUint) {
        require!(
            timestamp <= MAX_SAMPLE_TIMESTAMP,
            ERROR_SAMPLE_TIMESTAMP_OVERFLOW
        );

        let value_limit = BigUint::from(2u64).pow(SAMPLE_VALUE_BITS);
        require!(value < &value_limit, ERROR_SAMPLE_VALUE_OVERFLOW);
    }
}

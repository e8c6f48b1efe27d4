multiversx_sc::imports!();

use common_constants::{MAX_SWING_LIMIT, MAX_WINDOW_SIZE, MIN_WINDOW_SIZE};
use common_errors::*;

use crate::average;

#[multiversx_sc::module]
pub trait UtilsModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::series::SeriesModule
    + crate::swing::SwingGuardModule
    + crate::sources::RateSourceModule
    + common_math::SharedMathModule
{
    fn require_is_updater(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            self.updater_status().contains_key(&caller),
            ERROR_UNAUTHORIZED
        );
    }

    fn require_valid_window_size(&self, window_size: usize) {
        require!(
            (MIN_WINDOW_SIZE..=MAX_WINDOW_SIZE).contains(&window_size),
            ERROR_INVALID_WINDOW_SIZE
        );
    }

    fn require_valid_max_swing(&self, max_swing: &BigUint) {
        require!(
            *max_swing < BigUint::from(MAX_SWING_LIMIT),
            ERROR_INVALID_MAX_SWING
        );
    }

    fn require_valid_decimal_adjustment(&self, decimal_adjustment: &BigUint) {
        require!(*decimal_adjustment > 0u64, ERROR_INVALID_DECIMAL_ADJUSTMENT);
    }

    fn require_valid_rate_source(&self, source: &ManagedAddress) {
        require!(!source.is_zero(), ERROR_INVALID_RATE_SOURCE);
        require!(
            self.blockchain().is_smart_contract(source),
            ERROR_INVALID_RATE_SOURCE
        );
    }

    /// Seeds the series with the live wrapper rate. A zero rate can never anchor the guard.
    fn append_genesis_sample(&self) {
        let rate = self.fetch_exchange_rate();
        require!(rate > 0u64, ERROR_ZERO_GENESIS_RATE);

        let timestamp = self.blockchain().get_block_timestamp();
        self.append_sample(timestamp, rate);
        self.recompute_average();
    }

    fn submit_update_unchecked(&self) -> BigUint {
        let timestamp = self.blockchain().get_block_timestamp();
        let candidate = self.fetch_exchange_rate();

        let previous = self.last_sample();
        let (value, accepted) = self.guard_sample(&previous.value, candidate, timestamp);

        self.append_sample(timestamp, value);
        let new_average = self.recompute_average();

        self.record_submission(accepted);
        self.average_updated_event(&new_average, timestamp);

        new_average
    }

    /// Recomputes the published index from the current series and stores it.
    fn recompute_average(&self) -> BigUint {
        let history = self.history();
        let new_average = average::calculate(
            history.len(),
            self.window_size().get(),
            self.averaging_mode().get(),
            |index| history.get(index + 1).value,
        )
        .unwrap_or_else(|| sc_panic!(ERROR_EMPTY_SERIES));

        self.average_index().set(&new_average);

        new_average
    }

    fn record_submission(&self, accepted: bool) {
        self.updater_status()
            .entry(self.blockchain().get_caller())
            .and_modify(|updater_status| {
                updater_status.accepted_submissions += accepted as u64;
                updater_status.total_submissions += 1;
            });
    }
}

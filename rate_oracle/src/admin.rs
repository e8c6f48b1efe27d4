multiversx_sc::imports!();

use common_constants::{DEFAULT_MAX_SWING, WAD};
use common_structs::{AveragingMode, UpdaterStatus};

#[multiversx_sc::module]
pub trait AdminModule:
    crate::storage::StorageModule
    + multiversx_sc_modules::pause::PauseModule
    + crate::events::EventsModule
    + crate::series::SeriesModule
    + crate::swing::SwingGuardModule
    + crate::sources::RateSourceModule
    + crate::utils::UtilsModule
    + common_math::SharedMathModule
{
    /// Stores the sources and window, starts with a 1% max swing and the legacy
    /// averaging mode, then seeds the history from a live read of the wrapper rate.
    #[init]
    fn init(
        &self,
        wrapper_source: ManagedAddress,
        underlying_source: ManagedAddress,
        window_size: usize,
        updaters: MultiValueEncoded<ManagedAddress>,
    ) {
        self.require_valid_rate_source(&wrapper_source);
        self.require_valid_rate_source(&underlying_source);
        self.wrapper_source().set(&wrapper_source);
        self.underlying_source().set(&underlying_source);

        self.require_valid_window_size(window_size);
        self.window_size().set(window_size);

        self.max_swing().set(BigUint::from(DEFAULT_MAX_SWING));
        self.decimal_adjustment().set(BigUint::from(WAD));
        self.averaging_mode().set(AveragingMode::Legacy);

        self.add_updaters(updaters);

        self.append_genesis_sample();
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(addUpdaters)]
    fn add_updaters(&self, updaters: MultiValueEncoded<ManagedAddress>) {
        let mut updater_mapper = self.updater_status();
        for updater in updaters {
            if !updater_mapper.contains_key(&updater) {
                let _ = updater_mapper.insert(
                    updater.clone(),
                    UpdaterStatus {
                        total_submissions: 0,
                        accepted_submissions: 0,
                    },
                );
                self.updater_added_event(&updater);
            }
        }
    }

    #[only_owner]
    #[endpoint(removeUpdaters)]
    fn remove_updaters(&self, updaters: MultiValueEncoded<ManagedAddress>) {
        let mut updater_mapper = self.updater_status();
        for updater in updaters {
            if updater_mapper.remove(&updater).is_some() {
                self.updater_removed_event(&updater);
            }
        }
    }

    #[only_owner]
    #[endpoint(setWindowSize)]
    fn set_window_size(&self, window_size: usize) {
        self.require_valid_window_size(window_size);

        let old_value = self.window_size().get();
        self.window_size().set(window_size);
        self.window_size_updated_event(old_value, window_size);
    }

    /// Maximum relative move between two consecutive samples, as a WAD fraction below 100%.
    #[only_owner]
    #[endpoint(setMaxSwing)]
    fn set_max_swing(&self, max_swing: BigUint) {
        self.require_valid_max_swing(&max_swing);

        let old_value = self.max_swing().get();
        self.max_swing().set(&max_swing);
        self.max_swing_updated_event(&old_value, &max_swing);
    }

    /// Factor applied to `aum / supply` to land the underlying price on WAD scale.
    #[only_owner]
    #[endpoint(setDecimalAdjustment)]
    fn set_decimal_adjustment(&self, decimal_adjustment: BigUint) {
        self.require_valid_decimal_adjustment(&decimal_adjustment);

        let old_value = self.decimal_adjustment().get();
        self.decimal_adjustment().set(&decimal_adjustment);
        self.decimal_adjustment_updated_event(&old_value, &decimal_adjustment);
    }

    #[only_owner]
    #[endpoint(setAveragingMode)]
    fn set_averaging_mode(&self, averaging_mode: AveragingMode) {
        let old_value = self.averaging_mode().get();
        self.averaging_mode().set(averaging_mode);
        self.averaging_mode_updated_event(old_value, averaging_mode);
    }

    #[only_owner]
    #[endpoint(setWrapperSource)]
    fn set_wrapper_source(&self, source: ManagedAddress) {
        self.require_valid_rate_source(&source);

        let old_value = self.wrapper_source().get();
        self.wrapper_source().set(&source);
        self.wrapper_source_updated_event(&old_value, &source);
    }

    #[only_owner]
    #[endpoint(setUnderlyingSource)]
    fn set_underlying_source(&self, source: ManagedAddress) {
        self.require_valid_rate_source(&source);

        let old_value = self.underlying_source().get();
        self.underlying_source().set(&source);
        self.underlying_source_updated_event(&old_value, &source);
    }
}

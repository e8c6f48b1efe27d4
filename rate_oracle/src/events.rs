multiversx_sc::imports!();

use common_structs::AveragingMode;

#[multiversx_sc::module]
pub trait EventsModule {
    /// A fresh rate fell outside the allowed swing and was replaced by `previous`.
    #[event("anomaly_detected")]
    fn anomaly_detected_event(
        &self,
        #[indexed] previous: &BigUint,
        #[indexed] candidate: &BigUint,
        #[indexed] timestamp: u64,
    );

    #[event("average_updated")]
    fn average_updated_event(&self, #[indexed] new_average: &BigUint, #[indexed] timestamp: u64);

    #[event("window_size_updated")]
    fn window_size_updated_event(&self, #[indexed] old_value: usize, #[indexed] new_value: usize);

    #[event("max_swing_updated")]
    fn max_swing_updated_event(
        &self,
        #[indexed] old_value: &BigUint,
        #[indexed] new_value: &BigUint,
    );

    #[event("decimal_adjustment_updated")]
    fn decimal_adjustment_updated_event(
        &self,
        #[indexed] old_value: &BigUint,
        #[indexed] new_value: &BigUint,
    );

    #[event("averaging_mode_updated")]
    fn averaging_mode_updated_event(
        &self,
        #[indexed] old_value: AveragingMode,
        #[indexed] new_value: AveragingMode,
    );

    #[event("wrapper_source_updated")]
    fn wrapper_source_updated_event(
        &self,
        #[indexed] old_value: &ManagedAddress,
        #[indexed] new_value: &ManagedAddress,
    );

    #[event("underlying_source_updated")]
    fn underlying_source_updated_event(
        &self,
        #[indexed] old_value: &ManagedAddress,
        #[indexed] new_value: &ManagedAddress,
    );

    #[event("updater_added")]
    fn updater_added_event(&self, #[indexed] updater: &ManagedAddress);

    #[event("updater_removed")]
    fn updater_removed_event(&self, #[indexed] updater: &ManagedAddress);
}

multiversx_sc::imports!();

use common_structs::{AveragingMode, Sample, UpdaterStatus};

#[multiversx_sc::module]
pub trait StorageModule {
    /// Accepted samples, oldest first. The mapper is 1-indexed; the series API is not.
    #[storage_mapper("history")]
    fn history(&self) -> VecMapper<Sample<Self::Api>>;

    #[view(getAverageIndex)]
    #[storage_mapper("average_index")]
    fn average_index(&self) -> SingleValueMapper<BigUint>;

    #[view(getWindowSize)]
    #[storage_mapper("window_size")]
    fn window_size(&self) -> SingleValueMapper<usize>;

    #[view(getMaxSwing)]
    #[storage_mapper("max_swing")]
    fn max_swing(&self) -> SingleValueMapper<BigUint>;

    #[view(getDecimalAdjustment)]
    #[storage_mapper("decimal_adjustment")]
    fn decimal_adjustment(&self) -> SingleValueMapper<BigUint>;

    #[view(getAveragingMode)]
    #[storage_mapper("averaging_mode")]
    fn averaging_mode(&self) -> SingleValueMapper<AveragingMode>;

    #[view(getWrapperSource)]
    #[storage_mapper("wrapper_source")]
    fn wrapper_source(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getUnderlyingSource)]
    #[storage_mapper("underlying_source")]
    fn underlying_source(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("updater_status")]
    fn updater_status(&self) -> MapMapper<ManagedAddress, UpdaterStatus>;
}

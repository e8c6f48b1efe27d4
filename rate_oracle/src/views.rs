multiversx_sc::imports!();

use common_errors::ERROR_UPDATER_NOT_FOUND;
use common_structs::{Sample, UpdaterStatus};

#[multiversx_sc::module]
pub trait ViewsModule:
    crate::storage::StorageModule
    + crate::series::SeriesModule
    + crate::sources::RateSourceModule
    + common_math::SharedMathModule
{
    /// Final price of the wrapped token: the published average index applied to a
    /// freshly read underlying price. Nothing here is cached between calls.
    #[view(getPrice)]
    fn get_price(&self) -> BigUint {
        let underlying_price = self.fetch_underlying_price();

        self.mul_wad_floor(&self.average_index().get(), &underlying_price)
    }

    #[view(getUnderlyingPrice)]
    fn get_underlying_price(&self) -> BigUint {
        self.fetch_underlying_price()
    }

    /// Current wrapper rate as reported upstream, before any swing check.
    #[view(getExchangeRate)]
    fn get_exchange_rate(&self) -> BigUint {
        self.fetch_exchange_rate()
    }

    #[view(getHistoricalEntry)]
    fn get_historical_entry(&self, index: usize) -> Sample<Self::Api> {
        self.sample_at(index)
    }

    #[view(getHistoryLength)]
    fn get_history_length(&self) -> usize {
        self.series_length()
    }

    #[view(getLatestSample)]
    fn get_latest_sample(&self) -> Sample<Self::Api> {
        self.last_sample()
    }

    #[view(getUpdaters)]
    fn get_updaters(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for key in self.updater_status().keys() {
            result.push(key);
        }
        result
    }

    #[view(isUpdater)]
    fn is_updater(&self, address: ManagedAddress) -> bool {
        self.updater_status().contains_key(&address)
    }

    #[view(getUpdaterStatus)]
    fn get_updater_status(&self, address: ManagedAddress) -> UpdaterStatus {
        self.updater_status()
            .get(&address)
            .unwrap_or_else(|| sc_panic!(ERROR_UPDATER_NOT_FOUND))
    }
}

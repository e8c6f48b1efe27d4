multiversx_sc::imports!();

use common_constants::INCLUDE_FEE_IN_AUM;
use common_proxies::proxy_rate_source;

/// Read-only access to the upstream vaults the oracle samples.
#[multiversx_sc::module]
pub trait RateSourceModule:
    crate::storage::StorageModule + common_math::SharedMathModule
{
    /// Wrapper exchange rate: assets backing one wrapped share, WAD-scaled.
    fn fetch_exchange_rate(&self) -> BigUint {
        let source = self.wrapper_source().get();

        let total_assets = self
            .tx()
            .to(&source)
            .typed(proxy_rate_source::RateSourceProxy)
            .total_assets()
            .returns(ReturnsResult)
            .sync_call_readonly();

        let total_supply = self
            .tx()
            .to(&source)
            .typed(proxy_rate_source::RateSourceProxy)
            .total_supply()
            .returns(ReturnsResult)
            .sync_call_readonly();

        self.div_wad_floor(&total_assets, &total_supply)
    }

    /// Underlying asset price: net assets under management per unit of supply,
    /// brought to WAD scale by the configured decimal adjustment.
    fn fetch_underlying_price(&self) -> BigUint {
        let source = self.underlying_source().get();

        let total_aum = self
            .tx()
            .to(&source)
            .typed(proxy_rate_source::RateSourceProxy)
            .total_aum(INCLUDE_FEE_IN_AUM)
            .returns(ReturnsResult)
            .sync_call_readonly();

        let total_supply = self
            .tx()
            .to(&source)
            .typed(proxy_rate_source::RateSourceProxy)
            .total_supply()
            .returns(ReturnsResult)
            .sync_call_readonly();

        self.mul_div_floor(&total_aum, &self.decimal_adjustment().get(), &total_supply)
    }
}

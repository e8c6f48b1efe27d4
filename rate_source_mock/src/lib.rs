#![no_std]

multiversx_sc::imports!();

pub mod rate_source_mock_proxy;

/// Settable stand-in for a wrapped-asset vault or an underlying fund.
#[multiversx_sc::contract]
pub trait RateSourceMock {
    #[init]
    fn init(&self, total_assets: BigUint, total_supply: BigUint, net_aum: BigUint) {
        self.total_assets().set(total_assets);
        self.total_supply().set(total_supply);
        self.net_aum().set(net_aum);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setTotalAssets)]
    fn set_total_assets(&self, total_assets: BigUint) {
        self.total_assets().set(total_assets);
    }

    #[endpoint(setTotalSupply)]
    fn set_total_supply(&self, total_supply: BigUint) {
        self.total_supply().set(total_supply);
    }

    #[endpoint(setNetAum)]
    fn set_net_aum(&self, net_aum: BigUint) {
        self.net_aum().set(net_aum);
    }

    #[endpoint(setAccruedFee)]
    fn set_accrued_fee(&self, accrued_fee: BigUint) {
        self.accrued_fee().set(accrued_fee);
    }

    #[view(totalAum)]
    fn total_aum(&self, include_fee: bool) -> BigUint {
        let net_aum = self.net_aum().get();
        if include_fee {
            net_aum + self.accrued_fee().get()
        } else {
            net_aum
        }
    }

    #[view(totalAssets)]
    #[storage_mapper("total_assets")]
    fn total_assets(&self) -> SingleValueMapper<BigUint>;

    #[view(totalSupply)]
    #[storage_mapper("total_supply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("net_aum")]
    fn net_aum(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("accrued_fee")]
    fn accrued_fee(&self) -> SingleValueMapper<BigUint>;
}

#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// A timestamped exchange-rate observation, as stored in the historical series.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct Sample<M: ManagedTypeApi> {
    pub timestamp: u64,
    pub value: BigUint<M>,
}

impl<M: ManagedTypeApi> Sample<M> {
    pub fn new(timestamp: u64, value: BigUint<M>) -> Self {
        Sample { timestamp, value }
    }
}

/// How the moving average treats the series before it holds a full window.
///
/// `Legacy` sums every sample except the most recent one but still divides by
/// the full series length. `Inclusive` sums the whole series.
/// Both behave the same once the window has filled.
#[type_abi]
#[derive(
    NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Copy, Debug, PartialEq, Eq,
)]
pub enum AveragingMode {
    Legacy,
    Inclusive,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Debug, PartialEq, Eq)]
pub struct UpdaterStatus {
    pub accepted_submissions: u64,
    pub total_submissions: u64,
}

impl UpdaterStatus {
    pub fn rejected_submissions(&self) -> u64 {
        self.total_submissions - self.accepted_submissions
    }
}

#![no_std]

multiversx_sc::imports!();

pub mod admin;
pub mod average;
pub mod events;
pub mod rate_oracle_proxy;
pub mod series;
pub mod sources;
pub mod storage;
pub mod swing;
pub mod utils;
pub mod views;

#[multiversx_sc::contract]
pub trait RateOracle:
    multiversx_sc_modules::pause::PauseModule
    + events::EventsModule
    + storage::StorageModule
    + series::SeriesModule
    + swing::SwingGuardModule
    + sources::RateSourceModule
    + utils::UtilsModule
    + views::ViewsModule
    + admin::AdminModule
    + common_math::SharedMathModule
{
    /// Samples the wrapper's exchange rate and folds it into the moving average.
    /// A rate that swings too far from the last accepted sample is replaced by that
    /// sample, so every call appends exactly one entry to the history.
    /// Returns the newly published average index.
    #[endpoint(submitUpdate)]
    fn submit_update(&self) -> BigUint {
        self.require_not_paused();
        self.require_is_updater();

        self.submit_update_unchecked()
    }
}

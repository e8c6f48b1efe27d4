use crate::constants::*;

use common_structs::{AveragingMode, Sample, UpdaterStatus};
use multiversx_sc::types::{
    BigUint, ManagedAddress, MultiValueEncoded, ReturnsNewManagedAddress, ReturnsResult,
    TestAddress, TestSCAddress,
};
use multiversx_sc::codec::{top_encode_to_vec_u8_or_panic, TopEncode};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, ReturnsLogs},
    scenario_model::Log,
    ScenarioTxRun, ScenarioWorld,
};
use rate_oracle::rate_oracle_proxy::RateOracleProxy;
use rate_source_mock::rate_source_mock_proxy::RateSourceMockProxy;

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.set_current_dir_from_workspace("rate_oracle");

    blockchain.register_contract(RATE_ORACLE_PATH, rate_oracle::ContractBuilder);
    blockchain.register_contract(RATE_SOURCE_MOCK_PATH, rate_source_mock::ContractBuilder);

    blockchain
}

pub fn wad(units: u64) -> BigUint<StaticApi> {
    BigUint::from(units) * BigUint::from(WAD)
}

pub struct RateOracleTestState {
    pub world: ScenarioWorld,
    pub current_timestamp: u64,
}

impl RateOracleTestState {
    pub fn new() -> Self {
        Self::with_window(DEFAULT_WINDOW_SIZE, INITIAL_RATE)
    }

    pub fn with_window(window_size: usize, initial_rate: u128) -> Self {
        let mut state = Self::without_oracle();
        state.set_exchange_rate(BigUint::from(initial_rate));
        state.deploy_oracle(window_size);

        state
    }

    /// Accounts and both rate sources, no oracle yet. The wrapper reports `INITIAL_RATE`.
    pub fn without_oracle() -> Self {
        let mut world = world();

        world.account(OWNER_ADDRESS).nonce(1);
        world.account(UPDATER_ADDRESS_1).nonce(1);
        world.account(UPDATER_ADDRESS_2).nonce(1);
        world.account(STRANGER_ADDRESS).nonce(1);
        world.current_block().block_timestamp(START_TIMESTAMP);

        setup_rate_source(
            &mut world,
            WRAPPER_SOURCE_ADDRESS,
            BigUint::from(INITIAL_RATE),
            BigUint::from(WRAPPER_TOTAL_SUPPLY),
            BigUint::zero(),
        );
        setup_rate_source(
            &mut world,
            UNDERLYING_SOURCE_ADDRESS,
            BigUint::zero(),
            BigUint::from(UNDERLYING_TOTAL_SUPPLY),
            BigUint::from(INITIAL_UNDERLYING_PRICE),
        );

        Self {
            world,
            current_timestamp: START_TIMESTAMP,
        }
    }

    pub fn deploy_oracle(&mut self, window_size: usize) {
        let mut updaters = MultiValueEncoded::new();
        updaters.push(UPDATER_ADDRESS_1.to_managed_address());
        updaters.push(UPDATER_ADDRESS_2.to_managed_address());

        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(RateOracleProxy)
            .init(
                WRAPPER_SOURCE_ADDRESS.to_managed_address(),
                UNDERLYING_SOURCE_ADDRESS.to_managed_address(),
                window_size,
                updaters,
            )
            .code(RATE_ORACLE_PATH)
            .new_address(RATE_ORACLE_ADDRESS)
            .returns(ReturnsNewManagedAddress)
            .run();
    }

    pub fn deploy_oracle_error(&mut self, window_size: usize, error_message: &str) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(RateOracleProxy)
            .init(
                WRAPPER_SOURCE_ADDRESS.to_managed_address(),
                UNDERLYING_SOURCE_ADDRESS.to_managed_address(),
                window_size,
                MultiValueEncoded::<StaticApi, ManagedAddress<StaticApi>>::new(),
            )
            .code(RATE_ORACLE_PATH)
            .new_address(RATE_ORACLE_ADDRESS)
            .returns(ExpectMessage(error_message))
            .run();
    }

    // --- Time ---

    pub fn advance_time(&mut self, seconds: u64) -> u64 {
        let timestamp = self.current_timestamp + seconds;
        self.set_time(timestamp);
        timestamp
    }

    pub fn set_time(&mut self, timestamp: u64) {
        self.current_timestamp = timestamp;
        self.world.current_block().block_timestamp(timestamp);
    }

    // --- Rate sources ---

    /// With a supply of one WAD the wrapper rate equals its total assets.
    pub fn set_exchange_rate(&mut self, rate: BigUint<StaticApi>) {
        self.set_wrapper_total_assets(rate);
    }

    pub fn set_wrapper_total_assets(&mut self, total_assets: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(WRAPPER_SOURCE_ADDRESS)
            .typed(RateSourceMockProxy)
            .set_total_assets(total_assets)
            .run();
    }

    pub fn set_wrapper_total_supply(&mut self, total_supply: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(WRAPPER_SOURCE_ADDRESS)
            .typed(RateSourceMockProxy)
            .set_total_supply(total_supply)
            .run();
    }

    pub fn set_underlying_aum(&mut self, net_aum: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(UNDERLYING_SOURCE_ADDRESS)
            .typed(RateSourceMockProxy)
            .set_net_aum(net_aum)
            .run();
    }

    pub fn set_underlying_supply(&mut self, total_supply: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(UNDERLYING_SOURCE_ADDRESS)
            .typed(RateSourceMockProxy)
            .set_total_supply(total_supply)
            .run();
    }

    pub fn set_underlying_accrued_fee(&mut self, accrued_fee: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(UNDERLYING_SOURCE_ADDRESS)
            .typed(RateSourceMockProxy)
            .set_accrued_fee(accrued_fee)
            .run();
    }

    // --- Updates ---

    pub fn submit_update(&mut self, from: TestAddress) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from)
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .submit_update()
            .returns(ReturnsResult)
            .run()
    }

    pub fn submit_update_with_logs(&mut self, from: TestAddress) -> (BigUint<StaticApi>, Vec<Log>) {
        self.world
            .tx()
            .from(from)
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .submit_update()
            .returns(ReturnsResult)
            .returns(ReturnsLogs)
            .run()
    }

    pub fn submit_update_error(&mut self, from: TestAddress, error_message: &str) {
        self.world
            .tx()
            .from(from)
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .submit_update()
            .returns(ExpectMessage(error_message))
            .run();
    }

    /// Moves the clock one interval forward, points the wrapper at `rate` and submits.
    pub fn push_rate(&mut self, rate: BigUint<StaticApi>) -> BigUint<StaticApi> {
        self.advance_time(UPDATE_INTERVAL_SECONDS);
        self.set_exchange_rate(rate);
        self.submit_update(UPDATER_ADDRESS_1)
    }

    pub fn push_rate_with_logs(&mut self, rate: BigUint<StaticApi>) -> (BigUint<StaticApi>, Vec<Log>) {
        self.advance_time(UPDATE_INTERVAL_SECONDS);
        self.set_exchange_rate(rate);
        self.submit_update_with_logs(UPDATER_ADDRESS_1)
    }

    // --- Admin ---

    pub fn set_window_size(&mut self, from: TestAddress, window_size: usize) {
        self.world
            .tx()
            .from(from)
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .set_window_size(window_size)
            .run();
    }

    pub fn set_window_size_with_logs(&mut self, window_size: usize) -> Vec<Log> {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .set_window_size(window_size)
            .returns(ReturnsLogs)
            .run()
    }

    pub fn set_window_size_error(&mut self, from: TestAddress, window_size: usize, error_message: &str) {
        self.world
            .tx()
            .from(from)
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .set_window_size(window_size)
            .returns(ExpectMessage(error_message))
            .run();
    }

    pub fn set_max_swing(&mut self, max_swing: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .set_max_swing(max_swing)
            .run();
    }

    pub fn set_max_swing_error(
        &mut self,
        from: TestAddress,
        max_swing: BigUint<StaticApi>,
        error_message: &str,
    ) {
        self.world
            .tx()
            .from(from)
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .set_max_swing(max_swing)
            .returns(ExpectMessage(error_message))
            .run();
    }

    pub fn set_decimal_adjustment(&mut self, decimal_adjustment: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .set_decimal_adjustment(decimal_adjustment)
            .run();
    }

    pub fn set_decimal_adjustment_error(
        &mut self,
        decimal_adjustment: BigUint<StaticApi>,
        error_message: &str,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .set_decimal_adjustment(decimal_adjustment)
            .returns(ExpectMessage(error_message))
            .run();
    }

    pub fn set_averaging_mode(&mut self, averaging_mode: AveragingMode) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .set_averaging_mode(averaging_mode)
            .run();
    }

    pub fn set_wrapper_source(&mut self, source: ManagedAddress<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .set_wrapper_source(source)
            .run();
    }

    pub fn set_wrapper_source_error(&mut self, source: ManagedAddress<StaticApi>, error_message: &str) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .set_wrapper_source(source)
            .returns(ExpectMessage(error_message))
            .run();
    }

    pub fn set_underlying_source(&mut self, source: ManagedAddress<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .set_underlying_source(source)
            .run();
    }

    pub fn add_updater(&mut self, updater: TestAddress) {
        let mut updaters = MultiValueEncoded::new();
        updaters.push(updater.to_managed_address());

        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .add_updaters(updaters)
            .run();
    }

    pub fn remove_updater(&mut self, updater: TestAddress) {
        let mut updaters = MultiValueEncoded::new();
        updaters.push(updater.to_managed_address());

        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .remove_updaters(updaters)
            .run();
    }

    pub fn pause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .pause_endpoint()
            .run();
    }

    pub fn unpause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .unpause_endpoint()
            .run();
    }

    // --- Views ---

    pub fn average_index(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .average_index()
            .returns(ReturnsResult)
            .run()
    }

    pub fn price(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .get_price()
            .returns(ReturnsResult)
            .run()
    }

    pub fn price_error(&mut self, error_message: &str) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .get_price()
            .returns(ExpectMessage(error_message))
            .run();
    }

    pub fn underlying_price(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .get_underlying_price()
            .returns(ReturnsResult)
            .run()
    }

    pub fn underlying_price_error(&mut self, error_message: &str) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .get_underlying_price()
            .returns(ExpectMessage(error_message))
            .run();
    }

    pub fn exchange_rate(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .get_exchange_rate()
            .returns(ReturnsResult)
            .run()
    }

    pub fn history_length(&mut self) -> usize {
        self.world
            .query()
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .get_history_length()
            .returns(ReturnsResult)
            .run()
    }

    pub fn historical_entry(&mut self, index: usize) -> Sample<StaticApi> {
        self.world
            .query()
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .get_historical_entry(index)
            .returns(ReturnsResult)
            .run()
    }

    pub fn historical_entry_error(&mut self, index: usize, error_message: &str) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .get_historical_entry(index)
            .returns(ExpectMessage(error_message))
            .run();
    }

    pub fn latest_sample(&mut self) -> Sample<StaticApi> {
        self.world
            .query()
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .get_latest_sample()
            .returns(ReturnsResult)
            .run()
    }

    pub fn history_values(&mut self) -> Vec<BigUint<StaticApi>> {
        let length = self.history_length();
        (0..length)
            .map(|index| self.historical_entry(index).value)
            .collect()
    }

    pub fn window_size(&mut self) -> usize {
        self.world
            .query()
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .window_size()
            .returns(ReturnsResult)
            .run()
    }

    pub fn max_swing(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .max_swing()
            .returns(ReturnsResult)
            .run()
    }

    pub fn averaging_mode(&mut self) -> AveragingMode {
        self.world
            .query()
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .averaging_mode()
            .returns(ReturnsResult)
            .run()
    }

    pub fn wrapper_source(&mut self) -> ManagedAddress<StaticApi> {
        self.world
            .query()
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .wrapper_source()
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_updater(&mut self, address: TestAddress) -> bool {
        self.world
            .query()
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .is_updater(address.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn updater_status(&mut self, address: TestAddress) -> UpdaterStatus {
        self.world
            .query()
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .get_updater_status(address.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_paused(&mut self) -> bool {
        self.world
            .query()
            .to(RATE_ORACLE_ADDRESS)
            .typed(RateOracleProxy)
            .paused_status()
            .returns(ReturnsResult)
            .run()
    }
}

/// Logs whose first topic is the event identifier
pub fn event_logs<'a>(logs: &'a [Log], identifier: &str) -> Vec<&'a Log> {
    logs.iter()
        .filter(|log| {
            log.topics
                .first()
                .is_some_and(|topic| topic.as_slice() == identifier.as_bytes())
        })
        .collect()
}

/// Indexed event arguments as they appear in the log topics
pub fn topic<T: TopEncode>(value: &T) -> Vec<u8> {
    top_encode_to_vec_u8_or_panic(value)
}

pub fn setup_rate_source(
    world: &mut ScenarioWorld,
    address: TestSCAddress,
    total_assets: BigUint<StaticApi>,
    total_supply: BigUint<StaticApi>,
    net_aum: BigUint<StaticApi>,
) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(RateSourceMockProxy)
        .init(total_assets, total_supply, net_aum)
        .code(RATE_SOURCE_MOCK_PATH)
        .new_address(address)
        .returns(ReturnsNewManagedAddress)
        .run()
}

mod config;
mod proxy;

use clap::{Parser, Subcommand, ValueEnum};
use common_structs::AveragingMode;
use config::Config;
use multiversx_sc_snippets::imports::*;
use serde::{Deserialize, Serialize};
use std::{
    io::{Read, Write},
    path::Path,
};

const STATE_FILE: &str = "state.toml";
const GAS_LIMIT: u64 = 30_000_000;

#[derive(Parser)]
#[command(version, about = "Drives a deployed rate oracle")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Deploys the oracle; the calling wallet becomes the first updater
    Deploy {
        wrapper_source: String,
        underlying_source: String,
        window_size: usize,
    },
    Upgrade,
    SubmitUpdate,
    Price,
    UnderlyingPrice,
    ExchangeRate,
    AverageIndex,
    HistoryLength,
    LatestSample,
    HistoricalEntry {
        index: usize,
    },
    AddUpdaters {
        #[arg(required = true)]
        updaters: Vec<String>,
    },
    RemoveUpdaters {
        #[arg(required = true)]
        updaters: Vec<String>,
    },
    Updaters,
    UpdaterStatus {
        updater: String,
    },
    SetWindowSize {
        window_size: usize,
    },
    /// WAD fraction, e.g. 10000000000000000 for 1%
    SetMaxSwing {
        max_swing: u128,
    },
    SetDecimalAdjustment {
        decimal_adjustment: u128,
    },
    SetAveragingMode {
        #[arg(value_enum)]
        mode: Mode,
    },
    SetWrapperSource {
        source: String,
    },
    SetUnderlyingSource {
        source: String,
    },
    Pause,
    Unpause,
    IsPaused,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Legacy,
    Inclusive,
}

impl From<Mode> for AveragingMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Legacy => AveragingMode::Legacy,
            Mode::Inclusive => AveragingMode::Inclusive,
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let mut interact = ContractInteract::new().await;
    match cli.command {
        Command::Deploy {
            wrapper_source,
            underlying_source,
            window_size,
        } => {
            interact
                .deploy(&wrapper_source, &underlying_source, window_size)
                .await
        },
        Command::Upgrade => interact.upgrade().await,
        Command::SubmitUpdate => interact.submit_update().await,
        Command::Price => interact.price().await,
        Command::UnderlyingPrice => interact.underlying_price().await,
        Command::ExchangeRate => interact.exchange_rate().await,
        Command::AverageIndex => interact.average_index().await,
        Command::HistoryLength => interact.history_length().await,
        Command::LatestSample => interact.latest_sample().await,
        Command::HistoricalEntry { index } => interact.historical_entry(index).await,
        Command::AddUpdaters { updaters } => interact.add_updaters(&updaters).await,
        Command::RemoveUpdaters { updaters } => interact.remove_updaters(&updaters).await,
        Command::Updaters => interact.updaters().await,
        Command::UpdaterStatus { updater } => interact.updater_status(&updater).await,
        Command::SetWindowSize { window_size } => interact.set_window_size(window_size).await,
        Command::SetMaxSwing { max_swing } => interact.set_max_swing(max_swing).await,
        Command::SetDecimalAdjustment { decimal_adjustment } => {
            interact.set_decimal_adjustment(decimal_adjustment).await
        },
        Command::SetAveragingMode { mode } => interact.set_averaging_mode(mode.into()).await,
        Command::SetWrapperSource { source } => interact.set_wrapper_source(&source).await,
        Command::SetUnderlyingSource { source } => interact.set_underlying_source(&source).await,
        Command::Pause => interact.pause().await,
        Command::Unpause => interact.unpause().await,
        Command::IsPaused => interact.is_paused().await,
    }
}

fn managed_address(bech32: &str) -> ManagedAddress<StaticApi> {
    ManagedAddress::from(Bech32Address::from_bech32_string(bech32.to_owned()).to_address())
}

fn managed_addresses(bech32_list: &[String]) -> MultiValueEncoded<StaticApi, ManagedAddress<StaticApi>> {
    let mut addresses = MultiValueEncoded::new();
    for bech32 in bech32_list {
        addresses.push(managed_address(bech32));
    }
    addresses
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct State {
    contract_address: Option<Bech32Address>,
}

impl State {
    // Deserializes state from file
    pub fn load_state() -> Self {
        if Path::new(STATE_FILE).exists() {
            let mut file = std::fs::File::open(STATE_FILE).expect("unreadable state.toml");
            let mut content = String::new();
            file.read_to_string(&mut content)
                .expect("state.toml is not valid utf-8");
            toml::from_str(&content).expect("malformed state.toml")
        } else {
            Self::default()
        }
    }

    /// Sets the contract address
    pub fn set_address(&mut self, address: Bech32Address) {
        self.contract_address = Some(address);
    }

    /// Returns the contract address
    pub fn current_address(&self) -> &Bech32Address {
        self.contract_address
            .as_ref()
            .expect("no known contract, deploy first")
    }
}

impl Drop for State {
    // Serializes state to file
    fn drop(&mut self) {
        let serialized = match toml::to_string(self) {
            Ok(serialized) => serialized,
            Err(error) => {
                eprintln!("could not serialize state: {error}");
                return;
            },
        };
        if let Err(error) = std::fs::File::create(STATE_FILE)
            .and_then(|mut file| file.write_all(serialized.as_bytes()))
        {
            eprintln!("could not write {STATE_FILE}: {error}");
        }
    }
}

struct ContractInteract {
    interactor: Interactor,
    wallet_address: Address,
    contract_code: BytesValue,
    state: State,
}

impl ContractInteract {
    async fn new() -> Self {
        let config = Config::new();
        let mut interactor = Interactor::new(config.gateway_uri())
            .await
            .use_chain_simulator(config.use_chain_simulator());
        interactor.set_current_dir_from_workspace("rate_oracle/interactor");

        let wallet_address = interactor.register_wallet(test_wallets::alice()).await;

        let contract_code = BytesValue::interpret_from(
            "mxsc:../output/rate_oracle.mxsc.json",
            &InterpreterContext::default(),
        );

        ContractInteract {
            interactor,
            wallet_address,
            contract_code,
            state: State::load_state(),
        }
    }

    async fn deploy(&mut self, wrapper_source: &str, underlying_source: &str, window_size: usize) {
        let mut updaters = MultiValueEncoded::<StaticApi, ManagedAddress<StaticApi>>::new();
        updaters.push(ManagedAddress::from(self.wallet_address.clone()));

        let new_address = self
            .interactor
            .tx()
            .from(&self.wallet_address)
            .gas(GAS_LIMIT)
            .typed(proxy::RateOracleProxy)
            .init(
                managed_address(wrapper_source),
                managed_address(underlying_source),
                window_size,
                updaters,
            )
            .code(&self.contract_code)
            .code_metadata(CodeMetadata::UPGRADEABLE)
            .returns(ReturnsNewBech32Address)
            .run()
            .await;

        println!("new address: {new_address}");
        self.state.set_address(new_address);
    }

    async fn upgrade(&mut self) {
        self.interactor
            .tx()
            .to(self.state.current_address())
            .from(&self.wallet_address)
            .gas(GAS_LIMIT)
            .typed(proxy::RateOracleProxy)
            .upgrade()
            .code(&self.contract_code)
            .code_metadata(CodeMetadata::UPGRADEABLE)
            .run()
            .await;

        println!("upgraded {}", self.state.current_address());
    }

    async fn submit_update(&mut self) {
        let new_average = self
            .interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.current_address())
            .gas(GAS_LIMIT)
            .typed(proxy::RateOracleProxy)
            .submit_update()
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        println!("average index: {new_average}");
    }

    async fn price(&mut self) {
        let price = self
            .interactor
            .query()
            .to(self.state.current_address())
            .typed(proxy::RateOracleProxy)
            .get_price()
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        println!("price: {price}");
    }

    async fn underlying_price(&mut self) {
        let price = self
            .interactor
            .query()
            .to(self.state.current_address())
            .typed(proxy::RateOracleProxy)
            .get_underlying_price()
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        println!("underlying price: {price}");
    }

    async fn exchange_rate(&mut self) {
        let rate = self
            .interactor
            .query()
            .to(self.state.current_address())
            .typed(proxy::RateOracleProxy)
            .get_exchange_rate()
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        println!("exchange rate: {rate}");
    }

    async fn average_index(&mut self) {
        let average = self
            .interactor
            .query()
            .to(self.state.current_address())
            .typed(proxy::RateOracleProxy)
            .average_index()
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        println!("average index: {average}");
    }

    async fn history_length(&mut self) {
        let length = self
            .interactor
            .query()
            .to(self.state.current_address())
            .typed(proxy::RateOracleProxy)
            .get_history_length()
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        println!("history length: {length}");
    }

    async fn latest_sample(&mut self) {
        let sample = self
            .interactor
            .query()
            .to(self.state.current_address())
            .typed(proxy::RateOracleProxy)
            .get_latest_sample()
            .returns(ReturnsResult)
            .run()
            .await;

        println!(
            "latest sample: {:?} at {}",
            sample.value.to_display(),
            sample.timestamp
        );
    }

    async fn historical_entry(&mut self, index: usize) {
        let sample = self
            .interactor
            .query()
            .to(self.state.current_address())
            .typed(proxy::RateOracleProxy)
            .get_historical_entry(index)
            .returns(ReturnsResult)
            .run()
            .await;

        println!(
            "entry {index}: {:?} at {}",
            sample.value.to_display(),
            sample.timestamp
        );
    }

    async fn add_updaters(&mut self, updaters: &[String]) {
        self.interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.current_address())
            .gas(GAS_LIMIT)
            .typed(proxy::RateOracleProxy)
            .add_updaters(managed_addresses(updaters))
            .run()
            .await;

        println!("added {} updater(s)", updaters.len());
    }

    async fn remove_updaters(&mut self, updaters: &[String]) {
        self.interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.current_address())
            .gas(GAS_LIMIT)
            .typed(proxy::RateOracleProxy)
            .remove_updaters(managed_addresses(updaters))
            .run()
            .await;

        println!("removed {} updater(s)", updaters.len());
    }

    async fn updaters(&mut self) {
        let updaters = self
            .interactor
            .query()
            .to(self.state.current_address())
            .typed(proxy::RateOracleProxy)
            .get_updaters()
            .returns(ReturnsResult)
            .run()
            .await;

        for updater in updaters {
            println!("{}", Bech32Address::from(updater.to_address()));
        }
    }

    async fn updater_status(&mut self, updater: &str) {
        let status = self
            .interactor
            .query()
            .to(self.state.current_address())
            .typed(proxy::RateOracleProxy)
            .get_updater_status(managed_address(updater))
            .returns(ReturnsResult)
            .run()
            .await;

        println!(
            "submissions: {}, accepted: {}, rejected: {}",
            status.total_submissions,
            status.accepted_submissions,
            status.rejected_submissions()
        );
    }

    async fn set_window_size(&mut self, window_size: usize) {
        self.interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.current_address())
            .gas(GAS_LIMIT)
            .typed(proxy::RateOracleProxy)
            .set_window_size(window_size)
            .run()
            .await;

        println!("window size set to {window_size}");
    }

    async fn set_max_swing(&mut self, max_swing: u128) {
        self.interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.current_address())
            .gas(GAS_LIMIT)
            .typed(proxy::RateOracleProxy)
            .set_max_swing(BigUint::<StaticApi>::from(max_swing))
            .run()
            .await;

        println!("max swing set to {max_swing}");
    }

    async fn set_decimal_adjustment(&mut self, decimal_adjustment: u128) {
        self.interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.current_address())
            .gas(GAS_LIMIT)
            .typed(proxy::RateOracleProxy)
            .set_decimal_adjustment(BigUint::<StaticApi>::from(decimal_adjustment))
            .run()
            .await;

        println!("decimal adjustment set to {decimal_adjustment}");
    }

    async fn set_averaging_mode(&mut self, mode: AveragingMode) {
        self.interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.current_address())
            .gas(GAS_LIMIT)
            .typed(proxy::RateOracleProxy)
            .set_averaging_mode(mode)
            .run()
            .await;

        println!("averaging mode set to {mode:?}");
    }

    async fn set_wrapper_source(&mut self, source: &str) {
        self.interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.current_address())
            .gas(GAS_LIMIT)
            .typed(proxy::RateOracleProxy)
            .set_wrapper_source(managed_address(source))
            .run()
            .await;

        println!("wrapper source set to {source}");
    }

    async fn set_underlying_source(&mut self, source: &str) {
        self.interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.current_address())
            .gas(GAS_LIMIT)
            .typed(proxy::RateOracleProxy)
            .set_underlying_source(managed_address(source))
            .run()
            .await;

        println!("underlying source set to {source}");
    }

    async fn pause(&mut self) {
        self.interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.current_address())
            .gas(GAS_LIMIT)
            .typed(proxy::RateOracleProxy)
            .pause_endpoint()
            .run()
            .await;

        println!("paused");
    }

    async fn unpause(&mut self) {
        self.interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.current_address())
            .gas(GAS_LIMIT)
            .typed(proxy::RateOracleProxy)
            .unpause_endpoint()
            .run()
            .await;

        println!("unpaused");
    }

    async fn is_paused(&mut self) {
        let paused = self
            .interactor
            .query()
            .to(self.state.current_address())
            .typed(proxy::RateOracleProxy)
            .paused_status()
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        println!("paused: {paused}");
    }
}

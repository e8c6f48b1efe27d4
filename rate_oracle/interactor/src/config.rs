use serde::Deserialize;
use std::io::Read;

/// Config file
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainType {
    Real,
    Simulator,
}

/// Rate oracle interactor configuration
#[derive(Debug, Deserialize)]
pub struct Config {
    pub gateway_uri: String,
    pub chain_type: ChainType,
}

impl Config {
    // Deserializes config from file
    pub fn new() -> Self {
        let mut file = std::fs::File::open(CONFIG_FILE).expect("missing config.toml");
        let mut content = String::new();
        file.read_to_string(&mut content)
            .expect("config.toml is not valid utf-8");
        toml::from_str(&content).expect("malformed config.toml")
    }

    pub fn gateway_uri(&self) -> &str {
        &self.gateway_uri
    }

    pub fn use_chain_simulator(&self) -> bool {
        match self.chain_type {
            ChainType::Real => false,
            ChainType::Simulator => true,
        }
    }
}

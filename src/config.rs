use std::{env, fmt::Display, str::FromStr};

use ethers::core::types::Address;
use eyre::{eyre, Result};
use tracing::info;

use crate::chain::{ChainTarget, DEFAULT_CONTRACT_ADDRESS};

pub const DEFAULT_PORT: &str = "3000";
pub const DEFAULT_LOG_FILTER: &str = "info,hyper=warn,tower=warn";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub chain: ChainTarget,
}

impl AppConfig {
    /// Load configuration from the process environment.
    /// Call `dotenv().ok()` first to pick up a local `.env` file.
    pub fn from_env() -> Result<Self> {
        let port = try_load("PORT", DEFAULT_PORT)?;
        let contract_address: Address =
            try_load("RATING_CONTRACT_ADDRESS", DEFAULT_CONTRACT_ADDRESS)?;

        Ok(Self {
            port,
            chain: ChainTarget::fuji(contract_address),
        })
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.trim()
        .parse()
        .map_err(|e| eyre!("Invalid {key} value {raw:?}: {e}"))
}

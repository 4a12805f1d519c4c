use std::sync::Arc;

use crate::chain::ChainTarget;
use crate::config::AppConfig;
use crate::domain::{Jitter, UniformJitter};

/// Immutable per-process state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub chain: Arc<ChainTarget>,
    pub jitter: Arc<dyn Jitter>,
}

impl AppState {
    pub fn new(chain: ChainTarget, jitter: impl Jitter + 'static) -> Self {
        Self {
            chain: Arc::new(chain),
            jitter: Arc::new(jitter),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.chain.clone(), UniformJitter)
    }
}

use std::sync::Arc;

use crate::config::Config;
use crate::magic_loops::MagicLoopsClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub magic_loops: Arc<MagicLoopsClient>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let magic_loops = Arc::new(MagicLoopsClient::new(&config.magic_loops_config)?);

        Ok(Self {
            config,
            magic_loops,
        })
    }
}

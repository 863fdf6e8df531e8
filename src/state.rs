use crate::cache::DatasetCache;
use crate::config::AppConfig;

/// Shared by every request handler.
pub struct AppState {
    pub config: AppConfig,
    pub datasets: DatasetCache,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let datasets = DatasetCache::new(
            config.deal.clone(),
            config.server.cache_capacity,
            config.server.seed,
        );
        Self { config, datasets }
    }
}

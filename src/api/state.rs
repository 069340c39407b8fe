use tokio_rusqlite::Connection;

use crate::ai::ClipMatcher;
use crate::core::AppConfig;
use crate::giphy::GiphyClient;

pub struct AppState {
    pub db: Connection,
    pub config: AppConfig,
    pub giphy: GiphyClient,
    pub matcher: ClipMatcher,
}

impl AppState {
    pub fn new(db: Connection, config: AppConfig) -> Self {
        let giphy = GiphyClient::new(&config.giphy_api_hostname, &config.giphy_api_key);
        let matcher = ClipMatcher::from_config(&config);
        Self {
            db,
            config,
            giphy,
            matcher,
        }
    }
}

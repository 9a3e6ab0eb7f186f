use std::sync::Arc;

use flopboard_client::WinnersApi;

use crate::config::Config;

/// Application context passed to command handlers.
pub struct AppContext {
    pub api: Arc<dyn WinnersApi>,
    pub config: Config,
}

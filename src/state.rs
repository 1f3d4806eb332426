use crate::application::settings::watch_history_depth;
use crate::domain::error::TlxError;
use crate::infrastructure::config::{get_history_path, get_settings_path, Config};
use crate::infrastructure::network::TranslationClient;
use crate::infrastructure::storage::{HistoryStore, SettingsStore};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub settings: Arc<RwLock<SettingsStore>>,
    pub history: HistoryStore,
    pub client: Arc<TranslationClient>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, TlxError> {
        let history = HistoryStore::new(get_history_path(&config));

        let mut settings = SettingsStore::open(get_settings_path(&config))?;
        watch_history_depth(&mut settings, history.clone());

        let client = TranslationClient::new(
            config.service,
            config.network.clone(),
            config.http_proxy.clone(),
        );

        Ok(Self {
            config: Arc::new(config),
            settings: Arc::new(RwLock::new(settings)),
            history,
            client: Arc::new(client),
        })
    }
}

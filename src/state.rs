use tracing::info;

use crate::{config::Config, errors::Result, store::EventStore};

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: EventStore,
}

impl AppState {
    /// Open the event store and make sure its schema exists.
    pub async fn init(config: &Config) -> Result<Self> {
        let store = EventStore::new(config.db_path.clone());
        let init_store = store.clone();
        tokio::task::spawn_blocking(move || init_store.ensure_schema()).await??;
        info!("Event store ready at {}", store.path().display());

        Ok(Self { store })
    }
}

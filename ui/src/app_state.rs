use api::config::VaultConfig;
use std::ops::Deref;
use std::sync::Arc;

/// Read-only data shared by both flows.
#[derive(Debug, PartialEq, Eq)]
pub struct AppStateData {
    pub config: VaultConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(config: VaultConfig) -> Self {
        Self(Arc::new(AppStateData { config }))
    }
}

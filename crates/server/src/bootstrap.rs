use std::sync::Arc;

use storefront_actions::{storefront_registry, ActionDispatcher, BackendSetupError, HttpBackend};
use storefront_core::config::{AppConfig, ConfigError, LoadOptions};
use thiserror::Error;
use tracing::info;

pub struct Application {
    pub config: AppConfig,
    pub backend: HttpBackend,
    pub dispatcher: ActionDispatcher,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("backend client setup failed: {0}")]
    Backend(#[from] BackendSetupError),
}

pub fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config)
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    let backend = HttpBackend::from_config(&config.backend)?;
    info!(
        event_name = "system.bootstrap.backend_configured",
        correlation_id = "bootstrap",
        base_url = backend.base_url(),
        timeout_secs = config.backend.timeout_secs,
        "storefront backend client configured"
    );

    let registry = storefront_registry(Arc::new(backend.clone()));
    info!(
        event_name = "system.bootstrap.actions_registered",
        correlation_id = "bootstrap",
        action_count = registry.len(),
        "storefront actions registered"
    );

    Ok(Application { config, backend, dispatcher: ActionDispatcher::new(registry) })
}

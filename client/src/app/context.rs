//! Application context: one instance per process, no module-level singletons.

use std::sync::Arc;

use thiserror::Error;

use super::navigation::MemoryNavigator;
use crate::config::{ClientConfig, ConfigError};
use crate::core::service::{Navigator, Transport};
use crate::services::api::{ApiClient, ReqwestTransport};
use crate::storage::{FileStorage, KeyValueStorage, SessionStore};
use crate::stores::{
    AdminStore, AuthStore, CampaignStore, InvestmentStore, KycStore, WalletStore, WithdrawalStore,
};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Dispatcher, session and containers, wired together.
pub struct AppContext {
    pub session: Arc<SessionStore>,
    pub navigator: Arc<dyn Navigator>,
    pub client: Arc<ApiClient>,
    pub auth: Arc<AuthStore>,
    pub campaigns: Arc<CampaignStore>,
    pub investments: Arc<InvestmentStore>,
    pub wallet: Arc<WalletStore>,
    pub withdrawals: Arc<WithdrawalStore>,
    pub kyc: Arc<KycStore>,
    pub admin: Arc<AdminStore>,
}

impl AppContext {
    /// Production wiring: reqwest transport, file-backed session, in-memory navigator.
    pub fn new(config: &ClientConfig) -> Result<Self, StartupError> {
        config.validate()?;
        let storage_dir = config.storage_dir()?;
        tracing::info!(
            api_base_url = %config.api_base_url,
            storage_dir = %storage_dir.display(),
            "Building application context"
        );

        let storage: Arc<dyn KeyValueStorage> = Arc::new(FileStorage::new(storage_dir.clone()));
        Ok(Self::with_parts(
            &config.api_base_url,
            Arc::new(ReqwestTransport::new()),
            storage,
            Arc::new(MemoryNavigator::new("/")),
        ))
    }

    /// Wire everything from explicit parts (tests, embedding UIs).
    pub fn with_parts(
        api_base_url: &str,
        transport: Arc<dyn Transport>,
        storage: Arc<dyn KeyValueStorage>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let session = Arc::new(SessionStore::new(storage));
        let client = Arc::new(ApiClient::new(
            api_base_url,
            transport,
            session.clone(),
            navigator.clone(),
        ));

        Self {
            auth: Arc::new(AuthStore::new(client.clone(), session.clone())),
            campaigns: Arc::new(CampaignStore::new(client.clone())),
            investments: Arc::new(InvestmentStore::new(client.clone())),
            wallet: Arc::new(WalletStore::new(client.clone())),
            withdrawals: Arc::new(WithdrawalStore::new(client.clone())),
            kyc: Arc::new(KycStore::new(client.clone())),
            admin: Arc::new(AdminStore::new(client.clone())),
            session,
            navigator,
            client,
        }
    }
}

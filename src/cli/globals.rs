use crate::authform::{
    notifier::{TerminalNavigator, TerminalNotifier},
    AuthClient, AuthConfig, AuthFormController, FileStore,
};
use anyhow::Result;
use std::{path::PathBuf, sync::Arc, time::Duration};

/// Settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub url: String,
    pub store_path: PathBuf,
    pub landing: String,
    pub timeout_secs: u64,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(url: String, store_path: PathBuf) -> Self {
        Self {
            url,
            store_path,
            landing: crate::authform::config::DEFAULT_LANDING.to_string(),
            timeout_secs: crate::authform::config::DEFAULT_TIMEOUT_SECS,
        }
    }

    /// # Errors
    /// Returns an error if the service URL is invalid.
    pub fn config(&self) -> Result<AuthConfig> {
        Ok(AuthConfig::new(&self.url)?
            .with_landing(&self.landing)
            .with_timeout(Duration::from_secs(self.timeout_secs)))
    }

    /// # Errors
    /// Returns an error if the service URL is invalid or the HTTP client cannot be built.
    pub fn client(&self) -> Result<AuthClient> {
        Ok(AuthClient::new(self.config()?)?)
    }

    /// Controller backed by the session file, printing to the terminal.
    ///
    /// # Errors
    /// Returns an error if the client cannot be built.
    pub fn controller(&self) -> Result<AuthFormController> {
        let client = self.client()?;
        let navigator = TerminalNavigator::new(client.config().base_url.as_str());

        Ok(AuthFormController::new(
            client,
            Arc::new(FileStore::new(&self.store_path)),
            Arc::new(TerminalNotifier),
            Arc::new(navigator),
        ))
    }
}

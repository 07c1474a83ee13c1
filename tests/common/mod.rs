#![allow(dead_code)]

use authform::authform::{
    AuthClient, AuthConfig, AuthFormController, CredentialStore, MemoryStore, Navigator, Notice,
    Notifier, StoreError,
};
use std::{
    io,
    net::TcpListener,
    sync::{Arc, Mutex},
};

pub fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().map(|n| n.clone()).unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice.clone());
        }
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    targets: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn targets(&self) -> Vec<String> {
        self.targets.lock().map(|t| t.clone()).unwrap_or_default()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: &str) {
        if let Ok(mut targets) = self.targets.lock() {
            targets.push(target.to_string());
        }
    }
}

/// Store whose writes always fail; reads see the seeded entries.
#[derive(Default)]
pub struct ReadOnlyStore {
    pub inner: MemoryStore,
}

impl ReadOnlyStore {
    fn rejected() -> StoreError {
        StoreError::Io {
            path: "session.json".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        }
    }
}

impl CredentialStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(Self::rejected())
    }

    fn set_many(&self, _entries: &[(&str, &str)]) -> Result<(), StoreError> {
        Err(Self::rejected())
    }

    fn clear(&self, _key: &str) -> Result<(), StoreError> {
        Err(Self::rejected())
    }
}

pub struct Harness {
    pub controller: AuthFormController,
    pub store: Arc<MemoryStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
}

impl Harness {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = AuthClient::new(AuthConfig::new(base_url)?)?;
        let store = Arc::new(MemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let navigator = Arc::new(RecordingNavigator::default());

        let controller = AuthFormController::new(
            client,
            store.clone(),
            notifier.clone(),
            navigator.clone(),
        );

        Ok(Self {
            controller,
            store,
            notifier,
            navigator,
        })
    }

    /// The single notice of a finished submission.
    pub fn only_notice(&self) -> anyhow::Result<Notice> {
        let notices = self.notifier.notices();
        match notices.as_slice() {
            [notice] => Ok(notice.clone()),
            other => anyhow::bail!("expected exactly one notice, got {other:?}"),
        }
    }
}

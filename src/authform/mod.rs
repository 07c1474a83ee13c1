pub mod api;
pub mod config;
pub mod controller;
pub mod credentials;
pub mod errors;
pub mod form;
pub mod notifier;
pub mod probe;
pub mod response;
pub mod storage;

pub use self::api::{ApiResponse, AuthClient};
pub use self::config::AuthConfig;
pub use self::controller::{AuthFormController, Outcome};
pub use self::credentials::Credentials;
pub use self::errors::{AuthError, Flow, StoreError, ValidationError};
pub use self::form::{FormKind, SubmitEvent};
pub use self::notifier::{Navigator, Notice, NoticeLevel, Notifier};
pub use self::storage::{CredentialStore, FileStore, MemoryStore};

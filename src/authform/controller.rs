//! `AuthFormController` wires the login and signup forms to the
//! authentication service. Each submission is independent: validate, send at
//! most one request, interpret the response, then notify (and on success
//! store/navigate). There are no retries; the user resubmits.

use crate::authform::{
    api::AuthClient,
    config::{LOGIN_PATH, SIGNUP_PATH},
    credentials::{validate_login, validate_signup, LoginSubmission},
    errors::{AuthError, Flow, ValidationError},
    form::{FormKind, SubmitEvent},
    notifier::{Navigator, Notice, Notifier},
    response::{interpret_login, interpret_signup},
    storage::{CredentialStore, TOKEN_KEY, USERNAME_KEY},
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const SIGNUP_SUCCESS: &str = "Account created successfully! Please log in.";

/// Terminal state of one submission.
#[derive(Debug)]
pub enum Outcome {
    Aborted(ValidationError),
    LoggedIn { username: String },
    SignedUp,
    Failed(AuthError),
}

impl Outcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::LoggedIn { .. } | Self::SignedUp)
    }
}

pub struct AuthFormController {
    client: AuthClient,
    store: Arc<dyn CredentialStore>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl AuthFormController {
    #[must_use]
    pub fn new(
        client: AuthClient,
        store: Arc<dyn CredentialStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            client,
            store,
            notifier,
            navigator,
        }
    }

    /// Routes a submission to the handler registered for its form.
    /// Submissions of other forms are ignored.
    pub async fn dispatch(&self, event: &mut SubmitEvent) -> Option<Outcome> {
        match event.kind() {
            Some(FormKind::Login) => Some(self.handle_login(event).await),
            Some(FormKind::Signup) => Some(self.handle_signup(event).await),
            None => {
                debug!("no handler for form {}", event.form_id());
                None
            }
        }
    }

    /// Handles submissions until the sending side closes.
    pub async fn run(&self, mut events: mpsc::Receiver<SubmitEvent>) {
        while let Some(mut event) = events.recv().await {
            self.dispatch(&mut event).await;
        }
        debug!("form event source closed");
    }

    #[instrument(skip_all)]
    pub async fn handle_login(&self, event: &mut SubmitEvent) -> Outcome {
        event.prevent_default();
        info!("login form submitted");

        let submission = match validate_login(event) {
            Ok(submission) => submission,
            Err(err) => return self.abort(err),
        };

        info!(
            username = %submission.username,
            password_len = submission.credentials.password_len(),
            "attempting login"
        );

        match self.login(&submission).await {
            Ok(()) => {
                info!("login successful");
                self.notifier.notify(&Notice::success(LOGIN_SUCCESS));
                self.navigator.navigate(&self.client.config().landing);
                Outcome::LoggedIn {
                    username: submission.username,
                }
            }
            Err(err) => self.fail(Flow::Login, err),
        }
    }

    #[instrument(skip_all)]
    pub async fn handle_signup(&self, event: &mut SubmitEvent) -> Outcome {
        event.prevent_default();
        info!("signup form submitted");

        let credentials = match validate_signup(event) {
            Ok(credentials) => credentials,
            Err(err) => return self.abort(err),
        };

        info!(
            username = %credentials.username,
            password_len = credentials.password_len(),
            "attempting signup"
        );

        let result = match self.client.post_json(SIGNUP_PATH, &credentials).await {
            Ok(response) => interpret_signup(&response),
            Err(err) => Err(err),
        };

        match result {
            Ok(()) => {
                info!("signup successful");
                self.notifier.notify(&Notice::success(SIGNUP_SUCCESS));
                self.navigator.navigate(&self.client.config().landing);
                Outcome::SignedUp
            }
            Err(err) => self.fail(Flow::Signup, err),
        }
    }

    async fn login(&self, submission: &LoginSubmission) -> Result<(), AuthError> {
        let response = self
            .client
            .post_json(LOGIN_PATH, &submission.credentials)
            .await?;
        let token = interpret_login(&response)?;

        self.store
            .set_many(&[
                (TOKEN_KEY, token.as_str()),
                (USERNAME_KEY, submission.username.as_str()),
            ])?;

        Ok(())
    }

    fn abort(&self, err: ValidationError) -> Outcome {
        warn!("submission aborted: {}", err);
        self.notifier.notify(&Notice::failure(err.to_string()));
        Outcome::Aborted(err)
    }

    fn fail(&self, flow: Flow, err: AuthError) -> Outcome {
        match &err {
            AuthError::InvalidResponse { status, .. } => {
                error!("{} response is not valid JSON (status {})", flow, status);
            }
            AuthError::InvalidCredentials(reason) => {
                error!("401 Unauthorized, invalid credentials: {}", reason);
            }
            AuthError::Rejected {
                status, message, ..
            } => {
                error!("{} failed with status {}: {}", flow, status, message);
            }
            AuthError::Network(message) => error!("{} network error: {}", flow, message),
            AuthError::Request(message) => error!("{} request error: {}", flow, message),
            AuthError::Storage(source) => error!("{} storage error: {}", flow, source),
        }

        self.notifier.notify(&Notice::failure(err.to_string()));
        Outcome::Failed(err)
    }
}

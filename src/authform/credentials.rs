//! Credentials collected from the login and signup forms, and the client-side
//! checks that must pass before anything is sent. Fields are trimmed; the
//! username is lowercased for transmission while the entered form is kept for
//! storage.

use crate::authform::{
    errors::ValidationError,
    form::{
        SubmitEvent, LOGIN_PASSWORD_FIELD, LOGIN_USERNAME_FIELD, SIGNUP_CONFIRM_FIELD,
        SIGNUP_PASSWORD_FIELD, SIGNUP_USERNAME_FIELD,
    },
};
use secrecy::{ExposeSecret, SecretString};
use serde::{ser::SerializeStruct, Serialize, Serializer};

/// Request body for `/login` and `/signup`.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    /// Normalizes the username for transmission; the password is kept as is.
    #[must_use]
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_lowercase(),
            password: SecretString::from(password.to_string()),
        }
    }

    #[must_use]
    pub fn password_len(&self) -> usize {
        self.password.expose_secret().chars().count()
    }
}

impl Serialize for Credentials {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Credentials", 2)?;
        state.serialize_field("username", &self.username)?;
        state.serialize_field("password", self.password.expose_secret())?;
        state.end()
    }
}

/// A validated login: the username as entered plus the wire credentials.
#[derive(Clone, Debug)]
pub struct LoginSubmission {
    pub username: String,
    pub credentials: Credentials,
}

/// Reads and checks the login form fields.
///
/// # Errors
/// `MissingElements` if a field is absent, `MissingLoginFields` if either is blank.
pub fn validate_login(event: &SubmitEvent) -> Result<LoginSubmission, ValidationError> {
    let (Some(username), Some(password)) = (
        event.field(LOGIN_USERNAME_FIELD),
        event.field(LOGIN_PASSWORD_FIELD),
    ) else {
        return Err(ValidationError::MissingElements);
    };

    let username = username.trim();
    let password = password.trim();

    if username.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingLoginFields);
    }

    Ok(LoginSubmission {
        username: username.to_string(),
        credentials: Credentials::new(username, password),
    })
}

/// Reads and checks the signup form fields. The confirmation never leaves
/// this function.
///
/// # Errors
/// `MissingElements`, `MissingSignupFields`, or `PasswordMismatch`.
pub fn validate_signup(event: &SubmitEvent) -> Result<Credentials, ValidationError> {
    let (Some(username), Some(password), Some(confirm)) = (
        event.field(SIGNUP_USERNAME_FIELD),
        event.field(SIGNUP_PASSWORD_FIELD),
        event.field(SIGNUP_CONFIRM_FIELD),
    ) else {
        return Err(ValidationError::MissingElements);
    };

    let username = username.trim();
    let password = password.trim();
    let confirm = confirm.trim();

    if username.is_empty() || password.is_empty() || confirm.is_empty() {
        return Err(ValidationError::MissingSignupFields);
    }

    if password.as_bytes() != confirm.as_bytes() {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(Credentials::new(username, password))
}

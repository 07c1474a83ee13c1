//! Abstract form submissions. A `SubmitEvent` carries the id of the submitted
//! form and the current values of the fields it contains; a field that is not
//! part of the form is simply absent.

use std::collections::BTreeMap;

pub const LOGIN_FORM_ID: &str = "loginForm";
pub const SIGNUP_FORM_ID: &str = "signupForm";

pub const LOGIN_USERNAME_FIELD: &str = "username";
pub const LOGIN_PASSWORD_FIELD: &str = "password";
pub const SIGNUP_USERNAME_FIELD: &str = "new-username";
pub const SIGNUP_PASSWORD_FIELD: &str = "new-password";
pub const SIGNUP_CONFIRM_FIELD: &str = "confirm-password";

/// The forms the controller listens on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Signup,
}

impl FormKind {
    #[must_use]
    pub fn from_form_id(form_id: &str) -> Option<Self> {
        match form_id {
            LOGIN_FORM_ID => Some(Self::Login),
            SIGNUP_FORM_ID => Some(Self::Signup),
            _ => None,
        }
    }

    #[must_use]
    pub const fn form_id(self) -> &'static str {
        match self {
            Self::Login => LOGIN_FORM_ID,
            Self::Signup => SIGNUP_FORM_ID,
        }
    }
}

#[derive(Clone, Default)]
pub struct SubmitEvent {
    form_id: String,
    fields: BTreeMap<String, String>,
    default_prevented: bool,
}

impl SubmitEvent {
    #[must_use]
    pub fn new(form_id: &str) -> Self {
        Self {
            form_id: form_id.to_string(),
            ..Self::default()
        }
    }

    /// A login form submission with both fields present.
    #[must_use]
    pub fn login(username: &str, password: &str) -> Self {
        Self::new(LOGIN_FORM_ID)
            .with_field(LOGIN_USERNAME_FIELD, username)
            .with_field(LOGIN_PASSWORD_FIELD, password)
    }

    #[must_use]
    pub fn signup(username: &str, password: &str, confirm: &str) -> Self {
        Self::new(SIGNUP_FORM_ID)
            .with_field(SIGNUP_USERNAME_FIELD, username)
            .with_field(SIGNUP_PASSWORD_FIELD, password)
            .with_field(SIGNUP_CONFIRM_FIELD, confirm)
    }

    #[must_use]
    pub fn with_field(mut self, field_id: &str, value: &str) -> Self {
        self.fields.insert(field_id.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    #[must_use]
    pub fn kind(&self) -> Option<FormKind> {
        FormKind::from_form_id(&self.form_id)
    }

    /// Current value of `field_id`, `None` if the form has no such field.
    #[must_use]
    pub fn field(&self, field_id: &str) -> Option<&str> {
        self.fields.get(field_id).map(String::as_str)
    }

    /// Suppresses the default form action (a full page submit).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

// Field values may hold passwords.
impl std::fmt::Debug for SubmitEvent {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("SubmitEvent")
            .field("form_id", &self.form_id)
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .field("default_prevented", &self.default_prevented)
            .finish()
    }
}

//! Interpretation of `/login` and `/signup` responses. The body is parsed
//! before the status code is looked at: a non-JSON body is terminal whatever
//! the status.

use crate::authform::{
    api::ApiResponse,
    errors::{AuthError, Flow},
};
use serde_json::Value;

pub const DEFAULT_INVALID_CREDENTIALS: &str = "Username or password incorrect";

/// Returns the field as display text if it is truthy: present, not null,
/// not `false`, not zero, not an empty string.
#[must_use]
pub fn truthy_text(data: &Value, key: &str) -> Option<String> {
    match data.get(key)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Server-supplied reason: `error` first, then `message`.
#[must_use]
pub fn server_reason(data: &Value) -> Option<String> {
    truthy_text(data, "error").or_else(|| truthy_text(data, "message"))
}

/// Extracts the token from a login response.
///
/// # Errors
/// `InvalidResponse` for non-JSON bodies, `InvalidCredentials` on 401,
/// `Rejected` for anything else that is not a 200 carrying a token.
pub fn interpret_login(response: &ApiResponse) -> Result<String, AuthError> {
    let data = response.json()?;

    if response.status == 401 {
        return Err(AuthError::InvalidCredentials(
            server_reason(&data).unwrap_or_else(|| DEFAULT_INVALID_CREDENTIALS.to_string()),
        ));
    }

    if response.status == 200 {
        if let Some(token) = truthy_text(&data, "token") {
            return Ok(token);
        }
    }

    Err(rejected(Flow::Login, response.status, &data))
}

/// Checks a signup response.
///
/// # Errors
/// `InvalidResponse` for non-JSON bodies, `Rejected` for statuses other than 200/201.
pub fn interpret_signup(response: &ApiResponse) -> Result<(), AuthError> {
    let data = response.json()?;

    match response.status {
        200 | 201 => Ok(()),
        status => Err(rejected(Flow::Signup, status, &data)),
    }
}

fn rejected(flow: Flow, status: u16, data: &Value) -> AuthError {
    AuthError::Rejected {
        flow,
        status,
        message: server_reason(data).unwrap_or_else(|| flow.default_failure().to_string()),
    }
}

//! # Authform (login & signup client)
//!
//! `authform` submits login and signup credentials to a token-issuing
//! authentication service and turns each response into a single user-facing
//! notice.
//!
//! ## Flows
//!
//! - **Login:** `POST /login` with `{username, password}`. A `200` carrying a
//!   `token` stores the token and the entered username, then navigates to the
//!   landing resource. A `401` reports invalid credentials.
//! - **Signup:** `POST /signup` with the same body. `200`/`201` navigates to the
//!   landing resource; no token is issued at signup.
//!
//! Response bodies are always read as text and parsed as JSON before the status
//! code is interpreted, so a non-JSON body is reported as an invalid response
//! regardless of status.
//!
//! The page surfaces (form events, alerts, navigation, local storage) are
//! traits in [`authform`], which keeps the flows testable without a UI runtime.
//! Passwords are held as `SecretString` and must never be logged.

pub mod authform;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

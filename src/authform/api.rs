//! HTTP access to the authentication service. Responses are returned raw
//! (status and text body) because the form flows must inspect the body
//! before trusting the status code. The client never stores credentials; it
//! only sends what callers hand it.

use crate::{
    authform::{config::AuthConfig, errors::AuthError},
    APP_USER_AGENT,
};
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    Client,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

const JSON_CONTENT_TYPE: &str = "application/json";

/// A fully read HTTP response.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// Parses the body as JSON.
    ///
    /// # Errors
    /// Returns `InvalidResponse` carrying the raw body when it is not JSON.
    pub fn json(&self) -> Result<Value, AuthError> {
        serde_json::from_str(&self.body).map_err(|err| {
            debug!("response is not JSON: {}", err);
            AuthError::InvalidResponse {
                status: self.status,
                body: self.body.clone(),
            }
        })
    }
}

#[derive(Clone, Debug)]
pub struct AuthClient {
    http: Client,
    config: AuthConfig,
}

impl AuthClient {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: AuthConfig) -> Result<Self, AuthError> {
        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|err| AuthError::Request(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self { http, config })
    }

    #[must_use]
    pub const fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Posts a JSON body and reads the full response as text.
    ///
    /// # Errors
    /// `Request` if the body cannot be encoded, `Network` on transport failure.
    #[instrument(skip(self, body))]
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, AuthError> {
        let url = self.config.endpoint(path);
        let payload = serde_json::to_string(body)
            .map_err(|err| AuthError::Request(format!("Failed to encode request: {err}")))?;

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .body(payload)
            .send()
            .await
            .map_err(map_request_error)?;

        read_response(response).await
    }

    /// Issues a bare GET and reads the full response as text.
    ///
    /// # Errors
    /// `Network` on transport failure.
    #[instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<ApiResponse, AuthError> {
        let url = self.config.endpoint(path);
        let response = self.http.get(&url).send().await.map_err(map_request_error)?;

        read_response(response).await
    }
}

async fn read_response(response: reqwest::Response) -> Result<ApiResponse, AuthError> {
    let status = response.status().as_u16();
    debug!("response status: {}", status);
    debug!("response headers: {:?}", response.headers());

    let body = response.text().await.map_err(map_request_error)?;

    debug!("raw response text: {}", body);

    Ok(ApiResponse { status, body })
}

/// Maps transport errors into user-facing `AuthError` variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> AuthError {
    if err.is_timeout() {
        AuthError::Network("Request timed out. Please try again.".to_string())
    } else {
        AuthError::Network(format!("Unable to reach the server: {err}"))
    }
}

//! Manual diagnostics against the authentication service. Probes only log;
//! they never notify, store, or navigate, and their errors are swallowed.

use crate::authform::{
    api::AuthClient,
    config::{LOGIN_PATH, ROOT_PATH},
    credentials::Credentials,
};
use serde_json::Value;
use tracing::{error, info};

pub const DUMMY_USERNAME: &str = "test";
pub const DUMMY_PASSWORD: &str = "test123";

#[derive(Clone, Debug)]
pub struct ProbeReport {
    pub status: u16,
    pub body: String,
    pub json: Option<Value>,
}

/// GETs the service root and logs status and body.
pub async fn test_server_connection(client: &AuthClient) -> Option<ProbeReport> {
    info!("testing server connection...");

    match client.get(ROOT_PATH).await {
        Ok(response) => {
            info!("server test response: {}", response.status);
            info!("server test body: {}", response.body);
            let json = response.json().ok();
            Some(ProbeReport {
                status: response.status,
                body: response.body,
                json,
            })
        }
        Err(err) => {
            error!("server connection test failed: {}", err);
            None
        }
    }
}

/// POSTs fixed dummy credentials to the login endpoint and logs the outcome.
pub async fn test_dummy_login(client: &AuthClient) -> Option<ProbeReport> {
    info!("testing with dummy credentials...");
    let credentials = Credentials::new(DUMMY_USERNAME, DUMMY_PASSWORD);

    match client.post_json(LOGIN_PATH, &credentials).await {
        Ok(response) => {
            info!("dummy login response: {}", response.status);
            info!("dummy login body: {}", response.body);

            let json = response.json().ok();
            match &json {
                Some(parsed) => info!("dummy login parsed: {}", parsed),
                None => info!("response is not JSON"),
            }

            Some(ProbeReport {
                status: response.status,
                body: response.body,
                json,
            })
        }
        Err(err) => {
            error!("dummy login test failed: {}", err);
            None
        }
    }
}

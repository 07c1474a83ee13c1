use crate::{authform::probe, cli::globals::GlobalArgs};
use anyhow::Result;
use tracing::debug;

/// Runs the connection probe. Probe failures are logged, not returned.
/// # Errors
/// Returns an error if the client cannot be configured.
pub async fn ping(globals: &GlobalArgs) -> Result<()> {
    let client = globals.client()?;

    if let Some(report) = probe::test_server_connection(&client).await {
        debug!("ping finished with status {}", report.status);
    }

    Ok(())
}

/// Runs the dummy-login probe. Probe failures are logged, not returned.
/// # Errors
/// Returns an error if the client cannot be configured.
pub async fn dummy_login(globals: &GlobalArgs) -> Result<()> {
    let client = globals.client()?;

    if let Some(report) = probe::test_dummy_login(&client).await {
        debug!("dummy login finished with status {}", report.status);
    }

    Ok(())
}

use crate::cli::actions::{forms, probe, Action};
use anyhow::Result;

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Login(args) => forms::login(args).await,
        Action::Signup(args) => forms::signup(args).await,
        Action::Ping(globals) => probe::ping(&globals).await,
        Action::DummyLogin(globals) => probe::dummy_login(&globals).await,
    }
}

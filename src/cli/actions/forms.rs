//! Executors for the form subcommands. Each builds one submission, hands it
//! to the controller, and fails the process when the flow does not succeed.
//! The controller has already shown the notice by then.

use crate::{
    authform::{Outcome, SubmitEvent},
    cli::globals::GlobalArgs,
};
use anyhow::{bail, Result};
use secrecy::{ExposeSecret, SecretString};

#[derive(Debug)]
pub struct LoginArgs {
    pub globals: GlobalArgs,
    pub username: String,
    pub password: SecretString,
}

#[derive(Debug)]
pub struct SignupArgs {
    pub globals: GlobalArgs,
    pub username: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

/// # Errors
/// Returns an error if the client cannot be configured or the login fails.
pub async fn login(args: LoginArgs) -> Result<()> {
    let controller = args.globals.controller()?;
    let mut event = SubmitEvent::login(&args.username, args.password.expose_secret());

    finish("login", controller.dispatch(&mut event).await)
}

/// # Errors
/// Returns an error if the client cannot be configured or the signup fails.
pub async fn signup(args: SignupArgs) -> Result<()> {
    let controller = args.globals.controller()?;
    let mut event = SubmitEvent::signup(
        &args.username,
        args.password.expose_secret(),
        args.confirm_password.expose_secret(),
    );

    finish("signup", controller.dispatch(&mut event).await)
}

fn finish(flow: &str, outcome: Option<Outcome>) -> Result<()> {
    match outcome {
        Some(outcome) if outcome.is_success() => Ok(()),
        Some(_) => bail!("{flow} was not completed"),
        None => bail!("no handler for the {flow} form"),
    }
}

//! Subcommands that submit the login and signup forms. Omitted fields are
//! submitted empty so the usual validation notices apply.

use clap::{Arg, ArgMatches, Command};
use secrecy::SecretString;

pub const CMD_LOGIN: &str = "login";
pub const CMD_SIGNUP: &str = "signup";

pub const ARG_USERNAME: &str = "username";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_CONFIRM_PASSWORD: &str = "confirm-password";

fn username_arg() -> Arg {
    Arg::new(ARG_USERNAME)
        .long("username")
        .help("Account username (sent lowercased)")
        .env("AUTHFORM_USERNAME")
}

fn password_arg() -> Arg {
    Arg::new(ARG_PASSWORD)
        .long("password")
        .help("Account password")
        .env("AUTHFORM_PASSWORD")
        .hide_env_values(true)
}

#[must_use]
pub fn login() -> Command {
    Command::new(CMD_LOGIN)
        .about("Submit the login form and store the issued token")
        .arg(username_arg())
        .arg(password_arg())
}

#[must_use]
pub fn signup() -> Command {
    Command::new(CMD_SIGNUP)
        .about("Submit the signup form")
        .arg(username_arg())
        .arg(password_arg())
        .arg(
            Arg::new(ARG_CONFIRM_PASSWORD)
                .long("confirm-password")
                .help("Password confirmation, must match --password exactly")
                .env("AUTHFORM_CONFIRM_PASSWORD")
                .hide_env_values(true),
        )
}

/// Field values read from a form subcommand.
#[derive(Debug)]
pub struct Fields {
    pub username: String,
    pub password: SecretString,
    pub confirm_password: Option<SecretString>,
}

impl Fields {
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        let secret = |id: &str| {
            matches
                .try_get_one::<String>(id)
                .ok()
                .flatten()
                .map(|value| SecretString::from(value.clone()))
        };

        Self {
            username: matches
                .get_one::<String>(ARG_USERNAME)
                .cloned()
                .unwrap_or_default(),
            password: secret(ARG_PASSWORD).unwrap_or_else(|| SecretString::from(String::new())),
            confirm_password: secret(ARG_CONFIRM_PASSWORD),
        }
    }
}

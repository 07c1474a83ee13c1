//! Arguments describing the authentication service and the local session store.

use crate::authform::config::{DEFAULT_BASE_URL, DEFAULT_LANDING, DEFAULT_TIMEOUT_SECS};
use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;

pub const ARG_URL: &str = "url";
pub const ARG_STORE: &str = "store";
pub const ARG_LANDING: &str = "landing";
pub const ARG_TIMEOUT: &str = "timeout";

pub const DEFAULT_STORE_PATH: &str = ".authform/session.json";
const DEFAULT_TIMEOUT_ARG: &str = "10";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_URL)
                .short('u')
                .long("url")
                .help("Authentication service base URL")
                .default_value(DEFAULT_BASE_URL)
                .env("AUTHFORM_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_STORE)
                .long("store")
                .help("File where the token and username are kept after login")
                .default_value(DEFAULT_STORE_PATH)
                .env("AUTHFORM_STORE")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new(ARG_LANDING)
                .long("landing")
                .help("Resource to continue to after a successful login or signup")
                .default_value(DEFAULT_LANDING)
                .env("AUTHFORM_LANDING")
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .long("timeout")
                .help("Request timeout in seconds")
                .default_value(DEFAULT_TIMEOUT_ARG)
                .env("AUTHFORM_TIMEOUT")
                .global(true)
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
}

#[derive(Debug)]
pub struct Options {
    pub url: String,
    pub store_path: PathBuf,
    pub landing: String,
    pub timeout_secs: u64,
}

impl Options {
    /// # Errors
    /// Returns an error if a defaulted argument is somehow missing.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        Ok(Self {
            url: matches
                .get_one::<String>(ARG_URL)
                .cloned()
                .context("missing required argument: --url")?,
            store_path: matches
                .get_one::<PathBuf>(ARG_STORE)
                .cloned()
                .context("missing required argument: --store")?,
            landing: matches
                .get_one::<String>(ARG_LANDING)
                .cloned()
                .unwrap_or_else(|| DEFAULT_LANDING.to_string()),
            timeout_secs: matches
                .get_one::<u64>(ARG_TIMEOUT)
                .copied()
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }
}

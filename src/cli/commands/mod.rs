pub mod forms;
pub mod logging;
pub mod service;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    ColorChoice, Command,
};

pub const CMD_PING: &str = "ping";
pub const CMD_DUMMY_LOGIN: &str = "dummy-login";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("authform")
        .about("Login and signup client")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(forms::login())
        .subcommand(forms::signup())
        .subcommand(Command::new(CMD_PING).about("GET the service root and log the response"))
        .subcommand(
            Command::new(CMD_DUMMY_LOGIN)
                .about("POST fixed test credentials to /login and log the response"),
        );

    let command = service::with_args(command);
    logging::with_args(command)
}

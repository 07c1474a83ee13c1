//! Maps validated CLI matches to an `Action`.

use crate::cli::{
    actions::{forms, Action},
    commands::{self, forms as form_args, service},
    globals::GlobalArgs,
};
use anyhow::{anyhow, Result};
use secrecy::SecretString;

fn globals(matches: &clap::ArgMatches) -> Result<GlobalArgs> {
    let options = service::Options::parse(matches)?;
    let mut globals = GlobalArgs::new(options.url, options.store_path);
    globals.landing = options.landing;
    globals.timeout_secs = options.timeout_secs;
    Ok(globals)
}

/// # Errors
/// Returns an error if the subcommand is unknown or its arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let (name, sub_m) = matches
        .subcommand()
        .ok_or_else(|| anyhow!("missing subcommand"))?;

    let globals = globals(sub_m)?;

    match name {
        form_args::CMD_LOGIN => {
            let fields = form_args::Fields::parse(sub_m);
            Ok(Action::Login(forms::LoginArgs {
                globals,
                username: fields.username,
                password: fields.password,
            }))
        }
        form_args::CMD_SIGNUP => {
            let fields = form_args::Fields::parse(sub_m);
            Ok(Action::Signup(forms::SignupArgs {
                globals,
                username: fields.username,
                password: fields.password,
                confirm_password: fields
                    .confirm_password
                    .unwrap_or_else(|| SecretString::from(String::new())),
            }))
        }
        commands::CMD_PING => Ok(Action::Ping(globals)),
        commands::CMD_DUMMY_LOGIN => Ok(Action::DummyLogin(globals)),
        other => Err(anyhow!("unknown subcommand: {other}")),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn action(args: &[&str]) -> Action {
        temp_env::with_vars(
            [
                ("AUTHFORM_URL", None::<&str>),
                ("AUTHFORM_USERNAME", None),
                ("AUTHFORM_PASSWORD", None),
                ("AUTHFORM_CONFIRM_PASSWORD", None),
            ],
            || {
                let matches = commands::new().get_matches_from(args.iter().copied());
                handler(&matches).unwrap()
            },
        )
    }

    #[test]
    fn login_action_carries_fields() {
        let action = action(&[
            "authform",
            "login",
            "--username",
            "Alice",
            "--password",
            "pw",
            "--url",
            "http://auth.local",
        ]);

        match action {
            Action::Login(args) => {
                assert_eq!(args.username, "Alice");
                assert_eq!(args.password.expose_secret(), "pw");
                assert_eq!(args.globals.url, "http://auth.local");
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn signup_action_defaults_confirmation_to_empty() {
        let action = action(&["authform", "signup", "--username", "bob", "--password", "pw"]);

        match action {
            Action::Signup(args) => {
                assert_eq!(args.username, "bob");
                assert_eq!(args.confirm_password.expose_secret(), "");
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn probe_actions() {
        assert!(matches!(action(&["authform", "ping"]), Action::Ping(_)));
        assert!(matches!(
            action(&["authform", "dummy-login"]),
            Action::DummyLogin(_)
        ));
    }
}

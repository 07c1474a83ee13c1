//! Local diagnostic log. Everything goes to stderr so notices on stdout stay
//! readable; `RUST_LOG` replaces both the verbosity flag and the default
//! HTTP stack directives.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

const HTTP_STACK_DIRECTIVES: [&str; 3] = ["hyper=error", "hyper_util=error", "reqwest=warn"];

/// Initialize logging
///
/// # Errors
///
/// Returns an error if a filter directive is invalid or a subscriber is already set
pub fn init(verbosity_level: Option<Level>) -> Result<()> {
    let verbosity_level = verbosity_level.unwrap_or(Level::ERROR);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_target(false);

    let filter = build_filter(
        verbosity_level,
        std::env::var(EnvFilter::DEFAULT_ENV).is_ok(),
    )?;

    let subscriber = Registry::default().with(fmt_layer).with(filter);
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

fn build_filter(verbosity_level: Level, from_env: bool) -> Result<EnvFilter> {
    let mut filter = EnvFilter::builder()
        .with_default_directive(verbosity_level.into())
        .from_env_lossy();

    if !from_env {
        for directive in HTTP_STACK_DIRECTIVES {
            filter = filter.add_directive(directive.parse()?);
        }
    }

    Ok(filter)
}

//! User-facing feedback. Every terminal path of a form flow produces exactly
//! one `Notice`; successful flows additionally navigate to the landing
//! resource.

use std::fmt;
use std::io::Write;
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Failure,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Failure,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.level == NoticeLevel::Success
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = match self.level {
            NoticeLevel::Success => "✅",
            NoticeLevel::Failure => "❌",
        };
        write!(formatter, "{mark} {}", self.message)
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, target: &str);
}

/// Prints notices to the terminal: successes on stdout, failures on stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: &Notice) {
        // Closed pipes are ignored.
        let _ = match notice.level {
            NoticeLevel::Success => writeln!(std::io::stdout(), "{notice}"),
            NoticeLevel::Failure => writeln!(std::io::stderr(), "{notice}"),
        };
    }
}

/// Resolves the landing resource against the service base and prints it.
#[derive(Clone, Debug)]
pub struct TerminalNavigator {
    base_url: String,
}

impl TerminalNavigator {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn resolve(&self, target: &str) -> String {
        if target.starts_with("http://") || target.starts_with("https://") {
            target.to_string()
        } else {
            format!("{}/{}", self.base_url, target.trim_start_matches('/'))
        }
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, target: &str) {
        let location = self.resolve(target);
        info!("navigating to {}", location);
        let _ = writeln!(std::io::stdout(), "→ {location}");
    }
}

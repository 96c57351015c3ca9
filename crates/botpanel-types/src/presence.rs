use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Whether a bot's process is currently running.
///
/// Distinct from lifecycle state: a bot can be configured and enabled yet
/// offline because nothing has started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Online,
    Offline,
}

impl Presence {
    /// Map a raw running flag onto a presence value.
    pub fn from_running(is_running: bool) -> Self {
        if is_running {
            Presence::Online
        } else {
            Presence::Offline
        }
    }

    /// Render the one-line status sentence shown in the panel console.
    ///
    /// The name is embedded unmodified -- empty or whitespace-only names
    /// simply produce the template with an empty substitution.
    ///
    /// # Examples
    ///
    /// ```
    /// use botpanel_types::presence::Presence;
    ///
    /// assert_eq!(
    ///     Presence::Online.status_line("AlphaBot"),
    ///     "AlphaBot is currently ONLINE."
    /// );
    /// assert_eq!(Presence::Offline.status_line("AlphaBot"), "AlphaBot is OFFLINE.");
    /// ```
    pub fn status_line(&self, name: &str) -> String {
        match self {
            Presence::Online => format!("{name} is currently ONLINE."),
            Presence::Offline => format!("{name} is OFFLINE."),
        }
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Presence::Online => write!(f, "online"),
            Presence::Offline => write!(f, "offline"),
        }
    }
}

impl FromStr for Presence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "online" => Ok(Presence::Online),
            "offline" => Ok(Presence::Offline),
            other => Err(format!("invalid presence: '{other}'")),
        }
    }
}

/// Render a bot's status sentence from its name and running flag.
///
/// Accepts any name as-is, including the empty string. No validation,
/// no side effects.
///
/// # Examples
///
/// ```
/// use botpanel_types::presence::format_bot_status;
///
/// assert_eq!(format_bot_status("AlphaBot", true), "AlphaBot is currently ONLINE.");
/// assert_eq!(format_bot_status("AlphaBot", false), "AlphaBot is OFFLINE.");
/// ```
pub fn format_bot_status(name: &str, is_running: bool) -> String {
    Presence::from_running(is_running).status_line(name)
}

/// Render the running-count label shown in the panel status bar.
///
/// # Examples
///
/// ```
/// use botpanel_types::presence::format_active_count;
///
/// assert_eq!(format_active_count(3), "Active Bots: 3");
/// ```
pub fn format_active_count(count: u64) -> String {
    format!("Active Bots: {count}")
}

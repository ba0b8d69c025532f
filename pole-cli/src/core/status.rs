use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Structural status of the pole.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, derive_more::Display)]
pub enum Status {
    #[default]
    #[display("OK")]
    #[serde(rename = "OK")]
    Ok,

    #[display("FAILED")]
    #[serde(rename = "FAILED")]
    Failed,
}

/// When the host should wake the pole up next.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NextEvent {
    /// No self-scheduled wake-up.
    Never,

    /// Wake up at the given time, for example when the repair crew is due.
    At(DateTime<Utc>),

    /// Stop the whole simulation right away.
    Halt,
}

impl Display for NextEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Never => write!(f, "never"),
            Self::At(at) => write!(f, "{}", at.format("%b %d %H:%M")),
            Self::Halt => write!(f, "halt"),
        }
    }
}

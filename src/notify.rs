use serde::Serialize;
use std::fmt;

use crate::error::DeskError;
use crate::models::Money;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A toast shown to the user after an action
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }

    /// User-facing text for a failed action.
    pub fn from_error(err: &DeskError, currency: &str) -> Self {
        match err {
            DeskError::InsufficientBalance {
                required,
                available,
            } => Self::error(format!(
                "Insufficient balance! Required: {}, available: {}",
                amount(*required, currency),
                amount(*available, currency)
            )),
            DeskError::InvalidFee { fee } => Self::error(format!(
                "Invalid fee: {}",
                amount(*fee, currency)
            )),
            DeskError::NotAgent { role } => Self::error(format!(
                "Only agents can review submissions (you are signed in as {role})"
            )),
            DeskError::InvalidCredentials => Self::error("Incorrect email or password"),
            DeskError::Store(err) => Self::error(format!("Could not load saved data: {err}")),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = match self.kind {
            NotificationKind::Success => "✅",
            NotificationKind::Error => "❌",
        };
        write!(f, "{} {}", mark, self.message)
    }
}

/// Formats an amount with its currency label, e.g. `15.50 JOD`.
pub fn amount(value: Money, currency: &str) -> String {
    format!("{value} {currency}")
}

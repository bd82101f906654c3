use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Sent,
    Received,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Sent => "sent",
            Direction::Received => "received",
        }
    }
}

/// One line of a listing's conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub direction: Direction,
}

impl ChatMessage {
    pub fn sent(text: impl Into<String>, sender: impl Into<String>) -> Self {
        Self::new(text, sender, Direction::Sent)
    }

    pub fn received(text: impl Into<String>, sender: impl Into<String>) -> Self {
        Self::new(text, sender, Direction::Received)
    }

    fn new(text: impl Into<String>, sender: impl Into<String>, direction: Direction) -> Self {
        Self {
            text: text.into(),
            sender: sender.into(),
            timestamp: Utc::now(),
            direction,
        }
    }
}

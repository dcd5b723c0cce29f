//! Invitation configuration with system defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default response window: 24 hours.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(86_400_000);

const DEFAULT_REQUEST_TEXT: &str = "{player} has invited you for a round of Game.";
const DEFAULT_REJECT_TEXT: &str = "The player denied your request for a round of Game.";
const DEFAULT_TIMEOUT_TEXT: &str = "Dropped the game as the player did not respond.";

/// Configuration bundle for one invitation. Immutable once the invitation
/// is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApproveConfig {
    pub accept_label: String,
    pub reject_label: String,
    /// Upper bound on how long the responder gets to answer.
    pub timeout: Duration,
    /// Whether the prompt body carries a responder mention.
    pub mention_responder: bool,
    pub request_text: String,
    pub reject_text: String,
    pub timeout_text: String,
    pub card: CardConfig,
}

impl Default for ApproveConfig {
    fn default() -> Self {
        Self {
            accept_label: "Accept".to_string(),
            reject_label: "Reject".to_string(),
            timeout: DEFAULT_TIMEOUT,
            mention_responder: false,
            request_text: DEFAULT_REQUEST_TEXT.to_string(),
            reject_text: DEFAULT_REJECT_TEXT.to_string(),
            timeout_text: DEFAULT_TIMEOUT_TEXT.to_string(),
            card: CardConfig::default(),
        }
    }
}

impl ApproveConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_labels(
        mut self,
        accept: impl Into<String>,
        reject: impl Into<String>,
    ) -> Self {
        self.accept_label = accept.into();
        self.reject_label = reject.into();
        self
    }

    pub fn with_mention_responder(mut self, mention: bool) -> Self {
        self.mention_responder = mention;
        self
    }
}

/// Card (embed) appearance. The request/reject variants fall back to the
/// base `title`/`color` when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub title: Option<String>,
    pub color: Option<u32>,
    pub request_title: Option<String>,
    pub request_color: Option<u32>,
    pub reject_title: Option<String>,
    pub reject_color: Option<u32>,
}

impl CardConfig {
    pub fn effective_request_title(&self) -> Option<&str> {
        self.request_title.as_deref().or(self.title.as_deref())
    }

    pub fn effective_request_color(&self) -> Option<u32> {
        self.request_color.or(self.color)
    }

    pub fn effective_reject_title(&self) -> Option<&str> {
        self.reject_title.as_deref().or(self.title.as_deref())
    }

    pub fn effective_reject_color(&self) -> Option<u32> {
        self.reject_color.or(self.color)
    }
}

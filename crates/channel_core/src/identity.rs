use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of one chat participant.
///
/// `tag` is the platform-unique handle (e.g. `alex#0421`), `username` the
/// display name. Both are immutable for the lifetime of an invitation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: Uuid,
    pub username: String,
    pub tag: String,
}

impl UserRef {
    pub fn new(username: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            tag: tag.into(),
        }
    }

    /// The platform mention form for this user.
    pub fn mention(&self) -> String {
        format!("<@!{}>", self.id)
    }
}

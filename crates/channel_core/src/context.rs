use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A parent conversation context (e.g. a guild channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelRef {
    pub id: Uuid,
}

impl ChannelRef {
    pub fn new() -> Self {
        Self { id: Uuid::new_v4() }
    }
}

impl Default for ChannelRef {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ChannelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Identifier of a temporary sub-context (thread) inside a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThreadId(pub Uuid);

impl ThreadId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ThreadId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A live, validated sub-context handle.
///
/// Only [`ContextOps::fetch_thread`](crate::ContextOps::fetch_thread)
/// produces one, so holding a `ThreadContext` already guarantees the target
/// accepts posts and deletion. There is no runtime "is this really a
/// thread" probing anywhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadContext {
    id: ThreadId,
    parent: ChannelRef,
}

impl ThreadContext {
    /// Transport adapters call this after validating the target on their
    /// side of the boundary.
    pub fn new(id: ThreadId, parent: ChannelRef) -> Self {
        Self { id, parent }
    }

    pub fn id(&self) -> ThreadId {
        self.id
    }

    pub fn parent(&self) -> ChannelRef {
        self.parent
    }
}

/// Reference to a message posted inside a thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRef {
    pub id: Uuid,
    pub thread_id: ThreadId,
}

impl MessageRef {
    pub fn new(thread_id: ThreadId) -> Self {
        Self {
            id: Uuid::new_v4(),
            thread_id,
        }
    }
}

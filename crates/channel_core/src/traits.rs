use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::context::{ChannelRef, MessageRef, ThreadContext, ThreadId};
use crate::error::ContextError;
use crate::message::{InteractionEvent, PromptContent};

/// The channel/thread collaborator surface the approval core consumes.
///
/// Implemented by transport adapters (one per chat platform). Every method
/// is a suspension point; none of them may block.
#[async_trait]
pub trait ContextOps: Send + Sync {
    /// Resolves a sub-context inside `parent`. A returned [`ThreadContext`]
    /// is guaranteed valid for posting and deletion.
    async fn fetch_thread(
        &self,
        parent: &ChannelRef,
        thread_id: ThreadId,
    ) -> Result<ThreadContext, ContextError>;

    /// Posts `content` into the thread and returns a reference to the new
    /// message.
    async fn post_message(
        &self,
        thread: &ThreadContext,
        content: PromptContent,
    ) -> Result<MessageRef, ContextError>;

    /// Replaces the content of an already posted message.
    async fn edit_message(
        &self,
        message: &MessageRef,
        content: PromptContent,
    ) -> Result<(), ContextError>;

    /// Deletes a sub-context and everything in it.
    async fn delete_thread(&self, thread_id: ThreadId) -> Result<(), ContextError>;

    /// Re-posts the rendered content of `source` (text plus rich
    /// attachments) into `destination` and returns the new message.
    async fn relocate_content(
        &self,
        source: &MessageRef,
        destination: &ChannelRef,
    ) -> Result<MessageRef, ContextError>;

    /// Acknowledges a button press so the platform UI stops showing a
    /// pending indicator. Must not change any conversation state.
    async fn acknowledge(&self, interaction: &InteractionEvent) -> Result<(), ContextError>;

    /// Subscribes to button presses on one posted prompt. The transport
    /// keeps delivering events until the receiver is dropped.
    fn interactions(&self, prompt: &MessageRef) -> mpsc::Receiver<InteractionEvent>;
}

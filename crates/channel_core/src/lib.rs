//! `channel_core` holds the channel, thread and message abstractions the
//! approval system talks to. The actual chat transport lives behind the
//! [`ContextOps`] trait; everything in this crate is platform-neutral.

// Declare the modules
pub mod context;
pub mod error;
pub mod identity;
pub mod message;
pub mod template;
pub mod traits;

// Re-export the public API
pub use context::{ChannelRef, MessageRef, ThreadContext, ThreadId};
pub use error::ContextError;
pub use identity::UserRef;
pub use message::{ActionButton, ButtonStyle, InteractionEvent, PromptCard, PromptContent};
pub use template::render_template;
pub use traits::ContextOps;

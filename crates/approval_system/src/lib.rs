//! `approval_system` drives one timed accept/reject invitation from prompt
//! to terminal outcome.
//!
//! An initiator invites a responder inside a private thread; the responder
//! accepts, rejects, or lets the offer expire. The [`ApprovalWorkflow`]
//! guarantees that exactly one terminal state is reached per
//! [`Invitation`], that thread teardown and lifecycle notification happen
//! exactly once, and that only setup failures ever surface to the caller.

// Declare the modules
pub mod collector;
pub mod config;
pub mod error;
pub mod events;
pub mod invitation;
pub mod workflow;

// Re-export the public API
pub use collector::{Outcome, ResponseCollector, ACTION_ACCEPT, ACTION_PREFIX, ACTION_REJECT};
pub use config::{ApproveConfig, CardConfig, DEFAULT_TIMEOUT};
pub use error::{SetupError, StateError};
pub use events::{LifecycleEvent, LifecycleNotifier};
pub use invitation::{Invitation, InvitationState};
pub use workflow::ApprovalWorkflow;

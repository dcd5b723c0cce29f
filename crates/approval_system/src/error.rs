//! Approval workflow error types

use channel_core::ContextError;
use thiserror::Error;

use crate::invitation::InvitationState;

/// Failures that abort a [`run`](crate::ApprovalWorkflow::run) before a
/// collector is attached. This is the only error type that crosses the
/// workflow boundary; every later failure is contained and logged.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("initiator and responder must be distinct identities")]
    SameParty,

    #[error("response timeout must be a positive duration")]
    InvalidTimeout,

    #[error("failed to resolve invitation thread: {0}")]
    Context(#[source] ContextError),

    #[error("failed to post invitation prompt: {0}")]
    Send(#[source] ContextError),
}

/// Guard error for the invitation state machine: a terminal state is never
/// re-entered or altered.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StateError {
    #[error("invitation already concluded as {0:?}")]
    AlreadyTerminal(InvitationState),
}

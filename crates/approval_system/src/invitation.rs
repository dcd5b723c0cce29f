//! One pending approval request and its state machine.

use channel_core::{ChannelRef, MessageRef, ThreadId, UserRef};
use serde::{Deserialize, Serialize};

use crate::collector::Outcome;
use crate::config::ApproveConfig;
use crate::error::{SetupError, StateError};

/// State of an [`Invitation`]. Starts `Pending` and transitions exactly
/// once to one of the four terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationState {
    Pending,
    Accepted,
    Rejected,
    TimedOut,
    Errored,
}

impl InvitationState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, InvitationState::Pending)
    }
}

/// One pending approval request.
///
/// The identities, parent channel, thread id and configuration are fixed at
/// creation; only the state and the prompt reference mutate, and only
/// through the workflow driving this invitation.
#[derive(Debug, Clone)]
pub struct Invitation {
    pub initiator: UserRef,
    pub responder: UserRef,
    pub channel: ChannelRef,
    pub thread_id: ThreadId,
    pub config: ApproveConfig,
    state: InvitationState,
    prompt: Option<MessageRef>,
}

impl Invitation {
    /// Validates the caller-supplied descriptor. The parties must be
    /// distinct and the response window positive.
    pub fn new(
        initiator: UserRef,
        responder: UserRef,
        channel: ChannelRef,
        thread_id: ThreadId,
        config: ApproveConfig,
    ) -> Result<Self, SetupError> {
        if initiator.id == responder.id {
            return Err(SetupError::SameParty);
        }
        if config.timeout.is_zero() {
            return Err(SetupError::InvalidTimeout);
        }

        Ok(Self {
            initiator,
            responder,
            channel,
            thread_id,
            config,
            state: InvitationState::Pending,
            prompt: None,
        })
    }

    pub fn state(&self) -> InvitationState {
        self.state
    }

    /// Reference to the posted prompt, set once the prompt is sent.
    pub fn prompt(&self) -> Option<&MessageRef> {
        self.prompt.as_ref()
    }

    pub(crate) fn set_prompt(&mut self, prompt: MessageRef) {
        self.prompt = Some(prompt);
    }

    /// The single transition function: maps a collector outcome onto the
    /// matching terminal state. Rejects any attempt to move an invitation
    /// that already concluded, which makes late collector resolutions and
    /// duplicate side effects impossible.
    pub fn resolve(&mut self, outcome: &Outcome) -> Result<InvitationState, StateError> {
        if self.state.is_terminal() {
            tracing::debug!(
                thread_id = %self.thread_id,
                state = ?self.state,
                outcome = ?outcome,
                "ignoring outcome for concluded invitation"
            );
            return Err(StateError::AlreadyTerminal(self.state));
        }

        let new_state = match outcome {
            Outcome::Accept => InvitationState::Accepted,
            Outcome::Reject => InvitationState::Rejected,
            Outcome::Timeout => InvitationState::TimedOut,
            Outcome::Other(_) => InvitationState::Errored,
        };

        tracing::info!(
            thread_id = %self.thread_id,
            old_state = ?self.state,
            new_state = ?new_state,
            "invitation state transition"
        );

        self.state = new_state;
        Ok(new_state)
    }
}

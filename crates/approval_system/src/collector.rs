//! Single-shot interaction collector bound to one prompt message.

use std::time::Duration;

use channel_core::{ContextOps, InteractionEvent, MessageRef, UserRef};
use tokio::sync::mpsc;
use tokio::time::{self, Instant};

/// Namespace prefix shared by every action identifier this workflow owns.
pub const ACTION_PREFIX: &str = "approve_";
/// Stable action identifier of the accept affordance.
pub const ACTION_ACCEPT: &str = "approve_accept";
/// Stable action identifier of the reject affordance.
pub const ACTION_REJECT: &str = "approve_reject";

/// Terminal outcome produced by a [`ResponseCollector`].
///
/// `Other` carries the decoded suffix of a workflow-extension action (for
/// example a caller-attached `approve_cancel` button); the built-in prompt
/// only produces the first three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accept,
    Reject,
    Timeout,
    Other(String),
}

impl Outcome {
    /// The wire-level result classification carried by lifecycle events.
    pub fn as_result_str(&self) -> &str {
        match self {
            Outcome::Accept => "accept",
            Outcome::Reject => "reject",
            Outcome::Timeout => "timeout",
            Outcome::Other(reason) => reason,
        }
    }
}

/// Observes button presses on exactly one prompt and resolves to a single
/// [`Outcome`] after the first qualifying event or the timeout, whichever
/// comes first.
///
/// Qualifying means: the actor is the authorized responder and the action
/// id carries the [`ACTION_PREFIX`]. Everything else is acknowledged (to
/// suppress the platform's pending indicator) and ignored; nothing extends
/// or resets the window.
pub struct ResponseCollector {
    prompt: MessageRef,
    responder: UserRef,
    window: Duration,
    events: mpsc::Receiver<InteractionEvent>,
}

impl ResponseCollector {
    pub fn new(
        prompt: MessageRef,
        responder: UserRef,
        window: Duration,
        events: mpsc::Receiver<InteractionEvent>,
    ) -> Self {
        Self {
            prompt,
            responder,
            window,
            events,
        }
    }

    pub fn prompt(&self) -> &MessageRef {
        &self.prompt
    }

    /// Runs the collector to its single resolution. Consumes `self`: a
    /// collector instance can never produce a second outcome.
    pub async fn collect(mut self, ops: &dyn ContextOps) -> Outcome {
        let deadline = Instant::now() + self.window;

        loop {
            let event = match time::timeout_at(deadline, self.events.recv()).await {
                Err(_) => {
                    tracing::debug!(
                        message_id = %self.prompt.id,
                        "response window elapsed without a qualifying event"
                    );
                    return Outcome::Timeout;
                }
                // The transport dropped its sender. There is no external
                // cancel path, so wait out the remaining window.
                Ok(None) => {
                    time::sleep_until(deadline).await;
                    return Outcome::Timeout;
                }
                Ok(Some(event)) => event,
            };

            if let Err(err) = ops.acknowledge(&event).await {
                tracing::warn!(
                    action_id = %event.action_id,
                    error = %err,
                    "failed to acknowledge interaction"
                );
            }

            if event.actor.id != self.responder.id {
                tracing::debug!(
                    actor = %event.actor.username,
                    action_id = %event.action_id,
                    "ignoring interaction from unauthorized user"
                );
                continue;
            }

            match event.action_id.strip_prefix(ACTION_PREFIX) {
                Some("accept") => return Outcome::Accept,
                Some("reject") => return Outcome::Reject,
                Some(reason) if !reason.is_empty() => {
                    return Outcome::Other(reason.to_string())
                }
                // Unrelated component on the same message.
                _ => continue,
            }
        }
    }
}

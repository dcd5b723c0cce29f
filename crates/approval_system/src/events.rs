//! Lifecycle events and the per-workflow notification channel.

use std::sync::Arc;

use channel_core::{MessageRef, ThreadId, UserRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, RwLock};

use crate::collector::Outcome;
use crate::invitation::Invitation;

/// One-time notification describing how an invitation concluded.
///
/// The tag and field names match the wire format external subscribers
/// already consume (`gameAccept`, `gameReject`, `gameTimeOut`, `gameOver`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum LifecycleEvent {
    #[serde(rename = "gameAccept")]
    GameAccept {
        result: String,
        player: UserRef,
        opponent: UserRef,
        timestamp: DateTime<Utc>,
    },

    #[serde(rename = "gameReject")]
    GameReject {
        result: String,
        player: UserRef,
        opponent: UserRef,
        msg: MessageRef,
        #[serde(rename = "threadId")]
        thread_id: ThreadId,
        timestamp: DateTime<Utc>,
    },

    #[serde(rename = "gameTimeOut")]
    GameTimeOut {
        result: String,
        player: UserRef,
        opponent: UserRef,
        msg: MessageRef,
        #[serde(rename = "threadId")]
        thread_id: ThreadId,
        timestamp: DateTime<Utc>,
    },

    /// Generic conclusion for workflow-extension outcomes.
    #[serde(rename = "gameOver")]
    GameOver {
        result: String,
        player: UserRef,
        opponent: UserRef,
        msg: MessageRef,
        #[serde(rename = "threadId")]
        thread_id: ThreadId,
        timestamp: DateTime<Utc>,
    },
}

impl LifecycleEvent {
    /// Builds the event matching a collector outcome. `prompt` is the
    /// posted prompt message, which every non-accept event carries.
    pub(crate) fn conclusion(
        outcome: &Outcome,
        invitation: &Invitation,
        prompt: &MessageRef,
    ) -> Self {
        let result = outcome.as_result_str().to_string();
        let player = invitation.initiator.clone();
        let opponent = invitation.responder.clone();
        let timestamp = Utc::now();

        match outcome {
            Outcome::Accept => LifecycleEvent::GameAccept {
                result,
                player,
                opponent,
                timestamp,
            },
            Outcome::Reject => LifecycleEvent::GameReject {
                result,
                player,
                opponent,
                msg: prompt.clone(),
                thread_id: invitation.thread_id,
                timestamp,
            },
            Outcome::Timeout => LifecycleEvent::GameTimeOut {
                result,
                player,
                opponent,
                msg: prompt.clone(),
                thread_id: invitation.thread_id,
                timestamp,
            },
            Outcome::Other(_) => LifecycleEvent::GameOver {
                result,
                player,
                opponent,
                msg: prompt.clone(),
                thread_id: invitation.thread_id,
                timestamp,
            },
        }
    }

    /// The wire-level result classification.
    pub fn result(&self) -> &str {
        match self {
            LifecycleEvent::GameAccept { result, .. }
            | LifecycleEvent::GameReject { result, .. }
            | LifecycleEvent::GameTimeOut { result, .. }
            | LifecycleEvent::GameOver { result, .. } => result,
        }
    }
}

/// Notification channel owned by one workflow instance.
///
/// Subscribers register before `run` is invoked and unsubscribe by
/// dropping their receiver; closed subscribers are pruned on the next
/// emission. There is no process-wide emitter.
#[derive(Clone)]
pub struct LifecycleNotifier {
    subscribers: Arc<RwLock<Vec<mpsc::Sender<LifecycleEvent>>>>,
}

impl LifecycleNotifier {
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Registers a subscriber and returns its event receiver.
    pub async fn subscribe(&self) -> mpsc::Receiver<LifecycleEvent> {
        let (tx, rx) = mpsc::channel::<LifecycleEvent>(32);

        let mut subscribers = self.subscribers.write().await;
        subscribers.push(tx);

        tracing::debug!(
            subscriber_count = subscribers.len(),
            "lifecycle subscriber added"
        );

        rx
    }

    /// Delivers `event` to all live subscribers, dropping closed ones.
    pub(crate) async fn notify(&self, event: LifecycleEvent) {
        let mut subscribers = self.subscribers.write().await;
        subscribers.retain(|tx| tx.try_send(event.clone()).is_ok());

        tracing::debug!(
            result = %event.result(),
            active_subscribers = subscribers.len(),
            "lifecycle event delivered"
        );
    }

    pub async fn subscriber_count(&self) -> usize {
        self.subscribers.read().await.len()
    }
}

impl Default for LifecycleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

//! The approval workflow: drives one invitation from prompt to terminal
//! resolution and guarantees each side effect runs exactly once.

use std::sync::Arc;

use channel_core::{
    render_template, ActionButton, ButtonStyle, ContextOps, MessageRef, PromptCard,
    PromptContent, ThreadId,
};
use tokio::sync::mpsc;

use crate::collector::{Outcome, ResponseCollector, ACTION_ACCEPT, ACTION_REJECT};
use crate::error::SetupError;
use crate::events::{LifecycleEvent, LifecycleNotifier};
use crate::invitation::Invitation;

/// Orchestrates one full invitation life cycle.
///
/// Subscribe to the [`LifecycleNotifier`] before calling [`run`]; exactly
/// one lifecycle event is emitted per invitation.
///
/// [`run`]: ApprovalWorkflow::run
pub struct ApprovalWorkflow {
    ops: Arc<dyn ContextOps>,
    notifier: LifecycleNotifier,
}

impl ApprovalWorkflow {
    pub fn new(ops: Arc<dyn ContextOps>) -> Self {
        Self {
            ops,
            notifier: LifecycleNotifier::new(),
        }
    }

    pub fn notifier(&self) -> &LifecycleNotifier {
        &self.notifier
    }

    /// Registers a lifecycle subscriber on this workflow instance.
    pub async fn subscribe(&self) -> mpsc::Receiver<LifecycleEvent> {
        self.notifier.subscribe().await
    }

    /// Drives `invitation` to its terminal outcome.
    ///
    /// Returns `Ok(Some(prompt))` when the responder accepted (the thread
    /// is kept, play continues there), `Ok(None)` on every other terminal,
    /// and `Err` only when setup fails — thread resolution or the prompt
    /// post itself. Post-setup failures never surface here.
    pub async fn run(&self, invitation: &mut Invitation) -> Result<Option<MessageRef>, SetupError> {
        let content = request_prompt(invitation);

        let thread = self
            .ops
            .fetch_thread(&invitation.channel, invitation.thread_id)
            .await
            .map_err(SetupError::Context)?;

        let prompt = self
            .ops
            .post_message(&thread, content)
            .await
            .map_err(SetupError::Send)?;
        invitation.set_prompt(prompt.clone());

        tracing::info!(
            thread_id = %invitation.thread_id,
            message_id = %prompt.id,
            responder = %invitation.responder.username,
            "approval prompt posted"
        );

        let collector = ResponseCollector::new(
            prompt.clone(),
            invitation.responder.clone(),
            invitation.config.timeout,
            self.ops.interactions(&prompt),
        );
        let outcome = collector.collect(self.ops.as_ref()).await;

        self.conclude(invitation, &prompt, outcome).await
    }

    /// Executes the terminal branch for `outcome`. The FSM guard makes the
    /// branches mutually exclusive: a second resolution for the same
    /// invitation is dropped before any side effect runs.
    async fn conclude(
        &self,
        invitation: &mut Invitation,
        prompt: &MessageRef,
        outcome: Outcome,
    ) -> Result<Option<MessageRef>, SetupError> {
        if invitation.resolve(&outcome).is_err() {
            return Ok(None);
        }

        let event = LifecycleEvent::conclusion(&outcome, invitation, prompt);
        self.notifier.notify(event).await;

        match &outcome {
            Outcome::Accept => return Ok(Some(prompt.clone())),
            Outcome::Reject => {}
            Outcome::Timeout => {
                // Replace the live prompt so nobody answers a dead offer.
                self.edit_best_effort(prompt, farewell_prompt(invitation, true))
                    .await;
            }
            Outcome::Other(_) => {
                self.edit_best_effort(prompt, farewell_prompt(invitation, false))
                    .await;
                if let Err(err) = self.ops.relocate_content(prompt, &invitation.channel).await {
                    tracing::warn!(
                        message_id = %prompt.id,
                        error = %err,
                        "failed to relocate prompt content"
                    );
                }
            }
        }

        self.teardown(invitation.thread_id).await;
        Ok(None)
    }

    async fn edit_best_effort(&self, prompt: &MessageRef, content: PromptContent) {
        if let Err(err) = self.ops.edit_message(prompt, content).await {
            tracing::warn!(
                message_id = %prompt.id,
                error = %err,
                "failed to edit prompt"
            );
        }
    }

    async fn teardown(&self, thread_id: ThreadId) {
        match self.ops.delete_thread(thread_id).await {
            Ok(()) => tracing::info!(thread_id = %thread_id, "invitation thread deleted"),
            Err(err) => tracing::warn!(
                thread_id = %thread_id,
                error = %err,
                "failed to delete invitation thread"
            ),
        }
    }
}

/// Builds the initial prompt: rendered request text on a card plus the two
/// response affordances, with an optional responder mention in the body.
fn request_prompt(invitation: &Invitation) -> PromptContent {
    let config = &invitation.config;

    let card = PromptCard {
        title: config.card.effective_request_title().map(str::to_owned),
        color: config.card.effective_request_color(),
        description: render_template(
            &config.request_text,
            &invitation.initiator,
            &invitation.responder,
        ),
    };

    let buttons = vec![
        ActionButton {
            label: config.accept_label.clone(),
            action_id: ACTION_ACCEPT.to_string(),
            style: ButtonStyle::Success,
        },
        ActionButton {
            label: config.reject_label.clone(),
            action_id: ACTION_REJECT.to_string(),
            style: ButtonStyle::Danger,
        },
    ];

    let text = config
        .mention_responder
        .then(|| invitation.responder.mention());

    PromptContent {
        text,
        card: Some(card),
        buttons,
    }
}

/// Builds the buttonless card the prompt is edited to on a non-accept
/// conclusion that rewrites the message.
fn farewell_prompt(invitation: &Invitation, timed_out: bool) -> PromptContent {
    let config = &invitation.config;
    let template = if timed_out {
        &config.timeout_text
    } else {
        &config.reject_text
    };

    PromptContent {
        text: None,
        card: Some(PromptCard {
            title: config.card.effective_reject_title().map(str::to_owned),
            color: config.card.effective_reject_color(),
            description: render_template(template, &invitation.initiator, &invitation.responder),
        }),
        buttons: Vec::new(),
    }
}

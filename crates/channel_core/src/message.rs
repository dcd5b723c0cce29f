//! Prompt content model and interaction events.
//!
//! Rendering is the transport's job; the core only describes what a prompt
//! contains: optional plain text, an optional card (embed) and the action
//! buttons bound to stable action identifiers.

use serde::{Deserialize, Serialize};

use crate::identity::UserRef;

/// Visual style of an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ButtonStyle {
    Success,
    Danger,
}

/// One labeled response affordance attached to a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionButton {
    pub label: String,
    pub action_id: String,
    pub style: ButtonStyle,
}

/// A rich card (embed) attached to a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    pub description: String,
}

/// Full content of one outgoing prompt message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptContent {
    /// Plain-text body, typically the responder mention when enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<PromptCard>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<ActionButton>,
}

/// A button press delivered by the transport for one posted prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionEvent {
    pub actor: UserRef,
    pub action_id: String,
}

//! Channel collaborator error types

use thiserror::Error;

use crate::context::ThreadId;

/// Errors surfaced by a [`ContextOps`](crate::ContextOps) implementation.
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("Thread not found: {0}")]
    NotFound(ThreadId),

    #[error("Invalid context target: {0}")]
    InvalidContext(String),

    #[error("Failed to send message: {0}")]
    Send(String),

    #[error("Failed to edit message: {0}")]
    Edit(String),

    #[error("Failed to delete thread: {0}")]
    Delete(String),

    #[error("Failed to relocate content: {0}")]
    Relocate(String),

    #[error("Failed to acknowledge interaction: {0}")]
    Acknowledge(String),

    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ContextError>;

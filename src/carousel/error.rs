//! Errors at the edges of the carousel subsystem
//!
//! The controller itself is total; only the task plumbing around it can fail.

use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarouselError {
    /// Settings rejected before mounting
    #[error("Invalid carousel settings: {0}")]
    InvalidSettings(#[from] ConfigError),

    /// Command channel full or closed
    #[error("Channel error: {0}")]
    ChannelError(String),

    /// The carousel task was already shut down
    #[error("Carousel '{0}' is disposed")]
    Disposed(String),

    /// The carousel task panicked or was aborted
    #[error("Task error: {0}")]
    TaskError(String),
}

// File: src/error.rs
// Purpose: Error type shared by pipeline configuration, resolution and stage execution

use plumbline_validation::ValidationError;
use thiserror::Error;

/// Result alias used by stages, handlers, resolvers and destinations
pub type Result<T, E = PipelineError> = std::result::Result<T, E>;

/// Everything that can go wrong while running a pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    /// `then` was called without a payload having been sent
    #[error("no payload has been sent through the pipeline")]
    MissingPayload,

    /// A named stage needs a resolver and none was set
    #[error("a resolver has not been set on the pipeline")]
    MissingResolver,

    /// The resolver has nothing registered under this name
    #[error("no handler is registered under `{0}`")]
    UnresolvedHandler(String),

    /// The handler answers to neither the entry method nor a plain call
    #[error("handler `{handler}` has no `{method}` entry point and is not callable")]
    NotCallable { handler: String, method: String },

    /// A stage rejected the payload with a validation failure
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Any other failure raised by a stage or the destination
    #[error(transparent)]
    Stage(#[from] anyhow::Error),
}

impl PipelineError {
    /// Builds a stage failure from a message
    pub fn stage(message: impl Into<String>) -> Self {
        PipelineError::Stage(anyhow::Error::msg(message.into()))
    }

    /// True for errors caused by how the pipeline was set up rather than by a stage
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            PipelineError::MissingPayload | PipelineError::MissingResolver
        )
    }
}

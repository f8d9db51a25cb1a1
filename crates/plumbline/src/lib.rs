// Plumbline - middleware pipelines for Rust
// Ordered stage chains with named handlers, route templates and format validators

pub mod case;
pub mod config;
pub mod error;
pub mod pipeline;

// Re-export pipeline types
pub use pipeline::{
    handler_fn,
    FnHandler, Handler, HandlerRegistry, IntoStages, Next, Pipeline, Resolver, Stage, StageRef,
    DEFAULT_METHOD,
};

// Re-export errors and configuration
pub use config::{Config, PipelineConfig, RoutingConfig};
pub use error::{PipelineError, Result};

// Re-export route template compilation
pub use plumbline_router::{
    compile_pattern, normalize_path, CompiledPattern, PatternCompiler, Placeholder, TypeAlias,
};

// Re-export validators
pub use plumbline_validation as validation;
pub use plumbline_validation::ValidationError;

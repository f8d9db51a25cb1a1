// File: src/pipeline/mod.rs
// Purpose: Ordered middleware chain around a destination

//! A payload is sent through an ordered list of stages before reaching a
//! destination. Every stage receives the payload plus a [`Next`] continuation
//! for the rest of the chain; it may transform the payload on the way in,
//! transform the result on the way out, or return early without continuing.
//!
//! ```
//! use plumbline::pipeline::{Pipeline, Stage};
//!
//! let mut pipeline: Pipeline<String> = Pipeline::new();
//! let result = pipeline
//!     .send("  hello ".to_string())
//!     .through(vec![
//!         Stage::callable(|s: String, next| next.run(s.trim().to_string())),
//!         Stage::callable(|s: String, next| next.run(s.to_uppercase())),
//!     ])
//!     .then(|s| Ok(format!("<{s}>")))
//!     .unwrap();
//!
//! assert_eq!(result, "<HELLO>");
//! ```

pub mod handler;
pub mod resolver;
pub mod stage;

use std::sync::Arc;

use tracing::{debug, trace};

pub use handler::{handler_fn, FnHandler, Handler, DEFAULT_METHOD};
pub use resolver::{HandlerRegistry, Resolver};
pub use stage::{IntoStages, Stage, StageFn, StageRef};

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};

type ErrorHook<R> = dyn Fn(PipelineError) -> Result<R>;
type CarryHook<R> = dyn Fn(R) -> R;

/// Builder and runner for one middleware chain
///
/// Configuration (`send`, `through`, `via`, ...) returns `&mut Self` so calls
/// chain; [`then`](Pipeline::then) executes. The stage list survives a run, so
/// the same pipeline can be fed a new payload and run again.
pub struct Pipeline<P, R = P> {
    resolver: Option<Arc<dyn Resolver<P, R>>>,
    payload: Option<P>,
    stages: Vec<Stage<P, R>>,
    method: String,
    on_error: Option<Box<ErrorHook<R>>>,
    on_carry: Option<Box<CarryHook<R>>>,
}

impl<P, R> Pipeline<P, R> {
    pub fn new() -> Self {
        Self {
            resolver: None,
            payload: None,
            stages: Vec::new(),
            method: DEFAULT_METHOD.to_string(),
            on_error: None,
            on_carry: None,
        }
    }

    /// Pipeline with a resolver already installed
    pub fn with_resolver<Rs>(resolver: Rs) -> Self
    where
        Rs: Resolver<P, R> + 'static,
    {
        let mut pipeline = Self::new();
        pipeline.set_resolver(resolver);
        pipeline
    }

    /// Pipeline whose entry method and named stages come from configuration
    pub fn from_config(config: &PipelineConfig) -> Self {
        let mut pipeline = Self::new();
        pipeline
            .via(&config.method)
            .through(config.stages.clone());
        pipeline
    }

    /// Sets the payload for the next run
    pub fn send(&mut self, payload: P) -> &mut Self {
        self.payload = Some(payload);
        self
    }

    /// Replaces the stage list
    pub fn through(&mut self, stages: impl IntoStages<P, R>) -> &mut Self {
        self.stages = stages.into_stages();
        self
    }

    /// Appends one stage to the end of the list
    pub fn pipe(&mut self, stage: impl Into<Stage<P, R>>) -> &mut Self {
        self.stages.push(stage.into());
        self
    }

    /// Sets the entry method invoked on handler objects
    pub fn via(&mut self, method: impl Into<String>) -> &mut Self {
        self.method = method.into();
        self
    }

    /// Installs the resolver used for named stages
    pub fn set_resolver<Rs>(&mut self, resolver: Rs) -> &mut Self
    where
        Rs: Resolver<P, R> + 'static,
    {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    /// Replaces the exception hook; the default rethrows
    ///
    /// The hook runs in the frame where the error surfaced and its `Ok` value
    /// becomes that frame's result. It receives only the error: the payload
    /// was moved into the failing stage and is not available anymore. A stage
    /// that needs the payload to recover should catch the error from
    /// `next.run` itself.
    pub fn on_error<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(PipelineError) -> Result<R> + 'static,
    {
        self.on_error = Some(Box::new(hook));
        self
    }

    /// Replaces the carry hook; the default returns the stage result unchanged
    pub fn on_carry<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(R) -> R + 'static,
    {
        self.on_carry = Some(Box::new(hook));
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn stages(&self) -> &[Stage<P, R>] {
        &self.stages
    }

    /// Runs the payload through every stage and then into `destination`
    pub fn then<F>(&mut self, destination: F) -> Result<R>
    where
        F: Fn(P) -> Result<R>,
    {
        let payload = self.payload.take().ok_or(PipelineError::MissingPayload)?;

        let has_named = self.stages.iter().any(|stage| matches!(stage, Stage::Named(_)));
        if has_named && self.resolver.is_none() {
            return Err(PipelineError::MissingResolver);
        }

        let frames: Vec<Frame<'_, P, R>> = self.stages.iter().map(Frame::from_stage).collect();

        debug!(
            "Running pipeline through {} stage(s) via `{}`",
            frames.len(),
            self.method
        );

        let chain = Chain {
            frames,
            method: &self.method,
            resolver: self.resolver.as_deref(),
            destination: &destination,
            on_error: self.on_error.as_deref(),
            on_carry: self.on_carry.as_deref(),
        };

        chain.dispatch(0, payload)
    }
}

impl<P> Pipeline<P, P> {
    /// Runs the chain with the identity function as destination
    pub fn then_return(&mut self) -> Result<P> {
        self.then(Ok)
    }
}

impl<P, R> Default for Pipeline<P, R> {
    fn default() -> Self {
        Self::new()
    }
}

fn handle_exception<R>(hook: Option<&ErrorHook<R>>, err: PipelineError) -> Result<R> {
    match hook {
        Some(hook) => {
            debug!("Pipeline error passed to exception hook: {}", err);
            hook(err)
        }
        None => Err(err),
    }
}

// ============================================================================
// Execution
// ============================================================================

enum Frame<'a, P, R> {
    Callable(&'a StageFn<P, R>),
    Handler(&'a Arc<dyn Handler<P, R>>),
    Named(&'a StageRef),
}

impl<'a, P, R> Frame<'a, P, R> {
    fn from_stage(stage: &'a Stage<P, R>) -> Self {
        match stage {
            Stage::Callable(f) => Frame::Callable(f.as_ref()),
            Stage::Handler(handler) => Frame::Handler(handler),
            Stage::Named(reference) => Frame::Named(reference),
        }
    }
}

struct Chain<'a, P, R> {
    frames: Vec<Frame<'a, P, R>>,
    method: &'a str,
    resolver: Option<&'a dyn Resolver<P, R>>,
    destination: &'a dyn Fn(P) -> Result<R>,
    on_error: Option<&'a ErrorHook<R>>,
    on_carry: Option<&'a CarryHook<R>>,
}

impl<'a, P, R> Chain<'a, P, R> {
    fn dispatch(&self, position: usize, payload: P) -> Result<R> {
        let Some(frame) = self.frames.get(position) else {
            trace!("Pipeline reached its destination");
            return (self.destination)(payload)
                .or_else(|err| handle_exception(self.on_error, err));
        };

        let next = Next {
            chain: self,
            position: position + 1,
        };

        let result = match frame {
            Frame::Callable(stage) => {
                trace!("Pipeline stage {} (closure)", position);
                stage(payload, next)
            }
            Frame::Handler(handler) => self.invoke(position, handler, payload, next, &[]),
            Frame::Named(reference) => self.resolve(reference).and_then(|handler| {
                self.invoke(position, &handler, payload, next, &reference.args)
            }),
        };

        match result {
            Ok(carry) => Ok(match self.on_carry {
                Some(hook) => hook(carry),
                None => carry,
            }),
            Err(err) => handle_exception(self.on_error, err),
        }
    }

    /// Looks a named stage up when its frame is reached
    fn resolve(&self, reference: &StageRef) -> Result<Arc<dyn Handler<P, R>>> {
        trace!("Resolving pipeline stage `{}`", reference);
        self.resolver
            .ok_or(PipelineError::MissingResolver)?
            .get(&reference.name)
    }

    fn invoke(
        &self,
        position: usize,
        handler: &Arc<dyn Handler<P, R>>,
        payload: P,
        next: Next<'_, P, R>,
        args: &[String],
    ) -> Result<R> {
        trace!("Pipeline stage {} ({})", position, handler.name());
        if handler.responds_to(self.method) {
            handler.handle(self.method, payload, next, args)
        } else if handler.is_callable() {
            handler.call(self.method, payload, next, args)
        } else {
            Err(PipelineError::NotCallable {
                handler: handler.name().to_string(),
                method: self.method.to_string(),
            })
        }
    }
}

/// The rest of the pipeline after the current stage
///
/// Consumed by [`run`](Next::run), so a stage can continue the chain at most
/// once. Dropping it without running short-circuits every later stage and the
/// destination.
pub struct Next<'a, P, R = P> {
    chain: &'a Chain<'a, P, R>,
    position: usize,
}

impl<'a, P, R> Next<'a, P, R> {
    /// Passes the payload on to the next stage, or to the destination
    pub fn run(self, payload: P) -> Result<R> {
        self.chain.dispatch(self.position, payload)
    }

    /// Number of stages still ahead, not counting the destination
    pub fn remaining(&self) -> usize {
        self.chain.frames.len().saturating_sub(self.position)
    }
}

// File: src/pipeline/resolver.rs
// Purpose: Turning stage names into handler objects

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::handler::Handler;
use crate::error::{PipelineError, Result};

/// Looks up handler objects by name for named stages
///
/// Any `Fn(&str) -> Result<Arc<dyn Handler>>` closure is a resolver, so a
/// container or factory can be plugged in without a wrapper type.
pub trait Resolver<P, R = P> {
    fn get(&self, name: &str) -> Result<Arc<dyn Handler<P, R>>>;
}

impl<P, R, F> Resolver<P, R> for F
where
    F: Fn(&str) -> Result<Arc<dyn Handler<P, R>>>,
{
    fn get(&self, name: &str) -> Result<Arc<dyn Handler<P, R>>> {
        self(name)
    }
}

/// A name to handler map, the simplest resolver
///
/// ```
/// use plumbline::pipeline::{handler_fn, HandlerRegistry, Resolver};
///
/// let mut registry: HandlerRegistry<String> = HandlerRegistry::new();
/// registry.register("trim", handler_fn(|s: String, next, _args: &[String]| next.run(s.trim().to_string())));
///
/// assert!(registry.contains("trim"));
/// assert!(registry.get("missing").is_err());
/// ```
pub struct HandlerRegistry<P, R = P> {
    handlers: HashMap<String, Arc<dyn Handler<P, R>>>,
}

impl<P, R> HandlerRegistry<P, R> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers a handler under a name, replacing any previous one
    pub fn register<H>(&mut self, name: impl Into<String>, handler: H) -> &mut Self
    where
        H: Handler<P, R> + 'static,
    {
        self.register_shared(name, Arc::new(handler))
    }

    /// Registers an already shared handler
    pub fn register_shared(
        &mut self,
        name: impl Into<String>,
        handler: Arc<dyn Handler<P, R>>,
    ) -> &mut Self {
        let name = name.into();
        debug!("Registered pipeline handler `{}`", name);
        self.handlers.insert(name, handler);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<P, R> Default for HandlerRegistry<P, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, R> Resolver<P, R> for HandlerRegistry<P, R> {
    fn get(&self, name: &str) -> Result<Arc<dyn Handler<P, R>>> {
        self.handlers
            .get(name)
            .cloned()
            .ok_or_else(|| PipelineError::UnresolvedHandler(name.to_string()))
    }
}

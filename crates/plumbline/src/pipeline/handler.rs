// File: src/pipeline/handler.rs
// Purpose: Handler objects that can stand in a pipeline

use std::marker::PhantomData;

use super::Next;
use crate::error::{PipelineError, Result};

/// Entry method a pipeline invokes on handlers unless told otherwise with `via`
pub const DEFAULT_METHOD: &str = "handle";

/// A constructed object that can process a payload inside a pipeline
///
/// The pipeline asks [`responds_to`](Handler::responds_to) whether the handler
/// exposes the configured entry method. If it does, [`handle`](Handler::handle)
/// is invoked with that method name. Otherwise a handler that
/// [`is_callable`](Handler::is_callable) is invoked through
/// [`call`](Handler::call), and any other handler fails the stage with
/// `PipelineError::NotCallable`.
///
/// `args` holds the comma-separated arguments of a named stage
/// (`"throttle:60,1"` gives `["60", "1"]`) and is empty for handler objects
/// placed in the pipeline directly.
///
/// # Examples
///
/// ```
/// use plumbline::pipeline::{Handler, Next};
/// use plumbline::Result;
///
/// struct Exclaim;
///
/// impl Handler<String> for Exclaim {
///     fn handle(&self, _method: &str, payload: String, next: Next<'_, String>, args: &[String]) -> Result<String> {
///         let marks = args.first().map(String::as_str).unwrap_or("!");
///         next.run(format!("{payload}{marks}"))
///     }
/// }
/// ```
pub trait Handler<P, R = P> {
    /// Name used in logs and error messages
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Whether this handler exposes the given entry method
    fn responds_to(&self, method: &str) -> bool {
        method == DEFAULT_METHOD
    }

    /// Whether this handler can be invoked as a plain callable
    fn is_callable(&self) -> bool {
        false
    }

    /// Entry method invocation
    fn handle(&self, method: &str, payload: P, next: Next<'_, P, R>, args: &[String]) -> Result<R>;

    /// Plain-callable invocation, used when `responds_to` is false and `is_callable` is true
    ///
    /// `method` is the entry method the pipeline was configured with.
    fn call(&self, method: &str, payload: P, next: Next<'_, P, R>, args: &[String]) -> Result<R> {
        let _ = (payload, next, args);
        Err(PipelineError::NotCallable {
            handler: self.name().to_string(),
            method: method.to_string(),
        })
    }
}

/// A handler built from a closure, invoked as a plain callable
///
/// It answers to no entry method, so whatever name the pipeline was configured
/// with through `via`, the closure is called directly. Built with [`handler_fn`].
pub struct FnHandler<F, P, R = P> {
    f: F,
    _marker: PhantomData<fn(P) -> R>,
}

/// Wraps a `(payload, next, args)` closure into a [`Handler`]
pub fn handler_fn<P, R, F>(f: F) -> FnHandler<F, P, R>
where
    F: for<'n> Fn(P, Next<'n, P, R>, &[String]) -> Result<R>,
{
    FnHandler {
        f,
        _marker: PhantomData,
    }
}

impl<P, R, F> Handler<P, R> for FnHandler<F, P, R>
where
    F: for<'n> Fn(P, Next<'n, P, R>, &[String]) -> Result<R>,
{
    fn name(&self) -> &str {
        "closure"
    }

    fn responds_to(&self, _method: &str) -> bool {
        false
    }

    fn is_callable(&self) -> bool {
        true
    }

    fn handle(&self, _method: &str, payload: P, next: Next<'_, P, R>, args: &[String]) -> Result<R> {
        (self.f)(payload, next, args)
    }

    fn call(&self, _method: &str, payload: P, next: Next<'_, P, R>, args: &[String]) -> Result<R> {
        (self.f)(payload, next, args)
    }
}

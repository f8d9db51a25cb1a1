// File: src/pipeline/stage.rs
// Purpose: Stage descriptors and named-stage reference parsing

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use super::handler::Handler;
use super::Next;
use crate::error::Result;

/// Signature of a closure stage: receives the payload and the rest of the chain
pub type StageFn<P, R> = dyn for<'n> Fn(P, Next<'n, P, R>) -> Result<R>;

/// One unit of processing in a pipeline
///
/// - `Callable`: a closure invoked as `stage(payload, next)`
/// - `Handler`: an already constructed handler object
/// - `Named`: a `"name:arg1,arg2"` reference resolved when the pipeline runs
pub enum Stage<P, R = P> {
    Callable(Box<StageFn<P, R>>),
    Handler(Arc<dyn Handler<P, R>>),
    Named(StageRef),
}

impl<P, R> Stage<P, R> {
    /// Closure stage
    ///
    /// ```
    /// use plumbline::pipeline::Stage;
    ///
    /// let double: Stage<i32> = Stage::callable(|n, next| next.run(n * 2));
    /// ```
    pub fn callable<F>(f: F) -> Self
    where
        F: for<'n> Fn(P, Next<'n, P, R>) -> Result<R> + 'static,
    {
        Stage::Callable(Box::new(f))
    }

    /// Handler object stage
    pub fn handler<H>(handler: H) -> Self
    where
        H: Handler<P, R> + 'static,
    {
        Stage::Handler(Arc::new(handler))
    }

    /// Handler object stage sharing an existing handler
    pub fn shared(handler: Arc<dyn Handler<P, R>>) -> Self {
        Stage::Handler(handler)
    }

    /// Named stage, parsed but not resolved
    pub fn named(reference: &str) -> Self {
        Stage::Named(StageRef::parse(reference))
    }

    /// Short description used in logs
    pub fn describe(&self) -> String {
        match self {
            Stage::Callable(_) => "closure".to_string(),
            Stage::Handler(handler) => handler.name().to_string(),
            Stage::Named(reference) => reference.to_string(),
        }
    }
}

impl<P, R> fmt::Debug for Stage<P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Callable(_) => f.write_str("Stage::Callable"),
            Stage::Handler(handler) => write!(f, "Stage::Handler({})", handler.name()),
            Stage::Named(reference) => write!(f, "Stage::Named({})", reference),
        }
    }
}

impl<P, R> From<&str> for Stage<P, R> {
    fn from(reference: &str) -> Self {
        Stage::named(reference)
    }
}

impl<P, R> From<String> for Stage<P, R> {
    fn from(reference: String) -> Self {
        Stage::named(&reference)
    }
}

impl<P, R> From<StageRef> for Stage<P, R> {
    fn from(reference: StageRef) -> Self {
        Stage::Named(reference)
    }
}

// ============================================================================
// Named stage references
// ============================================================================

/// A parsed `"name:arg1,arg2"` stage reference
///
/// The name ends at the first `:`; everything after it is split on `,`.
///
/// ```
/// use plumbline::pipeline::StageRef;
///
/// let reference = StageRef::parse("greet:Hello,World");
/// assert_eq!(reference.name, "greet");
/// assert_eq!(reference.args, vec!["Hello", "World"]);
///
/// assert!(StageRef::parse("auth").args.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageRef {
    pub name: String,
    pub args: Vec<String>,
}

impl StageRef {
    /// Parses a reference (pure function, never fails)
    pub fn parse(reference: &str) -> Self {
        match reference.split_once(':') {
            Some((name, args)) => Self {
                name: name.to_string(),
                args: args.split(',').map(str::to_string).collect(),
            },
            None => Self {
                name: reference.to_string(),
                args: Vec::new(),
            },
        }
    }
}

impl FromStr for StageRef {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for StageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}:{}", self.name, self.args.join(","))
        }
    }
}

// ============================================================================
// Accepting one stage or many
// ============================================================================

/// Anything `Pipeline::through` accepts: a single stage or an ordered collection
pub trait IntoStages<P, R> {
    fn into_stages(self) -> Vec<Stage<P, R>>;
}

impl<P, R> IntoStages<P, R> for Stage<P, R> {
    fn into_stages(self) -> Vec<Stage<P, R>> {
        vec![self]
    }
}

impl<P, R> IntoStages<P, R> for Vec<Stage<P, R>> {
    fn into_stages(self) -> Vec<Stage<P, R>> {
        self
    }
}

impl<P, R, const N: usize> IntoStages<P, R> for [Stage<P, R>; N] {
    fn into_stages(self) -> Vec<Stage<P, R>> {
        self.into_iter().collect()
    }
}

impl<P, R> IntoStages<P, R> for &str {
    fn into_stages(self) -> Vec<Stage<P, R>> {
        vec![Stage::named(self)]
    }
}

impl<P, R> IntoStages<P, R> for Vec<&str> {
    fn into_stages(self) -> Vec<Stage<P, R>> {
        self.into_iter().map(Stage::named).collect()
    }
}

impl<P, R> IntoStages<P, R> for Vec<String> {
    fn into_stages(self) -> Vec<Stage<P, R>> {
        self.into_iter().map(Stage::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_and_args() {
        let reference = StageRef::parse("greet:Hello,World");
        assert_eq!(reference.name, "greet");
        assert_eq!(reference.args, vec!["Hello", "World"]);
    }

    #[test]
    fn test_parse_splits_on_first_colon_only() {
        let reference = StageRef::parse("cache:key:a,ttl:60");
        assert_eq!(reference.name, "cache");
        assert_eq!(reference.args, vec!["key:a", "ttl:60"]);
    }

    #[test]
    fn test_parse_empty_args_keeps_one_empty_arg() {
        assert_eq!(StageRef::parse("auth:").args, vec![""]);
    }

    #[test]
    fn test_display_round_trip() {
        for text in ["auth", "throttle:60,1"] {
            assert_eq!(StageRef::parse(text).to_string(), text);
        }
    }

    #[test]
    fn test_single_and_many() {
        let one: Vec<Stage<i32>> = Stage::named("a").into_stages();
        assert_eq!(one.len(), 1);

        let many: Vec<Stage<i32>> = vec!["a", "b:1"].into_stages();
        assert_eq!(many.len(), 2);
        assert_eq!(many[1].describe(), "b:1");
    }
}

//! # Plumbline Router
//!
//! Compiles human-readable route templates into regular expressions:
//! - Untyped placeholders (`/author/{username}`)
//! - Typed placeholders (`/author/{id:d}`)
//! - Inline regex placeholders (`/author/{username:\@[a-zA-Z]+}`)
//!
//! ## Type aliases
//!
//! | tag     | fragment        |
//! |---------|-----------------|
//! | `i`     | `\d+`           |
//! | `d`     | `\d+`           |
//! | `a`     | `[A-Za-z]+`     |
//! | `alnum` | `[A-Za-z0-9]+`  |
//! | `w`     | `\w+`           |
//! | (none)  | `[-\w]+`        |
//!
//! Any other tag is used verbatim as the regex fragment.
//!
//! ## Example
//!
//! ```
//! use plumbline_router::compile_pattern;
//!
//! assert_eq!(compile_pattern("/author/{id:d}"), r"/author/(?P<id>\d+)");
//! assert_eq!(compile_pattern("/no/placeholders"), "/no/placeholders");
//! ```

use std::borrow::Cow;
use std::collections::HashMap;

use once_cell::sync::Lazy;

// ============================================================================
// Module Declarations
// ============================================================================

mod alias;
pub mod path;
pub mod route;

pub use alias::TypeAlias;
pub use path::normalize_path;
pub use route::matcher::CompiledPattern;
pub use route::pattern::{parse_placeholder, scan_placeholders, Placeholder};

use route::pattern::PLACEHOLDER_REGEX;

static DEFAULT_COMPILER: Lazy<PatternCompiler> = Lazy::new(PatternCompiler::default);

/// Compiles a template with the built-in aliases
///
/// Shorthand for `PatternCompiler::default().compile(pattern)`.
pub fn compile_pattern(pattern: &str) -> String {
    DEFAULT_COMPILER.compile(pattern)
}

// ============================================================================
// Compiler
// ============================================================================

/// Turns placeholders into named capture groups
///
/// The alias table starts out as [`TypeAlias::ALL`]; [`with_alias`](Self::with_alias)
/// adds to or overrides it.
#[derive(Debug, Clone)]
pub struct PatternCompiler {
    aliases: HashMap<String, String>,
}

impl Default for PatternCompiler {
    fn default() -> Self {
        Self {
            aliases: TypeAlias::ALL
                .iter()
                .map(|alias| (alias.tag().to_string(), alias.fragment().to_string()))
                .collect(),
        }
    }
}

impl PatternCompiler {
    /// Creates a compiler with the built-in aliases
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an extra alias (builder style)
    ///
    /// ```
    /// use plumbline_router::PatternCompiler;
    ///
    /// let compiler = PatternCompiler::new().with_alias("slug", "[a-z0-9-]+");
    /// assert_eq!(compiler.compile("/{post:slug}"), "/(?P<post>[a-z0-9-]+)");
    /// ```
    pub fn with_alias(mut self, tag: impl Into<String>, fragment: impl Into<String>) -> Self {
        self.aliases.insert(tag.into(), fragment.into());
        self
    }

    /// Resolves a tag to its fragment, falling back to the tag itself
    pub fn fragment_for<'a>(&'a self, tag: &'a str) -> Cow<'a, str> {
        self.aliases
            .get(tag)
            .map(|fragment| Cow::Borrowed(fragment.as_str()))
            .unwrap_or(Cow::Borrowed(tag))
    }

    /// Lists the placeholders of a template in order of appearance
    pub fn placeholders(&self, pattern: &str) -> Vec<Placeholder> {
        scan_placeholders(pattern)
    }

    /// Compiles a template into a regex source string (pure function)
    ///
    /// Every occurrence of the same placeholder text is replaced identically;
    /// literal text is left untouched and a template without placeholders is
    /// returned as is.
    pub fn compile(&self, pattern: &str) -> String {
        PLACEHOLDER_REGEX
            .replace_all(pattern, |caps: &regex::Captures<'_>| {
                let placeholder = Placeholder::from_raw(&caps[0]);
                format!(
                    "(?P<{}>{})",
                    placeholder.name,
                    self.fragment_for(&placeholder.tag)
                )
            })
            .into_owned()
    }
}

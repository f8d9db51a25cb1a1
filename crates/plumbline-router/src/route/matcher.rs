/// Matching request paths against compiled templates

use std::collections::HashMap;

use regex::Regex;

use crate::path::normalize_path;
use crate::PatternCompiler;

/// A route template compiled into an anchored regular expression
///
/// # Examples
///
/// ```
/// use plumbline_router::CompiledPattern;
///
/// let route = CompiledPattern::new("/users/{id:d}").unwrap();
/// let params = route.matches("/users/42/").unwrap();
/// assert_eq!(params.get("id"), Some(&"42".to_string()));
/// assert!(route.matches("/users/abc").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    template: String,
    regex: Regex,
    params: Vec<String>,
}

impl CompiledPattern {
    /// Compiles a template with the built-in type aliases
    pub fn new(template: &str) -> Result<Self, regex::Error> {
        Self::with_compiler(template, &PatternCompiler::default())
    }

    /// Compiles a template with a caller-supplied compiler (extra aliases)
    ///
    /// Fails when the resulting source is rejected by the regex engine, e.g.
    /// a malformed inline regex or a hyphenated parameter name.
    pub fn with_compiler(template: &str, compiler: &PatternCompiler) -> Result<Self, regex::Error> {
        let source = compiler.compile(template);
        let regex = Regex::new(&format!("^{}$", source))?;
        let params = regex
            .capture_names()
            .flatten()
            .map(str::to_string)
            .collect();

        Ok(Self {
            template: template.to_string(),
            regex,
            params,
        })
    }

    /// The template this pattern was compiled from
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The anchored regex source
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Parameter names in template order
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Matches a request path, returning the captured parameters
    ///
    /// The path is normalized first, so trailing and doubled slashes are ignored.
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let path = normalize_path(path);
        let captures = self.regex.captures(&path)?;

        Some(
            self.params
                .iter()
                .filter_map(|name| {
                    captures
                        .name(name)
                        .map(|value| (name.clone(), value.as_str().to_string()))
                })
                .collect(),
        )
    }

    /// Checks whether a request path matches, without collecting parameters
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(&normalize_path(path))
    }
}

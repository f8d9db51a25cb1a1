/// Route module for template compilation
///
/// - `pattern`: placeholder scanning and parsing (pure functions)
/// - `matcher`: anchored, compiled templates that extract parameters from paths

pub mod matcher;
pub mod pattern;

// Re-export commonly used types
pub use matcher::CompiledPattern;
pub use pattern::{parse_placeholder, scan_placeholders, Placeholder};

//! Compilation of declarative path patterns into anchored regexes.
//!
//! Pattern syntax:
//! - `%` followed by one or more digits (`%1`, `%12`) is a numbered
//!   placeholder matching one or more ASCII digits
//! - every other character is literal text
//! - a `%` not followed by a digit is literal
//!
//! The compiled matcher always accepts any number of trailing `/`, whether or
//! not the pattern itself ends with one.

use regex::Regex;
use std::fmt;

/// Regex fragment for a numbered placeholder
const PLACEHOLDER_REGEX: &str = "[0-9]+";

/// Regex fragment accepting optional trailing separators
const TRAILING_SEPARATORS: &str = "/*";

/// A compiled path pattern.
///
/// Deterministic function of the source pattern: compiling the same pattern
/// twice yields matchers with identical behavior.
#[derive(Clone)]
pub struct PathMatcher {
    regex: Regex,
    placeholders: usize,
}

impl PathMatcher {
    /// True if `path` matches the whole pattern (not a prefix).
    #[inline]
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// The regex source this matcher was compiled to
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Number of numbered placeholders found in the pattern
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.placeholders
    }
}

impl fmt::Debug for PathMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathMatcher")
            .field("regex", &self.regex.as_str())
            .field("placeholders", &self.placeholders)
            .finish()
    }
}

/// Translate a declarative pattern into its regex source.
///
/// ```rust
/// use jsonmvc::router::pattern_to_regex;
///
/// let (source, placeholders) = pattern_to_regex("/view/planet/%1");
/// assert_eq!(source, "^/view/planet/[0-9]+/*$");
/// assert_eq!(placeholders, 1);
/// ```
#[must_use]
pub fn pattern_to_regex(pattern: &str) -> (String, usize) {
    // Trailing separators are re-added as an optional suffix below.
    let body = pattern.trim_end_matches('/');

    let mut source = String::with_capacity(body.len() + 16);
    source.push('^');
    let mut placeholders = 0;
    let mut literal = String::new();

    let mut chars = body.char_indices().peekable();
    while let Some((_, c)) = chars.next() {
        if c == '%' && chars.peek().is_some_and(|(_, n)| n.is_ascii_digit()) {
            while chars.peek().is_some_and(|(_, n)| n.is_ascii_digit()) {
                chars.next();
            }
            source.push_str(&regex::escape(&literal));
            literal.clear();
            source.push_str(PLACEHOLDER_REGEX);
            placeholders += 1;
        } else {
            literal.push(c);
        }
    }
    source.push_str(&regex::escape(&literal));
    source.push_str(TRAILING_SEPARATORS);
    source.push('$');

    (source, placeholders)
}

/// Compile a declarative pattern into a [`PathMatcher`].
///
/// # Errors
///
/// Only fails if the regex engine rejects the generated source (for instance
/// a pattern exceeding the engine's size limit). Malformed placeholders are
/// not errors; they match literally.
pub fn compile(pattern: &str) -> Result<PathMatcher, regex::Error> {
    let (source, placeholders) = pattern_to_regex(pattern);
    let regex = Regex::new(&source)?;
    Ok(PathMatcher {
        regex,
        placeholders,
    })
}

// Testmode - core/like.rs
//
// SQL LIKE-style wildcard matching: '%' matches zero or more characters,
// '_' matches exactly one, '\%' and '\_' are literal wildcards. Patterns
// are translated to regexes and matched unanchored (substring search).
//
// Matching is total: any pattern and any subject produce a bool, never an
// error. The translation escapes everything it does not deliberately emit,
// so no malformed regex can be constructed from user input.

use regex::Regex;

/// Placeholder for '\%' while the escaping pass runs.
///
/// Private-use codepoints: `regex::escape` only inserts ASCII backslashes,
/// so the escaping pass can neither produce nor disturb these, and the
/// restore step maps them back unambiguously.
const PERCENT_PLACEHOLDER: &str = "\u{e000}";

/// Placeholder for '\_' while the escaping pass runs.
const UNDERSCORE_PLACEHOLDER: &str = "\u{e001}";

/// A LIKE pattern compiled for repeated evaluation.
///
/// Compile once per pattern, then call [`is_match`](Self::is_match) per
/// subject. Filter sets hold one of these per configured pattern so a
/// listing of many labels translates each pattern a single time.
#[derive(Debug, Clone)]
pub struct LikeMatcher {
    pattern: String,
    regex: Option<Regex>,
}

impl LikeMatcher {
    /// Compiles a LIKE pattern.
    ///
    /// Never fails. The translated regex is always well-formed; the only
    /// way compilation can be refused is the engine's compiled-size limit
    /// on pathological multi-megabyte patterns, in which case the matcher
    /// logs a warning and matches nothing.
    pub fn new(pattern: &str) -> Self {
        let translated = translate(pattern);
        let regex = match Regex::new(&translated) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::warn!(
                    pattern_chars = pattern.chars().count(),
                    error = %e,
                    "LIKE pattern exceeds regex engine limits; it will match nothing"
                );
                None
            }
        };
        Self {
            pattern: pattern.to_string(),
            regex,
        }
    }

    /// The original LIKE pattern this matcher was built from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether the subject contains a match for the pattern.
    ///
    /// Substring semantics: the pattern is not anchored, so a pattern
    /// without wildcards matches any subject containing it. The empty
    /// pattern matches every subject. Case-sensitive.
    pub fn is_match(&self, subject: &str) -> bool {
        self.regex.as_ref().map_or(false, |re| re.is_match(subject))
    }
}

/// One-shot LIKE match of `pattern` against `subject`.
///
/// Equivalent to `LikeMatcher::new(pattern).is_match(subject)`. Use
/// [`LikeMatcher`] directly when the same pattern is evaluated against
/// many subjects.
pub fn matches(pattern: &str, subject: &str) -> bool {
    LikeMatcher::new(pattern).is_match(subject)
}

/// Translates a LIKE pattern into an unanchored regex.
///
/// Escaped wildcards are sheltered behind placeholders so the escaping
/// pass treats the rest of the pattern uniformly, then restored as regex
/// escape pairs. Live wildcards are rewritten last: '%' to `.*` and '_'
/// to `.`, skipping any character bound to a preceding backslash. After
/// the escaping pass every backslash starts a two-character escape pair,
/// so a single flag identifies the bound positions.
fn translate(pattern: &str) -> String {
    let sheltered = pattern
        .replace(r"\%", PERCENT_PLACEHOLDER)
        .replace(r"\_", UNDERSCORE_PLACEHOLDER);

    let escaped = regex::escape(&sheltered);

    let restored = escaped
        .replace(PERCENT_PLACEHOLDER, r"\%")
        .replace(UNDERSCORE_PLACEHOLDER, r"\_");

    let mut translated = String::with_capacity(restored.len() + 8);
    let mut in_escape = false;
    for c in restored.chars() {
        if in_escape {
            translated.push(c);
            in_escape = false;
            continue;
        }
        match c {
            '\\' => {
                translated.push(c);
                in_escape = true;
            }
            '%' => translated.push_str(".*"),
            '_' => translated.push('.'),
            other => translated.push(other),
        }
    }
    translated
}

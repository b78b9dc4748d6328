//! Pattern classification and the top-level match primitive.
//!
//! A raw pattern string is one of four things, tried in this order:
//! 1. `/.../` — the inner text is a regular expression, matched against the
//!    whole candidate (never a substring search),
//! 2. `*` — matches everything,
//! 3. no `*` or `?` at all — plain string equality,
//! 4. anything else — the backtracking glob in [`crate::glob`].

use fancy_regex::Regex;

use crate::glob;

/// The inner text of a `/.../`-delimited pattern, if it is one.
///
/// A lone `/` is not a regex pattern; the delimiters must be distinct
/// characters, so the pattern needs at least length 2.
pub(crate) fn regex_inner(pattern: &str) -> Option<&str> {
    if pattern.len() >= 2 && pattern.starts_with('/') && pattern.ends_with('/') {
        Some(&pattern[1..pattern.len() - 1])
    } else {
        None
    }
}

/// Compile the inner text of a `/.../` pattern, anchored to the full string.
pub(crate) fn compile_anchored(inner: &str, ignore_case: bool) -> Result<Regex, fancy_regex::Error> {
    let source = if ignore_case {
        format!("(?i)^(?:{inner})$")
    } else {
        format!("^(?:{inner})$")
    };
    Regex::new(&source)
}

/// Match a single pattern against a single candidate.
///
/// With `ignore_case` both sides are lower-cased before any comparison,
/// including the inner text of a `/.../` pattern.
///
/// A `/.../` pattern whose inner text does not compile matches nothing
/// (fail closed). Callers that need to reject malformed patterns up front
/// should compile them through [`crate::Wildcard`], which reports
/// [`crate::Error::InvalidRegex`] at construction.
pub fn matches(pattern: &str, candidate: &str, ignore_case: bool) -> bool {
    if ignore_case {
        return matches_classified(&pattern.to_lowercase(), &candidate.to_lowercase());
    }
    matches_classified(pattern, candidate)
}

/// [`matches`] over possibly-absent inputs: a missing pattern or candidate
/// never matches and never errors.
pub fn matches_opt(pattern: Option<&str>, candidate: Option<&str>, ignore_case: bool) -> bool {
    match (pattern, candidate) {
        (Some(p), Some(c)) => matches(p, c, ignore_case),
        _ => false,
    }
}

/// Dispatch on the pattern's classification, both sides already casefolded
/// if the caller asked for it.
fn matches_classified(pattern: &str, candidate: &str) -> bool {
    if let Some(inner) = regex_inner(pattern) {
        match compile_anchored(inner, false) {
            Ok(re) => matches!(re.is_match(candidate), Ok(true)),
            Err(_) => false,
        }
    } else if pattern == "*" {
        true
    } else if !pattern.contains('?') && !pattern.contains('*') {
        pattern == candidate
    } else {
        glob::glob_match(pattern, candidate)
    }
}

/// Whether a pattern needs matching at all, as opposed to plain equality.
///
/// True iff the pattern contains `*` or `?`, or is `/.../`-delimited.
pub fn contains_wildcard(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?') || regex_inner(pattern).is_some()
}

#[cfg(test)]
mod tests {
    use super::{contains_wildcard, matches, matches_opt};

    #[test]
    fn star_matches_everything() {
        for candidate in ["", "a", "index-2020", "*", "/re/"] {
            assert!(matches("*", candidate, false));
        }
    }

    #[test]
    fn plain_patterns_are_exact_equality() {
        assert!(matches("foo", "foo", false));
        assert!(!matches("foo", "fooo", false));
        assert!(!matches("foo", "fo", false));
        assert!(matches("", "", false));
        assert!(!matches("", "x", false));
    }

    #[test]
    fn glob_dispatch() {
        assert!(matches("a?c", "abc", false));
        assert!(!matches("a?c", "ac", false));
        assert!(matches("a*c", "ac", false));
        assert!(matches("a*c", "axyzc", false));
        assert!(matches("logstash-*", "logstash-2020.01.01", false));
    }

    #[test]
    fn regex_is_anchored_not_substring() {
        assert!(matches("/a.c/", "abc", false));
        assert!(!matches("/a.c/", "ac", false));
        assert!(!matches("/a.c/", "xabcx", false));
        assert!(matches("/ab|cd/", "cd", false));
        assert!(!matches("/ab|cd/", "xcd", false));
    }

    #[test]
    fn lone_slash_is_a_literal() {
        assert!(matches("/", "/", false));
        assert!(!matches("/", "x", false));
        // "//" is an empty regex, which only the empty candidate satisfies.
        assert!(matches("//", "", false));
        assert!(!matches("//", "x", false));
    }

    #[test]
    fn malformed_regex_matches_nothing() {
        assert!(!matches("/a(/", "a(", false));
        assert!(!matches("/[/", "[", false));
    }

    #[test]
    fn case_folding() {
        assert!(!matches("ABC", "abc", false));
        assert!(matches("ABC", "abc", true));
        assert!(matches("abc", "ABC", true));
        assert!(matches("A*C", "axc", true));
        assert!(matches("/A.C/", "abc", true));
    }

    #[test]
    fn absent_inputs_fail_closed() {
        assert!(!matches_opt(None, Some("abc"), false));
        assert!(!matches_opt(Some("*"), None, false));
        assert!(!matches_opt(None, None, true));
        assert!(matches_opt(Some("*"), Some("abc"), false));
    }

    #[test]
    fn wildcard_detection() {
        assert!(!contains_wildcard("foo"));
        assert!(contains_wildcard("f*o"));
        assert!(contains_wildcard("f?o"));
        assert!(contains_wildcard("/re/"));
        assert!(!contains_wildcard("/"));
        assert!(!contains_wildcard("re/"));
        assert!(!contains_wildcard("/re"));
    }

    #[test]
    fn repeated_matching_is_stable() {
        for _ in 0..3 {
            assert!(matches("a*b", "a-x-b", false));
            assert!(!matches("a*b", "a-x-c", false));
        }
    }
}

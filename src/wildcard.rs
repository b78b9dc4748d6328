//! Compiled pattern objects.
//!
//! [`Wildcard`] resolves the classification from [`crate::matcher`] once, at
//! pattern-definition time, so matching the same pattern against many
//! candidates does not re-classify (or re-compile a regex) per call. Values
//! are immutable after construction and freely shareable across threads.

use fancy_regex::Regex;

use crate::error::Error;
use crate::glob;
use crate::matcher;

/// A pattern compiled into its matchable form.
#[derive(Debug, Clone)]
pub enum Wildcard {
    /// The pattern `*`: matches every candidate.
    Any,
    /// Matches no candidate. The compiled form of an empty pattern
    /// collection, so that absent patterns never authorize anything.
    None,
    /// A pattern without metacharacters: plain string equality.
    Exact(String),
    /// A pattern containing `*` and/or `?`.
    Glob(String),
    /// A `/.../` pattern, compiled anchored to the full candidate.
    Regex(Regex),
    /// Lower-cases the candidate, then delegates to the wrapped pattern
    /// (itself built from the lower-cased raw text). Only ever wraps
    /// `Exact` or `Glob`; case-insensitive regexes use `(?i)` instead.
    Casefold(Box<Wildcard>),
    /// Disjunction: matches if any sub-pattern matches, first hit wins.
    Multi(Vec<Wildcard>),
}

impl Wildcard {
    /// Sentinel that matches everything.
    pub const ANY: Wildcard = Wildcard::Any;
    /// Sentinel that matches nothing.
    pub const NONE: Wildcard = Wildcard::None;

    /// Compile a single case-sensitive pattern.
    ///
    /// # Errors
    /// [`Error::InvalidRegex`] if a `/.../` pattern's inner text does not
    /// compile.
    pub fn case_sensitive(pattern: &str) -> Result<Wildcard, Error> {
        if let Some(inner) = matcher::regex_inner(pattern) {
            Self::compile_regex(inner, false)
        } else if pattern == "*" {
            Ok(Wildcard::Any)
        } else if matcher::contains_wildcard(pattern) {
            Ok(Wildcard::Glob(pattern.to_owned()))
        } else {
            Ok(Wildcard::Exact(pattern.to_owned()))
        }
    }

    /// Compile a single case-insensitive pattern.
    ///
    /// Globs and exact patterns are casefolded; `/.../` patterns keep their
    /// text as written and get the regex engine's own `(?i)` flag.
    ///
    /// # Errors
    /// [`Error::InvalidRegex`] if a `/.../` pattern's inner text does not
    /// compile.
    pub fn case_insensitive(pattern: &str) -> Result<Wildcard, Error> {
        if let Some(inner) = matcher::regex_inner(pattern) {
            Self::compile_regex(inner, true)
        } else if pattern == "*" {
            Ok(Wildcard::Any)
        } else if matcher::contains_wildcard(pattern) {
            Ok(Wildcard::Casefold(Box::new(Wildcard::Glob(
                pattern.to_lowercase(),
            ))))
        } else {
            Ok(Wildcard::Casefold(Box::new(Wildcard::Exact(
                pattern.to_lowercase(),
            ))))
        }
    }

    /// Compile a collection of case-sensitive patterns into a disjunction.
    /// An empty collection compiles to [`Wildcard::NONE`], never `ANY`.
    ///
    /// # Errors
    /// [`Error::InvalidRegex`] for the first pattern that fails to compile.
    pub fn case_sensitive_any<I, S>(patterns: I) -> Result<Wildcard, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::compile_any(patterns, Self::case_sensitive)
    }

    /// Compile a collection of case-insensitive patterns into a disjunction.
    /// An empty collection compiles to [`Wildcard::NONE`], never `ANY`.
    ///
    /// # Errors
    /// [`Error::InvalidRegex`] for the first pattern that fails to compile.
    pub fn case_insensitive_any<I, S>(patterns: I) -> Result<Wildcard, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::compile_any(patterns, Self::case_insensitive)
    }

    /// Build the `Multi` disjunction shared by the two `*_any` factories.
    fn compile_any<I, S>(
        patterns: I,
        compile: fn(&str) -> Result<Wildcard, Error>,
    ) -> Result<Wildcard, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let compiled = patterns
            .into_iter()
            .map(|pattern| compile(pattern.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        if compiled.is_empty() {
            Ok(Wildcard::None)
        } else {
            Ok(Wildcard::Multi(compiled))
        }
    }

    /// Compile the inner text of a `/.../` pattern, anchored.
    fn compile_regex(inner: &str, ignore_case: bool) -> Result<Wildcard, Error> {
        matcher::compile_anchored(inner, ignore_case)
            .map(Wildcard::Regex)
            .map_err(|err| Error::InvalidRegex(inner.to_owned(), err.to_string()))
    }

    /// Whether this pattern matches the candidate.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Wildcard::Any => true,
            Wildcard::None => false,
            Wildcard::Exact(text) => text == candidate,
            Wildcard::Glob(pattern) => glob::glob_match(pattern, candidate),
            Wildcard::Regex(re) => matches!(re.is_match(candidate), Ok(true)),
            Wildcard::Casefold(inner) => inner.matches(&candidate.to_lowercase()),
            Wildcard::Multi(list) => list.iter().any(|wildcard| wildcard.matches(candidate)),
        }
    }

    /// Whether any of the candidates matches this pattern.
    pub fn matches_any<I, S>(&self, candidates: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        candidates
            .into_iter()
            .any(|candidate| self.matches(candidate.as_ref()))
    }

    /// The raw pattern text, where one exists: the literal of an `Exact`
    /// pattern or the source of a `Glob` (lower-cased under `Casefold`).
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Wildcard::Exact(text) | Wildcard::Glob(text) => Some(text),
            Wildcard::Casefold(inner) => inner.pattern(),
            Wildcard::Any | Wildcard::None | Wildcard::Regex(_) | Wildcard::Multi(_) => None,
        }
    }
}

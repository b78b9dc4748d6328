//! Multi-pattern / multi-candidate combinators.
//!
//! Pure functions over [`matcher::matches`]; nothing here compiles or caches
//! patterns. Every function takes the patterns and candidates as any iterable
//! of string-like items (slice, `Vec`, `HashSet`, ...) plus an explicit
//! `ignore_case` flag, collapsing the original array/collection overloads into
//! one canonical form each. Returned sequences follow candidate iteration
//! order and keep duplicates.

use itertools::Itertools;

use crate::matcher;

/// True iff at least one pattern matches at least one candidate.
///
/// Vacuously false when either collection is empty. Short-circuits on the
/// first hit.
pub fn match_any<P, C>(patterns: P, candidates: C, ignore_case: bool) -> bool
where
    P: IntoIterator,
    P::Item: AsRef<str>,
    C: IntoIterator,
    C::Item: AsRef<str>,
{
    let candidates = candidates.into_iter().collect_vec();
    patterns
        .into_iter()
        .any(|pattern| pattern_match_any(pattern.as_ref(), &candidates, ignore_case))
}

/// True iff at least one candidate matches the single pattern.
pub fn pattern_match_any<C>(pattern: &str, candidates: C, ignore_case: bool) -> bool
where
    C: IntoIterator,
    C::Item: AsRef<str>,
{
    candidates
        .into_iter()
        .any(|candidate| matcher::matches(pattern, candidate.as_ref(), ignore_case))
}

/// True iff every candidate is matched by at least one pattern.
///
/// This quantifies over candidates, not patterns: a pattern that matches
/// nothing does not make the result false as long as each candidate finds
/// some other pattern.
pub fn match_all<P, C>(patterns: P, candidates: C, ignore_case: bool) -> bool
where
    P: IntoIterator,
    P::Item: AsRef<str>,
    C: IntoIterator,
    C::Item: AsRef<str>,
{
    let patterns = patterns.into_iter().collect_vec();
    candidates
        .into_iter()
        .all(|candidate| pattern_matched(&patterns, candidate.as_ref(), ignore_case))
}

/// True iff every pattern matches at least one candidate and the pattern
/// collection is non-empty. An empty pattern collection is not satisfied,
/// never vacuously true.
pub fn all_patterns_matched<P, C>(patterns: P, candidates: C, ignore_case: bool) -> bool
where
    P: IntoIterator,
    P::Item: AsRef<str>,
    C: IntoIterator,
    C::Item: AsRef<str>,
{
    let candidates = candidates.into_iter().collect_vec();
    let mut seen_any = false;
    for pattern in patterns {
        if !pattern_match_any(pattern.as_ref(), &candidates, ignore_case) {
            return false;
        }
        seen_any = true;
    }
    seen_any
}

/// The candidates matched by at least one pattern, in candidate order.
pub fn get_match_any<P, C>(patterns: P, candidates: C, ignore_case: bool) -> Vec<C::Item>
where
    P: IntoIterator,
    P::Item: AsRef<str>,
    C: IntoIterator,
    C::Item: AsRef<str>,
{
    let patterns = patterns.into_iter().collect_vec();
    candidates
        .into_iter()
        .filter(|candidate| pattern_matched(&patterns, candidate.as_ref(), ignore_case))
        .collect()
}

/// For each candidate in order, every pattern that matches it. A pattern
/// matching several candidates appears once per candidate.
pub fn get_all_matching_patterns<P, C>(patterns: P, candidates: C, ignore_case: bool) -> Vec<String>
where
    P: IntoIterator,
    P::Item: AsRef<str>,
    C: IntoIterator,
    C::Item: AsRef<str>,
{
    let patterns = patterns
        .into_iter()
        .map(|pattern| pattern.as_ref().to_owned())
        .collect_vec();
    candidates
        .into_iter()
        .flat_map(|candidate| {
            patterns
                .iter()
                .filter(|pattern| matcher::matches(pattern, candidate.as_ref(), ignore_case))
                .cloned()
                .collect_vec()
        })
        .collect()
}

/// The first pattern, in collection order, matching the candidate.
pub fn get_first_matching_pattern<P>(
    patterns: P,
    candidate: &str,
    ignore_case: bool,
) -> Option<P::Item>
where
    P: IntoIterator,
    P::Item: AsRef<str>,
{
    patterns
        .into_iter()
        .find(|pattern| matcher::matches(pattern.as_ref(), candidate, ignore_case))
}

/// Whether any pattern in the slice matches the candidate.
fn pattern_matched<S: AsRef<str>>(patterns: &[S], candidate: &str, ignore_case: bool) -> bool {
    patterns
        .iter()
        .any(|pattern| matcher::matches(pattern.as_ref(), candidate, ignore_case))
}

//! In-place filtering of caller-owned string sets.
//!
//! Used to prune authorization scopes: the caller keeps ownership of the set,
//! these functions only inspect and remove elements, never insert. Both
//! iterate a snapshot of the set and delete from the live one, so removal
//! never invalidates the iteration.

use std::collections::HashSet;

use itertools::Itertools;

use crate::matcher;

/// Remove every element matching `pattern`. Returns whether the set changed.
///
/// A pattern without wildcard metacharacters is a plain membership removal
/// and skips matching entirely.
pub fn wildcard_remove_from_set(set: &mut HashSet<String>, pattern: &str) -> bool {
    if set.is_empty() {
        return false;
    }
    if !matcher::contains_wildcard(pattern) {
        return set.remove(pattern);
    }
    let snapshot = set.iter().cloned().collect_vec();
    let mut modified = false;
    for element in snapshot {
        if matcher::matches(pattern, &element, false) {
            modified = set.remove(&element) || modified;
        }
    }
    modified
}

/// Keep only the elements matched by at least one of `patterns`; remove the
/// rest. Returns whether the set changed.
///
/// An empty pattern collection therefore empties a non-empty set — absent
/// patterns retain nothing.
pub fn wildcard_retain_in_set<S: AsRef<str>>(set: &mut HashSet<String>, patterns: &[S]) -> bool {
    if set.is_empty() {
        return false;
    }
    let snapshot = set.iter().cloned().collect_vec();
    let mut modified = false;
    for element in snapshot {
        let retained = patterns
            .iter()
            .any(|pattern| matcher::matches(pattern.as_ref(), &element, false));
        if !retained {
            modified = set.remove(&element) || modified;
        }
    }
    modified
}

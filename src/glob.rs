//! Backtracking glob match over `*` and `?`.
//!
//! This is the fallback once a pattern is known to contain wildcard
//! metacharacters; classification happens in [`crate::matcher`], not here.
//! `*` matches zero or more characters, `?` matches exactly one.

/// Match a glob pattern against a candidate, two-pointer with backtracking.
///
/// Keeps one backup position per side: `text_backup` remembers where the
/// candidate scan stood when the last `*` was seen, `wild_backup` the pattern
/// position right after that `*`. On a mismatch the scan resumes one candidate
/// character further, letting the `*` swallow one more character. Amortized
/// linear for typical authz patterns (few stars).
pub fn glob_match(pattern: &str, candidate: &str) -> bool {
    let pat: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = candidate.chars().collect();
    let mut i = 0;
    let mut j = 0;
    let mut text_backup: Option<usize> = None;
    let mut wild_backup: Option<usize> = None;

    while i < text.len() {
        if j < pat.len() && pat[j] == '*' {
            text_backup = Some(i);
            j += 1;
            wild_backup = Some(j);
        } else if j < pat.len() && (pat[j] == '?' || pat[j] == text[i]) {
            i += 1;
            j += 1;
        } else {
            // No star seen so far means there is nothing to backtrack to.
            let (Some(text_pos), Some(wild_pos)) = (text_backup, wild_backup) else {
                return false;
            };
            i = text_pos + 1;
            text_backup = Some(i);
            j = wild_pos;
        }
    }

    // Trailing stars match the empty remainder.
    while j < pat.len() && pat[j] == '*' {
        j += 1;
    }
    j >= pat.len()
}

#[cfg(test)]
mod tests {
    use super::glob_match;

    #[test]
    fn literal_patterns() {
        assert!(glob_match("abc", "abc"));
        assert!(!glob_match("abc", "abd"));
        assert!(!glob_match("abc", "abcd"));
        assert!(!glob_match("abcd", "abc"));
    }

    #[test]
    fn empty_corners() {
        assert!(glob_match("", ""));
        assert!(!glob_match("", "a"));
        assert!(glob_match("*", ""));
        assert!(glob_match("**", ""));
        assert!(!glob_match("?", ""));
    }

    #[test]
    fn question_mark_needs_exactly_one_char() {
        assert!(glob_match("a?c", "abc"));
        assert!(!glob_match("a?c", "ac"));
        assert!(!glob_match("a?c", "abbc"));
        assert!(glob_match("???", "abc"));
        assert!(!glob_match("???", "ab"));
    }

    #[test]
    fn star_matches_zero_or_more() {
        assert!(glob_match("a*c", "ac"));
        assert!(glob_match("a*c", "abc"));
        assert!(glob_match("a*c", "axyzc"));
        assert!(!glob_match("a*c", "axyzd"));
        assert!(glob_match("*", "anything"));
        assert!(glob_match("a*", "a"));
        assert!(glob_match("*a", "a"));
    }

    #[test]
    fn backtracking_reconsiders_star_extent() {
        // The first candidate 'a' after the star is not the right anchor;
        // the star has to grow past it.
        assert!(glob_match("*a*b", "caab"));
        assert!(glob_match("*aab", "aaab"));
        assert!(glob_match("a*b*c", "axbxbxc"));
        assert!(!glob_match("a*b*c", "axbxbx"));
    }

    #[test]
    fn mixed_wildcards() {
        assert!(glob_match("logs-?-*", "logs-1-2020"));
        assert!(!glob_match("logs-?-*", "logs--2020"));
        assert!(glob_match("*?", "x"));
        assert!(!glob_match("*?", ""));
    }

    #[test]
    fn unicode_candidates() {
        assert!(glob_match("?", "ü"));
        assert!(glob_match("gr?ße", "größe"));
        assert!(glob_match("gr*e", "größe"));
    }
}

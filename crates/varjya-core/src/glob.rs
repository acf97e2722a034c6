//! Seam to the external wildcard engine.
//!
//! The rest of the crate treats globbing as an already-correct primitive:
//! one pattern against one candidate, yielding a boolean, with a case-fold
//! toggle. `*`, `?` and `[...]` do not cross path separators; `**` does.

use glob::{MatchOptions, Pattern};
use tracing::debug;

/// Match `pattern` against `candidate` with the engine's full grammar.
///
/// Rule compilation is total, so patterns the engine cannot parse surface
/// here and nowhere else; they are logged and reported as non-matching.
pub fn glob_match(pattern: &str, candidate: &str, case_insensitive: bool) -> bool {
    let options = MatchOptions {
        case_sensitive: !case_insensitive,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    match Pattern::new(pattern) {
        Ok(compiled) => compiled.matches_with(candidate, options),
        Err(err) => {
            debug!("unmatchable wildcard pattern {:?}: {}", pattern, err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_stays_within_one_segment() {
        assert!(glob_match("*", "file.txt", false));
        assert!(!glob_match("*", "dir/file.txt", false));
        assert!(glob_match("*/*", "dir/file.txt", false));
    }

    #[test]
    fn test_double_star_crosses_segments() {
        assert!(glob_match("**/file.txt", "a/b/file.txt", false));
        assert!(glob_match("a/**", "a/b/c", false));
    }

    #[test]
    fn test_question_mark_and_classes() {
        assert!(glob_match("fo?", "foo", false));
        assert!(!glob_match("fo?", "fo/", false));
        assert!(glob_match("[fg]oo", "goo", false));
        assert!(!glob_match("[fg]oo", "zoo", false));
    }

    #[test]
    fn test_case_fold_toggle() {
        assert!(!glob_match("*.LOG", "debug.log", false));
        assert!(glob_match("*.LOG", "debug.log", true));
    }

    #[test]
    fn test_unparseable_pattern_matches_nothing() {
        assert!(!glob_match("[", "[", false));
        assert!(!glob_match("[", "anything", true));
    }

    #[test]
    fn test_star_matches_hidden_names() {
        assert!(glob_match("*", ".hidden", false));
    }
}

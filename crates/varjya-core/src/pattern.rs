//! Pattern compilation: raw ignore-style pattern text into [`Rule`]s.
//!
//! Compilation is a purely lexical pass. It strips the negation prefix and
//! the directory-only suffix, then derives the flags the matcher needs so
//! they are computed exactly once per pattern.

use std::fmt;

/// Metacharacters recognized by the wildcard engine: `*`, `?`, `[`, `\`.
pub(crate) fn is_glob_special(c: char) -> bool {
    matches!(c, '*' | '?' | '[' | '\\')
}

/// Byte length of the literal run before the first glob metacharacter, or
/// the whole pattern if it contains none.
pub fn literal_prefix_len(pattern: &str) -> usize {
    pattern.find(is_glob_special).unwrap_or(pattern.len())
}

/// Properties derived from a pattern at compile time, never recomputed.
///
/// The flags are independent and combinable; a plain struct of booleans
/// stands in for the usual bitmask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleFlags {
    /// No interior `/` in the pattern: match against the basename only.
    pub no_dir: bool,
    /// Pattern is `*<suffix>` with no other metacharacter: eligible for the
    /// literal-suffix fast path.
    pub ends_with: bool,
    /// Pattern ended with `/`: only directory candidates can match.
    pub must_be_dir: bool,
    /// Pattern started with `!`: a match means the path is included.
    pub negative: bool,
}

impl fmt::Display for RuleFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        if self.no_dir {
            names.push("no_dir");
        }
        if self.ends_with {
            names.push("ends_with");
        }
        if self.must_be_dir {
            names.push("must_be_dir");
        }
        if self.negative {
            names.push("negative");
        }
        f.write_str(&names.join("|"))
    }
}

/// A compiled exclusion pattern scoped to a base directory.
///
/// Rules are immutable once created. `base` is the directory the rule is
/// scoped to, either empty (root scope) or terminated by `/`; `source_pos`
/// records declaration order for diagnostics and plays no part in matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Normalized pattern body, leading `!` and trailing `/` stripped.
    pub pattern: String,
    /// Scoping directory, empty or `/`-terminated.
    pub base: String,
    /// Properties derived at compile time.
    pub flags: RuleFlags,
    /// Declaration-order marker.
    pub source_pos: usize,
}

impl Rule {
    /// Compile a raw pattern into a rule.
    ///
    /// Compilation is total: every input yields a valid rule. Degenerate
    /// patterns (empty text, a bare `/`) compile to rules that simply never
    /// match anything.
    pub fn new(raw: &str, base: impl Into<String>, source_pos: usize) -> Self {
        let (pattern, flags) = parse_pattern(raw);
        Rule {
            pattern: pattern.to_string(),
            base: base.into(),
            flags,
            source_pos,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.pattern)?;
        if !self.base.is_empty() {
            write!(f, " under {:?}", self.base)?;
        }
        write!(f, " [{}] at {}", self.flags, self.source_pos)
    }
}

/// Normalize the pattern text and derive its flags.
fn parse_pattern(raw: &str) -> (&str, RuleFlags) {
    let mut flags = RuleFlags::default();
    let mut pattern = raw;

    if let Some(rest) = pattern.strip_prefix('!') {
        flags.negative = true;
        pattern = rest;
    }

    if let Some(rest) = pattern.strip_suffix('/') {
        flags.must_be_dir = true;
        pattern = rest;
    }

    // A pattern without an interior separator is matched against basenames.
    match pattern.find('/') {
        None => flags.no_dir = true,
        Some(pos) if pos + 1 == pattern.len() => flags.no_dir = true,
        Some(_) => {}
    }

    if let Some(rest) = pattern.strip_prefix('*') {
        if literal_prefix_len(rest) == rest.len() {
            flags.ends_with = true;
        }
    }

    (pattern, flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchored_literal_has_no_flags() {
        let rule = Rule::new("/simple-pattern", "", 0);
        assert_eq!(rule.pattern, "/simple-pattern");
        assert_eq!(rule.flags, RuleFlags::default());
    }

    #[test]
    fn test_negation_prefix() {
        let rule = Rule::new("!some/path", "", 0);
        assert_eq!(rule.pattern, "some/path");
        assert_eq!(
            rule.flags,
            RuleFlags {
                negative: true,
                ..RuleFlags::default()
            }
        );
    }

    #[test]
    fn test_trailing_slash_means_directory_only() {
        let rule = Rule::new("must/be/dir/", "", 0);
        assert_eq!(rule.pattern, "must/be/dir");
        assert_eq!(
            rule.flags,
            RuleFlags {
                must_be_dir: true,
                ..RuleFlags::default()
            }
        );
    }

    #[test]
    fn test_leading_star_literal_suffix() {
        let rule = Rule::new("*ends-with-this", "", 0);
        assert_eq!(
            rule.flags,
            RuleFlags {
                no_dir: true,
                ends_with: true,
                ..RuleFlags::default()
            }
        );
    }

    #[test]
    fn test_star_with_later_metacharacter_is_not_suffix() {
        let rule = Rule::new("*.*.too", "", 0);
        assert!(rule.flags.no_dir);
        assert!(!rule.flags.ends_with);
    }

    #[test]
    fn test_separatorless_patterns_are_basename_rules() {
        for pattern in ["node_modules", "*.log", "foo?", "trailing/"] {
            let rule = Rule::new(pattern, "", 0);
            assert!(rule.flags.no_dir, "{pattern} should be a basename rule");
        }
    }

    #[test]
    fn test_slash_in_last_position_counts_as_separatorless() {
        // A doubled trailing slash leaves one behind after normalization.
        let rule = Rule::new("a//", "", 0);
        assert_eq!(rule.pattern, "a/");
        assert!(rule.flags.must_be_dir);
        assert!(rule.flags.no_dir);
    }

    #[test]
    fn test_empty_and_root_patterns_compile() {
        let empty = Rule::new("", "", 0);
        assert_eq!(empty.pattern, "");
        assert!(empty.flags.no_dir);

        let negated = Rule::new("!", "", 1);
        assert_eq!(negated.pattern, "");
        assert!(negated.flags.negative);

        let root = Rule::new("/", "", 2);
        assert_eq!(root.pattern, "");
        assert!(root.flags.must_be_dir);
        assert!(root.flags.no_dir);
    }

    #[test]
    fn test_compilation_is_idempotent() {
        for pattern in ["!build/", "*.o", "/src/**/gen", "", "*"] {
            let first = Rule::new(pattern, "sub/", 7);
            let second = Rule::new(pattern, "sub/", 7);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_literal_prefix_len() {
        assert_eq!(literal_prefix_len("abc?"), 3);
        assert_eq!(literal_prefix_len("abc"), 3);
        assert_eq!(literal_prefix_len("*abc"), 0);
        assert_eq!(literal_prefix_len("a[bc]d"), 1);
        assert_eq!(literal_prefix_len(r"a\b"), 1);
        assert_eq!(literal_prefix_len(""), 0);
    }

    #[test]
    fn test_flags_display() {
        let rule = Rule::new("!*~", "", 0);
        assert_eq!(rule.flags.to_string(), "no_dir|ends_with|negative");
        assert_eq!(RuleFlags::default().to_string(), "");
    }
}

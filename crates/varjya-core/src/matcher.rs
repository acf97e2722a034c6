//! The decision procedure: testing path candidates against a rule set.
//!
//! Rules are scanned from the most recently declared to the first; the first
//! match found decides, which gives declaration-order rule sets their
//! last-match-wins semantics. Each rule is applied either to the candidate's
//! basename (separatorless patterns) or to its full path relative to the
//! rule's scoping base, with literal fast paths in front of the wildcard
//! engine.

use std::fmt;

use tracing::trace;

use crate::config::MatchConfig;
use crate::error::Error;
use crate::glob::glob_match;
use crate::pattern::{literal_prefix_len, Rule};
use crate::ruleset::RuleSet;
use crate::Result;

/// Outcome of testing a candidate against a rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// A rule matched; the path is excluded.
    Excluded,
    /// A negated rule matched; the path is explicitly included.
    Included,
    /// No rule matched.
    Undecided,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Decision::Excluded => "Excluded",
            Decision::Included => "Included",
            Decision::Undecided => "Undecided",
        })
    }
}

/// A path being tested against a rule set.
///
/// Candidates are borrowed, per-query values: a path relative to the scope
/// root plus its directory classification. Paths use `/` as separator.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// Full relative path of the entry.
    pub path: &'a str,
    /// Whether the entry is a directory.
    pub is_dir: bool,
}

impl<'a> Candidate<'a> {
    /// Create a candidate for `path`.
    pub fn new(path: &'a str, is_dir: bool) -> Self {
        Self { path, is_dir }
    }

    /// Final path segment: the text after the last `/`.
    pub fn basename(&self) -> &'a str {
        match self.path.rfind('/') {
            Some(pos) => &self.path[pos + 1..],
            None => self.path,
        }
    }
}

/// Decide the fate of `candidate` against `rules`.
///
/// Returns [`Decision::Undecided`] when no rule matches, and an error only
/// when the deciding scan encounters a rule with an invalid base, which
/// indicates a bug in whatever populated the set.
pub fn decide(
    candidate: &Candidate<'_>,
    rules: &RuleSet,
    config: &MatchConfig,
) -> Result<Decision> {
    let decision = match last_match(candidate, rules, config)? {
        Some(rule) if rule.flags.negative => Decision::Included,
        Some(_) => Decision::Excluded,
        None => Decision::Undecided,
    };
    trace!("{}: {}", candidate.path, decision);
    Ok(decision)
}

/// Scan `rules` in reverse for the rule that decides `candidate`.
///
/// The first match in reverse declaration order wins. Returns `None` when
/// the whole set is scanned without a match.
pub fn last_match<'r>(
    candidate: &Candidate<'_>,
    rules: &'r RuleSet,
    config: &MatchConfig,
) -> Result<Option<&'r Rule>> {
    for rule in rules.rules().iter().rev() {
        if rule.flags.must_be_dir && !candidate.is_dir {
            trace!("{}: skipping directory-only rule {}", candidate.path, rule);
            continue;
        }

        if rule.flags.no_dir {
            if match_basename(candidate.basename(), rule, config) {
                trace!("{}: matched {}", candidate.path, rule);
                return Ok(Some(rule));
            }
            continue;
        }

        if !rule.base.is_empty() && !rule.base.ends_with('/') {
            return Err(Error::InvalidRuleBase {
                base: rule.base.clone(),
                position: rule.source_pos,
            });
        }

        if match_pathname(candidate.path, rule, config) {
            trace!("{}: matched {}", candidate.path, rule);
            return Ok(Some(rule));
        }
    }

    Ok(None)
}

/// Case-policy-aware equality of two byte ranges of the same length.
fn bytes_eq(a: &[u8], b: &[u8], config: &MatchConfig) -> bool {
    if config.case_insensitive {
        a.eq_ignore_ascii_case(b)
    } else {
        a == b
    }
}

/// Match a separatorless rule against the candidate's basename.
fn match_basename(basename: &str, rule: &Rule, config: &MatchConfig) -> bool {
    let pattern = rule.pattern.as_str();
    let prefix = literal_prefix_len(pattern);

    if prefix == pattern.len() {
        // Fully literal pattern: a plain comparison decides.
        return pattern.len() == basename.len()
            && bytes_eq(pattern.as_bytes(), basename.as_bytes(), config);
    }

    if rule.flags.ends_with {
        // "*suffix" against "foo-suffix": a literal tail comparison.
        let suffix = &pattern.as_bytes()[1..];
        return basename.len() >= suffix.len()
            && bytes_eq(
                &basename.as_bytes()[basename.len() - suffix.len()..],
                suffix,
                config,
            );
    }

    glob_match(pattern, basename, config.case_insensitive)
}

/// Match a rule with interior separators against the candidate's full path,
/// interpreted relative to the rule's scoping base.
///
/// The base must be empty or `/`-terminated; [`last_match`] validates this
/// before calling.
fn match_pathname(path: &str, rule: &Rule, config: &MatchConfig) -> bool {
    let mut pattern = rule.pattern.as_str();
    let base = rule.base.as_str();

    // The base's trailing separator is not part of the comparison.
    let base_len = if base.ends_with('/') {
        base.len() - 1
    } else {
        base.len()
    };

    // A leading '/' anchors the pattern to the base itself rather than to
    // any deeper subdirectory.
    if let Some(rest) = pattern.strip_prefix('/') {
        pattern = rest;
    }

    // The candidate must live strictly under the base directory.
    if path.len() < base_len + 1 {
        return false;
    }
    if base_len != 0 && path.as_bytes()[base_len] != b'/' {
        return false;
    }
    if !bytes_eq(
        &path.as_bytes()[..base_len],
        &base.as_bytes()[..base_len],
        config,
    ) {
        return false;
    }

    // Path relative to the base.
    let mut name = &path[base_len..];
    if let Some(rest) = name.strip_prefix('/') {
        name = rest;
    }

    let prefix = literal_prefix_len(pattern);
    if prefix > 0 {
        if prefix > name.len() {
            return false;
        }
        if !bytes_eq(
            &pattern.as_bytes()[..prefix],
            &name.as_bytes()[..prefix],
            config,
        ) {
            return false;
        }
        if prefix == pattern.len() && prefix == name.len() {
            // An entirely literal pattern that consumed the whole name needs
            // no wildcard evaluation.
            return true;
        }
        pattern = &pattern[prefix..];
    }

    glob_match(pattern, path, config.case_insensitive)
}

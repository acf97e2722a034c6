//! Ordered, append-only collections of exclusion rules.

use crate::config::MatchConfig;
use crate::matcher::{decide, Candidate, Decision};
use crate::pattern::Rule;

/// The rules of one ignore scope, in declaration order.
///
/// Order is semantically meaningful: the matcher scans in reverse, so the
/// most recently added matching rule decides. There is no removal and no
/// deduplication. Populate the set fully before sharing it across threads;
/// concurrent reads are safe once appends stop.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Compile `raw` and append the resulting rule.
    ///
    /// `base` scopes the rule to a directory (empty for the root scope) and
    /// `source_pos` records where the pattern was declared. Compilation is
    /// total, so this never fails.
    pub fn add(&mut self, raw: &str, base: impl Into<String>, source_pos: usize) {
        self.rules.push(Rule::new(raw, base, source_pos));
    }

    /// Number of rules in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// `true` if the set holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The rules in declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Decide the fate of `path` against this set.
    ///
    /// Convenience wrapper around [`decide`].
    pub fn decide(
        &self,
        path: &str,
        is_dir: bool,
        config: &MatchConfig,
    ) -> crate::Result<Decision> {
        decide(&Candidate::new(path, is_dir), self, config)
    }
}

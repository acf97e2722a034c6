//! varjya-core: hierarchical path-exclusion rules and matching.
//!
//! Compiles ignore-style patterns into [`Rule`]s, collects them in ordered
//! [`RuleSet`]s, and decides for each path candidate whether it is excluded,
//! explicitly included, or left undecided. Pattern files, tree traversal and
//! the wildcard grammar itself live outside this crate.

pub mod config;
pub mod error;
pub mod glob;
pub mod logging;
pub mod matcher;
pub mod pattern;
pub mod ruleset;

pub use config::MatchConfig;
pub use error::{Error, Result};
pub use matcher::{decide, last_match, Candidate, Decision};
pub use pattern::{Rule, RuleFlags};
pub use ruleset::RuleSet;

//! Matching configuration for varjya.

use serde::{Deserialize, Serialize};

/// Configuration threaded through every comparison and wildcard call.
///
/// There is no process-wide toggle: each decision is a pure function of the
/// candidate, the rule set and this value, so both case policies can be
/// exercised side by side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Treat the filesystem as case-insensitive.
    ///
    /// When set, literal comparisons fold ASCII case and the wildcard
    /// engine is invoked with case folding enabled.
    #[serde(default)]
    pub case_insensitive: bool,
}

impl MatchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &std::path::Path) -> crate::Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

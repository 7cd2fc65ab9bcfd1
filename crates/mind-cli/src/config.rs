//! Planner configuration loading.

use std::path::Path;

use anyhow::{Context, Result};
use mind_core::PlanConfig;
use mind_goap::SearchConfig;
use serde::{Deserialize, Serialize};

/// Sizing for the planner and its plans, loaded from a YAML file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MindConfig {
    /// Search arena and expansion limits
    pub search: SearchConfig,

    /// Plan buffer sizing
    pub plan: PlanConfig,
}

impl MindConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: MindConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.search.max_nodes > 0, "search.max_nodes must be positive");
        anyhow::ensure!(self.plan.growth > 0, "plan.growth must be positive");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let file = write_config("search:\n  max_nodes: 64\n");
        let config = MindConfig::load(file.path()).unwrap();
        assert_eq!(config.search.max_nodes, 64);
        assert_eq!(config.search.max_expansions, None);
        assert_eq!(config.plan, PlanConfig::default());
    }

    #[test]
    fn missing_path_uses_defaults() {
        assert_eq!(MindConfig::load_or_default(None).unwrap(), MindConfig::default());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let file = write_config("search:\n  max_nodes: 0\n");
        assert!(MindConfig::load(file.path()).is_err());
    }
}

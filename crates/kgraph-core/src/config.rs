//! Configuration for knowledge-graph defaults.
//!
//! Load order: `.kgraph/config.toml` → environment variables → defaults.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KgConfig {
    pub knowledge: KnowledgeConfig,
}

/// Knowledge-graph defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// Weight for relations declared without an explicit weight.
    pub relation_weight: f32,
    /// Hop limit for related-entity expansion when none is given.
    pub related_depth: usize,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            relation_weight: crate::knowledge::DEFAULT_RELATION_WEIGHT,
            related_depth: crate::knowledge::DEFAULT_RELATED_DEPTH,
        }
    }
}

/// Helper to parse an env var and apply it to a config field.
fn env_override<T: std::str::FromStr>(var: &str, target: &mut T) {
    if let Ok(v) = std::env::var(var)
        && let Ok(n) = v.parse()
    {
        *target = n;
    }
}

impl KgConfig {
    /// Load config from `.kgraph/config.toml` under `root`, with env var overrides.
    /// Falls back to defaults if no config file exists.
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = root.join(".kgraph").join("config.toml");

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };

        env_override(
            "KGRAPH_RELATION_WEIGHT",
            &mut config.knowledge.relation_weight,
        );
        env_override("KGRAPH_RELATED_DEPTH", &mut config.knowledge.related_depth);

        config.validate()?;
        Ok(config)
    }

    /// Reject weights that cannot be compared or printed meaningfully.
    pub fn validate(&self) -> Result<()> {
        if !self.knowledge.relation_weight.is_finite() {
            anyhow::bail!(
                "relation_weight must be finite, found {}",
                self.knowledge.relation_weight
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KgConfig::default();
        assert_eq!(config.knowledge.relation_weight, 1.0);
        assert_eq!(config.knowledge.related_depth, 2);
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
[knowledge]
related_depth = 4
"#;
        let config: KgConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.knowledge.related_depth, 4);
        // Defaults for unspecified fields
        assert_eq!(config.knowledge.relation_weight, 1.0);
    }

    #[test]
    fn test_config_load_nonexistent() {
        let config = KgConfig::load(Path::new("/nonexistent/path")).unwrap();
        assert_eq!(config.knowledge.related_depth, 2);
    }

    #[test]
    fn test_load_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join(".kgraph");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("config.toml"),
            r#"
[knowledge]
relation_weight = 0.5
"#,
        )
        .unwrap();

        let config = KgConfig::load(tmp.path()).unwrap();
        assert_eq!(config.knowledge.relation_weight, 0.5);
    }

    #[test]
    fn test_validate_rejects_nan() {
        let mut config = KgConfig::default();
        config.knowledge.relation_weight = f32::NAN;
        assert!(config.validate().is_err());
    }
}

//! Read knowledge-graph manifests (TOML lists of entities and relations).

use crate::config::KgConfig;
use crate::knowledge::KnowledgeGraph;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Entities and relations to load into a [`KnowledgeGraph`].
///
/// ```toml
/// entities = ["A", "B"]
///
/// [[relations]]
/// from = "A"
/// to = "B"
/// weight = 2.0
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphManifest {
    pub entities: Vec<String>,
    pub relations: Vec<RelationEntry>,
}

/// A single relation line. Missing weights fall back to the configured
/// relation weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationEntry {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
}

impl GraphManifest {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("failed to parse graph manifest")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read graph manifest {}", path.display()))?;
        Self::from_toml(&content)
    }

    /// Register every entity, then every relation, in file order.
    pub fn build(&self, config: &KgConfig) -> Result<KnowledgeGraph> {
        let mut kg = KnowledgeGraph::new();
        for entity in &self.entities {
            kg.add_entity(entity.as_str())
                .with_context(|| format!("invalid entity '{entity}'"))?;
        }
        for rel in &self.relations {
            let weight = rel.weight.unwrap_or(config.knowledge.relation_weight);
            kg.add_relation(&rel.from, &rel.to, weight)
                .with_context(|| format!("invalid relation {} -> {}", rel.from, rel.to))?;
        }
        tracing::debug!(
            entities = self.entities.len(),
            relations = self.relations.len(),
            "built knowledge graph from manifest"
        );
        Ok(kg)
    }
}

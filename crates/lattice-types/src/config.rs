// ─────────────────────────────────────────────────────────────────────
// SCPN Lattice Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

/// Top-level network description.
/// Maps 1:1 to the network JSON schema: a named list of labelled nodes
/// plus weighted, optionally directed edges between them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub network_name: String,
    pub nodes: Vec<NodeSpec>,
    pub edges: Vec<EdgeSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    pub label: String,
}

/// A single edge. Weight defaults to 1, directedness to false, so the
/// minimal JSON form is `{"source": "a", "target": "b"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub source: String,
    pub target: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default)]
    pub directed: bool,
}

fn default_weight() -> f64 {
    1.0
}

impl NetworkConfig {
    pub fn from_file(path: &str) -> crate::error::LatticeResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: NetworkConfig = serde_json::from_str(&text)?;
        Ok(config)
    }
}

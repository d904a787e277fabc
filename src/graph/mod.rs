// src/graph/mod.rs
//! Mind-map graph: wire description, render-ready nodes/edges, layout.

pub mod builder;
pub mod layout;

use serde::{Deserialize, Deserializer};

pub use builder::{build_mind_map, parse_graph_payload, validate_mind_map};
pub use layout::{layout_mind_map, LayoutBounds, LayoutConfig};

/// Graph description as returned (JSON-encoded) by the `/mindmap` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphDescription {
    pub nodes: Vec<RawNode>,
    #[serde(default)]
    pub edges: Option<Vec<RawEdge>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawNode {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEdge {
    #[serde(deserialize_with = "id_string")]
    pub source: String,
    #[serde(deserialize_with = "id_string")]
    pub target: String,
    #[serde(default)]
    pub label: Option<String>,
}

/// Model output is loose about id types, so `1` and `"1"` both become `"1"`.
fn id_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MindMapNode {
    pub id: String,
    pub label: String,
    /// Top-left corner of the node box; `ORIGIN` until laid out.
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MindMapEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub animated: bool,
    pub label: Option<String>,
}

/// Render-ready mind-map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MindMap {
    pub nodes: Vec<MindMapNode>,
    pub edges: Vec<MindMapEdge>,
    /// Set by the layout engine.
    pub bounds: Option<LayoutBounds>,
}

impl MindMap {
    pub fn node(&self, id: &str) -> Option<&MindMapNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

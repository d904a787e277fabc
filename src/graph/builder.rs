// src/graph/builder.rs

use std::collections::HashSet;

use tracing::debug;

use crate::error::{NeuroDocError, Result};
use super::{GraphDescription, MindMap, MindMapEdge, MindMapNode, Position};

/// Parse the `graph` string of a `/mindmap` response.
///
/// The service strips model chatter down to the first `{...}` span, but a
/// reply can still carry prose around the object. When the whole string is
/// not valid JSON the outermost brace span is tried before giving up.
pub fn parse_graph_payload(raw: &str) -> Result<GraphDescription> {
    match serde_json::from_str::<GraphDescription>(raw.trim()) {
        Ok(description) => Ok(description),
        Err(first_error) => {
            let start = raw.find('{');
            let end = raw.rfind('}');
            match (start, end) {
                (Some(start), Some(end)) if start < end => {
                    debug!("Graph payload not pure JSON, retrying brace span {}..={}", start, end);
                    serde_json::from_str(&raw[start..=end])
                        .map_err(|e| NeuroDocError::MalformedGraph(e.to_string()))
                }
                _ => Err(NeuroDocError::MalformedGraph(first_error.to_string())),
            }
        }
    }
}

pub fn edge_id(source: &str, target: &str) -> String {
    format!("e{}-{}", source, target)
}

/// Turn a graph description into render-ready nodes and edges.
///
/// Pure transformation: no deduplication and no referential checks, an edge
/// naming a missing node is passed through as-is. See [`validate_mind_map`].
pub fn build_mind_map(description: GraphDescription) -> MindMap {
    let nodes = description
        .nodes
        .into_iter()
        .map(|n| MindMapNode {
            id: n.id,
            label: n.label,
            position: Position::ORIGIN,
        })
        .collect();

    let edges = description
        .edges
        .unwrap_or_default()
        .into_iter()
        .map(|e| MindMapEdge {
            id: edge_id(&e.source, &e.target),
            source: e.source,
            target: e.target,
            animated: true,
            label: e.label,
        })
        .collect();

    MindMap {
        nodes,
        edges,
        bounds: None,
    }
}

pub fn validate_mind_map(map: &MindMap) -> Result<()> {
    if map.nodes.is_empty() {
        return Err(NeuroDocError::MalformedGraph("graph has no nodes".to_string()));
    }

    let mut ids = HashSet::with_capacity(map.nodes.len());
    for node in &map.nodes {
        if !ids.insert(node.id.as_str()) {
            return Err(NeuroDocError::MalformedGraph(format!(
                "duplicate node id '{}'",
                node.id
            )));
        }
    }

    for edge in &map.edges {
        for endpoint in [&edge.source, &edge.target] {
            if !ids.contains(endpoint.as_str()) {
                return Err(NeuroDocError::MalformedGraph(format!(
                    "edge {} references unknown node '{}'",
                    edge.id, endpoint
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_nodes_and_edges() {
        let raw = r#"{"nodes":[{"id":"1","label":"X"},{"id":"2","label":"Y"}],
                      "edges":[{"source":"1","target":"2"}]}"#;
        let map = build_mind_map(parse_graph_payload(raw).unwrap());

        assert_eq!(map.nodes.len(), 2);
        assert_eq!(map.edges.len(), 1);
        assert_eq!(map.nodes[0].label, "X");
        assert_eq!(map.nodes[1].position, Position::ORIGIN);

        let edge = &map.edges[0];
        assert_eq!(edge.id, "e1-2");
        assert!(edge.animated);
        assert!(validate_mind_map(&map).is_ok());
    }

    #[test]
    fn test_missing_edge_list_is_empty() {
        let raw = r#"{"nodes":[{"id":"a","label":"Alone"}]}"#;
        let map = build_mind_map(parse_graph_payload(raw).unwrap());

        assert_eq!(map.nodes.len(), 1);
        assert!(map.edges.is_empty());
    }

    #[test]
    fn test_numeric_ids_and_edge_labels() {
        let raw = r#"{"nodes":[{"id":1,"label":"Root"},{"id":2,"label":"Leaf"}],
                      "edges":[{"source":1,"target":2,"label":"has"}]}"#;
        let map = build_mind_map(parse_graph_payload(raw).unwrap());

        assert_eq!(map.nodes[0].id, "1");
        assert_eq!(map.edges[0].id, "e1-2");
        assert_eq!(map.edges[0].label.as_deref(), Some("has"));
    }

    #[test]
    fn test_payload_wrapped_in_prose() {
        let raw = "Here is your map: {\"nodes\":[{\"id\":\"1\",\"label\":\"X\"}],\"edges\":[]} Enjoy!";
        let description = parse_graph_payload(raw).unwrap();
        assert_eq!(description.nodes.len(), 1);
    }

    #[test]
    fn test_garbage_payload_is_malformed() {
        let result = parse_graph_payload("the model refused");
        assert!(matches!(result, Err(NeuroDocError::MalformedGraph(_))));
    }

    #[test]
    fn test_dangling_edge_passes_builder_but_fails_validation() {
        let raw = r#"{"nodes":[{"id":"1","label":"X"}],"edges":[{"source":"1","target":"9"}]}"#;
        let map = build_mind_map(parse_graph_payload(raw).unwrap());

        assert_eq!(map.edges.len(), 1);
        assert_eq!(map.edges[0].target, "9");

        let err = validate_mind_map(&map).unwrap_err().to_string();
        assert!(err.contains("unknown node '9'"), "unexpected error: {}", err);
    }

    #[test]
    fn test_duplicate_ids_are_kept_then_rejected() {
        let raw = r#"{"nodes":[{"id":"1","label":"X"},{"id":"1","label":"Y"}]}"#;
        let map = build_mind_map(parse_graph_payload(raw).unwrap());

        assert_eq!(map.nodes.len(), 2);
        assert!(validate_mind_map(&map).is_err());
    }

    #[test]
    fn test_empty_graph_rejected() {
        let map = build_mind_map(parse_graph_payload(r#"{"nodes":[]}"#).unwrap());
        assert!(validate_mind_map(&map).is_err());
    }
}

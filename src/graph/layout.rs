// src/graph/layout.rs
//! Layered left-to-right layout for mind-maps.
//!
//! Classic Sugiyama pipeline over a `petgraph` digraph: break cycles, assign
//! ranks by longest path, order each rank with barycenter sweeps, then place
//! uniform boxes on a grid (rank → x, order → y).

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use serde::Deserialize;
use tracing::debug;

use super::{MindMap, Position};

const ORDERING_SWEEPS: usize = 4;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub node_width: f64,
    pub node_height: f64,
    /// Horizontal gap between ranks.
    pub rank_separation: f64,
    /// Vertical gap between nodes of one rank.
    pub node_separation: f64,
    pub margin: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 150.0,
            node_height: 50.0,
            rank_separation: 50.0,
            node_separation: 50.0,
            margin: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutBounds {
    pub width: f64,
    pub height: f64,
}

/// Assign a top-left position to every node of `map` and record the bounds.
///
/// Edges naming unknown nodes and self-loops take no part in ranking.
pub fn layout_mind_map(map: &mut MindMap, config: &LayoutConfig) -> LayoutBounds {
    let (graph, lookup) = to_digraph(map);
    let dag = remove_cycles(&graph);
    let ranks = assign_ranks(&dag);
    let layers = order_layers(&dag, &ranks);

    let w = config.node_width;
    let h = config.node_height;
    let layer_height = |len: usize| {
        if len == 0 {
            0.0
        } else {
            len as f64 * h + (len - 1) as f64 * config.node_separation
        }
    };
    let tallest = layers.iter().map(|l| layer_height(l.len())).fold(0.0, f64::max);

    let mut centers = vec![Position::ORIGIN; graph.node_count()];
    for (rank, layer) in layers.iter().enumerate() {
        let cx = config.margin + rank as f64 * (w + config.rank_separation) + w / 2.0;
        let offset = (tallest - layer_height(layer.len())) / 2.0;
        for (slot, node) in layer.iter().enumerate() {
            let cy = config.margin + offset + slot as f64 * (h + config.node_separation) + h / 2.0;
            centers[node.index()] = Position::new(cx, cy);
        }
    }

    for (i, node) in map.nodes.iter_mut().enumerate() {
        let center = centers[lookup[i].index()];
        node.position = Position::new(center.x - w / 2.0, center.y - h / 2.0);
    }

    let rank_count = layers.len();
    let bounds = LayoutBounds {
        width: 2.0 * config.margin
            + if rank_count == 0 {
                0.0
            } else {
                rank_count as f64 * w + (rank_count - 1) as f64 * config.rank_separation
            },
        height: 2.0 * config.margin + tallest,
    };
    debug!(
        "Laid out {} nodes in {} ranks ({:.0}x{:.0})",
        map.nodes.len(),
        rank_count,
        bounds.width,
        bounds.height
    );
    map.bounds = Some(bounds);
    bounds
}

/// Node `i` of the map becomes graph node `lookup[i]`.
fn to_digraph(map: &MindMap) -> (DiGraph<(), ()>, Vec<NodeIndex>) {
    let mut graph = DiGraph::new();
    let mut by_id: HashMap<&str, NodeIndex> = HashMap::new();
    let lookup = map
        .nodes
        .iter()
        .map(|node| {
            let ix = graph.add_node(());
            by_id.entry(node.id.as_str()).or_insert(ix);
            ix
        })
        .collect();

    for edge in &map.edges {
        if let (Some(&s), Some(&t)) = (by_id.get(edge.source.as_str()), by_id.get(edge.target.as_str())) {
            if s != t {
                graph.update_edge(s, t, ());
            }
        }
    }
    (graph, lookup)
}

fn sorted_neighbors(graph: &DiGraph<(), ()>, node: NodeIndex, dir: Direction) -> Vec<NodeIndex> {
    let mut out: Vec<NodeIndex> = graph.neighbors_directed(node, dir).collect();
    out.sort();
    out.dedup();
    out
}

struct Frame {
    node: NodeIndex,
    successors: Vec<NodeIndex>,
    next: usize,
}

/// Copy of `graph` where every DFS back edge is reversed.
fn remove_cycles(graph: &DiGraph<(), ()>) -> DiGraph<(), ()> {
    const UNVISITED: u8 = 0;
    const ON_STACK: u8 = 1;
    const DONE: u8 = 2;

    let mut dag = DiGraph::with_capacity(graph.node_count(), graph.edge_count());
    for _ in graph.node_indices() {
        dag.add_node(());
    }

    let mut state = vec![UNVISITED; graph.node_count()];
    for start in graph.node_indices() {
        if state[start.index()] != UNVISITED {
            continue;
        }
        state[start.index()] = ON_STACK;
        let mut stack = vec![Frame {
            node: start,
            successors: sorted_neighbors(graph, start, Direction::Outgoing),
            next: 0,
        }];

        loop {
            let Some(frame) = stack.last_mut() else { break };
            if frame.next < frame.successors.len() {
                let node = frame.node;
                let target = frame.successors[frame.next];
                frame.next += 1;
                match state[target.index()] {
                    UNVISITED => {
                        dag.update_edge(node, target, ());
                        state[target.index()] = ON_STACK;
                        stack.push(Frame {
                            node: target,
                            successors: sorted_neighbors(graph, target, Direction::Outgoing),
                            next: 0,
                        });
                    }
                    ON_STACK => {
                        dag.update_edge(target, node, ());
                    }
                    _ => {
                        dag.update_edge(node, target, ());
                    }
                }
            } else {
                let node = frame.node;
                stack.pop();
                state[node.index()] = DONE;
            }
        }
    }
    dag
}

/// Longest path from the sources; isolated nodes land on rank 0.
fn assign_ranks(dag: &DiGraph<(), ()>) -> Vec<usize> {
    let order = toposort(dag, None).unwrap_or_else(|_| dag.node_indices().collect());
    let mut ranks = vec![0usize; dag.node_count()];
    for node in order {
        let rank = dag
            .neighbors_directed(node, Direction::Incoming)
            .map(|pred| ranks[pred.index()] + 1)
            .max()
            .unwrap_or(0);
        ranks[node.index()] = rank;
    }
    ranks
}

fn order_layers(dag: &DiGraph<(), ()>, ranks: &[usize]) -> Vec<Vec<NodeIndex>> {
    let rank_count = ranks.iter().max().map(|r| r + 1).unwrap_or(0);
    let mut layers: Vec<Vec<NodeIndex>> = vec![Vec::new(); rank_count];
    for node in dag.node_indices() {
        layers[ranks[node.index()]].push(node);
    }

    let mut best = layers.clone();
    let mut best_crossings = count_crossings(dag, &layers);

    for sweep in 0..ORDERING_SWEEPS {
        if best_crossings == 0 {
            break;
        }
        if sweep % 2 == 0 {
            for rank in 1..rank_count {
                reorder_by_barycenter(dag, &mut layers, rank, Direction::Incoming);
            }
        } else {
            for rank in (0..rank_count.saturating_sub(1)).rev() {
                reorder_by_barycenter(dag, &mut layers, rank, Direction::Outgoing);
            }
        }
        let crossings = count_crossings(dag, &layers);
        if crossings < best_crossings {
            best_crossings = crossings;
            best = layers.clone();
        }
    }
    best
}

fn slots(layers: &[Vec<NodeIndex>], node_count: usize) -> Vec<usize> {
    let mut slot = vec![0usize; node_count];
    for layer in layers {
        for (i, node) in layer.iter().enumerate() {
            slot[node.index()] = i;
        }
    }
    slot
}

/// Stable sort of one rank by the mean slot of its neighbors in `dir`.
fn reorder_by_barycenter(
    dag: &DiGraph<(), ()>,
    layers: &mut [Vec<NodeIndex>],
    rank: usize,
    dir: Direction,
) {
    let slot = slots(layers, dag.node_count());
    let mut keyed: Vec<(f64, NodeIndex)> = layers[rank]
        .iter()
        .map(|&node| {
            let neighbors: Vec<usize> = dag
                .neighbors_directed(node, dir)
                .map(|n| slot[n.index()])
                .collect();
            let key = if neighbors.is_empty() {
                slot[node.index()] as f64
            } else {
                neighbors.iter().sum::<usize>() as f64 / neighbors.len() as f64
            };
            (key, node)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    layers[rank] = keyed.into_iter().map(|(_, node)| node).collect();
}

/// Crossings between edges joining the same pair of adjacent ranks.
fn count_crossings(dag: &DiGraph<(), ()>, layers: &[Vec<NodeIndex>]) -> usize {
    let slot = slots(layers, dag.node_count());
    let mut rank_of = vec![0usize; dag.node_count()];
    for (rank, layer) in layers.iter().enumerate() {
        for node in layer {
            rank_of[node.index()] = rank;
        }
    }

    let mut by_rank: Vec<Vec<(usize, usize)>> = vec![Vec::new(); layers.len()];
    for edge in dag.raw_edges() {
        let (s, t) = (edge.source(), edge.target());
        if rank_of[t.index()] == rank_of[s.index()] + 1 {
            by_rank[rank_of[s.index()]].push((slot[s.index()], slot[t.index()]));
        }
    }

    by_rank
        .iter()
        .map(|edges| {
            let mut crossings = 0;
            for (i, a) in edges.iter().enumerate() {
                for b in &edges[i + 1..] {
                    if (a.0 < b.0 && a.1 > b.1) || (a.0 > b.0 && a.1 < b.1) {
                        crossings += 1;
                    }
                }
            }
            crossings
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{build_mind_map, parse_graph_payload};

    fn mind_map(raw: &str) -> MindMap {
        build_mind_map(parse_graph_payload(raw).unwrap())
    }

    fn position(map: &MindMap, id: &str) -> Position {
        map.node(id).unwrap().position
    }

    #[test]
    fn test_chain_runs_left_to_right() {
        let mut map = mind_map(
            r#"{"nodes":[{"id":"1","label":"A"},{"id":"2","label":"B"},{"id":"3","label":"C"}],
                "edges":[{"source":"1","target":"2"},{"source":"2","target":"3"}]}"#,
        );
        let config = LayoutConfig::default();
        layout_mind_map(&mut map, &config);

        let (a, b, c) = (position(&map, "1"), position(&map, "2"), position(&map, "3"));
        assert!(a.x < b.x && b.x < c.x);
        assert_eq!(b.x - a.x, config.node_width + config.rank_separation);
        assert_eq!(a.y, b.y);
        assert_eq!(b.y, c.y);
    }

    #[test]
    fn test_positions_are_top_left_of_centered_box() {
        let mut map = mind_map(r#"{"nodes":[{"id":"solo","label":"Solo"}]}"#);
        let config = LayoutConfig::default();
        let bounds = layout_mind_map(&mut map, &config);

        let p = position(&map, "solo");
        assert_eq!(p, Position::new(config.margin, config.margin));
        assert_eq!(bounds.width, config.node_width + 2.0 * config.margin);
        assert_eq!(bounds.height, config.node_height + 2.0 * config.margin);
        assert_eq!(map.bounds, Some(bounds));
    }

    #[test]
    fn test_every_node_placed_off_origin_when_disconnected() {
        let mut map = mind_map(
            r#"{"nodes":[{"id":"1","label":"A"},{"id":"2","label":"B"},
                         {"id":"3","label":"C"},{"id":"4","label":"D"}],
                "edges":[{"source":"1","target":"2"}]}"#,
        );
        layout_mind_map(&mut map, &LayoutConfig::default());

        assert_eq!(map.nodes.len(), 4);
        for node in &map.nodes {
            assert_ne!(node.position, Position::ORIGIN, "node {} left at origin", node.id);
        }
        // isolated nodes share rank 0 with the root and must not overlap
        let mut ys: Vec<f64> = ["1", "3", "4"].iter().map(|id| position(&map, id).y).collect();
        ys.dedup();
        assert_eq!(ys.len(), 3);
    }

    #[test]
    fn test_cycle_does_not_hang_or_drop_nodes() {
        let mut map = mind_map(
            r#"{"nodes":[{"id":"1","label":"A"},{"id":"2","label":"B"},{"id":"3","label":"C"}],
                "edges":[{"source":"1","target":"2"},{"source":"2","target":"3"},
                         {"source":"3","target":"1"},{"source":"2","target":"2"}]}"#,
        );
        layout_mind_map(&mut map, &LayoutConfig::default());

        let xs: Vec<f64> = map.nodes.iter().map(|n| n.position.x).collect();
        assert!(xs[0] < xs[1] && xs[1] < xs[2]);
    }

    #[test]
    fn test_dangling_edge_is_ignored() {
        let mut map = mind_map(
            r#"{"nodes":[{"id":"1","label":"A"}],"edges":[{"source":"1","target":"ghost"}]}"#,
        );
        layout_mind_map(&mut map, &LayoutConfig::default());
        assert_ne!(position(&map, "1"), Position::ORIGIN);
    }

    #[test]
    fn test_barycenter_removes_crossing() {
        // rank 1 starts as [c, d] while the parents order is [a, b] with a->d, b->c
        let mut map = mind_map(
            r#"{"nodes":[{"id":"a","label":"A"},{"id":"b","label":"B"},
                         {"id":"c","label":"C"},{"id":"d","label":"D"}],
                "edges":[{"source":"a","target":"d"},{"source":"b","target":"c"}]}"#,
        );
        layout_mind_map(&mut map, &LayoutConfig::default());

        assert!(position(&map, "a").y < position(&map, "b").y);
        assert!(position(&map, "d").y < position(&map, "c").y);
    }

    #[test]
    fn test_short_rank_is_centered() {
        let mut map = mind_map(
            r#"{"nodes":[{"id":"r","label":"Root"},{"id":"x","label":"X"},{"id":"y","label":"Y"}],
                "edges":[{"source":"r","target":"x"},{"source":"r","target":"y"}]}"#,
        );
        let config = LayoutConfig::default();
        layout_mind_map(&mut map, &config);

        let (r, x, y) = (position(&map, "r"), position(&map, "x"), position(&map, "y"));
        assert_eq!(r.y, (x.y + y.y) / 2.0);
    }
}

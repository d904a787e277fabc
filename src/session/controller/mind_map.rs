use tracing::{info, warn};

use crate::error::Result;
use crate::graph::{build_mind_map, layout_mind_map, parse_graph_payload, validate_mind_map, MindMap};
use crate::session::notice::Notice;
use crate::session::request::PendingRequest;
use crate::util::string::StringUtils;
use super::{SessionController, DEFAULT_MIND_MAP_QUERY};

impl SessionController {
    /// The latest user chat message, or the default summary query.
    pub fn mind_map_query(&self) -> String {
        self.chat
            .last_user_message()
            .map(|m| m.content.clone())
            .unwrap_or_else(|| DEFAULT_MIND_MAP_QUERY.to_string())
    }

    pub fn generate_mind_map(&mut self) -> Option<PendingRequest> {
        self.graph.visible = true;
        if self.graph.loading {
            return None;
        }

        self.graph.loading = true;
        self.graph.mind_map = None;
        Some(PendingRequest::MindMap {
            query: self.mind_map_query(),
        })
    }

    /// Parse, validate and lay out a raw `graph` payload.
    pub fn prepare_mind_map(&self, raw: &str) -> Result<MindMap> {
        let mut map = build_mind_map(parse_graph_payload(raw)?);
        validate_mind_map(&map)?;
        layout_mind_map(&mut map, &self.layout);
        Ok(map)
    }

    pub(super) fn complete_mind_map(&mut self, result: std::result::Result<String, String>) {
        self.graph.loading = false;

        let prepared = result
            .map_err(|e| format!("request failed ({})", e))
            .and_then(|raw| self.prepare_mind_map(&raw).map_err(|e| e.to_string()));

        match prepared {
            Ok(map) => {
                info!(
                    "Mind map ready: {}, {}",
                    StringUtils::maybe_pluralize_count(map.nodes.len(), ("node", "nodes")),
                    StringUtils::maybe_pluralize_count(map.edges.len(), ("edge", "edges")),
                );
                self.graph.mind_map = Some(map);
            }
            Err(reason) => {
                warn!("Mind map failed: {}", reason);
                self.graph.visible = false;
                self.push_notice(Notice::error(format!("Mind map failed: {}", reason)));
            }
        }
    }
}

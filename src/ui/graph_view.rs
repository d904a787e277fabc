use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Rectangle},
        Block, BorderType, Widget,
    },
};

use crate::app::{App, Focus};
use crate::graph::{LayoutConfig, MindMap};
use crate::util::string::StringUtils;
use super::components::UiComponent;
use super::spinner;
use super::style::dim_unless_focused;

const TITLE: &str = " Knowledge Graph (Esc to close) ";

pub fn render_graph_view(app: &App, area: Rect, buf: &mut Buffer) {
    let graph = &app.session.graph;

    if graph.loading {
        let text = format!("{} Generating graph...", spinner(app.tick_count));
        UiComponent::empty_message(&text, TITLE, Color::Cyan).render(area, buf);
        return;
    }

    match &graph.mind_map {
        Some(map) => render_mind_map(app, map, area, buf),
        None => UiComponent::empty_message("No graph yet.", TITLE, Color::Cyan).render(area, buf),
    }
}

fn render_mind_map(app: &App, map: &MindMap, area: Rect, buf: &mut Buffer) {
    let layout: &LayoutConfig = &app.config.layout;
    let (width, height) = map
        .bounds
        .map(|b| (b.width, b.height))
        .unwrap_or((layout.node_width, layout.node_height));

    // canvas y grows upward, layout y grows downward
    let flip = |y: f64| height - y;

    let inner_width = area.width.saturating_sub(2).max(1) as f64;
    let box_cells = (layout.node_width / width * inner_width) as usize;
    let label_chars = box_cells.saturating_sub(2).max(3);

    let edge_color = if (app.tick_count / 2) % 2 == 0 { Color::Cyan } else { Color::Blue };
    let focused = app.focus() == Focus::Graph;

    Canvas::default()
        .block(
            Block::bordered()
                .title(TITLE)
                .border_type(BorderType::Rounded)
                .border_style(dim_unless_focused(focused, Style::default().fg(Color::Cyan))),
        )
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for edge in &map.edges {
                let (Some(source), Some(target)) = (map.node(&edge.source), map.node(&edge.target)) else {
                    continue;
                };
                let x1 = source.position.x + layout.node_width;
                let y1 = flip(source.position.y + layout.node_height / 2.0);
                let x2 = target.position.x;
                let y2 = flip(target.position.y + layout.node_height / 2.0);

                let color = if edge.animated { edge_color } else { Color::DarkGray };
                ctx.draw(&CanvasLine { x1, y1, x2, y2, color });

                if let Some(label) = &edge.label {
                    ctx.print(
                        (x1 + x2) / 2.0,
                        (y1 + y2) / 2.0,
                        Line::styled(StringUtils::truncate(label, label_chars), Style::default().fg(Color::Gray)),
                    );
                }
            }

            ctx.layer();

            for node in &map.nodes {
                ctx.draw(&Rectangle {
                    x: node.position.x,
                    y: flip(node.position.y + layout.node_height),
                    width: layout.node_width,
                    height: layout.node_height,
                    color: Color::Green,
                });
                ctx.print(
                    node.position.x + layout.node_width * 0.05,
                    flip(node.position.y + layout.node_height / 2.0),
                    Line::styled(StringUtils::truncate(&node.label, label_chars), Style::default().fg(Color::White)),
                );
            }
        })
        .render(area, buf);
}

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::ForceGraphState;

const BACKGROUND: &str = "#ffffff";
const LINK_STROKE: &str = "rgba(128, 128, 128, 0.6)";
const LINK_WIDTH: f64 = 1.0;
const NODE_STROKE: &str = "#ffffff";
const LABEL_FONT: &str = "12px sans-serif";

/// One link, drawn as a straight segment.
#[derive(Clone, Debug, PartialEq)]
pub struct LinePrimitive {
	/// Source x.
	pub x1: f64,
	/// Source y.
	pub y1: f64,
	/// Target x.
	pub x2: f64,
	/// Target y.
	pub y2: f64,
}

/// One node, drawn as a filled circle.
#[derive(Clone, Debug, PartialEq)]
pub struct CirclePrimitive {
	/// Center x.
	pub cx: f64,
	/// Center y.
	pub cy: f64,
	/// Radius.
	pub r: f64,
	/// CSS fill color.
	pub fill: String,
	/// Hover label.
	pub title: String,
}

/// What gets drawn for the current positions: links first, nodes on top.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
	/// One segment per resolved link.
	pub lines: Vec<LinePrimitive>,
	/// One circle per node, in normalized order.
	pub circles: Vec<CirclePrimitive>,
}

/// Primitives for the state's current positions.
pub fn scene(state: &ForceGraphState) -> Scene {
	let layout = &state.layout;
	let nodes = layout.simulation.nodes();

	let lines = layout
		.links
		.iter()
		.map(|link| {
			let (s, t) = (&nodes[link.source], &nodes[link.target]);
			LinePrimitive {
				x1: s.x,
				y1: s.y,
				x2: t.x,
				y2: t.y,
			}
		})
		.collect();

	let circles = nodes
		.iter()
		.zip(&layout.nodes)
		.map(|(sim, info)| CirclePrimitive {
			cx: sim.x,
			cy: sim.y,
			r: info.radius,
			fill: info.fill.clone(),
			title: info.id.clone(),
		})
		.collect();

	Scene { lines, circles }
}

pub(crate) fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	let scene = scene(state);
	draw_lines(&scene, ctx);
	draw_circles(&scene, ctx);

	let hovered = state.hover.and_then(|idx| scene.circles.get(idx));
	if let Some((circle, label)) = hovered.zip(state.hovered_label()) {
		draw_label(circle, label, ctx);
	}
}

fn draw_lines(scene: &Scene, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(LINK_STROKE);
	ctx.set_line_width(LINK_WIDTH);
	ctx.begin_path();
	for line in &scene.lines {
		ctx.move_to(line.x1, line.y1);
		ctx.line_to(line.x2, line.y2);
	}
	ctx.stroke();
}

fn draw_circles(scene: &Scene, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(NODE_STROKE);
	ctx.set_line_width(1.0);
	for circle in &scene.circles {
		ctx.begin_path();
		let _ = ctx.arc(circle.cx, circle.cy, circle.r, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&circle.fill);
		ctx.fill();
		ctx.stroke();
	}
}

fn draw_label(circle: &CirclePrimitive, label: &str, ctx: &CanvasRenderingContext2d) {
	ctx.set_font(LABEL_FONT);
	let (x, y) = (circle.cx + circle.r + 4.0, circle.cy - circle.r - 4.0);
	let width = ctx
		.measure_text(label)
		.map(|m| m.width())
		.unwrap_or(0.0);

	ctx.set_fill_style_str("rgba(255, 255, 255, 0.9)");
	ctx.fill_rect(x - 3.0, y - 12.0, width + 6.0, 16.0);
	ctx.set_fill_style_str("#222222");
	let _ = ctx.fill_text(label, x, y);
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::config::LayoutConfig;
	use crate::components::force_graph::types::{GraphData, GraphLink, GraphNode};

	#[test]
	fn one_primitive_per_node_and_link() {
		let data = GraphData::new(
			vec![
				GraphNode::new("b").with_group("blue"),
				GraphNode::new("a").with_group("red").with_radius(7.0),
			],
			vec![GraphLink::new("a", "b"), GraphLink::new("a", "b")],
		);
		let state = ForceGraphState::new(&data, &LayoutConfig::GROUPED, 400.0, 400.0)
			.unwrap()
			.unwrap();
		let scene = scene(&state);

		assert_eq!(scene.lines.len(), 2);
		assert_eq!(scene.circles.len(), 2);
		let a = &scene.circles[0];
		assert_eq!((a.title.as_str(), a.fill.as_str(), a.r), ("a", "red", 7.0));

		let line = &scene.lines[0];
		let b = &scene.circles[1];
		assert_eq!((line.x1, line.y1), (a.cx, a.cy));
		assert_eq!((line.x2, line.y2), (b.cx, b.cy));
	}

	#[test]
	fn scene_tracks_dragged_positions() {
		let data = GraphData::new(
			vec![GraphNode::new("a"), GraphNode::new("b")],
			vec![GraphLink::new("a", "b")],
		);
		let mut state = ForceGraphState::new(&data, &LayoutConfig::TIGHT, 400.0, 400.0)
			.unwrap()
			.unwrap();
		let p = state.layout.position(1).unwrap();
		assert!(state.begin_drag(p.x, p.y));
		state.drag_to(p.x + 50.0, p.y + 50.0);
		state.tick();

		let scene = scene(&state);
		let moved = &scene.circles[1];
		assert!((moved.cx - (p.x + 50.0)).abs() < 1e-9);
		assert_eq!((scene.lines[0].x2, scene.lines[0].y2), (moved.cx, moved.cy));
	}
}

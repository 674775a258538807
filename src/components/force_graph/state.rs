use super::config::LayoutConfig;
use super::error::LayoutError;
use super::interaction::DragController;
use super::layout::{Layout, build_layout};
use super::types::{GraphData, NodeIdx, Point};

/// Minimum pick radius, so small nodes stay easy to grab.
const HIT_RADIUS: f64 = 8.0;

/// Everything one mounted chart needs between animation frames.
pub struct ForceGraphState {
	/// Positions and display attributes of the current pass.
	pub layout: Layout,
	/// Pointer drag in progress, if any.
	pub drag: DragController,
	/// Node under the pointer.
	pub hover: Option<NodeIdx>,
	/// Canvas width in CSS pixels.
	pub width: f64,
	/// Canvas height in CSS pixels.
	pub height: f64,
}

impl ForceGraphState {
	/// Runs the full layout pass. `Ok(None)` for an empty graph.
	pub fn new(
		data: &GraphData,
		config: &LayoutConfig,
		width: f64,
		height: f64,
	) -> Result<Option<Self>, LayoutError> {
		Ok(build_layout(data, config, width, height)?.map(|layout| Self {
			layout,
			drag: DragController::default(),
			hover: None,
			width,
			height,
		}))
	}

	/// Topmost node under the pointer. Later nodes are drawn on top, so
	/// they win ties.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<NodeIdx> {
		let mut found = None;
		for (idx, node) in self.layout.simulation.nodes().iter().enumerate() {
			let (dx, dy) = (node.x - x, node.y - y);
			let reach = self.layout.nodes[idx].radius.max(HIT_RADIUS);
			if (dx * dx + dy * dy).sqrt() < reach {
				found = Some(idx);
			}
		}
		found
	}

	/// Sets the hovered node; `None` clears the label.
	pub fn set_hover(&mut self, node: Option<NodeIdx>) {
		self.hover = node;
	}

	/// Id of the hovered node, drawn as its label.
	pub fn hovered_label(&self) -> Option<&str> {
		self.hover
			.and_then(|idx| self.layout.nodes.get(idx))
			.map(|n| n.id.as_str())
	}

	/// Grab whatever node is under the pointer. Returns whether a drag began.
	pub fn begin_drag(&mut self, x: f64, y: f64) -> bool {
		let Some(idx) = self.node_at_position(x, y) else {
			return false;
		};
		self.drag
			.on_drag_start(&mut self.layout.simulation, idx, Point::new(x, y));
		self.hover = Some(idx);
		true
	}

	/// Follow the pointer with the dragged node.
	pub fn drag_to(&mut self, x: f64, y: f64) {
		self.drag
			.on_drag_move(&mut self.layout.simulation, Point::new(x, y));
	}

	/// Release the dragged node.
	pub fn end_drag(&mut self) {
		self.drag.on_drag_end(&mut self.layout.simulation);
	}

	/// One animation frame of the live phase.
	pub fn tick(&mut self) {
		self.layout.simulation.step_frame();
	}

}

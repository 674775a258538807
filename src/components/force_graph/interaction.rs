use log::debug;

use super::simulation::Simulation;
use super::types::{NodeIdx, Point};

/// Energy the simulation is held at while a node is being dragged.
pub(crate) const DRAG_ALPHA_TARGET: f64 = 0.3;

/// Whether a node follows the simulation or the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeState {
	/// Moved by forces.
	Free,
	/// Held by an active drag.
	Pinned,
}

#[derive(Clone, Copy, Debug)]
struct ActiveDrag {
	node: NodeIdx,
	pointer_start: Point,
	node_start: Point,
}

/// Drag lifecycle for one pointer: `Free -> Pinned -> Free`.
///
/// Reheating only touches the live timer (`alpha_target`/`restart`); the
/// initial fixed batch is never rerun.
#[derive(Clone, Debug, Default)]
pub struct DragController {
	active: Option<ActiveDrag>,
}

impl DragController {
	/// Node held by the active drag, if any.
	pub fn dragged_node(&self) -> Option<NodeIdx> {
		self.active.map(|d| d.node)
	}

	/// Whether a drag is in progress.
	pub fn is_dragging(&self) -> bool {
		self.active.is_some()
	}

	/// State of node `idx` in the drag lifecycle.
	pub fn node_state(&self, idx: NodeIdx) -> NodeState {
		match self.active {
			Some(d) if d.node == idx => NodeState::Pinned,
			_ => NodeState::Free,
		}
	}

	/// Pin `node` where it currently is and wake the simulation.
	pub fn on_drag_start(&mut self, sim: &mut Simulation, node: NodeIdx, pointer: Point) {
		let Some(position) = sim.node(node).map(|n| n.position()) else {
			return;
		};
		match self.active.take() {
			// a second gesture replaces the first without reheating again
			Some(previous) => sim.unpin(previous.node),
			None => {
				sim.set_alpha_target(DRAG_ALPHA_TARGET);
				sim.restart();
			}
		}
		sim.pin(node, position.x, position.y);
		self.active = Some(ActiveDrag {
			node,
			pointer_start: pointer,
			node_start: position,
		});
		debug!("drag start on node {}", node);
	}

	/// Move the pin by the pointer's travel since drag start.
	pub fn on_drag_move(&mut self, sim: &mut Simulation, pointer: Point) {
		let Some(drag) = self.active else {
			return;
		};
		sim.pin(
			drag.node,
			drag.node_start.x + (pointer.x - drag.pointer_start.x),
			drag.node_start.y + (pointer.y - drag.pointer_start.y),
		);
	}

	/// Release the pin and let the energy decay back to idle.
	pub fn on_drag_end(&mut self, sim: &mut Simulation) {
		let Some(drag) = self.active.take() else {
			return;
		};
		sim.set_alpha_target(0.0);
		sim.unpin(drag.node);
		debug!("drag end on node {}", drag.node);
	}
}

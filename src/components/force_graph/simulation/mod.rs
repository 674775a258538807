//! Velocity-Verlet style force simulation with an explicit energy ("alpha")
//! schedule, driven either as a synchronous batch or one step per frame.

mod forces;
mod random;

pub(crate) use forces::{
	Accessor, CenterForce, CollideForce, Force, LinkForce, ManyBodyForce, PositionForce,
	constant,
};
pub(crate) use random::Lcg;

use log::debug;

use super::types::{NodeIdx, Point};

/// Energy below which the frame timer stops.
pub(crate) const ALPHA_MIN: f64 = 0.001;
/// Velocity retained per tick.
pub(crate) const VELOCITY_DECAY: f64 = 0.6;

/// Mutable per-node simulation state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimNode {
	/// Current x.
	pub x: f64,
	/// Current y.
	pub y: f64,
	/// Velocity along x.
	pub vx: f64,
	/// Velocity along y.
	pub vy: f64,
	/// Pinned x; overrides the simulated position while set.
	pub fx: Option<f64>,
	/// Pinned y.
	pub fy: Option<f64>,
	/// Radius used by charge and collision.
	pub radius: f64,
	/// Group key for axis targets.
	pub group: Option<String>,
}

impl SimNode {
	pub(crate) fn at(x: f64, y: f64) -> Self {
		Self {
			x,
			y,
			..Default::default()
		}
	}

	/// Current position.
	pub fn position(&self) -> Point {
		Point::new(self.x, self.y)
	}

	/// Whether a drag holds this node in place.
	pub fn is_pinned(&self) -> bool {
		self.fx.is_some() || self.fy.is_some()
	}
}

struct NamedForce {
	name: String,
	force: Box<dyn Force>,
}

/// Named forces over a node set, advanced tick by tick.
pub struct Simulation {
	nodes: Vec<SimNode>,
	forces: Vec<NamedForce>,
	random: Lcg,
	alpha: f64,
	alpha_min: f64,
	alpha_decay: f64,
	alpha_target: f64,
	velocity_decay: f64,
	running: bool,
}

impl Simulation {
	/// A stopped simulation at full energy. Nothing advances until `tick`
	/// is called or `restart` enables frame stepping.
	pub(crate) fn new(nodes: Vec<SimNode>) -> Self {
		Self {
			nodes,
			forces: Vec::new(),
			random: Lcg::default(),
			alpha: 1.0,
			alpha_min: ALPHA_MIN,
			alpha_decay: 1.0 - ALPHA_MIN.powf(1.0 / 300.0),
			alpha_target: 0.0,
			velocity_decay: VELOCITY_DECAY,
			running: false,
		}
	}

	/// Attach a force under `name`, replacing any force with that name.
	pub(crate) fn with_force(mut self, name: &str, force: impl Force + 'static) -> Self {
		self.set_force(name, force);
		self
	}

	pub(crate) fn set_force(&mut self, name: &str, force: impl Force + 'static) {
		let mut force: Box<dyn Force> = Box::new(force);
		force.initialize(&self.nodes);
		match self.forces.iter_mut().find(|f| f.name == name) {
			Some(slot) => slot.force = force,
			None => self.forces.push(NamedForce {
				name: name.to_string(),
				force,
			}),
		}
	}

	pub(crate) fn force_names(&self) -> impl Iterator<Item = &str> {
		self.forces.iter().map(|f| f.name.as_str())
	}

	/// Node states in normalized order.
	pub fn nodes(&self) -> &[SimNode] {
		&self.nodes
	}

	/// State of node `idx`, if it exists.
	pub fn node(&self, idx: NodeIdx) -> Option<&SimNode> {
		self.nodes.get(idx)
	}

	/// Current energy.
	pub fn alpha(&self) -> f64 {
		self.alpha
	}

	/// Energy at which the frame timer stops.
	pub fn alpha_min(&self) -> f64 {
		self.alpha_min
	}

	/// Energy the schedule decays toward.
	pub fn alpha_target(&self) -> f64 {
		self.alpha_target
	}

	pub(crate) fn set_alpha_target(&mut self, target: f64) {
		self.alpha_target = target;
	}

	/// Whether frame stepping is enabled.
	pub fn is_running(&self) -> bool {
		self.running
	}

	/// Enable frame stepping.
	pub(crate) fn restart(&mut self) {
		self.running = true;
	}

	pub(crate) fn stop(&mut self) {
		self.running = false;
	}

	pub(crate) fn pin(&mut self, idx: NodeIdx, x: f64, y: f64) {
		if let Some(node) = self.nodes.get_mut(idx) {
			node.fx = Some(x);
			node.fy = Some(y);
		}
	}

	pub(crate) fn unpin(&mut self, idx: NodeIdx) {
		if let Some(node) = self.nodes.get_mut(idx) {
			node.fx = None;
			node.fy = None;
		}
	}

	/// One integration step, regardless of whether the timer is running.
	pub(crate) fn tick(&mut self) {
		self.alpha += (self.alpha_target - self.alpha) * self.alpha_decay;
		let alpha = self.alpha;

		for named in &mut self.forces {
			named.force.apply(&mut self.nodes, alpha, &mut self.random);
		}

		let decay = self.velocity_decay;
		for node in &mut self.nodes {
			match node.fx {
				Some(fx) => {
					node.x = fx;
					node.vx = 0.0;
				}
				None => {
					node.vx *= decay;
					node.x += node.vx;
				}
			}
			match node.fy {
				Some(fy) => {
					node.y = fy;
					node.vy = 0.0;
				}
				None => {
					node.vy *= decay;
					node.y += node.vy;
				}
			}
		}
	}

	/// Synchronous batch of `n` ticks with no yielding in between.
	pub(crate) fn tick_n(&mut self, n: usize) {
		for _ in 0..n {
			self.tick();
		}
		debug!(
			"simulation advanced {} ticks over {} nodes, alpha {:.4}",
			n,
			self.nodes.len(),
			self.alpha
		);
	}

	/// One animation-frame step of the background timer. Returns whether
	/// the timer is still running afterwards.
	pub(crate) fn step_frame(&mut self) -> bool {
		if !self.running {
			return false;
		}
		self.tick();
		if self.alpha < self.alpha_min {
			self.running = false;
			debug!("simulation cooled down");
		}
		self.running
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn three_nodes() -> Vec<SimNode> {
		vec![SimNode::at(0.0, 0.0), SimNode::at(30.0, 0.0), SimNode::at(0.0, 30.0)]
	}

	#[test]
	fn new_simulation_is_stopped() {
		let mut sim = Simulation::new(three_nodes());
		assert!(!sim.is_running());
		assert!(!sim.step_frame());
		assert_eq!(sim.alpha(), 1.0);
	}

	#[test]
	fn batch_cools_to_alpha_min() {
		let mut sim = Simulation::new(three_nodes());
		sim.tick_n(300);
		assert!((sim.alpha() - ALPHA_MIN).abs() < 1e-6);
	}

	#[test]
	fn forces_are_kept_in_insertion_order() {
		let sim = Simulation::new(three_nodes())
			.with_force("link", LinkForce::new(vec![(0, 1)]))
			.with_force("charge", ManyBodyForce::new())
			.with_force("center", CenterForce::new(0.0, 0.0))
			.with_force("link", LinkForce::new(vec![(1, 2)]));
		let names: Vec<_> = sim.force_names().collect();
		assert_eq!(names, ["link", "charge", "center"]);
	}

	#[test]
	fn pinned_node_holds_position() {
		let mut sim = Simulation::new(three_nodes()).with_force("charge", ManyBodyForce::new());
		sim.pin(0, 5.0, 7.0);
		sim.tick_n(10);
		let node = sim.node(0).unwrap();
		assert_eq!((node.x, node.y), (5.0, 7.0));
		assert_eq!((node.vx, node.vy), (0.0, 0.0));
	}

	#[test]
	fn released_node_moves_again() {
		let mut sim = Simulation::new(three_nodes()).with_force("charge", ManyBodyForce::new());
		sim.pin(0, 5.0, 7.0);
		sim.tick();
		sim.unpin(0);
		assert!(!sim.node(0).unwrap().is_pinned());
		sim.tick();
		let node = sim.node(0).unwrap();
		assert_ne!((node.x, node.y), (5.0, 7.0));
	}

	#[test]
	fn frame_stepping_stops_below_alpha_min() {
		let mut sim = Simulation::new(three_nodes());
		sim.tick_n(300);
		sim.restart();
		let mut frames = 0;
		while sim.step_frame() {
			frames += 1;
			assert!(frames < 10, "timer never stopped");
		}
		assert!(!sim.is_running());
	}

	#[test]
	fn alpha_target_keeps_timer_alive() {
		let mut sim = Simulation::new(three_nodes());
		sim.tick_n(300);
		sim.set_alpha_target(0.3);
		sim.restart();
		for _ in 0..500 {
			assert!(sim.step_frame());
		}
		assert!(sim.alpha() > 0.25);
	}
}

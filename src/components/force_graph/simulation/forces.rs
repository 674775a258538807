//! Forces the simulation can be configured with.
//!
//! Each force sees the whole node slice once per tick and adjusts velocities
//! (or, for centering, positions directly). Iteration is always in node
//! order, which keeps a run reproducible.

use super::SimNode;
use super::random::Lcg;
use crate::components::force_graph::types::NodeIdx;

/// Per-node parameter, either fixed or computed from the node.
pub type Accessor = Box<dyn Fn(&SimNode) -> f64>;

pub fn constant(value: f64) -> Accessor {
	Box::new(move |_| value)
}

pub trait Force {
	/// Called when the force is attached, and again whenever the node set
	/// changes. Caches per-node parameters.
	fn initialize(&mut self, nodes: &[SimNode]);

	fn apply(&mut self, nodes: &mut [SimNode], alpha: f64, random: &mut Lcg);
}

/// Spring between linked nodes, pulling them toward `distance`.
pub struct LinkForce {
	links: Vec<(NodeIdx, NodeIdx)>,
	distance: f64,
	strength: Option<f64>,
	strengths: Vec<f64>,
	bias: Vec<f64>,
}

impl LinkForce {
	pub fn new(links: Vec<(NodeIdx, NodeIdx)>) -> Self {
		Self {
			links,
			distance: 30.0,
			strength: None,
			strengths: Vec::new(),
			bias: Vec::new(),
		}
	}

	pub fn distance(mut self, distance: f64) -> Self {
		self.distance = distance;
		self
	}

	/// Fixed stiffness. Without it each link gets `1 / min(degree)` so hubs
	/// are not torn apart.
	pub fn strength(mut self, strength: f64) -> Self {
		self.strength = Some(strength);
		self
	}
}

impl Force for LinkForce {
	fn initialize(&mut self, nodes: &[SimNode]) {
		let mut count = vec![0usize; nodes.len()];
		for &(s, t) in &self.links {
			count[s] += 1;
			count[t] += 1;
		}
		self.bias = self
			.links
			.iter()
			.map(|&(s, t)| count[s] as f64 / (count[s] + count[t]) as f64)
			.collect();
		self.strengths = self
			.links
			.iter()
			.map(|&(s, t)| {
				self.strength
					.unwrap_or_else(|| 1.0 / count[s].min(count[t]) as f64)
			})
			.collect();
	}

	fn apply(&mut self, nodes: &mut [SimNode], alpha: f64, random: &mut Lcg) {
		for (i, &(s, t)) in self.links.iter().enumerate() {
			let (source, target) = (&nodes[s], &nodes[t]);
			let mut x = target.x + target.vx - source.x - source.vx;
			let mut y = target.y + target.vy - source.y - source.vy;
			if x == 0.0 {
				x = random.jiggle();
			}
			if y == 0.0 {
				y = random.jiggle();
			}
			let l = (x * x + y * y).sqrt();
			let l = (l - self.distance) / l * alpha * self.strengths[i];
			x *= l;
			y *= l;

			let b = self.bias[i];
			nodes[t].vx -= x * b;
			nodes[t].vy -= y * b;
			nodes[s].vx += x * (1.0 - b);
			nodes[s].vy += y * (1.0 - b);
		}
	}
}

/// Pairwise charge. Negative strength repels.
pub struct ManyBodyForce {
	strength: Accessor,
	strengths: Vec<f64>,
	distance_min2: f64,
}

impl ManyBodyForce {
	pub fn new() -> Self {
		Self {
			strength: constant(-30.0),
			strengths: Vec::new(),
			distance_min2: 1.0,
		}
	}

	pub fn strength(mut self, strength: Accessor) -> Self {
		self.strength = strength;
		self
	}
}

impl Default for ManyBodyForce {
	fn default() -> Self {
		Self::new()
	}
}

impl Force for ManyBodyForce {
	fn initialize(&mut self, nodes: &[SimNode]) {
		self.strengths = nodes.iter().map(|n| (self.strength)(n)).collect();
	}

	fn apply(&mut self, nodes: &mut [SimNode], alpha: f64, random: &mut Lcg) {
		for i in 0..nodes.len() {
			let (mut dvx, mut dvy) = (0.0, 0.0);
			for j in 0..nodes.len() {
				if i == j {
					continue;
				}
				let mut x = nodes[j].x - nodes[i].x;
				let mut y = nodes[j].y - nodes[i].y;
				let mut l = x * x + y * y;
				if x == 0.0 {
					x = random.jiggle();
					l += x * x;
				}
				if y == 0.0 {
					y = random.jiggle();
					l += y * y;
				}
				if l < self.distance_min2 {
					l = (self.distance_min2 * l).sqrt();
				}
				let w = self.strengths[j] * alpha / l;
				dvx += x * w;
				dvy += y * w;
			}
			nodes[i].vx += dvx;
			nodes[i].vy += dvy;
		}
	}
}

/// Shifts every node so the centroid lands on `(x, y)`.
pub struct CenterForce {
	x: f64,
	y: f64,
	strength: f64,
}

impl CenterForce {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y, strength: 1.0 }
	}
}

impl Force for CenterForce {
	fn initialize(&mut self, _nodes: &[SimNode]) {}

	fn apply(&mut self, nodes: &mut [SimNode], _alpha: f64, _random: &mut Lcg) {
		if nodes.is_empty() {
			return;
		}
		let n = nodes.len() as f64;
		let (sx, sy) = nodes
			.iter()
			.fold((0.0, 0.0), |(sx, sy), node| (sx + node.x, sy + node.y));
		let sx = (sx / n - self.x) * self.strength;
		let sy = (sy / n - self.y) * self.strength;
		for node in nodes {
			node.x -= sx;
			node.y -= sy;
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
	X,
	Y,
}

/// Weak pull along one axis toward a per-node target coordinate.
pub struct PositionForce {
	axis: Axis,
	target: Accessor,
	strength: Accessor,
	targets: Vec<f64>,
	strengths: Vec<f64>,
}

impl PositionForce {
	pub fn new(axis: Axis, target: Accessor) -> Self {
		Self {
			axis,
			target,
			strength: constant(0.1),
			targets: Vec::new(),
			strengths: Vec::new(),
		}
	}

	pub fn x(target: Accessor) -> Self {
		Self::new(Axis::X, target)
	}

	pub fn y(target: Accessor) -> Self {
		Self::new(Axis::Y, target)
	}

	pub fn strength(mut self, strength: Accessor) -> Self {
		self.strength = strength;
		self
	}
}

impl Force for PositionForce {
	fn initialize(&mut self, nodes: &[SimNode]) {
		self.targets = nodes.iter().map(|n| (self.target)(n)).collect();
		self.strengths = nodes.iter().map(|n| (self.strength)(n)).collect();
	}

	fn apply(&mut self, nodes: &mut [SimNode], alpha: f64, _random: &mut Lcg) {
		for (i, node) in nodes.iter_mut().enumerate() {
			let k = self.strengths[i] * alpha;
			match self.axis {
				Axis::X => node.vx += (self.targets[i] - node.x) * k,
				Axis::Y => node.vy += (self.targets[i] - node.y) * k,
			}
		}
	}
}

/// Keeps circles of the given radius from overlapping.
pub struct CollideForce {
	radius: Accessor,
	radii: Vec<f64>,
	strength: f64,
}

impl CollideForce {
	pub fn new(radius: Accessor) -> Self {
		Self {
			radius,
			radii: Vec::new(),
			strength: 1.0,
		}
	}
}

impl Force for CollideForce {
	fn initialize(&mut self, nodes: &[SimNode]) {
		self.radii = nodes.iter().map(|n| (self.radius)(n)).collect();
	}

	fn apply(&mut self, nodes: &mut [SimNode], _alpha: f64, random: &mut Lcg) {
		for i in 0..nodes.len() {
			let ri = self.radii[i];
			let ri2 = ri * ri;
			let xi = nodes[i].x + nodes[i].vx;
			let yi = nodes[i].y + nodes[i].vy;
			for j in (i + 1)..nodes.len() {
				let rj = self.radii[j];
				let r = ri + rj;
				let mut x = xi - nodes[j].x - nodes[j].vx;
				let mut y = yi - nodes[j].y - nodes[j].vy;
				let mut l = x * x + y * y;
				if l >= r * r {
					continue;
				}
				if x == 0.0 {
					x = random.jiggle();
					l += x * x;
				}
				if y == 0.0 {
					y = random.jiggle();
					l += y * y;
				}
				let d = l.sqrt();
				let push = (r - d) / d * self.strength;
				x *= push;
				y *= push;
				let share = (rj * rj) / (ri2 + rj * rj);
				nodes[i].vx += x * share;
				nodes[i].vy += y * share;
				nodes[j].vx -= x * (1.0 - share);
				nodes[j].vy -= y * (1.0 - share);
			}
		}
	}
}

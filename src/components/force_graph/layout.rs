use log::debug;

use super::config::{LayoutConfig, SeedPolicy};
use super::error::LayoutError;
use super::resolve::{NodeLookup, ResolvedLink, resolve_links};
use super::seed::seed_positions;
use super::simulation::{
	Accessor, CenterForce, CollideForce, LinkForce, ManyBodyForce, PositionForce, SimNode,
	Simulation, constant,
};
use super::types::{GraphData, Point};

/// Display attributes that never change during simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeInfo {
	/// Node id, shown on hover.
	pub id: String,
	/// Effective radius after the chart's radius policy.
	pub radius: f64,
	/// Effective fill color.
	pub fill: String,
}

/// Result of one layout pass. Owns everything the view needs; a new input
/// means a new `Layout`, never a patched one.
pub struct Layout {
	/// Live simulation, stopped after the initial batch.
	pub simulation: Simulation,
	/// Display attributes, index-aligned with the simulation nodes.
	pub nodes: Vec<NodeInfo>,
	/// Links in normalized order.
	pub links: Vec<ResolvedLink>,
}

impl Layout {
	/// Current position of node `idx`.
	pub fn position(&self, idx: usize) -> Option<Point> {
		self.simulation.node(idx).map(SimNode::position)
	}

	/// All current positions in node order.
	pub fn positions(&self) -> Vec<Point> {
		self.simulation.nodes().iter().map(SimNode::position).collect()
	}
}

/// Seed, resolve, configure, then advance `config.iterations` ticks.
///
/// Empty input (no nodes, or a missing `nodes`/`links` field) yields
/// `Ok(None)`: there is nothing to draw, and that is not an error. A node
/// whose effective radius is negative or not finite fails the pass.
pub fn build_layout(
	data: &GraphData,
	config: &LayoutConfig,
	width: f64,
	height: f64,
) -> Result<Option<Layout>, LayoutError> {
	if data.is_empty() {
		debug!("empty graph, skipping layout");
		return Ok(None);
	}

	let data = data.normalized();
	let seeds = seed_positions(data.nodes(), &config.seeding, width, height);
	debug!(
		"seeded {} nodes ({})",
		seeds.len(),
		match config.seeding {
			SeedPolicy::UniformCircle => "uniform circle",
			SeedPolicy::GroupedQuadrant(_) => "grouped quadrant",
		}
	);

	let links = {
		let lookup = NodeLookup::build(data.nodes())?;
		resolve_links(&lookup, data.links())?
	};
	debug!("resolved {} links", links.len());

	let sim_nodes = data
		.nodes()
		.iter()
		.zip(&seeds)
		.map(|(node, seed)| {
			let radius = config.radius.of(node.radius);
			if !radius.is_finite() || radius < 0.0 {
				return Err(LayoutError::InvalidRadius {
					id: node.id.clone(),
					radius,
				});
			}
			Ok(SimNode {
				radius,
				group: node.group.clone(),
				..SimNode::at(seed.x, seed.y)
			})
		})
		.collect::<Result<Vec<_>, _>>()?;
	let nodes: Vec<NodeInfo> = data
		.nodes()
		.iter()
		.zip(&sim_nodes)
		.map(|(node, sim)| NodeInfo {
			id: node.id.clone(),
			radius: sim.radius,
			fill: config.fill.of(node.group.as_deref()),
		})
		.collect();

	let mut simulation = configure(sim_nodes, &links, config, width, height);
	simulation.stop();
	simulation.tick_n(config.iterations);

	Ok(Some(Layout {
		simulation,
		nodes,
		links,
	}))
}

/// Attach the chart's forces: link, charge, center, x, y and optionally
/// collision, in that order.
pub(crate) fn configure(
	nodes: Vec<SimNode>,
	links: &[ResolvedLink],
	config: &LayoutConfig,
	width: f64,
	height: f64,
) -> Simulation {
	let mut link = LinkForce::new(links.iter().map(|l| (l.source, l.target)).collect())
		.distance(config.link_distance);
	if let Some(strength) = config.link_strength {
		link = link.strength(strength);
	}

	let charge = config.charge;
	let axis = config.axis_target;
	let target_x: Accessor = Box::new(move |n| axis.of(n, width, height).0);
	let target_y: Accessor = Box::new(move |n| axis.of(n, width, height).1);

	let mut simulation = Simulation::new(nodes)
		.with_force("link", link)
		.with_force(
			"charge",
			ManyBodyForce::new().strength(Box::new(move |n| charge.of(n))),
		)
		.with_force("center", CenterForce::new(width / 2.0, height / 2.0))
		.with_force(
			"x",
			PositionForce::x(target_x).strength(constant(config.axis_strength)),
		)
		.with_force(
			"y",
			PositionForce::y(target_y).strength(constant(config.axis_strength)),
		);

	if let Some(scale) = config.collide_scale {
		simulation.set_force(
			"collision",
			CollideForce::new(Box::new(move |n| n.radius * scale)),
		);
	}
	simulation
}

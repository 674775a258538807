//! Per-chart constants for seeding, forces and styling.

use std::f64::consts::PI;

use super::simulation::SimNode;

/// Fixed batch size for the initial layout. Tuned against the lesson graphs
/// (tens of nodes); larger graphs may need more.
pub const DEFAULT_ITERATIONS: usize = 300;

pub const DEFAULT_RADIUS: f64 = 5.0;

/// One row of a group table: where a group is seeded and what its axis
/// forces pull it toward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupPlacement {
	pub group: &'static str,
	/// Arc center as fractions of canvas width and height.
	pub center: (f64, f64),
	pub arc_start: f64,
	pub arc_span: f64,
}

impl GroupPlacement {
	pub fn center_in(&self, width: f64, height: f64) -> (f64, f64) {
		(width * self.center.0, height * self.center.1)
	}
}

pub fn find_group<'a>(
	table: &'a [GroupPlacement],
	group: Option<&str>,
) -> Option<&'a GroupPlacement> {
	let group = group?;
	table.iter().find(|p| p.group == group)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SeedPolicy {
	UniformCircle,
	GroupedQuadrant(&'static [GroupPlacement]),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChargeStrength {
	Constant(f64),
	/// `k * sqrt(radius)`, so bigger nodes push harder.
	SqrtRadius(f64),
}

impl ChargeStrength {
	pub fn of(&self, node: &SimNode) -> f64 {
		match *self {
			ChargeStrength::Constant(s) => s,
			ChargeStrength::SqrtRadius(k) => k * node.radius.sqrt(),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AxisTarget {
	Center,
	ByGroup {
		table: &'static [GroupPlacement],
		/// Target for nodes whose group is not in the table.
		fallback: (f64, f64),
	},
}

impl AxisTarget {
	pub fn of(&self, node: &SimNode, width: f64, height: f64) -> (f64, f64) {
		match *self {
			AxisTarget::Center => (width / 2.0, height / 2.0),
			AxisTarget::ByGroup { table, fallback } => find_group(table, node.group.as_deref())
				.map(|p| p.center_in(width, height))
				.unwrap_or((width * fallback.0, height * fallback.1)),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RadiusPolicy {
	Fixed(f64),
	FromNode { default: f64 },
}

impl RadiusPolicy {
	pub fn of(&self, radius: Option<f64>) -> f64 {
		match *self {
			RadiusPolicy::Fixed(r) => r,
			RadiusPolicy::FromNode { default } => radius.unwrap_or(default),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FillPolicy {
	Fixed(&'static str),
	FromGroup { default: &'static str },
}

impl FillPolicy {
	pub fn of(&self, group: Option<&str>) -> String {
		match *self {
			FillPolicy::Fixed(color) => color.to_string(),
			FillPolicy::FromGroup { default } => group.unwrap_or(default).to_string(),
		}
	}
}

/// Everything that differs between the two lesson charts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
	pub(crate) link_distance: f64,
	/// `None` keeps the degree-based default strength.
	pub(crate) link_strength: Option<f64>,
	pub(crate) charge: ChargeStrength,
	pub(crate) axis_target: AxisTarget,
	pub(crate) axis_strength: f64,
	/// Collision radius as a multiple of node radius.
	pub(crate) collide_scale: Option<f64>,
	pub(crate) seeding: SeedPolicy,
	pub(crate) radius: RadiusPolicy,
	pub(crate) fill: FillPolicy,
	pub(crate) iterations: usize,
}

pub const RED_BLUE_GROUPS: &[GroupPlacement] = &[
	GroupPlacement {
		group: "red",
		center: (0.75, 0.25),
		arc_start: 0.0,
		arc_span: PI / 2.0,
	},
	GroupPlacement {
		group: "blue",
		center: (0.25, 0.75),
		arc_start: PI / 2.0,
		arc_span: PI,
	},
];

impl LayoutConfig {
	/// Short stiff links over a uniform ring, all nodes alike.
	pub const TIGHT: LayoutConfig = LayoutConfig {
		link_distance: 20.0,
		link_strength: Some(2.0),
		charge: ChargeStrength::Constant(-70.0),
		axis_target: AxisTarget::Center,
		axis_strength: 0.05,
		collide_scale: None,
		seeding: SeedPolicy::UniformCircle,
		radius: RadiusPolicy::Fixed(DEFAULT_RADIUS),
		fill: FillPolicy::Fixed("green"),
		iterations: DEFAULT_ITERATIONS,
	};

	/// Red and blue nodes softly clustered in opposite quadrants.
	pub const GROUPED: LayoutConfig = LayoutConfig {
		link_distance: 50.0,
		link_strength: None,
		charge: ChargeStrength::SqrtRadius(-100.0),
		axis_target: AxisTarget::ByGroup {
			table: RED_BLUE_GROUPS,
			fallback: (0.25, 0.75),
		},
		axis_strength: 0.1,
		collide_scale: Some(1.2),
		seeding: SeedPolicy::GroupedQuadrant(RED_BLUE_GROUPS),
		radius: RadiusPolicy::FromNode {
			default: DEFAULT_RADIUS,
		},
		fill: FillPolicy::FromGroup { default: "gray" },
		iterations: DEFAULT_ITERATIONS,
	};

	/// Same chart with a different initial batch size.
	pub const fn with_iterations(mut self, iterations: usize) -> Self {
		self.iterations = iterations;
		self
	}
}

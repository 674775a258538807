use std::collections::HashMap;
use std::f64::consts::PI;

use super::config::{SeedPolicy, find_group};
use super::types::{GraphNode, Point};

const PHYLLOTAXIS_RADIUS: f64 = 10.0;

/// Initial positions for an id-sorted node list. Entry `i` belongs to
/// `nodes[i]`; the same input always yields the same output.
pub fn seed_positions(nodes: &[GraphNode], policy: &SeedPolicy, width: f64, height: f64) -> Vec<Point> {
	let radius = width.min(height) / 3.0;
	match policy {
		SeedPolicy::UniformCircle => {
			let n = nodes.len() as f64;
			(0..nodes.len())
				.map(|i| {
					let angle = (i as f64) * 2.0 * PI / n;
					Point::new(
						width / 2.0 + radius * angle.cos(),
						height / 2.0 + radius * angle.sin(),
					)
				})
				.collect()
		}
		SeedPolicy::GroupedQuadrant(table) => {
			let mut sizes: HashMap<&str, usize> = HashMap::new();
			for node in nodes {
				if let Some(p) = find_group(table, node.group.as_deref()) {
					*sizes.entry(p.group).or_default() += 1;
				}
			}

			let mut seen: HashMap<&str, usize> = HashMap::new();
			nodes
				.iter()
				.enumerate()
				.map(|(i, node)| match find_group(table, node.group.as_deref()) {
					Some(p) => {
						let local = seen.entry(p.group).or_default();
						let angle = p.arc_start + p.arc_span * (*local as f64) / (sizes[p.group] as f64);
						*local += 1;
						let (cx, cy) = p.center_in(width, height);
						Point::new(cx + radius * angle.cos(), cy + radius * angle.sin())
					}
					None => phyllotaxis(i),
				})
				.collect()
		}
	}
}

/// Sunflower spiral around the origin, used for nodes no policy places.
pub fn phyllotaxis(i: usize) -> Point {
	let angle_step = PI * (3.0 - 5f64.sqrt());
	let r = PHYLLOTAXIS_RADIUS * (0.5 + i as f64).sqrt();
	let angle = i as f64 * angle_step;
	Point::new(r * angle.cos(), r * angle.sin())
}

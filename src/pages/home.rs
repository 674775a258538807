use leptos::prelude::*;

use crate::components::force_graph::{ForceGraphCanvas, GraphData, GraphLink, GraphNode, LayoutConfig};

/// Random tree with `n` nodes, the same tree on every load.
fn generate_sample_data(n: usize) -> GraphData {
	let id = |i: usize| format!("n{:02}", i);
	let nodes: Vec<GraphNode> = (0..n).map(|i| GraphNode::new(id(i))).collect();

	let links: Vec<GraphLink> = (1..n)
		.map(|i| {
			let target = (rand_simple(i) * (i as f64)) as usize;
			GraphLink::new(id(i), id(target))
		})
		.collect();

	GraphData::new(nodes, links)
}

/// Fixed-constant LCG in `[0, 1)`; the lesson tree only needs a stable
/// shape per `seed`, not statistical quality.
fn rand_simple(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0
}

/// Lesson 08: every node alike, short stiff links.
#[component]
pub fn Home() -> impl IntoView {
	let graph_data = Signal::derive(move || generate_sample_data(40));
	let config: &'static LayoutConfig = &LayoutConfig::TIGHT;

	view! {
		<div class="lesson">
			<h1>"Lesson 08: Network"</h1>
			<p class="subtitle">"Hover a node to see its id. Drag nodes to reposition."</p>
			<div class="chart">
				<ForceGraphCanvas data=graph_data config=config />
			</div>
		</div>
	}
}

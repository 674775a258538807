use leptos::prelude::*;
use log::error;

use crate::components::force_graph::{ForceGraphCanvas, GraphData, LayoutConfig};

const DATASET: &str = include_str!("../../data/grouped-network.json");

fn load_dataset() -> GraphData {
	GraphData::from_json(DATASET).unwrap_or_else(|e| {
		error!("bundled dataset unreadable: {e}");
		GraphData::default()
	})
}

/// Lesson 10: red and blue communities pulled toward opposite corners.
#[component]
pub fn GroupedNetwork() -> impl IntoView {
	let graph_data = Signal::derive(load_dataset);
	let config: &'static LayoutConfig = &LayoutConfig::GROUPED;

	view! {
		<div class="lesson">
			<h1>"Lesson 10: Grouped Network"</h1>
			<p class="subtitle">"Red nodes drift up and right, blue nodes down and left."</p>
			<div class="chart">
				<ForceGraphCanvas data=graph_data config=config />
			</div>
		</div>
	}
}

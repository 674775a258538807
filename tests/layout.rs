use network_lesson_charts::components::force_graph::*;

fn close(a: f64, b: f64) -> bool {
	(a - b).abs() < 1e-6
}

fn sample_graph() -> GraphData {
	GraphData::new(
		["e", "b", "a", "d", "c", "f"]
			.into_iter()
			.map(GraphNode::new)
			.collect(),
		vec![
			GraphLink::new("a", "b"),
			GraphLink::new("b", "c"),
			GraphLink::new("c", "a"),
			GraphLink::new("d", "e"),
			GraphLink::new("e", "f"),
			GraphLink::new("a", "d"),
			GraphLink::new("f", "f"),
		],
	)
}

#[test]
fn test_layout_is_deterministic() {
	let data = sample_graph();
	let first = build_layout(&data, &LayoutConfig::TIGHT, 400.0, 400.0)
		.unwrap()
		.unwrap();
	let second = build_layout(&data, &LayoutConfig::TIGHT, 400.0, 400.0)
		.unwrap()
		.unwrap();
	assert_eq!(first.positions(), second.positions());
}

#[test]
fn test_input_order_does_not_matter() {
	let data = sample_graph();
	let mut nodes = data.nodes().to_vec();
	nodes.reverse();
	let mut links = data.links().to_vec();
	links.rotate_left(3);
	links.swap(0, 2);
	let shuffled = GraphData::new(nodes, links);

	for config in [&LayoutConfig::TIGHT, &LayoutConfig::GROUPED] {
		let a = build_layout(&data, config, 500.0, 300.0).unwrap().unwrap();
		let b = build_layout(&shuffled, config, 500.0, 300.0)
			.unwrap()
			.unwrap();
		assert_eq!(a.positions(), b.positions());
		assert_eq!(a.links, b.links);
	}
}

#[test]
fn test_uniform_circle_seeding() {
	let data = GraphData::new(
		["d", "b", "c", "a"].into_iter().map(GraphNode::new).collect(),
		vec![],
	);
	let layout = build_layout(&data, &LayoutConfig::TIGHT.with_iterations(0), 400.0, 400.0)
		.unwrap()
		.unwrap();
	let ids: Vec<_> = layout.nodes.iter().map(|n| n.id.as_str()).collect();
	assert_eq!(ids, ["a", "b", "c", "d"]);

	let r = 400.0 / 3.0;
	assert!(close(r, 133.333_333_333));
	let expected = [(200.0 + r, 200.0), (200.0, 200.0 + r), (200.0 - r, 200.0), (200.0, 200.0 - r)];
	for (p, (x, y)) in layout.positions().into_iter().zip(expected) {
		assert!(close(p.x, x) && close(p.y, y), "{p:?} != ({x}, {y})");
	}
}

#[test]
fn test_grouped_quadrant_clusters() {
	let data = GraphData::new(
		vec![
			GraphNode::new("r1").with_group("red"),
			GraphNode::new("r2").with_group("red"),
			GraphNode::new("b1").with_group("blue"),
			GraphNode::new("b2").with_group("blue"),
		],
		vec![],
	);

	let seeded = build_layout(&data, &LayoutConfig::GROUPED.with_iterations(0), 400.0, 400.0)
		.unwrap()
		.unwrap();
	for (info, p) in seeded.nodes.iter().zip(seeded.positions()) {
		let (cx, cy) = if info.fill == "red" { (300.0, 100.0) } else { (100.0, 300.0) };
		let d = ((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt();
		assert!(close(d, 400.0 / 3.0), "{} seeded off its arc", info.id);
	}

	let settled = build_layout(&data, &LayoutConfig::GROUPED, 400.0, 400.0)
		.unwrap()
		.unwrap();
	let centroid_x = |fill: &str| {
		let xs: Vec<f64> = settled
			.nodes
			.iter()
			.zip(settled.positions())
			.filter(|(info, _)| info.fill == fill)
			.map(|(_, p)| p.x)
			.collect();
		xs.iter().sum::<f64>() / xs.len() as f64
	};
	assert!(centroid_x("red") > 200.0);
	assert!(centroid_x("blue") < 200.0);
}

#[test]
fn test_empty_graph_draws_nothing() {
	let empty = GraphData::from_json(r#"{ "nodes": [], "links": [] }"#).unwrap();
	assert!(build_layout(&empty, &LayoutConfig::TIGHT, 400.0, 400.0).unwrap().is_none());

	let no_links = GraphData::from_json(r#"{ "nodes": [{ "id": "a" }, { "id": "b" }] }"#).unwrap();
	assert!(build_layout(&no_links, &LayoutConfig::TIGHT, 400.0, 400.0).unwrap().is_none());

	let missing = GraphData::from_json(r#"{ "links": [] }"#).unwrap();
	let state = ForceGraphState::new(&missing, &LayoutConfig::GROUPED, 400.0, 400.0).unwrap();
	assert!(state.is_none());
}

#[test]
fn test_dangling_link_is_rejected() {
	let data = GraphData::new(
		vec![GraphNode::new("a"), GraphNode::new("b")],
		vec![GraphLink::new("a", "z")],
	);
	let err = build_layout(&data, &LayoutConfig::TIGHT, 400.0, 400.0)
		.err()
		.expect("dangling link must fail");
	match err {
		LayoutError::DanglingReference { endpoint, .. } => assert_eq!(endpoint, "z"),
		other => panic!("unexpected error {other}"),
	}
}

#[test]
fn test_negative_radius_is_rejected() {
	let data = GraphData::from_json(
		r#"{
			"nodes": [{ "id": "a", "color": "red", "radius": -4 }, { "id": "b", "color": "blue" }],
			"links": [{ "source": "a", "target": "b" }]
		}"#,
	)
	.unwrap();
	match build_layout(&data, &LayoutConfig::GROUPED, 400.0, 400.0) {
		Err(LayoutError::InvalidRadius { id, radius }) => {
			assert_eq!(id, "a");
			assert_eq!(radius, -4.0);
		}
		Err(other) => panic!("unexpected error {other}"),
		Ok(_) => panic!("negative radius must fail"),
	}
}

#[test]
fn test_failed_pass_does_not_affect_next() {
	let bad = GraphData::new(
		vec![GraphNode::new("a")],
		vec![GraphLink::new("a", "missing")],
	);
	assert!(build_layout(&bad, &LayoutConfig::TIGHT, 400.0, 400.0).is_err());

	let good = sample_graph();
	let after_failure = build_layout(&good, &LayoutConfig::TIGHT, 400.0, 400.0)
		.unwrap()
		.unwrap();
	let fresh = build_layout(&good, &LayoutConfig::TIGHT, 400.0, 400.0)
		.unwrap()
		.unwrap();
	assert_eq!(after_failure.positions(), fresh.positions());
}

#[test]
fn test_pin_release_round_trip() {
	let mut state = ForceGraphState::new(&sample_graph(), &LayoutConfig::TIGHT, 400.0, 400.0)
		.unwrap()
		.unwrap();
	let p = state.layout.position(0).unwrap();
	assert!(state.begin_drag(p.x, p.y));
	let idx = state.drag.dragged_node().unwrap();
	let start = state.layout.position(idx).unwrap();
	state.drag_to(p.x - 40.0, p.y + 25.0);
	state.tick();
	let pinned = state.layout.position(idx).unwrap();
	assert!(close(pinned.x, start.x - 40.0) && close(pinned.y, start.y + 25.0));

	state.end_drag();
	let node = state.layout.simulation.node(idx).unwrap();
	assert_eq!((node.fx, node.fy), (None, None));

	for _ in 0..50 {
		state.tick();
	}
	let released = state.layout.position(idx).unwrap();
	assert_ne!(released, pinned);
}

#[test]
fn test_scene_matches_layout() {
	let state = ForceGraphState::new(&sample_graph(), &LayoutConfig::TIGHT, 400.0, 400.0)
		.unwrap()
		.unwrap();
	let scene = scene(&state);
	assert_eq!(scene.circles.len(), 6);
	assert_eq!(scene.lines.len(), 7);
	let titles: Vec<_> = scene.circles.iter().map(|c| c.title.as_str()).collect();
	assert_eq!(titles, ["a", "b", "c", "d", "e", "f"]);
	assert!(scene.circles.iter().all(|c| c.fill == "green" && c.r == 5.0));
	// self-loop on f collapses to a point
	let last = scene.lines.last().unwrap();
	assert_eq!((last.x1, last.y1), (last.x2, last.y2));
}

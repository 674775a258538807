use serde::Deserialize;

use super::error::LayoutError;

/// Index of a node inside a normalized (id-sorted) node list.
pub type NodeIdx = usize;

/// Canvas coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal offset from the left edge.
	pub x: f64,
	/// Vertical offset from the top edge.
	pub y: f64,
}

impl Point {
	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// A node as supplied by the data-loading side.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GraphNode {
	/// Unique identifier, also the hover label and the sort key.
	pub id: String,
	/// Categorical attribute, a color name in the lesson datasets.
	#[serde(default, alias = "color")]
	pub group: Option<String>,
	/// Visual size; charts that size by data fall back to a default.
	#[serde(default)]
	pub radius: Option<f64>,
}

impl GraphNode {
	/// Node with no group and no radius.
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			group: None,
			radius: None,
		}
	}

	/// Sets the categorical attribute.
	pub fn with_group(mut self, group: impl Into<String>) -> Self {
		self.group = Some(group.into());
		self
	}

	/// Sets the visual size.
	pub fn with_radius(mut self, radius: f64) -> Self {
		self.radius = Some(radius);
		self
	}
}

/// One end of a link: a bare identifier, or a node carried over from an
/// earlier pass.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LinkEndpoint {
	/// Unresolved identifier.
	Id(String),
	/// Node object; resolved again by its id.
	Node(GraphNode),
}

impl LinkEndpoint {
	/// Identifier this endpoint refers to.
	pub fn id(&self) -> &str {
		match self {
			LinkEndpoint::Id(id) => id,
			LinkEndpoint::Node(node) => &node.id,
		}
	}
}

impl From<&str> for LinkEndpoint {
	fn from(id: &str) -> Self {
		LinkEndpoint::Id(id.to_string())
	}
}

impl From<String> for LinkEndpoint {
	fn from(id: String) -> Self {
		LinkEndpoint::Id(id)
	}
}

impl From<GraphNode> for LinkEndpoint {
	fn from(node: GraphNode) -> Self {
		LinkEndpoint::Node(node)
	}
}

/// Edge between two nodes, possibly a self-loop.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GraphLink {
	/// Start of the edge.
	pub source: LinkEndpoint,
	/// End of the edge.
	pub target: LinkEndpoint,
}

impl GraphLink {
	/// Link between two endpoints.
	pub fn new(source: impl Into<LinkEndpoint>, target: impl Into<LinkEndpoint>) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
		}
	}
}

/// Graph handed over by the data-loading side.
///
/// A field absent from the input stays `None`, which makes the whole graph
/// "nothing to render"; an explicit empty list is kept as such.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GraphData {
	/// Node list, `None` when the input had no `nodes` field.
	#[serde(default)]
	pub nodes: Option<Vec<GraphNode>>,
	/// Link list, `None` when the input had no `links` field.
	#[serde(default)]
	pub links: Option<Vec<GraphLink>>,
}

impl GraphData {
	/// Graph with both fields present.
	pub fn new(nodes: Vec<GraphNode>, links: Vec<GraphLink>) -> Self {
		Self {
			nodes: Some(nodes),
			links: Some(links),
		}
	}

	/// Parses the `{ "nodes": [...], "links": [...] }` input format.
	pub fn from_json(src: &str) -> Result<Self, LayoutError> {
		Ok(serde_json::from_str(src)?)
	}

	/// Nodes, or an empty slice when the field is missing.
	pub fn nodes(&self) -> &[GraphNode] {
		self.nodes.as_deref().unwrap_or_default()
	}

	/// Links, or an empty slice when the field is missing.
	pub fn links(&self) -> &[GraphLink] {
		self.links.as_deref().unwrap_or_default()
	}

	/// Nothing to lay out: either field is missing, or there are no nodes.
	pub fn is_empty(&self) -> bool {
		self.links.is_none() || self.nodes().is_empty()
	}

	/// Copy with nodes sorted by id and links by `(source, target)`.
	///
	/// Both sorts are stable, so permuting the input never changes the
	/// result except among exact duplicates.
	pub fn normalized(&self) -> GraphData {
		let mut nodes = self.nodes().to_vec();
		nodes.sort_by(|a, b| a.id.cmp(&b.id));

		let mut links = self.links().to_vec();
		links.sort_by(|a, b| {
			a.source
				.id()
				.cmp(b.source.id())
				.then_with(|| a.target.id().cmp(b.target.id()))
		});

		GraphData::new(nodes, links)
	}
}

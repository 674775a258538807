use std::collections::HashMap;

use super::error::LayoutError;
use super::types::{GraphLink, GraphNode, NodeIdx};

/// Link whose endpoints point into the normalized node list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedLink {
	/// Index of the source node.
	pub source: NodeIdx,
	/// Index of the target node.
	pub target: NodeIdx,
}

/// Identifier → index table. Built once per layout pass and dropped once
/// the links are resolved.
pub(crate) struct NodeLookup<'a> {
	by_id: HashMap<&'a str, NodeIdx>,
}

impl<'a> NodeLookup<'a> {
	pub(crate) fn build(nodes: &'a [GraphNode]) -> Result<Self, LayoutError> {
		let mut by_id = HashMap::with_capacity(nodes.len());
		for (idx, node) in nodes.iter().enumerate() {
			if by_id.insert(node.id.as_str(), idx).is_some() {
				return Err(LayoutError::DuplicateNode {
					id: node.id.clone(),
				});
			}
		}
		Ok(Self { by_id })
	}

	pub(crate) fn get(&self, id: &str) -> Option<NodeIdx> {
		self.by_id.get(id).copied()
	}
}

/// Rewrites every endpoint to a node index. Nothing is dropped: an unknown
/// endpoint fails the whole pass. Self-loops and repeated links pass through.
pub(crate) fn resolve_links(lookup: &NodeLookup<'_>, links: &[GraphLink]) -> Result<Vec<ResolvedLink>, LayoutError> {
	links
		.iter()
		.enumerate()
		.map(|(i, link)| {
			let endpoint = |id: &str| {
				lookup.get(id).ok_or_else(|| LayoutError::DanglingReference {
					link: i,
					endpoint: id.to_string(),
				})
			};
			Ok(ResolvedLink {
				source: endpoint(link.source.id())?,
				target: endpoint(link.target.id())?,
			})
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn nodes(ids: &[&str]) -> Vec<GraphNode> {
		ids.iter().copied().map(GraphNode::new).collect()
	}

	#[test]
	fn resolves_ids_to_indices() {
		let nodes = nodes(&["a", "b", "c"]);
		let lookup = NodeLookup::build(&nodes).unwrap();
		let links = vec![GraphLink::new("a", "c"), GraphLink::new("c", "b")];
		let resolved = resolve_links(&lookup, &links).unwrap();
		assert_eq!(
			resolved,
			[
				ResolvedLink { source: 0, target: 2 },
				ResolvedLink { source: 2, target: 1 },
			]
		);
	}

	#[test]
	fn node_endpoints_resolve_by_id() {
		let nodes = nodes(&["a", "b"]);
		let lookup = NodeLookup::build(&nodes).unwrap();
		let links = vec![GraphLink::new(GraphNode::new("b"), "a")];
		let resolved = resolve_links(&lookup, &links).unwrap();
		assert_eq!(resolved[0], ResolvedLink { source: 1, target: 0 });
	}

	#[test]
	fn self_loops_and_duplicates_are_kept() {
		let nodes = nodes(&["a", "b"]);
		let lookup = NodeLookup::build(&nodes).unwrap();
		let links = vec![
			GraphLink::new("a", "a"),
			GraphLink::new("a", "b"),
			GraphLink::new("a", "b"),
		];
		assert_eq!(resolve_links(&lookup, &links).unwrap().len(), 3);
	}

	#[test]
	fn unknown_target_is_dangling() {
		let nodes = nodes(&["a", "b"]);
		let lookup = NodeLookup::build(&nodes).unwrap();
		let links = vec![GraphLink::new("a", "b"), GraphLink::new("a", "z")];
		match resolve_links(&lookup, &links) {
			Err(LayoutError::DanglingReference { link, endpoint }) => {
				assert_eq!(link, 1);
				assert_eq!(endpoint, "z");
			}
			other => panic!("expected dangling reference, got {other:?}"),
		}
	}

	#[test]
	fn unknown_source_is_dangling() {
		let nodes = nodes(&["a"]);
		let lookup = NodeLookup::build(&nodes).unwrap();
		let links = vec![GraphLink::new("q", "a")];
		assert!(matches!(
			resolve_links(&lookup, &links),
			Err(LayoutError::DanglingReference { .. })
		));
	}

	#[test]
	fn duplicate_ids_are_rejected() {
		let nodes = nodes(&["a", "a"]);
		assert!(matches!(
			NodeLookup::build(&nodes),
			Err(LayoutError::DuplicateNode { id }) if id == "a"
		));
	}
}

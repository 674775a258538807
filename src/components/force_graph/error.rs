use thiserror::Error;

/// Failure of a single layout pass. The next pass starts from scratch, so
/// nothing here outlives the input that caused it.
#[derive(Debug, Error)]
pub enum LayoutError {
	/// A link endpoint names an id that is not in the node list.
	#[error("link {link} references unknown node `{endpoint}`")]
	DanglingReference {
		/// Position of the link in the sorted link list.
		link: usize,
		/// The unknown id.
		endpoint: String,
	},

	/// Two nodes share an id.
	#[error("node id `{id}` appears more than once")]
	DuplicateNode {
		/// The repeated id.
		id: String,
	},

	/// A node's effective radius is negative or not finite.
	#[error("node `{id}` has invalid radius {radius}")]
	InvalidRadius {
		/// Node the radius belongs to.
		id: String,
		/// The rejected value.
		radius: f64,
	},

	/// The input was not valid graph JSON.
	#[error("invalid graph data: {0}")]
	Parse(#[from] serde_json::Error),
}

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
	Category,
	Skill,
}

/// A renderable point of the constellation.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub id: String,
	pub kind: NodeKind,
	pub name: String,
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub color: String,
	/// Owning category id, set for skill nodes only.
	pub parent_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	pub id: String,
	pub source: String,
	pub target: String,
}

/// Nodes and edges computed from one set of categories and canvas dimensions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
	pub nodes: Vec<Node>,
	pub edges: Vec<Edge>,
}

impl Layout {
	pub fn node(&self, id: &str) -> Option<&Node> {
		self.nodes.iter().find(|n| n.id == id)
	}

	pub fn index_of(&self, id: &str) -> Option<usize> {
		self.nodes.iter().position(|n| n.id == id)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum LayoutError {
	/// Width or height is not a positive finite number.
	InvalidDimensions { width: f64, height: f64 },
	/// A link referenced a node id that is not part of the layout.
	UnknownNode(String),
}

impl fmt::Display for LayoutError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidDimensions { width, height } => {
				write!(f, "invalid canvas dimensions {width}x{height}")
			}
			Self::UnknownNode(id) => write!(f, "no category node with id {id:?}"),
		}
	}
}

impl std::error::Error for LayoutError {}

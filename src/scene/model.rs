use std::collections::BTreeMap;
use std::fmt;

use crate::foundation::color::Color;
use crate::foundation::core::{Canvas, Point};
use crate::foundation::error::{HexlogoError, HexlogoResult};
use crate::layout::edges::EdgeKey;
use crate::layout::geometry::FanSide;

/// Opaque handle to a node, assigned when the node is added to a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

/// Opaque handle to an edge, assigned when the edge is added to a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) u32);

/// Structural identity of a node.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum NodeKey {
    /// Ring node by index.
    Ring(usize),
    /// Fan node by side.
    Fan(FanSide),
}

impl NodeKey {
    /// Element id used in the SVG output.
    pub fn element_id(self) -> String {
        match self {
            Self::Ring(i) => format!("node-ring-{i}"),
            Self::Fan(side) => format!("node-fan-{}", side.as_str()),
        }
    }
}

/// A filled circle.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Handle assigned by the scene.
    pub id: NodeId,
    /// Structural identity.
    pub key: NodeKey,
    /// Circle center.
    pub center: Point,
    /// Circle radius.
    pub radius: f64,
    /// Resting fill color.
    pub fill: Color,
}

/// A straight stroked segment between two nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    /// Handle assigned by the scene.
    pub id: EdgeId,
    /// Structural identity.
    pub key: EdgeKey,
    /// Start node.
    pub from: NodeId,
    /// End node.
    pub to: NodeId,
    /// Start point (copied from `from`).
    pub a: Point,
    /// End point (copied from `to`).
    pub b: Point,
    /// Resting stroke color.
    pub stroke: Color,
    /// Stroke width.
    pub width: f64,
}

/// Something an animation can target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementRef {
    /// A node circle.
    Node(NodeId),
    /// An edge line.
    Edge(EdgeId),
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(id) => write!(f, "node#{}", id.0),
            Self::Edge(id) => write!(f, "edge#{}", id.0),
        }
    }
}

/// Finished logo geometry: nodes and edges in draw order, plus key lookups.
///
/// Edges are drawn before nodes so circles cover line ends.
#[derive(Clone, Debug)]
pub struct Scene {
    pub(crate) canvas: Canvas,
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) node_index: BTreeMap<NodeKey, NodeId>,
    pub(crate) edge_index: BTreeMap<EdgeKey, EdgeId>,
}

impl Scene {
    /// Output canvas.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Nodes in draw order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in draw order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up a node by handle.
    pub fn node(&self, id: NodeId) -> HexlogoResult<&Node> {
        self.nodes
            .get(id.0 as usize)
            .ok_or_else(|| HexlogoError::layout(format!("unknown node handle {}", id.0)))
    }

    /// Look up an edge by handle.
    pub fn edge(&self, id: EdgeId) -> HexlogoResult<&Edge> {
        self.edges
            .get(id.0 as usize)
            .ok_or_else(|| HexlogoError::layout(format!("unknown edge handle {}", id.0)))
    }

    /// Resolve a node by structural key.
    pub fn node_by_key(&self, key: NodeKey) -> HexlogoResult<&Node> {
        let id = self
            .node_index
            .get(&key)
            .ok_or_else(|| HexlogoError::layout(format!("no node {key:?} in scene")))?;
        self.node(*id)
    }

    /// Resolve an edge by structural key. Pairs rejected by the edge selector are errors.
    pub fn edge_by_key(&self, key: EdgeKey) -> HexlogoResult<&Edge> {
        let id = self
            .edge_index
            .get(&key)
            .ok_or_else(|| HexlogoError::layout(format!("no edge {key:?} in scene")))?;
        self.edge(*id)
    }

    /// SVG element id of an animation target.
    pub fn element_id(&self, target: ElementRef) -> HexlogoResult<String> {
        match target {
            ElementRef::Node(id) => self.node(id).map(|n| n.key.element_id()),
            ElementRef::Edge(id) => self.edge(id).map(|e| e.key.element_id()),
        }
    }

    /// Resting color of an animation target (fill for nodes, stroke for edges).
    pub fn resting_color(&self, target: ElementRef) -> HexlogoResult<Color> {
        match target {
            ElementRef::Node(id) => self.node(id).map(|n| n.fill),
            ElementRef::Edge(id) => self.edge(id).map(|e| e.stroke),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;

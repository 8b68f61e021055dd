use std::collections::BTreeMap;

use crate::config::LogoConfig;
use crate::foundation::color::Color;
use crate::foundation::core::{Canvas, Point, Vec2};
use crate::foundation::error::{HexlogoError, HexlogoResult};
use crate::layout::edges::{EdgeKey, edge_plan};
use crate::layout::geometry::{FanSide, RingLayout};
use crate::scene::model::{Edge, EdgeId, Node, NodeId, NodeKey, Scene};

/// Accumulates nodes and edges, handing out ids as they are added.
pub struct SceneBuilder {
    canvas: Canvas,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_index: BTreeMap<NodeKey, NodeId>,
    edge_index: BTreeMap<EdgeKey, EdgeId>,
}

impl SceneBuilder {
    /// Empty builder for `canvas`.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            nodes: Vec::new(),
            edges: Vec::new(),
            node_index: BTreeMap::new(),
            edge_index: BTreeMap::new(),
        }
    }

    /// Add a node. Each key may be placed once.
    pub fn node(
        &mut self,
        key: NodeKey,
        center: Point,
        radius: f64,
        fill: Color,
    ) -> HexlogoResult<NodeId> {
        if self.node_index.contains_key(&key) {
            return Err(HexlogoError::layout(format!("duplicate node {key:?}")));
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            id,
            key,
            center,
            radius,
            fill,
        });
        self.node_index.insert(key, id);
        Ok(id)
    }

    /// Connect two placed nodes. Endpoints are resolved by key.
    pub fn edge(
        &mut self,
        key: EdgeKey,
        from: NodeKey,
        to: NodeKey,
        stroke: Color,
        width: f64,
    ) -> HexlogoResult<EdgeId> {
        if self.edge_index.contains_key(&key) {
            return Err(HexlogoError::layout(format!("duplicate edge {key:?}")));
        }
        let (from, a) = self.lookup(from)?;
        let (to, b) = self.lookup(to)?;
        if from == to {
            return Err(HexlogoError::layout(format!("edge {key:?} is a self-loop")));
        }

        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(Edge {
            id,
            key,
            from,
            to,
            a,
            b,
            stroke,
            width,
        });
        self.edge_index.insert(key, id);
        Ok(id)
    }

    /// Freeze the accumulated nodes and edges.
    pub fn finish(self) -> Scene {
        Scene {
            canvas: self.canvas,
            nodes: self.nodes,
            edges: self.edges,
            node_index: self.node_index,
            edge_index: self.edge_index,
        }
    }

    fn lookup(&self, key: NodeKey) -> HexlogoResult<(NodeId, Point)> {
        let id = self.node_index.get(&key).copied().ok_or_else(|| {
            HexlogoError::layout(format!("edge endpoint {key:?} has not been placed"))
        })?;
        Ok((id, self.nodes[id.0 as usize].center))
    }
}

/// Add ring nodes (palette order) then fan nodes (neutral fill).
pub fn place_nodes(
    builder: &mut SceneBuilder,
    layout: &RingLayout,
    cfg: &LogoConfig,
) -> HexlogoResult<()> {
    for (i, (&center, &fill)) in layout.ring.iter().zip(&cfg.palette.ring).enumerate() {
        builder.node(NodeKey::Ring(i), center, cfg.node_radius, fill)?;
    }
    for side in FanSide::ALL {
        builder.node(
            NodeKey::Fan(side),
            layout.fan(side),
            cfg.node_radius,
            cfg.palette.neutral,
        )?;
    }
    Ok(())
}

/// Add one edge per key, in the given order.
pub fn connect_edges(
    builder: &mut SceneBuilder,
    plan: &[EdgeKey],
    cfg: &LogoConfig,
) -> HexlogoResult<()> {
    for &key in plan {
        let (from, to) = match key {
            EdgeKey::Fan(side) => (NodeKey::Fan(side), NodeKey::Ring(side.anchor())),
            EdgeKey::Ring(i, j) => (NodeKey::Ring(i), NodeKey::Ring(j)),
        };
        builder.edge(key, from, to, cfg.palette.neutral, cfg.edge_width)?;
    }
    Ok(())
}

/// Geometry, edge selection, and scene assembly for `cfg`.
#[tracing::instrument(skip_all)]
pub fn build_scene(cfg: &LogoConfig) -> HexlogoResult<Scene> {
    cfg.validate()?;

    let layout = RingLayout::compute(cfg.center, cfg.ring_radius, cfg.fan_distance);
    let mut builder = SceneBuilder::new(cfg.canvas);
    place_nodes(&mut builder, &layout, cfg)?;
    connect_edges(&mut builder, &edge_plan(), cfg)?;
    let scene = builder.finish();

    for node in scene.nodes() {
        let extent = Vec2::new(node.radius, node.radius);
        let inside = cfg.canvas.contains(node.center - extent)
            && cfg.canvas.contains(node.center + extent);
        if !inside {
            tracing::warn!(node = ?node.key, "node extends past the canvas");
        }
    }
    tracing::debug!(
        nodes = scene.nodes().len(),
        edges = scene.edges().len(),
        "scene built"
    );
    Ok(scene)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/builder.rs"]
mod tests;

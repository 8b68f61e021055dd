use svg::Document;
use svg::node::element::{Animate, Circle, Line};

use crate::animation::timeline::Timeline;
use crate::foundation::error::HexlogoResult;
use crate::scene::model::{Edge, Node, Scene};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// A timeline step resolved to the attributes of one `<animate>` element.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AnimateSpec {
    /// Element id of the `<animate>` itself.
    pub id: String,
    /// Element id of the animated shape.
    pub target: String,
    /// `attributeName`.
    pub attribute: &'static str,
    /// Start color.
    pub from: String,
    /// End color.
    pub to: String,
    /// SMIL begin-value list.
    pub begin: String,
    /// SMIL clock value.
    pub dur: String,
}

/// Resolve every step's target through the scene.
pub fn resolve_steps(scene: &Scene, timeline: &Timeline) -> HexlogoResult<Vec<AnimateSpec>> {
    timeline
        .steps()
        .iter()
        .map(|step| {
            Ok(AnimateSpec {
                id: step.id.to_string(),
                target: scene.element_id(step.target)?,
                attribute: step.property.attribute_name(),
                from: step.from.to_string(),
                to: step.to.to_string(),
                begin: step.begin.to_string(),
                dur: step.dur_value(),
            })
        })
        .collect()
}

/// Static drawing: edges first (fan edges, then ring edges), then ring nodes, then fan nodes.
pub fn render_scene(scene: &Scene) -> Document {
    let canvas = scene.canvas();
    let doc = Document::new()
        .set("xmlns", SVG_NS)
        .set("xmlns:xlink", XLINK_NS)
        .set("width", canvas.width)
        .set("height", canvas.height)
        .set("viewBox", canvas.view_box());

    let doc = scene
        .edges()
        .iter()
        .fold(doc, |doc, edge| doc.add(edge_line(edge)));
    scene
        .nodes()
        .iter()
        .fold(doc, |doc, node| doc.add(node_circle(node)))
}

/// Append one `<animate>` per timeline step after the drawn shapes.
pub fn append_animations(
    doc: Document,
    scene: &Scene,
    timeline: &Timeline,
) -> HexlogoResult<Document> {
    let specs = resolve_steps(scene, timeline)?;
    Ok(specs
        .iter()
        .fold(doc, |doc, spec| doc.add(animate(spec))))
}

fn edge_line(edge: &Edge) -> Line {
    Line::new()
        .set("id", edge.key.element_id())
        .set("x1", edge.a.x)
        .set("y1", edge.a.y)
        .set("x2", edge.b.x)
        .set("y2", edge.b.y)
        .set("stroke", edge.stroke.to_string())
        .set("stroke-width", edge.width)
}

fn node_circle(node: &Node) -> Circle {
    Circle::new()
        .set("id", node.key.element_id())
        .set("cx", node.center.x)
        .set("cy", node.center.y)
        .set("r", node.radius)
        .set("fill", node.fill.to_string())
}

fn animate(spec: &AnimateSpec) -> Animate {
    Animate::new()
        .set("id", spec.id.as_str())
        .set("xlink:href", format!("#{}", spec.target))
        .set("attributeName", spec.attribute)
        .set("from", spec.from.as_str())
        .set("to", spec.to.as_str())
        .set("begin", spec.begin.as_str())
        .set("dur", spec.dur.as_str())
}

#[cfg(test)]
#[path = "../../tests/unit/render/document.rs"]
mod tests;

use crate::animation::timeline::{FlashTiming, Property, StepId, Timeline};
use crate::foundation::color::Color;
use crate::foundation::error::{HexlogoError, HexlogoResult};
use crate::layout::edges::EdgeKey;
use crate::layout::geometry::FanSide;
use crate::scene::model::{ElementRef, NodeKey, Scene};

/// What a cue flashes, by structural key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CueTarget {
    /// A node circle.
    Node(NodeKey),
    /// An edge line.
    Edge(EdgeKey),
}

/// One scripted flash.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cue {
    /// Element to flash.
    pub target: CueTarget,
    /// Seconds after the cycle start.
    pub start: f64,
}

impl Cue {
    fn node(key: NodeKey, start: f64) -> Self {
        Self {
            target: CueTarget::Node(key),
            start,
        }
    }

    fn edge(key: EdgeKey, start: f64) -> Self {
        Self {
            target: CueTarget::Edge(key),
            start,
        }
    }
}

/// The logo's flash sequence: a pulse travels from the left fan node to the right one along
/// the upper and lower rims, then again through the middle of the hexagon.
pub fn canonical_script() -> Vec<Cue> {
    use FanSide::{Left, Right};

    vec![
        Cue::node(NodeKey::Fan(Left), 0.0),
        Cue::edge(EdgeKey::Fan(Left), 0.5),
        Cue::edge(EdgeKey::Ring(2, 3), 1.0),
        Cue::edge(EdgeKey::Ring(0, 2), 1.5),
        Cue::edge(EdgeKey::Ring(3, 5), 1.0),
        Cue::edge(EdgeKey::Ring(0, 5), 1.5),
        Cue::edge(EdgeKey::Fan(Right), 2.0),
        Cue::node(NodeKey::Fan(Right), 2.5),
        Cue::node(NodeKey::Fan(Left), 3.5),
        Cue::edge(EdgeKey::Fan(Left), 4.0),
        Cue::edge(EdgeKey::Ring(1, 3), 4.5),
        Cue::edge(EdgeKey::Ring(0, 4), 5.0),
        Cue::edge(EdgeKey::Ring(3, 4), 4.5),
        Cue::edge(EdgeKey::Ring(0, 1), 5.0),
        Cue::edge(EdgeKey::Fan(Right), 5.5),
        Cue::node(NodeKey::Fan(Right), 6.0),
    ]
}

/// A timeline with absolute offsets and the step that ends it.
#[derive(Clone, Debug)]
pub struct ScriptedTimeline {
    /// All flash steps, unbound.
    pub timeline: Timeline,
    /// Ramp-out step of the last cue.
    pub terminal: StepId,
}

/// Resolve each cue against `scene` and flash it from the element's resting color.
#[tracing::instrument(skip_all, fields(cues = cues.len()))]
pub fn script_timeline(
    scene: &Scene,
    cues: &[Cue],
    highlight: Color,
    timing: FlashTiming,
) -> HexlogoResult<ScriptedTimeline> {
    let mut timeline = Timeline::new(highlight, timing);
    let mut terminal = None;

    for cue in cues {
        let target = match cue.target {
            CueTarget::Node(key) => ElementRef::Node(scene.node_by_key(key)?.id),
            CueTarget::Edge(key) => ElementRef::Edge(scene.edge_by_key(key)?.id),
        };
        let original = scene.resting_color(target)?;
        terminal = Some(timeline.flash(
            target,
            original,
            cue.start,
            Property::for_target(target),
        )?);
    }

    let terminal =
        terminal.ok_or_else(|| HexlogoError::animation("flash script has no cues"))?;
    tracing::debug!(
        steps = timeline.len(),
        %terminal,
        duration_secs = timeline.duration_secs(),
        "timeline scripted"
    );
    Ok(ScriptedTimeline { timeline, terminal })
}

#[cfg(test)]
#[path = "../../tests/unit/animation/script.rs"]
mod tests;

use std::fmt;

use crate::foundation::color::Color;
use crate::foundation::error::{HexlogoError, HexlogoResult};
use crate::scene::model::ElementRef;

/// Handle to a step, rendered as the `<animate>` element id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StepId(pub(crate) u32);

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "anim-{}", self.0)
    }
}

/// Presentation attribute an animation drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// Node fill.
    Fill,
    /// Edge stroke.
    Stroke,
}

impl Property {
    /// The attribute natural for a target: fill for nodes, stroke for edges.
    pub fn for_target(target: ElementRef) -> Self {
        match target {
            ElementRef::Node(_) => Self::Fill,
            ElementRef::Edge(_) => Self::Stroke,
        }
    }

    /// SVG `attributeName`.
    pub fn attribute_name(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Stroke => "stroke",
        }
    }
}

/// When a step starts, in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Begin {
    /// Offset from document load.
    Offset(f64),
    /// Offset from document load, and again after each end of `anchor`.
    Chained {
        /// Seconds after load, and after each anchor end.
        offset: f64,
        /// Step whose end event restarts this one.
        anchor: StepId,
    },
}

impl Begin {
    /// The offset in seconds, whether chained or not.
    pub fn offset(self) -> f64 {
        match self {
            Self::Offset(t) | Self::Chained { offset: t, .. } => t,
        }
    }

    /// Anchor step for a chained begin.
    pub fn anchor(self) -> Option<StepId> {
        match self {
            Self::Offset(_) => None,
            Self::Chained { anchor, .. } => Some(anchor),
        }
    }
}

/// SMIL begin-value list, e.g. `+1.50s; anim-31.end+1.50s`.
impl fmt::Display for Begin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Offset(t) => write!(f, "+{t:.2}s"),
            Self::Chained { offset, anchor } => {
                write!(f, "+{offset:.2}s; {anchor}.end+{offset:.2}s")
            }
        }
    }
}

/// One color transition on one element.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationStep {
    /// Handle assigned by the timeline.
    pub id: StepId,
    /// Animated element.
    pub target: ElementRef,
    /// Animated attribute.
    pub property: Property,
    /// Start color.
    pub from: Color,
    /// End color.
    pub to: Color,
    /// Start time.
    pub begin: Begin,
    /// Duration in seconds.
    pub dur: f64,
}

impl AnimationStep {
    /// Absolute end time of the first run, in seconds.
    pub fn end_secs(&self) -> f64 {
        self.begin.offset() + self.dur
    }

    /// SMIL clock value for `dur`; whole seconds keep one decimal (`1.0s`).
    pub fn dur_value(&self) -> String {
        if self.dur.fract() == 0.0 {
            format!("{:.1}s", self.dur)
        } else {
            format!("{}s", self.dur)
        }
    }
}

/// Ramp durations of a flash.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlashTiming {
    /// Seconds spent ramping to the highlight color.
    pub ramp_in_secs: f64,
    /// Seconds spent ramping back to the resting color.
    pub ramp_out_secs: f64,
}

impl Default for FlashTiming {
    fn default() -> Self {
        Self {
            ramp_in_secs: 1.0,
            ramp_out_secs: 1.2,
        }
    }
}

/// Ordered animation steps with absolute begin offsets until a
/// [`crate::LoopBinding`] rewrites them.
#[derive(Clone, Debug)]
pub struct Timeline {
    steps: Vec<AnimationStep>,
    highlight: Color,
    timing: FlashTiming,
}

impl Timeline {
    /// Empty timeline flashing to `highlight`.
    pub fn new(highlight: Color, timing: FlashTiming) -> Self {
        Self {
            steps: Vec::new(),
            highlight,
            timing,
        }
    }

    /// Ramp `target` to the highlight color at `start`, then back to `original`.
    ///
    /// Returns the id of the ramp-back step, which ends the flash.
    pub fn flash(
        &mut self,
        target: ElementRef,
        original: Color,
        start: f64,
        property: Property,
    ) -> HexlogoResult<StepId> {
        if !start.is_finite() || start < 0.0 {
            return Err(HexlogoError::animation(format!(
                "flash on {target} must start at a finite, non-negative time (got {start})"
            )));
        }

        let ramp_in = self.push(AnimationStep {
            id: self.next_id(),
            target,
            property,
            from: original,
            to: self.highlight,
            begin: Begin::Offset(start),
            dur: self.timing.ramp_in_secs,
        });
        let ramp_out_start = start + self.timing.ramp_in_secs;
        let ramp_out = self.push(AnimationStep {
            id: self.next_id(),
            target,
            property,
            from: self.highlight,
            to: original,
            begin: Begin::Offset(ramp_out_start),
            dur: self.timing.ramp_out_secs,
        });
        tracing::trace!(%target, start, %ramp_in, %ramp_out, "flash scripted");
        Ok(ramp_out)
    }

    /// Steps in the order they were scripted.
    pub fn steps(&self) -> &[AnimationStep] {
        &self.steps
    }

    pub(crate) fn steps_mut(&mut self) -> &mut [AnimationStep] {
        &mut self.steps
    }

    /// Look up a step by id.
    pub fn get(&self, id: StepId) -> Option<&AnimationStep> {
        self.steps.get(id.0 as usize)
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Return `true` when nothing has been scripted.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Time at which the last step of a cold-start run ends.
    pub fn duration_secs(&self) -> f64 {
        self.steps
            .iter()
            .map(AnimationStep::end_secs)
            .fold(0.0, f64::max)
    }

    fn next_id(&self) -> StepId {
        StepId(self.steps.len() as u32)
    }

    fn push(&mut self, step: AnimationStep) -> StepId {
        let id = step.id;
        self.steps.push(step);
        id
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;

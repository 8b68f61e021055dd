use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::looping::TerminalPolicy;
use crate::animation::script::{Cue, canonical_script};
use crate::animation::timeline::FlashTiming;
use crate::foundation::color::Color;
use crate::foundation::core::{Canvas, Point};
use crate::foundation::error::{HexlogoError, HexlogoResult};
use crate::layout::geometry::RING_NODES;

/// Every tunable constant of the logo.
///
/// `Default` reproduces the canonical logo exactly; a JSON config only needs to list the fields
/// it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogoConfig {
    /// Output canvas.
    pub canvas: Canvas,
    /// Center of the ring.
    pub center: Point,
    /// Radius of every node circle.
    pub node_radius: f64,
    /// Distance from the center to each ring node.
    pub ring_radius: f64,
    /// Horizontal distance from the center to each fan node.
    pub fan_distance: f64,
    /// Stroke width of every edge.
    pub edge_width: f64,
    /// Node, edge, and highlight colors.
    pub palette: Palette,
    /// Ramp durations of a single flash.
    pub flash: FlashTiming,
    /// Whether the terminal step chains on its own end event.
    pub loop_terminal: TerminalPolicy,
    /// Flash cues in authoring order; the last one ends the loop cycle.
    pub script: Vec<Cue>,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            center: Point::new(105.0, 65.0),
            node_radius: 15.0,
            ring_radius: 50.0,
            fan_distance: 90.0,
            edge_width: 2.5,
            palette: Palette::default(),
            flash: FlashTiming::default(),
            loop_terminal: TerminalPolicy::default(),
            script: canonical_script(),
        }
    }
}

/// Colors used by the logo.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    /// Per-node fill, indexed by ring position.
    pub ring: Vec<Color>,
    /// Edge stroke and fan node fill.
    pub neutral: Color,
    /// Transient flash color.
    pub highlight: Color,
}

impl Default for Palette {
    fn default() -> Self {
        let cycle = [Color::BLUE, Color::RED, Color::YELLOW];
        Self {
            ring: cycle.iter().cycle().take(RING_NODES).copied().collect(),
            neutral: Color::GRAY,
            highlight: Color::GREEN,
        }
    }
}

impl LogoConfig {
    /// Parse a config from a JSON reader. Missing fields take their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> HexlogoResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| HexlogoError::validation(format!("parse logo config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> HexlogoResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            HexlogoError::validation(format!("open logo config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject configs that would produce degenerate or non-finite geometry.
    pub fn validate(&self) -> HexlogoResult<()> {
        fn positive(name: &str, v: f64) -> HexlogoResult<()> {
            if !v.is_finite() || v <= 0.0 {
                return Err(HexlogoError::validation(format!(
                    "{name} must be finite and > 0 (got {v})"
                )));
            }
            Ok(())
        }

        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(HexlogoError::validation("canvas width/height must be > 0"));
        }
        if !self.center.x.is_finite() || !self.center.y.is_finite() {
            return Err(HexlogoError::validation("center must be finite"));
        }
        positive("node_radius", self.node_radius)?;
        positive("ring_radius", self.ring_radius)?;
        positive("fan_distance", self.fan_distance)?;
        positive("edge_width", self.edge_width)?;
        positive("flash.ramp_in_secs", self.flash.ramp_in_secs)?;
        positive("flash.ramp_out_secs", self.flash.ramp_out_secs)?;

        if self.palette.ring.len() != RING_NODES {
            return Err(HexlogoError::validation(format!(
                "palette.ring must have exactly {RING_NODES} colors (got {})",
                self.palette.ring.len()
            )));
        }

        if self.script.is_empty() {
            return Err(HexlogoError::validation("script must contain at least one cue"));
        }
        if let Some(cue) = self
            .script
            .iter()
            .find(|c| !c.start.is_finite() || c.start < 0.0)
        {
            return Err(HexlogoError::validation(format!(
                "cue start must be finite and >= 0 (got {} for {:?})",
                cue.start, cue.target
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;

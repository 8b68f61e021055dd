pub use kurbo::{Point, Vec2};

/// Output canvas dimensions in SVG user units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in user units.
    pub width: u32,
    /// Height in user units.
    pub height: u32,
}

impl Canvas {
    /// `viewBox` attribute value covering the whole canvas.
    pub fn view_box(self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    /// Return `true` when `p` lies inside the canvas bounds (inclusive).
    pub fn contains(self, p: Point) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x <= f64::from(self.width) && p.y <= f64::from(self.height)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 210,
            height: 130,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

use std::f64::consts::TAU;

use crate::foundation::core::{Point, Vec2};

/// Number of nodes on the ring.
pub const RING_NODES: usize = 6;

/// Ring index the left fan node connects to.
pub const LEFT_ANCHOR: usize = 3;
/// Ring index the right fan node connects to.
pub const RIGHT_ANCHOR: usize = 0;

/// Which of the two fan nodes.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FanSide {
    /// West of the ring.
    Left,
    /// East of the ring.
    Right,
}

impl FanSide {
    /// Both sides, left first.
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];

    /// Ring node this fan node is wired to (the nearest one).
    pub fn anchor(self) -> usize {
        match self {
            Self::Left => LEFT_ANCHOR,
            Self::Right => RIGHT_ANCHOR,
        }
    }

    /// Lowercase name used in element ids.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Positions of every node in the logo.
#[derive(Clone, Debug, PartialEq)]
pub struct RingLayout {
    /// Ring center.
    pub center: Point,
    /// Ring node positions, index 0 due east, then counter-clockwise in math convention.
    pub ring: [Point; RING_NODES],
    /// Left fan node position.
    pub fan_left: Point,
    /// Right fan node position.
    pub fan_right: Point,
}

impl RingLayout {
    /// Place the ring and fan nodes around `center`.
    pub fn compute(center: Point, ring_radius: f64, fan_distance: f64) -> Self {
        let (fan_left, fan_right) = fan_positions(center, fan_distance);
        Self {
            center,
            ring: ring_positions(center, ring_radius),
            fan_left,
            fan_right,
        }
    }

    /// Position of the fan node on `side`.
    pub fn fan(&self, side: FanSide) -> Point {
        match side {
            FanSide::Left => self.fan_left,
            FanSide::Right => self.fan_right,
        }
    }
}

/// Evenly spaced ring points. Screen Y grows downward, so the math-convention
/// counter-clockwise walk appears clockwise on screen.
pub fn ring_positions(center: Point, radius: f64) -> [Point; RING_NODES] {
    std::array::from_fn(|i| {
        let theta = TAU * (i as f64) / (RING_NODES as f64);
        center + Vec2::new(theta.cos() * radius, -theta.sin() * radius)
    })
}

/// `(left, right)` fan points on the horizontal axis through `center`.
pub fn fan_positions(center: Point, distance: f64) -> (Point, Point) {
    (
        Point::new(center.x - distance, center.y),
        Point::new(center.x + distance, center.y),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/layout/geometry.rs"]
mod tests;

use crate::layout::geometry::{FanSide, RING_NODES};

/// Structural identity of an edge, independent of its position in the draw order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKey {
    /// Fan node on `side` to its anchor ring node.
    Fan(FanSide),
    /// Ring node `i` to ring node `j`, always `i < j`.
    Ring(usize, usize),
}

impl EdgeKey {
    /// Ring edge key with endpoints normalized to `i < j`.
    pub fn ring(a: usize, b: usize) -> Self {
        Self::Ring(a.min(b), a.max(b))
    }

    /// Element id used in the SVG output.
    pub fn element_id(self) -> String {
        match self {
            Self::Fan(side) => format!("edge-fan-{}", side.as_str()),
            Self::Ring(i, j) => format!("edge-{i}-{j}"),
        }
    }
}

/// Rule that rejected a ring pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipRule {
    /// `i == j`.
    SameNode,
    /// `i mod 3 == j mod 3`.
    SameClass,
    /// `{i mod 3, j mod 3} == {1, 2}`.
    CrossClass,
    /// The `(0, 3)` long diagonal.
    HorizontalDiagonal,
}

/// Outcome of classifying one ring pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairDecision {
    /// Draw the edge.
    Include,
    /// Leave the pair unconnected.
    Skip(SkipRule),
}

/// Classify ring pair `(i, j)`. Rules are checked in order and the first match wins.
pub fn classify_pair(i: usize, j: usize) -> PairDecision {
    let (ci, cj) = (i % 3, j % 3);
    if i == j {
        return PairDecision::Skip(SkipRule::SameNode);
    }
    if ci == cj {
        return PairDecision::Skip(SkipRule::SameClass);
    }
    if matches!((ci, cj), (1, 2) | (2, 1)) {
        return PairDecision::Skip(SkipRule::CrossClass);
    }
    if (i.min(j), i.max(j)) == (0, 3) {
        return PairDecision::Skip(SkipRule::HorizontalDiagonal);
    }
    PairDecision::Include
}

/// Ring edges to draw, in ascending `(i, j)` order.
pub fn select_ring_pairs() -> Vec<EdgeKey> {
    let mut out = Vec::new();
    for i in 0..RING_NODES {
        for j in (i + 1)..RING_NODES {
            match classify_pair(i, j) {
                PairDecision::Include => out.push(EdgeKey::Ring(i, j)),
                PairDecision::Skip(rule) => {
                    tracing::trace!(i, j, ?rule, "ring pair skipped");
                }
            }
        }
    }
    out
}

/// Every edge of the logo in draw order: fan edges first, then ring pairs.
pub fn edge_plan() -> Vec<EdgeKey> {
    FanSide::ALL
        .into_iter()
        .map(EdgeKey::Fan)
        .chain(select_ring_pairs())
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/edges.rs"]
mod tests;

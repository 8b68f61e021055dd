pub(crate) mod edges;
pub(crate) mod geometry;

//! hexlogo draws a hexagonal node-graph logo and a looping animated variant of it.
//!
//! # Pipeline overview
//!
//! 1. **Layout**: ring and fan node positions, plus a fixed rule table choosing which ring
//!    pairs are connected ([`RingLayout`], [`classify_pair`]).
//! 2. **Scene**: nodes and edges with stable ids and key lookups ([`build_scene`]).
//! 3. **Render**: the scene as an SVG document ([`render_scene`]).
//! 4. **Animate**: scripted color flashes with absolute begin offsets ([`script_timeline`]),
//!    then a separate pass chaining every begin on the terminal step's end event so the
//!    sequence loops ([`LoopBinding`]).
//!
//! [`generate`] runs all of it and returns the static and animated SVG text.
//!
//! Everything is deterministic: the same [`LogoConfig`] always yields byte-identical output.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod foundation;
mod layout;
mod pipeline;
mod render;
mod scene;

pub use crate::animation::looping::{LoopBinding, TerminalPolicy};
pub use crate::animation::script::{
    Cue, CueTarget, ScriptedTimeline, canonical_script, script_timeline,
};
pub use crate::animation::timeline::{
    AnimationStep, Begin, FlashTiming, Property, StepId, Timeline,
};
pub use crate::config::{LogoConfig, Palette};
pub use crate::foundation::color::Color;
pub use crate::foundation::core::{Canvas, Point, Vec2};
pub use crate::foundation::error::{HexlogoError, HexlogoResult};
pub use crate::layout::edges::{
    EdgeKey, PairDecision, SkipRule, classify_pair, edge_plan, select_ring_pairs,
};
pub use crate::layout::geometry::{
    FanSide, RING_NODES, RingLayout, fan_positions, ring_positions,
};
pub use crate::pipeline::{LogoArtifacts, OutputNames, WrittenPaths, generate};
pub use crate::render::document::{
    AnimateSpec, append_animations, render_scene, resolve_steps,
};
pub use crate::render::raster::{parse_svg, rasterize, rasterize_svg};
pub use crate::scene::builder::{SceneBuilder, build_scene, connect_edges, place_nodes};
pub use crate::scene::model::{Edge, EdgeId, ElementRef, Node, NodeId, NodeKey, Scene};

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::animation::looping::LoopBinding;
use crate::animation::script::script_timeline;
use crate::animation::timeline::Timeline;
use crate::config::LogoConfig;
use crate::foundation::error::HexlogoResult;
use crate::render::document::{AnimateSpec, append_animations, render_scene, resolve_steps};
use crate::scene::builder::build_scene;
use crate::scene::model::Scene;

/// File names of the two SVG artifacts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputNames {
    /// Static logo.
    pub static_name: String,
    /// Looping animated logo.
    pub active_name: String,
}

impl Default for OutputNames {
    fn default() -> Self {
        Self {
            static_name: "hexlogo.svg".to_owned(),
            active_name: "hexlogo_active.svg".to_owned(),
        }
    }
}

/// Everything one run produces.
#[derive(Clone, Debug)]
pub struct LogoArtifacts {
    /// Laid-out nodes and edges.
    pub scene: Scene,
    /// Loop-bound flash timeline.
    pub timeline: Timeline,
    /// Binding applied to `timeline`.
    pub binding: LoopBinding,
    /// Serialized static SVG.
    pub static_svg: String,
    /// Serialized animated SVG; the static drawing plus `<animate>` elements.
    pub active_svg: String,
}

/// Paths written by [`LogoArtifacts::write`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenPaths {
    /// Static SVG path.
    pub static_path: PathBuf,
    /// Animated SVG path.
    pub active_path: PathBuf,
}

/// Build the scene, serialize the static logo, script and loop-bind the flash timeline, then
/// serialize the animated logo from the same document.
#[tracing::instrument(skip_all)]
pub fn generate(cfg: &LogoConfig) -> HexlogoResult<LogoArtifacts> {
    let scene = build_scene(cfg)?;

    let doc = render_scene(&scene);
    let static_svg = doc.to_string();

    let mut scripted = script_timeline(&scene, &cfg.script, cfg.palette.highlight, cfg.flash)?;
    let binding = LoopBinding::new(scripted.terminal, cfg.loop_terminal);
    binding.apply(&mut scripted.timeline)?;

    let active_svg = append_animations(doc, &scene, &scripted.timeline)?.to_string();
    tracing::info!(
        steps = scripted.timeline.len(),
        period_secs = binding.period_secs(&scripted.timeline)?,
        policy = ?cfg.loop_terminal,
        "logo generated"
    );

    Ok(LogoArtifacts {
        scene,
        timeline: scripted.timeline,
        binding,
        static_svg,
        active_svg,
    })
}

impl LogoArtifacts {
    /// Write both SVG files into `dir`, creating it if needed.
    pub fn write(&self, dir: &Path, names: &OutputNames) -> HexlogoResult<WrittenPaths> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output dir '{}'", dir.display()))?;

        let static_path = dir.join(&names.static_name);
        let active_path = dir.join(&names.active_name);
        for (path, text) in [
            (&static_path, &self.static_svg),
            (&active_path, &self.active_svg),
        ] {
            std::fs::write(path, text).with_context(|| format!("write svg '{}'", path.display()))?;
            tracing::info!(path = %path.display(), bytes = text.len(), "wrote");
        }

        Ok(WrittenPaths {
            static_path,
            active_path,
        })
    }

    /// The bound timeline as `<animate>` attribute sets.
    pub fn animate_specs(&self) -> HexlogoResult<Vec<AnimateSpec>> {
        resolve_steps(&self.scene, &self.timeline)
    }
}

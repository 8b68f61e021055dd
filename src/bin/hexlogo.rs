use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser, Debug)]
#[command(name = "hexlogo", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the static and animated SVG logos.
    Generate(GenerateArgs),
    /// Rasterize the static logo to a PNG.
    Preview(PreviewArgs),
    /// Print the loop-bound animation timeline as JSON.
    Timeline(TimelineArgs),
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Logo config JSON; omitted fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override whether the terminal step restarts itself.
    #[arg(long, value_enum)]
    loop_terminal: Option<LoopTerminalChoice>,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Directory the SVG files are written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// File name of the static SVG.
    #[arg(long, default_value = "hexlogo.svg")]
    static_name: String,

    /// File name of the animated SVG.
    #[arg(long, default_value = "hexlogo_active.svg")]
    active_name: String,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Pixels per SVG user unit.
    #[arg(long, default_value_t = 4.0)]
    scale: f32,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LoopTerminalChoice {
    Include,
    Exclude,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hexlogo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Preview(args) => cmd_preview(args),
        Command::Timeline(args) => cmd_timeline(args),
    }
}

fn load_config(args: &ConfigArgs) -> anyhow::Result<hexlogo::LogoConfig> {
    let mut cfg = match &args.config {
        Some(path) => hexlogo::LogoConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => hexlogo::LogoConfig::default(),
    };
    if let Some(choice) = args.loop_terminal {
        cfg.loop_terminal = match choice {
            LoopTerminalChoice::Include => hexlogo::TerminalPolicy::Include,
            LoopTerminalChoice::Exclude => hexlogo::TerminalPolicy::Exclude,
        };
    }
    Ok(cfg)
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let artifacts = hexlogo::generate(&cfg)?;

    let names = hexlogo::OutputNames {
        static_name: args.static_name,
        active_name: args.active_name,
    };
    let written = artifacts.write(&args.out_dir, &names)?;

    eprintln!("wrote {}", written.static_path.display());
    eprintln!("wrote {}", written.active_path.display());
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let scene = hexlogo::build_scene(&cfg)?;
    let text = hexlogo::render_scene(&scene).to_string();
    let img = hexlogo::rasterize_svg(&text, args.scale)?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    save_png(&args.out, &img)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn save_png(path: &Path, img: &image::RgbaImage) -> anyhow::Result<()> {
    image::save_buffer_with_format(
        path,
        img.as_raw(),
        img.width(),
        img.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let artifacts = hexlogo::generate(&cfg)?;
    let specs = artifacts.animate_specs()?;

    let out = serde_json::json!({
        "terminal": artifacts.binding.terminal.to_string(),
        "policy": cfg.loop_terminal,
        "period_secs": artifacts.binding.period_secs(&artifacts.timeline)?,
        "steps": specs,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

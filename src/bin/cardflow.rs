use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cardflow", version)]
struct Cli {
    /// Increase log verbosity (`-v` debug, `-vv` trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a scene as a PNG.
    Frame(FrameArgs),
    /// Render a scene and report which card lies under a surface point.
    Pick(PickArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PickArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Surface x coordinate in pixels.
    #[arg(long)]
    x: f64,

    /// Surface y coordinate in pixels.
    #[arg(long)]
    y: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Pick(args) => cmd_pick(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

struct Rendered {
    surface: image::RgbaImage,
    cards: Vec<cardflow::Card>,
    scene: cardflow::Scene,
}

fn render(in_path: &Path) -> anyhow::Result<Rendered> {
    let file = cardflow::SceneFile::load(in_path)?;
    let base_dir = in_path.parent().unwrap_or_else(|| Path::new("."));
    let mut cards = file.build_cards(base_dir)?;
    let scene = file.build_scene();

    let mut surface = image::RgbaImage::new(file.surface.width, file.surface.height);
    let stats = cardflow::render_frame(&mut surface, &scene, &mut cards, file.active, &file.config)?;
    tracing::info!(
        painted = stats.painted,
        culled = stats.culled,
        skipped = stats.skipped,
        "frame done"
    );
    Ok(Rendered {
        surface,
        cards,
        scene,
    })
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let rendered = render(&args.in_path)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    rendered
        .surface
        .save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_pick(args: PickArgs) -> anyhow::Result<()> {
    let rendered = render(&args.in_path)?;
    let hit = cardflow::pick_card(
        &rendered.scene,
        &rendered.cards,
        cardflow::Point::new(args.x, args.y),
    );
    match hit {
        Some(idx) => println!("{idx}"),
        None => println!("none"),
    }
    Ok(())
}

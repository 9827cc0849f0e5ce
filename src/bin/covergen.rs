use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{CommandFactory as _, Parser, error::ErrorKind};
use covergen::{
    Align, BatchManifest, CanvasSize, RenderRequest, StyleOverrides, VignetteMask,
    default_output_path, render_cover, resolve_font_path, save_cover, style,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "covergen",
    version,
    about = "Render deterministic procedural cover art for a title"
)]
struct Cli {
    /// Title text; also the seed source.
    #[arg(long, default_value = "")]
    text: String,

    /// Optional subtitle line.
    #[arg(long)]
    subtitle: Option<String>,

    /// Output file (.png, .jpg, ...). With --batch, the directory for jobs without "out".
    #[arg(long)]
    out: Option<PathBuf>,

    /// Canvas size as <width>x<height>.
    #[arg(long, default_value = "1600x900", value_parser = parse_size)]
    size: CanvasSize,

    /// Explicit seed instead of one derived from text and style.
    #[arg(long)]
    seed: Option<u64>,

    /// Font file; defaults to the first known system font found.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Style preset (see --list-styles).
    #[arg(long, default_value = style::DEFAULT_STYLE, value_parser = parse_style)]
    style: String,

    /// Grain strength override, clamped to 0..=2.
    #[arg(long, allow_negative_numbers = true)]
    noise: Option<f64>,

    /// Shape density override, clamped to 0..=2.
    #[arg(long, allow_negative_numbers = true)]
    shapes: Option<f64>,

    /// Vignette strength override, clamped to 0..=2.
    #[arg(long, allow_negative_numbers = true)]
    vignette: Option<f64>,

    /// Text alignment: left, center or right (anything else is left).
    #[arg(long, value_parser = parse_align)]
    align: Option<Align>,

    /// Margin ratio override, clamped to 0.04..=0.12.
    #[arg(long, allow_negative_numbers = true)]
    margin: Option<f64>,

    /// Vignette mask shape: radial or soft-rect.
    #[arg(long, default_value = "radial", value_parser = parse_mask)]
    vignette_mask: VignetteMask,

    /// Print the style presets and exit.
    #[arg(long)]
    list_styles: bool,

    /// With --list-styles, print JSON.
    #[arg(long, requires = "list_styles")]
    json: bool,

    /// Render every job in a JSON manifest.
    #[arg(long, value_name = "MANIFEST")]
    batch: Option<PathBuf>,

    /// More logging (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_size(s: &str) -> Result<CanvasSize, String> {
    CanvasSize::parse(s).map_err(|e| e.to_string())
}

fn parse_style(s: &str) -> Result<String, String> {
    match style::lookup(s) {
        Some(_) => Ok(s.to_string()),
        None => Err(format!(
            "unknown style '{s}' (expected one of: {})",
            style::style_names().collect::<Vec<_>>().join(", ")
        )),
    }
}

fn parse_align(s: &str) -> Result<Align, String> {
    Ok(Align::parse_lenient(s))
}

fn parse_mask(s: &str) -> Result<VignetteMask, String> {
    s.parse().map_err(|e: covergen::CoverError| e.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list_styles {
        return list_styles(cli.json);
    }
    if let Some(manifest) = &cli.batch {
        return cmd_batch(manifest, cli.out.as_deref());
    }
    if cli.text.trim().is_empty() {
        Cli::command()
            .error(ErrorKind::ValueValidation, "--text must be non-empty")
            .exit();
    }
    cmd_render(cli)
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn list_styles(json: bool) -> anyhow::Result<()> {
    if json {
        let out = serde_json::to_string_pretty(style::presets()).context("serialize styles")?;
        println!("{out}");
        return Ok(());
    }
    for preset in style::presets() {
        println!("{}", listing_line(preset));
    }
    Ok(())
}

fn listing_line(preset: &style::StylePreset) -> String {
    format!(
        "{:9}  theme={:5}  {}",
        preset.name,
        preset.spec.theme.as_str(),
        preset.spec.description
    )
}

fn cmd_render(cli: Cli) -> anyhow::Result<()> {
    let text = cli.text.trim().to_string();
    let out = cli
        .out
        .clone()
        .unwrap_or_else(|| default_output_path(&text, Path::new(".")));

    let req = RenderRequest {
        subtitle: cli.subtitle,
        size: cli.size,
        style: cli.style,
        seed: cli.seed,
        font_path: resolve_font_path(cli.font.as_deref()),
        overrides: StyleOverrides {
            noise: cli.noise,
            shapes: cli.shapes,
            vignette: cli.vignette,
            align: cli.align,
            margin: cli.margin,
        },
        vignette_mask: cli.vignette_mask,
        ..RenderRequest::new(text)
    };

    let cover = render_cover(&req).context("render cover")?;
    tracing::info!(
        seed = cover.report.seed,
        shapes = cover.report.shape_count,
        mask = cover.report.vignette_mask.as_str(),
        "rendered"
    );
    save_cover(&cover.image, &out).with_context(|| format!("write '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_batch(manifest_path: &Path, out_dir: Option<&Path>) -> anyhow::Result<()> {
    let manifest = BatchManifest::load(manifest_path)
        .with_context(|| format!("load manifest '{}'", manifest_path.display()))?;
    let out_dir = out_dir.unwrap_or_else(|| Path::new("."));

    let outcomes = covergen::run_batch(&manifest, out_dir);
    let mut failed = 0usize;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(path) => eprintln!("wrote {}", path.display()),
            Err(err) => {
                failed += 1;
                eprintln!("job {} failed: {err}", outcome.index);
            }
        }
    }
    if failed > 0 {
        anyhow::bail!("{failed} of {} jobs failed", outcomes.len());
    }
    Ok(())
}

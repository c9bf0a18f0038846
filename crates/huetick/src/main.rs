use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use winit::dpi::LogicalSize;

use huetick_core::{ColorAtTime, SystemClock};
use huetick_engine::device::GpuConfig;
use huetick_engine::logging::{init_logging, LoggingConfig};
use huetick_engine::text::Typeface;
use huetick_engine::window::{Runtime, RuntimeConfig, WindowMode};

/// Well-known system font locations, tried in order. The saver only draws
/// `#` and hex digits, so any sans face works.
const FONT_PATHS: &[&str] = &[
    // Linux
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    // macOS
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    // Windows
    "C:\\Windows\\Fonts\\segoeui.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

#[derive(Debug, Default)]
struct Options {
    preview: bool,
    windowed: bool,
    font: Option<PathBuf>,
}

fn parse_args() -> Result<Options> {
    let mut opts = Options::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--preview" => opts.preview = true,
            "--windowed" => opts.windowed = true,
            "--font" => {
                let path = args.next().context("--font requires a path argument")?;
                opts.font = Some(PathBuf::from(path));
            }
            "--help" | "-h" => {
                println!("usage: huetick [--windowed] [--preview] [--font <path>]");
                std::process::exit(0);
            }
            other => bail!("unknown argument: {other}"),
        }
    }

    Ok(opts)
}

/// Loads the label typeface: the explicit `--font` path if given, otherwise
/// the first system font that parses. No font at all is a configuration
/// defect, not something to limp past.
fn load_typeface(explicit: Option<&PathBuf>) -> Result<Typeface> {
    if let Some(path) = explicit {
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read font {}", path.display()))?;
        return Typeface::from_bytes(&bytes)
            .with_context(|| format!("failed to parse font {}", path.display()));
    }

    for path in FONT_PATHS {
        let Ok(bytes) = std::fs::read(path) else {
            continue;
        };
        match Typeface::from_bytes(&bytes) {
            Ok(typeface) => {
                log::debug!("using font {path}");
                return Ok(typeface);
            }
            Err(e) => log::warn!("skipping font {path}: {e}"),
        }
    }

    bail!("no usable system font found; pass one explicitly with --font <path>")
}

fn main() -> Result<()> {
    let opts = parse_args()?;

    init_logging(LoggingConfig::default());

    let typeface = load_typeface(opts.font.as_ref())?;

    let mode = if opts.preview || opts.windowed {
        WindowMode::Windowed
    } else {
        WindowMode::Fullscreen
    };

    let initial_size = if opts.preview {
        // Roughly the thumbnail size a saver preview pane uses.
        LogicalSize::new(320.0, 240.0)
    } else {
        LogicalSize::new(800.0, 600.0)
    };

    let config = RuntimeConfig {
        title: "huetick".to_string(),
        initial_size,
        mode,
        preview: opts.preview,
    };

    Runtime::run(
        config,
        GpuConfig::default(),
        typeface,
        ColorAtTime::new(SystemClock),
    )
}

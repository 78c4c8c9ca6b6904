#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
use bar_chart_rs::core::{ChartDataset, Viewport};
#[cfg(feature = "cairo-backend")]
use bar_chart_rs::render::{CairoRenderer, PangoTextMeasurer};
#[cfg(feature = "cairo-backend")]
use bar_chart_rs::{BarChartConfig, BarChartEngine, BarChartStyle, telemetry};

#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_PATH: &str = "bar_chart.png";
#[cfg(feature = "cairo-backend")]
const DEFAULT_WIDTH: i32 = 640;
#[cfg(feature = "cairo-backend")]
const DEFAULT_HEIGHT: i32 = 360;

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    output_path: PathBuf,
    width: i32,
    height: i32,
    selected: Option<usize>,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("render_bar_chart_png requires `--features cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    let _ = telemetry::init_default_tracing();
    let args = parse_args()?;

    let dataset = ChartDataset::from_values(
        "Emotional",
        [100.0, -60.0, 0.0, -90.0, 40.0, 80.0],
    );
    let config = BarChartConfig::new(Viewport::new(
        f64::from(args.width),
        f64::from(args.height),
    ))
    .with_style(BarChartStyle::default().with_spacing(2.0))
    .without_animation();

    let renderer = CairoRenderer::new(args.width, args.height).map_err(|e| e.to_string())?;
    let mut engine = BarChartEngine::new(renderer, config, dataset).map_err(|e| e.to_string())?;
    engine.set_text_measurer(Box::new(
        PangoTextMeasurer::new("Sans").map_err(|e| e.to_string())?,
    ));

    if let Some(index) = args.selected {
        let canvas = engine.canvas_rect();
        let slot = canvas.width / engine.dataset().len().max(1) as f64;
        let pointer_x = canvas.x + slot * (index as f64 + 0.5);
        engine
            .drag_move(pointer_x, canvas.y)
            .map_err(|e| e.to_string())?;
    }

    engine.render().map_err(|e| e.to_string())?;
    let renderer = engine.into_renderer();
    renderer
        .write_png(&args.output_path)
        .map_err(|e| e.to_string())?;

    let stats = renderer.last_stats();
    println!(
        "wrote {} ({} rects, {} texts, {} lines)",
        args.output_path.display(),
        stats.rects_drawn,
        stats.texts_drawn,
        stats.lines_drawn
    );
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut output_path = PathBuf::from(DEFAULT_OUTPUT_PATH);
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut selected: Option<usize> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--output" | "-o" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = PathBuf::from(value);
            }
            "--width" => {
                width = parse_dimension("--width", args.next())?;
            }
            "--height" => {
                height = parse_dimension("--height", args.next())?;
            }
            "--select" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --select".to_owned())?;
                let index = value
                    .parse::<usize>()
                    .map_err(|e| format!("invalid --select `{value}`: {e}"))?;
                selected = Some(index);
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        output_path,
        width,
        height,
        selected,
    })
}

#[cfg(feature = "cairo-backend")]
fn parse_dimension(flag: &str, value: Option<String>) -> Result<i32, String> {
    let value = value.ok_or_else(|| format!("missing value for {flag}"))?;
    let parsed = value
        .parse::<i32>()
        .map_err(|e| format!("invalid {flag} `{value}`: {e}"))?;
    if parsed <= 0 {
        return Err(format!("{flag} must be > 0"));
    }
    Ok(parsed)
}

#[cfg(feature = "cairo-backend")]
fn usage_message() -> &'static str {
    "Usage: cargo run --features cairo-backend --bin render_bar_chart_png -- \
[--output <png>] [--width <px>] [--height <px>] [--select <index>]"
}

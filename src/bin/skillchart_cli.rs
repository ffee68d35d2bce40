//! CLI tool for skillchart - renders a dataset headlessly and outputs the
//! draw commands as JSON
//!
//! Usage:
//!   skillchart_cli <dataset.json> --kind radar              # JSON to stdout
//!   skillchart_cli <dataset.json> --kind pie --cutout 0.5 -o out.json
//!
//! Set `RUST_LOG=skillchart=debug` to see layout decisions.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use skillchart::render::RecordingSurface;
use skillchart::{render_chart, ChartConfig, ChartKind, Dataset, Result};

#[derive(Debug, Parser)]
#[command(name = "skillchart_cli", version, about = "Render a chart dataset to draw commands")]
struct Args {
    /// Dataset JSON file (`labels` plus `series` or `datasets`)
    input: PathBuf,

    /// Chart kind: bar, pie (donut), or radar (spider)
    #[arg(short, long, default_value = "bar")]
    kind: ChartKind,

    /// Canvas width in pixels (defaults per kind)
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels (defaults per kind)
    #[arg(long)]
    height: Option<u32>,

    /// Donut hole as a fraction of the pie radius
    #[arg(long, default_value_t = 0.0)]
    cutout: f64,

    /// Write JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> ChartConfig {
        ChartConfig {
            kind: self.kind,
            width: self.width,
            height: self.height,
            cutout: self.cutout,
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let data = fs::read_to_string(&args.input)?;
    let dataset: Dataset = serde_json::from_str(&data)?;

    let config = args.config();
    let (width, height) = config.size();
    let mut surface = RecordingSurface::new(f64::from(width), f64::from(height));
    render_chart(&config, &dataset, &mut surface)?;
    tracing::info!(
        kind = ?config.kind,
        width,
        height,
        commands = surface.command_count(),
        "rendered"
    );

    let json = serde_json::to_string_pretty(surface.commands())?;
    match &args.output {
        Some(path) => {
            fs::write(path, &json)?;
            eprintln!("Written: {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

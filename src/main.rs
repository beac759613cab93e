use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use motion_tables::export::ExportSummary;

/// Convert a motion-capture CSV into stepper step/delay tables.
#[derive(Debug, Parser)]
#[command(name = "motion-tables", version, about)]
struct Cli {
    /// Capture CSV exported from the animation tool
    input: PathBuf,

    /// TOML configuration with drive geometry and channel definitions
    #[arg(short, long, default_value = "motion.toml")]
    config: PathBuf,

    /// Output file (defaults to the input name with a .txt extension,
    /// stripping a trailing "_data")
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    // Setup logging (set RUST_LOG=info or debug)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(summary) => report(&summary),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> motion_tables::Result<ExportSummary> {
    let config = motion_tables::load_config(&cli.config)?;

    let columns: Vec<&str> = config.required_columns().collect();
    let capture = motion_tables::load_capture(&cli.input, &config.capture, &columns)?;
    info!(
        rows = capture.len(),
        input = %cli.input.display(),
        "capture loaded"
    );

    let tables = motion_tables::process_capture(&capture, &config)?;

    let output = cli.output.unwrap_or_else(|| default_output_path(&cli.input));
    motion_tables::write_tables(&output, &tables)
}

fn report(summary: &ExportSummary) {
    println!("Export complete -> {}", summary.path.display());
    println!("dataLength: {}", summary.data_length);
    for range in &summary.ranges {
        let label = if range.suffix.is_empty() {
            "delta steps".to_string()
        } else {
            format!("delta steps ({})", range.suffix)
        };
        println!("{} range: {} .. {}", label, range.min_delta, range.max_delta);
    }
}

/// Derive the output path from the input: same location, `.txt` extension,
/// with a trailing `_data` stem suffix stripped.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("motion");
    let base = stem.strip_suffix("_data").unwrap_or(stem);

    input.with_file_name(format!("{}.txt", base))
}

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use inspectxml::{InspectionsExport, PlatformInspection, SEVERITY_KEY};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(
    name = "inspectxml",
    version,
    about = "Read an inspections export and list its findings"
)]
struct Args {
    /// Input file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Directory file paths are made relative to (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    checkout_dir: Option<PathBuf>,
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: FormatArg,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let input_data = read_input(&args.input)?;
    let report = inspectxml::from_str(&input_data).with_context(|| match &args.input {
        Some(path) => format!("failed to parse {}", path.display()),
        None => "failed to parse stdin".to_string(),
    })?;

    let checkout_dir = match args.checkout_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("failed to read current directory")?,
    };
    let records = report.to_platform(&checkout_dir);
    info!(
        inspection_types = report.inspection_types.len(),
        inspections = records.len(),
        "parsed export"
    );

    let output = match args.format {
        FormatArg::Text => render_text(&report, &records),
        FormatArg::Json => {
            let mut json = serde_json::to_string_pretty(&records)
                .context("failed to serialize inspections")?;
            json.push('\n');
            json
        }
    };

    write_output(&args.output, output.as_bytes())?;
    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// One `path:line: SEVERITY id: message` row per finding, followed by the
/// rule name when the export defines the rule
fn render_text(report: &InspectionsExport, records: &[PlatformInspection]) -> String {
    let mut out = String::new();
    for record in records {
        let severity = record
            .attributes
            .get(SEVERITY_KEY)
            .and_then(|values| values.first())
            .map_or("", String::as_str);
        out.push_str(&format!(
            "{}:{}: {} {}: {}",
            record.file_path, record.line, severity, record.inspection_id, record.message
        ));
        if let Some(info) = report.type_info(&record.inspection_id) {
            out.push_str(&format!(" [{}]", info.name));
        }
        out.push('\n');
    }
    out
}

fn read_input(path: &Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            if buffer.trim().is_empty() {
                bail!("no input provided on stdin");
            }
            Ok(buffer)
        }
    }
}

fn write_output(path: &Option<PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(data).context("failed to write stdout")?;
            Ok(())
        }
    }
}

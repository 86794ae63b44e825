//! CLI for converting PDF sales quotes into JSON line-item records.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use console::style;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use quotex_core::{ExtractionMethod, QuoteParser, QuotePdf};

/// Extract sales-quote line items from a PDF into JSON
#[derive(Parser)]
#[command(name = "quotex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output JSON file (default: input file name with .json extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Extraction method
    #[arg(long, value_enum, default_value = "both")]
    method: Method,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum Method {
    /// Table detection only, no fallback
    Table,
    /// Regex text extraction only
    Text,
    /// Table detection with text fallback
    Both,
}

impl From<Method> for ExtractionMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Table => ExtractionMethod::Table,
            Method::Text => ExtractionMethod::Text,
            Method::Both => ExtractionMethod::Both,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    if !cli.input.exists() {
        anyhow::bail!("Input file not found: {}", cli.input.display());
    }

    info!("Processing file: {}", cli.input.display());

    let pdf = QuotePdf::open(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    debug!("PDF has {} pages", pdf.page_count());

    let text = pdf
        .extract_text()
        .with_context(|| format!("failed to extract text from {}", cli.input.display()))?;

    let parser = QuoteParser::new().with_method(cli.method.into());
    let items = parser.parse(&text);

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input));

    let mut json = serde_json::to_string(&items)?;
    json.push('\n');
    fs::write(&output_path, json)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    println!(
        "{} {} item(s) written to {}",
        style("✓").green(),
        items.len(),
        output_path.display()
    );

    Ok(())
}

/// Default output path: the input file name with a .json extension, in
/// the same directory.
fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path_sits_next_to_input() {
        assert_eq!(
            default_output_path(Path::new("/quotes/offer-118.pdf")),
            PathBuf::from("/quotes/offer-118.json")
        );
    }
}

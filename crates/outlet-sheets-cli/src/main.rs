//! Outlet Sheets CLI - extract outlet financials from spreadsheets

mod logger;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use outlet_sheets::prelude::*;
use outlet_sheets::write_records;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "outlets")]
#[command(
    author,
    version,
    about = "Extract per-outlet monthly financials from spreadsheet exports"
)]
struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract outlet records and write them as JSON or CSV
    Extract {
        /// Input spreadsheet file (xlsx, xlsm, xlsb, xls, ods, csv)
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Treat these sheets as one-outlet-per-sheet (comma separated)
        #[arg(short, long, value_delimiter = ',')]
        sheets: Vec<String>,

        /// TOML file overriding extraction options
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List all sheets in a workbook
    Sheets {
        /// Input spreadsheet file
        input: PathBuf,
    },

    /// Analyse interest costs of previously extracted JSON records
    Interest {
        /// JSON file written by `outlets extract`
        records: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Csv,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Csv => OutputFormat::Csv,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match cli.command {
        Commands::Extract {
            input,
            format,
            output,
            sheets,
            config,
        } => extract(&input, format, output.as_deref(), &sheets, config.as_deref()),
        Commands::Sheets { input } => list_sheets(&input),
        Commands::Interest { records } => interest(&records),
    }
}

fn extract(
    input: &Path,
    format: Format,
    output: Option<&Path>,
    sheets: &[String],
    config: Option<&Path>,
) -> Result<()> {
    let options = match config {
        Some(path) => load_options(path)?,
        None => ExtractOptions::default(),
    };

    let workbook =
        Workbook::open(input).with_context(|| format!("Failed to open '{}'", input.display()))?;

    let (records, failures) = if sheets.is_empty() {
        let extraction = workbook
            .extract(&options)
            .with_context(|| format!("Failed to extract records from '{}'", input.display()))?;
        eprintln!(
            "Extracted {} record(s) using the {} strategy ({} consolidated skipped)",
            extraction.records.len(),
            extraction.strategy,
            extraction.skipped_consolidated
        );
        (extraction.records, extraction.sheet_failures)
    } else {
        let extraction = workbook
            .extract_sheets(sheets, &options)
            .with_context(|| format!("Failed to extract outlet sheets from '{}'", input.display()))?;
        eprintln!(
            "Extracted {} of {} outlet sheet(s)",
            extraction.processed(),
            sheets.len()
        );
        (extraction.records, extraction.failures)
    };

    for failure in &failures {
        eprintln!("Warning: skipped {failure}");
    }

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create '{}'", path.display()))?;
            write_records(&records, BufWriter::new(file), format.into())
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            eprintln!("Wrote {} record(s) to '{}'", records.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            write_records(&records, stdout.lock(), format.into())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

fn load_options(path: &Path) -> Result<ExtractOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config '{}'", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Invalid config '{}'", path.display()))
}

fn list_sheets(input: &Path) -> Result<()> {
    let workbook =
        Workbook::open(input).with_context(|| format!("Failed to open '{}'", input.display()))?;

    for (i, sheet) in workbook.worksheets().enumerate() {
        let (rows, cols) = sheet.grid().dimensions();
        println!("{}\t{}\t{} x {}", i, sheet.name(), rows, cols);
    }

    Ok(())
}

fn interest(path: &Path) -> Result<()> {
    let file = File::open(path).with_context(|| format!("Failed to open '{}'", path.display()))?;
    let records: Vec<OutletRecord> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("'{}' is not a JSON array of records", path.display()))?;

    let report = InterestReport::from_records(&records);

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report).context("Failed to write to stdout")?;
    writeln!(stdout).context("Failed to write to stdout")?;
    eprintln!(
        "Interest analysis completed for {} outlet record(s)",
        records.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_sheets_are_comma_separated() {
        let cli = Cli::parse_from(["outlets", "-v", "extract", "in.xlsx", "--sheets", "MG,Club", "-f", "csv"]);
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Extract { sheets, format, .. } => {
                assert_eq!(sheets, vec!["MG", "Club"]);
                assert!(matches!(format, Format::Csv));
            }
            _ => panic!("expected extract"),
        }
    }
}

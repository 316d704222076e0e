#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for decoding registrar reports.
//!
//! Reads tables that were already extracted from report PDFs (one CSV
//! record per table row, no header line, ragged widths allowed) and prints
//! the decoded entries as JSON lines. Also exposes the term code helpers.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use madgrades_report::{Entry, ReportKind, parse_rows};

#[derive(Parser)]
#[command(name = "madgrades", about = "Registrar report decoding tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode an extracted report table into JSON entries
    Parse {
        /// Report family the rows come from ("dir" or "grades")
        kind: ReportKind,
        /// CSV file holding the extracted rows
        input: PathBuf,
    },
    /// Work with academic term codes
    Term {
        #[command(subcommand)]
        command: TermCommands,
    },
}

#[derive(Subcommand)]
enum TermCommands {
    /// Encode a label such as "Fall 2017" into a term code
    Encode {
        /// Season and year, e.g. "Spring 2018"
        label: String,
    },
    /// Decode a term code into its season and year
    Decode {
        /// Four digit term code, e.g. 1182
        code: u32,
    },
    /// Derive the term code from a report file name
    Filename {
        /// File name, e.g. "report-gradedistribution-2017-2018fall.pdf"
        name: String,
        /// Treat the name as a directory report file name
        #[arg(long)]
        dir: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { kind, input } => {
            log::info!("Decoding {kind} report rows from {}", input.display());
            let rows = read_rows(File::open(&input)?)?;
            let entries = parse_rows(kind, &rows)?;

            let stdout = std::io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            write_entries(&mut out, &entries)?;
            out.flush()?;

            for (entry_kind, count) in count_by_kind(&entries) {
                log::info!("{count:>6} {entry_kind}");
            }
            log::info!("Decoded {} entries from {} rows", entries.len(), rows.len());
        }
        Commands::Term { command } => match command {
            TermCommands::Encode { label } => {
                println!("{}", madgrades_term::encode(&label)?);
            }
            TermCommands::Decode { code } => {
                println!("{}", madgrades_term::decode(code)?);
            }
            TermCommands::Filename { name, dir } => {
                let code = if dir {
                    madgrades_term::decode_dir_filename(&name)?
                } else {
                    madgrades_term::decode_grade_filename(&name)?
                };
                println!("{code}");
            }
        },
    }

    Ok(())
}

/// Reads every CSV record as one row of text cells.
fn read_rows(reader: impl Read) -> Result<Vec<Vec<String>>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    reader
        .records()
        .map(|record| record.map(|record| record.iter().map(ToString::to_string).collect()))
        .collect()
}

/// Writes one JSON object per entry, one per line.
fn write_entries(
    out: &mut impl Write,
    entries: &[Entry],
) -> Result<(), Box<dyn std::error::Error>> {
    for entry in entries {
        serde_json::to_writer(&mut *out, entry)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Counts entries per entry kind, for the run summary.
fn count_by_kind(entries: &[Entry]) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for entry in entries {
        *counts.entry(entry.kind()).or_insert(0) += 1;
    }
    counts
}

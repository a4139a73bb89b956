//! Texmend CLI - repair math notation in exam question datasets
//!
//! # Main Commands
//!
//! ```bash
//! texmend clean questions.json -o cleaned.json   # Nine-stage repair pipeline
//! texmend fixup cleaned.json -o fixed.json       # Second-pass targeted repairs
//! texmend run questions.json -o fixed.json       # Both passes in sequence
//! ```
//!
//! # Debug Commands
//!
//! ```bash
//! texmend check questions.json                   # Audit delimiter balance
//! texmend stages                                 # Show the stage list
//! ```

use clap::{Parser, Subcommand};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use texmend::{
    clean_records, fixup_records, load_dataset, stages_description, to_pretty_json,
    unpaired_lines, CleanReport, TEXT_FIELDS,
};

#[derive(Parser)]
#[command(name = "texmend")]
#[command(about = "Repair math notation and currency formatting in exam question datasets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the nine-stage repair pipeline over a dataset
    Clean {
        /// Input JSON file (array of question records)
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the run report as JSON
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Run the second-pass targeted repairs over a dataset
    Fixup {
        /// Input JSON file (array of question records)
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the run report as JSON
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Run both passes in sequence: clean, then fixup
    Run {
        /// Input JSON file (array of question records)
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Audit math-delimiter balance without rewriting anything
    Check {
        /// Input JSON file (array of question records)
        input: PathBuf,
    },

    /// Show the pipeline stages in execution order
    Stages,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Clean { input, output, report } => {
            cmd_clean(&input, output.as_deref(), report.as_deref())
        }
        Commands::Fixup { input, output, report } => {
            cmd_fixup(&input, output.as_deref(), report.as_deref())
        }
        Commands::Run { input, output } => cmd_run(&input, output.as_deref()),
        Commands::Check { input } => cmd_check(&input),
        Commands::Stages => cmd_stages(),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_clean(
    input: &Path,
    output: Option<&Path>,
    report_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Reading: {}", input.display());

    let mut records = load_dataset(input)?;
    eprintln!("   {} records", records.len());

    let report = clean_records(&mut records);
    print_report(&report);

    write_records(&records, output)?;
    write_report(&report, report_path)?;

    eprintln!("✨ Done!");
    Ok(())
}

fn cmd_fixup(
    input: &Path,
    output: Option<&Path>,
    report_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Reading: {}", input.display());

    let mut records = load_dataset(input)?;
    eprintln!("   {} records", records.len());

    let report = fixup_records(&mut records);
    print_report(&report);

    write_records(&records, output)?;
    write_report(&report, report_path)?;

    eprintln!("✨ Done!");
    Ok(())
}

fn cmd_run(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Reading: {}", input.display());

    let mut records = load_dataset(input)?;
    eprintln!("   {} records", records.len());

    eprintln!("\n⚙️  Pass 1: clean");
    let clean_report = clean_records(&mut records);
    print_report(&clean_report);

    eprintln!("\n⚙️  Pass 2: fixup");
    let fixup_report = fixup_records(&mut records);
    print_report(&fixup_report);

    write_records(&records, output)?;

    eprintln!("✨ Done!");
    Ok(())
}

fn cmd_check(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("✔️  Checking: {}", input.display());

    let records = load_dataset(input)?;
    eprintln!("   {} records", records.len());

    let mut unbalanced = 0;
    for (i, record) in records.iter().enumerate() {
        let Some(map) = record.as_object() else { continue };
        for field in TEXT_FIELDS {
            if let Some(Value::String(text)) = map.get(*field) {
                let lines = unpaired_lines(text);
                if lines > 0 {
                    unbalanced += 1;
                    if unbalanced <= 10 {
                        eprintln!(
                            "   ❌ Record {}, field '{}': {} line(s) with odd delimiter count",
                            i, field, lines
                        );
                    }
                }
            }
        }
    }

    if unbalanced > 0 {
        eprintln!("\n📊 {} field(s) with unbalanced delimiters", unbalanced);
        std::process::exit(1);
    }

    eprintln!("\n✅ All delimiters balanced");
    Ok(())
}

fn cmd_stages() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", stages_description());
    Ok(())
}

fn print_report(report: &CleanReport) {
    eprintln!("   {}", report.summary());
    for warning in report.warnings.iter().take(5) {
        eprintln!(
            "   ⚠️  Record {}, field '{}': {} unbalanced line(s)",
            warning.record, warning.field, warning.lines
        );
    }
    if report.warnings.len() > 5 {
        eprintln!("   ... +{} more", report.warnings.len() - 5);
    }
}

fn write_records(records: &[Value], path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let json = to_pretty_json(records)?;
    match path {
        Some(p) => {
            fs::write(p, json)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", json);
        }
    }
    Ok(())
}

fn write_report(
    report: &CleanReport,
    path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(p) = path {
        fs::write(p, serde_json::to_string_pretty(report)?)?;
        eprintln!("💾 Report written to: {}", p.display());
    }
    Ok(())
}

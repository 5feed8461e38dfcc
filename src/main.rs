use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use log::debug;
use optional_value::lookup::{field_of, find_record};
use optional_value::Optional;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

mod build_info {
    include!(concat!(env!("OUT_DIR"), "/build_info.rs"));
}

#[derive(Parser)]
#[command(name = "optional-lookup")]
#[command(about = "Look up a field of a JSON record, falling back to a default", long_about = None)]
#[command(version = build_info::VERSION, long_version = build_info::LONG_VERSION)]
struct Cli {
    /// JSON file holding the records (object keyed by id, or array with "id" fields)
    records: PathBuf,

    /// Record key
    key: String,

    /// Field to extract from the record
    field: String,

    /// Text printed when the record or field is missing
    #[arg(long, env = "OPTIONAL_LOOKUP_DEFAULT", default_value = "default")]
    default: String,

    /// Print a summary of the lookup on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    debug!(
        "{} {} ({}, built {})",
        build_info::PKG_NAME,
        build_info::VERSION,
        build_info::GIT_HASH,
        build_info::BUILD_TIME
    );
    debug!("Reading records from {}", cli.records.display());

    let source = fs::read_to_string(&cli.records)
        .with_context(|| format!("Error reading file {}", cli.records.display()))?;
    let records: Value = serde_json::from_str(&source)
        .with_context(|| format!("Error parsing JSON in {}", cli.records.display()))?;

    let record = Optional::from_nullable(find_record(&records, &cli.key));
    let record_found = record.is_present();
    debug!("Record {:?} present: {}", cli.key, record_found);

    let field = record.flat_map(|record| field_of(record, &cli.field));
    debug!("Field {:?}: {}", cli.field, field);

    if cli.verbose {
        let status = if field.is_present() {
            "found".green().bold()
        } else if record_found {
            "missing field".yellow().bold()
        } else {
            "missing record".yellow().bold()
        };
        eprintln!("{} {}.{} -> {}", "lookup".cyan(), cli.key, cli.field, status);
    }

    let default = cli.default;
    println!("{}", field.get_or_else(|| default));
    Ok(())
}

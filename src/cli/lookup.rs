use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use serde::Serialize;

use crate::cli::{OutputFormat, DEFAULT_OUTPUT};
use crate::core::lookup::{normalize_address, OuiLookup};
use crate::core::registry::Registry;
use crate::parsing;
use crate::parsing::diagnostics::TracingReporter;

#[derive(Args)]
pub struct LookupArgs {
    /// MAC addresses or OUIs (e.g. 00CDFE, 48:50:73, F0-D2-F1-00-11-22)
    #[arg(required = true)]
    pub addresses: Vec<String>,

    /// Registry data: a generated properties file, or the IEEE .csv
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub data: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct LookupResult<'a> {
    address: &'a str,
    oui: Option<String>,
    organization: Option<&'a str>,
}

/// Execute lookup subcommand
///
/// # Errors
///
/// Returns an error if the registry data cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: LookupArgs, verbose: u8) -> anyhow::Result<()> {
    let registry = load_registry(&args.data, verbose)
        .with_context(|| format!("Failed to load registry from {}", args.data.display()))?;
    let lookup = OuiLookup::new(&registry.into_snapshot());

    let results: Vec<LookupResult> = args
        .addresses
        .iter()
        .map(|address| LookupResult {
            address,
            oui: normalize_address(address),
            organization: lookup.name_for(address),
        })
        .collect();

    match args.format {
        OutputFormat::Text => print_text(&results),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Tsv => print_tsv(&results),
    }

    Ok(())
}

fn load_registry(path: &Path, verbose: u8) -> anyhow::Result<Registry> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match ext.as_deref() {
        Some("csv") => {
            let mut reporter = TracingReporter::new(verbose);
            Ok(parsing::csv::parse_csv_file(path, &mut reporter)?.registry)
        }
        _ => Ok(parsing::properties::parse_properties_file(path)?),
    }
}

fn print_text(results: &[LookupResult]) {
    for result in results {
        match (&result.oui, result.organization) {
            (Some(oui), Some(name)) => println!("{}\t{oui}\t{name}", result.address),
            (Some(oui), None) => println!("{}\t{oui}\t(not found)", result.address),
            (None, _) => println!("{}\t-\t(invalid address)", result.address),
        }
    }
}

fn print_tsv(results: &[LookupResult]) {
    println!("address\toui\torganization");
    for result in results {
        println!(
            "{}\t{}\t{}",
            result.address,
            result.oui.as_deref().unwrap_or(""),
            result.organization.unwrap_or("")
        );
    }
}

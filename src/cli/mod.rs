//! Command-line interface for oui-props.
//!
//! Available commands:
//!
//! - **generate**: Convert the IEEE `oui.csv` into a properties resource
//! - **lookup**: Find the organization owning a MAC address
//!
//! ## Usage
//!
//! ```text
//! # Regenerate the bundled resource from the default locations
//! oui-props generate
//!
//! # Explicit paths, echoing every parsed line to stderr
//! oui-props -vv generate -i oui.csv -o build/oui.properties
//!
//! # Write to stdout
//! oui-props generate -i oui.csv -o -
//!
//! # Look up addresses
//! oui-props lookup --data build/oui.properties 00:CD:FE 3c5ab4 --format json
//! ```

use clap::{Parser, Subcommand};

pub mod generate;
pub mod lookup;

/// Default location of the downloaded IEEE registry
pub const DEFAULT_INPUT: &str = "data/oui.csv";

/// Default location of the generated resource
pub const DEFAULT_OUTPUT: &str = "resources/oui.properties";

#[derive(Parser)]
#[command(name = "oui-props")]
#[command(version)]
#[command(about = "Convert the IEEE OUI registry into a properties resource")]
#[command(
    long_about = "oui-props reads the IEEE MA-L registry (oui.csv) and writes a sorted, deduplicated properties file mapping each OUI to its organization name.\n\nNon-ASCII names are written as \\uXXXX escapes and the header carries an entry count and a SHA-1 digest of the data, so regenerated files only change when the registry does."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v: show paths, -vv: show every parsed line)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the properties file from the registry CSV
    Generate(generate::GenerateArgs),

    /// Look up organizations by MAC address
    Lookup(lookup::LookupArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

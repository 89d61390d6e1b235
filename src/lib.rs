//! # oui-props
//!
//! Converts the IEEE MA-L registry (`oui.csv`) into a deterministic,
//! ASCII-only properties resource mapping each OUI to its organization name.
//!
//! The CSV published by the IEEE quotes organization names inconsistently.
//! Parsing is deliberately lenient: malformed quoting never fails a run, and
//! lines that do not look like records are reported and skipped.
//!
//! ## Features
//!
//! - **Lenient field parsing**: doubled-quote escapes, odd-count quote detection
//! - **Deduplication**: later assignments of an OUI replace earlier ones
//! - **Stable output**: entries sorted by OUI, with a SHA-1 digest of the data
//! - **ASCII encoding**: `\uXXXX` escapes, surrogate pairs above U+FFFF
//! - **Lookup**: find the organization for a MAC address in generated data
//!
//! ## Example
//!
//! ```rust
//! use oui_props::parsing::csv::parse_csv_text;
//! use oui_props::parsing::diagnostics::RecordingReporter;
//! use oui_props::output::writer::write_properties;
//!
//! let csv = "Registry,Assignment,Organization Name\n\
//!            MA-L,AABBCC,\"Example, Inc.\",Somewhere\n\
//!            MA-L,001122,Plain Co,Elsewhere\n";
//!
//! let mut reporter = RecordingReporter::default();
//! let snapshot = parse_csv_text(csv, &mut reporter).registry.into_snapshot();
//!
//! let mut out = Vec::new();
//! write_properties(&snapshot, &mut out, chrono::Utc::now()).unwrap();
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.ends_with("001122 = Plain Co\nAABBCC = Example, Inc.\n"));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Identifiers, the registry, run configuration and lookup
//! - [`parsing`]: CSV and properties parsers, per-line reporting
//! - [`output`]: Property-value escaping and the properties writer
//! - [`pipeline`]: A complete generation run
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod output;
pub mod parsing;
pub mod pipeline;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::config::{GenerateConfig, OutputTarget};
pub use crate::core::lookup::OuiLookup;
pub use crate::core::registry::{Registry, Snapshot};
pub use crate::core::types::*;
pub use crate::output::escape::to_property_value;
pub use crate::pipeline::{generate, GenerateSummary, PipelineError};

//! Parsers for the OUI registry formats.
//!
//! - **IEEE CSV** ([`csv`]): `MA-L,<OUI>,<organization>,...` rows, with a
//!   header on line 1 and loosely quoted organization names
//! - **Generated properties** ([`properties`]): the output of this crate,
//!   read back for lookups
//!
//! ## Example
//!
//! ```rust
//! use oui_props::parsing::csv::parse_csv_text;
//! use oui_props::parsing::diagnostics::RecordingReporter;
//!
//! let csv = "Registry,Assignment,Organization Name\nMA-L,00CDFE,\"Apple, Inc.\",Cupertino\n";
//! let mut reporter = RecordingReporter::default();
//! let outcome = parse_csv_text(csv, &mut reporter);
//! assert_eq!(outcome.registry.get("00CDFE"), Some("Apple, Inc."));
//! ```

pub mod csv;
pub mod diagnostics;
pub mod properties;

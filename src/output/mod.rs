//! Serialization of a registry snapshot as a properties resource.
//!
//! The output is pure ASCII:
//!
//! ```text
//! # Generated on: 2016-05-01 12:34:56 UTC
//! # Entry count:  2
//! # Data digest:  <sha-1 hex>
//!
//! 000B38 = Kn\u00FCrr GmbH
//! 001122 = Plain Co
//! ```
//!
//! - [`escape`]: `\uXXXX` encoding of non-ASCII text
//! - [`writer`]: header, digest and destination handling

pub mod escape;
pub mod writer;

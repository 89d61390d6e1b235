//! Core data types for the OUI registry.
//!
//! - [`Identifier`](types::Identifier), [`RegistryEntry`](types::RegistryEntry): one OUI record
//! - [`Registry`](registry::Registry): deduplicating map, last write wins
//! - [`Snapshot`](registry::Snapshot): the sorted, frozen view used for output
//! - [`GenerateConfig`](config::GenerateConfig): explicit settings for a run
//! - [`OuiLookup`](lookup::OuiLookup): name lookup by MAC address

pub mod config;
pub mod lookup;
pub mod registry;
pub mod types;

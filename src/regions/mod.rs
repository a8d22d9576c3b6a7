//! Region data for building the country catalog
//!
//! Provides the embedded ISO 3166-1 table compiled into the binary, plus a
//! loader for custom tables in the same format.

mod embedded;
pub mod loader;

pub use embedded::{REGIONS, REGIONS_COUNT};

use crate::core::Catalog;

/// Catalog built from the embedded region table
#[must_use]
pub fn embedded_catalog() -> Catalog {
    Catalog::build(REGIONS.iter().copied())
}

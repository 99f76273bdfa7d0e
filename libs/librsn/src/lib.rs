/// Librsn's own [Error](error::Error) implementation
pub mod error;
/// [RsnInformation](element::RsnInformation), its suites and capabilities.
pub mod element;
/// [nom] parsers for the RSN element and generic tagged elements.
pub mod parsers;

// Re-exports for user convenience
pub use crate::element::{AkmSuite, CypherSuite, ElementOption, RsnCapabilities, RsnInformation};
pub use crate::error::Error;

/// Parse the data of an RSN information element from raw bytes.
/// The element id and length have to be stripped already,
/// use [ElementOption::parse] and [RsnInformation::from_option] for tagged input.
pub fn parse_rsn(input: &[u8]) -> Result<RsnInformation, Error> {
    RsnInformation::parse(input)
}

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

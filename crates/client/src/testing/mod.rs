//! Testing utilities for SharePoint client tests.
//!
//! This module provides generators for realistic SharePoint payloads so
//! tests can exercise the model layer without a live tenant.
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use sharepoint_client::testing::generators::RefinerPayloadGenerator;
//!
//! let payload = RefinerPayloadGenerator::new()
//!     .with_refiner_count(3)
//!     .with_entries_per_refiner(5)
//!     .verbose(true)
//!     .generate();
//! ```

#[cfg(any(feature = "test-utils", test))]
pub mod generators;

/// Wraps a GUID in the braces SharePoint uses in verbose payloads.
pub fn braced_guid(id: uuid::Uuid) -> String {
    format!("{{{id}}}")
}

/// Renders a UTC millisecond timestamp in the legacy WCF `/Date(ms)/` form.
pub fn msjson_date(millis: i64) -> String {
    format!("/Date({millis})/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_braced_guid_format() {
        let id = uuid::Uuid::nil();
        assert_eq!(
            braced_guid(id),
            "{00000000-0000-0000-0000-000000000000}"
        );
    }

    #[test]
    fn test_msjson_date_format() {
        assert_eq!(msjson_date(1_472_132_400_000), "/Date(1472132400000)/");
    }
}

//! Search schema and refinement model tests.
//!
//! # Invariants
//! - Refinement counts are full 64-bit whether the wire sends strings or numbers
//! - Generator output parses identically in verbose and plain flavors
//! - Alias/mapping lists keep order and tolerate duplicates

use sharepoint_client::odata;
use sharepoint_client::testing::generators::RefinerPayloadGenerator;
use sharepoint_client::{ManagedProperty, Refiner, RefinementResult};

#[test]
fn test_refinement_count_beyond_u32_range() {
    // A count above u32::MAX must survive both wire spellings.
    let as_number: RefinementResult =
        serde_json::from_str(r#"{"RefinementCount": 5000000000}"#).unwrap();
    let as_string: RefinementResult =
        serde_json::from_str(r#"{"RefinementCount": "5000000000"}"#).unwrap();
    assert_eq!(as_number.count, 5_000_000_000);
    assert_eq!(as_number.count, as_string.count);
}

#[test]
fn test_generated_refiners_parse_in_both_flavors() {
    for verbose in [false, true] {
        let payload = RefinerPayloadGenerator::new()
            .with_refiner_count(4)
            .with_entries_per_refiner(6)
            .verbose(verbose)
            .generate();
        let refiners: Vec<Refiner> = odata::collection_from_response(&payload.to_string()).unwrap();
        assert_eq!(refiners.len(), 4);
        for refiner in &refiners {
            assert_eq!(refiner.entries.len(), 6);
            for entry in &refiner.entries {
                assert!(entry.count >= 0);
                assert!(!entry.value.is_empty());
            }
        }
    }
}

#[test]
fn test_managed_property_collection_from_schema_listing() {
    let body = r#"{"value": [
        {"Name": "Author", "Aliases": ["Writer", "Writer"], "Mappings": ["ows_Author"], "Type": "Text", "Pid": 4},
        {"Name": "Size", "Aliases": [], "Mappings": [], "Type": "Integer", "Pid": "11"}
    ]}"#;
    let properties: Vec<ManagedProperty> = odata::collection_from_response(body).unwrap();
    assert_eq!(properties[0].aliases, vec!["Writer", "Writer"]);
    assert_eq!(properties[1].pid, 11);
    assert_eq!(properties[1].managed_type, "Integer");
}

#[test]
fn test_refinement_rows_with_equal_fields_are_equal() {
    let json = r#"{"RefinementCount": 7, "RefinementName": "pdf", "RefinementToken": "t", "RefinementValue": "pdf"}"#;
    let a: RefinementResult = serde_json::from_str(json).unwrap();
    let b: RefinementResult = serde_json::from_str(json).unwrap();
    assert_eq!(a, b);
}

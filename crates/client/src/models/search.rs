//! Search schema and refinement models.
//!
//! This module contains the managed-property projection from the search
//! schema and the refiner facets returned alongside query results.
//!
//! # What this module handles:
//! - Managed property metadata (aliases, crawled-property mappings)
//! - Refiner groups and their per-value rows
//!
//! # What this module does NOT handle:
//! - Issuing search queries or schema updates
//! - Interpreting refinement tokens (they are passed back verbatim)

use serde::{Deserialize, Serialize};

/// Search schema metadata for one managed property.
///
/// Alias and mapping lists keep the order the schema reports and may contain
/// duplicates; the schema itself is the authority on uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ManagedProperty {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(
        rename = "Aliases",
        default,
        deserialize_with = "crate::serde_helpers::vec_from_array_or_results"
    )]
    pub aliases: Vec<String>,
    /// Crawled properties mapped into this managed property.
    #[serde(
        rename = "Mappings",
        default,
        deserialize_with = "crate::serde_helpers::vec_from_array_or_results"
    )]
    pub mappings: Vec<String>,
    #[serde(rename = "Type", default)]
    pub managed_type: String,
    #[serde(
        rename = "Pid",
        default,
        deserialize_with = "crate::serde_helpers::i64_from_string_or_number"
    )]
    pub pid: i64,
}

/// One facet value and its matching-document count from a search refiner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RefinementResult {
    /// Matching-document count. 64-bit on the wire; the service may render
    /// it as a string.
    #[serde(
        rename = "RefinementCount",
        default,
        deserialize_with = "crate::serde_helpers::i64_from_string_or_number"
    )]
    pub count: i64,
    #[serde(rename = "RefinementName", default)]
    pub name: String,
    /// Opaque token to feed back into a refined query.
    #[serde(rename = "RefinementToken", default)]
    pub token: String,
    #[serde(rename = "RefinementValue", default)]
    pub value: String,
}

/// A refiner and the facet rows the query produced for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Refiner {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(
        rename = "Entries",
        default,
        deserialize_with = "crate::serde_helpers::vec_from_array_or_results"
    )]
    pub entries: Vec<RefinementResult>,
}

//! Power Automate flow models.
//!
//! Flows bound to a list or item are read-only projections of a remote
//! resource; the definition blob is kept opaque rather than parsed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A Power Automate flow bound to a list or item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FlowInstance {
    #[serde(default, deserialize_with = "crate::serde_helpers::guid_from_string")]
    pub id: Uuid,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
    /// Raw flow definition (JSON), uninterpreted.
    #[serde(default)]
    pub definition: String,
}

/// Collection envelope for flow listings.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct FlowInstanceCollection {
    #[serde(default)]
    pub value: Vec<FlowInstance>,
}

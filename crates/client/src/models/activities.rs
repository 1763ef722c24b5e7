//! Activity and analytics completeness models.
//!
//! When an analytics query cannot cover the requested interval, the service
//! annotates the response with an incomplete-data marker instead of failing.
//! Nothing here validates flag combinations; the service may legitimately
//! report a cutoff timestamp alongside `results_pending`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marker describing why an activity/analytics response is incomplete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ActivityIncompleteData {
    /// Data before this instant was not available to the query.
    #[serde(
        rename = "missingDataBeforeDateTime",
        default,
        deserialize_with = "crate::serde_helpers::opt_datetime_from_iso_or_msjson"
    )]
    pub missing_data_before: Option<DateTime<Utc>>,
    /// The query was throttled and returned a partial window.
    #[serde(
        rename = "wasThrottled",
        default,
        deserialize_with = "crate::serde_helpers::bool_from_bool_or_string"
    )]
    pub was_throttled: bool,
    /// Results are still being computed server-side.
    #[serde(
        rename = "resultsPending",
        default,
        deserialize_with = "crate::serde_helpers::bool_from_bool_or_string"
    )]
    pub results_pending: bool,
    /// The target item does not support activity queries at all.
    #[serde(
        rename = "notSupported",
        default,
        deserialize_with = "crate::serde_helpers::bool_from_bool_or_string"
    )]
    pub not_supported: bool,
}

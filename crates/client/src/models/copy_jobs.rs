//! Copy and migration job models.
//!
//! Submitting a cross-site copy yields a [`CopyMigrationInfo`] handle; the
//! caller then polls job status, refreshing a [`CopyJobProgress`] until the
//! queue reports the job drained.
//!
//! # What this module handles:
//! - Job submission metadata and polling status
//! - Submission options for the copy endpoint
//!
//! # What this module does NOT handle:
//! - Issuing the submit/poll requests themselves
//! - Decrypting queue messages with the encryption key

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use url::Url;
use uuid::Uuid;

/// State of an asynchronous copy/migration job, as coded by the job queue.
///
/// The service reports `0` (`None`) both for unknown jobs and for jobs that
/// have fully drained, `4` while the job waits in the queue, and `8` while
/// items are being processed. Undocumented codes map to [`Unknown`], which
/// re-serializes as the `-1` sentinel.
///
/// [`Unknown`]: CopyJobState::Unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyJobState {
    /// Job is complete, or the queue has no record of it.
    #[default]
    None,
    /// Job accepted and waiting to be picked up.
    Queued,
    /// Job items are being processed.
    Processing,
    /// Code not documented by the service.
    Unknown,
}

impl CopyJobState {
    /// Wire code for this state.
    pub fn code(self) -> i64 {
        match self {
            Self::None => 0,
            Self::Queued => 4,
            Self::Processing => 8,
            Self::Unknown => -1,
        }
    }

    /// Maps a wire code to a state, preserving undocumented codes as
    /// [`CopyJobState::Unknown`].
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::None,
            4 => Self::Queued,
            8 => Self::Processing,
            _ => Self::Unknown,
        }
    }

    /// True once the queue no longer holds the job.
    pub fn is_done(self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for CopyJobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Queued => write!(f, "Queued"),
            Self::Processing => write!(f, "Processing"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

impl Serialize for CopyJobState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for CopyJobState {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        crate::serde_helpers::i64_from_string_or_number(deserializer).map(Self::from_code)
    }
}

/// Snapshot of a copy job returned by a progress poll.
///
/// Mutable by design: callers overwrite it on every poll. Log lines keep the
/// order the queue emitted them in and may repeat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CopyJobProgress {
    #[serde(rename = "JobState", default)]
    pub job_state: CopyJobState,
    #[serde(
        rename = "Logs",
        default,
        deserialize_with = "crate::serde_helpers::vec_from_array_or_results"
    )]
    pub logs: Vec<String>,
}

/// Handle identifying a submitted copy job.
///
/// Produced once at submission; treated as read-only afterwards by
/// convention. The encryption key decrypts messages on the job queue and is
/// raw key bytes in memory, base64 on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct CopyMigrationInfo {
    #[serde(
        rename = "EncryptionKey",
        default,
        deserialize_with = "crate::serde_helpers::bytes_from_base64"
    )]
    pub encryption_key: Vec<u8>,
    #[serde(
        rename = "JobId",
        default,
        deserialize_with = "crate::serde_helpers::guid_from_string"
    )]
    pub job_id: Uuid,
    #[serde(
        rename = "JobQueueUri",
        default,
        deserialize_with = "crate::serde_helpers::opt_url_from_string"
    )]
    pub job_queue_uri: Option<Url>,
    #[serde(
        rename = "SourceListItemUniqueIds",
        default,
        deserialize_with = "crate::serde_helpers::guids_from_array_or_results"
    )]
    pub source_list_item_unique_ids: Vec<Uuid>,
}

/// How the copy endpoint resolves a name collision at the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameConflictBehavior {
    /// Fail the item.
    #[default]
    Fail,
    /// Overwrite the destination item.
    Replace,
    /// Keep both by renaming the incoming item.
    KeepBoth,
}

impl NameConflictBehavior {
    fn code(self) -> i64 {
        match self {
            Self::Fail => 0,
            Self::Replace => 1,
            Self::KeepBoth => 2,
        }
    }
}

impl Serialize for NameConflictBehavior {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

/// Options sent when submitting a copy job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct CopyMigrationOptions {
    #[serde(rename = "AllowSchemaMismatch")]
    pub allow_schema_mismatch: bool,
    #[serde(rename = "IsMoveMode")]
    pub is_move_mode: bool,
    #[serde(rename = "IgnoreVersionHistory")]
    pub ignore_version_history: bool,
    #[serde(rename = "BypassSharedLock")]
    pub bypass_shared_lock: bool,
    #[serde(rename = "NameConflictBehavior")]
    pub name_conflict_behavior: NameConflictBehavior,
}

//! Data models for SharePoint REST and Microsoft Graph responses.
//!
//! This module provides types for deserializing the payloads the client
//! receives from SharePoint. Types are organized by resource in submodules
//! and re-exported here for convenient access.

pub mod activities;
pub mod copy_jobs;
pub mod flows;
pub mod previews;
pub mod search;
pub mod thumbnails;

pub use activities::ActivityIncompleteData;
pub use copy_jobs::{
    CopyJobProgress, CopyJobState, CopyMigrationInfo, CopyMigrationOptions, NameConflictBehavior,
};
pub use flows::{FlowInstance, FlowInstanceCollection};
pub use previews::{FilePreviewInfo, FilePreviewOptions};
pub use search::{ManagedProperty, Refiner, RefinementResult};
pub use thumbnails::{Thumbnail, ThumbnailImage, ThumbnailSet};

//! SharePoint REST object model.
//!
//! This crate provides the typed result objects a SharePoint client works
//! with: copy/migration job metadata, file previews, Power Automate flow
//! descriptors, search schema and refinement results, thumbnails, and the
//! legacy CSOM field capability. It maps the service's JSON flavors
//! (OData verbose, minimal metadata, Graph) onto one set of models; the
//! HTTP transport and authentication live with the calling layer.

pub mod csom;
pub mod error;
pub mod models;
pub mod odata;
mod serde_helpers;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use csom::{CsomField, escape_xml_text};
pub use error::{ClientError, Result};
pub use models::{
    ActivityIncompleteData, CopyJobProgress, CopyJobState, CopyMigrationInfo, CopyMigrationOptions,
    FilePreviewInfo, FilePreviewOptions, FlowInstance, FlowInstanceCollection, ManagedProperty,
    NameConflictBehavior, Refiner, RefinementResult, Thumbnail, ThumbnailImage, ThumbnailSet,
};

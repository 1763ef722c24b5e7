//! Thumbnail models.

use serde::{Deserialize, Serialize};
use url::Url;

/// One rendition of a file thumbnail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Thumbnail {
    /// Identifier of the thumbnail set this rendition belongs to.
    #[serde(rename = "setId", default)]
    pub set_id: Option<String>,
    /// Rendition label ("small", "medium", "large", "source", or a custom
    /// `cWIDTHxHEIGHT` size).
    #[serde(default)]
    pub size: String,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_url_from_string"
    )]
    pub url: Option<Url>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_u32_from_string_or_number"
    )]
    pub width: Option<u32>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_u32_from_string_or_number"
    )]
    pub height: Option<u32>,
}

/// A single image inside a thumbnail set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ThumbnailImage {
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_url_from_string"
    )]
    pub url: Option<Url>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_u32_from_string_or_number"
    )]
    pub width: Option<u32>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_u32_from_string_or_number"
    )]
    pub height: Option<u32>,
}

/// The nested set payload the service returns for one item.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct ThumbnailSet {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub small: Option<ThumbnailImage>,
    #[serde(default)]
    pub medium: Option<ThumbnailImage>,
    #[serde(default)]
    pub large: Option<ThumbnailImage>,
    #[serde(default)]
    pub source: Option<ThumbnailImage>,
}

impl ThumbnailSet {
    /// Flattens the set into ordered [`Thumbnail`] descriptors, smallest
    /// rendition first, carrying the set id and size label.
    pub fn renditions(&self) -> Vec<Thumbnail> {
        let set_id = (!self.id.is_empty()).then(|| self.id.clone());
        [
            ("small", &self.small),
            ("medium", &self.medium),
            ("large", &self.large),
            ("source", &self.source),
        ]
        .into_iter()
        .filter_map(|(size, image)| {
            image.as_ref().map(|image| Thumbnail {
                set_id: set_id.clone(),
                size: size.to_string(),
                url: image.url.clone(),
                width: image.width,
                height: image.height,
            })
        })
        .collect()
    }
}

//! File preview models.

use serde::{Deserialize, Serialize};
use url::Url;

/// Short-lived URLs for embedding a file preview.
///
/// The service decides whether the preview loads via GET or POST; exactly
/// the returned parts are populated. URLs expire server-side and no expiry
/// is tracked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FilePreviewInfo {
    #[serde(
        rename = "getUrl",
        default,
        deserialize_with = "crate::serde_helpers::opt_url_from_string"
    )]
    pub get_url: Option<Url>,
    #[serde(
        rename = "postUrl",
        default,
        deserialize_with = "crate::serde_helpers::opt_url_from_string"
    )]
    pub post_url: Option<Url>,
    /// Form body to send when `post_url` is used, already encoded.
    #[serde(rename = "postParameters", default)]
    pub post_parameters: Option<String>,
}

/// Options for requesting a preview.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct FilePreviewOptions {
    /// Page or position to start the preview at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_get_preview() {
        let json = r#"{
            "getUrl": "https://tenant.sharepoint.com/_layouts/15/embed.aspx?id=abc",
            "postUrl": null,
            "postParameters": null
        }"#;
        let preview: FilePreviewInfo = serde_json::from_str(json).unwrap();
        assert!(preview.get_url.is_some());
        assert_eq!(preview.post_url, None);
        assert_eq!(preview.post_parameters, None);
    }

    #[test]
    fn test_deserialize_post_preview() {
        let json = r#"{
            "postUrl": "https://tenant.sharepoint.com/preview",
            "postParameters": "access_token=abc&other=1"
        }"#;
        let preview: FilePreviewInfo = serde_json::from_str(json).unwrap();
        assert_eq!(preview.get_url, None);
        assert_eq!(
            preview.post_parameters.as_deref(),
            Some("access_token=abc&other=1")
        );
    }

    #[test]
    fn test_empty_url_string_maps_to_none() {
        let preview: FilePreviewInfo = serde_json::from_str(r#"{"getUrl": ""}"#).unwrap();
        assert_eq!(preview.get_url, None);
    }

    #[test]
    fn test_options_skip_unset_fields() {
        let json = serde_json::to_string(&FilePreviewOptions::default()).unwrap();
        assert_eq!(json, "{}");

        let options = FilePreviewOptions {
            page: Some("2".into()),
            zoom: Some(1.5),
        };
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["page"], "2");
        assert_eq!(json["zoom"], 1.5);
    }
}

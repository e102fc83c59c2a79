use gloo_net::http::Request;
use serde::Deserialize;

use crate::config::GALLERY_MANIFEST_PATH;
use crate::error::UiError;
use crate::gallery::filter::ALL_TOKEN;

/// One entry of the gallery grid as declared by the content manifest.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GalleryItem {
    pub category: String,
    pub thumbnail: String,
    #[serde(default)]
    pub full_image: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub alt: String,
}

impl GalleryItem {
    /// Source shown in the lightbox: the full-size image when declared,
    /// otherwise the thumbnail.
    pub fn display_source(&self) -> &str {
        self.full_image
            .as_deref()
            .filter(|src| !src.is_empty())
            .unwrap_or(&self.thumbnail)
    }

    pub fn caption(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FilterControl {
    pub token: String,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GalleryManifest {
    #[serde(default)]
    pub filters: Vec<FilterControl>,
    pub items: Vec<GalleryItem>,
}

impl GalleryManifest {
    pub fn parse(json: &str) -> Result<Self, UiError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Filter buttons in display order, always led by the "all" control.
    ///
    /// Without declared filters one control per category is derived, in the
    /// order categories first appear in the grid. A declared "all" entry only
    /// relabels the leading control. Tokens never repeat; the first
    /// declaration wins.
    pub fn filter_controls(&self) -> Vec<FilterControl> {
        let all_label = self
            .filters
            .iter()
            .find(|control| control.token == ALL_TOKEN)
            .map_or("Alle", |control| control.label.as_str());
        let mut controls = vec![FilterControl {
            token: ALL_TOKEN.to_string(),
            label: all_label.to_string(),
        }];
        let declared = if self.filters.is_empty() {
            self.items
                .iter()
                .map(|item| FilterControl {
                    token: item.category.clone(),
                    label: item.category.clone(),
                })
                .collect()
        } else {
            self.filters.clone()
        };
        for control in declared {
            if !controls.iter().any(|c| c.token == control.token) {
                controls.push(control);
            }
        }
        controls
    }
}

pub async fn load_manifest() -> Result<GalleryManifest, UiError> {
    let response = Request::get(GALLERY_MANIFEST_PATH).send().await?;
    if !response.ok() {
        return Err(UiError::Status(response.status()));
    }
    let body = response.text().await?;
    GalleryManifest::parse(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "items": [
            { "category": "bad", "thumbnail": "/img/bad-1-thumb.jpg", "full_image": "/img/bad-1.jpg", "title": "Badsanierung", "alt": "Neues Bad" },
            { "category": "kueche", "thumbnail": "/img/kueche-1-thumb.jpg" },
            { "category": "bad", "thumbnail": "/img/bad-2-thumb.jpg", "full_image": "" }
        ]
    }"#;

    #[test]
    fn optional_fields_default_when_missing() {
        let manifest = GalleryManifest::parse(MANIFEST).expect("manifest parses");
        let plain = &manifest.items[1];
        assert_eq!(plain.full_image, None);
        assert_eq!(plain.title, None);
        assert_eq!(plain.alt, "");
        assert_eq!(plain.caption(), "");
    }

    #[test]
    fn display_source_prefers_full_image() {
        let manifest = GalleryManifest::parse(MANIFEST).expect("manifest parses");
        assert_eq!(manifest.items[0].display_source(), "/img/bad-1.jpg");
        assert_eq!(manifest.items[1].display_source(), "/img/kueche-1-thumb.jpg");
    }

    #[test]
    fn empty_full_image_falls_back_to_thumbnail() {
        let manifest = GalleryManifest::parse(MANIFEST).expect("manifest parses");
        assert_eq!(manifest.items[2].display_source(), "/img/bad-2-thumb.jpg");
    }

    #[test]
    fn derived_controls_follow_first_appearance() {
        let manifest = GalleryManifest::parse(MANIFEST).expect("manifest parses");
        let tokens: Vec<_> = manifest
            .filter_controls()
            .into_iter()
            .map(|c| c.token)
            .collect();
        assert_eq!(tokens, vec!["all", "bad", "kueche"]);
    }

    #[test]
    fn declared_controls_are_kept_and_all_is_not_duplicated() {
        let json = r#"{
            "filters": [
                { "token": "all", "label": "Alles" },
                { "token": "kueche", "label": "Küchen" }
            ],
            "items": []
        }"#;
        let manifest = GalleryManifest::parse(json).expect("manifest parses");
        let controls = manifest.filter_controls();
        assert_eq!(controls.len(), 2);
        assert_eq!(controls[0].token, "all");
        assert_eq!(controls[0].label, "Alles");
        assert_eq!(controls[1].label, "Küchen");
    }

    #[test]
    fn all_control_defaults_to_alle() {
        let manifest = GalleryManifest::parse(MANIFEST).expect("manifest parses");
        assert_eq!(manifest.filter_controls()[0].label, "Alle");
    }

    #[test]
    fn repeated_declared_tokens_keep_the_first_label() {
        let json = r#"{
            "filters": [
                { "token": "bad", "label": "Bäder" },
                { "token": "bad", "label": "Badezimmer" },
                { "token": "kueche", "label": "Küchen" }
            ],
            "items": []
        }"#;
        let manifest = GalleryManifest::parse(json).expect("manifest parses");
        let controls = manifest.filter_controls();
        let bad: Vec<_> = controls.iter().filter(|c| c.token == "bad").collect();
        assert_eq!(bad.len(), 1);
        assert_eq!(bad[0].label, "Bäder");
        assert_eq!(controls.len(), 3);
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        assert!(matches!(
            GalleryManifest::parse("{ \"items\": 3 }"),
            Err(UiError::Manifest(_))
        ));
    }
}

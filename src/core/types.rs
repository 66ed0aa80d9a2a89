//! core::types
//!
//! Strong types for catalog resources.
//!
//! # Types
//!
//! - [`ResourceKind`] - Which resource list a declaration tree is built from
//! - [`ColorResource`], [`DataResource`], [`ImageResource`] - Catalog entries
//! - [`Locale`] - Locale tag attached to localized images
//! - [`CatalogResource`] - Leaf payload generator shared by all kinds
//!
//! # Equality
//!
//! Resources of one kind are grouped by `name` only. `path` and metadata are
//! carried through to the generated binding and never take part in
//! deduplication.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::namespace::Namespace;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("invalid qualified identifier {0}")]
    InvalidQualifiedIdentifier(String),
}

/// The resource kinds a catalog can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Color,
    Data,
    Image,
}

impl ResourceKind {
    /// All kinds, in generation order.
    pub const ALL: [ResourceKind; 3] = [ResourceKind::Color, ResourceKind::Data, ResourceKind::Image];

    /// Label used as the root group name.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Color => "color",
            ResourceKind::Data => "data",
            ResourceKind::Image => "image",
        }
    }

    /// Plural noun used in comments and diagnostics.
    pub fn plural(&self) -> &'static str {
        match self {
            ResourceKind::Color => "colors",
            ResourceKind::Data => "data assets",
            ResourceKind::Image => "images",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Locale tag of a localized image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// The development (base) localization.
    Base,
    /// A specific language code such as `en` or `pt-BR`.
    Language(String),
}

impl Locale {
    fn code_string(&self) -> String {
        match self {
            Locale::Base => "Locale::Base".to_string(),
            Locale::Language(code) => format!("Locale::Language({code:?})"),
        }
    }
}

/// A named color in an asset catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorResource {
    pub name: String,
    #[serde(default)]
    pub path: Vec<String>,
}

/// An opaque data asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataResource {
    pub name: String,
    #[serde(default)]
    pub path: Vec<String>,
    #[serde(default)]
    pub on_demand_resource_tags: Option<Vec<String>>,
}

/// An image, either from a catalog or a loose image file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResource {
    pub name: String,
    #[serde(default)]
    pub path: Vec<String>,
    #[serde(default)]
    pub locale: Option<Locale>,
    #[serde(default)]
    pub on_demand_resource_tags: Option<Vec<String>>,
}

impl ColorResource {
    pub fn new(name: impl Into<String>, path: Vec<String>) -> Self {
        Self {
            name: name.into(),
            path,
        }
    }
}

impl DataResource {
    pub fn new(name: impl Into<String>, path: Vec<String>) -> Self {
        Self {
            name: name.into(),
            path,
            on_demand_resource_tags: None,
        }
    }
}

impl ImageResource {
    pub fn new(name: impl Into<String>, path: Vec<String>) -> Self {
        Self {
            name: name.into(),
            path,
            locale: None,
            on_demand_resource_tags: None,
        }
    }
}

/// A resource that can be lowered into a leaf declaration.
///
/// Implementors pick their own list out of a [`Namespace`] and render their
/// own comment and construction expression; the builder treats both as opaque.
pub trait CatalogResource: Clone {
    /// The kind this resource belongs to.
    const KIND: ResourceKind;

    /// Leaf name (without folder path).
    fn name(&self) -> &str;

    /// Folder segments from the catalog root to this entry.
    fn path(&self) -> &[String];

    /// The resources of this kind declared directly in `namespace`.
    fn select(namespace: &Namespace) -> &[Self];

    /// Render the construction expression payload.
    fn construction(&self) -> String;

    /// Comment prefix naming the kind, e.g. `Color`.
    fn comment_label() -> &'static str;

    /// `path + [name]` joined by `/`.
    fn full_name(&self) -> String {
        let mut segments: Vec<&str> = self.path().iter().map(String::as_str).collect();
        segments.push(self.name());
        segments.join("/")
    }

    /// Documentation comment for the leaf declaration.
    fn doc_comment(&self) -> String {
        format!("{} `{}`.", Self::comment_label(), self.full_name())
    }
}

fn tags_code_string(tags: &Option<Vec<String>>) -> String {
    match tags {
        Some(tags) => format!("Some(&{tags:?})"),
        None => "None".to_string(),
    }
}

impl CatalogResource for ColorResource {
    const KIND: ResourceKind = ResourceKind::Color;

    fn name(&self) -> &str {
        &self.name
    }

    fn path(&self) -> &[String] {
        &self.path
    }

    fn select(namespace: &Namespace) -> &[Self] {
        &namespace.colors
    }

    fn construction(&self) -> String {
        format!(
            "ColorResource {{ name: {:?}, path: &{:?} }}",
            self.full_name(),
            self.path
        )
    }

    fn comment_label() -> &'static str {
        "Color"
    }
}

impl CatalogResource for DataResource {
    const KIND: ResourceKind = ResourceKind::Data;

    fn name(&self) -> &str {
        &self.name
    }

    fn path(&self) -> &[String] {
        &self.path
    }

    fn select(namespace: &Namespace) -> &[Self] {
        &namespace.data_assets
    }

    fn construction(&self) -> String {
        format!(
            "DataResource {{ name: {:?}, path: &{:?}, on_demand_resource_tags: {} }}",
            self.full_name(),
            self.path,
            tags_code_string(&self.on_demand_resource_tags)
        )
    }

    fn comment_label() -> &'static str {
        "Data asset"
    }
}

impl CatalogResource for ImageResource {
    const KIND: ResourceKind = ResourceKind::Image;

    fn name(&self) -> &str {
        &self.name
    }

    fn path(&self) -> &[String] {
        &self.path
    }

    fn select(namespace: &Namespace) -> &[Self] {
        &namespace.images
    }

    fn construction(&self) -> String {
        let locale = match &self.locale {
            Some(locale) => format!("Some({})", locale.code_string()),
            None => "None".to_string(),
        };
        format!(
            "ImageResource {{ name: {:?}, path: &{:?}, locale: {}, on_demand_resource_tags: {} }}",
            self.full_name(),
            self.path,
            locale,
            tags_code_string(&self.on_demand_resource_tags)
        )
    }

    fn comment_label() -> &'static str {
        "Image"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_labels() {
        assert_eq!(ResourceKind::Color.label(), "color");
        assert_eq!(ResourceKind::Data.plural(), "data assets");
        assert_eq!(ResourceKind::Image.to_string(), "image");
    }

    #[test]
    fn full_name_joins_path() {
        let color = ColorResource::new("Red", vec!["Brand".into(), "Primary".into()]);
        assert_eq!(color.full_name(), "Brand/Primary/Red");

        let root = ColorResource::new("Red", vec![]);
        assert_eq!(root.full_name(), "Red");
    }

    #[test]
    fn color_payload() {
        let color = ColorResource::new("Accent Color", vec!["Brand".into()]);
        assert_eq!(color.doc_comment(), "Color `Brand/Accent Color`.");
        assert_eq!(
            color.construction(),
            r#"ColorResource { name: "Brand/Accent Color", path: &["Brand"] }"#
        );
    }

    #[test]
    fn data_payload_carries_tags() {
        let mut data = DataResource::new("Levels", vec![]);
        data.on_demand_resource_tags = Some(vec!["level1".into()]);
        assert_eq!(data.doc_comment(), "Data asset `Levels`.");
        assert_eq!(
            data.construction(),
            r#"DataResource { name: "Levels", path: &[], on_demand_resource_tags: Some(&["level1"]) }"#
        );
    }

    #[test]
    fn image_payload_carries_locale() {
        let mut image = ImageResource::new("Flag", vec!["Icons".into()]);
        image.locale = Some(Locale::Language("nl".into()));
        assert_eq!(image.doc_comment(), "Image `Icons/Flag`.");
        assert_eq!(
            image.construction(),
            r#"ImageResource { name: "Icons/Flag", path: &["Icons"], locale: Some(Locale::Language("nl")), on_demand_resource_tags: None }"#
        );
    }

    #[test]
    fn construction_escapes_quotes() {
        let color = ColorResource::new("Say \"hi\"", vec![]);
        assert!(color.construction().contains(r#"name: "Say \"hi\"""#));
    }

    #[test]
    fn kind_deserializes_lowercase() {
        let kind: ResourceKind = serde_json::from_str("\"image\"").unwrap();
        assert_eq!(kind, ResourceKind::Image);
    }
}

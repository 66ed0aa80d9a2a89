//! core::namespace
//!
//! Catalog folder hierarchy and the merge algebra.
//!
//! # Merging
//!
//! Two namespaces merge by concatenating each resource list (left operand
//! first) and recursively merging child namespaces that share a key. Merging
//! is associative but not commutative: downstream deduplication keeps the
//! first occurrence, so the order of a fold decides which duplicate wins.
//!
//! # Invariants
//!
//! - Child keys are unique per level (map keys)
//! - Merging never mutates its operands
//! - The empty namespace is a left and right identity

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::types::{ColorResource, DataResource, ImageResource};

/// A node in a catalog's folder hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Namespace {
    /// Child namespaces keyed by raw folder name.
    pub subnamespaces: BTreeMap<String, Namespace>,
    pub colors: Vec<ColorResource>,
    pub data_assets: Vec<DataResource>,
    pub images: Vec<ImageResource>,
}

impl Namespace {
    /// Create an empty namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// A namespace holding only `images` at its own level.
    pub fn with_images(images: Vec<ImageResource>) -> Self {
        Self {
            images,
            ..Self::default()
        }
    }

    /// True when no resource is declared here or anywhere below.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
            && self.data_assets.is_empty()
            && self.images.is_empty()
            && self.subnamespaces.values().all(Namespace::is_empty)
    }

    /// Merge `other` into a copy of `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use assetgen::core::namespace::Namespace;
    /// use assetgen::core::types::ColorResource;
    ///
    /// let mut a = Namespace::new();
    /// a.colors.push(ColorResource::new("Red", vec![]));
    /// let mut b = Namespace::new();
    /// b.colors.push(ColorResource::new("Blue", vec![]));
    ///
    /// let merged = a.merging(&b);
    /// let names: Vec<_> = merged.colors.iter().map(|c| c.name.as_str()).collect();
    /// assert_eq!(names, ["Red", "Blue"]);
    /// ```
    pub fn merging(&self, other: &Namespace) -> Namespace {
        let mut subnamespaces = self.subnamespaces.clone();
        for (key, theirs) in &other.subnamespaces {
            let merged = match subnamespaces.get(key) {
                Some(ours) => ours.merging(theirs),
                None => theirs.clone(),
            };
            subnamespaces.insert(key.clone(), merged);
        }

        Namespace {
            subnamespaces,
            colors: concat(&self.colors, &other.colors),
            data_assets: concat(&self.data_assets, &other.data_assets),
            images: concat(&self.images, &other.images),
        }
    }

    /// Strict left fold of `namespaces` starting from the empty namespace.
    pub fn merge_all<'a, I>(namespaces: I) -> Namespace
    where
        I: IntoIterator<Item = &'a Namespace>,
    {
        namespaces
            .into_iter()
            .fold(Namespace::new(), |acc, next| acc.merging(next))
    }
}

fn concat<T: Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    out.extend_from_slice(left);
    out.extend_from_slice(right);
    out
}

/// A parsed asset catalog: its file name and root namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetCatalog {
    pub name: String,
    #[serde(default)]
    pub root: Namespace,
}

impl AssetCatalog {
    pub fn new(name: impl Into<String>, root: Namespace) -> Self {
        Self {
            name: name.into(),
            root,
        }
    }

    /// Merge the roots of `catalogs` in order.
    pub fn merged_root(catalogs: &[AssetCatalog]) -> Namespace {
        Namespace::merge_all(catalogs.iter().map(|c| &c.root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(name: &str) -> ColorResource {
        ColorResource::new(name, vec![])
    }

    fn names(ns: &Namespace) -> Vec<&str> {
        ns.colors.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn empty_is_identity() {
        let mut a = Namespace::new();
        a.colors.push(color("Red"));
        a.subnamespaces.insert("Brand".into(), {
            let mut b = Namespace::new();
            b.colors.push(color("Blue"));
            b
        });

        assert_eq!(a.merging(&Namespace::new()), a);
        assert_eq!(Namespace::new().merging(&a), a);
    }

    #[test]
    fn merging_concatenates_in_order() {
        let mut a = Namespace::new();
        a.colors.push(color("Red"));
        let mut b = Namespace::new();
        b.colors.push(color("Red"));
        b.colors.push(color("Green"));

        let merged = a.merging(&b);
        assert_eq!(names(&merged), ["Red", "Red", "Green"]);
        assert_eq!(names(&b.merging(&a)), ["Red", "Green", "Red"]);
    }

    #[test]
    fn merging_recurses_into_shared_children() {
        let mut a = Namespace::new();
        let mut a_colors = Namespace::new();
        a_colors.colors.push(color("Red"));
        a.subnamespaces.insert("Colors".into(), a_colors);

        let mut b = Namespace::new();
        let mut b_colors = Namespace::new();
        b_colors.colors.push(color("Red"));
        b.subnamespaces.insert("Colors".into(), b_colors);
        b.subnamespaces.insert("Other".into(), Namespace::new());

        let merged = a.merging(&b);
        assert_eq!(merged.subnamespaces.len(), 2);
        assert_eq!(names(&merged.subnamespaces["Colors"]), ["Red", "Red"]);
    }

    #[test]
    fn merging_does_not_mutate_operands() {
        let mut a = Namespace::new();
        a.colors.push(color("Red"));
        let before = a.clone();
        let _ = a.merging(&a.clone());
        assert_eq!(a, before);
    }

    #[test]
    fn merge_all_is_left_fold() {
        let catalogs: Vec<Namespace> = ["A", "B", "C"]
            .iter()
            .map(|n| {
                let mut ns = Namespace::new();
                ns.colors.push(color(n));
                ns
            })
            .collect();

        let merged = Namespace::merge_all(&catalogs);
        assert_eq!(names(&merged), ["A", "B", "C"]);
        let none: Vec<Namespace> = Vec::new();
        assert_eq!(Namespace::merge_all(&none), Namespace::new());
    }

    #[test]
    fn is_empty_looks_through_children() {
        let mut ns = Namespace::new();
        ns.subnamespaces.insert("Empty".into(), Namespace::new());
        assert!(ns.is_empty());

        ns.subnamespaces
            .get_mut("Empty")
            .unwrap()
            .images
            .push(ImageResource::new("Logo", vec!["Empty".into()]));
        assert!(!ns.is_empty());
    }

    #[test]
    fn catalog_deserializes_with_defaults() {
        let json = r#"{
            "name": "Assets.xcassets",
            "root": {
                "subnamespaces": { "Brand": { "colors": [{ "name": "Red", "path": ["Brand"] }] } }
            }
        }"#;
        let catalog: AssetCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.name, "Assets.xcassets");
        assert!(catalog.root.colors.is_empty());
        assert_eq!(catalog.root.subnamespaces["Brand"].colors[0].name, "Red");
    }
}

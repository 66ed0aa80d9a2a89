//! assetgen - typed accessor declarations for asset catalogs
//!
//! assetgen combines independently parsed asset catalogs (colors, data assets,
//! images) into one namespace and lowers it into a tree of named declarations
//! mirroring the catalogs' folder layout, so consumers get checked accessors
//! instead of string lookups.
//!
//! # Architecture
//!
//! - [`core`] - Resource model, identifiers, namespace merging, grouping, config
//! - [`generate`] - Namespace-to-declaration lowering and per-kind entry points
//! - [`diagnostics`] - Advisory warnings and the sinks that receive them
//! - [`ui`] - Console rendering of warnings
//!
//! # Correctness Invariants
//!
//! 1. Binding names are unique within a group; the first declaration wins
//! 2. Child groups are ordered by identifier, independent of input order
//! 3. Empty child groups are never emitted
//! 4. Warnings never change the generated tree
//!
//! # Example
//!
//! ```
//! use assetgen::core::namespace::{AssetCatalog, Namespace};
//! use assetgen::core::types::ColorResource;
//! use assetgen::diagnostics::Diagnostic;
//! use assetgen::generate::{CatalogInput, Generator};
//!
//! let mut brand = Namespace::new();
//! brand.colors.push(ColorResource::new("Primary", vec!["Brand".into()]));
//! let mut root = Namespace::new();
//! root.subnamespaces.insert("Brand".into(), brand);
//!
//! let input = CatalogInput {
//!     catalogs: vec![AssetCatalog::new("Colors.xcassets", root)],
//!     toplevel_images: vec![],
//! };
//!
//! let mut warnings: Vec<Diagnostic> = Vec::new();
//! let groups = Generator::default().generate(&input, &mut warnings);
//!
//! let color = &groups[0];
//! assert_eq!(color.outline(), "color/\n  brand/\n    primary");
//! ```

pub mod core;
pub mod diagnostics;
pub mod generate;
pub mod ui;

//! generate
//!
//! Declaration lowering for asset catalogs.
//!
//! # Modules
//!
//! - [`decl`] - Output declaration tree (groups, bindings, accessors)
//! - [`report`] - Duplicate and collision reporting per level
//! - [`builder`] - Recursive namespace-to-group lowering
//!
//! # Flow
//!
//! Each resource kind is generated independently: the catalog roots are
//! merged with a strict left fold, then the merged namespace is lowered into
//! one root [`Group`] named after the kind.

pub mod builder;
pub mod decl;
pub mod report;

use serde::{Deserialize, Serialize};

use crate::core::config::{Config, DiagnosticsMode};
use crate::core::namespace::{AssetCatalog, Namespace};
use crate::core::naming::QualifiedIdentifier;
use crate::core::types::{ColorResource, DataResource, ImageResource, ResourceKind};
use crate::diagnostics::{ConsoleSink, DiagnosticSink, QuietSink, TracingSink};
use crate::ui::output::Verbosity;

pub use builder::{build, build_kind, BuildOptions};
pub use decl::{Accessor, AccessorKind, Binding, Group};

/// Generate the color group for `catalogs`.
pub fn generate_colors<S>(
    catalogs: &[AssetCatalog],
    prefix: &QualifiedIdentifier,
    options: &BuildOptions,
    sink: &mut S,
) -> Group
where
    S: DiagnosticSink + ?Sized,
{
    let merged = merge_catalogs(catalogs);
    build::<ColorResource, S>(&merged, prefix, options, sink)
}

/// Generate the data asset group for `catalogs`.
pub fn generate_data_assets<S>(
    catalogs: &[AssetCatalog],
    prefix: &QualifiedIdentifier,
    options: &BuildOptions,
    sink: &mut S,
) -> Group
where
    S: DiagnosticSink + ?Sized,
{
    let merged = merge_catalogs(catalogs);
    build::<DataResource, S>(&merged, prefix, options, sink)
}

/// Generate the image group for `catalogs` plus loose top-level images.
///
/// Top-level images sharing a raw name (e.g. `Banner.jpg` and
/// `Banner@2x.jpg`, both named `Banner.jpg`) collapse to the first one. The
/// survivors join the root level after every catalog image.
pub fn generate_images<S>(
    catalogs: &[AssetCatalog],
    toplevel: &[ImageResource],
    prefix: &QualifiedIdentifier,
    options: &BuildOptions,
    sink: &mut S,
) -> Group
where
    S: DiagnosticSink + ?Sized,
{
    let loose = Namespace::with_images(dedupe_toplevel_images(toplevel));
    let merged = merge_catalogs(catalogs).merging(&loose);
    build::<ImageResource, S>(&merged, prefix, options, sink)
}

/// Keep the first image of each raw name, in first-occurrence order.
pub fn dedupe_toplevel_images(images: &[ImageResource]) -> Vec<ImageResource> {
    let mut seen = std::collections::HashSet::new();
    images
        .iter()
        .filter(|image| seen.insert(image.name.as_str()))
        .cloned()
        .collect()
}

fn merge_catalogs(catalogs: &[AssetCatalog]) -> Namespace {
    tracing::debug!(catalogs = catalogs.len(), "merging asset catalogs");
    AssetCatalog::merged_root(catalogs)
}

/// Everything the upstream parser hands over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogInput {
    #[serde(default)]
    pub catalogs: Vec<AssetCatalog>,
    /// Images declared outside any catalog, addressable at the root.
    #[serde(default)]
    pub toplevel_images: Vec<ImageResource>,
}

/// Config-driven generation of every selected resource kind.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: Config,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Lowering options derived from the config.
    pub fn options(&self) -> BuildOptions {
        BuildOptions {
            accessors: self.config.accessors(),
        }
    }

    /// Generate the root group for one kind.
    pub fn generate_kind<S>(&self, kind: ResourceKind, input: &CatalogInput, sink: &mut S) -> Group
    where
        S: DiagnosticSink + ?Sized,
    {
        let prefix = self.config.prefix();
        let options = self.options();
        match kind {
            ResourceKind::Color => generate_colors(&input.catalogs, prefix, &options, sink),
            ResourceKind::Data => generate_data_assets(&input.catalogs, prefix, &options, sink),
            ResourceKind::Image => generate_images(
                &input.catalogs,
                &input.toplevel_images,
                prefix,
                &options,
                sink,
            ),
        }
    }

    /// Generate one root group per configured kind, in configured order.
    pub fn generate<S>(&self, input: &CatalogInput, sink: &mut S) -> Vec<Group>
    where
        S: DiagnosticSink + ?Sized,
    {
        self.config
            .kinds()
            .into_iter()
            .map(|kind| self.generate_kind(kind, input, &mut *sink))
            .collect()
    }

    /// Generate with the sink selected by the `diagnostics` setting.
    pub fn generate_with_configured_sink(&self, input: &CatalogInput) -> Vec<Group> {
        match self.config.diagnostics() {
            DiagnosticsMode::Console => {
                self.generate(input, &mut ConsoleSink::new(Verbosity::Normal))
            }
            DiagnosticsMode::Verbose => {
                self.generate(input, &mut ConsoleSink::new(Verbosity::Debug))
            }
            DiagnosticsMode::Tracing => self.generate(input, &mut TracingSink),
            DiagnosticsMode::Quiet => self.generate(input, &mut QuietSink),
        }
    }
}

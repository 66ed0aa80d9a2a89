//! generate::builder
//!
//! Lower a merged namespace into a declaration tree.
//!
//! # Algorithm
//!
//! For each level:
//! 1. Select the resource list of the requested kind
//! 2. Group it by identifier (first occurrence wins) and report problems
//! 3. Turn every surviving resource into a [`Binding`]
//! 4. Recurse into child namespaces in ascending identifier order, dropping
//!    empty child groups
//! 5. Assemble the [`Group`] with its summary comment and accessors
//!
//! The root group is returned even when empty. Recursion depth equals the
//! catalog folder depth.

use crate::core::grouping::group_by_identifier;
use crate::core::namespace::Namespace;
use crate::core::naming::{Identifier, QualifiedIdentifier};
use crate::core::types::{CatalogResource, ColorResource, DataResource, ImageResource, ResourceKind};
use crate::diagnostics::DiagnosticSink;

use super::decl::{Accessor, AccessorKind, Binding, Group};
use super::report::{report_collisions, report_grouping, MergedNamespaces};

/// Knobs for tree lowering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Emit property and function accessors for each child group.
    pub accessors: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self { accessors: true }
    }
}

/// Build the declaration tree for resources of type `R`.
///
/// The root group is named after the resource kind and qualified by `prefix`.
///
/// # Example
///
/// ```
/// use assetgen::core::namespace::Namespace;
/// use assetgen::core::naming::QualifiedIdentifier;
/// use assetgen::core::types::ColorResource;
/// use assetgen::diagnostics::Diagnostic;
/// use assetgen::generate::builder::{build, BuildOptions};
///
/// let mut ns = Namespace::new();
/// ns.colors.push(ColorResource::new("Red", vec![]));
///
/// let mut warnings: Vec<Diagnostic> = Vec::new();
/// let prefix = QualifiedIdentifier::parse("R").unwrap();
/// let group = build::<ColorResource, _>(&ns, &prefix, &BuildOptions::default(), &mut warnings);
///
/// assert_eq!(group.name.as_str(), "color");
/// assert!(group.binding("red").is_some());
/// assert!(warnings.is_empty());
/// ```
pub fn build<R, S>(
    namespace: &Namespace,
    prefix: &QualifiedIdentifier,
    options: &BuildOptions,
    sink: &mut S,
) -> Group
where
    R: CatalogResource,
    S: DiagnosticSink + ?Sized,
{
    let name = Identifier::sanitize(R::KIND.label());
    build_group::<R, S>(namespace, name, prefix, options, sink)
}

/// Build the declaration tree for `kind`.
pub fn build_kind<S>(
    namespace: &Namespace,
    kind: ResourceKind,
    prefix: &QualifiedIdentifier,
    options: &BuildOptions,
    sink: &mut S,
) -> Group
where
    S: DiagnosticSink + ?Sized,
{
    match kind {
        ResourceKind::Color => build::<ColorResource, S>(namespace, prefix, options, sink),
        ResourceKind::Data => build::<DataResource, S>(namespace, prefix, options, sink),
        ResourceKind::Image => build::<ImageResource, S>(namespace, prefix, options, sink),
    }
}

fn build_group<R, S>(
    namespace: &Namespace,
    name: Identifier,
    prefix: &QualifiedIdentifier,
    options: &BuildOptions,
    sink: &mut S,
) -> Group
where
    R: CatalogResource,
    S: DiagnosticSink + ?Sized,
{
    let qualified = prefix.child(&name);

    let grouped = group_by_identifier(R::select(namespace).iter(), |r| r.name());
    report_grouping(&grouped, &qualified, R::KIND, sink);

    let bindings: Vec<Binding> = grouped
        .uniques
        .iter()
        .map(|resource| Binding::for_resource(*resource))
        .collect();
    let resource_identifiers: Vec<Identifier> = bindings.iter().map(|b| b.name.clone()).collect();

    let children = MergedNamespaces::new(&namespace.subnamespaces);
    children.report(&qualified, sink);
    report_collisions(
        &resource_identifiers,
        &children.identifiers(),
        &qualified,
        R::KIND,
        sink,
    );

    let mut groups = Vec::new();
    for (identifier, child) in &children.namespaces {
        let group = build_group::<R, S>(child, identifier.clone(), &qualified, options, sink);
        if !group.is_empty() {
            groups.push(group);
        }
    }

    let accessors = if options.accessors {
        groups
            .iter()
            .flat_map(|g| {
                [AccessorKind::Property, AccessorKind::Function].map(|kind| Accessor {
                    name: g.name.clone(),
                    kind,
                })
            })
            .collect()
    } else {
        Vec::new()
    };

    tracing::debug!(
        group = %qualified,
        bindings = bindings.len(),
        groups = groups.len(),
        "built declaration group"
    );

    Group {
        comment: summary_comment(&qualified, R::KIND, bindings.len(), groups.len()),
        name,
        bindings,
        groups,
        accessors,
    }
}

fn summary_comment(
    qualified: &QualifiedIdentifier,
    kind: ResourceKind,
    bindings: usize,
    groups: usize,
) -> String {
    let mut comment = format!(
        "This `{}` group is generated, and contains static references to {} {}",
        qualified,
        bindings,
        kind.plural()
    );
    if groups > 0 {
        comment.push_str(&format!(", and {} namespaces", groups));
    }
    comment.push('.');
    comment
}

//! generate::report
//!
//! Collision reporting for one level of the declaration tree.
//!
//! Reporting is observational: nothing here changes which bindings or groups
//! are generated, except that sibling namespaces sharing an identifier are
//! folded into one (map keys must stay unique after sanitizing).

use std::collections::{BTreeMap, BTreeSet};

use crate::core::grouping::Grouped;
use crate::core::namespace::Namespace;
use crate::core::naming::{Identifier, QualifiedIdentifier};
use crate::core::types::ResourceKind;
use crate::diagnostics::{Diagnostic, DiagnosticSink};

/// Report duplicate and empty resource identifiers found by grouping.
pub fn report_grouping<T, S>(
    grouped: &Grouped<T>,
    level: &QualifiedIdentifier,
    kind: ResourceKind,
    sink: &mut S,
) where
    S: DiagnosticSink + ?Sized,
{
    for duplicate in &grouped.duplicates {
        sink.report(Diagnostic::DuplicateResources {
            level: level.to_string(),
            kind,
            identifier: duplicate.identifier.clone(),
            names: duplicate.names.clone(),
        });
    }

    if !grouped.empties.is_empty() {
        sink.report(Diagnostic::EmptyResourceIdentifiers {
            level: level.to_string(),
            kind,
            names: grouped.empties.clone(),
        });
    }
}

/// Report every identifier used both by a resource and a child namespace.
///
/// Returns the colliding identifiers in ascending order.
pub fn report_collisions<S>(
    resource_identifiers: &[Identifier],
    child_names: &[Identifier],
    level: &QualifiedIdentifier,
    kind: ResourceKind,
    sink: &mut S,
) -> Vec<Identifier>
where
    S: DiagnosticSink + ?Sized,
{
    let resources: BTreeSet<&Identifier> = resource_identifiers.iter().collect();
    let children: BTreeSet<&Identifier> = child_names.iter().collect();

    let collisions: Vec<Identifier> = resources
        .intersection(&children)
        .map(|id| (*id).clone())
        .collect();

    for identifier in &collisions {
        sink.report(Diagnostic::NamespaceCollision {
            level: level.to_string(),
            kind,
            identifier: identifier.clone(),
        });
    }
    collisions
}

/// Child namespaces of one level, keyed by sanitized identifier.
#[derive(Debug, Default)]
pub struct MergedNamespaces {
    /// One namespace per identifier, in ascending identifier order.
    pub namespaces: BTreeMap<Identifier, Namespace>,
    /// Raw keys of identifiers that more than one namespace mapped to.
    pub duplicates: Vec<(Identifier, Vec<String>)>,
    /// Raw keys that sanitized to the empty identifier.
    pub empties: Vec<String>,
}

impl MergedNamespaces {
    /// Key `subnamespaces` by identifier, merging those that collide in
    /// ascending raw-key order.
    pub fn new(subnamespaces: &BTreeMap<String, Namespace>) -> Self {
        let mut namespaces: BTreeMap<Identifier, Namespace> = BTreeMap::new();
        let mut raw_keys: BTreeMap<Identifier, Vec<String>> = BTreeMap::new();
        let mut empties = Vec::new();

        for (key, namespace) in subnamespaces {
            let identifier = Identifier::sanitize(key);
            if identifier.is_empty() {
                empties.push(key.clone());
                continue;
            }

            let merged = match namespaces.get(&identifier) {
                Some(existing) => existing.merging(namespace),
                None => namespace.clone(),
            };
            namespaces.insert(identifier.clone(), merged);
            raw_keys.entry(identifier).or_default().push(key.clone());
        }

        let duplicates = raw_keys
            .into_iter()
            .filter(|(_, keys)| keys.len() > 1)
            .collect();

        Self {
            namespaces,
            duplicates,
            empties,
        }
    }

    /// Identifiers in ascending order.
    pub fn identifiers(&self) -> Vec<Identifier> {
        self.namespaces.keys().cloned().collect()
    }

    /// Report merged and skipped namespaces.
    pub fn report<S>(&self, level: &QualifiedIdentifier, sink: &mut S)
    where
        S: DiagnosticSink + ?Sized,
    {
        for (identifier, names) in &self.duplicates {
            sink.report(Diagnostic::DuplicateNamespaces {
                level: level.to_string(),
                identifier: identifier.clone(),
                names: names.clone(),
            });
        }
        if !self.empties.is_empty() {
            sink.report(Diagnostic::EmptyNamespaceIdentifiers {
                level: level.to_string(),
                names: self.empties.clone(),
            });
        }
    }
}

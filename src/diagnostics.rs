//! diagnostics
//!
//! Advisory warnings produced while building declaration trees.
//!
//! # Design
//!
//! Generation never fails on colliding or degenerate names. Instead every
//! problem becomes a [`Diagnostic`] handed to a caller-supplied
//! [`DiagnosticSink`]. The returned tree is identical whichever sink is used.

use std::fmt;

use crate::core::naming::Identifier;
use crate::core::types::ResourceKind;
use crate::ui::output::{self, Verbosity};

/// One advisory warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Several resources sanitize to the same identifier; the first was kept.
    DuplicateResources {
        level: String,
        kind: ResourceKind,
        identifier: Identifier,
        names: Vec<String>,
    },

    /// Resources whose names sanitize to nothing were skipped.
    EmptyResourceIdentifiers {
        level: String,
        kind: ResourceKind,
        names: Vec<String>,
    },

    /// Sibling namespaces sanitize to the same identifier and were merged.
    DuplicateNamespaces {
        level: String,
        identifier: Identifier,
        names: Vec<String>,
    },

    /// Namespaces whose names sanitize to nothing were skipped.
    EmptyNamespaceIdentifiers { level: String, names: Vec<String> },

    /// A resource and a sibling namespace share an identifier. Both are kept.
    NamespaceCollision {
        level: String,
        kind: ResourceKind,
        identifier: Identifier,
    },
}

impl Diagnostic {
    /// Short machine-friendly code.
    pub fn code(&self) -> &'static str {
        match self {
            Diagnostic::DuplicateResources { .. } => "duplicate-resources",
            Diagnostic::EmptyResourceIdentifiers { .. } => "empty-resource-identifier",
            Diagnostic::DuplicateNamespaces { .. } => "duplicate-namespaces",
            Diagnostic::EmptyNamespaceIdentifiers { .. } => "empty-namespace-identifier",
            Diagnostic::NamespaceCollision { .. } => "namespace-collision",
        }
    }

    /// The qualified level the diagnostic was raised at.
    pub fn level(&self) -> &str {
        match self {
            Diagnostic::DuplicateResources { level, .. }
            | Diagnostic::EmptyResourceIdentifiers { level, .. }
            | Diagnostic::DuplicateNamespaces { level, .. }
            | Diagnostic::EmptyNamespaceIdentifiers { level, .. }
            | Diagnostic::NamespaceCollision { level, .. } => level,
        }
    }

    /// Number of raw names involved (1 for collisions).
    pub fn count(&self) -> usize {
        match self {
            Diagnostic::DuplicateResources { names, .. }
            | Diagnostic::EmptyResourceIdentifiers { names, .. }
            | Diagnostic::DuplicateNamespaces { names, .. }
            | Diagnostic::EmptyNamespaceIdentifiers { names, .. } => names.len(),
            Diagnostic::NamespaceCollision { .. } => 1,
        }
    }
}

fn quoted(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("'{}'", n))
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DuplicateResources {
                level,
                kind,
                identifier,
                names,
            } => write!(
                f,
                "{} {} in `{}` would all generate '{}' ({}); keeping the first",
                names.len(),
                kind.plural(),
                level,
                identifier,
                quoted(names)
            ),
            Diagnostic::EmptyResourceIdentifiers { level, kind, names } => write!(
                f,
                "skipping {} {} in `{}` because their names produce an empty identifier: {}",
                names.len(),
                kind.plural(),
                level,
                quoted(names)
            ),
            Diagnostic::DuplicateNamespaces {
                level,
                identifier,
                names,
            } => write!(
                f,
                "merging {} namespaces in `{}` that would all generate '{}': {}",
                names.len(),
                level,
                identifier,
                quoted(names)
            ),
            Diagnostic::EmptyNamespaceIdentifiers { level, names } => write!(
                f,
                "skipping {} namespaces in `{}` because their names produce an empty identifier: {}",
                names.len(),
                level,
                quoted(names)
            ),
            Diagnostic::NamespaceCollision {
                level,
                kind,
                identifier,
            } => write!(
                f,
                "namespace '{}' in `{}` has the same identifier as one of its {}; both are generated",
                identifier,
                level,
                kind.plural()
            ),
        }
    }
}

/// Receiver for diagnostics.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Collect diagnostics for later inspection.
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Emit each diagnostic as a `tracing::warn!` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(
            code = diagnostic.code(),
            scope = diagnostic.level(),
            count = diagnostic.count(),
            "{}",
            diagnostic
        );
    }
}

/// Print `warning: ...` lines to stderr.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    pub verbosity: Verbosity,
}

impl ConsoleSink {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Message text for `diagnostic`; debug verbosity appends its code.
    pub fn message(&self, diagnostic: &Diagnostic) -> String {
        match self.verbosity {
            Verbosity::Debug => format!("{} [{}]", diagnostic, diagnostic.code()),
            Verbosity::Quiet | Verbosity::Normal => diagnostic.to_string(),
        }
    }

    /// The stderr line for `diagnostic`, or `None` when quiet.
    pub fn line(&self, diagnostic: &Diagnostic) -> Option<String> {
        output::warning_line(self.message(diagnostic), self.verbosity)
    }
}

impl DiagnosticSink for ConsoleSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        output::warn(self.message(&diagnostic), self.verbosity);
    }
}

/// Drop everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuietSink;

impl DiagnosticSink for QuietSink {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

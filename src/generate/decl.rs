//! generate::decl
//!
//! The output declaration tree.
//!
//! A [`Group`] mirrors one namespace: it owns its leaf [`Binding`]s, its
//! non-empty child groups, and one pair of [`Accessor`]s per child group.
//! Nothing here decides target-language syntax; comments are plain sentences
//! and binding values are opaque payloads from the resource kind.

use serde::Serialize;

use crate::core::naming::Identifier;
use crate::core::types::CatalogResource;

/// A leaf declaration for one surviving resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    pub name: Identifier,
    pub comment: String,
    /// Construction expression payload.
    pub value: String,
}

impl Binding {
    /// Lower a resource through its own leaf generator.
    pub fn for_resource<R: CatalogResource>(resource: &R) -> Self {
        Self {
            name: Identifier::sanitize(resource.name()),
            comment: resource.doc_comment(),
            value: resource.construction(),
        }
    }
}

/// Shape of an accessor entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessorKind {
    /// Read-only property returning the child group.
    Property,
    /// Function returning the child group for an explicit bundle.
    Function,
}

/// Entry point from a group to one of its child groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Accessor {
    pub name: Identifier,
    pub kind: AccessorKind,
}

/// A non-leaf declaration mirroring one namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub name: Identifier,
    pub comment: String,
    pub bindings: Vec<Binding>,
    pub groups: Vec<Group>,
    pub accessors: Vec<Accessor>,
}

impl Group {
    /// True when the group has no bindings and no child groups.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty() && self.groups.is_empty()
    }

    /// Find a binding by identifier.
    pub fn binding(&self, name: &str) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.name.as_str() == name)
    }

    /// Find a child group by identifier.
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name.as_str() == name)
    }

    /// Follow a path of child group identifiers.
    pub fn descend(&self, path: &[&str]) -> Option<&Group> {
        path.iter().try_fold(self, |group, name| group.group(name))
    }

    /// Total number of bindings in this group and all descendants.
    pub fn total_bindings(&self) -> usize {
        self.bindings.len() + self.groups.iter().map(Group::total_bindings).sum::<usize>()
    }

    /// Indented outline of names: groups end in `/`, bindings follow their
    /// group line and precede its child groups.
    ///
    /// # Example
    ///
    /// ```
    /// use assetgen::core::naming::Identifier;
    /// use assetgen::generate::decl::Group;
    ///
    /// let group = Group {
    ///     name: Identifier::sanitize("color"),
    ///     comment: String::new(),
    ///     bindings: vec![],
    ///     groups: vec![],
    ///     accessors: vec![],
    /// };
    /// assert_eq!(group.outline(), "color/");
    /// ```
    pub fn outline(&self) -> String {
        let mut lines = Vec::new();
        self.outline_into(0, &mut lines);
        lines.join("\n")
    }

    fn outline_into(&self, depth: usize, lines: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        lines.push(format!("{}{}/", indent, self.name));
        for binding in &self.bindings {
            lines.push(format!("{}  {}", indent, binding.name));
        }
        for group in &self.groups {
            group.outline_into(depth + 1, lines);
        }
    }
}

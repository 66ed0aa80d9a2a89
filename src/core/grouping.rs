//! core::grouping
//!
//! Group named items by sanitized identifier and keep the first of each group.
//!
//! Grouping never fails. Duplicates and items whose name sanitizes to the
//! empty identifier are recorded so callers can report them.

use std::collections::HashMap;

use super::naming::Identifier;

/// A sanitized identifier shared by two or more items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    pub identifier: Identifier,
    /// Raw names of every member, in input order. The first one survived.
    pub names: Vec<String>,
}

impl DuplicateGroup {
    /// Total number of members, including the survivor.
    pub fn count(&self) -> usize {
        self.names.len()
    }
}

/// Result of [`group_by_identifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouped<T> {
    /// First member of every non-empty identifier, in first-occurrence order.
    pub uniques: Vec<T>,
    /// Identifiers with more than one member, in first-occurrence order.
    pub duplicates: Vec<DuplicateGroup>,
    /// Raw names that sanitized to the empty identifier.
    pub empties: Vec<String>,
}

impl<T> Grouped<T> {
    pub fn empty_count(&self) -> usize {
        self.empties.len()
    }

    /// Identifiers of the surviving items.
    pub fn identifiers<F>(&self, key_of: F) -> Vec<Identifier>
    where
        F: Fn(&T) -> &str,
    {
        self.uniques
            .iter()
            .map(|item| Identifier::sanitize(key_of(item)))
            .collect()
    }
}

/// Partition `items` by the sanitized form of `key_of(item)`.
///
/// The first item of each identifier is kept; later ones are dropped. Items
/// whose identifier is empty are excluded and listed in `empties`.
///
/// # Example
///
/// ```
/// use assetgen::core::grouping::group_by_identifier;
///
/// let grouped = group_by_identifier(vec!["Icon", "icon", "###", "Logo"], |s| *s);
/// assert_eq!(grouped.uniques, vec!["Icon", "Logo"]);
/// assert_eq!(grouped.duplicates[0].count(), 2);
/// assert_eq!(grouped.empty_count(), 1);
/// ```
pub fn group_by_identifier<T, I, F>(items: I, key_of: F) -> Grouped<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> &str,
{
    let mut uniques = Vec::new();
    let mut empties = Vec::new();
    // identifier -> (index in `members`, raw names)
    let mut seen: HashMap<Identifier, usize> = HashMap::new();
    let mut members: Vec<(Identifier, Vec<String>)> = Vec::new();

    for item in items {
        let raw = key_of(&item).to_string();
        let identifier = Identifier::sanitize(&raw);
        if identifier.is_empty() {
            empties.push(raw);
            continue;
        }

        match seen.get(&identifier) {
            Some(&index) => members[index].1.push(raw),
            None => {
                seen.insert(identifier.clone(), members.len());
                members.push((identifier, vec![raw]));
                uniques.push(item);
            }
        }
    }

    let duplicates = members
        .into_iter()
        .filter(|(_, names)| names.len() > 1)
        .map(|(identifier, names)| DuplicateGroup { identifier, names })
        .collect();

    Grouped {
        uniques,
        duplicates,
        empties,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        tag: u32,
    }

    fn item(name: &'static str, tag: u32) -> Item {
        Item { name, tag }
    }

    #[test]
    fn keeps_first_occurrence() {
        let grouped = group_by_identifier(
            vec![item("Icon", 1), item("Logo", 2), item("icon", 3)],
            |i| i.name,
        );
        assert_eq!(grouped.uniques, vec![item("Icon", 1), item("Logo", 2)]);
        assert_eq!(grouped.duplicates.len(), 1);
        assert_eq!(grouped.duplicates[0].identifier.as_str(), "icon");
        assert_eq!(grouped.duplicates[0].names, vec!["Icon", "icon"]);
    }

    #[test]
    fn counts_all_members_of_duplicate() {
        let grouped = group_by_identifier(vec!["a", "A", "a"], |s| *s);
        assert_eq!(grouped.uniques, vec!["a"]);
        assert_eq!(grouped.duplicates[0].count(), 3);
    }

    #[test]
    fn excludes_empty_identifiers() {
        let grouped = group_by_identifier(vec!["###", "", "Red"], |s| *s);
        assert_eq!(grouped.uniques, vec!["Red"]);
        assert_eq!(grouped.empties, vec!["###", ""]);
        assert!(grouped.duplicates.is_empty());
    }

    #[test]
    fn duplicates_follow_first_occurrence_order() {
        let grouped = group_by_identifier(vec!["b", "a", "B", "A"], |s| *s);
        let ids: Vec<_> = grouped
            .duplicates
            .iter()
            .map(|d| d.identifier.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn identifiers_of_uniques() {
        let grouped = group_by_identifier(vec!["Red", "dark blue"], |s| *s);
        let ids = grouped.identifiers(|s| *s);
        assert_eq!(ids[1].as_str(), "darkBlue");
    }

    #[test]
    fn empty_input() {
        let grouped = group_by_identifier(Vec::<&str>::new(), |s| *s);
        assert!(grouped.uniques.is_empty());
        assert_eq!(grouped.empty_count(), 0);
    }
}

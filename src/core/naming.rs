//! core::naming
//!
//! Identifier rules for generated declarations.
//!
//! # Features
//!
//! - Sanitize raw catalog names into lowerCamelCase identifiers
//! - Validate identifiers supplied by configuration
//! - Build qualified identifier chains for comments
//!
//! Sanitizing is total: names made only of separators sanitize to the empty
//! identifier, which callers must detect and report.

use serde::{Deserialize, Serialize};

use super::types::TypeError;

/// Sanitize a raw resource or namespace name into an identifier string.
///
/// The name is split into words on every non-alphanumeric character. The
/// first word is lowercased entirely when it is all caps (starts with an
/// uppercase letter and has no lowercase letter), otherwise only its first
/// character is. Every following word gets an uppercase first character. A
/// leading digit is prefixed with `_`.
///
/// Sanitizing its own output returns it unchanged.
///
/// # Example
///
/// ```
/// use assetgen::core::naming::sanitize;
///
/// assert_eq!(sanitize("Icon"), "icon");
/// assert_eq!(sanitize("Banner.jpg"), "bannerJpg");
/// assert_eq!(sanitize("app-icon large"), "appIconLarge");
/// assert_eq!(sanitize("###"), "");
/// ```
pub fn sanitize(raw: &str) -> String {
    let mut words = raw
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty());

    let mut result = match words.next() {
        Some(first) => lowercase_head(first),
        None => return String::new(),
    };
    for word in words {
        result.push_str(&uppercase_first(word));
    }

    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }
    result
}

fn lowercase_head(word: &str) -> String {
    let all_caps = word.starts_with(char::is_uppercase) && !word.chars().any(char::is_lowercase);
    if all_caps {
        return word.to_lowercase();
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn uppercase_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A sanitized identifier for a generated declaration.
///
/// Produced by [`Identifier::sanitize`] (total, may be empty) or by
/// [`Identifier::new`] (strict, accepts only alphanumerics and `_`, not
/// starting with a digit).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Sanitize a raw name. Never fails.
    pub fn sanitize(raw: &str) -> Self {
        Self(sanitize(raw))
    }

    /// Create a validated identifier.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidIdentifier` if the value is empty, starts
    /// with a digit, or contains anything other than alphanumerics and `_`.
    /// The value is not required to be in sanitized form: `R` is accepted.
    ///
    /// # Example
    ///
    /// ```
    /// use assetgen::core::naming::Identifier;
    ///
    /// assert!(Identifier::new("R").is_ok());
    /// assert!(Identifier::new("appIcon").is_ok());
    /// assert!(Identifier::new("app-icon").is_err());
    /// assert!(Identifier::new("").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, TypeError> {
        let value = value.into();
        if value.is_empty() {
            return Err(TypeError::InvalidIdentifier(
                "identifier cannot be empty".into(),
            ));
        }
        if value.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(TypeError::InvalidIdentifier(format!(
                "identifier '{value}' cannot start with a digit"
            )));
        }
        if let Some(c) = value.chars().find(|c| !(c.is_alphanumeric() || *c == '_')) {
            return Err(TypeError::InvalidIdentifier(format!(
                "identifier '{value}' cannot contain '{c}'"
            )));
        }
        Ok(Self(value))
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when sanitizing produced nothing usable.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Chain of identifiers from the declaration root to a node.
///
/// Used for human-readable comments and diagnostics only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualifiedIdentifier(Vec<Identifier>);

impl QualifiedIdentifier {
    /// The empty chain.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a dot-separated chain such as `R.assets`.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidQualifiedIdentifier` if any segment is not a
    /// valid identifier.
    ///
    /// # Example
    ///
    /// ```
    /// use assetgen::core::naming::QualifiedIdentifier;
    ///
    /// let prefix = QualifiedIdentifier::parse("R.assets").unwrap();
    /// assert_eq!(prefix.to_string(), "R.assets");
    /// assert!(QualifiedIdentifier::parse("R..assets").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self, TypeError> {
        if value.is_empty() {
            return Ok(Self::root());
        }
        value
            .split('.')
            .map(Identifier::new)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
            .map_err(|e| TypeError::InvalidQualifiedIdentifier(format!("'{value}': {e}")))
    }

    /// Return a new chain extended by `segment`.
    pub fn child(&self, segment: &Identifier) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.clone());
        Self(segments)
    }

    /// The segments of the chain.
    pub fn segments(&self) -> &[Identifier] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for QualifiedIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_basic() {
        assert_eq!(sanitize("Red"), "red");
        assert_eq!(sanitize("red"), "red");
        assert_eq!(sanitize("AccentColor"), "accentColor");
    }

    #[test]
    fn sanitize_joins_words() {
        assert_eq!(sanitize("my color"), "myColor");
        assert_eq!(sanitize("my_color"), "myColor");
        assert_eq!(sanitize("Banner.jpg"), "bannerJpg");
        assert_eq!(sanitize("a/b/c"), "aBC");
    }

    #[test]
    fn sanitize_all_caps_first_word() {
        assert_eq!(sanitize("URL"), "url");
        assert_eq!(sanitize("URL scheme"), "urlScheme");
    }

    #[test]
    fn sanitize_prefixes_leading_digit() {
        assert_eq!(sanitize("2x"), "_2x");
        assert_eq!(sanitize("-42 icons"), "_42Icons");
        assert_eq!(sanitize("1 a"), "_1A");
        assert_eq!(sanitize("0:A"), "_0A");
    }

    #[test]
    fn sanitize_handles_empty() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("###"), "");
        assert_eq!(sanitize(" - "), "");
    }

    #[test]
    fn sanitize_case_variants_collide() {
        assert_eq!(sanitize("Icon"), sanitize("icon"));
    }

    #[test]
    fn sanitize_is_idempotent_on_output() {
        for raw in [
            "Red",
            "Banner.jpg",
            "URL scheme",
            "2x",
            "appIcon",
            "1 a",
            "0:A",
            "2X",
            "_1A",
        ] {
            let once = sanitize(raw);
            assert_eq!(sanitize(&once), once);
        }
    }

    #[test]
    fn identifier_new_rejects_invalid() {
        assert!(Identifier::new("").is_err());
        assert!(Identifier::new("1abc").is_err());
        assert!(Identifier::new("a-b").is_err());
        assert!(Identifier::new("a b").is_err());
        assert!(Identifier::new("_private").is_ok());
    }

    #[test]
    fn identifier_new_accepts_unsanitized_form() {
        assert_eq!(Identifier::new("R").map(|id| id.to_string()).ok().as_deref(), Some("R"));
        assert_eq!(sanitize("R"), "r");
        assert!(Identifier::new("_private").is_ok());
        assert_eq!(sanitize("_private"), "private");
    }

    #[test]
    fn qualified_identifier_display() {
        let root = QualifiedIdentifier::parse("R").unwrap();
        let child = root.child(&Identifier::sanitize("Colors"));
        assert_eq!(child.to_string(), "R.colors");
        assert_eq!(QualifiedIdentifier::root().to_string(), "");
        assert!(QualifiedIdentifier::parse("").unwrap().is_root());
    }
}

/*!
 * # Content-Type Registry
 *
 * Every block in a board document carries a content-type tag (`"text"`,
 * `"image"`, ...). The registry maps each tag to a [`ContentType`] descriptor
 * that tells the rest of the editor how blocks of that type behave:
 *
 * - whether keyboard navigation may land on the block (`editable`),
 * - which slash command selects the type while composing (`slash_command`),
 * - which type the *next* block defaults to after a successful save
 *   (`next_type`, falling back to plain text when absent).
 *
 * The registry is built once at startup from [`kinds::builtin_types`] (or an
 * explicit list) and is never mutated afterwards. Enumeration order equals
 * registration order, which is what menu display relies on.
 */

pub mod kinds;

use thiserror::Error;

/// Content-type tag a block falls back to when a descriptor names no successor.
pub const DEFAULT_TYPE: &str = "text";

#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("unregistered content type: {0}")]
    NotFound(String),
}

/// Descriptor for a single registered block content type.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentType {
    /// Tag blocks use to reference this type (unique within the registry).
    pub tag: String,
    /// Human-readable name for menu display.
    pub display_name: String,
    /// Slash command that selects this type while composing, e.g. `/image`.
    pub slash_command: String,
    /// Whether keyboard navigation may land on blocks of this type.
    pub editable: bool,
    /// Tag of the type activated for the block composed after a successful
    /// save of this type. `None` falls back to [`DEFAULT_TYPE`].
    pub next_type: Option<String>,
}

impl ContentType {
    pub fn new(
        tag: &str,
        display_name: &str,
        slash_command: &str,
        editable: bool,
        next_type: Option<&str>,
    ) -> Self {
        Self {
            tag: tag.to_string(),
            display_name: display_name.to_string(),
            slash_command: slash_command.to_string(),
            editable,
            next_type: next_type.map(str::to_string),
        }
    }
}

/// Immutable lookup of content-type descriptors, built once at startup.
#[derive(Debug, Clone)]
pub struct Registry {
    // Registration order, which drives list() enumeration.
    types: Vec<ContentType>,
}

impl Registry {
    pub fn new(types: Vec<ContentType>) -> Self {
        Self { types }
    }

    /// Registry populated with the built-in content types.
    pub fn with_builtin_types() -> Self {
        Self::new(kinds::builtin_types())
    }

    /// Look up the descriptor for a content-type tag.
    ///
    /// An unregistered tag is a programming error in normal operation (tags
    /// only come from the registry itself), so callers treat the error as an
    /// invariant violation rather than a recoverable path.
    pub fn get(&self, tag: &str) -> Result<&ContentType, RegistryError> {
        self.types
            .iter()
            .find(|t| t.tag == tag)
            .ok_or_else(|| RegistryError::NotFound(tag.to_string()))
    }

    /// Find the descriptor whose slash command matches `text` in either
    /// direction: the command is a prefix of the typed text, or the typed
    /// text is a prefix of the command. First registered match wins.
    pub fn find_by_slash_command(&self, text: &str) -> Option<&ContentType> {
        if text.is_empty() {
            return None;
        }
        self.types
            .iter()
            .find(|t| text.starts_with(&t.slash_command) || t.slash_command.starts_with(text))
    }

    /// All descriptors in registration order. Stable across calls.
    pub fn list(&self) -> &[ContentType] {
        &self.types
    }

    /// Whether navigation may land on a block of the given type.
    /// Unregistered tags are treated as non-editable.
    pub fn is_editable(&self, tag: &str) -> bool {
        self.get(tag).map(|t| t.editable).unwrap_or(false)
    }

    /// Tag of the type the compose row activates after saving a block of
    /// type `tag`. Falls back to [`DEFAULT_TYPE`] when the descriptor names
    /// no successor or the tag is unregistered.
    pub fn next_type_after(&self, tag: &str) -> &str {
        self.get(tag)
            .ok()
            .and_then(|t| t.next_type.as_deref())
            .unwrap_or(DEFAULT_TYPE)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_builtin_types()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_descriptor_for_registered_tag() {
        let registry = Registry::with_builtin_types();

        let text = registry.get("text").unwrap();
        assert_eq!(text.tag, "text");
        assert!(text.editable);
    }

    #[test]
    fn get_fails_for_unregistered_tag() {
        let registry = Registry::with_builtin_types();

        let result = registry.get("spreadsheet");
        assert_eq!(
            result.unwrap_err(),
            RegistryError::NotFound("spreadsheet".to_string())
        );
    }

    #[test]
    fn slash_command_prefix_matches_both_directions() {
        let registry = Registry::with_builtin_types();

        // Typed text is a prefix of the registered command
        let hit = registry.find_by_slash_command("/im").unwrap();
        assert_eq!(hit.tag, "image");

        // Registered command is a prefix of the typed text
        let hit = registry.find_by_slash_command("/image sunset.png").unwrap();
        assert_eq!(hit.tag, "image");

        // Exact match
        let hit = registry.find_by_slash_command("/video").unwrap();
        assert_eq!(hit.tag, "video");
    }

    #[test]
    fn slash_command_without_match_returns_none() {
        let registry = Registry::with_builtin_types();

        assert!(registry.find_by_slash_command("/xyz").is_none());
        assert!(registry.find_by_slash_command("").is_none());
    }

    #[test]
    fn list_enumeration_order_is_stable() {
        let registry = Registry::with_builtin_types();

        let first: Vec<&str> = registry.list().iter().map(|t| t.tag.as_str()).collect();
        let second: Vec<&str> = registry.list().iter().map(|t| t.tag.as_str()).collect();

        assert_eq!(first, second);
        // Registration order, not alphabetical
        assert_eq!(first[0], "text");
    }

    #[test]
    fn unregistered_tags_are_not_editable() {
        let registry = Registry::with_builtin_types();

        assert!(!registry.is_editable("spreadsheet"));
        assert!(!registry.is_editable("divider"));
        assert!(registry.is_editable("h1"));
    }

    #[test]
    fn next_type_falls_back_to_text() {
        let registry = Registry::with_builtin_types();

        assert_eq!(registry.next_type_after("h1"), "text");
        assert_eq!(registry.next_type_after("list-item"), "list-item");
        // Unregistered tag also falls back
        assert_eq!(registry.next_type_after("spreadsheet"), "text");
    }
}

//! Built-in content types.
//!
//! Registration order matters: it is the order `Registry::list()` presents
//! types for menu display, and the order slash-command prefix matching
//! resolves ties in.

use super::ContentType;

/// The content types every board document supports out of the box.
///
/// Media types (`image`, `video`) and `divider` carry no inline-editable
/// text, so keyboard navigation skips over them. List-ish types name
/// themselves as successor so saving one continues the list; everything
/// else falls back to plain text.
pub fn builtin_types() -> Vec<ContentType> {
    vec![
        ContentType::new("text", "Text", "/text", true, None),
        ContentType::new("h1", "Title", "/title", true, None),
        ContentType::new("h2", "Subtitle", "/subtitle", true, None),
        ContentType::new("h3", "Sub-subtitle", "/subsubtitle", true, None),
        ContentType::new("list-item", "List item", "/list-item", true, Some("list-item")),
        ContentType::new("checkbox", "Checkbox", "/checkbox", true, Some("checkbox")),
        ContentType::new("quote", "Quote", "/quote", true, None),
        ContentType::new("divider", "Divider", "/divider", false, None),
        ContentType::new("image", "Image", "/image", false, None),
        ContentType::new("video", "Video", "/video", false, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_unique() {
        let types = builtin_types();
        let mut tags: Vec<&str> = types.iter().map(|t| t.tag.as_str()).collect();
        tags.sort_unstable();
        let len_before = tags.len();
        tags.dedup();
        assert_eq!(tags.len(), len_before);
    }

    #[test]
    fn slash_commands_are_unique() {
        let types = builtin_types();
        let mut commands: Vec<&str> = types.iter().map(|t| t.slash_command.as_str()).collect();
        commands.sort_unstable();
        let len_before = commands.len();
        commands.dedup();
        assert_eq!(commands.len(), len_before);
    }

    #[test]
    fn every_successor_is_itself_registered() {
        let types = builtin_types();
        for t in &types {
            if let Some(next) = &t.next_type {
                assert!(
                    types.iter().any(|other| &other.tag == next),
                    "{} names unregistered successor {}",
                    t.tag,
                    next
                );
            }
        }
    }

    #[test]
    fn media_types_are_not_editable() {
        let types = builtin_types();
        for tag in ["image", "video", "divider"] {
            let t = types.iter().find(|t| t.tag == tag).unwrap();
            assert!(!t.editable, "{tag} should not be keyboard-editable");
        }
    }
}

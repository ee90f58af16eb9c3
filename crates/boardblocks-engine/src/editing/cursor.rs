use crate::editing::BlockId;

/// The single active editing/insertion target within a block sequence.
///
/// Invariant: at most one of the three states holds at any time;
/// transitioning to one clears the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// No block open; new content is composed at the end of the sequence.
    Idle,
    /// An existing block is open for edit.
    Editing(BlockId),
    /// A new, not-yet-persisted block is being composed directly after the
    /// given block. `None` anchors the insertion at the end of the sequence.
    PendingInsert { after: Option<BlockId> },
}

impl Cursor {
    /// The block navigation considers "current": the editing target or the
    /// pending-insertion anchor. `None` when there is no current block.
    pub fn current_block(&self) -> Option<BlockId> {
        match self {
            Cursor::Idle => None,
            Cursor::Editing(id) => Some(*id),
            Cursor::PendingInsert { after } => *after,
        }
    }

    /// Whether this cursor has the given block open for edit.
    pub fn is_editing(&self, id: BlockId) -> bool {
        matches!(self, Cursor::Editing(current) if *current == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_block_reports_editing_target_and_pending_anchor() {
        let id = BlockId::new();

        assert_eq!(Cursor::Idle.current_block(), None);
        assert_eq!(Cursor::Editing(id).current_block(), Some(id));
        assert_eq!(
            Cursor::PendingInsert { after: Some(id) }.current_block(),
            Some(id)
        );
        assert_eq!(Cursor::PendingInsert { after: None }.current_block(), None);
    }

    #[test]
    fn is_editing_matches_only_the_open_block() {
        let id = BlockId::new();

        assert!(Cursor::Editing(id).is_editing(id));
        assert!(!Cursor::Editing(id).is_editing(BlockId::new()));
        assert!(!Cursor::Idle.is_editing(id));
        assert!(!Cursor::PendingInsert { after: Some(id) }.is_editing(id));
    }
}

//! Keyboard navigation over the block sequence.
//!
//! ArrowUp/ArrowDown recompute the [`Cursor`] against the current sequence
//! on every key event. Whether a block is a landing candidate comes strictly
//! from its content-type descriptor's `editable` flag; blocks whose type is
//! not registered are skipped. There is no terminal state: the machine runs
//! for the lifetime of the document view, and navigation over an empty
//! sequence (or one without editable candidates) is a no-op, not an error.

use crate::editing::{BlockSequence, Cursor};
use crate::registry::Registry;

/// The two logical key events that drive navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Up,
    Down,
}

/// Compute the cursor resulting from a key press.
pub fn on_arrow(
    key: ArrowKey,
    sequence: &BlockSequence,
    cursor: Cursor,
    registry: &Registry,
) -> Cursor {
    match key {
        ArrowKey::Up => on_arrow_up(sequence, cursor, registry),
        ArrowKey::Down => on_arrow_down(sequence, cursor, registry),
    }
}

/// ArrowUp transition.
///
/// - From a pending insertion after block `y`: edit `y` (clearing the
///   pending insertion).
/// - From idle (including a pending insertion with no anchor): edit the
///   last block of the sequence, or stay idle when the sequence is empty.
/// - While editing block `x`: edit the closest *editable* block before `x`,
///   or stay on `x` when there is none.
pub fn on_arrow_up(sequence: &BlockSequence, cursor: Cursor, registry: &Registry) -> Cursor {
    match cursor {
        Cursor::PendingInsert { after: Some(anchor) } => Cursor::Editing(anchor),
        Cursor::Idle | Cursor::PendingInsert { after: None } => match sequence.last() {
            Some(last) => Cursor::Editing(last.id),
            None => Cursor::Idle,
        },
        Cursor::Editing(current) => {
            let Some(position) = sequence.position(current) else {
                // Block vanished under the cursor (e.g. deleted elsewhere)
                return cursor;
            };
            let previous = sequence.blocks()[..position]
                .iter()
                .rev()
                .find(|b| registry.is_editable(&b.content_type));
            match previous {
                Some(block) => Cursor::Editing(block.id),
                None => cursor,
            }
        }
    }
}

/// ArrowDown transition.
///
/// From any state with a current block (editing target or pending-insertion
/// anchor): edit the first *editable* block after it. When none exists the
/// cursor falls back to idle, the terminal "compose new block" row. A
/// pending insertion is cleared in all cases. Without a current block this
/// is a no-op.
pub fn on_arrow_down(sequence: &BlockSequence, cursor: Cursor, registry: &Registry) -> Cursor {
    let Some(current) = cursor.current_block() else {
        return cursor;
    };
    let Some(position) = sequence.position(current) else {
        return Cursor::Idle;
    };
    let next = sequence.blocks()[position + 1..]
        .iter()
        .find(|b| registry.is_editable(&b.content_type));
    match next {
        Some(block) => Cursor::Editing(block.id),
        None => Cursor::Idle,
    }
}

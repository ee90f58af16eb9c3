/*!
 * # Editing Core Module
 *
 * This module implements the block-sequence editing model:
 *
 * ### 1. Ordered Block Sequence
 * - A board document's content is an ordered list of **Blocks**
 * - Insertion order is display and navigation order
 * - Order changes only through explicit insert/append/move operations,
 *   never implicitly
 *
 * ### 2. Single Editing Cursor
 * - At most one editing target exists at any time: an existing block open
 *   for edit, a pending insertion point after a given block, or idle
 *   (compose at the end of the sequence)
 * - Transitioning to one state clears the others
 *
 * ### 3. Keyboard Navigation State Machine
 * - ArrowUp/ArrowDown recompute the cursor against the current sequence
 * - Whether a block is a landing candidate comes strictly from its
 *   content-type descriptor's `editable` flag; unregistered types are
 *   skipped
 * - The machine is synchronous and runs for the lifetime of the view;
 *   any direct user action (clicking a block) overrides the cursor
 *
 * ### 4. Asynchronous Mutation Protocol
 * - `create`/`modify` round-trip through the [`crate::store::BlockStore`]
 *   collaborator and only advance the cursor on success
 * - After a successful save the cursor becomes a pending insertion after
 *   the saved block and the compose row switches to the descriptor's
 *   successor type (plain text by default)
 * - Failures leave sequence and cursor untouched so the user can retry
 *
 * ## Module Structure
 *
 * - **`block`**: `Block` and `BlockId` types
 * - **`sequence`**: ordered `BlockSequence` with explicit mutation ops
 * - **`cursor`**: the `Cursor` state enum
 * - **`navigation`**: Up/Down transition functions
 * - **`editor`**: `BlocksEditor` composing sequence, cursor, registry and
 *   store into the full protocol
 */

pub mod block;
pub mod cursor;
pub mod editor;
pub mod navigation;
pub mod sequence;

// Public API re-exports
pub use block::{Block, BlockId};
pub use cursor::Cursor;
pub use editor::{BlocksEditor, EditorError};
pub use navigation::ArrowKey;
pub use sequence::BlockSequence;

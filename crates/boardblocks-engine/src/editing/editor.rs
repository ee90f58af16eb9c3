use thiserror::Error;
use tracing::debug;

use crate::editing::navigation::{self, ArrowKey};
use crate::editing::{Block, BlockId, BlockSequence, Cursor};
use crate::registry::{ContentType, Registry, RegistryError};
use crate::store::{BlockStore, StoreError};

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("unknown block: {0}")]
    UnknownBlock(BlockId),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The block-sequence editor for one board document.
///
/// Owns the ordered sequence, the single editing cursor, and the compose-row
/// content type, and drives all mutations through the [`BlockStore`]
/// collaborator. Arrow-key navigation is synchronous; create/modify/move
/// are asynchronous and only advance local state on success, so a failed
/// save leaves the user exactly where they were for a retry.
///
/// The editor issues at most one outstanding store call per user action:
/// every mutation takes `&mut self` across its await point, so a second
/// trigger cannot start until the first resolves. A stale response landing
/// after the user navigated elsewhere is applied last-write-wins; there is
/// no request fencing.
pub struct BlocksEditor<S> {
    registry: Registry,
    store: S,
    sequence: BlockSequence,
    cursor: Cursor,
    /// Content type the compose row will use for the next created block.
    compose_type: String,
}

impl<S: BlockStore> BlocksEditor<S> {
    pub fn new(registry: Registry, store: S) -> Self {
        Self::with_sequence(registry, store, BlockSequence::new())
    }

    /// Editor over an already-loaded block sequence.
    pub fn with_sequence(registry: Registry, store: S, sequence: BlockSequence) -> Self {
        let compose_type = crate::registry::DEFAULT_TYPE.to_string();
        Self {
            registry,
            store,
            sequence,
            cursor: Cursor::Idle,
            compose_type,
        }
    }

    pub fn sequence(&self) -> &BlockSequence {
        &self.sequence
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Content type the next composed block will be created with.
    pub fn compose_type(&self) -> &str {
        &self.compose_type
    }

    /// Handle an ArrowUp/ArrowDown key event.
    pub fn handle_arrow(&mut self, key: ArrowKey) {
        let next = navigation::on_arrow(key, &self.sequence, self.cursor, &self.registry);
        self.set_cursor(next);
    }

    /// Direct user action (clicking a block) overrides the cursor.
    pub fn focus_block(&mut self, id: BlockId) -> Result<(), EditorError> {
        if self.sequence.position(id).is_none() {
            return Err(EditorError::UnknownBlock(id));
        }
        self.set_cursor(Cursor::Editing(id));
        Ok(())
    }

    /// Close any open editing target and return to the compose row.
    pub fn blur(&mut self) {
        self.set_cursor(Cursor::Idle);
    }

    /// Switch the compose row's content type from a slash command. Returns
    /// the matched descriptor, or `None` when no registered command matches
    /// (the compose type is left unchanged).
    pub fn select_slash_command(&mut self, text: &str) -> Option<&ContentType> {
        let matched = self.registry.find_by_slash_command(text);
        if let Some(content_type) = matched {
            self.compose_type = content_type.tag.clone();
        }
        matched
    }

    /// Create a new block with the compose row's content type, anchored at
    /// the pending insertion point when one exists and at the end of the
    /// sequence otherwise.
    ///
    /// On success the cursor becomes a pending insertion after the saved
    /// block and the compose row switches to the descriptor's successor
    /// type. On failure nothing advances and the error is returned for the
    /// caller to surface.
    pub async fn create(&mut self, value: impl Into<String>) -> Result<BlockId, EditorError> {
        let content_type = self.compose_type.clone();
        // Tags only come from the registry, so a miss here is a programming
        // error rather than a user-recoverable condition.
        self.registry.get(&content_type)?;

        let anchor = match self.cursor {
            Cursor::PendingInsert { after } => after,
            _ => None,
        };
        let block = Block::new(content_type, value.into());
        let saved = self.store.create_block(block, anchor).await?;
        debug!(id = %saved.id, content_type = %saved.content_type, "block created");

        self.sequence.insert_after(anchor, saved.clone());
        self.compose_type = self
            .registry
            .next_type_after(&saved.content_type)
            .to_string();
        self.set_cursor(Cursor::PendingInsert {
            after: Some(saved.id),
        });
        Ok(saved.id)
    }

    /// Save an edited payload for an existing block.
    ///
    /// Success continues the compose flow directly after the block, like
    /// `create`. Failure leaves the cursor on the block being edited.
    pub async fn modify(&mut self, id: BlockId, value: impl Into<String>) -> Result<(), EditorError> {
        if self.sequence.position(id).is_none() {
            return Err(EditorError::UnknownBlock(id));
        }
        let saved = self.store.modify_block(id, value.into()).await?;
        debug!(id = %saved.id, "block modified");

        self.sequence.replace(saved.clone());
        self.compose_type = self
            .registry
            .next_type_after(&saved.content_type)
            .to_string();
        self.set_cursor(Cursor::PendingInsert { after: Some(id) });
        Ok(())
    }

    /// Reorder a block within the sequence. The cursor is unaffected.
    pub async fn move_block(
        &mut self,
        id: BlockId,
        before: Option<BlockId>,
        after: Option<BlockId>,
    ) -> Result<(), EditorError> {
        if self.sequence.position(id).is_none() {
            return Err(EditorError::UnknownBlock(id));
        }
        self.store.move_block(id, before, after).await?;

        self.sequence.reorder(id, before, after);
        debug!(id = %id, "block moved");
        Ok(())
    }

    fn set_cursor(&mut self, next: Cursor) {
        if next != self.cursor {
            debug!(from = ?self.cursor, to = ?next, "cursor moved");
            self.cursor = next;
        }
    }
}

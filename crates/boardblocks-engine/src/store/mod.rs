/*!
 * # Block Persistence
 *
 * The editor never persists blocks itself: every create/modify/move
 * round-trips through a [`BlockStore`] collaborator. All operations are
 * asynchronous and fallible, with no automatic retry; the caller surfaces
 * errors and decides whether to try again.
 *
 * Two implementations ship with the engine: [`InMemoryStore`] for tests and
 * demos, and [`FileStore`] which persists a board document to a JSON file
 * after every mutation.
 */

pub mod file;
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::editing::{Block, BlockId};

pub use file::FileStore;
pub use memory::InMemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("block not found: {0}")]
    NotFound(BlockId),
    #[error("board file error: {0}")]
    BoardFile(#[from] crate::io::IoError),
    #[error("store rejected the operation: {0}")]
    Rejected(String),
}

/// Abstraction over block persistence for testability.
///
/// Real implementations: [`FileStore`], [`InMemoryStore`]. Tests inject
/// failing doubles to exercise the no-advance-on-failure contract.
#[async_trait]
pub trait BlockStore: Send + Sync {
    /// Persist a new block directly after `after` (at the end of the
    /// document when `None`) and return it as stored.
    async fn create_block(&self, block: Block, after: Option<BlockId>)
        -> Result<Block, StoreError>;

    /// Replace the payload of an existing block and return it as stored.
    async fn modify_block(&self, id: BlockId, value: String) -> Result<Block, StoreError>;

    /// Reorder a block: place it directly before `before`, or directly
    /// after `after` when `before` is `None`. Both `None` moves it to the
    /// end.
    async fn move_block(
        &self,
        id: BlockId,
        before: Option<BlockId>,
        after: Option<BlockId>,
    ) -> Result<(), StoreError>;
}

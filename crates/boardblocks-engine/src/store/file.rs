use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::editing::{Block, BlockId, BlockSequence};
use crate::io;
use crate::models::BoardDocument;
use crate::store::{BlockStore, StoreError};

/// Block store that persists a board document to its `.board.json` file
/// after every mutation.
///
/// The document is held in memory and written back whole; mutations are
/// serialized by the inner lock and applied to a working copy that only
/// replaces the held document once the write succeeds, so a failed save
/// leaves the store agreeing with disk and a retry cannot duplicate the
/// block. One store instance owns one board file.
pub struct FileStore {
    path: PathBuf,
    board: Mutex<BoardDocument>,
}

impl FileStore {
    /// Open an existing board file.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let board = io::load_board(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            board: Mutex::new(board),
        })
    }

    /// Create a new board file with the given title.
    pub fn create(path: &Path, title: &str) -> Result<Self, StoreError> {
        let board = BoardDocument::new(title);
        io::save_board(path, &board)?;
        Ok(Self {
            path: path.to_path_buf(),
            board: Mutex::new(board),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of the persisted document.
    pub fn board(&self) -> BoardDocument {
        self.board.lock().unwrap().clone()
    }

    fn persist(&self, board: &BoardDocument) -> Result<(), StoreError> {
        io::save_board(&self.path, board)?;
        debug!(path = %self.path.display(), blocks = board.blocks.len(), "board saved");
        Ok(())
    }
}

#[async_trait]
impl BlockStore for FileStore {
    async fn create_block(
        &self,
        block: Block,
        after: Option<BlockId>,
    ) -> Result<Block, StoreError> {
        let mut board = self.board.lock().unwrap();
        let mut working = board.clone();
        let mut sequence = BlockSequence::from_blocks(std::mem::take(&mut working.blocks));
        sequence.insert_after(after, block.clone());
        working.blocks = sequence.into_blocks();
        self.persist(&working)?;
        *board = working;
        Ok(block)
    }

    async fn modify_block(&self, id: BlockId, value: String) -> Result<Block, StoreError> {
        let mut board = self.board.lock().unwrap();
        let mut working = board.clone();
        let Some(existing) = working.blocks.iter_mut().find(|b| b.id == id) else {
            return Err(StoreError::NotFound(id));
        };
        existing.value = value;
        let updated = existing.clone();
        self.persist(&working)?;
        *board = working;
        Ok(updated)
    }

    async fn move_block(
        &self,
        id: BlockId,
        before: Option<BlockId>,
        after: Option<BlockId>,
    ) -> Result<(), StoreError> {
        let mut board = self.board.lock().unwrap();
        let mut working = board.clone();
        let mut sequence = BlockSequence::from_blocks(std::mem::take(&mut working.blocks));
        if !sequence.reorder(id, before, after) {
            return Err(StoreError::NotFound(id));
        }
        working.blocks = sequence.into_blocks();
        self.persist(&working)?;
        *board = working;
        Ok(())
    }
}

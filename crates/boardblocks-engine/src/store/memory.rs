use std::sync::Mutex;

use async_trait::async_trait;

use crate::editing::{Block, BlockId, BlockSequence};
use crate::store::{BlockStore, StoreError};

/// Block store backed by an in-process sequence. Used by tests and demos
/// where no board file exists.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    blocks: Mutex<BlockSequence>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the stored sequence, in persisted order.
    pub fn blocks(&self) -> Vec<Block> {
        self.blocks.lock().unwrap().blocks().to_vec()
    }
}

#[async_trait]
impl BlockStore for InMemoryStore {
    async fn create_block(
        &self,
        block: Block,
        after: Option<BlockId>,
    ) -> Result<Block, StoreError> {
        let mut blocks = self.blocks.lock().unwrap();
        blocks.insert_after(after, block.clone());
        Ok(block)
    }

    async fn modify_block(&self, id: BlockId, value: String) -> Result<Block, StoreError> {
        let mut blocks = self.blocks.lock().unwrap();
        let Some(existing) = blocks.get(id) else {
            return Err(StoreError::NotFound(id));
        };
        let mut updated = existing.clone();
        updated.value = value;
        blocks.replace(updated.clone());
        Ok(updated)
    }

    async fn move_block(
        &self,
        id: BlockId,
        before: Option<BlockId>,
        after: Option<BlockId>,
    ) -> Result<(), StoreError> {
        let mut blocks = self.blocks.lock().unwrap();
        if !blocks.reorder(id, before, after) {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_then_modify_round_trips() {
        let store = InMemoryStore::new();

        let created = store.create_block(Block::new("text", "hello"), None).await.unwrap();
        let modified = store
            .modify_block(created.id, "hello world".to_string())
            .await
            .unwrap();

        assert_eq!(modified.id, created.id);
        assert_eq!(modified.value, "hello world");
        assert_eq!(store.blocks()[0].value, "hello world");
    }

    #[tokio::test]
    async fn modify_unknown_block_fails() {
        let store = InMemoryStore::new();

        let result = store.modify_block(BlockId::new(), "x".to_string()).await;

        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn move_after_places_block_behind_anchor() {
        let store = InMemoryStore::new();
        let a = store.create_block(Block::new("text", "a"), None).await.unwrap();
        let b = store.create_block(Block::new("text", "b"), None).await.unwrap();
        let c = store.create_block(Block::new("text", "c"), None).await.unwrap();

        store.move_block(c.id, None, Some(a.id)).await.unwrap();

        let order: Vec<BlockId> = store.blocks().iter().map(|blk| blk.id).collect();
        assert_eq!(order, vec![a.id, c.id, b.id]);
    }
}

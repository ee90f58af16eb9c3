use serde::{Deserialize, Serialize};

use crate::editing::{Block, BlockId};

/// Ordered sequence of blocks for one board document.
///
/// Insertion order is the display and navigation order. Order is mutated
/// only by the explicit operations below, never reordered implicitly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockSequence {
    blocks: Vec<Block>,
}

impl BlockSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Index of the block with the given id within the sequence.
    pub fn position(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    pub fn last(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// Append a block at the end of the sequence.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Insert a block directly after `after`, or at the end when `after`
    /// is `None` or no longer present in the sequence.
    pub fn insert_after(&mut self, after: Option<BlockId>, block: Block) {
        match after.and_then(|id| self.position(id)) {
            Some(index) => self.blocks.insert(index + 1, block),
            None => self.blocks.push(block),
        }
    }

    /// Replace the block with the same id. Returns false when the id is not
    /// present (the sequence is left unchanged).
    pub fn replace(&mut self, block: Block) -> bool {
        match self.position(block.id) {
            Some(index) => {
                self.blocks[index] = block;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: BlockId) -> Option<Block> {
        self.position(id).map(|index| self.blocks.remove(index))
    }

    /// Move a block so it sits directly before `before` (or at the end when
    /// `before` is `None`). Returns false when `id` is not in the sequence.
    pub fn move_before(&mut self, id: BlockId, before: Option<BlockId>) -> bool {
        let Some(block) = self.remove(id) else {
            return false;
        };
        match before.and_then(|b| self.position(b)) {
            Some(index) => self.blocks.insert(index, block),
            None => self.blocks.push(block),
        }
        true
    }

    /// Reorder a block: place it directly before `before`, directly after
    /// `after` when `before` is `None`, or at the end when both anchors are
    /// `None`. Returns false when `id` is not in the sequence.
    pub fn reorder(
        &mut self,
        id: BlockId,
        before: Option<BlockId>,
        after: Option<BlockId>,
    ) -> bool {
        if before.is_some() {
            self.move_before(id, before)
        } else if let Some(anchor) = after {
            match self.remove(id) {
                Some(moved) => {
                    self.insert_after(Some(anchor), moved);
                    true
                }
                None => false,
            }
        } else {
            self.move_before(id, None)
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = BlockId> + '_ {
        self.blocks.iter().map(|b| b.id)
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }
}

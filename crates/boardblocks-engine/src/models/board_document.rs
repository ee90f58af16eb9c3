use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::editing::{Block, BlockSequence};

/// A board document: title plus its ordered block content.
///
/// This is the on-disk shape of a board file. Block order in `blocks` is
/// the display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardDocument {
    pub id: Uuid,
    pub title: String,
    pub blocks: Vec<Block>,
}

impl BoardDocument {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    /// The document's content as an editable sequence.
    pub fn sequence(&self) -> BlockSequence {
        BlockSequence::from_blocks(self.blocks.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::Block;

    #[test]
    fn json_round_trip_preserves_block_order() {
        let mut doc = BoardDocument::new("Sprint 12");
        doc.blocks.push(Block::new("h1", "Sprint 12"));
        doc.blocks.push(Block::new("text", "Goals for this sprint"));
        doc.blocks.push(Block::new("image", "burndown.png"));

        let json = serde_json::to_string_pretty(&doc).unwrap();
        let parsed: BoardDocument = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, doc);
    }
}

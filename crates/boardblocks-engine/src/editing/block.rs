use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a block, unique within a board document.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub Uuid);

impl BlockId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single content unit within a board document.
///
/// The `value` payload is type-specific (markdown text for text blocks, a
/// file reference for media blocks) and opaque to the sequence model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    /// Content-type tag, a key into the [`crate::registry::Registry`].
    pub content_type: String,
    pub value: String,
}

impl Block {
    /// Create a new block with a fresh identifier.
    pub fn new(content_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: BlockId::new(),
            content_type: content_type.into(),
            value: value.into(),
        }
    }
}

pub mod editing;
pub mod io;
pub mod models;
pub mod registry;
pub mod store;

// Re-export key types for easier usage
pub use editing::{ArrowKey, Block, BlockId, BlockSequence, BlocksEditor, Cursor, EditorError};
pub use models::{BoardDocument, BoardFile};
pub use registry::{ContentType, Registry, RegistryError};
pub use store::{BlockStore, FileStore, InMemoryStore, StoreError};

pub mod board_document;
pub mod board_file;

pub use board_document::BoardDocument;
pub use board_file::BoardFile;

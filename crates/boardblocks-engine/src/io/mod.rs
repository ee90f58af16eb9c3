use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{BoardDocument, BoardFile};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Board file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse board file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid boards directory: {0}")]
    InvalidBoardsDir(String),
}

/// Load a board document from a `.board.json` file.
pub fn load_board(path: &Path) -> Result<BoardDocument, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| IoError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a board document to disk, creating parent directories if needed.
pub fn save_board(path: &Path, board: &BoardDocument) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(board).map_err(|source| IoError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, content)?;
    Ok(())
}

/// Scan a boards directory for `*.board.json` files, sorted by path.
pub fn scan_board_files(boards_root: &Path) -> Result<Vec<BoardFile>, IoError> {
    validate_boards_dir(boards_root)?;

    let mut paths = Vec::new();
    scan_directory_recursive(boards_root, &mut paths)?;
    paths.sort();
    Ok(paths.into_iter().map(BoardFile::new).collect())
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(".board.json"))
        {
            files.push(path);
        }
    }
    Ok(())
}

pub fn validate_boards_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidBoardsDir(
            "Directory does not exist".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::Block;
    use tempfile::TempDir;

    fn write_board(dir: &TempDir, name: &str, board: &BoardDocument) -> PathBuf {
        let path = dir.path().join(name);
        save_board(&path, board).unwrap();
        path
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut board = BoardDocument::new("Backlog");
        board.blocks.push(Block::new("text", "triage inbox"));

        let path = write_board(&dir, "backlog.board.json", &board);
        let loaded = load_board(&path).unwrap();

        assert_eq!(loaded, board);
    }

    #[test]
    fn load_missing_file_reports_not_found() {
        let dir = TempDir::new().unwrap();
        let result = load_board(&dir.path().join("missing.board.json"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn load_rejects_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.board.json");
        fs::write(&path, "{not json").unwrap();

        let result = load_board(&path);
        assert!(matches!(result, Err(IoError::Parse { .. })));
    }

    #[test]
    fn scan_finds_only_board_files_recursively() {
        let dir = TempDir::new().unwrap();
        write_board(&dir, "a.board.json", &BoardDocument::new("A"));
        write_board(&dir, "nested/b.board.json", &BoardDocument::new("B"));
        fs::write(dir.path().join("notes.json"), "{}").unwrap();
        fs::write(dir.path().join("readme.md"), "# hi").unwrap();

        let files = scan_board_files(dir.path()).unwrap();

        let names: Vec<&str> = files.iter().map(|f| f.display_name()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn scan_invalid_directory_fails() {
        let result = scan_board_files(Path::new("/this/path/does/not/exist"));
        assert!(matches!(result, Err(IoError::InvalidBoardsDir(_))));
    }
}

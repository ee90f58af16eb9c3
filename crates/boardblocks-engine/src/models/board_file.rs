use std::path::{Path, PathBuf};

/// A board file on disk with a display-friendly name.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardFile {
    path: PathBuf,
    display_name: String,
}

impl BoardFile {
    pub fn new(path: PathBuf) -> Self {
        let display_name = Self::extract_display_name(&path);
        Self { path, display_name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name without the `.board.json` extension.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    fn extract_display_name(path: &Path) -> String {
        path.file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.strip_suffix(".board.json").unwrap_or(name))
            .unwrap_or("Untitled")
            .to_string()
    }
}

impl From<PathBuf> for BoardFile {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_strips_board_extension() {
        let file = BoardFile::new(PathBuf::from("/boards/roadmap.board.json"));
        assert_eq!(file.display_name(), "roadmap");
    }

    #[test]
    fn display_name_keeps_other_extensions() {
        let file = BoardFile::new(PathBuf::from("/boards/notes.json"));
        assert_eq!(file.display_name(), "notes.json");
    }
}

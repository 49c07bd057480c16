use std::collections::BTreeMap;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::model::NoteRecord;
use crate::utils::normalize_note_path;

/// Abstract interface for the note collection a panel lists from.
pub trait NoteSource: Send + Sync {
    /// Every markdown note known to the source.
    fn list_notes(&self) -> Vec<NoteRecord>;

    /// Read the entire contents of a note into a string.
    fn read_content(&self, path: &str) -> std::io::Result<String>;
}

/// Notes stored as `.md` files under a directory on disk.
pub struct PhysicalVault {
    root: PathBuf,
}

impl PhysicalVault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl NoteSource for PhysicalVault {
    fn list_notes(&self) -> Vec<NoteRecord> {
        let mut notes = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext == "md" {
                        if let Ok(relative) = path.strip_prefix(&self.root) {
                            notes.push(NoteRecord::from_path(normalize_note_path(relative)));
                        }
                    }
                }
            }
        }

        notes
    }

    fn read_content(&self, path: &str) -> std::io::Result<String> {
        std::fs::read_to_string(self.root.join(path))
    }
}

/// In-memory note source keyed by note path.
#[derive(Debug, Clone, Default)]
pub struct MemoryVault {
    notes: BTreeMap<String, String>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.notes.insert(path.into(), content.into());
    }

    pub fn remove(&mut self, path: &str) -> Option<String> {
        self.notes.remove(path)
    }
}

impl NoteSource for MemoryVault {
    fn list_notes(&self) -> Vec<NoteRecord> {
        self.notes.keys().map(|path| NoteRecord::from_path(path.as_str())).collect()
    }

    fn read_content(&self, path: &str) -> std::io::Result<String> {
        self.notes.get(path).cloned().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, format!("no note at {}", path))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_physical_vault_lists_markdown_only() {
        let temp_dir = TempDir::new().unwrap();
        let book = temp_dir.path().join("book");
        fs::create_dir_all(book.join("extras")).unwrap();
        fs::write(book.join("T1.md"), "# One").unwrap();
        fs::write(book.join("cover.png"), "").unwrap();
        fs::write(book.join("extras").join("notes.md"), "").unwrap();

        let vault = PhysicalVault::new(temp_dir.path());
        let mut paths: Vec<_> = vault.list_notes().into_iter().map(|n| n.path).collect();
        paths.sort();
        assert_eq!(paths, vec!["book/T1.md", "book/extras/notes.md"]);

        assert_eq!(vault.read_content("book/T1.md").unwrap(), "# One");
        assert!(vault.read_content("book/missing.md").is_err());
    }

    #[test]
    fn test_memory_vault() {
        let mut vault = MemoryVault::new();
        vault.insert("a/b.md", "# B");
        assert_eq!(vault.list_notes()[0].basename, "b");
        assert_eq!(vault.read_content("a/b.md").unwrap(), "# B");
        assert_eq!(
            vault.read_content("a/c.md").unwrap_err().kind(),
            std::io::ErrorKind::NotFound
        );
        vault.remove("a/b.md");
        assert!(vault.list_notes().is_empty());
    }
}

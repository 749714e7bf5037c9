//! File dialog utilities

use std::path::{Path, PathBuf};

const BOOK_EXTENSIONS: &[&str] = &["epub", "mobi", "azw3", "pdf", "txt"];

/// Open a file picker for a book, starting next to `initial_path` when it points somewhere real
pub fn pick_book(initial_path: &str) -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new()
        .set_title("Select Your Book")
        .add_filter("E-books", BOOK_EXTENSIONS)
        .add_filter("All files", &["*"]);

    if let Some(dir) = starting_directory(initial_path) {
        dialog = dialog.set_directory(dir);
    }

    dialog.pick_file()
}

fn starting_directory(initial_path: &str) -> Option<&Path> {
    let trimmed = initial_path.trim();
    if trimmed.is_empty() {
        return None;
    }
    let path = Path::new(trimmed);
    if path.is_dir() {
        return Some(path);
    }
    path.parent().filter(|parent| parent.is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_has_no_start_directory() {
        assert!(starting_directory("").is_none());
        assert!(starting_directory("   ").is_none());
    }

    #[test]
    fn file_path_starts_in_its_parent() {
        let dir = std::env::temp_dir();
        let book = dir.join("wordhint-missing-book.epub");
        let book = book.to_string_lossy().to_string();
        assert_eq!(starting_directory(&book), Some(dir.as_path()));
    }

    #[test]
    fn bare_file_name_has_no_start_directory() {
        assert!(starting_directory("novel.epub").is_none());
    }
}

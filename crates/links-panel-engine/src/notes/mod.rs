//! File-system note store used by hosts that keep notes as `.md` files,
//! plus resolution of wikilink targets to those files.

mod markdown_file;

pub use markdown_file::MarkdownFile;

use markdown_file::strip_md_extension;
use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum NotesError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
}

/// A directory of markdown notes.
#[derive(Debug, Clone)]
pub struct NotesDir {
    root: PathBuf,
}

impl NotesDir {
    /// Opens `root`, which must be an existing directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, NotesError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(NotesError::InvalidNotesDir(format!(
                "{} is not a directory",
                root.display()
            )));
        }
        Ok(Self { root })
    }

    /// All `.md` files under the root, sorted by relative path.
    pub fn scan(&self) -> Result<Vec<MarkdownFile>, NotesError> {
        let mut paths = Vec::new();
        scan_directory_recursive(&self.root, &mut paths)?;

        let mut files: Vec<MarkdownFile> = paths
            .iter()
            .filter_map(|path| path.strip_prefix(&self.root).ok())
            .filter_map(|relative| RelativePathBuf::from_path(relative).ok())
            .map(MarkdownFile::new)
            .collect();
        files.sort_by(|a, b| a.relative_path().cmp(b.relative_path()));
        Ok(files)
    }

    pub fn read(&self, file: &MarkdownFile) -> Result<String, NotesError> {
        let absolute_path = file.relative_path().to_path(&self.root);
        if !absolute_path.exists() {
            return Err(NotesError::NotFound(absolute_path));
        }
        Ok(fs::read_to_string(&absolute_path)?)
    }

    /// Finds the note a wikilink target points at.
    pub fn resolve(&self, target: &str) -> Result<Option<MarkdownFile>, NotesError> {
        Ok(self
            .scan()?
            .into_iter()
            .find(|file| file.matches_target(target)))
    }
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), NotesError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
        {
            files.push(path);
        }
    }
    Ok(())
}

/// The note part of a wikilink target, without `#heading` or `#^block`
/// anchors and surrounding whitespace.
pub fn link_target_note(target: &str) -> &str {
    target.split('#').next().unwrap_or(target).trim()
}

/// Whether `target` names the note at relative `path`.
///
/// Comparison is case-insensitive and ignores a `.md` extension on either
/// side. A target containing `/` must match the whole relative path; a bare
/// name matches the file name in any folder.
pub fn target_matches_path(target: &str, path: &str) -> bool {
    let wanted = strip_md_extension(link_target_note(target)).to_lowercase();
    if wanted.is_empty() {
        return false;
    }

    let path = strip_md_extension(path);
    let candidate = if wanted.contains('/') {
        path
    } else {
        path.rsplit('/').next().unwrap_or(path)
    };
    candidate.to_lowercase() == wanted
}

/// Returns the first of `paths` that `target` resolves to.
pub fn resolve_wikilink<'a, S: AsRef<str>>(target: &str, paths: &'a [S]) -> Option<&'a S> {
    paths
        .iter()
        .find(|path| target_matches_path(target, path.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_file, create_test_notes_dir};

    #[test]
    fn test_scan_finds_nested_markdown_files() {
        // Given a notes directory with markdown files in folders
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "b.md", "## Links\n[[a]]");
        create_test_file(&notes_dir, "folder/a.md", "- item");
        create_test_file(&notes_dir, "ignored.txt", "not markdown");

        // When scanning
        let notes = NotesDir::open(notes_dir.path()).unwrap();
        let files = notes.scan().unwrap();

        // Then only markdown files are returned, sorted
        let paths: Vec<_> = files.iter().map(|f| f.relative_path().as_str()).collect();
        assert_eq!(paths, vec!["b.md", "folder/a.md"]);
    }

    #[test]
    fn test_read_returns_content() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "note.md", "## Links\n[[x]]");

        let notes = NotesDir::open(notes_dir.path()).unwrap();
        let content = notes.read(&MarkdownFile::from("note.md")).unwrap();

        assert_eq!(content, "## Links\n[[x]]");
    }

    #[test]
    fn test_read_missing_file() {
        let notes_dir = create_test_notes_dir();
        let notes = NotesDir::open(notes_dir.path()).unwrap();

        let result = notes.read(&MarkdownFile::from("gone.md"));

        assert!(matches!(result, Err(NotesError::NotFound(_))));
    }

    #[test]
    fn test_open_invalid_directory() {
        let result = NotesDir::open("/this/path/does/not/exist");
        assert!(matches!(result, Err(NotesError::InvalidNotesDir(_))));
    }

    #[test]
    fn test_resolve_finds_linked_note() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "projects/My Page.md", "");
        create_test_file(&notes_dir, "other.md", "");

        let notes = NotesDir::open(notes_dir.path()).unwrap();

        let found = notes.resolve("my page#Heading").unwrap();
        assert_eq!(
            found.map(|f| f.relative_path().to_owned()),
            Some(RelativePathBuf::from("projects/My Page.md"))
        );
        assert!(notes.resolve("Missing").unwrap().is_none());
    }

    #[test]
    fn test_resolve_wikilink_exact_match() {
        let paths = ["notes/My Page.md", "journal/2024_01_01.md"];
        assert_eq!(resolve_wikilink("My Page", &paths), Some(&"notes/My Page.md"));
    }

    #[test]
    fn test_resolve_wikilink_case_insensitive_with_extension() {
        let paths = ["Notes/my page.md".to_string(), "docs/README.md".to_string()];
        assert_eq!(
            resolve_wikilink("MY PAGE", &paths).map(String::as_str),
            Some("Notes/my page.md")
        );
        assert_eq!(
            resolve_wikilink("readme.MD", &paths).map(String::as_str),
            Some("docs/README.md")
        );
    }

    #[test]
    fn test_resolve_wikilink_with_folder() {
        let paths = ["a/Index.md", "b/Index.md"];
        assert_eq!(resolve_wikilink("b/index", &paths), Some(&"b/Index.md"));
        assert_eq!(resolve_wikilink("c/index", &paths), None);
    }

    #[test]
    fn test_block_and_empty_targets() {
        assert_eq!(link_target_note("Note#^block-id"), "Note");
        assert_eq!(link_target_note(" Note "), "Note");
        assert!(!target_matches_path("#Heading only", "Heading only.md"));
        assert!(!target_matches_path("", "x.md"));
    }
}

use relative_path::{RelativePath, RelativePathBuf};

/// A markdown note inside a notes directory, addressed by relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownFile {
    relative_path: RelativePathBuf,
    display_name: String,
}

impl MarkdownFile {
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = relative_path
            .file_name()
            .map(strip_md_extension)
            .unwrap_or("Untitled")
            .to_string();

        Self {
            relative_path,
            display_name,
        }
    }

    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// File name without the `.md` extension.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Whether a wikilink target refers to this note.
    pub fn matches_target(&self, target: &str) -> bool {
        super::target_matches_path(target, self.relative_path.as_str())
    }
}

impl From<RelativePathBuf> for MarkdownFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for MarkdownFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}

/// Strips a trailing `.md` (any case).
pub(crate) fn strip_md_extension(name: &str) -> &str {
    let len = name.len();
    if len >= 3 && name.is_char_boundary(len - 3) && name[len - 3..].eq_ignore_ascii_case(".md") {
        &name[..len - 3]
    } else {
        name
    }
}

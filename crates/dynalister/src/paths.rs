//! Where exported documents land on disk.

use std::path::{Path, PathBuf};

use crate::types::FileEntry;

/// Title Dynalist gives the top-level folder nobody named.
pub const UNTITLED: &str = "Untitled";

/// Directory for a file whose ancestors are `ancestors`, under `output_root`.
///
/// Each ancestor title becomes one path segment, except that a leading
/// `"Untitled"` folder is dropped. Titles pass through [`sanitize_segment`].
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use dynalister::{FileEntry, full_path};
///
/// let untitled = FileEntry::folder("1", "Untitled");
/// let foo = FileEntry::folder("2", "Foo");
/// assert_eq!(full_path("out", &[&untitled, &foo]), PathBuf::from("out/Foo"));
///
/// let diary = FileEntry::folder("3", "Diary");
/// assert_eq!(full_path("out", &[&diary]), PathBuf::from("out/Diary"));
///
/// assert_eq!(full_path("out", &[]), PathBuf::from("out/"));
/// ```
pub fn full_path(output_root: impl AsRef<Path>, ancestors: &[&FileEntry]) -> PathBuf {
    let mut path = output_root.as_ref().to_path_buf();
    for (i, entry) in ancestors.iter().enumerate() {
        if i == 0 && entry.title == UNTITLED {
            continue;
        }
        path.push(sanitize_segment(&entry.title));
    }
    path
}

/// File name for an exported document: `<title>.md`.
pub fn document_file_name(title: &str) -> String {
    format!("{}.md", sanitize_segment(title))
}

/// Make a title safe to use as a single path segment.
///
/// Separators and NUL become `-`. Titles that would still mean something
/// special to the filesystem (empty, `.`, `..`) become `_`.
pub fn sanitize_segment(title: &str) -> String {
    let segment = title.replace(['/', '\\', '\0'], "-");
    match segment.as_str() {
        "" | "." | ".." => "_".to_string(),
        _ => segment,
    }
}

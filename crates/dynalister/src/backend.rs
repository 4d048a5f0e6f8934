use crate::error::Result;
use crate::types::{DocumentItem, FileEntry};

/// Source of file and document records.
///
/// Implement this over whatever actually talks to Dynalist; the
/// `dynalister-api` crate provides an HTTP implementation.
pub trait Backend {
    /// Every file and folder the account can see, in any order.
    fn list_files(&self) -> Result<Vec<FileEntry>>;

    /// Every item in one document, in any order.
    fn read_document(&self, file_id: &str) -> Result<Vec<DocumentItem>>;

    /// Append an item to the account's inbox.
    fn add_to_inbox(&self, item: &InboxItem) -> Result<()>;
}

/// A new inbox entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboxItem {
    pub content: String,
    pub note: Option<String>,
    pub checked: bool,
    /// Position within the inbox; `None` appends, `-1` also appends.
    pub index: Option<i64>,
}

impl InboxItem {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn at_index(mut self, index: i64) -> Self {
        self.index = Some(index);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inbox_item_builder() {
        let item = InboxItem::new("Call the landlord")
            .with_note("about the heating")
            .with_checked(true)
            .at_index(0);
        assert_eq!(item.content, "Call the landlord");
        assert_eq!(item.note.as_deref(), Some("about the heating"));
        assert!(item.checked);
        assert_eq!(item.index, Some(0));
    }

    #[test]
    fn test_inbox_item_defaults() {
        let item = InboxItem::new("x");
        assert!(item.note.is_none());
        assert!(!item.checked);
        assert!(item.index.is_none());
    }
}

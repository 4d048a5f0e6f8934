use dynalister::{Backend, DocumentItem, Error, FileEntry, InboxItem, Result};
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Default)]
pub struct FakeBackend {
    pub files: Vec<FileEntry>,
    pub documents: HashMap<String, Vec<DocumentItem>>,
    pub inbox: RefCell<Vec<InboxItem>>,
}

impl Backend for FakeBackend {
    fn list_files(&self) -> Result<Vec<FileEntry>> {
        Ok(self.files.clone())
    }

    fn read_document(&self, file_id: &str) -> Result<Vec<DocumentItem>> {
        self.documents
            .get(file_id)
            .cloned()
            .ok_or_else(|| Error::backend(format!("NotFound: {}", file_id)))
    }

    fn add_to_inbox(&self, item: &InboxItem) -> Result<()> {
        self.inbox.borrow_mut().push(item.clone());
        Ok(())
    }
}

/// Untitled/{Inbox, Projects/{Garden}}
pub fn sample() -> FakeBackend {
    let files = vec![
        FileEntry::folder("root", "Untitled").with_children(["inbox", "projects"]),
        FileEntry::document("inbox", "Inbox"),
        FileEntry::folder("projects", "Projects").with_children(["garden"]),
        FileEntry::document("garden", "Garden"),
    ];

    let mut documents = HashMap::new();
    documents.insert(
        "inbox".to_string(),
        vec![
            DocumentItem::new("root", "Inbox").with_children(["a"]),
            DocumentItem::new("a", "Sort receipts"),
        ],
    );
    documents.insert(
        "garden".to_string(),
        vec![
            DocumentItem::new("root", "Garden").with_children(["t"]),
            DocumentItem::new("t", "Tomatoes").with_children(["t1"]),
            DocumentItem::new("t1", "Stake them").with_note("before June"),
        ],
    );

    FakeBackend {
        files,
        documents,
        ..Default::default()
    }
}

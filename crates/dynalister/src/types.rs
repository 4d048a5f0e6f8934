use serde::{Deserialize, Serialize};

use crate::node::Node;

// ============================================================================
// Files
// ============================================================================

/// One entry of the file/folder hierarchy, as returned by `file/list`.
///
/// # JSON shape
///
/// ```json
/// {
///   "id": "Xk3kx9pb1f2",
///   "title": "Journal",
///   "type": "folder",
///   "permission": 4,
///   "collapsed": false,
///   "children": ["c0ffee", "bada55"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
    pub permission: Permission,
    #[serde(default, skip_serializing_if = "is_false")]
    pub collapsed: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
}

impl FileEntry {
    /// A document with owner permission and no children.
    pub fn document(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::with_kind(id, title, FileKind::Document)
    }

    /// A folder with owner permission and no children.
    pub fn folder(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::with_kind(id, title, FileKind::Folder)
    }

    fn with_kind(id: impl Into<String>, title: impl Into<String>, kind: FileKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            permission: Permission::Owner,
            collapsed: false,
            children: Vec::new(),
        }
    }

    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_document(&self) -> bool {
        self.kind == FileKind::Document
    }
}

impl Node for FileEntry {
    fn node_id(&self) -> &str {
        &self.id
    }

    fn node_children(&self) -> &[String] {
        &self.children
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Document,
    Folder,
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileKind::Document => write!(f, "document"),
            FileKind::Folder => write!(f, "folder"),
        }
    }
}

/// Access level on a file, ordered from least to most privileged.
///
/// Encoded as a bare integer (`0`–`4`) on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Permission {
    NoAccess,
    ReadOnly,
    Edit,
    Manage,
    Owner,
}

impl From<Permission> for u8 {
    fn from(p: Permission) -> u8 {
        match p {
            Permission::NoAccess => 0,
            Permission::ReadOnly => 1,
            Permission::Edit => 2,
            Permission::Manage => 3,
            Permission::Owner => 4,
        }
    }
}

impl TryFrom<u8> for Permission {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Permission::NoAccess),
            1 => Ok(Permission::ReadOnly),
            2 => Ok(Permission::Edit),
            3 => Ok(Permission::Manage),
            4 => Ok(Permission::Owner),
            other => Err(format!("unknown permission level {}", other)),
        }
    }
}

// ============================================================================
// Documents
// ============================================================================

/// One outline item inside a document, as returned by `doc/read`.
///
/// Dynalist sends `"note": ""` for items without a note; [`DocumentItem::note`]
/// treats that the same as a missing note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentItem {
    pub id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub checked: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub collapsed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
}

impl DocumentItem {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            note: None,
            checked: false,
            collapsed: false,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }

    /// The note text, if there is a non-empty one.
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref().filter(|n| !n.is_empty())
    }
}

impl Node for DocumentItem {
    fn node_id(&self) -> &str {
        &self.id
    }

    fn node_children(&self) -> &[String] {
        &self.children
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_entry_from_api_json() {
        let json = r#"{
            "id": "f1",
            "title": "Journal",
            "type": "folder",
            "permission": 4,
            "collapsed": true,
            "children": ["f2", "f3"]
        }"#;
        let entry: FileEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "f1");
        assert_eq!(entry.kind, FileKind::Folder);
        assert_eq!(entry.permission, Permission::Owner);
        assert!(entry.collapsed);
        assert_eq!(entry.node_children(), ["f2", "f3"]);
    }

    #[test]
    fn test_file_entry_optional_fields() {
        let json = r#"{"id": "d1", "title": "Todo", "type": "document", "permission": 1}"#;
        let entry: FileEntry = serde_json::from_str(json).unwrap();
        assert!(entry.is_document());
        assert!(!entry.collapsed);
        assert!(entry.children.is_empty());
        assert_eq!(entry.permission, Permission::ReadOnly);
    }

    #[test]
    fn test_unknown_permission_rejected() {
        let json = r#"{"id": "d1", "title": "Todo", "type": "document", "permission": 9}"#;
        let err = serde_json::from_str::<FileEntry>(json).unwrap_err();
        assert!(err.to_string().contains("unknown permission level 9"));
    }

    #[test]
    fn test_missing_permission_rejected() {
        let json = r#"{"id": "d1", "title": "Todo", "type": "document"}"#;
        let err = serde_json::from_str::<FileEntry>(json).unwrap_err();
        assert!(err.to_string().contains("missing field `permission`"));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let json = r#"{"id": "x", "title": "X", "type": "spreadsheet", "permission": 4}"#;
        assert!(serde_json::from_str::<FileEntry>(json).is_err());
    }

    #[test]
    fn test_permission_ordering() {
        assert!(Permission::Owner > Permission::Manage);
        assert!(Permission::ReadOnly > Permission::NoAccess);
        assert_eq!(u8::from(Permission::Edit), 2);
    }

    #[test]
    fn test_document_item_from_api_json() {
        let json = r#"{
            "id": "n1",
            "content": "Buy milk",
            "note": "",
            "checked": true,
            "parent": "root",
            "created": 1600000000000,
            "modified": 1600000000000
        }"#;
        let item: DocumentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.content, "Buy milk");
        assert!(item.checked);
        assert_eq!(item.parent.as_deref(), Some("root"));
        assert!(item.note().is_none());
        assert!(item.node_children().is_empty());
    }

    #[test]
    fn test_document_item_note() {
        let item = DocumentItem::new("n1", "Call").with_note("ask about the lease");
        assert_eq!(item.note(), Some("ask about the lease"));
    }

    #[test]
    fn test_file_kind_display() {
        assert_eq!(FileKind::Document.to_string(), "document");
        assert_eq!(FileKind::Folder.to_string(), "folder");
    }

    #[test]
    fn test_file_entry_serializes_wire_names() {
        let entry = FileEntry::folder("f1", "Work").with_children(["d1"]);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "folder");
        assert_eq!(json["permission"], 4);
        assert_eq!(json["children"][0], "d1");
        assert!(json.get("collapsed").is_none());
    }
}

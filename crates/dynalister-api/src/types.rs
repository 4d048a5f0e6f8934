//! Request and response bodies for the Dynalist API.

use dynalister::{DocumentItem, FileEntry, FileKind};
use serde::{Deserialize, Serialize};

// ============================================================================
// Response envelope
// ============================================================================

/// The body every endpoint answers with.
///
/// `_code` and `_msg` are always present; which of the other fields are
/// filled in depends on the endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Response {
    #[serde(rename = "_code")]
    pub code: Code,
    #[serde(rename = "_msg", default)]
    pub message: String,

    /// `file/list`
    #[serde(default)]
    pub root_file_id: Option<String>,
    /// `file/list`
    #[serde(default)]
    pub files: Vec<FileEntry>,
    /// `file/edit`
    #[serde(default)]
    pub results: Vec<bool>,
    /// `file/edit`: IDs of created files, one per change (`null` otherwise).
    #[serde(default)]
    pub created: Vec<Option<String>>,

    /// `doc/read`
    #[serde(default)]
    pub file_id: Option<String>,
    /// `doc/read`
    #[serde(default)]
    pub title: Option<String>,
    /// `doc/read`
    #[serde(default)]
    pub nodes: Vec<DocumentItem>,
    /// `doc/edit`
    #[serde(default)]
    pub new_node_ids: Vec<String>,

    /// `inbox/add`
    #[serde(default)]
    pub node_id: Option<String>,
    /// `inbox/add`
    #[serde(default)]
    pub index: Option<i64>,
}

impl Response {
    pub fn is_ok(&self) -> bool {
        self.code == Code::Ok
    }

    /// `Ok(self)` for `_code: "Ok"`, otherwise the code and message as an error.
    pub fn into_result(self) -> crate::Result<Self> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(crate::ApiError::Remote {
                code: self.code,
                message: self.message,
            })
        }
    }
}

/// Status code carried in `_code`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Code {
    Ok,
    /// The request is not valid JSON.
    Invalid,
    /// Rate limit hit.
    TooManyRequests,
    /// The secret token is invalid.
    InvalidToken,
    /// The server could not handle the request.
    LockFail,
    /// No permission to access the document.
    Unauthorized,
    /// The document does not exist.
    NotFound,
    /// The item does not exist.
    NodeNotFound,
    /// The inbox location is not configured, or invalid.
    NoInbox,
    /// Anything this client doesn't know about yet.
    Other(String),
}

impl From<String> for Code {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Ok" => Code::Ok,
            "Invalid" => Code::Invalid,
            "TooManyRequests" => Code::TooManyRequests,
            "InvalidToken" => Code::InvalidToken,
            "LockFail" => Code::LockFail,
            "Unauthorized" => Code::Unauthorized,
            "NotFound" => Code::NotFound,
            "NodeNotFound" => Code::NodeNotFound,
            "NoInbox" => Code::NoInbox,
            _ => Code::Other(s),
        }
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Code::Ok => "Ok",
            Code::Invalid => "Invalid",
            Code::TooManyRequests => "TooManyRequests",
            Code::InvalidToken => "InvalidToken",
            Code::LockFail => "LockFail",
            Code::Unauthorized => "Unauthorized",
            Code::NotFound => "NotFound",
            Code::NodeNotFound => "NodeNotFound",
            Code::NoInbox => "NoInbox",
            Code::Other(s) => s,
        };
        write!(f, "{}", s)
    }
}

// ============================================================================
// Changes
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Insert,
    Edit,
    Move,
    Delete,
}

/// One edit for `file/edit` or `doc/edit`.
///
/// File changes use `file_id`, `parent_id`, `index`, `type` and `title`;
/// document changes use `node_id`, `parent_id`, `index`, `content`, `note`
/// and `checked`. Unset fields are left out of the request.
///
/// ```
/// use dynalister_api::Change;
///
/// let change = Change::insert_node("root", -1, "Pay rent").with_checked(false);
/// let json = serde_json::to_value(&change).unwrap();
/// assert_eq!(json["action"], "insert");
/// assert_eq!(json["parent_id"], "root");
/// assert!(json.get("node_id").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Change {
    pub action: Action,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<FileKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

impl Change {
    pub fn new(action: Action) -> Self {
        Self {
            action,
            index: None,
            node_id: None,
            parent_id: None,
            content: None,
            kind: None,
            file_id: None,
            title: None,
            note: None,
            checked: None,
        }
    }

    /// Insert a new item under `parent_id` at `index` (`-1` appends).
    pub fn insert_node(parent_id: impl Into<String>, index: i64, content: impl Into<String>) -> Self {
        let mut change = Self::new(Action::Insert);
        change.parent_id = Some(parent_id.into());
        change.index = Some(index);
        change.content = Some(content.into());
        change
    }

    /// Edit an existing item; set the fields to change with the `with_*` methods.
    pub fn edit_node(node_id: impl Into<String>) -> Self {
        let mut change = Self::new(Action::Edit);
        change.node_id = Some(node_id.into());
        change
    }

    pub fn move_node(node_id: impl Into<String>, parent_id: impl Into<String>, index: i64) -> Self {
        let mut change = Self::new(Action::Move);
        change.node_id = Some(node_id.into());
        change.parent_id = Some(parent_id.into());
        change.index = Some(index);
        change
    }

    pub fn delete_node(node_id: impl Into<String>) -> Self {
        let mut change = Self::new(Action::Delete);
        change.node_id = Some(node_id.into());
        change
    }

    /// Create a document or folder under the folder `parent_id`.
    pub fn insert_file(
        parent_id: impl Into<String>,
        index: i64,
        kind: FileKind,
        title: impl Into<String>,
    ) -> Self {
        let mut change = Self::new(Action::Insert);
        change.parent_id = Some(parent_id.into());
        change.index = Some(index);
        change.kind = Some(kind);
        change.title = Some(title.into());
        change
    }

    pub fn rename_file(file_id: impl Into<String>, kind: FileKind, title: impl Into<String>) -> Self {
        let mut change = Self::new(Action::Edit);
        change.file_id = Some(file_id.into());
        change.kind = Some(kind);
        change.title = Some(title.into());
        change
    }

    pub fn move_file(
        file_id: impl Into<String>,
        kind: FileKind,
        parent_id: impl Into<String>,
        index: i64,
    ) -> Self {
        let mut change = Self::new(Action::Move);
        change.file_id = Some(file_id.into());
        change.kind = Some(kind);
        change.parent_id = Some(parent_id.into());
        change.index = Some(index);
        change
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }
}

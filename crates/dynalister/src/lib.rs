#![doc = include_str!("../README.md")]

mod backend;
mod dynalist;
mod error;
mod node;
mod paths;
mod tree;
mod types;
mod walk;

pub use backend::{Backend, InboxItem};
pub use dynalist::{Dynalist, ExportSummary, RenderOptions, render_document, render_files};
pub use error::{Error, Result, WalkError};
pub use node::Node;
pub use paths::{UNTITLED, document_file_name, full_path, sanitize_segment};
pub use tree::NodeTree;
pub use types::{DocumentItem, FileEntry, FileKind, Permission};
pub use walk::{MissingChild, WalkOptions};

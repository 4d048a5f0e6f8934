//! Fetch, print, and export on top of a [`Backend`].

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::backend::{Backend, InboxItem};
use crate::error::Result;
use crate::paths::{document_file_name, full_path, sanitize_segment};
use crate::tree::NodeTree;
use crate::types::{DocumentItem, FileEntry};
use crate::walk::WalkOptions;

/// Options controlling what document output includes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Write each item's note on the lines after it, two spaces past the
    /// bullet. Off by default, which gives exactly one line per item.
    pub notes: bool,
}

/// High-level entry point: one backend plus the walk policy to use with it.
///
/// Every operation fetches fresh data and builds a new tree; nothing is cached
/// between calls.
///
/// # Example
///
/// ```rust,no_run
/// use dynalister::{Backend, Dynalist, WalkOptions};
///
/// fn dump<B: Backend>(backend: B) -> dynalister::Result<()> {
///     let dynalist = Dynalist::new(backend).with_options(WalkOptions::strict());
///     dynalist.print_files(&mut std::io::stdout())?;
///     let summary = dynalist.export_all("backup")?;
///     println!("{} documents", summary.documents());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Dynalist<B> {
    backend: B,
    options: WalkOptions,
    render: RenderOptions,
}

/// What [`Dynalist::export_all`] wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Paths of the document files, in walk order.
    pub written: Vec<PathBuf>,
}

impl ExportSummary {
    pub fn documents(&self) -> usize {
        self.written.len()
    }
}

impl<B: Backend> Dynalist<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            options: WalkOptions::default(),
            render: RenderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: WalkOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_render_options(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn options(&self) -> &WalkOptions {
        &self.options
    }

    pub fn render_options(&self) -> &RenderOptions {
        &self.render
    }

    /// Fetch the file/folder hierarchy.
    pub fn file_tree(&self) -> Result<NodeTree<FileEntry>> {
        Ok(NodeTree::new(self.backend.list_files()?))
    }

    /// Fetch one document's outline.
    pub fn document_tree(&self, file_id: &str) -> Result<NodeTree<DocumentItem>> {
        Ok(NodeTree::new(self.backend.read_document(file_id)?))
    }

    /// Print the file/folder hierarchy as an indented bullet list.
    pub fn print_files<W: Write>(&self, w: &mut W) -> Result<()> {
        let tree = self.file_tree()?;
        render_files(&tree, &self.options, w)
    }

    /// Print one document as an indented bullet list.
    pub fn print_document<W: Write>(&self, w: &mut W, file_id: &str) -> Result<()> {
        let tree = self.document_tree(file_id)?;
        render_document(&tree, &self.options, &self.render, w)
    }

    /// Write every document under `output_root`, mirroring the folder layout.
    ///
    /// Folders only contribute path segments (see [`full_path`]); each
    /// document becomes `<title>.md` in its folder's directory. When two
    /// documents would land on the same path (for example `Q1/Q2` and `Q1-Q2`
    /// after sanitizing), the later one is written as `<title> (<id>).md`.
    /// A failure stops the export and leaves whatever was already written in
    /// place.
    pub fn export_all(&self, output_root: impl AsRef<Path>) -> Result<ExportSummary> {
        let output_root = output_root.as_ref();
        let files = self.file_tree()?;
        let mut summary = ExportSummary::default();
        let mut taken: HashSet<PathBuf> = HashSet::new();

        files.walk_with(&self.options, |ancestors, entry| -> Result<()> {
            if !entry.is_document() {
                return Ok(());
            }

            let dir = full_path(output_root, ancestors);
            fs::create_dir_all(&dir)?;

            let document = self.document_tree(&entry.id)?;
            let path = unique_path(&mut taken, &dir, entry)?;
            let mut out = BufWriter::new(File::create(&path)?);
            render_document(&document, &self.options, &self.render, &mut out)?;
            out.flush()?;

            tracing::info!(file_id = %entry.id, path = %path.display(), "exported document");
            summary.written.push(path);
            Ok(())
        })?;

        Ok(summary)
    }

    pub fn inbox_add(&self, item: &InboxItem) -> Result<()> {
        self.backend.add_to_inbox(item)
    }
}

/// Claim an output path for `entry` that no earlier document in this export used.
fn unique_path(taken: &mut HashSet<PathBuf>, dir: &Path, entry: &FileEntry) -> Result<PathBuf> {
    let path = dir.join(document_file_name(&entry.title));
    if taken.insert(path.clone()) {
        return Ok(path);
    }

    let fallback = dir.join(format!(
        "{} ({}).md",
        sanitize_segment(&entry.title),
        sanitize_segment(&entry.id)
    ));
    if taken.insert(fallback.clone()) {
        tracing::warn!(
            file_id = %entry.id,
            path = %fallback.display(),
            "document title collides with an earlier export, adding its id"
        );
        return Ok(fallback);
    }

    Err(std::io::Error::new(
        std::io::ErrorKind::AlreadyExists,
        format!("no free file name for document {} in {}", entry.id, dir.display()),
    )
    .into())
}

/// One `*` bullet per file, indented four spaces per level.
pub fn render_files<W: Write>(
    tree: &NodeTree<FileEntry>,
    options: &WalkOptions,
    w: &mut W,
) -> Result<()> {
    tree.walk_with(options, |ancestors, entry| -> Result<()> {
        writeln!(w, "{}* {}", indent(ancestors.len()), entry.title)?;
        Ok(())
    })
}

/// One `*` bullet per item, indented four spaces per level. With
/// [`RenderOptions::notes`] set, notes follow their item, aligned with its
/// content.
pub fn render_document<W: Write>(
    tree: &NodeTree<DocumentItem>,
    options: &WalkOptions,
    render: &RenderOptions,
    w: &mut W,
) -> Result<()> {
    tree.walk_with(options, |ancestors, item| -> Result<()> {
        let indent = indent(ancestors.len());
        writeln!(w, "{}* {}", indent, item.content)?;
        if let Some(note) = item.note().filter(|_| render.notes) {
            for line in note.lines() {
                writeln!(w, "{}  {}", indent, line)?;
            }
        }
        Ok(())
    })
}

fn indent(depth: usize) -> String {
    " ".repeat(depth * 4)
}

use anyhow::{Context, Result};
use dynalister::{Backend, Dynalist, FileEntry, NodeTree, render_files};
use std::io::Write;

pub fn run<B: Backend>(dynalist: &Dynalist<B>, json: bool) -> Result<()> {
    let tree = dynalist
        .file_tree()
        .context("Failed to fetch file list")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        let value = files_json(&tree, dynalist)?;
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    } else {
        render_files(&tree, dynalist.options(), &mut out)?;
    }
    Ok(())
}

/// Files in walk order, each with its depth and the titles above it.
fn files_json<B: Backend>(
    tree: &NodeTree<FileEntry>,
    dynalist: &Dynalist<B>,
) -> Result<serde_json::Value> {
    let mut items = Vec::new();
    tree.walk_with(dynalist.options(), |ancestors, entry| {
        let path: Vec<&str> = ancestors.iter().map(|a| a.title.as_str()).collect();
        items.push(serde_json::json!({
            "id": entry.id,
            "title": entry.title,
            "type": entry.kind,
            "permission": entry.permission,
            "depth": ancestors.len(),
            "path": path,
        }));
        Ok::<_, dynalister::Error>(())
    })?;

    Ok(serde_json::json!({ "files": items }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn test_files_json() {
        let dynalist = Dynalist::new(testing::sample());
        let tree = dynalist.file_tree().unwrap();
        let value = files_json(&tree, &dynalist).unwrap();

        let files = value["files"].as_array().unwrap();
        assert_eq!(files.len(), 4);
        assert_eq!(files[0]["title"], "Untitled");
        assert_eq!(files[0]["depth"], 0);
        assert_eq!(files[3]["title"], "Garden");
        assert_eq!(files[3]["type"], "document");
        assert_eq!(files[3]["permission"], 4);
        assert_eq!(files[3]["path"], serde_json::json!(["Untitled", "Projects"]));
    }

    #[test]
    fn test_render_files_text() {
        let dynalist = Dynalist::new(testing::sample());
        let mut out = Vec::new();
        dynalist.print_files(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "* Untitled\n    * Inbox\n    * Projects\n        * Garden\n"
        );
    }
}

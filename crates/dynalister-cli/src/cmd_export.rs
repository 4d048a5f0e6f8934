use anyhow::{Context, Result};
use dynalister::{Backend, Dynalist};
use std::path::Path;

pub fn run<B: Backend>(dynalist: &Dynalist<B>, output: &Path) -> Result<()> {
    let summary = dynalist
        .export_all(output)
        .with_context(|| format!("Failed to export to {:?}", output))?;

    println!(
        "Exported {} documents to {}",
        summary.documents(),
        output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;
    use dynalister::RenderOptions;

    #[test]
    fn test_export_writes_tree() {
        let dir = tempfile::tempdir().unwrap();
        let dynalist = Dynalist::new(testing::sample());
        run(&dynalist, dir.path()).unwrap();

        assert!(dir.path().join("Inbox.md").is_file());
        let garden = std::fs::read_to_string(dir.path().join("Projects/Garden.md")).unwrap();
        assert_eq!(garden, "* Garden\n    * Tomatoes\n        * Stake them\n");
    }

    #[test]
    fn test_export_with_notes() {
        let dir = tempfile::tempdir().unwrap();
        let dynalist =
            Dynalist::new(testing::sample()).with_render_options(RenderOptions { notes: true });
        run(&dynalist, dir.path()).unwrap();

        let garden = std::fs::read_to_string(dir.path().join("Projects/Garden.md")).unwrap();
        assert_eq!(
            garden,
            "* Garden\n    * Tomatoes\n        * Stake them\n          before June\n"
        );
    }

    #[test]
    fn test_export_failure_has_context() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = testing::sample();
        backend.documents.clear();
        let dynalist = Dynalist::new(backend);

        let err = run(&dynalist, dir.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to export to"));
    }
}

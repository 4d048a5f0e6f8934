use anyhow::{Context, Result};
use dynalister::{Backend, Dynalist};

pub fn run<B: Backend>(dynalist: &Dynalist<B>, file_id: &str) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dynalist
        .print_document(&mut out, file_id)
        .with_context(|| format!("Failed to print document {}", file_id))
}

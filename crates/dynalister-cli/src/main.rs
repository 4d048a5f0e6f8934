mod cmd_add;
mod cmd_document;
mod cmd_export;
mod cmd_files;
#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use dynalister::{Dynalist, RenderOptions, WalkOptions};
use dynalister_api::{Client, ClientConfig, DEFAULT_BASE_URL};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dynalister")]
#[command(version)]
#[command(about = "Print, export, and add to your Dynalist from the command line")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Dynalist API token (https://dynalist.io/developer)
    #[arg(long, global = true, env = "DYNALIST_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// API base URL
    #[arg(long, global = true, env = "DYNALIST_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Fail on items that reference missing children instead of skipping them
    #[arg(long, global = true)]
    strict: bool,

    /// More log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tree of files and folders
    Files {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a document
    Document {
        /// Document (file) ID
        file_id: String,

        /// Include item notes under their items
        #[arg(long)]
        notes: bool,
    },
    /// Add an item to your inbox
    Add {
        /// Item text; words are joined with spaces
        #[arg(required = true)]
        words: Vec<String>,

        /// Note to attach to the item
        #[arg(long)]
        note: Option<String>,

        /// Add the item already checked off
        #[arg(long)]
        checked: bool,
    },
    /// Export all documents into a directory tree
    Export {
        /// Output directory
        output: PathBuf,

        /// Include item notes under their items
        #[arg(long)]
        notes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    let dynalist = connect(&cli.global)?;

    match cli.command {
        Commands::Files { json } => cmd_files::run(&dynalist, json),
        Commands::Document { file_id, notes } => {
            cmd_document::run(&dynalist.with_render_options(RenderOptions { notes }), &file_id)
        }
        Commands::Add {
            words,
            note,
            checked,
        } => cmd_add::run(&dynalist, &words, note, checked),
        Commands::Export { output, notes } => {
            cmd_export::run(&dynalist.with_render_options(RenderOptions { notes }), &output)
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn connect(args: &GlobalArgs) -> Result<Dynalist<Client>> {
    let token = args
        .token
        .clone()
        .filter(|t| !t.trim().is_empty())
        .context("No API token provided: set DYNALIST_TOKEN or pass --token")?;

    let config = ClientConfig::new(token).with_base_url(args.api_url.clone());
    let client = Client::new(config).context("Failed to create API client")?;

    Ok(Dynalist::new(client).with_options(walk_options(args.strict)))
}

fn walk_options(strict: bool) -> WalkOptions {
    if strict {
        WalkOptions::strict()
    } else {
        WalkOptions::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use dynalister::MissingChild;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "dynalister",
            "--token",
            "t",
            "add",
            "buy",
            "milk",
            "--note",
            "oat",
        ])
        .unwrap();
        match cli.command {
            Commands::Add { words, note, checked } => {
                assert_eq!(words, ["buy", "milk"]);
                assert_eq!(note.as_deref(), Some("oat"));
                assert!(!checked);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["dynalister", "export", "out", "--strict", "-vv"]).unwrap();
        assert!(cli.global.strict);
        assert_eq!(cli.global.verbose, 2);
        assert!(matches!(cli.command, Commands::Export { .. }));
    }

    #[test]
    fn test_notes_flag_defaults_off() {
        let cli = Cli::try_parse_from(["dynalister", "document", "d1"]).unwrap();
        assert!(matches!(cli.command, Commands::Document { notes: false, .. }));

        let cli = Cli::try_parse_from(["dynalister", "export", "out", "--notes"]).unwrap();
        assert!(matches!(cli.command, Commands::Export { notes: true, .. }));
    }

    #[test]
    fn test_document_requires_id() {
        assert!(Cli::try_parse_from(["dynalister", "document"]).is_err());
    }

    #[test]
    fn test_connect_rejects_blank_token() {
        let args = GlobalArgs {
            token: Some("   ".into()),
            api_url: DEFAULT_BASE_URL.into(),
            strict: false,
            verbose: 0,
        };
        let err = connect(&args).err().unwrap();
        assert!(err.to_string().contains("DYNALIST_TOKEN"));
    }

    #[test]
    fn test_connect_applies_options() {
        let args = GlobalArgs {
            token: Some("t".into()),
            api_url: "http://localhost:9/api".into(),
            strict: true,
            verbose: 0,
        };
        let dynalist = connect(&args).unwrap();
        assert_eq!(dynalist.options().missing_child, MissingChild::Fail);
        assert_eq!(dynalist.backend().base_url(), "http://localhost:9/api/");
    }
}

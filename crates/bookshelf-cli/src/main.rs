//! Bookshelf CLI
//!
//! Command-line interface for a file-backed book catalogue

use bookshelf_core::logging_facility::{self, Profile};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "bookshelf")]
#[command(about = "Bookshelf - manage a book catalogue stored in a JSON or YAML file", long_about = None)]
struct Cli {
    /// Catalogue file (.json, or .yaml/.yml)
    #[arg(long, global = true, default_value = "books.json")]
    catalogue: PathBuf,

    /// Create an empty catalogue file if it does not exist
    #[arg(long, global = true)]
    create: bool,

    /// Enable logging to stderr with the given profile (dev, prod)
    #[arg(long, global = true)]
    log: Option<Profile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the catalogue file if needed and report its size
    Init,
    /// List books
    List(commands::query::ListArgs),
    /// Search books by title substring (case-insensitive)
    Search(commands::query::SearchArgs),
    /// Append a book and save
    Add(commands::mutate::AddArgs),
    /// Sort by author then title and save
    Sort,
    /// Save the catalogue to another file
    Export(commands::mutate::ExportArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.log {
        logging_facility::init(profile);
    }

    let target = commands::Target {
        path: cli.catalogue,
        create_if_missing: cli.create,
    };

    let result = match cli.command {
        Commands::Init => commands::mutate::execute_init(&target),
        Commands::List(args) => commands::query::execute_list(&target, args),
        Commands::Search(args) => commands::query::execute_search(&target, args),
        Commands::Add(args) => commands::mutate::execute_add(&target, args),
        Commands::Sort => commands::mutate::execute_sort(&target),
        Commands::Export(args) => commands::mutate::execute_export(&target, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

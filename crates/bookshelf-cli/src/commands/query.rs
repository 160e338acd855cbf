//! Read-only commands
//!
//! Usage:
//!   bookshelf list [--sorted]
//!   bookshelf search <NEEDLE>

use bookshelf_core::BookManager;
use clap::Args;

use super::{print_books, Target};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show books sorted by author then title (the file is not modified)
    #[arg(long)]
    pub sorted: bool,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Title substring to look for
    pub needle: String,
}

/// Execute list command
pub fn execute_list(target: &Target, args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut manager = target.open()?;

    if args.sorted {
        print_books(manager.sort_alphabetically());
    } else {
        print_books(manager.books());
    }

    Ok(())
}

/// Execute search command
pub fn execute_search(target: &Target, args: SearchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let manager = target.open()?;

    let results = manager.search_by_name(&args.needle);
    if results.is_empty() {
        eprintln!("No books match '{}'", args.needle);
    }
    print_books(&results);

    Ok(())
}

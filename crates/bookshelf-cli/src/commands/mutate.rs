//! Commands that change the catalogue file
//!
//! Usage:
//!   bookshelf init
//!   bookshelf add --title <T> --author <A> --pages <N>
//!   bookshelf sort
//!   bookshelf export <PATH>

use bookshelf_core::{Book, BookManager};
use bookshelf_store::FileCatalogueManager;
use clap::Args;
use std::path::PathBuf;

use super::Target;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Book title
    #[arg(long)]
    pub title: String,

    /// Author name
    #[arg(long)]
    pub author: String,

    /// Page count
    #[arg(long, allow_negative_numbers = true)]
    pub pages: i32,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Destination file; the extension picks the format
    pub path: PathBuf,
}

/// Execute init command
pub fn execute_init(target: &Target) -> Result<(), Box<dyn std::error::Error>> {
    let manager = FileCatalogueManager::open(&target.path, true)?;

    println!(
        "✓ Catalogue {} ready ({} books)",
        manager.path().display(),
        manager.books().len()
    );

    Ok(())
}

/// Execute add command
pub fn execute_add(target: &Target, args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut manager = target.open()?;

    manager.add_book(Book::new(args.title, args.author, args.pages));
    manager.save(None)?;

    println!("✓ Added ({} books)", manager.books().len());

    Ok(())
}

/// Execute sort command
pub fn execute_sort(target: &Target) -> Result<(), Box<dyn std::error::Error>> {
    let mut manager = target.open()?;

    manager.sort_alphabetically();
    manager.save(None)?;

    println!("✓ Sorted {} books", manager.books().len());

    Ok(())
}

/// Execute export command
pub fn execute_export(target: &Target, args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let manager = target.open()?;

    manager.save(Some(&args.path))?;

    println!("✓ Exported to {}", args.path.display());

    Ok(())
}

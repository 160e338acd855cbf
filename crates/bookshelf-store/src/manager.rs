//! File-backed catalogue manager
//!
//! Loads the whole catalogue from one file at construction, keeps it in
//! memory as the single source of truth, and writes it back only when
//! `save` is called.

use bookshelf_core::{log_op_end, log_op_error, log_op_start};
use bookshelf_core::{Book, BookManager, Catalogue, ExError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::codec::{self, CatalogueFormat};
use crate::errors::{corrupt_data, io_error, not_found, Result};
use crate::fs::atomic_write;

/// Construction options for `FileCatalogueManager`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManagerOptions {
    /// Write an empty catalogue when the file does not exist
    pub create_if_missing: bool,
    /// Force a format instead of inferring it from the file extension
    pub format: Option<CatalogueFormat>,
}

impl ManagerOptions {
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }

    pub fn format(mut self, format: CatalogueFormat) -> Self {
        self.format = Some(format);
        self
    }
}

/// Catalogue manager persisting to a single JSON or YAML file
///
/// Not thread-safe; the manager exclusively owns its collection.
#[derive(Debug)]
pub struct FileCatalogueManager {
    path: PathBuf,
    format: CatalogueFormat,
    catalogue: Catalogue,
}

impl FileCatalogueManager {
    /// Open the catalogue at `path`
    ///
    /// # Errors
    ///
    /// - `NotFound` if the file is absent and `create_if_missing` is false
    /// - `CorruptData` if the file does not decode into a books document
    /// - `Io` for any other read or create failure
    pub fn open(path: impl AsRef<Path>, create_if_missing: bool) -> Result<Self> {
        Self::open_with(
            path,
            ManagerOptions::default().create_if_missing(create_if_missing),
        )
    }

    /// Open the catalogue at `path` with explicit options
    ///
    /// # Errors
    ///
    /// Same as [`FileCatalogueManager::open`].
    pub fn open_with(path: impl AsRef<Path>, options: ManagerOptions) -> Result<Self> {
        let path = path.as_ref();
        let format = options
            .format
            .unwrap_or_else(|| CatalogueFormat::from_path(path));

        log_op_start!(
            "catalogue_open",
            path = %path.display(),
            format = format.name(),
            create_if_missing = options.create_if_missing
        );
        let start = Instant::now();

        let catalogue = load_or_create(path, format, options.create_if_missing).map_err(|e| {
            log_op_error!(
                "catalogue_open",
                e,
                duration_ms = start.elapsed().as_millis() as u64,
                path = %path.display()
            );
            e
        })?;

        log_op_end!(
            "catalogue_open",
            duration_ms = start.elapsed().as_millis() as u64,
            path = %path.display(),
            book_count = catalogue.len()
        );

        Ok(Self {
            path: path.to_path_buf(),
            format,
            catalogue,
        })
    }

    /// Path the catalogue was opened from; the default `save` target
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> CatalogueFormat {
        self.format
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Format used when saving to `target`
    ///
    /// The manager's own path keeps the format it was opened with; any other
    /// path is inferred from its extension.
    fn format_for(&self, target: &Path) -> CatalogueFormat {
        if target == self.path {
            self.format
        } else {
            CatalogueFormat::from_path(target)
        }
    }
}

fn load_or_create(path: &Path, format: CatalogueFormat, create: bool) -> Result<Catalogue> {
    match fs::read(path) {
        Ok(bytes) => codec::decode(format, &bytes).map_err(|reason| corrupt_data(path, reason)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            if !create {
                return Err(not_found(path));
            }
            tracing::debug!(path = %path.display(), "creating empty catalogue");
            let catalogue = Catalogue::new();
            atomic_write(path, &codec::encode(format, &catalogue)?)?;
            Ok(catalogue)
        }
        Err(e) => Err(io_error("read_catalogue", path, e)),
    }
}

impl BookManager for FileCatalogueManager {
    fn books(&self) -> &[Book] {
        self.catalogue.books()
    }

    fn books_mut(&mut self) -> &mut Vec<Book> {
        self.catalogue.books_mut()
    }

    fn add_book(&mut self, book: Book) {
        tracing::debug!(title = %book.title, author = %book.author, "add_book");
        self.catalogue.push(book);
    }

    fn sort_alphabetically(&mut self) -> &[Book] {
        self.catalogue.sort_alphabetically()
    }

    fn search_by_name(&self, needle: &str) -> Vec<Book> {
        let results = self.catalogue.search_by_title(needle);
        tracing::debug!(needle, matches = results.len(), "search_by_name");
        results
    }

    fn save(&self, path: Option<&Path>) -> std::result::Result<(), ExError> {
        let target = path.unwrap_or(self.path.as_path());
        let format = self.format_for(target);

        log_op_start!(
            "catalogue_save",
            path = %target.display(),
            format = format.name(),
            book_count = self.catalogue.len()
        );
        let start = Instant::now();

        codec::encode(format, &self.catalogue)
            .and_then(|bytes| atomic_write(target, &bytes))
            .map_err(|e| {
                log_op_error!(
                    "catalogue_save",
                    e,
                    duration_ms = start.elapsed().as_millis() as u64,
                    path = %target.display()
                );
                e
            })?;

        log_op_end!(
            "catalogue_save",
            duration_ms = start.elapsed().as_millis() as u64,
            path = %target.display()
        );

        Ok(())
    }
}

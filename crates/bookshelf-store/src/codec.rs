//! Serialization codecs for the `books` document
//!
//! Both formats encode the same shape: a `books` root holding a sequence of
//! `{title, author, pages}` records. Encoding is deterministic, so saving an
//! unchanged catalogue twice yields identical bytes.

use bookshelf_core::Catalogue;
use std::path::Path;

use crate::errors::{serialization, Result};

/// On-disk syntax of a catalogue file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogueFormat {
    #[default]
    Json,
    Yaml,
}

impl CatalogueFormat {
    /// Pick the format from a file extension: `.yaml`/`.yml` → YAML,
    /// anything else → JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => CatalogueFormat::Yaml,
            _ => CatalogueFormat::Json,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CatalogueFormat::Json => "json",
            CatalogueFormat::Yaml => "yaml",
        }
    }
}

/// Encode a catalogue
///
/// # Errors
///
/// Returns a `Serialization` error if the encoder fails.
pub fn encode(format: CatalogueFormat, catalogue: &Catalogue) -> Result<Vec<u8>> {
    match format {
        CatalogueFormat::Json => {
            let mut bytes = serde_json::to_vec_pretty(catalogue).map_err(serialization)?;
            bytes.push(b'\n');
            Ok(bytes)
        }
        CatalogueFormat::Yaml => serde_yaml::to_string(catalogue)
            .map(String::into_bytes)
            .map_err(serialization),
    }
}

/// Decode a catalogue
///
/// Returns the decoder's message on failure; the caller attaches the file
/// path and classifies it as corrupt data. Blank input is rejected rather
/// than read as an empty catalogue, and so is a null `books` value in
/// either syntax (YAML `books:`, `books: ~`, `books: null`).
pub fn decode(format: CatalogueFormat, bytes: &[u8]) -> std::result::Result<Catalogue, String> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err("catalogue file is empty".to_string());
    }

    match format {
        CatalogueFormat::Json => serde_json::from_slice(bytes).map_err(|e| e.to_string()),
        CatalogueFormat::Yaml => {
            let value: serde_yaml::Value =
                serde_yaml::from_slice(bytes).map_err(|e| e.to_string())?;
            // An empty YAML value would otherwise pass as an empty sequence
            if value.get("books").is_some_and(serde_yaml::Value::is_null) {
                return Err("books: expected a sequence, found null".to_string());
            }
            serde_yaml::from_value(value).map_err(|e| e.to_string())
        }
    }
}

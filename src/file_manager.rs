//! # File Management Module
//!
//! Discovery dei file candidati alla conversione.
//!
//! ## Responsabilità:
//! - Discovery ricorsiva dei file in una directory
//! - Classificazione di ogni file per categoria (dall'estensione)
//! - Verifica opzionale di compatibilità con un formato di output
//!
//! ## Esempio:
//! ```rust,no_run
//! use fileconv_paths::file_manager::FileManager;
//! use fileconv_paths::OutputFormat;
//! use std::path::Path;
//!
//! let files = FileManager::find_files(Path::new("/path/to/media"));
//! for file in FileManager::classify(&files, Some(OutputFormat::Mp4)) {
//!     println!("{} {}", file.path.display(), file.category);
//! }
//! ```

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::media::{category_of, is_compatible, MediaCategory, OutputFormat};

/// A discovered file and how it classifies
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedFile {
    pub path: PathBuf,
    pub category: MediaCategory,
    /// Compatibility with the requested output format, if one was given
    pub compatible: Option<bool>,
}

/// Walks directories and classifies what it finds
pub struct FileManager;

impl FileManager {
    /// Find all regular files under a directory, sorted by path
    pub fn find_files(dir: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(dir)
            .into_iter()
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    debug!("Skipping unreadable entry: {}", err);
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .collect();

        files.sort();
        files
    }

    /// Category of a file on disk, from its extension
    pub fn category(path: &Path) -> MediaCategory {
        match path.extension() {
            Some(ext) => category_of(&ext.to_string_lossy()),
            None => MediaCategory::Misc,
        }
    }

    /// Classify files, checking each against `format` when given
    pub fn classify(files: &[PathBuf], format: Option<OutputFormat>) -> Vec<ClassifiedFile> {
        files
            .iter()
            .map(|path| {
                let category = Self::category(path);
                ClassifiedFile {
                    path: path.clone(),
                    category,
                    compatible: format.map(|f| is_compatible(f, category)),
                }
            })
            .collect()
    }
}

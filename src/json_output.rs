//! # JSON Output Module
//!
//! Output strutturato in JSON per l'applicazione che usa la CLI.
//!
//! ## Tipi di messaggi:
//! - `inspect`: analisi completa di un path
//! - `unique`: path di output senza collisioni
//! - `compat`: categoria e compatibilità di un'estensione
//! - `scan_file`: un file trovato da `scan`
//! - `error`: errore durante l'elaborazione

use serde::Serialize;

use crate::file_manager::ClassifiedFile;
use crate::media::{MediaCategory, OutputFormat};
use crate::path::DecomposedPath;

/// Tipo di messaggio JSON
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JsonMessage {
    Inspect {
        path: String,
        valid: bool,
        parts: Option<DecomposedPath>,
        category: MediaCategory,
        track_number: Option<u32>,
        optical_drive: bool,
    },

    Unique {
        requested: String,
        allocated: String,
    },

    Compat {
        format: OutputFormat,
        extension: String,
        category: MediaCategory,
        compatible: bool,
    },

    ScanFile(ClassifiedFile),

    Error {
        message: String,
        details: Option<String>,
    },
}

impl JsonMessage {
    /// Emette il messaggio JSON su stdout
    pub fn emit(&self) {
        if let Ok(json) = serde_json::to_string(self) {
            println!("{}", json);
        }
    }

    pub fn error(message: String, details: Option<String>) -> Self {
        Self::Error { message, details }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_tagged_serialization() {
        let message = JsonMessage::Compat {
            format: OutputFormat::Mp4,
            extension: "gif".to_string(),
            category: MediaCategory::AnimatedImage,
            compatible: true,
        };
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["type"], "compat");
        assert_eq!(value["format"], "mp4");
        assert_eq!(value["category"], "AnimatedImage");
        assert_eq!(value["compatible"], true);
    }

    #[test]
    fn test_scan_file_flattens_fields() {
        let message = JsonMessage::ScanFile(ClassifiedFile {
            path: PathBuf::from("/m/a.wav"),
            category: MediaCategory::Audio,
            compatible: None,
        });
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["type"], "scan_file");
        assert_eq!(value["path"], "/m/a.wav");
        assert!(value["compatible"].is_null());
    }
}

//! # FileConverter Paths Library
//!
//! Analisi dei path e classificazione dei media per un convertitore di file.
//!
//! ## Responsabilità:
//! - Valida e scompone path assoluti (drive, directory, filename)
//! - Estrae il numero di traccia dai file `TrackNN.cda` dei CD audio
//! - Riconosce i path su drive ottici (lettere fornite dal chiamante)
//! - Genera path di output senza collisioni
//! - Mappa le estensioni a categorie media e verifica la compatibilità con i formati di output
//!
//! ## Architettura dei moduli:
//! - `path`: grammatica dei path, tracce CD, drive ottici, path univoci
//! - `media`: categorie, formati di output, matrice di compatibilità
//! - `config`: configurazione della CLI e cartella dati utente
//! - `error`: tipi di errore custom
//! - `file_manager`: discovery dei file per la CLI
//! - `json_output`: messaggi JSON per la CLI
//!
//! ## Utilizzo:
//! ```rust
//! use fileconv_paths::{category_of, decompose_path, is_compatible, OutputFormat};
//!
//! let parts = decompose_path("C:\\Videos\\holiday.mkv").unwrap();
//! let category = category_of(parts.extension().unwrap_or_default());
//! assert!(is_compatible(OutputFormat::Mp4, category));
//! ```

pub mod config;
pub mod error;
pub mod file_manager;
pub mod json_output;
pub mod media;
pub mod path;

pub use config::Config;
pub use error::CoreError;
pub use media::{
    category_of, category_of_path, compatible_formats, is_compatible, MediaCategory, OutputFormat,
};
pub use path::{
    allocate_unique_path, decompose_path, extract_track_number, file_exists, file_name,
    is_optical_drive, is_valid_path, DecomposedPath,
};

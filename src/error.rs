//! # Error Types Module
//!
//! Questo modulo definisce i tipi di errore della libreria.
//!
//! ## Categorie di errori:
//! - `MalformedPath`: il path non rispetta la grammatica (drive, directory, filename)
//! - `Format`: il filename non ha la forma `Track<cifre>.cda` o le cifre non sono un intero valido
//! - `Io`: errori di I/O (solo config e cartella dati utente)
//! - `Config`: valori di configurazione non validi
//!
//! Le funzioni di classificazione (`category_of`, `is_compatible`) sono totali e
//! non producono mai errori.
//!
//! ## Esempio:
//! ```rust
//! use fileconv_paths::{decompose_path, CoreError};
//!
//! match decompose_path("C:\\dir\\..") {
//!     Err(CoreError::MalformedPath(path)) => assert_eq!(path, "C:\\dir\\.."),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

/// Errors raised by path decomposition, track extraction and configuration
#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("Malformed path: {0}")]
    MalformedPath(String),

    #[error("Format error: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;

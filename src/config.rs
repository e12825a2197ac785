//! # Configuration Management Module
//!
//! Questo modulo gestisce la configurazione della CLI.
//!
//! ## Responsabilità:
//! - Definisce la struct `Config` con i parametri letti dal file JSON
//! - Valida i parametri caricati
//! - Risolve la cartella dati utente (`<local data dir>/FileConverter`)
//!
//! ## Parametri di configurazione:
//! - `optical_drive_letters`: lettere dei drive ottici montati (default: nessuna)
//! - `default_output_format`: formato usato da `scan` senza `--format` (default: None)
//! - `json_output`: output JSON invece di testo (default: false)
//!
//! La libreria non enumera i device: le lettere dei drive ottici arrivano da qui
//! o da `--optical`.
//!
//! ## Esempio:
//! ```rust
//! use fileconv_paths::Config;
//!
//! let config = Config {
//!     optical_drive_letters: vec!['E', 'F'],
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::media::OutputFormat;

/// Name of the per-user data folder
pub const APP_FOLDER_NAME: &str = "FileConverter";

/// Configuration file name inside the user data folder
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Configuration for the command line front end
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Letters of the currently mounted optical drives
    pub optical_drive_letters: Vec<char>,
    /// Target format for `scan` when none is given on the command line
    pub default_output_format: Option<OutputFormat>,
    /// Output results as JSON for programmatic use
    pub json_output: bool,
}

impl Config {
    /// Validate configuration parameters
    pub fn validate(&self) -> std::result::Result<(), CoreError> {
        for (index, letter) in self.optical_drive_letters.iter().enumerate() {
            if !letter.is_ascii_alphabetic() {
                return Err(CoreError::Config(format!(
                    "Optical drive letter must be A-Z, got {:?}",
                    letter
                )));
            }
            if self.optical_drive_letters[..index].contains(letter) {
                return Err(CoreError::Config(format!(
                    "Optical drive letter listed twice: {}",
                    letter
                )));
            }
        }

        Ok(())
    }

    /// Load configuration from file
    pub async fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub async fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, content).await?;
        Ok(())
    }

    /// Default location of the configuration file
    pub fn default_path() -> Result<PathBuf> {
        Ok(user_data_folder()?.join(CONFIG_FILE_NAME))
    }
}

/// Per-user application data folder, created on first use
pub fn user_data_folder() -> std::result::Result<PathBuf, CoreError> {
    let base = dirs::data_local_dir().ok_or_else(|| {
        CoreError::Config("Could not find the local application data directory".to_string())
    })?;

    ensure_folder(base.join(APP_FOLDER_NAME))
}

fn ensure_folder(path: PathBuf) -> std::result::Result<PathBuf, CoreError> {
    if !path.is_dir() {
        std::fs::create_dir_all(&path)?;
    }
    Ok(path)
}

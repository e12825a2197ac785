//! # Path Module
//!
//! Sottomoduli indipendenti per l'analisi dei path:
//! - `grammar`: validazione e scomposizione in drive, directory e filename
//! - `track`: numero di traccia dai file `TrackNN.cda` dei CD audio
//! - `drive`: verifica se un path sta su un drive ottico
//! - `unique`: path di output senza collisioni

pub mod drive;
pub mod grammar;
pub mod track;
pub mod unique;

pub use drive::is_optical_drive;
pub use grammar::{
    decompose_path, drive_letter, extension_of, file_name, has_drive_letter, is_valid_path,
    DecomposedPath, SEPARATOR,
};
pub use track::{extract_track_number, is_cd_track};
pub use unique::{allocate_unique_path, file_exists};

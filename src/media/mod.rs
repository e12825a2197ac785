//! # Media Classification Module
//!
//! - `category`: estensione -> categoria (Audio, Video, Image, AnimatedImage, Misc)
//! - `format`: formati di output supportati
//! - `compat`: compatibilità tra formato di output e categoria di input

pub mod category;
pub mod compat;
pub mod format;

pub use category::{category_of, category_of_path, MediaCategory};
pub use compat::{compatible_formats, is_compatible};
pub use format::OutputFormat;

//! Extension to media category mapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::path::grammar::{extension_of, file_name};

/// Broad kind of media a file holds, decided from its extension alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaCategory {
    Audio,
    Video,
    Image,
    AnimatedImage,
    /// Anything not in the table. Not an error, classification is advisory.
    Misc,
}

impl MediaCategory {
    pub const ALL: [MediaCategory; 5] = [
        MediaCategory::Audio,
        MediaCategory::Video,
        MediaCategory::Image,
        MediaCategory::AnimatedImage,
        MediaCategory::Misc,
    ];

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            MediaCategory::Audio => "Audio",
            MediaCategory::Video => "Video",
            MediaCategory::Image => "Image",
            MediaCategory::AnimatedImage => "Animated Image",
            MediaCategory::Misc => "Misc",
        }
    }
}

impl fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Map an extension to its category.
///
/// One leading dot is stripped and the extension is lowercased before lookup, so
/// `"MP3"`, `".mp3"` and `"mp3"` all give [`MediaCategory::Audio`]. Unknown
/// extensions give [`MediaCategory::Misc`].
pub fn category_of(extension: &str) -> MediaCategory {
    let extension = extension.strip_prefix('.').unwrap_or(extension);
    let extension = extension.to_ascii_lowercase();

    match extension.as_str() {
        "aac" | "aiff" | "ape" | "cda" | "flac" | "mp3" | "m4a" | "oga" | "ogg" | "wav"
        | "wma" => MediaCategory::Audio,

        "3gp" | "avi" | "bik" | "flv" | "m4v" | "mp4" | "mpeg" | "mov" | "mkv" | "ogv"
        | "vob" | "webm" | "wmv" => MediaCategory::Video,

        "bmp" | "exr" | "ico" | "jpg" | "jpeg" | "png" | "psd" | "tga" | "tiff" | "svg"
        | "xcf" => MediaCategory::Image,

        "gif" => MediaCategory::AnimatedImage,

        _ => {
            debug!("Unknown extension {:?}, defaulting to Misc", extension);
            MediaCategory::Misc
        }
    }
}

/// Category of the file a path points to. Files without an extension are [`MediaCategory::Misc`].
pub fn category_of_path(path: &str) -> MediaCategory {
    extension_of(file_name(path))
        .map(category_of)
        .unwrap_or(MediaCategory::Misc)
}

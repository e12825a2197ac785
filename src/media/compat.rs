//! Which output formats make sense for which input categories.

use super::category::MediaCategory;
use super::format::OutputFormat;

/// Check whether files of `category` can be converted to `format`.
///
/// [`MediaCategory::Misc`] is compatible with everything: unknown inputs are let
/// through and the converter decides.
pub fn is_compatible(format: OutputFormat, category: MediaCategory) -> bool {
    use MediaCategory::*;

    if category == Misc {
        return true;
    }

    match format {
        OutputFormat::Aac
        | OutputFormat::Flac
        | OutputFormat::Mp3
        | OutputFormat::Ogg
        | OutputFormat::Wav => matches!(category, Audio | Video),

        OutputFormat::Avi | OutputFormat::Mkv | OutputFormat::Mp4 | OutputFormat::Webm => {
            matches!(category, Video | AnimatedImage)
        }

        OutputFormat::Ico | OutputFormat::Jpg | OutputFormat::Png => category == Image,

        OutputFormat::Gif => matches!(category, Image | Video | AnimatedImage),

        _ => false,
    }
}

/// All output formats a category can be converted to
pub fn compatible_formats(category: MediaCategory) -> Vec<OutputFormat> {
    OutputFormat::ALL
        .into_iter()
        .filter(|format| is_compatible(*format, category))
        .collect()
}

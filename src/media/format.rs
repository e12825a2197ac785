//! Output formats a conversion job can target.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Aac,
    Flac,
    Mp3,
    Ogg,
    Wav,
    Avi,
    Mkv,
    Mp4,
    Webm,
    Ico,
    Jpg,
    Png,
    Gif,
    /// Document target; no media category converts to it
    Pdf,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 14] = [
        OutputFormat::Aac,
        OutputFormat::Flac,
        OutputFormat::Mp3,
        OutputFormat::Ogg,
        OutputFormat::Wav,
        OutputFormat::Avi,
        OutputFormat::Mkv,
        OutputFormat::Mp4,
        OutputFormat::Webm,
        OutputFormat::Ico,
        OutputFormat::Jpg,
        OutputFormat::Png,
        OutputFormat::Gif,
        OutputFormat::Pdf,
    ];

    /// File extension written for this format, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Aac => "aac",
            OutputFormat::Flac => "flac",
            OutputFormat::Mp3 => "mp3",
            OutputFormat::Ogg => "ogg",
            OutputFormat::Wav => "wav",
            OutputFormat::Avi => "avi",
            OutputFormat::Mkv => "mkv",
            OutputFormat::Mp4 => "mp4",
            OutputFormat::Webm => "webm",
            OutputFormat::Ico => "ico",
            OutputFormat::Jpg => "jpg",
            OutputFormat::Png => "png",
            OutputFormat::Gif => "gif",
            OutputFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = CoreError;

    /// Accepts the extension in any case, with or without a leading dot
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.strip_prefix('.').unwrap_or(s);
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::Format(format!("unknown output format: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!("mp4".parse::<OutputFormat>().unwrap(), OutputFormat::Mp4);
        assert_eq!("WEBM".parse::<OutputFormat>().unwrap(), OutputFormat::Webm);
        assert_eq!(".Flac".parse::<OutputFormat>().unwrap(), OutputFormat::Flac);
        assert!("jpeg".parse::<OutputFormat>().is_err());
        assert!("".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_display_matches_extension() {
        for format in OutputFormat::ALL {
            assert_eq!(format.to_string(), format.extension());
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Mkv).unwrap();
        assert_eq!(json, "\"mkv\"");
        let parsed: OutputFormat = serde_json::from_str("\"gif\"").unwrap();
        assert_eq!(parsed, OutputFormat::Gif);
    }
}

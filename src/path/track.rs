//! Track number extraction for audio CD tracks.
//!
//! Windows exposes the tracks of an audio CD as `X:\TrackNN.cda` files at the drive root.

use crate::error::{CoreError, Result};
use tracing::debug;

use super::grammar::drive_letter;

const TRACK_PREFIX: &str = "Track";
const TRACK_SUFFIX: &str = ".cda";

/// Parse the track index out of a path shaped like `X:\Track<digits>.cda`.
///
/// The word `Track` and the `.cda` extension are matched case-sensitively.
pub fn extract_track_number(path: &str) -> Result<u32> {
    let digits = track_digits(path).ok_or_else(|| {
        debug!("Not a CD track path: {}", path);
        CoreError::Format(format!("{} is not shaped like X:\\Track<number>.cda", path))
    })?;

    digits
        .parse::<u32>()
        .map_err(|e| CoreError::Format(format!("invalid track number in {}: {}", path, e)))
}

/// Check whether a path has the CD track shape
pub fn is_cd_track(path: &str) -> bool {
    track_digits(path).is_some()
}

fn track_digits(path: &str) -> Option<&str> {
    drive_letter(path)?;

    let digits = path[3..]
        .strip_prefix(TRACK_PREFIX)?
        .strip_suffix(TRACK_SUFFIX)?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(digits)
}

//! Optical drive detection.
//!
//! The set of mounted optical drives comes from the caller; nothing here talks to devices.

use super::grammar::drive_letter;

/// Check whether a path lives on one of the given optical drives.
///
/// Letters are compared exactly, so `e` and `E` are different drives. UNC paths
/// and paths without a `X:\` root are never on an optical drive.
pub fn is_optical_drive(path: &str, optical_drive_letters: &[char]) -> bool {
    match drive_letter(path) {
        Some(letter) => optical_drive_letters.contains(&letter),
        None => false,
    }
}

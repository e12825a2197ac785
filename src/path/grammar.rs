//! # Path Grammar
//!
//! Scanner for absolute Windows-style paths.
//!
//! A path is a root followed by zero or more `segment\` pairs and a final filename:
//!
//! ```text
//! path     := root (segment "\")* segment
//! root     := "\\" share "\" | letter ":\"
//! segment  := one or more non-reserved chars, not made only of '.'
//! ```
//!
//! Reserved characters are both separators, `:`, `*`, `?`, `"`, `<`, `>`, `|`, CR and LF.
//! The scanner is a single left-to-right pass, no backtracking.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Path separator used by the grammar
pub const SEPARATOR: char = '\\';

const RESERVED: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|', '\r', '\n'];

/// A path split into its root, directory chain and filename.
///
/// Joining the parts back with [`DecomposedPath::join`] gives the original string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecomposedPath {
    /// Root prefix, either `\\share\` or `X:\`
    pub drive: String,
    /// Directory names between the root and the filename, outermost first
    pub directories: Vec<String>,
    pub filename: String,
}

impl DecomposedPath {
    /// Rebuild the path string from its parts
    pub fn join(&self) -> String {
        let mut path = self.drive.clone();
        for directory in &self.directories {
            path.push_str(directory);
            path.push(SEPARATOR);
        }
        path.push_str(&self.filename);
        path
    }

    /// Filename extension without the leading dot
    pub fn extension(&self) -> Option<&str> {
        extension_of(&self.filename)
    }

    /// Drive letter of a `X:\` root, `None` for UNC roots
    pub fn drive_letter(&self) -> Option<char> {
        drive_letter(&self.drive)
    }

    pub fn is_unc(&self) -> bool {
        self.drive.starts_with("\\\\")
    }
}

fn is_reserved(c: char) -> bool {
    RESERVED.contains(&c)
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && !segment.chars().all(|c| c == '.')
        && !segment.chars().any(is_reserved)
}

/// Byte length of the root prefix, or `None` if the path is not rooted
fn root_len(path: &str) -> Option<usize> {
    if let Some(rest) = path.strip_prefix("\\\\") {
        let end = rest.find(SEPARATOR)?;
        let share = &rest[..end];
        if share.is_empty() || share.chars().any(is_reserved) {
            return None;
        }
        return Some(2 + end + 1);
    }

    drive_letter(path).map(|_| 3)
}

/// Borrowed decomposition shared by validation and [`decompose_path`]
fn scan(path: &str) -> Option<(&str, Vec<&str>, &str)> {
    let (drive, rest) = path.split_at(root_len(path)?);

    let mut segments: Vec<&str> = rest.split(SEPARATOR).collect();
    let filename = segments.pop()?;

    if !is_valid_segment(filename) || !segments.iter().all(|s| is_valid_segment(s)) {
        return None;
    }

    Some((drive, segments, filename))
}

/// Check whether a string is an absolute path accepted by the grammar
pub fn is_valid_path(path: &str) -> bool {
    scan(path).is_some()
}

/// Split a path into drive, directories and filename.
///
/// Fails with [`CoreError::MalformedPath`] when [`is_valid_path`] would return false.
pub fn decompose_path(path: &str) -> Result<DecomposedPath> {
    let (drive, directories, filename) =
        scan(path).ok_or_else(|| CoreError::MalformedPath(path.to_string()))?;

    Ok(DecomposedPath {
        drive: drive.to_string(),
        directories: directories.into_iter().map(str::to_string).collect(),
        filename: filename.to_string(),
    })
}

/// Everything after the last separator, or the whole string if there is none.
///
/// Defined for any input, valid or not.
pub fn file_name(path: &str) -> &str {
    match path.rfind(SEPARATOR) {
        Some(index) => &path[index + SEPARATOR.len_utf8()..],
        None => path,
    }
}

/// Letter of a `X:\` root. Only the root prefix is inspected.
pub fn drive_letter(path: &str) -> Option<char> {
    match path.as_bytes() {
        [letter, b':', b'\\', ..] if letter.is_ascii_alphabetic() => Some(*letter as char),
        _ => None,
    }
}

pub fn has_drive_letter(path: &str) -> bool {
    drive_letter(path).is_some()
}

/// Extension of a filename, without the dot. `None` when there is no dot or nothing follows it.
pub fn extension_of(filename: &str) -> Option<&str> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_paths() {
        assert!(is_valid_path("C:\\file.txt"));
        assert!(is_valid_path("c:\\Users\\me\\Music\\song.mp3"));
        assert!(is_valid_path("\\\\server\\share\\a.txt"));
        assert!(is_valid_path("D:\\Track07.cda"));
        assert!(is_valid_path("C:\\dir\\.gitignore"));
        assert!(is_valid_path("C:\\my files\\no extension"));
    }

    #[test]
    fn test_invalid_roots() {
        assert!(!is_valid_path(""));
        assert!(!is_valid_path("file.txt"));
        assert!(!is_valid_path("relative\\file.txt"));
        assert!(!is_valid_path("1:\\file.txt"));
        assert!(!is_valid_path("C:file.txt"));
        assert!(!is_valid_path("C:/file.txt"));
        assert!(!is_valid_path("\\\\\\share\\a.txt"));
        assert!(!is_valid_path("\\\\server"));
        assert!(!is_valid_path("\\\\ser:ver\\a.txt"));
    }

    #[test]
    fn test_rejects_reserved_characters() {
        for c in ['/', ':', '*', '?', '"', '<', '>', '|', '\r', '\n'] {
            let in_file = format!("C:\\dir\\fi{}le.txt", c);
            let in_dir = format!("C:\\d{}ir\\file.txt", c);
            assert!(!is_valid_path(&in_file), "accepted {:?}", in_file);
            assert!(!is_valid_path(&in_dir), "accepted {:?}", in_dir);
        }
    }

    #[test]
    fn test_rejects_empty_and_dot_segments() {
        assert!(!is_valid_path("C:\\"));
        assert!(!is_valid_path("C:\\dir\\"));
        assert!(!is_valid_path("C:\\dir\\\\file.txt"));
        assert!(!is_valid_path("C:\\.\\file.txt"));
        assert!(!is_valid_path("C:\\..\\file.txt"));
        assert!(!is_valid_path("C:\\dir\\..."));
        assert!(!is_valid_path("\\\\server\\."));
    }

    #[test]
    fn test_decompose_drive_path() {
        let parts = decompose_path("C:\\Users\\me\\Music\\song.mp3").unwrap();
        assert_eq!(parts.drive, "C:\\");
        assert_eq!(parts.directories, vec!["Users", "me", "Music"]);
        assert_eq!(parts.filename, "song.mp3");
        assert_eq!(parts.extension(), Some("mp3"));
        assert_eq!(parts.drive_letter(), Some('C'));
        assert!(!parts.is_unc());
    }

    #[test]
    fn test_decompose_unc_path() {
        let parts = decompose_path("\\\\server\\share\\a.txt").unwrap();
        assert_eq!(parts.drive, "\\\\server\\");
        assert_eq!(parts.directories, vec!["share"]);
        assert_eq!(parts.filename, "a.txt");
        assert_eq!(parts.drive_letter(), None);
        assert!(parts.is_unc());
    }

    #[test]
    fn test_decompose_file_at_root() {
        let parts = decompose_path("E:\\Track01.cda").unwrap();
        assert_eq!(parts.drive, "E:\\");
        assert!(parts.directories.is_empty());
        assert_eq!(parts.filename, "Track01.cda");
    }

    #[test]
    fn test_decompose_invalid_path() {
        match decompose_path("C:\\dir\\") {
            Err(CoreError::MalformedPath(path)) => assert_eq!(path, "C:\\dir\\"),
            other => panic!("expected MalformedPath, got {:?}", other),
        }
    }

    #[test]
    fn test_join_reproduces_input() {
        let paths = [
            "C:\\file.txt",
            "z:\\a\\b\\c\\d.e.f",
            "\\\\nas\\media\\films\\movie.mkv",
            "\\\\nas\\movie.mkv",
            "D:\\spaced name\\ünïcödé\\file",
        ];
        for path in paths {
            let parts = decompose_path(path).unwrap();
            assert_eq!(parts.join(), path);

            let mut rebuilt = parts.drive.clone();
            rebuilt.push_str(&parts.directories.join("\\"));
            if !parts.directories.is_empty() {
                rebuilt.push(SEPARATOR);
            }
            rebuilt.push_str(&parts.filename);
            assert_eq!(rebuilt, path);
        }
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("C:\\dir\\file.txt"), "file.txt");
        assert_eq!(file_name("file.txt"), "file.txt");
        assert_eq!(file_name("C:\\dir\\"), "");
    }

    #[test]
    fn test_drive_letter() {
        assert_eq!(drive_letter("E:\\Track01.cda"), Some('E'));
        assert_eq!(drive_letter("e:\\"), Some('e'));
        assert_eq!(drive_letter("\\\\server\\share\\a.txt"), None);
        assert_eq!(drive_letter("E:"), None);
        assert!(has_drive_letter("C:\\anything"));
        assert!(!has_drive_letter("/usr/bin"));
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("song.mp3"), Some("mp3"));
        assert_eq!(extension_of("archive.tar.gz"), Some("gz"));
        assert_eq!(extension_of("README"), None);
        assert_eq!(extension_of("trailing."), None);
    }
}

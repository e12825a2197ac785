//! # Unique Output Paths
//!
//! Deriva un path di output che non collide con file esistenti:
//! `video.mp4`, poi `video (2).mp4`, `video (3).mp4`, ...
//!
//! L'esistenza viene chiesta al chiamante tramite un predicato, così il modulo
//! resta senza side effect e testabile con uno stub.
//!
//! ## Limite noto:
//! È un pattern check-then-act. Un altro processo può creare lo stesso candidato tra
//! il controllo e la scrittura. Chi crea davvero il file dovrebbe usare una primitiva
//! atomica (`OpenOptions::create_new`) e trattare questo path solo come suggerimento.

use std::path::Path;
use tracing::debug;

const FIRST_SUFFIX: u64 = 2;

/// Return `desired_path` if it is free, otherwise the first free `stem (N).ext` with N >= 2.
///
/// `exists` is queried once per candidate, in order. The result was free at the moment
/// it was checked, nothing more.
pub fn allocate_unique_path<F>(desired_path: &str, mut exists: F) -> String
where
    F: FnMut(&str) -> bool,
{
    if !exists(desired_path) {
        return desired_path.to_string();
    }

    let (stem, extension) = split_extension(desired_path);
    let mut counter = FIRST_SUFFIX;
    loop {
        let candidate = format!("{} ({}){}", stem, counter, extension);
        if !exists(&candidate) {
            debug!("Allocated unique path: {} -> {}", desired_path, candidate);
            return candidate;
        }
        debug!("Candidate already taken: {}", candidate);
        counter += 1;
    }
}

/// Existence predicate backed by the real filesystem
pub fn file_exists(path: &str) -> bool {
    Path::new(path).exists()
}

/// Split at the last dot of the final component; the extension keeps its dot.
fn split_extension(path: &str) -> (&str, &str) {
    let name_start = path.rfind(['\\', '/']).map(|i| i + 1).unwrap_or(0);
    match path[name_start..].rfind('.') {
        Some(dot) if name_start + dot + 1 < path.len() => path.split_at(name_start + dot),
        _ => (path, ""),
    }
}

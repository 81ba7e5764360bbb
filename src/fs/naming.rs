//! File and folder name generation.

use deunicode::deunicode_with_tofu;

use crate::api::Track;

/// Characters removed from every name used on disk.
pub const DENYLIST: &str = "#%&@${}|\\/?'\";:,<>*+=!";

/// Make a free-form title safe to use as a file or folder name.
///
/// Non-ASCII characters are transliterated (characters without an ASCII
/// rendering are dropped), then control characters and [`DENYLIST`]
/// characters are removed.
pub fn sanitize_name(name: &str) -> String {
    deunicode_with_tofu(name, "")
        .chars()
        .filter(|c| c.is_ascii() && !c.is_ascii_control() && !DENYLIST.contains(*c))
        .collect()
}

/// Folder name for a mix, falling back to its id when the title sanitizes away.
pub fn mix_folder_name(name: &str, mix_id: u64) -> String {
    let sanitized = sanitize_name(name);

    // Names made only of dots would point at the base folder or its parents.
    if sanitized.trim().chars().all(|c| c == '.') {
        mix_id.to_string()
    } else {
        sanitized
    }
}

/// File name for a downloaded track: `name - performer (release).ext`.
pub fn track_file_name(track: &Track, extension: &str) -> String {
    let stem = format!(
        "{} - {} ({})",
        track.name,
        track.performer,
        track.release_name.as_deref().unwrap_or_default()
    );

    if extension.is_empty() {
        sanitize_name(&stem)
    } else {
        sanitize_name(&format!("{}.{}", stem, extension))
    }
}

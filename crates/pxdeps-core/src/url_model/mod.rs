//! Local filename derivation for registry URLs.

mod path;
mod sanitize;

pub use path::filename_from_url_path;
pub use sanitize::sanitize_filename_for_linux;

/// Fallback when the URL path yields nothing usable.
const DEFAULT_FILENAME: &str = "download.bin";

/// Derives the local filename a resource is saved under.
///
/// Takes the last path segment of `url` and sanitizes it for Linux. Falls back
/// to `download.bin` for an empty path or a reserved name.
pub fn derive_filename(url: &str) -> String {
    let Some(raw) = filename_from_url_path(url) else {
        return DEFAULT_FILENAME.to_string();
    };

    let sanitized = sanitize_filename_for_linux(&raw);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        DEFAULT_FILENAME.to_string()
    } else {
        sanitized
    }
}

//! Filename extraction from URL path.

/// Last non-empty path segment of `url`, ignoring query and fragment.
///
/// Returns `None` if the URL cannot be parsed or the path is empty/root.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_path() {
        assert_eq!(
            filename_from_url_path("https://host.example/release_data/components.cif").as_deref(),
            Some("components.cif")
        );
    }

    #[test]
    fn root_or_empty() {
        assert_eq!(filename_from_url_path("https://host.example/"), None);
        assert_eq!(filename_from_url_path("https://host.example"), None);
    }

    #[test]
    fn query_and_fragment_ignored() {
        assert_eq!(
            filename_from_url_path("https://host.example/model.pt?sig=abc#x").as_deref(),
            Some("model.pt")
        );
    }
}

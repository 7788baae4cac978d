use url::Url;

/// Turn a search keyword into a listing path segment
pub fn slugify(keyword: &str) -> String {
    keyword.trim().replace(' ', "-")
}

/// Extract a vendor name from a seller profile URL
///
/// Takes the last non-empty path segment, turns `+` into spaces and decodes
/// percent escapes.
pub fn vendor_from_url(url: &Url) -> Option<String> {
    let segment = url
        .path_segments()?
        .rfind(|s| !s.is_empty())?;

    let spaced = segment.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(e) => {
            ::log::debug!("Keeping raw vendor segment {}: {}", segment, e);
            Some(spaced)
        }
    }
}

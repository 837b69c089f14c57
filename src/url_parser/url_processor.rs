use std::borrow::Cow;

use tracing::trace;

use super::NormalizeError;

/// Slices the path out of URL text exactly as it was written
///
/// `Url::path()` has already collapsed `.`/`..` segments and re-encoded the
/// path, so the candidate is taken from the text instead. Fragment and query
/// are cut first. A URL whose scheme is not followed by `/` (e.g.
/// `http:jerry/xxxx`) is opaque and has no path.
pub fn raw_path(text: &str) -> &str {
    let rest = text.split_once(':').map_or(text, |(_, rest)| rest);
    let rest = rest.split_once('#').map_or(rest, |(before, _)| before);
    let rest = rest.split_once('?').map_or(rest, |(before, _)| before);

    match rest.strip_prefix("//") {
        Some(authority_and_path) => authority_and_path
            .find('/')
            .map_or("", |start| &authority_and_path[start..]),
        None if rest.starts_with('/') => rest,
        None => "",
    }
}

/// Extracts the first non-empty segment of a raw URL path
///
/// The whole path is percent-decoded before it is split, so an encoded `/`
/// separates segments. Bytes that do not decode to UTF-8 are replaced with
/// U+FFFD, which no handle rule accepts. A single leading `@` is removed.
///
/// # Arguments
/// * `path` - Path text as returned by [`raw_path`]
///
/// # Returns
/// * `Ok(String)` - The candidate token, possibly empty (e.g. for `/@`)
/// * `Err(NormalizeError::InvalidSyntax)` - A `%` is not followed by two hex digits
/// * `Err(NormalizeError::MissingPath)` - The path has no segments at all
pub fn first_path_segment(path: &str) -> Result<String, NormalizeError> {
    trace!("Processing path: {}", path);
    check_percent_escapes(path)?;

    let decoded_bytes = urlencoding::decode_binary(path.as_bytes());
    let decoded: Cow<'_, str> = String::from_utf8_lossy(&decoded_bytes);

    let segment = decoded
        .split('/')
        .find(|segment| !segment.is_empty())
        .ok_or_else(|| NormalizeError::MissingPath {
            path: path.to_string(),
        })?;
    trace!("First path segment: {}", segment);

    Ok(strip_leading_at_symbol(segment).to_string())
}

fn check_percent_escapes(path: &str) -> Result<(), NormalizeError> {
    let bytes = path.as_bytes();
    for (i, _) in path.match_indices('%') {
        let escape = bytes.get(i + 1..i + 3);
        if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
            let end = (i + 3).min(path.len());
            return Err(NormalizeError::InvalidSyntax(format!(
                "invalid URL escape {:?}",
                String::from_utf8_lossy(&bytes[i..end])
            )));
        }
    }
    Ok(())
}

pub(crate) fn strip_leading_at_symbol(s: &str) -> &str {
    s.strip_prefix('@').unwrap_or(s)
}

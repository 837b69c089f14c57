use tracing::{debug, trace};

use super::url_processor::{first_path_segment, raw_path, strip_leading_at_symbol};
use super::url_validator::{parse_with_default_scheme, validate_scheme};
use super::NormalizeError;

/// Reduces raw input to the candidate handle it names
///
/// Steps:
/// 1. Input that is empty after trimming whitespace yields an empty candidate
/// 2. Input without a `/` is a bare token, returned untrimmed minus a leading `@`
/// 3. Anything else is parsed as an `http`/`https` URL (scheme optional) and
///    reduced to the first segment of its path as written, percent-decoded
///
/// An empty candidate is not an error here. Deciding whether an empty token
/// is acceptable is left to the platform validators.
///
/// # Arguments
/// * `raw` - Untrusted user input
///
/// # Returns
/// * `Result<String, NormalizeError>` - The candidate token, or why no candidate could be found
pub fn normalize(raw: &str) -> Result<String, NormalizeError> {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        trace!("Input is empty after trimming");
        return Ok(String::new());
    }

    // Whitespace around a bare token is kept so the validators reject it.
    if !cleaned.contains('/') {
        trace!("No path separator in input, treating it as a bare token");
        return Ok(strip_leading_at_symbol(raw).to_string());
    }

    let (parsed, text) = parse_with_default_scheme(cleaned)?;
    validate_scheme(&parsed)?;

    let candidate = first_path_segment(raw_path(&text))?;
    debug!("Extracted candidate '{}' from {}", candidate, parsed);

    Ok(candidate)
}

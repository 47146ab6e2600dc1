/// Raster formats the encoder accepts as input.
pub const SUPPORTED_INPUT_FORMATS: [&str; 4] = ["pam", "ppm", "pgm", "png"];

/// True iff `uri` is a data URI (`data:[<mediatype>][;base64],<payload>`).
///
/// Embedded payloads live inside the document and are never re-encoded or
/// copied, so this is the first gate in the image loop.
pub fn is_embedded(uri: &str) -> bool {
    let Some(rest) = uri.strip_prefix("data:") else {
        return false;
    };
    let Some((header, _payload)) = rest.split_once(',') else {
        return false;
    };
    let media_type = header.strip_suffix(";base64").unwrap_or(header);
    // An empty media type is legal ("data:,..."); a present one must look
    // like "type/subtype".
    media_type.is_empty()
        || media_type
            .split_once('/')
            .is_some_and(|(t, s)| !t.is_empty() && !s.is_empty())
}

/// Substring after the last `.`, or "" when the uri has no extension.
pub fn file_extension(uri: &str) -> &str {
    match uri.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => "",
    }
}

/// Case-insensitive membership test against [`SUPPORTED_INPUT_FORMATS`].
pub fn is_supported_raster_format(ext: &str) -> bool {
    SUPPORTED_INPUT_FORMATS
        .iter()
        .any(|s| s.eq_ignore_ascii_case(ext))
}

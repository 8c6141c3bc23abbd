use comments_core::Comment;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("response body is not valid UTF-8: {0}")]
    InvalidUtf8(String),
    #[error("{0}")]
    Json(String),
}

/// Decode a `/comments` response body.
///
/// Parsed as JSON5, so unquoted keys, single-quoted strings, comments and
/// trailing commas are accepted alongside strict JSON. BOM and surrounding
/// whitespace are ignored. An empty body or a bare `null` means the body is
/// absent and yields `Ok(None)`.
pub fn decode_comments(bytes: &[u8]) -> Result<Option<Vec<Comment>>, DecodeError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let text =
        std::str::from_utf8(bytes).map_err(|err| DecodeError::InvalidUtf8(err.to_string()))?;
    let text = text.trim();

    if text.is_empty() || text == "null" {
        return Ok(None);
    }

    json5::from_str::<Vec<Comment>>(text)
        .map(Some)
        .map_err(|err| DecodeError::Json(err.to_string()))
}

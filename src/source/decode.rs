//! Response handling for the comment feed.

use crate::domain::error::{CommentaryError, Result};
use crate::domain::Record;

/// Number of records kept from the feed when not configured otherwise.
pub const DEFAULT_RECORD_LIMIT: usize = 300;

/// Longest response excerpt carried into a status error.
const MAX_DETAIL_CHARS: usize = 200;

/// Accepts 2xx statuses and rejects everything else.
///
/// The host reports transport failures as a non-2xx response whose body is
/// the error text, so the first line of a rejected body becomes the detail.
///
/// # Errors
///
/// Returns [`CommentaryError::FetchStatus`] for any status outside `200..=299`.
pub fn check_status(status: u16, body: &[u8]) -> Result<()> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    let text = String::from_utf8_lossy(body);
    let detail: String = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .chars()
        .take(MAX_DETAIL_CHARS)
        .collect();
    Err(CommentaryError::FetchStatus { status, detail })
}

/// Decodes a JSON array of records, keeping only the first `limit` entries.
///
/// The whole array is parsed before truncation, so a malformed entry past the
/// limit still fails the decode.
///
/// # Errors
///
/// Returns [`CommentaryError::Decode`] if the body is not a JSON array of
/// records.
///
/// # Examples
///
/// ```
/// use commentary::source::decode_records;
///
/// let body = br#"[
///     {"postId":1,"id":1,"name":"a","email":"a@x.io","body":"one"},
///     {"postId":1,"id":2,"name":"b","email":"b@x.io","body":"two"}
/// ]"#;
/// let records = decode_records(body, 1)?;
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].name, "a");
/// # Ok::<(), commentary::CommentaryError>(())
/// ```
pub fn decode_records(body: &[u8], limit: usize) -> Result<Vec<Record>> {
    let _span = tracing::debug_span!("decode_records", body_len = body.len(), limit).entered();

    let mut records: Vec<Record> = serde_json::from_slice(body)?;
    let received = records.len();
    records.truncate(limit);

    tracing::debug!(received, kept = records.len(), "records decoded");
    Ok(records)
}

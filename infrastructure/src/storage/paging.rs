//! Cursor arithmetic shared by the site stores
//!
//! Stores read one entry past the requested page. The extra entry only
//! signals that more remain; it is never returned.

/// Entries to read for a page of `limit`
pub(crate) fn fetch_len(limit: usize) -> usize {
    limit.saturating_add(1)
}

/// `fetch_len` as an S3 `max_keys` value
#[cfg_attr(not(feature = "s3"), allow(dead_code))]
pub(crate) fn max_keys(limit: usize) -> i32 {
    i32::try_from(fetch_len(limit)).unwrap_or(i32::MAX)
}

/// Cut an over-read to `limit` entries.
///
/// Returns the kept entries and, when entries were dropped, the key of the
/// last kept one as the next cursor.
pub(crate) fn split_page<T>(
    mut entries: Vec<T>,
    limit: usize,
    key_of: impl Fn(&T) -> &str,
) -> (Vec<T>, Option<String>) {
    if entries.len() <= limit {
        return (entries, None);
    }
    entries.truncate(limit);
    let cursor = entries.last().map(|entry| key_of(entry).to_string());
    (entries, cursor)
}

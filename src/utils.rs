//! Helpers for file naming and log output.
//!
//! - Filename sanitisation for article titles
//! - String truncation for log previews

/// Characters that are not allowed in a path component on common filesystems.
pub const INVALID_FILENAME_CHARS: [char; 9] = ['<', '>', ':', '"', '\\', '/', '|', '?', '*'];

/// Turn an article title into the name of its output file.
///
/// Every character from [`INVALID_FILENAME_CHARS`] is removed and `.txt` is
/// appended. Nothing else is normalised, so titles that differ only by
/// removed characters map to the same file.
///
/// # Examples
///
/// ```
/// use rss_reader::utils::valid_filename;
///
/// assert_eq!(valid_filename("A/B:C"), "ABC.txt");
/// assert_eq!(valid_filename("Hello"), "Hello.txt");
/// ```
pub fn valid_filename(title: &str) -> String {
    let mut name = title.replace(INVALID_FILENAME_CHARS, "");
    name.push_str(".txt");
    name
}

/// Truncate a string for logging purposes.
///
/// Strings longer than `max` bytes are cut at the nearest character boundary
/// at or below `max`, with `"…(+N bytes)"` appended.
///
/// # Examples
///
/// ```
/// use rss_reader::utils::truncate_for_log;
///
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(15), 10), "aaaaaaaaaa…(+5 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

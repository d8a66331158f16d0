//! Formatting of compact version timestamps

/// Shown when the version marker is empty
pub const UNKNOWN_VERSION: &str = "unknown version";

/// Length of a compact `YYYYMMDDHHmm` timestamp
const COMPACT_TIMESTAMP_LEN: usize = 12;

/// Formats a version marker for display.
///
/// A 12-character marker is read positionally as `YYYYMMDDHHmm` and rendered
/// as `YYYY-MM-DD HH:mm`. The characters are not validated, so any 12-character
/// string is split the same way. Other markers are returned trimmed.
///
/// # Examples
///
/// ```
/// use footer_version::version::format::format_version;
///
/// assert_eq!(format_version("202401011230"), "2024-01-01 12:30");
/// assert_eq!(format_version("v2.3.1"), "v2.3.1");
/// assert_eq!(format_version(""), "unknown version");
/// ```
pub fn format_version(input: &str) -> String {
    if input.is_empty() {
        return UNKNOWN_VERSION.to_string();
    }

    let cleaned = input.trim();
    let chars: Vec<char> = cleaned.chars().collect();

    if chars.len() != COMPACT_TIMESTAMP_LEN {
        return cleaned.to_string();
    }

    let part = |start: usize, end: usize| chars[start..end].iter().collect::<String>();

    format!(
        "{}-{}-{} {}:{}",
        part(0, 4),
        part(4, 6),
        part(6, 8),
        part(8, 10),
        part(10, 12)
    )
}

use chrono::NaiveDate;

/// Extracts the 1-based position encoded in an id of the shape `<prefix>-<N>`.
///
/// Returns `None` when there is no dash, the suffix is not made of ASCII digits,
/// or the suffix is zero.
pub fn id_suffix(id: &str) -> Option<u32> {
    let (_, suffix) = id.trim().rsplit_once('-')?;
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix.parse::<u32>().ok().filter(|n| *n > 0)
}

/// Splits `taxonomy:tag` on the namespace separator. Both halves must be non-empty.
pub fn split_qualified_name(name: &str) -> Option<(&str, &str)> {
    name.split_once(':')
        .filter(|(taxonomy, tag)| !taxonomy.is_empty() && !tag.is_empty())
}

/// Parses an ISO `YYYY-MM-DD` date, ignoring surrounding whitespace.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

//! Pick the `Location` header out of raw response header lines.

/// Returns the last non-empty `Location` value, if any.
pub(crate) fn location(lines: &[String]) -> Option<String> {
    lines
        .iter()
        .filter_map(|line| line.trim().split_once(':'))
        .filter(|(name, _)| name.trim().eq_ignore_ascii_case("location"))
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
        .last()
        .map(str::to_string)
}

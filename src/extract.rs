//! src/extract.rs

/// Pulls the grouping value out of one record line.
///
/// A line matches when its trimmed form starts with `prefix`. Matching
/// lines are split on single space characters and the second token is
/// returned verbatim. The split is on single spaces, not whitespace runs,
/// so consecutive spaces yield empty tokens.
pub fn extract<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let trimmed = line.trim();
    if !trimmed.starts_with(prefix) {
        return None;
    }
    trimmed.split(' ').nth(1)
}

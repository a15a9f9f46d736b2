//! Glyphs and small formatting helpers

/// Connector for a node with more siblings after it.
pub(crate) const BRANCH: &str = "├───";
/// Connector for the last sibling at a level.
pub(crate) const LAST: &str = "└───";
/// Continuation under an ancestor that still has siblings below.
pub(crate) const VERTICAL: &str = "│\t";
/// Continuation under an ancestor that was the last sibling.
pub(crate) const BLANK: &str = "\t";

pub(crate) fn connector(is_last: bool) -> &'static str {
    if is_last { LAST } else { BRANCH }
}

/// Prefix for the children of a node printed with `prefix`.
pub(crate) fn child_prefix(prefix: &str, is_last: bool) -> String {
    let continuation = if is_last { BLANK } else { VERTICAL };
    format!("{}{}", prefix, continuation)
}

/// Suffix appended to a file line.
pub(crate) fn size_suffix(size: u64) -> String {
    if size == 0 {
        " (empty)".to_string()
    } else {
        format!(" ({}b)", size)
    }
}

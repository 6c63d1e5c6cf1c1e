//! Who may see the edit trigger on a record.

/// True only when the record's author is the signed-in viewer.
///
/// Missing authors and empty viewer ids never match.
pub fn can_edit(viewer_id: &str, author: Option<&str>) -> bool {
    !viewer_id.is_empty() && author == Some(viewer_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_matches_viewer() {
        assert!(can_edit("u1", Some("u1")));
    }

    #[test]
    fn other_author_or_none_is_hidden() {
        assert!(!can_edit("u1", Some("u2")));
        assert!(!can_edit("u1", None));
        assert!(!can_edit("", Some("")));
        assert!(!can_edit("", None));
    }
}

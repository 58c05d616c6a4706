//! Word counting for comment bodies.

/// Count whitespace-delimited tokens in a comment body.
///
/// A word is a contiguous run of non-whitespace characters. Markup and
/// punctuation are not stripped, so a body containing HTML tags counts
/// them as words; callers wanting rendered-text counts must strip first.
pub fn count_words(body: &str) -> i64 {
    body.split_whitespace().count() as i64
}

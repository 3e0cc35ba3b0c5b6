/// Number of characters of context quoted after an error offset.
pub const SNIPPET_LEN: usize = 10;

/// Returns up to [`SNIPPET_LEN`] characters of `source` starting at byte
/// `offset`.
///
/// An offset past the end, or one that does not fall on a character boundary,
/// yields an empty snippet.
///
/// ## Example
/// ```
/// use calcexpr::util::text::snippet;
///
/// assert_eq!(snippet("a = 2 $ 3 + 4 + 5", 6), "$ 3 + 4 + ");
/// assert_eq!(snippet("1 +", 3), "");
/// ```
#[must_use]
pub fn snippet(source: &str, offset: usize) -> String {
    source.get(offset..)
          .map(|rest| rest.chars().take(SNIPPET_LEN).collect())
          .unwrap_or_default()
}

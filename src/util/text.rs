/// Converts a byte offset into `source` to a character offset.
///
/// An offset at or past the end of `source` yields its character count.
///
/// ## Example
/// ```
/// use funcplot::util::text::char_offset;
///
/// assert_eq!(char_offset("2*x", 2), 2);
/// assert_eq!(char_offset("π+x", 3), 2);
/// ```
#[must_use]
pub fn char_offset(source: &str, byte: usize) -> usize {
    source.char_indices()
          .take_while(|&(index, _)| index < byte)
          .count()
}

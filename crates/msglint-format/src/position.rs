/// Converts a byte offset from the lexer into a character offset.
pub(crate) fn char_index(input: &str, byte: usize) -> usize {
    input
        .get(..byte)
        .map(|prefix| prefix.chars().count())
        .unwrap_or_else(|| input.chars().count())
}

//! Token definitions for the two message format dialects.
//!
//! Both lexers are total: every input character lands in some token, so the
//! `Error` variants only appear if logos itself rejects a slice.

mod pattern;
mod printf;

pub use logos::Logos;
pub use pattern::PatternToken;
pub use printf::PrintfToken;

use std::ops::Range;

/// Lexes a printf-style format string into spanned tokens.
pub fn lex_printf<'src>(
    input: &'src str,
) -> impl Iterator<Item = (PrintfToken<'src>, Range<usize>)> + 'src {
    PrintfToken::lexer(input)
        .spanned()
        .map(|(token, span)| (token.unwrap_or(PrintfToken::Error), span))
}

/// Lexes an indexed-placeholder pattern into spanned tokens.
pub fn lex_pattern<'src>(
    input: &'src str,
) -> impl Iterator<Item = (PatternToken<'src>, Range<usize>)> + 'src {
    PatternToken::lexer(input)
        .spanned()
        .map(|(token, span)| (token.unwrap_or(PatternToken::Error), span))
}

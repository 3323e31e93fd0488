//! Printf-style format strings.
//!
//! The scanner walks lexer tokens: literal text is skipped, `%%` and `%n`
//! are recorded without consuming an argument, and every other specifier is
//! decomposed and checked before it is counted. The first malformed
//! specifier stops the scan.

mod specifier;


pub use specifier::{ArgumentIndex, Conversion, Flag, Specifier};

use msglint_lexer::{PrintfToken, lex_printf};

use crate::FormatGrammar;
use crate::error::FormatError;
use crate::kind::FormatKind;
use crate::position::char_index;
use crate::report::FormatReport;

/// A fully checked printf-style format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintfFormat<'src> {
    input: &'src str,
    specifiers: Vec<Specifier>,
    argument_count: usize,
}

impl<'src> PrintfFormat<'src> {
    pub fn parse(input: &'src str) -> Result<Self, FormatError> {
        let mut scanner = Scanner::default();
        scanner.run(input)?;
        Ok(Self {
            input,
            argument_count: scanner.counter.required(),
            specifiers: scanner.specifiers,
        })
    }

    pub fn input(&self) -> &'src str {
        self.input
    }

    /// All specifiers in source order, `%%` and `%n` included.
    pub fn specifiers(&self) -> &[Specifier] {
        &self.specifiers
    }

    /// The minimum number of arguments needed to format without a missing argument.
    pub fn argument_count(&self) -> usize {
        self.argument_count
    }
}

impl FormatGrammar for PrintfFormat<'_> {
    const KIND: FormatKind = FormatKind::Printf;

    fn scan(input: &str) -> FormatReport {
        let mut scanner = Scanner::default();
        let outcome = scanner.run(input);
        let argument_count = scanner.counter.required();
        tracing::trace!(
            input,
            argument_count,
            valid = outcome.is_ok(),
            "scanned printf format"
        );
        match outcome {
            Ok(()) => FormatReport::valid(Self::KIND, argument_count),
            Err(error) => FormatReport::invalid(Self::KIND, argument_count, error),
        }
    }
}

#[derive(Debug, Default)]
struct Scanner {
    specifiers: Vec<Specifier>,
    counter: ArgumentCounter,
}

impl Scanner {
    fn run(&mut self, input: &str) -> Result<(), FormatError> {
        let mut tokens = lex_printf(input).peekable();
        while let Some((token, span)) = tokens.next() {
            let at = char_index(input, span.start);
            match token {
                PrintfToken::Literal(_) => {}
                PrintfToken::Percent => {
                    self.specifiers
                        .push(Specifier::escape(at, Conversion::Percent));
                }
                PrintfToken::LineSeparator => {
                    self.specifiers
                        .push(Specifier::escape(at, Conversion::LineSeparator));
                }
                PrintfToken::Specifier(text) => {
                    let spec = Specifier::parse(at, text)?;
                    if spec.conversion.consumes_argument() {
                        self.counter.consume(spec.index, at)?;
                    }
                    self.specifiers.push(spec);
                }
                PrintfToken::Stray | PrintfToken::Error => {
                    return Err(match tokens.peek() {
                        None => FormatError::DanglingPercent { at },
                        Some((_, next_span)) => FormatError::UnknownConversion {
                            at,
                            found: input[next_span.clone()].chars().next().unwrap_or('%'),
                        },
                    });
                }
            }
        }
        Ok(())
    }
}

/// Tracks the arguments consumed so far.
///
/// Ordinary specifiers advance a sequential cursor independently of explicit
/// `n$` indices; `<` reuses whichever argument was used last.
#[derive(Debug, Default)]
struct ArgumentCounter {
    ordinary: usize,
    highest_explicit: usize,
    last: Option<usize>,
}

impl ArgumentCounter {
    fn consume(&mut self, index: ArgumentIndex, at: usize) -> Result<(), FormatError> {
        match index {
            ArgumentIndex::Next => {
                self.ordinary += 1;
                self.last = Some(self.ordinary);
            }
            ArgumentIndex::Explicit(n) => {
                self.highest_explicit = self.highest_explicit.max(n);
                self.last = Some(n);
            }
            ArgumentIndex::Previous => {
                if self.last.is_none() {
                    return Err(FormatError::MissingPreviousArgument { at });
                }
            }
        }
        Ok(())
    }

    fn required(&self) -> usize {
        self.ordinary.max(self.highest_explicit)
    }
}

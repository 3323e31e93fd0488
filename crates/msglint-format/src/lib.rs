//! # msglint-format
//!
//! Syntax checking and argument counting for message format strings.
//!
//! Two dialects are supported, selected by [`FormatKind`]:
//!
//! - [`FormatKind::Printf`]: `%`-introduced conversions such as `"%s took %.2f ms"`.
//! - [`FormatKind::MessagePattern`]: indexed placeholders such as `"{0} took {1,number} ms"`.
//!
//! Every check produces a [`FormatReport`] carrying validity, a summary
//! message when invalid, and the number of arguments the string needs.

mod error;
mod kind;
mod pattern;
mod position;
mod printf;
mod report;

pub use error::FormatError;
pub use kind::{FormatKind, ParseFormatKindError};
pub use pattern::{FormatType, MessagePattern, Placeholder};
pub use printf::{ArgumentIndex, Conversion, Flag, PrintfFormat, Specifier};
pub use report::FormatReport;

/// A format dialect that can be scanned into a [`FormatReport`].
pub trait FormatGrammar {
    /// The dialect this grammar implements.
    const KIND: FormatKind;

    /// Scans `input`, stopping at the first malformed construct.
    fn scan(input: &str) -> FormatReport;
}

/// Checks `input` under the given dialect.
pub fn validate_format(kind: FormatKind, input: &str) -> FormatReport {
    kind.validate(input)
}

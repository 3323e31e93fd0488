use crate::kind::FormatKind;

/// Syntax errors found while scanning a format string.
///
/// Positions are character offsets into the scanned string, pointing at the
/// `%` of a printf specifier or the `{`/`'` that opened a pattern construct.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// A `%` at the very end of the string.
    #[error("dangling '%' at index {at}, a conversion must follow")]
    DanglingPercent { at: usize },
    /// A `%` followed by something that cannot start a specifier.
    #[error("unknown conversion '{found}' at index {at}")]
    UnknownConversion { at: usize, found: char },
    /// `%t` or `%T` without a suffix.
    #[error("missing date/time suffix after '{prefix}' at index {at}")]
    MissingDateTimeSuffix { at: usize, prefix: char },
    #[error("unknown date/time suffix '{suffix}' at index {at}")]
    UnknownDateTimeSuffix { at: usize, suffix: char },
    #[error("duplicate flag '{flag}' in specifier at index {at}")]
    DuplicateFlag { at: usize, flag: char },
    /// `-` or `0` without a width.
    #[error("flag '{flag}' requires a width in specifier at index {at}")]
    MissingWidth { at: usize, flag: char },
    #[error("flags '{first}' and '{second}' cannot be combined in specifier at index {at}")]
    IllegalFlagCombination { at: usize, first: char, second: char },
    #[error("flag '{flag}' does not apply to conversion '{conversion}' at index {at}")]
    FlagMismatch {
        at: usize,
        flag: char,
        conversion: char,
    },
    #[error("precision is not allowed for conversion '{conversion}' at index {at}")]
    IllegalPrecision { at: usize, conversion: char },
    #[error("width is not allowed for conversion '{conversion}' at index {at}")]
    IllegalWidth { at: usize, conversion: char },
    /// `%0$s`; explicit indices are one-based.
    #[error("argument index must be at least 1 in specifier at index {at}")]
    ZeroArgumentIndex { at: usize },
    /// `%<s` before any specifier consumed an argument.
    #[error("relative index '<' at index {at} has no previous argument")]
    MissingPreviousArgument { at: usize },
    /// The specifier lexed but its parts could not be decomposed.
    #[error("malformed specifier '{specifier}' at index {at}: {reason}")]
    MalformedSpecifier {
        at: usize,
        specifier: String,
        reason: String,
    },
    /// A `'` opened a quoted section that never closes.
    #[error("unterminated quote starting at index {at}")]
    UnterminatedQuote { at: usize },
    /// A `{` without its matching `}`.
    #[error("unterminated placeholder starting at index {at}")]
    UnterminatedPlaceholder { at: usize },
    #[error("missing argument index in placeholder at index {at}")]
    MissingArgumentIndex { at: usize },
    #[error("non-numeric argument index '{found}' in placeholder at index {at}")]
    InvalidArgumentIndex { at: usize, found: String },
    #[error("argument index '{found}' is too large in placeholder at index {at}")]
    ArgumentIndexOverflow { at: usize, found: String },
    #[error("unknown format type '{found}' in placeholder at index {at}{}", suggestion_suffix(.suggestion))]
    UnknownFormatType {
        at: usize,
        found: String,
        suggestion: Option<&'static str>,
    },
    /// The placeholder body does not follow `index[,type[,style]]`.
    #[error("malformed placeholder at index {at}: {reason}")]
    MalformedPlaceholder { at: usize, reason: String },
}

fn suggestion_suffix(suggestion: &Option<&'static str>) -> String {
    match suggestion {
        Some(name) => format!(", did you mean '{}'?", name),
        None => String::new(),
    }
}

impl FormatError {
    /// Character offset of the construct that failed.
    pub fn position(&self) -> usize {
        match self {
            FormatError::DanglingPercent { at }
            | FormatError::UnknownConversion { at, .. }
            | FormatError::MissingDateTimeSuffix { at, .. }
            | FormatError::UnknownDateTimeSuffix { at, .. }
            | FormatError::DuplicateFlag { at, .. }
            | FormatError::MissingWidth { at, .. }
            | FormatError::IllegalFlagCombination { at, .. }
            | FormatError::FlagMismatch { at, .. }
            | FormatError::IllegalPrecision { at, .. }
            | FormatError::IllegalWidth { at, .. }
            | FormatError::ZeroArgumentIndex { at }
            | FormatError::MissingPreviousArgument { at }
            | FormatError::MalformedSpecifier { at, .. }
            | FormatError::UnterminatedQuote { at }
            | FormatError::UnterminatedPlaceholder { at }
            | FormatError::MissingArgumentIndex { at }
            | FormatError::InvalidArgumentIndex { at, .. }
            | FormatError::ArgumentIndexOverflow { at, .. }
            | FormatError::UnknownFormatType { at, .. }
            | FormatError::MalformedPlaceholder { at, .. } => *at,
        }
    }

    /// The one-line summary reported for this error in a `kind` string.
    pub fn summary(&self, kind: FormatKind) -> String {
        format!("Invalid {} format: {}", kind, self)
    }
}

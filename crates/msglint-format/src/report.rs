use crate::error::FormatError;
use crate::kind::FormatKind;

/// The outcome of checking one format string.
///
/// `argument_count` is always populated. For an invalid string it is the
/// count required by the well-formed text preceding the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatReport {
    kind: FormatKind,
    argument_count: usize,
    error: Option<FormatError>,
}

impl FormatReport {
    pub fn valid(kind: FormatKind, argument_count: usize) -> Self {
        Self {
            kind,
            argument_count,
            error: None,
        }
    }

    pub fn invalid(kind: FormatKind, argument_count: usize, error: FormatError) -> Self {
        Self {
            kind,
            argument_count,
            error: Some(error),
        }
    }

    pub fn kind(&self) -> FormatKind {
        self.kind
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub fn argument_count(&self) -> usize {
        self.argument_count
    }

    pub fn error(&self) -> Option<&FormatError> {
        self.error.as_ref()
    }

    /// Human readable description of the failure, present only when invalid.
    pub fn summary_message(&self) -> Option<String> {
        self.error.as_ref().map(|error| error.summary(self.kind))
    }
}

use std::fmt::{Display, Formatter};

use msglint_format::{FormatError, FormatKind};

use crate::declaration::Declaration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum Severity {
    #[default]
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
        }
    }
}

/// What a finding reports. `Display` renders the finding's message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindingKind {
    /// A second or later tagged declaration in one overload group.
    DuplicateMessageTag,
    /// The effective format string does not scan.
    InvalidFormat { kind: FormatKind, error: FormatError },
    /// The format needs a different number of arguments than the declaration takes.
    ParameterCountMismatch {
        format: String,
        required: usize,
        provided: usize,
    },
}

impl FindingKind {
    pub fn code(&self) -> &'static str {
        match self {
            FindingKind::DuplicateMessageTag => "duplicate-message-tag",
            FindingKind::InvalidFormat { .. } => "invalid-format",
            FindingKind::ParameterCountMismatch { .. } => "parameter-count-mismatch",
        }
    }
}

impl Display for FindingKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FindingKind::DuplicateMessageTag => f.write_str(
                "Only one declaration with the same name and parameter count is allowed to carry the message tag.",
            ),
            FindingKind::InvalidFormat { kind, error } => f.write_str(&error.summary(*kind)),
            FindingKind::ParameterCountMismatch {
                format,
                required,
                provided,
            } => write!(
                f,
                "Parameter count does not match for format '{}'. Required: {} Provided: {}",
                format, required, provided
            ),
        }
    }
}

/// A single validation error attributed to one input declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding<'d> {
    target: &'d Declaration,
    kind: FindingKind,
    severity: Severity,
}

impl<'d> Finding<'d> {
    pub fn new(target: &'d Declaration, kind: FindingKind) -> Self {
        Self {
            target,
            kind,
            severity: Severity::Error,
        }
    }

    pub fn target(&self) -> &'d Declaration {
        self.target
    }

    pub fn kind(&self) -> &FindingKind {
        &self.kind
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl Display for Finding<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.target.key(), self.kind)
    }
}

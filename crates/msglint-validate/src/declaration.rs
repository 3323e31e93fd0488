use std::fmt::{Display, Formatter};

use bon::Builder;
use msglint_format::FormatKind;

/// A named, parameterized declaration that may carry a message.
///
/// Declarations are supplied by the host and only ever read here.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Declaration {
    #[builder(into)]
    pub name: String,
    #[builder(default)]
    #[cfg_attr(feature = "serde", serde(default, alias = "parameters"))]
    pub parameter_count: usize,
    /// Marks the declaration as the designated message source of its group.
    #[builder(default)]
    #[cfg_attr(feature = "serde", serde(default, alias = "tagged"))]
    pub message_tag: bool,
    #[builder(into)]
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "message", skip_serializing_if = "Option::is_none")
    )]
    pub format_string: Option<String>,
    /// Only meaningful together with a format string.
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "format", skip_serializing_if = "Option::is_none")
    )]
    pub format_kind: Option<FormatKind>,
}

impl Declaration {
    pub fn key(&self) -> OverloadKey<'_> {
        OverloadKey::new(&self.name, self.parameter_count)
    }
}

/// `(name, parameter count)`, the identity of an overload group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverloadKey<'a> {
    pub name: &'a str,
    pub parameter_count: usize,
}

impl<'a> OverloadKey<'a> {
    pub fn new(name: &'a str, parameter_count: usize) -> Self {
        Self {
            name,
            parameter_count,
        }
    }
}

impl Display for OverloadKey<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.name, self.parameter_count)
    }
}

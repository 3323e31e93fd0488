use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::pattern::MessagePattern;
use crate::printf::PrintfFormat;
use crate::report::FormatReport;
use crate::FormatGrammar;

/// The dialect a message format string is written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum FormatKind {
    /// `%`-introduced conversion specifiers.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "PRINTF"))]
    Printf,
    /// `{index[,type[,style]]}` placeholders with `'` quoting.
    #[cfg_attr(
        feature = "serde",
        serde(alias = "MESSAGE_FORMAT", alias = "message-format")
    )]
    MessagePattern,
}

impl FormatKind {
    /// Runs the grammar for this dialect over `input`.
    pub fn validate(self, input: &str) -> FormatReport {
        match self {
            FormatKind::Printf => PrintfFormat::scan(input),
            FormatKind::MessagePattern => MessagePattern::scan(input),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FormatKind::Printf => "printf",
            FormatKind::MessagePattern => "message-pattern",
        }
    }
}

impl Display for FormatKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown format kind '{0}', expected 'printf' or 'message-pattern'")]
pub struct ParseFormatKindError(String);

impl FromStr for FormatKind {
    type Err = ParseFormatKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "printf" => Ok(FormatKind::Printf),
            "message-pattern" | "message-format" => Ok(FormatKind::MessagePattern),
            _ => Err(ParseFormatKindError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_selects_grammar() {
        // `{0}` is literal text for printf but a placeholder for message patterns
        assert_eq!(FormatKind::Printf.validate("{0}").argument_count(), 0);
        assert_eq!(FormatKind::MessagePattern.validate("{0}").argument_count(), 1);

        // and `%s` the other way around
        assert_eq!(FormatKind::Printf.validate("%s").argument_count(), 1);
        assert_eq!(FormatKind::MessagePattern.validate("%s").argument_count(), 0);
    }

    #[test]
    fn test_from_str_accepts_legacy_spellings() {
        assert_eq!("printf".parse(), Ok(FormatKind::Printf));
        assert_eq!("PRINTF".parse(), Ok(FormatKind::Printf));
        assert_eq!("MESSAGE_FORMAT".parse(), Ok(FormatKind::MessagePattern));
        assert_eq!(" message-pattern ".parse(), Ok(FormatKind::MessagePattern));
        assert!("sprintf".parse::<FormatKind>().is_err());
    }

    #[test]
    fn test_default_is_printf() {
        assert_eq!(FormatKind::default(), FormatKind::Printf);
        assert_eq!(FormatKind::MessagePattern.to_string(), "message-pattern");
    }
}

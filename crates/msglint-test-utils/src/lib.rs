//! Fixtures shared by the integration tests.

use msglint_format::FormatKind;
use msglint_validate::{Declaration, Finding};

/// A tagged declaration with a printf-style message.
pub fn tagged(name: &str, parameter_count: usize, format: &str) -> Declaration {
    Declaration::builder()
        .name(name)
        .parameter_count(parameter_count)
        .message_tag(true)
        .format_string(format)
        .format_kind(FormatKind::Printf)
        .build()
}

/// A tagged declaration with an indexed-placeholder message.
pub fn tagged_pattern(name: &str, parameter_count: usize, format: &str) -> Declaration {
    Declaration::builder()
        .name(name)
        .parameter_count(parameter_count)
        .message_tag(true)
        .format_string(format)
        .format_kind(FormatKind::MessagePattern)
        .build()
}

/// A declaration without tag or message of its own.
pub fn untagged(name: &str, parameter_count: usize) -> Declaration {
    Declaration::builder()
        .name(name)
        .parameter_count(parameter_count)
        .build()
}

/// Renders findings one per line as `owner::name/arity: message`.
pub fn render(owner: &str, findings: &[Finding<'_>]) -> String {
    findings
        .iter()
        .map(|finding| format!("{}::{}", owner, finding))
        .collect::<Vec<_>>()
        .join("\n")
}

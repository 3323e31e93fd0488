//! Findings as compiler diagnostics, for hosts running inside a proc-macro.

use proc_macro2::Span;

use crate::declaration::Declaration;
use crate::finding::Finding;

impl Finding<'_> {
    pub fn to_syn_error(&self, span: Span) -> syn::Error {
        syn::Error::new(span, self.message())
    }
}

/// Combines all findings into a single error, each spanned at its target.
pub fn to_syn_result<F>(findings: &[Finding<'_>], span_of: F) -> syn::Result<()>
where
    F: Fn(&Declaration) -> Span,
{
    let mut iter = findings
        .iter()
        .map(|finding| finding.to_syn_error(span_of(finding.target())));
    let Some(mut combined) = iter.next() else {
        return Ok(());
    };
    for error in iter {
        combined.combine(error);
    }
    Err(combined)
}

use msglint_format::validate_format;
use smallvec::SmallVec;

use crate::declaration::Declaration;
use crate::finding::{Finding, FindingKind};
use crate::lookup::DeclarationLookup;

/// Checks the effective format string of `declaration` against its parameters.
///
/// Nothing is reported when no format string resolves. Otherwise a syntax
/// finding and a count mismatch finding may both fire; the count is compared
/// even for an invalid string.
pub fn reconcile<'d, L>(
    lookup: &L,
    group: &[&'d Declaration],
    declaration: &'d Declaration,
) -> SmallVec<[Finding<'d>; 2]>
where
    L: DeclarationLookup + ?Sized,
{
    let mut findings = SmallVec::new();
    let Some(message) = lookup.find_message(group, declaration) else {
        tracing::trace!(declaration = %declaration.key(), "no message to check");
        return findings;
    };

    let kind = lookup.find_message_format(group, declaration);
    let report = validate_format(kind, message);
    if let Some(error) = report.error() {
        findings.push(Finding::new(
            declaration,
            FindingKind::InvalidFormat {
                kind,
                error: error.clone(),
            },
        ));
    }

    let provided = lookup.parameter_count(declaration);
    if provided != report.argument_count() {
        findings.push(Finding::new(
            declaration,
            FindingKind::ParameterCountMismatch {
                format: message.to_string(),
                required: report.argument_count(),
                provided,
            },
        ));
    }

    tracing::debug!(
        declaration = %declaration.key(),
        %kind,
        valid = report.is_valid(),
        required = report.argument_count(),
        provided,
        "checked message format"
    );
    findings
}

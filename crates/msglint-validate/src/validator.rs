use rustc_hash::FxHashSet;

use crate::config::ValidatorConfig;
use crate::declaration::Declaration;
use crate::duplicate::duplicate_message_tags;
use crate::finding::Finding;
use crate::lookup::{DeclarationLookup, OverloadLookup};
use crate::reconcile::reconcile;

/// Checks the declarations of one owning type.
///
/// Every call returns a fresh collection; nothing from a previous call is
/// visible to the next one.
pub trait Validator {
    fn validate<'d>(&self, owner: &str, declarations: &'d [Declaration]) -> Vec<Finding<'d>>;
}

/// Runs each validator in turn and concatenates their findings.
pub fn validate_all<'d>(
    validators: &[&dyn Validator],
    owner: &str,
    declarations: &'d [Declaration],
) -> Vec<Finding<'d>> {
    validators
        .iter()
        .flat_map(|validator| validator.validate(owner, declarations))
        .collect()
}

/// Detects duplicate message tags and checks message formats, one overload
/// group at a time.
///
/// Groups are visited in order of their first declaration. For each group the
/// duplicate tag findings come first, followed by the format findings of the
/// group's first declaration.
#[derive(Debug, Clone)]
pub struct MessageValidator<L = OverloadLookup> {
    lookup: L,
}

impl MessageValidator {
    pub fn new(config: &ValidatorConfig) -> Self {
        Self {
            lookup: config.lookup(),
        }
    }
}

impl Default for MessageValidator {
    fn default() -> Self {
        Self::new(&ValidatorConfig::default())
    }
}

impl<L> MessageValidator<L> {
    pub fn with_lookup(lookup: L) -> Self {
        Self { lookup }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }
}

impl<L: DeclarationLookup> Validator for MessageValidator<L> {
    fn validate<'d>(&self, owner: &str, declarations: &'d [Declaration]) -> Vec<Finding<'d>> {
        let _span = tracing::debug_span!("validate", owner).entered();

        let mut seen = FxHashSet::default();
        let mut findings = Vec::new();
        for declaration in declarations {
            let parameter_count = self.lookup.parameter_count(declaration);
            if !seen.insert((declaration.name.as_str(), parameter_count)) {
                continue;
            }

            let group = self.lookup.find_by_name(declarations, &declaration.name, parameter_count);
            let before = findings.len();
            findings.extend(duplicate_message_tags(&group));
            findings.extend(reconcile(&self.lookup, &group, declaration));
            tracing::debug!(
                group = %declaration.key(),
                size = group.len(),
                findings = findings.len() - before,
                "checked overload group"
            );
        }

        tracing::debug!(findings = findings.len(), "validation finished");
        findings
    }
}

#[cfg(test)]
mod tests {
    use msglint_format::FormatKind;

    use super::*;
    use crate::finding::FindingKind;

    fn decl(name: &str, params: usize, tagged: bool, format: Option<&str>) -> Declaration {
        Declaration::builder()
            .name(name)
            .parameter_count(params)
            .message_tag(tagged)
            .maybe_format_string(format)
            .build()
    }

    fn codes(findings: &[Finding<'_>]) -> Vec<(String, &'static str)> {
        findings
            .iter()
            .map(|finding| (finding.target().key().to_string(), finding.kind().code()))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let findings = MessageValidator::default().validate("Empty", &[]);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_clean_declarations() {
        let declarations = vec![
            decl("started", 1, true, Some("started %s")),
            decl("stopped", 0, true, Some("stopped")),
        ];
        assert!(
            MessageValidator::default()
                .validate("Lifecycle", &declarations)
                .is_empty()
        );
    }

    #[test]
    fn test_group_order_and_duplicates_first() {
        let declarations = vec![
            decl("a", 1, true, Some("%s %s")),
            decl("b", 0, true, Some("b")),
            decl("a", 1, true, Some("%s")),
            decl("b", 0, true, Some("b again")),
        ];
        let findings = MessageValidator::default().validate("Ordering", &declarations);
        assert_eq!(
            codes(&findings),
            vec![
                ("a/1".to_string(), "duplicate-message-tag"),
                ("a/1".to_string(), "parameter-count-mismatch"),
                ("b/0".to_string(), "duplicate-message-tag"),
            ]
        );
        assert!(std::ptr::eq(findings[0].target(), &declarations[2]));
        assert!(std::ptr::eq(findings[1].target(), &declarations[0]));
        assert!(std::ptr::eq(findings[2].target(), &declarations[3]));
    }

    #[test]
    fn test_format_checked_once_per_group() {
        // only the first declaration of a group has its format reconciled
        let declarations = vec![
            decl("warn", 2, false, Some("%s")),
            decl("warn", 2, true, Some("%s")),
        ];
        let findings = MessageValidator::default().validate("Once", &declarations);
        assert_eq!(findings.len(), 1);
        assert!(std::ptr::eq(findings[0].target(), &declarations[0]));
    }

    #[test]
    fn test_untagged_inherits_sibling_message() {
        let declarations = vec![
            decl("retry", 1, false, None),
            decl("retry", 1, true, Some("retry {0} of {1}")),
        ];
        let config = ValidatorConfig::builder()
            .default_format(FormatKind::MessagePattern)
            .build();
        let findings = MessageValidator::new(&config).validate("Inherit", &declarations);
        assert_eq!(findings.len(), 1);
        assert!(std::ptr::eq(findings[0].target(), &declarations[0]));
        assert!(matches!(
            findings[0].kind(),
            FindingKind::ParameterCountMismatch {
                required: 2,
                provided: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_inherited_message_scanned_in_supplier_dialect() {
        let mut bare = decl("sent", 1, false, None);
        bare.format_kind = Some(FormatKind::MessagePattern);
        let declarations = vec![bare, decl("sent", 1, true, Some("sent %s"))];
        assert!(
            MessageValidator::default()
                .validate("Dialect", &declarations)
                .is_empty()
        );
    }

    #[test]
    fn test_repeated_calls_do_not_leak() {
        let declarations = vec![
            decl("dup", 0, true, Some("x")),
            decl("dup", 0, true, Some("y")),
        ];
        let validator = MessageValidator::default();
        let first = validator.validate("Repeat", &declarations);
        let second = validator.validate("Repeat", &declarations);
        assert_eq!(first.len(), 1);
        assert_eq!(first, second);
        assert!(validator.validate("Repeat", &[]).is_empty());
    }

    struct CountsOnly;

    impl Validator for CountsOnly {
        fn validate<'d>(&self, _owner: &str, declarations: &'d [Declaration]) -> Vec<Finding<'d>> {
            declarations
                .iter()
                .filter(|decl| decl.parameter_count > 3)
                .map(|decl| {
                    Finding::new(
                        decl,
                        FindingKind::ParameterCountMismatch {
                            format: String::new(),
                            required: 3,
                            provided: decl.parameter_count,
                        },
                    )
                })
                .collect()
        }
    }

    #[test]
    fn test_validate_all_concatenates() {
        let declarations = vec![
            decl("wide", 4, true, Some("%s %s %s %s")),
            decl("wide", 4, true, Some("%s %s %s %s")),
        ];
        let message = MessageValidator::default();
        let validators: [&dyn Validator; 2] = [&message, &CountsOnly];
        let findings = validate_all(&validators, "Many", &declarations);
        assert_eq!(
            findings.iter().map(|f| f.kind().code()).collect::<Vec<_>>(),
            vec![
                "duplicate-message-tag",
                "parameter-count-mismatch",
                "parameter-count-mismatch",
            ]
        );
    }
}

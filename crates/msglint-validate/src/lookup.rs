//! Lookups the validator performs against the declarations of one owner.

use msglint_format::FormatKind;

use crate::declaration::Declaration;

/// Pure queries over a set of declarations.
///
/// The validator never inspects message metadata directly; it asks the
/// lookup, so a host can substitute its own resolution rules.
pub trait DeclarationLookup {
    /// All declarations named `name` taking `parameter_count` parameters, in input order.
    fn find_by_name<'d>(
        &self,
        declarations: &'d [Declaration],
        name: &str,
        parameter_count: usize,
    ) -> Vec<&'d Declaration> {
        declarations
            .iter()
            .filter(|decl| decl.name == name && self.parameter_count(decl) == parameter_count)
            .collect()
    }

    /// The effective format string of `declaration` within its overload group.
    fn find_message<'d>(
        &self,
        group: &[&'d Declaration],
        declaration: &'d Declaration,
    ) -> Option<&'d str>;

    /// The dialect the effective format string is written in.
    fn find_message_format(&self, group: &[&Declaration], declaration: &Declaration) -> FormatKind;

    fn parameter_count(&self, declaration: &Declaration) -> usize {
        declaration.parameter_count
    }
}

/// Resolves messages within an overload group.
///
/// A declaration's own format string wins. Otherwise the first tagged sibling
/// carrying a string supplies it, and failing that the first sibling with a
/// string at all. The dialect follows whichever declaration supplied the
/// string, falling back to `default_format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverloadLookup {
    default_format: FormatKind,
}

impl OverloadLookup {
    pub fn new(default_format: FormatKind) -> Self {
        Self { default_format }
    }

    pub fn default_format(&self) -> FormatKind {
        self.default_format
    }

    fn source<'d>(
        group: &[&'d Declaration],
        declaration: &'d Declaration,
    ) -> Option<&'d Declaration> {
        if declaration.format_string.is_some() {
            return Some(declaration);
        }
        let with_message = || group.iter().copied().filter(|decl| decl.format_string.is_some());
        with_message()
            .find(|decl| decl.message_tag)
            .or_else(|| with_message().next())
    }
}

impl DeclarationLookup for OverloadLookup {
    fn find_message<'d>(
        &self,
        group: &[&'d Declaration],
        declaration: &'d Declaration,
    ) -> Option<&'d str> {
        Self::source(group, declaration).and_then(|decl| decl.format_string.as_deref())
    }

    fn find_message_format(&self, group: &[&Declaration], declaration: &Declaration) -> FormatKind {
        Self::source(group, declaration)
            .and_then(|decl| decl.format_kind)
            .unwrap_or(self.default_format)
    }
}

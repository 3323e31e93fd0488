use bon::Builder;
use msglint_format::FormatKind;

use crate::lookup::OverloadLookup;

/// Settings for a [`MessageValidator`](crate::MessageValidator).
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ValidatorConfig {
    /// Dialect assumed for a format string that does not declare one.
    #[builder(default)]
    pub default_format: FormatKind,
}

impl ValidatorConfig {
    pub fn lookup(&self) -> OverloadLookup {
        OverloadLookup::new(self.default_format)
    }
}

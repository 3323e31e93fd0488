//! # msglint-validate
//!
//! Validation of message declarations grouped into overloads.
//!
//! A [`MessageValidator`] walks the declarations of one owning type, groups
//! them by name and parameter count, and reports
//!
//! - every tagged declaration of a group after the first, and
//! - format strings that do not scan or whose argument count differs from
//!   the declaration's parameter count.
//!
//! ```
//! use msglint_validate::{Declaration, MessageValidator, Validator};
//!
//! let declarations = vec![
//!     Declaration::builder()
//!         .name("connected")
//!         .parameter_count(1)
//!         .message_tag(true)
//!         .format_string("connected to %s:%d")
//!         .build(),
//! ];
//! let findings = MessageValidator::default().validate("Events", &declarations);
//! assert_eq!(
//!     findings[0].message(),
//!     "Parameter count does not match for format 'connected to %s:%d'. Required: 2 Provided: 1"
//! );
//! ```

mod config;
mod declaration;
mod duplicate;
mod finding;
mod lookup;
mod reconcile;
mod validator;

#[cfg(feature = "syn")]
mod diagnostic;

pub use config::ValidatorConfig;
pub use declaration::{Declaration, OverloadKey};
pub use duplicate::duplicate_message_tags;
pub use finding::{Finding, FindingKind, Severity};
pub use lookup::{DeclarationLookup, OverloadLookup};
pub use reconcile::reconcile;
pub use validator::{MessageValidator, Validator, validate_all};

#[cfg(feature = "syn")]
pub use diagnostic::to_syn_result;

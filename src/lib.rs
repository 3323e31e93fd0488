pub use msglint_format as format;
pub use msglint_validate as validate;

#[cfg(feature = "lexer")]
pub use msglint_lexer as lexer;

pub mod prelude {
    pub use msglint_format::{FormatGrammar, FormatKind, FormatReport, validate_format};
    pub use msglint_validate::*;
}

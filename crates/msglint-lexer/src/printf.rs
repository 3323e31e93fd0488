use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintfToken<'src> {
    Error,
    /// ```ignore
    /// %%
    /// ```
    #[token("%%", priority = 5)]
    Percent,
    /// ```ignore
    /// %n
    /// ```
    #[token("%n", priority = 5)]
    LineSeparator,
    /// ```ignore
    /// %[index$|<][flags][width][.precision][t|T]conversion
    /// ```
    #[regex(r"%([0-9]+\$|<)?[-#+ 0,(]*[0-9]*(\.[0-9]+)?[tT]?[a-zA-Z%]", |lex| lex.slice())]
    Specifier(&'src str),
    /// A `%` that does not start a well-formed specifier.
    #[token("%")]
    Stray,
    #[regex(r"[^%]+", |lex| lex.slice())]
    Literal(&'src str),
}

impl std::fmt::Display for PrintfToken<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrintfToken::Error => write!(f, "error"),
            PrintfToken::Percent => write!(f, "%%"),
            PrintfToken::LineSeparator => write!(f, "%n"),
            PrintfToken::Specifier(spec) => write!(f, "{}", spec),
            PrintfToken::Stray => write!(f, "%"),
            PrintfToken::Literal(text) => write!(f, "{}", text),
        }
    }
}

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternToken<'src> {
    Error,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    /// Opens or closes a quoted section.
    #[token("'")]
    Quote,
    /// ```ignore
    /// ''
    /// ```
    /// A literal single quote, inside or outside a quoted section.
    #[token("''")]
    EscapedQuote,
    #[regex(r"[0-9]+", |lex| lex.slice())]
    Digits(&'src str),
    #[regex(r"[ \t\r\n]+", |lex| lex.slice())]
    Whitespace(&'src str),
    #[regex(r"[^{}',0-9 \t\r\n]+", |lex| lex.slice())]
    Text(&'src str),
}

impl std::fmt::Display for PatternToken<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternToken::Error => write!(f, "error"),
            PatternToken::LBrace => write!(f, "{{"),
            PatternToken::RBrace => write!(f, "}}"),
            PatternToken::Comma => write!(f, ","),
            PatternToken::Quote => write!(f, "'"),
            PatternToken::EscapedQuote => write!(f, "''"),
            PatternToken::Digits(digits) => write!(f, "{}", digits),
            PatternToken::Whitespace(ws) => write!(f, "{}", ws),
            PatternToken::Text(text) => write!(f, "{}", text),
        }
    }
}

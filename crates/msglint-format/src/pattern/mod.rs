//! Indexed-placeholder patterns such as `"{0} copied {1,number,integer} files"`.
//!
//! Outside a placeholder, `'` opens a quoted section of literal text and
//! `''` is a literal quote. A placeholder is `{index[,type[,style]]}`; its
//! body is parsed with chumsky over the lexer tokens, and a `choice` style is
//! scanned again as a pattern so nested placeholders are counted too.


use std::fmt::{Display, Formatter};
use std::ops::Range;

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;
use chumsky::span::SimpleSpan;
use indexmap::IndexSet;
use msglint_lexer::{PatternToken, lex_pattern};
use strsim::levenshtein;

use crate::FormatGrammar;
use crate::error::FormatError;
use crate::kind::FormatKind;
use crate::position::char_index;
use crate::report::FormatReport;

/// The `type` segment of a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatType {
    Number,
    Date,
    Time,
    Choice,
}

impl FormatType {
    pub const ALL: [FormatType; 4] = [
        FormatType::Number,
        FormatType::Date,
        FormatType::Time,
        FormatType::Choice,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FormatType::Number => "number",
            FormatType::Date => "date",
            FormatType::Time => "time",
            FormatType::Choice => "choice",
        }
    }

    /// Case-insensitive lookup. On failure, returns the closest known name if
    /// one is within a small edit distance.
    fn lookup(name: &str) -> Result<Self, Option<&'static str>> {
        let lowered = name.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|ty| ty.name() == lowered)
            .ok_or_else(|| {
                Self::ALL
                    .into_iter()
                    .map(FormatType::name)
                    .min_by_key(|candidate| levenshtein(&lowered, candidate))
                    .filter(|candidate| levenshtein(&lowered, candidate) <= 2)
            })
    }
}

impl Display for FormatType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One `{...}` placeholder, nested ones included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Character offset of the opening `{`.
    pub position: usize,
    pub index: usize,
    pub format_type: Option<FormatType>,
    /// The style segment with surrounding whitespace removed.
    pub style: Option<String>,
}

/// A fully checked indexed-placeholder pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagePattern<'src> {
    input: &'src str,
    placeholders: Vec<Placeholder>,
    referenced: IndexSet<usize>,
}

impl<'src> MessagePattern<'src> {
    pub fn parse(input: &'src str) -> Result<Self, FormatError> {
        let mut scanner = Scanner::default();
        scanner.run(input, 0)?;
        Ok(Self {
            input,
            placeholders: scanner.placeholders,
            referenced: scanner.referenced,
        })
    }

    pub fn input(&self) -> &'src str {
        self.input
    }

    /// Placeholders in the order their `{` appears.
    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    /// Distinct argument indices, in order of first reference.
    pub fn referenced(&self) -> &IndexSet<usize> {
        &self.referenced
    }

    /// One more than the highest index referenced, or zero.
    pub fn argument_count(&self) -> usize {
        required(&self.referenced)
    }
}

impl FormatGrammar for MessagePattern<'_> {
    const KIND: FormatKind = FormatKind::MessagePattern;

    fn scan(input: &str) -> FormatReport {
        let mut scanner = Scanner::default();
        let outcome = scanner.run(input, 0);
        let argument_count = required(&scanner.referenced);
        tracing::trace!(
            input,
            argument_count,
            valid = outcome.is_ok(),
            "scanned message pattern"
        );
        match outcome {
            Ok(()) => FormatReport::valid(Self::KIND, argument_count),
            Err(error) => FormatReport::invalid(Self::KIND, argument_count, error),
        }
    }
}

fn required(referenced: &IndexSet<usize>) -> usize {
    referenced
        .iter()
        .max()
        .map_or(0, |highest| highest.saturating_add(1))
}

type Lexed<'src> = (PatternToken<'src>, Range<usize>);
type BodyToken<'src> = (PatternToken<'src>, SimpleSpan);

#[derive(Debug, Default)]
struct Scanner {
    placeholders: Vec<Placeholder>,
    referenced: IndexSet<usize>,
}

impl Scanner {
    /// Scans `text`, whose first character is at character offset `base` of
    /// the outermost pattern.
    fn run(&mut self, text: &str, base: usize) -> Result<(), FormatError> {
        let mut tokens = lex_pattern(text);
        while let Some((token, span)) = tokens.next() {
            let at = base + char_index(text, span.start);
            match token {
                PatternToken::LBrace => {
                    let (body, close) = collect_body(&mut tokens)
                        .ok_or(FormatError::UnterminatedPlaceholder { at })?;
                    self.placeholder(text, base, at, body, span.end..close)?;
                }
                PatternToken::Quote => {
                    if !skip_quoted(&mut tokens) {
                        return Err(FormatError::UnterminatedQuote { at });
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn placeholder(
        &mut self,
        text: &str,
        base: usize,
        at: usize,
        body: Vec<BodyToken<'_>>,
        range: Range<usize>,
    ) -> Result<(), FormatError> {
        let segment = text[range.clone()]
            .split(',')
            .next()
            .unwrap_or_default()
            .trim();
        if segment.is_empty() {
            return Err(FormatError::MissingArgumentIndex { at });
        }
        if !segment.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FormatError::InvalidArgumentIndex {
                at,
                found: segment.to_string(),
            });
        }

        let eoi = SimpleSpan::from(range.end..range.end);
        let stream = Stream::from_iter(body).map(eoi, |(t, s): (_, _)| (t, s));
        let raw = placeholder_body()
            .parse(stream)
            .into_result()
            .map_err(|errors| FormatError::MalformedPlaceholder {
                at,
                reason: errors
                    .first()
                    .map(|e| e.reason().to_string())
                    .unwrap_or_else(|| "unexpected input".to_string()),
            })?;

        let index = raw
            .index
            .parse::<usize>()
            .map_err(|_| FormatError::ArgumentIndexOverflow {
                at,
                found: raw.index.to_string(),
            })?;
        let format_type = raw
            .format_type
            .map(|name| {
                FormatType::lookup(name).map_err(|suggestion| FormatError::UnknownFormatType {
                    at,
                    found: name.to_string(),
                    suggestion,
                })
            })
            .transpose()?;
        let style = raw
            .style
            .map(|span| (span.start, text.get(span.start..span.end).unwrap_or_default()));

        self.referenced.insert(index);
        self.placeholders.push(Placeholder {
            position: at,
            index,
            format_type,
            style: style.map(|(_, style)| style.trim().to_string()),
        });

        match (format_type, style) {
            (Some(FormatType::Choice), Some((start, style))) => {
                self.run(style, base + char_index(text, start))
            }
            _ => Ok(()),
        }
    }
}

/// Collects the tokens between a `{` and its matching `}`, returning them with
/// the byte offset of the closing brace. Braces inside quotes do not nest.
fn collect_body<'src, I>(tokens: &mut I) -> Option<(Vec<BodyToken<'src>>, usize)>
where
    I: Iterator<Item = Lexed<'src>>,
{
    let mut body = Vec::new();
    let mut depth = 0usize;
    let mut quoted = false;
    for (token, span) in tokens {
        match token {
            PatternToken::Quote => quoted = !quoted,
            PatternToken::LBrace if !quoted => depth += 1,
            PatternToken::RBrace if !quoted => {
                if depth == 0 {
                    return Some((body, span.start));
                }
                depth -= 1;
            }
            _ => {}
        }
        body.push((token, SimpleSpan::from(span)));
    }
    None
}

/// Consumes a quoted section up to its closing `'`, returning whether one was found.
fn skip_quoted<'src, I>(tokens: &mut I) -> bool
where
    I: Iterator<Item = Lexed<'src>>,
{
    tokens.any(|(token, _)| token == PatternToken::Quote)
}

struct RawPlaceholder<'src> {
    index: &'src str,
    format_type: Option<&'src str>,
    style: Option<SimpleSpan>,
}

type BodyError<'tokens, 'src> = extra::Err<Rich<'tokens, PatternToken<'src>, SimpleSpan>>;

/// `index [, type [, style]]`, whitespace allowed around each part.
fn placeholder_body<'tokens, 'src, I>()
-> impl Parser<'tokens, I, RawPlaceholder<'src>, BodyError<'tokens, 'src>>
where
    'src: 'tokens,
    I: ValueInput<'tokens, Token = PatternToken<'src>, Span = SimpleSpan>,
{
    let ws = select! { PatternToken::Whitespace(_) => () }.repeated();

    let index = select! { PatternToken::Digits(digits) => digits }
        .padded_by(ws.clone())
        .labelled("argument index");

    let format_type = select! { PatternToken::Text(name) => name }
        .padded_by(ws)
        .labelled("format type");

    let style = any()
        .repeated()
        .map_with(|(), e| -> SimpleSpan { e.span() });

    index
        .then(
            just(PatternToken::Comma)
                .ignore_then(format_type)
                .then(just(PatternToken::Comma).ignore_then(style).or_not())
                .or_not(),
        )
        .then_ignore(end())
        .map(|(index, rest)| RawPlaceholder {
            index,
            format_type: rest.map(|(name, _)| name),
            style: rest.and_then(|(_, style)| style),
        })
}

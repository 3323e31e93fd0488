//! Decomposition and checking of a single printf conversion specifier.

use chumsky::prelude::*;
use smallvec::SmallVec;

use crate::error::FormatError;

const DATE_TIME_SUFFIXES: &str = "HIklMSLNpzZsQBbhAaCYyjmdeRTrDFc";

/// Which argument a specifier consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentIndex {
    /// The next argument in sequence.
    Next,
    /// `n$`, one-based.
    Explicit(usize),
    /// `<`, the argument used by the previous specifier.
    Previous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    LeftJustify,
    Alternate,
    Plus,
    Space,
    ZeroPad,
    Grouping,
    Parentheses,
}

impl Flag {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(Flag::LeftJustify),
            '#' => Some(Flag::Alternate),
            '+' => Some(Flag::Plus),
            ' ' => Some(Flag::Space),
            '0' => Some(Flag::ZeroPad),
            ',' => Some(Flag::Grouping),
            '(' => Some(Flag::Parentheses),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Flag::LeftJustify => '-',
            Flag::Alternate => '#',
            Flag::Plus => '+',
            Flag::Space => ' ',
            Flag::ZeroPad => '0',
            Flag::Grouping => ',',
            Flag::Parentheses => '(',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `b B h H s S`
    General(char),
    /// `c C`
    Character(char),
    /// `d o x X`
    Integral(char),
    /// `e E f g G a A`
    Floating(char),
    /// `t` or `T` followed by a suffix such as `Y` or `H`.
    DateTime { prefix: char, suffix: char },
    /// `%%`
    Percent,
    /// `%n`
    LineSeparator,
}

impl Conversion {
    pub fn consumes_argument(self) -> bool {
        !matches!(self, Conversion::Percent | Conversion::LineSeparator)
    }

    pub fn as_char(self) -> char {
        match self {
            Conversion::General(c)
            | Conversion::Character(c)
            | Conversion::Integral(c)
            | Conversion::Floating(c) => c,
            Conversion::DateTime { prefix, .. } => prefix,
            Conversion::Percent => '%',
            Conversion::LineSeparator => 'n',
        }
    }

    fn allows_precision(self) -> bool {
        matches!(self, Conversion::General(_) | Conversion::Floating(_))
    }

    fn allows_flag(self, flag: Flag) -> bool {
        use Flag::*;
        match self {
            Conversion::General(c) => {
                flag == LeftJustify || (flag == Alternate && matches!(c, 's' | 'S'))
            }
            Conversion::Character(_) | Conversion::DateTime { .. } | Conversion::Percent => {
                flag == LeftJustify
            }
            Conversion::Integral('d') => flag != Alternate,
            Conversion::Integral(_) => flag != Grouping,
            Conversion::Floating('f') => true,
            Conversion::Floating('g' | 'G') => flag != Alternate,
            Conversion::Floating('a' | 'A') => !matches!(flag, Grouping | Parentheses),
            Conversion::Floating(_) => flag != Grouping,
            Conversion::LineSeparator => false,
        }
    }
}

/// A checked conversion specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specifier {
    /// Character offset of the introducing `%`.
    pub position: usize,
    pub index: ArgumentIndex,
    pub flags: SmallVec<[Flag; 4]>,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub conversion: Conversion,
}

impl Specifier {
    /// A specifier for the `%%` and `%n` escapes.
    pub(crate) fn escape(position: usize, conversion: Conversion) -> Self {
        Self {
            position,
            index: ArgumentIndex::Next,
            flags: SmallVec::new(),
            width: None,
            precision: None,
            conversion,
        }
    }

    /// Parses the text of one specifier, `%` included.
    pub(crate) fn parse(position: usize, text: &str) -> Result<Self, FormatError> {
        let body = text.strip_prefix('%').unwrap_or(text);
        let raw = raw_specifier()
            .parse(body)
            .into_result()
            .map_err(|errors| FormatError::MalformedSpecifier {
                at: position,
                specifier: text.to_string(),
                reason: errors
                    .first()
                    .map(|e| e.reason().to_string())
                    .unwrap_or_else(|| "unexpected input".to_string()),
            })?;
        Self::from_raw(position, raw)
    }

    fn from_raw(at: usize, raw: RawSpecifier) -> Result<Self, FormatError> {
        let conversion = match raw.conversion {
            prefix @ ('t' | 'T') => match raw.suffix {
                None => return Err(FormatError::MissingDateTimeSuffix { at, prefix }),
                Some(suffix) if DATE_TIME_SUFFIXES.contains(suffix) => {
                    Conversion::DateTime { prefix, suffix }
                }
                Some(suffix) => return Err(FormatError::UnknownDateTimeSuffix { at, suffix }),
            },
            c @ ('b' | 'B' | 'h' | 'H' | 's' | 'S') => Conversion::General(c),
            c @ ('c' | 'C') => Conversion::Character(c),
            c @ ('d' | 'o' | 'x' | 'X') => Conversion::Integral(c),
            c @ ('e' | 'E' | 'f' | 'g' | 'G' | 'a' | 'A') => Conversion::Floating(c),
            '%' => Conversion::Percent,
            'n' => Conversion::LineSeparator,
            found => return Err(FormatError::UnknownConversion { at, found }),
        };

        let index = match raw.index {
            None => ArgumentIndex::Next,
            Some(RawIndex::Previous) => ArgumentIndex::Previous,
            Some(RawIndex::Explicit(0)) => return Err(FormatError::ZeroArgumentIndex { at }),
            Some(RawIndex::Explicit(n)) => ArgumentIndex::Explicit(n),
        };

        let mut flags: SmallVec<[Flag; 4]> = SmallVec::new();
        for c in raw.flags {
            // the lexer only admits flag characters here
            let Some(flag) = Flag::from_char(c) else {
                return Err(FormatError::UnknownConversion { at, found: c });
            };
            if flags.contains(&flag) {
                return Err(FormatError::DuplicateFlag { at, flag: c });
            }
            flags.push(flag);
        }

        let spec = Self {
            position: at,
            index,
            flags,
            width: raw.width,
            precision: raw.precision,
            conversion,
        };
        spec.check()?;
        Ok(spec)
    }

    fn has(&self, flag: Flag) -> bool {
        self.flags.contains(&flag)
    }

    fn check(&self) -> Result<(), FormatError> {
        let at = self.position;
        let conversion = self.conversion.as_char();

        if self.conversion == Conversion::LineSeparator && self.width.is_some() {
            return Err(FormatError::IllegalWidth { at, conversion });
        }
        if self.precision.is_some() && !self.conversion.allows_precision() {
            return Err(FormatError::IllegalPrecision { at, conversion });
        }
        if let Some(flag) = self
            .flags
            .iter()
            .find(|flag| !self.conversion.allows_flag(**flag))
        {
            return Err(FormatError::FlagMismatch {
                at,
                flag: flag.as_char(),
                conversion,
            });
        }
        for flag in [Flag::LeftJustify, Flag::ZeroPad] {
            if self.has(flag) && self.width.is_none() {
                return Err(FormatError::MissingWidth {
                    at,
                    flag: flag.as_char(),
                });
            }
        }
        for (first, second) in [(Flag::Plus, Flag::Space), (Flag::LeftJustify, Flag::ZeroPad)] {
            if self.has(first) && self.has(second) {
                return Err(FormatError::IllegalFlagCombination {
                    at,
                    first: first.as_char(),
                    second: second.as_char(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
enum RawIndex {
    Explicit(usize),
    Previous,
}

#[derive(Debug, Clone, PartialEq)]
struct RawSpecifier {
    index: Option<RawIndex>,
    flags: Vec<char>,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: char,
    suffix: Option<char>,
}

type SpecifierError<'src> = extra::Err<Rich<'src, char>>;

fn number<'src>() -> impl Parser<'src, &'src str, usize, SpecifierError<'src>> + Clone {
    text::digits(10)
        .to_slice()
        .try_map(|digits: &'src str, span| {
            digits
                .parse::<usize>()
                .map_err(|error| Rich::custom(span, format!("'{}': {}", digits, error)))
        })
}

/// `[index$|<][flags][width][.precision][t|T]conversion`, without the `%`.
fn raw_specifier<'src>() -> impl Parser<'src, &'src str, RawSpecifier, SpecifierError<'src>> {
    let index = number()
        .then_ignore(just('$'))
        .map(RawIndex::Explicit)
        .or(just('<').to(RawIndex::Previous))
        .or_not();

    let flags = one_of("-#+ 0,(").repeated().collect::<Vec<char>>();

    let width = number().or_not();

    let precision = just('.').ignore_then(number()).or_not();

    let conversion = one_of("tT")
        .then(any().or_not())
        .or(any().map(|c| (c, None)));

    index
        .then(flags)
        .then(width)
        .then(precision)
        .then(conversion)
        .then_ignore(end())
        .map(
            |((((index, flags), width), precision), (conversion, suffix))| RawSpecifier {
                index,
                flags,
                width,
                precision,
                conversion,
                suffix,
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Specifier, FormatError> {
        Specifier::parse(0, text)
    }

    #[test]
    fn test_decomposes_all_parts() {
        let spec = parse("%2$-10.3f").unwrap();
        assert_eq!(spec.index, ArgumentIndex::Explicit(2));
        assert_eq!(spec.flags.as_slice(), &[Flag::LeftJustify]);
        assert_eq!(spec.width, Some(10));
        assert_eq!(spec.precision, Some(3));
        assert_eq!(spec.conversion, Conversion::Floating('f'));
    }

    #[test]
    fn test_zero_flag_then_width() {
        let spec = parse("%05d").unwrap();
        assert_eq!(spec.flags.as_slice(), &[Flag::ZeroPad]);
        assert_eq!(spec.width, Some(5));
    }

    #[test]
    fn test_width_is_not_an_index() {
        let spec = parse("%12s").unwrap();
        assert_eq!(spec.index, ArgumentIndex::Next);
        assert_eq!(spec.width, Some(12));
    }

    #[test]
    fn test_date_time_suffix() {
        let spec = parse("%<tY").unwrap();
        assert_eq!(spec.index, ArgumentIndex::Previous);
        assert_eq!(
            spec.conversion,
            Conversion::DateTime {
                prefix: 't',
                suffix: 'Y'
            }
        );
        assert!(matches!(
            parse("%tq"),
            Err(FormatError::UnknownDateTimeSuffix { suffix: 'q', .. })
        ));
        assert!(matches!(
            parse("%T"),
            Err(FormatError::MissingDateTimeSuffix { prefix: 'T', .. })
        ));
    }

    #[test]
    fn test_unknown_conversion() {
        assert_eq!(
            parse("%q"),
            Err(FormatError::UnknownConversion { at: 0, found: 'q' })
        );
    }

    #[test]
    fn test_flag_rules() {
        assert_eq!(
            parse("%--5s"),
            Err(FormatError::DuplicateFlag { at: 0, flag: '-' })
        );
        assert_eq!(
            parse("%-s"),
            Err(FormatError::MissingWidth { at: 0, flag: '-' })
        );
        assert_eq!(
            parse("%#d"),
            Err(FormatError::FlagMismatch {
                at: 0,
                flag: '#',
                conversion: 'd'
            })
        );
        assert_eq!(
            parse("%,x"),
            Err(FormatError::FlagMismatch {
                at: 0,
                flag: ',',
                conversion: 'x'
            })
        );
        assert_eq!(
            parse("%+ d"),
            Err(FormatError::IllegalFlagCombination {
                at: 0,
                first: '+',
                second: ' '
            })
        );
        assert_eq!(
            parse("%-05d"),
            Err(FormatError::IllegalFlagCombination {
                at: 0,
                first: '-',
                second: '0'
            })
        );
        assert!(parse("%,d").is_ok());
        assert!(parse("%(,.2f").is_ok());
        assert!(parse("%#x").is_ok());
        assert!(parse("%-8tH").is_ok());
    }

    #[test]
    fn test_precision_rules() {
        assert!(parse("%.5s").is_ok());
        assert_eq!(
            parse("%.2d"),
            Err(FormatError::IllegalPrecision {
                at: 0,
                conversion: 'd'
            })
        );
        assert_eq!(
            parse("%.1c"),
            Err(FormatError::IllegalPrecision {
                at: 0,
                conversion: 'c'
            })
        );
    }

    #[test]
    fn test_line_separator_takes_nothing() {
        assert_eq!(
            parse("%5n"),
            Err(FormatError::IllegalWidth {
                at: 0,
                conversion: 'n'
            })
        );
        assert_eq!(
            parse("%-n"),
            Err(FormatError::FlagMismatch {
                at: 0,
                flag: '-',
                conversion: 'n'
            })
        );
    }

    #[test]
    fn test_zero_index_rejected() {
        assert_eq!(parse("%0$s"), Err(FormatError::ZeroArgumentIndex { at: 0 }));
    }

    #[test]
    fn test_percent_conversion_with_width() {
        let spec = parse("%-5%").unwrap();
        assert_eq!(spec.conversion, Conversion::Percent);
        assert!(!spec.conversion.consumes_argument());
    }
}

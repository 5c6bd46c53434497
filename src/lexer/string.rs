use super::rules::{Rule, char_if, tag};
use crate::and::AndExt;
use crate::bind::BindExt;
use crate::cursor::Cursor;
use crate::cursors::StrCursor;
use crate::empty::empty;
use crate::error::{ErrorKind, ParseError, ParseResult};
use crate::many::many;
use crate::many1::many1;
use crate::map::MapExt;
use crate::map_err::MapErrExt;
use crate::not::not;
use crate::optional::optional;
use crate::or::{OrExt, one_of};
use crate::parser::{BoxedExt, Parser};
use crate::position::PositionExt;
use crate::satisfy::{any, select};

type Escape<'code> = Rule<'code, Option<char>>;

/// Body of a quoted string, after the opening quote, up to and including the closing one
///
/// Reads plain characters directly and hands every backslash to the escape
/// parser. A line break or the end of input before the closing quote is an
/// unterminated string, reported where the string was cut off.
pub(crate) struct ShortString<'code> {
    quote: char,
    escape: Escape<'code>,
}

impl<'code> ShortString<'code> {
    pub(crate) fn new(quote: char, extended_escapes: bool) -> Self {
        ShortString {
            quote,
            escape: escape(extended_escapes),
        }
    }
}

impl<'code> Parser<'code> for ShortString<'code> {
    type Cursor = StrCursor<'code>;
    type Output = String;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<String, StrCursor<'code>> {
        let mut text = String::new();
        let mut current = cursor;

        loop {
            match current.peek() {
                Err(_) | Ok('\n' | '\r') => return Err(unterminated(current.position())),
                Ok(ch) if ch == self.quote => return Ok((text, current.next())),
                Ok('\\') => {
                    let after = current.next();
                    if after.eos() {
                        return Err(unterminated(after.position()));
                    }
                    let (decoded, next) = self.escape.parse(current).map_err(|error| {
                        if error.is_end_of_input() {
                            unterminated(error.position)
                        } else {
                            invalid_escape(error, current.position())
                        }
                    })?;
                    text.extend(decoded);
                    current = next;
                }
                Ok(ch) => {
                    text.push(ch);
                    current = current.next();
                }
            }
        }
    }
}

fn unterminated(position: usize) -> ParseError {
    ParseError::new(ErrorKind::Unterminated("string"), position)
}

/// Escape failures point at the backslash; value range errors keep their message
fn invalid_escape(error: ParseError, backslash: usize) -> ParseError {
    let kind = match error.kind {
        ErrorKind::Custom(message) => ErrorKind::Custom(message),
        _ => ErrorKind::Custom("invalid escape sequence".into()),
    };
    ParseError::new(kind, backslash)
}

/// A quoted string with either quote character
pub(crate) fn short_string<'code>(extended_escapes: bool) -> Rule<'code, String> {
    select(
        |ch: char| matches!(ch, '"' | '\'').then_some(ch),
        "string",
    )
    .bind(move |quote| ShortString::new(quote, extended_escapes))
    .boxed()
}

fn digit<'code>() -> Rule<'code, u32> {
    select(|ch: char| ch.to_digit(10), "decimal digit").boxed()
}

fn hex_digit<'code>() -> Rule<'code, u32> {
    select(|ch: char| ch.to_digit(16), "hexadecimal digit").boxed()
}

/// `\` followed by one escape; yields the decoded character, or nothing for `\z`
fn escape<'code>(extended: bool) -> Escape<'code> {
    let single = select(
        |ch: char| match ch {
            'a' => Some('\x07'),
            'b' => Some('\x08'),
            'f' => Some('\x0c'),
            'n' => Some('\n'),
            'r' => Some('\r'),
            't' => Some('\t'),
            'v' => Some('\x0b'),
            '\\' | '"' | '\'' => Some(ch),
            '\n' | '\r' => Some('\n'),
            _ => None,
        },
        "escape sequence",
    );
    // A backslash before "\r\n" or "\n\r" continues the string on the next line
    let line_break = tag("\r\n").or(tag("\n\r")).map(|_| '\n');

    // Up to three decimal digits naming a byte, decoded as Latin-1
    let decimal = digit()
        .and(optional(digit()))
        .and(optional(digit()))
        .map(|((first, second), third)| {
            [second, third]
                .into_iter()
                .flatten()
                .fold(first, |acc, d| acc * 10 + d)
        })
        .bind(|value| {
            empty().try_map(move |()| {
                u8::try_from(value)
                    .map(|byte| Some(char::from(byte)))
                    .map_err(|_| ErrorKind::Custom("decimal escape too large".into()))
            })
        });

    let mut alternatives: Vec<Escape<'code>> = vec![
        line_break.map(Some).boxed(),
        single.map(Some).boxed(),
        decimal.boxed(),
    ];

    if extended {
        let hex = tag("x")
            .then(hex_digit())
            .and(hex_digit())
            .map(|(high, low)| char::from_u32(high * 16 + low));
        let skip_whitespace = tag("z")
            .then(many(char_if(
                |ch| ch.is_ascii_whitespace() || *ch == '\x0b',
                "whitespace",
            )))
            .map(|_| None);
        let unicode = tag("u{")
            .then(many1(hex_digit()))
            .skip(tag("}"))
            .map(|digits| {
                digits
                    .into_iter()
                    .try_fold(0u32, |acc, d| acc.checked_mul(16)?.checked_add(d))
            })
            .bind(|value| {
                empty().try_map(move |()| {
                    value
                        .and_then(char::from_u32)
                        .map(Some)
                        .ok_or_else(|| ErrorKind::Custom("UTF-8 value too large".into()))
                })
            });
        alternatives.push(hex.boxed());
        alternatives.push(skip_whitespace.boxed());
        alternatives.push(unicode.boxed());
    }

    tag("\\").then(one_of(alternatives)).boxed()
}

/// Opening long bracket `[`, `=`*, `[`; yields the number of `=` signs
pub(crate) fn long_bracket_open<'code>() -> Rule<'code, usize> {
    tag("[")
        .then(many(tag("=")))
        .skip(tag("["))
        .map(|equals| equals.len())
        .boxed()
}

/// Everything up to the closing long bracket of the given level, verbatim
///
/// A line break right after the opening bracket is not part of the text.
/// Reaching the end of input first is an unterminated `what`.
pub(crate) fn long_bracket_body<'code>(level: usize, what: &'static str) -> Rule<'code, String> {
    let closer = format!("]{}]", "=".repeat(level));

    many(not(tag(closer.clone())).then(any()))
        .recognize()
        .skip(tag(closer).map_err(move |error| {
            ParseError::new(ErrorKind::Unterminated(what), error.position)
        }))
        .map(|(_, body)| strip_first_line_break(body).to_string())
        .boxed()
}

/// A complete long bracket string such as `[==[ text ]==]`
pub(crate) fn long_string<'code>() -> Rule<'code, String> {
    long_bracket_open()
        .bind(|level| long_bracket_body(level, "long string"))
        .boxed()
}

fn strip_first_line_break(body: &str) -> &str {
    ["\r\n", "\n\r", "\n", "\r"]
        .iter()
        .find_map(|line_break| body.strip_prefix(line_break))
        .unwrap_or(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_string(input: &str) -> Result<(String, usize), ParseError> {
        short_string(true)
            .parse(StrCursor::new(input))
            .map(|(text, cursor)| (text, cursor.position()))
    }

    #[test]
    fn test_plain_strings() {
        assert_eq!(lex_string("\"hello\" rest").unwrap(), ("hello".to_string(), 7));
        assert_eq!(lex_string("'it\"s'").unwrap().0, "it\"s");
        assert_eq!(lex_string("''").unwrap().0, "");
    }

    #[test]
    fn test_simple_escapes() {
        let (text, _) = lex_string(r#""a\tb\n\\\"\'\a\v""#).unwrap();
        assert_eq!(text, "a\tb\n\\\"'\x07\x0b");
    }

    #[test]
    fn test_escaped_line_break() {
        let (text, _) = lex_string("'one\\\ntwo'").unwrap();
        assert_eq!(text, "one\ntwo");

        let (text, _) = lex_string("'one\\\r\ntwo'").unwrap();
        assert_eq!(text, "one\ntwo");
    }

    #[test]
    fn test_decimal_escapes() {
        let (text, _) = lex_string(r#""\65\066\0677""#).unwrap();
        assert_eq!(text, "ABC7");

        let (text, _) = lex_string(r#""\255""#).unwrap();
        assert_eq!(text, "\u{ff}");
    }

    #[test]
    fn test_decimal_escape_too_large() {
        let error = lex_string(r#""ab\256""#).unwrap_err();
        assert_eq!(error.position, 3);
        assert_eq!(error.kind, ErrorKind::Custom("decimal escape too large".into()));
    }

    #[test]
    fn test_extended_escapes() {
        let (text, _) = lex_string(r#""\x41\z
             B\u{48}\u{4E2D}""#)
        .unwrap();
        assert_eq!(text, "ABH中");
    }

    #[test]
    fn test_extended_escapes_disabled() {
        let error = short_string(false)
            .parse(StrCursor::new(r#""\x41""#))
            .unwrap_err();
        assert_eq!(error.position, 1);
        assert_eq!(error.kind, ErrorKind::Custom("invalid escape sequence".into()));
    }

    #[test]
    fn test_invalid_escape() {
        let error = lex_string(r#""ok\q""#).unwrap_err();
        assert_eq!(error.position, 3);
        assert_eq!(error.kind, ErrorKind::Custom("invalid escape sequence".into()));
    }

    #[test]
    fn test_unterminated_at_end_of_input() {
        let error = lex_string("\"abc").unwrap_err();
        assert_eq!(error.kind, ErrorKind::Unterminated("string"));
        assert_eq!(error.position, 4);
    }

    #[test]
    fn test_unterminated_inside_escape() {
        let error = lex_string("\"abc\\").unwrap_err();
        assert_eq!(error.kind, ErrorKind::Unterminated("string"));
        assert_eq!(error.position, 5);

        let error = lex_string("\"a\\x4").unwrap_err();
        assert_eq!(error.kind, ErrorKind::Unterminated("string"));
        assert_eq!(error.position, 5);
    }

    #[test]
    fn test_unterminated_at_line_break() {
        let error = lex_string("'abc\ndef'").unwrap_err();
        assert_eq!(error.kind, ErrorKind::Unterminated("string"));
        assert_eq!(error.position, 4);
    }

    #[test]
    fn test_long_string_levels() {
        let (text, cursor) = long_string()
            .parse(StrCursor::new("[==[a]]b]=]c]==] tail"))
            .unwrap();
        assert_eq!(text, "a]]b]=]c");
        assert_eq!(cursor.remaining(), " tail");
    }

    #[test]
    fn test_long_string_drops_first_line_break() {
        let (text, _) = long_string()
            .parse(StrCursor::new("[[\nfirst\nsecond\\n]]"))
            .unwrap();
        assert_eq!(text, "first\nsecond\\n");
    }

    #[test]
    fn test_long_string_unterminated() {
        let error = long_string()
            .parse(StrCursor::new("[=[ never closed ]]"))
            .unwrap_err();
        assert_eq!(error.kind, ErrorKind::Unterminated("long string"));
        assert_eq!(error.position, 19);
    }

    #[test]
    fn test_long_bracket_open_needs_second_bracket() {
        assert!(long_bracket_open().parse(StrCursor::new("[= x")).is_err());
        let (level, _) = long_bracket_open().parse(StrCursor::new("[===[")).unwrap();
        assert_eq!(level, 3);
    }
}

//! Lexical rules over source text, composed from the combinators in this crate.

use super::config::LexerConfig;
use super::number::Number;
use super::string::{long_bracket_body, long_bracket_open, long_string, short_string};
use super::token::{Keyword, Symbol, Token, TokenKind};
use crate::all::all;
use crate::and::AndExt;
use crate::bind::BindExt;
use crate::cursor::Cursor;
use crate::cursors::StrCursor;
use crate::empty::empty;
use crate::error::{ErrorKind, ParseError, ParseResult};
use crate::literal::{Literal, literal};
use crate::many::many;
use crate::many1::many1;
use crate::map::MapExt;
use crate::not::not;
use crate::optional::optional;
use crate::or::{OrExt, one_of};
use crate::parser::{BoxedExt, BoxedParser, Parser};
use crate::position::{PositionExt, position};
use crate::satisfy::{Satisfy, satisfy};
use std::borrow::Cow;

/// A lexical rule; boxing at rule boundaries keeps the composed types small
pub(crate) type Rule<'code, T> = BoxedParser<'code, 'code, StrCursor<'code>, T>;

/// Exact text, pinned to the text cursor
pub(crate) fn tag<'code>(expected: impl Into<Cow<'static, str>>) -> Literal<StrCursor<'code>> {
    literal(expected)
}

/// One character accepted by `predicate`, pinned to the text cursor
pub(crate) fn char_if<'code, F>(
    predicate: F,
    expected: &'static str,
) -> Satisfy<StrCursor<'code>, F>
where
    F: Fn(&char) -> bool,
{
    satisfy(predicate, expected)
}

fn is_whitespace(ch: &char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

fn is_identifier_start(ch: &char) -> bool {
    ch.is_ascii_alphabetic() || *ch == '_'
}

fn is_identifier_char(ch: &char) -> bool {
    ch.is_ascii_alphanumeric() || *ch == '_'
}

/// A letter or underscore followed by letters, digits and underscores
pub(crate) fn identifier<'code>() -> Rule<'code, String> {
    char_if(is_identifier_start, "identifier")
        .and(many(char_if(is_identifier_char, "identifier character")))
        .recognize()
        .map(|(_, name)| name.to_string())
        .boxed()
}

/// The configured keywords, longest first, not followed by an identifier character
pub(crate) fn keyword<'code>(config: &LexerConfig) -> Rule<'code, Keyword> {
    let alternatives = config
        .keywords()
        .iter()
        .map(|&keyword| tag(keyword.as_str()).map(move |_| keyword))
        .collect();

    one_of(alternatives)
        .skip(not(char_if(is_identifier_char, "identifier character")))
        .boxed()
}

/// The configured punctuation, longest first
///
/// `--` always starts a comment, so a minus directly followed by another
/// minus is never a symbol.
pub(crate) fn symbol<'code>(config: &LexerConfig) -> Rule<'code, Symbol> {
    let alternatives = config
        .symbols()
        .iter()
        .map(|&symbol| tag(symbol.as_str()).map(move |_| symbol))
        .collect();

    not(tag("--")).then(one_of(alternatives)).boxed()
}

fn is_numeral_char(ch: &char) -> bool {
    is_identifier_char(ch) || *ch == '.'
}

/// The text of a numeral: a digit, `0x`, or a point before a digit, then
/// the longest run of letters, digits, underscores and points
///
/// A sign may follow an exponent marker (`e`, or `p` after `0x`). Whether
/// the run is a well-formed number is decided when it is converted, so `3x`
/// and `1..2` are read whole and rejected rather than split.
fn numeral<'code>() -> Rule<'code, ()> {
    let start = tag("0")
        .then(char_if(|ch| matches!(ch, 'x' | 'X'), "hex marker"))
        .map(|_| "pP")
        .or(char_if(char::is_ascii_digit, "digit").map(|_| "eE"))
        .or(tag(".")
            .then(char_if(char::is_ascii_digit, "digit"))
            .map(|_| "eE"));

    start
        .bind(|markers: &'static str| {
            let exponent = char_if(move |ch| markers.contains(*ch), "exponent")
                .then(optional(char_if(|ch| matches!(ch, '+' | '-'), "sign")))
                .map(|_| ());
            let rest = char_if(is_numeral_char, "digit").map(|_| ());
            many(exponent.or(rest)).map(|_| ())
        })
        .boxed()
}

/// A numeral whose value converts; yields the raw text
///
/// The conversion check runs after the numeral is read, so a value that does
/// not convert is reported where the numeral ends.
pub(crate) fn number<'code>() -> Rule<'code, String> {
    numeral()
        .recognize()
        .bind(|(_, raw)| {
            empty().try_map(move |()| Number::from_literal(raw).map(|_| raw.to_string()))
        })
        .boxed()
}

/// `--` then either a long bracket or the rest of the line; yields the comment text
///
/// Once a long bracket opens, the comment must close it.
pub(crate) fn comment<'code>() -> Rule<'code, String> {
    let rest_of_line = || {
        many(char_if(|ch| !matches!(ch, '\n' | '\r'), "comment text"))
            .recognize()
            .map(|(_, text)| text.to_string())
    };

    tag("--")
        .then(optional(long_bracket_open()))
        .bind(move |level| -> Rule<'code, String> {
            match level {
                Some(level) => long_bracket_body(level, "long comment"),
                None => rest_of_line().boxed(),
            }
        })
        .boxed()
}

/// Whitespace, and comments too unless they are emitted as tokens
fn trivia<'code>(config: &LexerConfig) -> Rule<'code, ()> {
    let whitespace = many1(char_if(is_whitespace, "whitespace")).map(|_| ()).boxed();
    let mut items: Vec<Rule<'code, ()>> = vec![whitespace];
    if !config.emit_comments() {
        items.push(comment().map(|_| ()).boxed());
    }

    many(one_of(items)).map(|_| ()).boxed()
}

/// Turns "nothing matched here" into an unrecognized token
///
/// Failures from inside a lexeme (an unterminated string, a numeral that
/// does not convert) already point past the token start and pass through.
pub(crate) struct Unrecognized<P> {
    parser: P,
}

impl<'code, P> Parser<'code> for Unrecognized<P>
where
    P: Parser<'code, Cursor = StrCursor<'code>>,
{
    type Cursor = StrCursor<'code>;
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<P::Output, StrCursor<'code>> {
        self.parser.parse(cursor).map_err(|error| {
            let at_start = error.position == cursor.position();
            match error.kind {
                ErrorKind::Mismatch { .. } | ErrorKind::Unsatisfied { .. } if at_start => {
                    ParseError::new(
                        ErrorKind::UnrecognizedToken {
                            found: cursor.describe(),
                        },
                        cursor.position(),
                    )
                }
                _ => error,
            }
        })
    }
}

/// One token of any kind, with its span
///
/// Alternatives are tried in order: comment, long string, short string,
/// numeral, keyword, identifier, symbol. Keywords come before identifiers
/// so they are not swallowed as names, and numerals before symbols so `.5`
/// is not read as `.`.
pub(crate) fn token<'code>(config: &LexerConfig) -> Rule<'code, Token> {
    let kind = comment()
        .map(TokenKind::Comment)
        .or(long_string().map(TokenKind::String))
        .or(short_string(config.extended_escapes()).map(TokenKind::String))
        .or(number().map(TokenKind::Number))
        .or(keyword(config).map(TokenKind::Keyword))
        .or(identifier().map(TokenKind::Identifier))
        .or(symbol(config).map(TokenKind::Symbol));

    Unrecognized { parser: kind }
        .with_position()
        .map(|(kind, span)| Token::new(kind, span))
        .boxed()
}

/// The whole source as tokens, ending with [`TokenKind::EndOfStream`]
///
/// When comments are not emitted they are skipped along with whitespace, so
/// a comment only reaches the token rule when it is malformed and the error
/// comes from there.
pub(crate) fn tokens<'code>(config: &LexerConfig) -> Rule<'code, Vec<Token>> {
    trivia(config)
        .then(all(token(config).skip(trivia(config))))
        .and(position(empty()))
        .map(|(mut tokens, ((), end))| {
            tokens.push(Token::new(TokenKind::EndOfStream, end));
            tokens
        })
        .boxed()
}

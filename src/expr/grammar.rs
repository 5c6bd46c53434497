use super::ast::Expr;
use super::operator::{Assoc, BinaryOp, OperatorTable, UnaryOp};
use crate::all::complete;
use crate::and::AndExt;
use crate::between::between;
use crate::cursor::Cursor;
use crate::cursors::{SliceCursor, Tracked};
use crate::error::{ErrorKind, FailureLog, ParseError, ParseResult};
use crate::left_fold::{left_fold, left_recursive};
use crate::lexer::{Keyword, Lexer, LexerConfig, Number, Symbol, Token, TokenKind};
use crate::many1::many1;
use crate::map::MapExt;
use crate::or::{OrExt, one_of};
use crate::parser::{BoxedExt, BoxedParser, Parser};
use crate::satisfy::select;
use crate::separated_list::separated_list;
use tracing::{debug, trace};

/// Cursor over a token stream, keeping the furthest failure for error reports
pub type TokenCursor<'code> = Tracked<'code, SliceCursor<'code, Token>>;

/// How deeply groups, index keys, arguments and unary operands may nest
/// before [`ErrorKind::NestingTooDeep`] is reported
pub const DEFAULT_MAX_DEPTH: usize = 40;

fn symbol<'code>(symbol: Symbol) -> impl Parser<'code, Cursor = TokenCursor<'code>, Output = ()> {
    select(
        move |token: &Token| token.is_symbol(symbol).then_some(()),
        format!("'{}'", symbol.as_str()),
    )
}

fn name<'code>() -> impl Parser<'code, Cursor = TokenCursor<'code>, Output = String> {
    select(
        |token: &Token| match &token.kind {
            TokenKind::Identifier(name) => Some(name.clone()),
            _ => None,
        },
        "name",
    )
}

fn string<'code>() -> impl Parser<'code, Cursor = TokenCursor<'code>, Output = String> {
    select(
        |token: &Token| match &token.kind {
            TokenKind::String(text) => Some(text.clone()),
            _ => None,
        },
        "string",
    )
}

fn number<'code>() -> impl Parser<'code, Cursor = TokenCursor<'code>, Output = Expr> {
    select(
        |token: &'code Token| match &token.kind {
            TokenKind::Number(raw) => Some(raw.as_str()),
            _ => None,
        },
        "number",
    )
    .try_map(|raw| Number::from_literal(raw).map(Expr::Number))
}

/// `nil`, `true`, `false`, `...` and string literals
fn literal_atom<'code>() -> impl Parser<'code, Cursor = TokenCursor<'code>, Output = Expr> {
    select(
        |token: &Token| match &token.kind {
            TokenKind::Keyword(Keyword::Nil) => Some(Expr::Nil),
            TokenKind::Keyword(Keyword::True) => Some(Expr::True),
            TokenKind::Keyword(Keyword::False) => Some(Expr::False),
            TokenKind::Symbol(Symbol::Ellipsis) => Some(Expr::Vararg),
            TokenKind::String(text) => Some(Expr::String(text.clone())),
            _ => None,
        },
        "expression",
    )
}

fn unary_operator<'code, 'g>(
    operators: &'g [UnaryOp],
) -> impl Parser<'code, Cursor = TokenCursor<'code>, Output = UnaryOp> {
    select(
        move |token: &Token| operators.iter().copied().find(|op| op.matches(token)),
        "unary operator",
    )
}

fn binary_operator<'code, 'g>(
    operators: &'g [(BinaryOp, Assoc)],
) -> impl Parser<'code, Cursor = TokenCursor<'code>, Output = (BinaryOp, Assoc)> {
    select(
        move |token: &Token| {
            operators
                .iter()
                .copied()
                .find(|(op, _)| op.matches(token))
        },
        "binary operator",
    )
}

/// What may follow a prefix expression
enum Suffix {
    Field(String),
    Index(Expr),
    Method(String, Vec<Expr>),
    Call(Vec<Expr>),
}

fn apply_suffix(object: Expr, suffix: Suffix) -> Expr {
    match suffix {
        Suffix::Field(name) => Expr::field(object, name),
        Suffix::Index(key) => Expr::index(object, key),
        Suffix::Method(name, args) => Expr::method_call(object, name, args),
        Suffix::Call(args) => Expr::call(object, args),
    }
}

/// Operands of one layer with the operators between them
///
/// Left-associative operators fold into the current operand as they are
/// read. Right-associative ones park it until the chain ends and are folded
/// from the right then, so neither direction recurses per operator.
struct Chain {
    pending: Vec<(Expr, BinaryOp)>,
    current: Expr,
}

impl Chain {
    fn new(first: Expr) -> Self {
        Chain {
            pending: Vec::new(),
            current: first,
        }
    }

    fn push(self, ((op, assoc), rhs): ((BinaryOp, Assoc), Expr)) -> Self {
        let Chain {
            mut pending,
            current,
        } = self;
        match assoc {
            Assoc::Left => Chain {
                pending,
                current: Expr::binary(op, current, rhs),
            },
            Assoc::Right => {
                pending.push((current, op));
                Chain {
                    pending,
                    current: rhs,
                }
            }
        }
    }

    fn finish(self) -> Expr {
        self.pending
            .into_iter()
            .rev()
            .fold(self.current, |rhs, (lhs, op)| Expr::binary(op, lhs, rhs))
    }
}

/// Expression parser for one operator table
///
/// The grammar is layered: level 0 is an operand, and level `k` combines
/// level `k - 1` operands with the binary operators of table layer `k - 1`.
/// Operator chains and runs of unary operators are read in loops. Only
/// groups, index keys, call arguments and unary operands recurse, and each
/// of those counts against the nesting limit.
#[derive(Debug, Clone)]
pub struct ExpressionParser {
    table: OperatorTable,
    lexer: Lexer,
    max_depth: usize,
}

impl Default for ExpressionParser {
    fn default() -> Self {
        ExpressionParser::new(OperatorTable::default())
    }
}

impl ExpressionParser {
    pub fn new(table: OperatorTable) -> Self {
        ExpressionParser {
            table,
            lexer: Lexer::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Lua 5.1 operators and tokens
    pub fn lua51() -> Self {
        ExpressionParser::new(OperatorTable::lua51())
            .with_lexer(Lexer::new(LexerConfig::lua51()))
    }

    /// Lexer used by [`parse_str`](Self::parse_str)
    pub fn with_lexer(mut self, lexer: Lexer) -> Self {
        self.lexer = lexer;
        self
    }

    /// Nesting limit; each level costs stack while parsing
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn table(&self) -> &OperatorTable {
        &self.table
    }

    /// A whole expression: the loosest level of the table
    pub fn expression(&self) -> Level<'_> {
        self.level(self.table.layers().len(), 0)
    }

    fn level(&self, level: usize, depth: usize) -> Level<'_> {
        Level {
            grammar: self,
            level,
            depth,
        }
    }

    /// A whole expression one nesting level down
    fn nested(&self, depth: usize) -> Level<'_> {
        self.level(self.table.layers().len(), depth + 1)
    }

    /// Numbers, literals and suffixed expressions
    fn operand<'g, 'code, 'p>(
        &'g self,
        depth: usize,
    ) -> impl Parser<'code, Cursor = TokenCursor<'code>, Output = Expr> + 'p
    where
        'g: 'p,
        'code: 'p,
    {
        number().or(self.suffixed(depth)).or(literal_atom())
    }

    /// `Name` or `( expr )` followed by any chain of `.Name`, `[expr]`,
    /// `:Name args` and `args`, applied left to right
    fn suffixed<'g, 'code, 'p>(
        &'g self,
        depth: usize,
    ) -> impl Parser<'code, Cursor = TokenCursor<'code>, Output = Expr> + 'p
    where
        'g: 'p,
        'code: 'p,
    {
        let seeds: Vec<BoxedParser<'p, 'code, TokenCursor<'code>, Expr>> = vec![
            name().map(Expr::Name).boxed(),
            between(
                symbol(Symbol::LeftParen),
                self.nested(depth),
                symbol(Symbol::RightParen),
            )
            .boxed(),
        ];
        let tails: Vec<BoxedParser<'p, 'code, TokenCursor<'code>, Suffix>> = vec![
            symbol(Symbol::Dot).then(name()).map(Suffix::Field).boxed(),
            between(
                symbol(Symbol::LeftBracket),
                self.nested(depth),
                symbol(Symbol::RightBracket),
            )
            .map(Suffix::Index)
            .boxed(),
            symbol(Symbol::Colon)
                .then(name())
                .and(self.arguments(depth))
                .map(|(name, args)| Suffix::Method(name, args))
                .boxed(),
            self.arguments(depth).map(Suffix::Call).boxed(),
        ];

        left_recursive(seeds, tails, apply_suffix)
    }

    /// `( explist )` or a single string literal
    fn arguments<'g, 'code, 'p>(
        &'g self,
        depth: usize,
    ) -> impl Parser<'code, Cursor = TokenCursor<'code>, Output = Vec<Expr>> + 'p
    where
        'g: 'p,
        'code: 'p,
    {
        between(
            symbol(Symbol::LeftParen),
            separated_list(self.nested(depth), symbol(Symbol::Comma)),
            symbol(Symbol::RightParen),
        )
        .or(string().map(|text| vec![Expr::String(text)]))
    }

    /// One or more unary operators of table layer `level - 1` applied to a
    /// level `level` operand, the innermost operator first
    fn prefixed<'code>(
        &self,
        level: usize,
        depth: usize,
    ) -> impl Parser<'code, Cursor = TokenCursor<'code>, Output = Expr> {
        let operators = level
            .checked_sub(1)
            .and_then(|index| self.table.layers().get(index))
            .map(|layer| layer.unary_operators())
            .unwrap_or_default();

        many1(unary_operator(operators))
            .and(self.level(level, depth + 1))
            .map(|(operators, operand)| {
                operators
                    .into_iter()
                    .rev()
                    .fold(operand, |operand, op| Expr::unary(op, operand))
            })
    }

    /// Unary operators of every layer from `from` outward
    ///
    /// The right operand of a binary operator may start with a unary operator
    /// even when that operator binds more loosely than the binary one, as in
    /// `2^-3`. The unary operator then takes an operand of its own level.
    fn unary_leak<'code>(
        &self,
        from: usize,
        depth: usize,
    ) -> impl Parser<'code, Cursor = TokenCursor<'code>, Output = Expr> {
        let layers = self.table.layers();
        let alternatives = (from.max(1)..=layers.len())
            .filter(|&level| !layers[level - 1].unary_operators().is_empty())
            .map(|level| self.prefixed(level, depth))
            .collect();

        one_of(alternatives)
    }

    /// Level `level >= 1`: operands of the next tighter level, prefixed by
    /// this layer's unary operators and joined by its binary operators
    fn layer<'code>(
        &self,
        level: usize,
        depth: usize,
    ) -> impl Parser<'code, Cursor = TokenCursor<'code>, Output = Expr> {
        let binary = self
            .table
            .layers()
            .get(level - 1)
            .map(|layer| layer.binary_operators())
            .unwrap_or_default();

        let first = self
            .prefixed(level, depth)
            .or(self.level(level - 1, depth));
        let operand = self
            .level(level - 1, depth)
            .or(self.unary_leak(level, depth));
        let tail = binary_operator(binary).and(operand);

        left_fold(first.map(Chain::new), tail, Chain::push).map(Chain::finish)
    }

    /// Parse a token stream that must hold exactly one expression
    ///
    /// A trailing [`TokenKind::EndOfStream`] is ignored. Error positions are
    /// byte offsets into the source the tokens were read from. When the
    /// expression stops short, the error is the one that got furthest into
    /// the tokens, such as a missing closing bracket at the end of input.
    pub fn parse_tokens(&self, tokens: &[Token]) -> Result<Expr, ParseError> {
        let body = match tokens.split_last() {
            Some((last, rest)) if last.kind == TokenKind::EndOfStream => rest,
            _ => tokens,
        };

        let log = FailureLog::new();
        complete(self.expression())
            .parse(Tracked::new(SliceCursor::new(body), &log))
            .map(|(expr, _)| expr)
            .map_err(|error| error.relocate(|index| byte_offset(tokens, index)))
    }

    /// Tokenize `source` and parse it as one expression
    pub fn parse_str(&self, source: &str) -> Result<Expr, ParseError> {
        trace!(bytes = source.len(), "parsing expression");

        let result = self
            .lexer
            .tokenize(source)
            .and_then(|tokens| self.parse_tokens(&tokens));
        match &result {
            Ok(expr) => debug!(%expr, "parsed expression"),
            Err(error) => debug!(position = error.position, %error, "expression rejected"),
        }
        result
    }
}

/// Where the token at `index` starts in the source; past the last token is
/// the end of the last token
fn byte_offset(tokens: &[Token], index: usize) -> usize {
    match tokens.get(index) {
        Some(token) => token.span.start,
        None => tokens.last().map(|token| token.span.end).unwrap_or(0),
    }
}

/// One level of the expression grammar at one nesting depth, built when it
/// is applied
///
/// This is what lets levels refer to each other (and parentheses refer back
/// to the whole expression) without constructing an infinite parser.
#[derive(Debug, Clone, Copy)]
pub struct Level<'g> {
    grammar: &'g ExpressionParser,
    level: usize,
    depth: usize,
}

impl<'g, 'code> Parser<'code> for Level<'g> {
    type Cursor = TokenCursor<'code>;
    type Output = Expr;

    fn parse(&self, cursor: TokenCursor<'code>) -> ParseResult<Expr, TokenCursor<'code>> {
        let limit = self.grammar.max_depth;
        if self.depth > limit {
            return Err(ParseError::new(
                ErrorKind::NestingTooDeep { limit },
                cursor.position(),
            ));
        }

        if self.level == 0 {
            self.grammar.operand(self.depth).parse(cursor)
        } else {
            self.grammar.layer(self.level, self.depth).parse(cursor)
        }
    }
}

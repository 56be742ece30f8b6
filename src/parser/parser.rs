//! Recursive-descent parser for prefix and infix sentence notation.

use super::lexer::{LexError, Lexer, Token};
use crate::syntax::{Sentence, Term};

/// Concrete syntax convention for connectives.
///
/// Atoms read identically in both notations: `pred` or `pred(t1, ..., tn)`.
/// - `Prefix`: a connective precedes its operands, e.g. `and P(a) Q(b)`,
///   `implies P(x) not Q(x)`.
/// - `Infix`: conventional infix with parentheses; precedence is
///   not > and > or > implies, implication right-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    #[default]
    Prefix,
    Infix,
}

/// Parse error with column information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub column: usize,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "column {}: {}", self.column, self.message)
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        ParseError {
            message: e.message,
            column: e.column,
        }
    }
}

/// Parser state.
struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Parser { lexer, current })
    }

    fn advance(&mut self) -> Result<Token, ParseError> {
        Ok(std::mem::replace(
            &mut self.current,
            self.lexer.next_token()?,
        ))
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        if self.current == expected {
            self.advance()?;
            Ok(())
        } else {
            Err(self.error(format!(
                "expected {:?}, found {:?}",
                expected, self.current
            )))
        }
    }

    fn error(&self, message: String) -> ParseError {
        ParseError {
            message,
            column: self.lexer.column(),
        }
    }
}

/// Parse one sentence in the given notation.
///
/// The whole input must be consumed; trailing tokens are an error.
pub fn parse(input: &str, notation: Notation) -> Result<Sentence, ParseError> {
    let mut parser = Parser::new(input)?;
    let sentence = match notation {
        Notation::Prefix => parse_prefix(&mut parser)?,
        Notation::Infix => parse_implication(&mut parser)?,
    };
    if parser.current != Token::Eof {
        return Err(parser.error(format!("unexpected trailing {:?}", parser.current)));
    }
    Ok(sentence)
}

fn parse_prefix(parser: &mut Parser) -> Result<Sentence, ParseError> {
    match parser.current.clone() {
        Token::Not => {
            parser.advance()?;
            Ok(Sentence::not(parse_prefix(parser)?))
        }
        Token::And => {
            parser.advance()?;
            let left = parse_prefix(parser)?;
            Ok(Sentence::and(left, parse_prefix(parser)?))
        }
        Token::Or => {
            parser.advance()?;
            let left = parse_prefix(parser)?;
            Ok(Sentence::or(left, parse_prefix(parser)?))
        }
        Token::Implies => {
            parser.advance()?;
            let antecedent = parse_prefix(parser)?;
            Ok(Sentence::implies(antecedent, parse_prefix(parser)?))
        }
        Token::Identifier(_) => parse_atom(parser),
        other => Err(parser.error(format!("expected sentence, found {:?}", other))),
    }
}

// implication := disjunction ['->' implication]   (right-associative)
fn parse_implication(parser: &mut Parser) -> Result<Sentence, ParseError> {
    let left = parse_disjunction(parser)?;
    if parser.current == Token::Implies {
        parser.advance()?;
        let right = parse_implication(parser)?;
        Ok(Sentence::implies(left, right))
    } else {
        Ok(left)
    }
}

fn parse_disjunction(parser: &mut Parser) -> Result<Sentence, ParseError> {
    let mut left = parse_conjunction(parser)?;
    while parser.current == Token::Or {
        parser.advance()?;
        let right = parse_conjunction(parser)?;
        left = Sentence::or(left, right);
    }
    Ok(left)
}

fn parse_conjunction(parser: &mut Parser) -> Result<Sentence, ParseError> {
    let mut left = parse_negation(parser)?;
    while parser.current == Token::And {
        parser.advance()?;
        let right = parse_negation(parser)?;
        left = Sentence::and(left, right);
    }
    Ok(left)
}

fn parse_negation(parser: &mut Parser) -> Result<Sentence, ParseError> {
    if parser.current == Token::Not {
        parser.advance()?;
        Ok(Sentence::not(parse_negation(parser)?))
    } else {
        parse_primary(parser)
    }
}

fn parse_primary(parser: &mut Parser) -> Result<Sentence, ParseError> {
    match parser.current.clone() {
        Token::LParen => {
            parser.advance()?;
            let inner = parse_implication(parser)?;
            parser.expect(Token::RParen)?;
            Ok(inner)
        }
        Token::Identifier(_) => parse_atom(parser),
        other => Err(parser.error(format!("expected sentence, found {:?}", other))),
    }
}

// atom := identifier ['(' term {',' term} ')']
fn parse_atom(parser: &mut Parser) -> Result<Sentence, ParseError> {
    let predicate = match parser.advance()? {
        Token::Identifier(name) => name,
        other => return Err(parser.error(format!("expected predicate, found {:?}", other))),
    };

    if parser.current != Token::LParen {
        return Ok(Sentence::atom(predicate, vec![]));
    }
    parser.advance()?;

    let mut args = vec![parse_term(parser)?];
    while parser.current == Token::Comma {
        parser.advance()?;
        args.push(parse_term(parser)?);
    }
    parser.expect(Token::RParen)?;
    Ok(Sentence::atom(predicate, args))
}

fn parse_term(parser: &mut Parser) -> Result<Term, ParseError> {
    match parser.advance()? {
        Token::Identifier(name) => Ok(Term::new(name)),
        other => Err(parser.error(format!("expected term, found {:?}", other))),
    }
}

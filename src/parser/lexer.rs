//! Lexer for sentence syntax.

/// Token types for sentence syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Predicate, connective-free term, or constant name
    Identifier(String),

    // Delimiters
    LParen, // (
    RParen, // )
    Comma,  // ,

    // Connectives (word or ASCII operator form)
    Not,     // not, ~
    And,     // and, &
    Or,      // or, |
    Implies, // implies, ->

    // End of input
    Eof,
}

/// Lexer state.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            position: 0,
            column: 1,
        }
    }

    /// Column (1-based) of the most recently returned token.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        self.column = self.position + 1;

        let remaining = &self.input[self.position..];
        let ch = match remaining.chars().next() {
            Some(ch) => ch,
            None => return Ok(Token::Eof),
        };

        match ch {
            '(' => {
                self.advance(1);
                Ok(Token::LParen)
            }
            ')' => {
                self.advance(1);
                Ok(Token::RParen)
            }
            ',' => {
                self.advance(1);
                Ok(Token::Comma)
            }
            '~' => {
                self.advance(1);
                Ok(Token::Not)
            }
            '&' => {
                self.advance(1);
                Ok(Token::And)
            }
            '|' => {
                self.advance(1);
                Ok(Token::Or)
            }
            '-' if remaining.starts_with("->") => {
                self.advance(2);
                Ok(Token::Implies)
            }
            c if c.is_alphabetic() || c == '_' => Ok(self.lex_identifier()),
            c => Err(LexError {
                message: format!("unexpected character '{}'", c),
                column: self.column,
            }),
        }
    }

    fn lex_identifier(&mut self) -> Token {
        let start = self.position;
        let rest = &self.input[start..];
        let len = rest
            .char_indices()
            .find(|(_, c)| !(c.is_alphanumeric() || *c == '_' || *c == '\''))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        self.advance(len);

        let text = &self.input[start..start + len];
        match text {
            "not" => Token::Not,
            "and" => Token::And,
            "or" => Token::Or,
            "implies" => Token::Implies,
            _ => Token::Identifier(text.to_string()),
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.position..];
        let len = rest
            .char_indices()
            .find(|(_, c)| !c.is_whitespace())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        self.advance(len);
    }

    fn advance(&mut self, bytes: usize) {
        self.position += bytes;
    }
}

/// Lexer error.
#[derive(Debug, Clone)]
pub struct LexError {
    pub message: String,
    pub column: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_atom_with_args() {
        let mut lex = Lexer::new("P(x, y)");
        let tokens = [
            Token::Identifier("P".to_string()),
            Token::LParen,
            Token::Identifier("x".to_string()),
            Token::Comma,
            Token::Identifier("y".to_string()),
            Token::RParen,
            Token::Eof,
        ];
        for expected in tokens {
            assert_eq!(lex.next_token().expect("token"), expected);
        }
    }

    #[test]
    fn test_lex_word_connectives() {
        let mut lex = Lexer::new("implies and p or not q");
        let tokens = [
            Token::Implies,
            Token::And,
            Token::Identifier("p".to_string()),
            Token::Or,
            Token::Not,
            Token::Identifier("q".to_string()),
        ];
        for expected in tokens {
            assert_eq!(lex.next_token().expect("token"), expected);
        }
    }

    #[test]
    fn test_lex_ascii_operators() {
        let mut lex = Lexer::new("~p & q | r -> s");
        let tokens = [
            Token::Not,
            Token::Identifier("p".to_string()),
            Token::And,
            Token::Identifier("q".to_string()),
            Token::Or,
            Token::Identifier("r".to_string()),
            Token::Implies,
            Token::Identifier("s".to_string()),
        ];
        for expected in tokens {
            assert_eq!(lex.next_token().expect("token"), expected);
        }
    }

    #[test]
    fn test_lex_rejects_stray_character() {
        let mut lex = Lexer::new("p ; q");
        assert_eq!(
            lex.next_token().unwrap(),
            Token::Identifier("p".to_string())
        );
        let err = lex.next_token().expect_err("should reject ';'");
        assert_eq!(err.column, 3);
    }

    #[test]
    fn test_lex_empty_input_is_eof() {
        let mut lex = Lexer::new("   ");
        assert_eq!(lex.next_token().unwrap(), Token::Eof);
    }
}

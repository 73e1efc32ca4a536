// Lexer Engine
//
// A positioned cursor over the token stream with the lookahead helpers the
// statement parsers share.

use crate::common::DatabaseType;
use crate::parsing::error::{ParseError, ParseResult};
use super::dictionary::Dictionary;
use super::lexer::{Lexer, LexerRules};
use super::token::{Assist, Symbol, Token, TokenType};

/// Cursor over the tokens of one SQL text
#[derive(Debug)]
pub struct LexerEngine {
    db_type: DatabaseType,
    sql: String,
    lexer: Lexer,
    current_token: Token,
}

impl LexerEngine {
    /// Create an engine positioned before the first token
    pub fn new(db_type: DatabaseType, sql: &str, lexer: Lexer) -> Self {
        LexerEngine {
            db_type,
            sql: sql.to_string(),
            lexer,
            current_token: Token::new(TokenType::Assist(Assist::END), "", 0, 0),
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn db_type(&self) -> DatabaseType {
        self.db_type
    }

    /// Advance to the next token
    pub fn next_token(&mut self) -> ParseResult<()> {
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    /// The token under the cursor
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Whether the cursor reached the end of input
    pub fn is_end(&self) -> bool {
        self.current_token.token_type == TokenType::Assist(Assist::END)
    }

    /// Check if the current token is any of the given types
    pub fn equal_any(&self, token_types: &[TokenType]) -> bool {
        token_types.contains(&self.current_token.token_type)
    }

    /// Advance past the current token if it is any of the given types
    pub fn skip_if_equal(&mut self, token_types: &[TokenType]) -> ParseResult<bool> {
        if self.equal_any(token_types) {
            self.next_token()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Advance past every consecutive token of the given types
    pub fn skip_all(&mut self, token_types: &[TokenType]) -> ParseResult<()> {
        while self.equal_any(token_types) {
            self.next_token()?;
        }
        Ok(())
    }

    /// Advance until the current token is one of the given types or the input ends
    pub fn skip_until(&mut self, token_types: &[TokenType]) -> ParseResult<()> {
        while !self.is_end() && !self.equal_any(token_types) {
            self.next_token()?;
        }
        Ok(())
    }

    /// Consume the current token, which must be of the expected type
    pub fn accept(&mut self, expected: TokenType) -> ParseResult<Token> {
        if self.current_token.token_type != expected {
            return Err(ParseError::ExpectedToken {
                expected,
                actual: self.current_token.clone(),
            });
        }
        let token = self.current_token.clone();
        self.next_token()?;
        Ok(token)
    }

    /// Skip a parenthesized group, nested groups included, and return its text
    ///
    /// Does nothing and returns an empty string unless the cursor is on `(`.
    pub fn skip_parentheses(&mut self) -> ParseResult<String> {
        if !self.equal_any(&[Symbol::LeftParen.into()]) {
            return Ok(String::new());
        }
        let begin = self.current_token.begin_position;
        let mut depth = 0usize;
        loop {
            match self.current_token.token_type {
                TokenType::Symbol(Symbol::LeftParen) => depth += 1,
                TokenType::Symbol(Symbol::RightParen) => depth -= 1,
                TokenType::Assist(Assist::END) => return Err(self.unexpected()),
                _ => {}
            }
            let end = self.current_token.end_position;
            self.next_token()?;
            if depth == 0 {
                return Ok(self.sql.chars().skip(begin).take(end - begin).collect());
            }
        }
    }

    /// Fail if the current token is any of the given types
    pub fn unsupported_if_equal(&self, token_types: &[TokenType]) -> ParseResult<()> {
        if self.equal_any(token_types) {
            return Err(ParseError::UnsupportedToken(self.current_token.clone()));
        }
        Ok(())
    }

    /// Error describing the current token as unexpected
    pub fn unexpected(&self) -> ParseError {
        ParseError::UnexpectedToken(self.current_token.clone())
    }
}

/// Builds lexer engines with the rules of each dialect
pub struct LexerEngineFactory;

impl LexerEngineFactory {
    /// Create a lexer engine for SQL of the given dialect
    pub fn new_instance(db_type: DatabaseType, sql: &str) -> LexerEngine {
        let lexer = Lexer::new(sql, Dictionary::for_database(db_type), Self::rules(db_type));
        LexerEngine::new(db_type, sql, lexer)
    }

    fn rules(db_type: DatabaseType) -> LexerRules {
        match db_type {
            DatabaseType::H2 | DatabaseType::MySQL => LexerRules {
                hash_comments: true,
                backtick_quotes: true,
                bracket_quotes: false,
                variables: true,
            },
            DatabaseType::SQLServer => LexerRules {
                bracket_quotes: true,
                variables: true,
                ..LexerRules::default()
            },
            DatabaseType::Oracle | DatabaseType::PostgreSQL => LexerRules::default(),
        }
    }
}

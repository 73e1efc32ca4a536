use thiserror::Error;

use crate::common::DatabaseType;
use crate::parsing::lexer::{Token, TokenType};
use crate::parsing::statement::StatementType;

/// SQL Parsing errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The leading token is not classified as a reserved statement keyword
    #[error("Unsupported token classification: {0}")]
    UnsupportedTokenClassification(TokenType),
    /// A reserved keyword that starts no statement family this parser routes
    #[error("Unsupported statement keyword: {0}")]
    UnsupportedStatementKeyword(TokenType),
    /// A `ParserFactories` implementation has no parser of this family for the dialect
    ///
    /// The built-in factories cover every dialect, so only custom factories return it.
    #[error("{statement} statements are not supported for {db_type}")]
    UnsupportedDatabase {
        db_type: DatabaseType,
        statement: StatementType,
    },
    #[error("Unsupported statement: {0}")]
    UnsupportedStatement(String),
    #[error("Unsupported token: {0}")]
    UnsupportedToken(Token),
    #[error("Unexpected token: {0}")]
    UnexpectedToken(Token),
    #[error("Expected token: {expected}, found: {actual}")]
    ExpectedToken { expected: TokenType, actual: Token },
    #[error("Illegal input '{literals}' at position {position}")]
    IllegalInput { position: usize, literals: String },
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

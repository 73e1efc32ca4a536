// SQL Lexer Module
//
// Tokenizes SQL text per dialect and exposes the positioned cursor the
// statement parsers consume.

pub mod token;
pub mod dictionary;
pub mod lexer;
pub mod lexer_engine;

pub use self::dictionary::Dictionary;
pub use self::lexer::{Lexer, LexerRules};
pub use self::lexer_engine::{LexerEngine, LexerEngineFactory};
pub use self::token::{
    Assist, DefaultKeyword, Literals, MySQLKeyword, OracleKeyword, PostgreSQLKeyword,
    SQLServerKeyword, Symbol, Token, TokenType,
};

// SQL Parsing Module
//
// Lexes SQL per dialect, routes the leading keyword of a statement to the parser
// of its family and collects the tables the statement touches.

pub mod error;
pub mod lexer;
pub mod statement;
pub mod components;
pub mod dispatcher;
pub mod engine;

// Export key types
pub use self::error::{ParseError, ParseResult};
pub use self::statement::{GeneratedKey, SqlStatement, SqlToken, SqlType, StatementType, Table, TableToken, Tables};
pub use self::components::{DefaultParserFactories, ParserFactories, ParserHandle, SqlStatementParser};
pub use self::engine::SqlParsingEngine;

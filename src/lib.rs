// ShardSQL Statement Parsing
//
// SQL front end of a sharding middleware: per-dialect lexing, dispatch of a
// statement to the parser of its family, and the sharding rule the parsers read.

pub mod common;
pub mod rule;
pub mod parsing;

// Re-export key items for convenient access
pub use common::DatabaseType;
pub use rule::{ShardingRule, TableRule};
pub use parsing::{ParseError, ParseResult, SqlParsingEngine, SqlStatement, StatementType};
pub use parsing::dispatcher::{dispatch, new_instance};
pub use parsing::lexer::{LexerEngine, LexerEngineFactory, TokenType};

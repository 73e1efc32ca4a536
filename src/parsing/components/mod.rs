// SQL Parser Components
//
// This module contains the statement parsers, one per statement family, and the
// factories that pick a dialect-specific parser for each family.

// Core parser component
pub mod parser_core;
pub mod dialect;
pub mod parser_select;
pub mod parser_ddl;
pub mod parser_dml;
pub mod factories;

// Re-export frequently used items
pub use parser_core::SqlStatementParser;
pub use dialect::{DialectSyntax, MySQLSyntax, OracleSyntax, PostgreSQLSyntax, SQLServerSyntax};
pub use parser_select::SelectParser;
pub use parser_ddl::{AlterParser, CreateParser, DropParser, TruncateParser};
pub use parser_dml::{DeleteParser, InsertParser, UpdateParser};
pub use factories::{DefaultParserFactories, ParserFactories, ParserHandle};

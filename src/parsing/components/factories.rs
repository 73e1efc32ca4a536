// Statement Parser Factories
//
// One constructor per statement family. Each picks the dialect syntax for the
// database type and hands back a boxed parser borrowing the rule and the cursor.

use crate::common::DatabaseType;
use crate::parsing::error::ParseResult;
use crate::parsing::lexer::LexerEngine;
use crate::rule::ShardingRule;
use super::dialect::{MySQLSyntax, OracleSyntax, PostgreSQLSyntax, SQLServerSyntax};
use super::parser_core::SqlStatementParser;
use super::parser_ddl::{AlterParser, CreateParser, DropParser, TruncateParser};
use super::parser_dml::{DeleteParser, InsertParser, UpdateParser};
use super::parser_select::SelectParser;

/// Parser handle returned by the factories
pub type ParserHandle<'a> = Box<dyn SqlStatementParser + 'a>;

/// Constructors for the eight statement families
///
/// The dispatcher only chooses which method to call; implementations decide how a
/// dialect maps onto a concrete parser and may refuse with an error.
pub trait ParserFactories {
    fn select<'a>(
        &self,
        db_type: DatabaseType,
        sharding_rule: &'a ShardingRule,
        lexer_engine: &'a mut LexerEngine,
    ) -> ParseResult<ParserHandle<'a>>;

    fn insert<'a>(
        &self,
        db_type: DatabaseType,
        sharding_rule: &'a ShardingRule,
        lexer_engine: &'a mut LexerEngine,
    ) -> ParseResult<ParserHandle<'a>>;

    fn update<'a>(
        &self,
        db_type: DatabaseType,
        sharding_rule: &'a ShardingRule,
        lexer_engine: &'a mut LexerEngine,
    ) -> ParseResult<ParserHandle<'a>>;

    fn delete<'a>(
        &self,
        db_type: DatabaseType,
        sharding_rule: &'a ShardingRule,
        lexer_engine: &'a mut LexerEngine,
    ) -> ParseResult<ParserHandle<'a>>;

    fn create<'a>(
        &self,
        db_type: DatabaseType,
        sharding_rule: &'a ShardingRule,
        lexer_engine: &'a mut LexerEngine,
    ) -> ParseResult<ParserHandle<'a>>;

    fn alter<'a>(
        &self,
        db_type: DatabaseType,
        sharding_rule: &'a ShardingRule,
        lexer_engine: &'a mut LexerEngine,
    ) -> ParseResult<ParserHandle<'a>>;

    fn drop<'a>(
        &self,
        db_type: DatabaseType,
        sharding_rule: &'a ShardingRule,
        lexer_engine: &'a mut LexerEngine,
    ) -> ParseResult<ParserHandle<'a>>;

    fn truncate<'a>(
        &self,
        db_type: DatabaseType,
        sharding_rule: &'a ShardingRule,
        lexer_engine: &'a mut LexerEngine,
    ) -> ParseResult<ParserHandle<'a>>;
}

/// Factories backed by the built-in dialect parsers
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultParserFactories;

/// H2 runs in MySQL compatibility mode
macro_rules! dialect_parser {
    ($parser:ident, $db_type:expr, $sharding_rule:expr, $lexer_engine:expr) => {{
        let parser: ParserHandle<'_> = match $db_type {
            DatabaseType::H2 | DatabaseType::MySQL => {
                Box::new($parser::<MySQLSyntax>::new($sharding_rule, $lexer_engine))
            }
            DatabaseType::Oracle => Box::new($parser::<OracleSyntax>::new($sharding_rule, $lexer_engine)),
            DatabaseType::SQLServer => {
                Box::new($parser::<SQLServerSyntax>::new($sharding_rule, $lexer_engine))
            }
            DatabaseType::PostgreSQL => {
                Box::new($parser::<PostgreSQLSyntax>::new($sharding_rule, $lexer_engine))
            }
        };
        Ok(parser)
    }};
}

impl ParserFactories for DefaultParserFactories {
    fn select<'a>(
        &self,
        db_type: DatabaseType,
        sharding_rule: &'a ShardingRule,
        lexer_engine: &'a mut LexerEngine,
    ) -> ParseResult<ParserHandle<'a>> {
        dialect_parser!(SelectParser, db_type, sharding_rule, lexer_engine)
    }

    fn insert<'a>(
        &self,
        db_type: DatabaseType,
        sharding_rule: &'a ShardingRule,
        lexer_engine: &'a mut LexerEngine,
    ) -> ParseResult<ParserHandle<'a>> {
        dialect_parser!(InsertParser, db_type, sharding_rule, lexer_engine)
    }

    fn update<'a>(
        &self,
        db_type: DatabaseType,
        sharding_rule: &'a ShardingRule,
        lexer_engine: &'a mut LexerEngine,
    ) -> ParseResult<ParserHandle<'a>> {
        dialect_parser!(UpdateParser, db_type, sharding_rule, lexer_engine)
    }

    fn delete<'a>(
        &self,
        db_type: DatabaseType,
        sharding_rule: &'a ShardingRule,
        lexer_engine: &'a mut LexerEngine,
    ) -> ParseResult<ParserHandle<'a>> {
        dialect_parser!(DeleteParser, db_type, sharding_rule, lexer_engine)
    }

    fn create<'a>(
        &self,
        db_type: DatabaseType,
        sharding_rule: &'a ShardingRule,
        lexer_engine: &'a mut LexerEngine,
    ) -> ParseResult<ParserHandle<'a>> {
        dialect_parser!(CreateParser, db_type, sharding_rule, lexer_engine)
    }

    fn alter<'a>(
        &self,
        db_type: DatabaseType,
        sharding_rule: &'a ShardingRule,
        lexer_engine: &'a mut LexerEngine,
    ) -> ParseResult<ParserHandle<'a>> {
        dialect_parser!(AlterParser, db_type, sharding_rule, lexer_engine)
    }

    fn drop<'a>(
        &self,
        db_type: DatabaseType,
        sharding_rule: &'a ShardingRule,
        lexer_engine: &'a mut LexerEngine,
    ) -> ParseResult<ParserHandle<'a>> {
        dialect_parser!(DropParser, db_type, sharding_rule, lexer_engine)
    }

    fn truncate<'a>(
        &self,
        db_type: DatabaseType,
        sharding_rule: &'a ShardingRule,
        lexer_engine: &'a mut LexerEngine,
    ) -> ParseResult<ParserHandle<'a>> {
        dialect_parser!(TruncateParser, db_type, sharding_rule, lexer_engine)
    }
}

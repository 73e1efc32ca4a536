// SQL Parsing Engine
//
// Parses one SQL statement end to end: lex the first token, dispatch on it and
// run the selected parser.

use log::debug;

use crate::common::DatabaseType;
use crate::parsing::dispatcher;
use crate::parsing::error::ParseResult;
use crate::parsing::lexer::LexerEngineFactory;
use crate::parsing::statement::SqlStatement;
use crate::rule::ShardingRule;

/// Parses a single statement of a given dialect against a sharding rule
pub struct SqlParsingEngine<'a> {
    db_type: DatabaseType,
    sql: &'a str,
    sharding_rule: &'a ShardingRule,
}

impl<'a> SqlParsingEngine<'a> {
    pub fn new(db_type: DatabaseType, sql: &'a str, sharding_rule: &'a ShardingRule) -> Self {
        SqlParsingEngine {
            db_type,
            sql,
            sharding_rule,
        }
    }

    /// Parse the statement
    pub fn parse(&self) -> ParseResult<SqlStatement> {
        debug!("Parsing {} statement: {}", self.db_type, self.sql);
        let mut lexer_engine = LexerEngineFactory::new_instance(self.db_type, self.sql);
        lexer_engine.next_token()?;
        let token_type = lexer_engine.current_token().token_type;

        let mut parser = dispatcher::new_instance(self.db_type, token_type, self.sharding_rule, &mut lexer_engine)?;
        parser.parse()
    }
}

use anyhow::Result;
use std::sync::Arc;
use std::thread;

use shardsql::common::DatabaseType;
use shardsql::parsing::lexer::{DefaultKeyword, Literals, TokenType};
use shardsql::parsing::{DefaultParserFactories, ParserFactories, ParserHandle};
use shardsql::{dispatch, new_instance, LexerEngine, LexerEngineFactory, ParseError, ParseResult, ShardingRule, StatementType};

#[path = "../common/mod.rs"]
mod common;

/// Built-in factories, except that H2 refuses TRUNCATE
struct NoH2Truncate;

impl ParserFactories for NoH2Truncate {
    fn select<'a>(&self, db_type: DatabaseType, sharding_rule: &'a ShardingRule, lexer_engine: &'a mut LexerEngine) -> ParseResult<ParserHandle<'a>> {
        DefaultParserFactories.select(db_type, sharding_rule, lexer_engine)
    }

    fn insert<'a>(&self, db_type: DatabaseType, sharding_rule: &'a ShardingRule, lexer_engine: &'a mut LexerEngine) -> ParseResult<ParserHandle<'a>> {
        DefaultParserFactories.insert(db_type, sharding_rule, lexer_engine)
    }

    fn update<'a>(&self, db_type: DatabaseType, sharding_rule: &'a ShardingRule, lexer_engine: &'a mut LexerEngine) -> ParseResult<ParserHandle<'a>> {
        DefaultParserFactories.update(db_type, sharding_rule, lexer_engine)
    }

    fn delete<'a>(&self, db_type: DatabaseType, sharding_rule: &'a ShardingRule, lexer_engine: &'a mut LexerEngine) -> ParseResult<ParserHandle<'a>> {
        DefaultParserFactories.delete(db_type, sharding_rule, lexer_engine)
    }

    fn create<'a>(&self, db_type: DatabaseType, sharding_rule: &'a ShardingRule, lexer_engine: &'a mut LexerEngine) -> ParseResult<ParserHandle<'a>> {
        DefaultParserFactories.create(db_type, sharding_rule, lexer_engine)
    }

    fn alter<'a>(&self, db_type: DatabaseType, sharding_rule: &'a ShardingRule, lexer_engine: &'a mut LexerEngine) -> ParseResult<ParserHandle<'a>> {
        DefaultParserFactories.alter(db_type, sharding_rule, lexer_engine)
    }

    fn drop<'a>(&self, db_type: DatabaseType, sharding_rule: &'a ShardingRule, lexer_engine: &'a mut LexerEngine) -> ParseResult<ParserHandle<'a>> {
        DefaultParserFactories.drop(db_type, sharding_rule, lexer_engine)
    }

    fn truncate<'a>(&self, db_type: DatabaseType, sharding_rule: &'a ShardingRule, lexer_engine: &'a mut LexerEngine) -> ParseResult<ParserHandle<'a>> {
        if db_type == DatabaseType::H2 {
            return Err(ParseError::UnsupportedDatabase {
                db_type,
                statement: StatementType::Truncate,
            });
        }
        DefaultParserFactories.truncate(db_type, sharding_rule, lexer_engine)
    }
}

fn engine_at(db_type: DatabaseType, sql: &str) -> Result<LexerEngine> {
    let mut engine = LexerEngineFactory::new_instance(db_type, sql);
    engine.next_token()?;
    Ok(engine)
}

#[test]
fn test_new_instance_parses_remaining_tokens() -> Result<()> {
    let rule = common::order_rule();
    let mut engine = engine_at(DatabaseType::MySQL, "SELECT * FROM t_order WHERE user_id = 1; SELECT 2")?;
    let token_type = engine.current_token().token_type;

    let statement = new_instance(DatabaseType::MySQL, token_type, &rule, &mut engine)?.parse()?;
    assert_eq!(statement.statement_type, StatementType::Select);
    assert!(statement.is_sharded(&rule));

    // The parser stops after the terminator, leaving the next statement
    assert_eq!(engine.current_token().token_type, TokenType::Default(DefaultKeyword::SELECT));

    Ok(())
}

#[test]
fn test_non_reserved_token_is_rejected() -> Result<()> {
    let rule = ShardingRule::default();
    let mut engine = engine_at(DatabaseType::MySQL, "t_order")?;
    let token_type = engine.current_token().token_type;

    match new_instance(DatabaseType::MySQL, token_type, &rule, &mut engine) {
        Err(err) => assert_eq!(
            err,
            ParseError::UnsupportedTokenClassification(TokenType::Literal(Literals::IDENTIFIER))
        ),
        Ok(_) => panic!("Identifier must not be dispatched"),
    }
    // Dispatch does not move the cursor
    assert_eq!(engine.current_token().literals, "t_order");

    Ok(())
}

#[test]
fn test_reserved_unrouted_keyword_reports_cursor_token() -> Result<()> {
    let rule = ShardingRule::default();
    let mut engine = engine_at(DatabaseType::SQLServer, "MERGE t_order AS target")?;
    engine.next_token()?;

    match new_instance(DatabaseType::SQLServer, DefaultKeyword::MERGE.into(), &rule, &mut engine) {
        Err(err) => {
            assert_eq!(err, ParseError::UnsupportedStatementKeyword(TokenType::Literal(Literals::IDENTIFIER)));
            assert_eq!(err.to_string(), "Unsupported statement keyword: IDENTIFIER");
        }
        Ok(_) => panic!("MERGE must not be dispatched"),
    }

    Ok(())
}

#[test]
fn test_custom_factories_errors_propagate() -> Result<()> {
    let rule = ShardingRule::default();

    let mut engine = engine_at(DatabaseType::H2, "TRUNCATE TABLE t_order")?;
    match dispatch(&NoH2Truncate, DatabaseType::H2, DefaultKeyword::TRUNCATE.into(), &rule, &mut engine) {
        Err(err) => assert_eq!(err.to_string(), "TRUNCATE statements are not supported for H2"),
        Ok(_) => panic!("H2 TRUNCATE must be refused"),
    }

    let mut engine = engine_at(DatabaseType::MySQL, "TRUNCATE TABLE t_order")?;
    let statement = dispatch(&NoH2Truncate, DatabaseType::MySQL, DefaultKeyword::TRUNCATE.into(), &rule, &mut engine)?
        .parse()?;
    assert_eq!(statement.tables.table_names(), vec!["t_order"]);

    Ok(())
}

#[test]
fn test_factories_as_trait_object() -> Result<()> {
    let rule = ShardingRule::default();
    let factories: &dyn ParserFactories = &DefaultParserFactories;

    let mut engine = engine_at(DatabaseType::Oracle, "DROP TABLE t_order")?;
    let statement = dispatch(factories, DatabaseType::Oracle, DefaultKeyword::DROP.into(), &rule, &mut engine)?
        .parse()?;
    assert_eq!(statement.statement_type, StatementType::Drop);

    Ok(())
}

#[test]
fn test_shared_rule_across_threads() -> Result<()> {
    let rule = Arc::new(common::order_rule());

    let handles: Vec<_> = DatabaseType::ALL
        .into_iter()
        .map(|db_type| {
            let rule = Arc::clone(&rule);
            thread::spawn(move || -> ParseResult<Vec<String>> {
                let mut engine = LexerEngineFactory::new_instance(db_type, "UPDATE t_order SET status = 1");
                engine.next_token()?;
                let token_type = engine.current_token().token_type;
                let statement = new_instance(db_type, token_type, &rule, &mut engine)?.parse()?;
                Ok(statement.sharded_tables(&rule).iter().map(|t| t.to_string()).collect())
            })
        })
        .collect();

    for handle in handles {
        let tables = handle.join().expect("parser thread panicked")?;
        assert_eq!(tables, vec!["t_order"]);
    }

    Ok(())
}

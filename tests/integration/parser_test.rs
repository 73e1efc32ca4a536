use anyhow::Result;
use shardsql::parsing::lexer::{DefaultKeyword, TokenType};
use shardsql::parsing::{GeneratedKey, SqlType};
use shardsql::{DatabaseType, ParseError, SqlParsingEngine, StatementType};

#[path = "../common/mod.rs"]
mod common;

use common::{order_rule, parse};

/// Replace each table token with its first physical table, back to front
fn rewrite(sql: &str, tokens: &[(usize, String)], suffix: &str) -> String {
    let mut chars: Vec<char> = sql.chars().collect();
    for (begin, literals) in tokens.iter().rev() {
        let end = begin + literals.chars().count();
        let replacement = format!("{}{}", literals, suffix);
        chars.splice(*begin..end, replacement.chars());
    }
    chars.into_iter().collect()
}

#[test]
fn test_binding_table_join() -> Result<()> {
    let rule = order_rule();
    let sql = "SELECT i.* FROM t_order o JOIN t_order_item i ON o.order_id = i.order_id WHERE o.user_id IN (?, ?)";
    let statement = SqlParsingEngine::new(DatabaseType::MySQL, sql, &rule).parse()?;

    assert_eq!(statement.statement_type, StatementType::Select);
    assert_eq!(statement.sql_type(), SqlType::DQL);
    assert_eq!(statement.sharded_tables(&rule), vec!["t_order", "t_order_item"]);
    assert!(rule.is_all_binding_tables(&statement.sharded_tables(&rule)));

    Ok(())
}

#[test]
fn test_table_tokens_support_rewriting() -> Result<()> {
    let sql = "SELECT COUNT(*) FROM t_order o, `t_order_item` WHERE o.order_id = 1";
    let statement = parse(DatabaseType::MySQL, sql)?;

    let tokens: Vec<(usize, String)> = statement
        .table_tokens()
        .map(|t| (t.begin_position, t.original_literals.clone()))
        .collect();
    assert_eq!(tokens.len(), 2);
    assert_eq!(statement.table_tokens().nth(1).map(|t| t.table_name()), Some("t_order_item"));

    let rewritten = rewrite(sql, &tokens, "_0");
    assert_eq!(
        rewritten,
        "SELECT COUNT(*) FROM t_order_0 o, `t_order_item`_0 WHERE o.order_id = 1"
    );

    Ok(())
}

#[test]
fn test_insert_generated_keys() -> Result<()> {
    let statement = parse(DatabaseType::MySQL, "INSERT INTO t_order (user_id, status) VALUES (?, ?)")?;
    assert_eq!(
        statement.generated_key,
        Some(GeneratedKey {
            column: "order_id".to_string(),
            supplied: false,
        })
    );

    let statement = parse(
        DatabaseType::PostgreSQL,
        "INSERT INTO t_order_item (item_id, order_id, user_id) VALUES (1, 2, 3)",
    )?;
    assert_eq!(statement.generated_key.map(|k| k.supplied), Some(true));

    let statement = parse(DatabaseType::Oracle, "INSERT INTO t_user (id) VALUES (1)")?;
    assert!(statement.generated_key.is_none());
    assert!(!statement.is_sharded(&order_rule()));

    Ok(())
}

#[test]
fn test_dialect_specific_statements() -> Result<()> {
    let cases = [
        (DatabaseType::MySQL, "UPDATE IGNORE t_order SET status = 'X' WHERE order_id = 1", StatementType::Update),
        (DatabaseType::H2, "DELETE LOW_PRIORITY FROM t_order WHERE user_id = 1", StatementType::Delete),
        (DatabaseType::Oracle, "SELECT * FROM t_order WHERE ROWNUM <= 10", StatementType::Select),
        (DatabaseType::SQLServer, "DELETE TOP (5) t_order WHERE status = 'X'", StatementType::Delete),
        (DatabaseType::PostgreSQL, "UPDATE ONLY t_order SET status = 'X' RETURNING order_id", StatementType::Update),
        (DatabaseType::PostgreSQL, "CREATE UNLOGGED TABLE t_order (order_id BIGINT)", StatementType::Create),
        (DatabaseType::MySQL, "DROP TABLE IF EXISTS t_order, t_order_item", StatementType::Drop),
        (DatabaseType::Oracle, "TRUNCATE TABLE t_order", StatementType::Truncate),
    ];

    for (db_type, sql, expected) in cases {
        let statement = parse(db_type, sql)?;
        assert_eq!(statement.statement_type, expected, "{}", sql);
        assert!(statement.tables.find("t_order").is_some(), "{}", sql);
    }

    Ok(())
}

#[test]
fn test_statement_with_comments_and_terminator() -> Result<()> {
    let statement = parse(
        DatabaseType::MySQL,
        "/* routed */ SELECT name -- the name\nFROM t_order # trailing\n;",
    )?;
    assert_eq!(statement.tables.table_names(), vec!["t_order"]);

    Ok(())
}

#[test]
fn test_unsupported_statements() -> Result<()> {
    let rule = order_rule();

    let result = SqlParsingEngine::new(DatabaseType::MySQL, "SHOW TABLES", &rule).parse();
    assert!(matches!(result, Err(ParseError::UnsupportedTokenClassification(TokenType::MySQL(_)))));

    let result = SqlParsingEngine::new(DatabaseType::MySQL, "GRANT ALL ON t_order TO app", &rule).parse();
    assert_eq!(
        result,
        Err(ParseError::UnsupportedStatementKeyword(TokenType::Default(DefaultKeyword::GRANT)))
    );

    let result = SqlParsingEngine::new(DatabaseType::PostgreSQL, "CREATE VIEW v AS SELECT 1", &rule).parse();
    assert_eq!(result, Err(ParseError::UnsupportedStatement("CREATE VIEW".to_string())));

    let result = SqlParsingEngine::new(DatabaseType::MySQL, "SELECT * FROM t_order WHERE status = 'open", &rule).parse();
    assert!(matches!(result, Err(ParseError::IllegalInput { position: 37, .. })));

    Ok(())
}

#[test]
fn test_every_sharded_table_is_reported() -> Result<()> {
    let rule = order_rule();

    let statement = parse(
        DatabaseType::MySQL,
        "SELECT * FROM t_config c JOIN t_user u ON c.value = u.value JOIN t_order o ON o.user_id = u.id",
    )?;
    assert_eq!(statement.sharded_tables(&rule), vec!["t_order"]);

    let statement = parse(DatabaseType::PostgreSQL, "TRUNCATE TABLE t_config, t_order")?;
    assert_eq!(statement.sharded_tables(&rule), vec!["t_order"]);

    let result = SqlParsingEngine::new(
        DatabaseType::PostgreSQL,
        "UPDATE t_config SET a = o.a FROM t_order o WHERE o.order_id = 1",
        &rule,
    )
    .parse();
    assert!(matches!(result, Err(ParseError::UnsupportedToken(_))));

    Ok(())
}

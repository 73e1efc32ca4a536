#![allow(dead_code)]

use anyhow::Result;
use shardsql::rule::{DataNode, TableRule};
use shardsql::{DatabaseType, ShardingRule, SqlParsingEngine, SqlStatement};
use std::io::Write;
use tempfile::NamedTempFile;

/// Rule JSON with two sharded, bound tables and an unsharded default source
pub const ORDER_RULE_JSON: &str = r#"{
    "data_sources": ["ds_0", "ds_1"],
    "default_data_source": "ds_0",
    "table_rules": [
        {
            "logic_table": "t_order",
            "actual_data_nodes": ["ds_0.t_order_0", "ds_0.t_order_1", "ds_1.t_order_0", "ds_1.t_order_1"],
            "database_sharding_columns": ["user_id"],
            "table_sharding_columns": ["order_id"],
            "generate_key_column": "order_id"
        },
        {
            "logic_table": "t_order_item",
            "database_sharding_columns": ["user_id"],
            "table_sharding_columns": ["order_id"],
            "generate_key_column": "item_id"
        }
    ],
    "binding_table_groups": [["t_order", "t_order_item"]]
}"#;

// Build the order/item sharding rule in code
pub fn order_rule() -> ShardingRule {
    ShardingRule::builder()
        .data_sources(&["ds_0", "ds_1"])
        .default_data_source("ds_0")
        .table_rule(
            TableRule::new("t_order")
                .with_data_nodes(vec![
                    DataNode::new("ds_0", "t_order_0"),
                    DataNode::new("ds_0", "t_order_1"),
                    DataNode::new("ds_1", "t_order_0"),
                    DataNode::new("ds_1", "t_order_1"),
                ])
                .with_database_sharding_columns(&["user_id"])
                .with_table_sharding_columns(&["order_id"])
                .with_generate_key_column("order_id"),
        )
        .table_rule(
            TableRule::new("t_order_item")
                .with_database_sharding_columns(&["user_id"])
                .with_table_sharding_columns(&["order_id"])
                .with_generate_key_column("item_id"),
        )
        .binding_tables(&["t_order", "t_order_item"])
        .build()
        .expect("valid test rule")
}

// Write rule JSON to a temporary file
pub fn write_rule_file(json: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(json.as_bytes())?;
    file.flush()?;
    Ok(file)
}

// Parse a statement against the order rule
pub fn parse(db_type: DatabaseType, sql: &str) -> Result<SqlStatement> {
    let rule = order_rule();
    Ok(SqlParsingEngine::new(db_type, sql, &rule).parse()?)
}

use anyhow::Result;
use shardsql::rule::{DataNode, RuleError};
use shardsql::ShardingRule;

#[path = "../common/mod.rs"]
mod common;

#[test]
fn test_load_rule_from_file() -> Result<()> {
    let file = common::write_rule_file(common::ORDER_RULE_JSON)?;
    let rule = ShardingRule::from_json_file(file.path())?;

    // The file and the builder describe the same rule
    assert_eq!(rule, common::order_rule());

    assert_eq!(rule.generate_key_column("T_ORDER"), Some("order_id"));
    assert_eq!(rule.sharding_columns("t_order_item"), vec!["user_id", "order_id"]);
    assert!(rule.is_all_binding_tables(&["t_order", "t_order_item"]));

    assert_eq!(rule.data_nodes("t_order").len(), 4);
    assert_eq!(
        rule.data_nodes("t_order_item"),
        vec![
            DataNode::new("ds_0", "t_order_item"),
            DataNode::new("ds_1", "t_order_item"),
        ]
    );
    assert_eq!(rule.data_nodes("t_config"), vec![DataNode::new("ds_0", "t_config")]);

    Ok(())
}

#[test]
fn test_rule_round_trips_through_json() -> Result<()> {
    let rule = common::order_rule();
    let json = serde_json::to_string_pretty(&rule)?;
    assert!(json.contains("\"ds_1.t_order_1\""));

    let file = common::write_rule_file(&json)?;
    assert_eq!(ShardingRule::from_json_file(file.path())?, rule);

    Ok(())
}

#[test]
fn test_invalid_rule_files() -> Result<()> {
    let file = common::write_rule_file(
        r#"{"data_sources": ["ds_0"], "table_rules": [{"logic_table": "t_order", "actual_data_nodes": ["ds_0"]}]}"#,
    )?;
    match ShardingRule::from_json_file(file.path()) {
        Err(RuleError::Json(err)) => assert!(err.to_string().contains("ds_0")),
        other => panic!("Expected Json error, got {:?}", other),
    }

    let file = common::write_rule_file(
        r#"{"data_sources": ["ds_0"], "table_rules": [{"logic_table": "t_order", "actual_data_nodes": ["ds_1.t_order"]}]}"#,
    )?;
    assert!(matches!(
        ShardingRule::from_json_file(file.path()),
        Err(RuleError::UnknownDataSource { data_source, .. }) if data_source == "ds_1"
    ));

    let dir = tempfile::tempdir()?;
    let missing = dir.path().join("missing.json");
    assert!(matches!(ShardingRule::from_json_file(&missing), Err(RuleError::Io(_))));

    Ok(())
}

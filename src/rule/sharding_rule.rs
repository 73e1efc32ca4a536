use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use super::error::{RuleError, RuleResult};
use super::table_rule::{DataNode, TableRule};

/// Sharding configuration shared by every statement parsed against it
///
/// Immutable once built; wrap it in an `Arc` to share across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardingRule {
    #[serde(default)]
    pub data_sources: Vec<String>,
    /// Data source for tables without a table rule
    #[serde(default)]
    pub default_data_source: Option<String>,
    #[serde(default)]
    pub table_rules: Vec<TableRule>,
    /// Groups of logic tables sharded identically, so joins between them stay on one node
    #[serde(default)]
    pub binding_table_groups: Vec<Vec<String>>,
}

impl ShardingRule {
    pub fn builder() -> ShardingRuleBuilder {
        ShardingRuleBuilder::default()
    }

    /// Parse and validate a rule from JSON text
    pub fn from_json_str(json: &str) -> RuleResult<Self> {
        let rule: ShardingRule = serde_json::from_str(json)?;
        rule.validate()?;
        Ok(rule)
    }

    /// Read, parse and validate a rule from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> RuleResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check the rule for internal consistency
    pub fn validate(&self) -> RuleResult<()> {
        if self.data_sources.is_empty() && !self.table_rules.is_empty() {
            return Err(RuleError::EmptyDataSources);
        }

        let mut seen = HashSet::new();
        for table_rule in &self.table_rules {
            if !seen.insert(table_rule.logic_table.to_lowercase()) {
                return Err(RuleError::DuplicateTable(table_rule.logic_table.clone()));
            }
            for node in &table_rule.actual_data_nodes {
                if !self.data_sources.contains(&node.data_source_name) {
                    return Err(RuleError::UnknownDataSource {
                        node: node.to_string(),
                        data_source: node.data_source_name.clone(),
                    });
                }
            }
            if table_rule.sharding_columns().is_empty() {
                warn!("Table rule {} declares no sharding columns", table_rule.logic_table);
            }
        }

        if let Some(default) = &self.default_data_source {
            if !self.data_sources.contains(default) {
                return Err(RuleError::UnknownDataSource {
                    node: default.clone(),
                    data_source: default.clone(),
                });
            }
        }

        for table in self.binding_table_groups.iter().flatten() {
            if self.find_table_rule(table).is_none() {
                return Err(RuleError::UnknownBindingTable(table.clone()));
            }
        }
        Ok(())
    }

    /// Find the rule of a logic table, ignoring case
    pub fn find_table_rule(&self, logic_table: &str) -> Option<&TableRule> {
        self.table_rules.iter().find(|r| r.matches(logic_table))
    }

    pub fn is_logic_table(&self, table: &str) -> bool {
        self.find_table_rule(table).is_some()
    }

    /// Generated key column of a logic table, if configured
    pub fn generate_key_column(&self, logic_table: &str) -> Option<&str> {
        self.find_table_rule(logic_table)
            .and_then(|r| r.generate_key_column.as_deref())
    }

    /// Sharding columns of a logic table; empty for unsharded tables
    pub fn sharding_columns(&self, logic_table: &str) -> Vec<&str> {
        self.find_table_rule(logic_table)
            .map(|r| r.sharding_columns())
            .unwrap_or_default()
    }

    /// Whether a column shards the given logic table
    pub fn is_sharding_column(&self, logic_table: &str, column: &str) -> bool {
        self.sharding_columns(logic_table)
            .iter()
            .any(|c| c.eq_ignore_ascii_case(column))
    }

    /// Whether the logic table belongs to a binding group
    pub fn is_binding_table(&self, logic_table: &str) -> bool {
        self.binding_group(logic_table).is_some()
    }

    /// Whether all tables belong to the same binding group
    pub fn is_all_binding_tables(&self, logic_tables: &[&str]) -> bool {
        let Some(first) = logic_tables.first() else {
            return false;
        };
        match self.binding_group(first) {
            Some(group) => logic_tables
                .iter()
                .all(|t| group.iter().any(|g| g.eq_ignore_ascii_case(t))),
            None => false,
        }
    }

    fn binding_group(&self, logic_table: &str) -> Option<&Vec<String>> {
        self.binding_table_groups
            .iter()
            .find(|group| group.iter().any(|t| t.eq_ignore_ascii_case(logic_table)))
    }

    /// Physical tables a logic table maps onto
    pub fn data_nodes(&self, logic_table: &str) -> Vec<DataNode> {
        match self.find_table_rule(logic_table) {
            Some(rule) => rule.data_nodes(&self.data_sources),
            None => self
                .default_data_source
                .iter()
                .map(|ds| DataNode::new(ds.as_str(), logic_table))
                .collect(),
        }
    }
}

/// Builds a `ShardingRule` in code
#[derive(Debug, Default)]
pub struct ShardingRuleBuilder {
    rule: ShardingRule,
}

impl ShardingRuleBuilder {
    pub fn data_sources(mut self, names: &[&str]) -> Self {
        self.rule.data_sources = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn default_data_source(mut self, name: &str) -> Self {
        self.rule.default_data_source = Some(name.to_string());
        self
    }

    pub fn table_rule(mut self, table_rule: TableRule) -> Self {
        self.rule.table_rules.push(table_rule);
        self
    }

    pub fn binding_tables(mut self, tables: &[&str]) -> Self {
        self.rule
            .binding_table_groups
            .push(tables.iter().map(|t| t.to_string()).collect());
        self
    }

    /// Validate and return the rule
    pub fn build(self) -> RuleResult<ShardingRule> {
        self.rule.validate()?;
        Ok(self.rule)
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::RuleError;

/// Physical table inside a data source, written `ds_0.t_order_0`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DataNode {
    pub data_source_name: String,
    pub table_name: String,
}

impl DataNode {
    pub fn new(data_source_name: impl Into<String>, table_name: impl Into<String>) -> Self {
        DataNode {
            data_source_name: data_source_name.into(),
            table_name: table_name.into(),
        }
    }
}

impl FromStr for DataNode {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once('.') {
            Some((data_source, table))
                if !data_source.is_empty() && !table.is_empty() && !table.contains('.') =>
            {
                Ok(DataNode::new(data_source, table))
            }
            _ => Err(RuleError::InvalidDataNode(s.to_string())),
        }
    }
}

impl TryFrom<String> for DataNode {
    type Error = RuleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DataNode> for String {
    fn from(node: DataNode) -> Self {
        node.to_string()
    }
}

impl fmt::Display for DataNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.data_source_name, self.table_name)
    }
}

/// Sharding configuration of one logic table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRule {
    pub logic_table: String,
    /// Physical tables; empty means one table named like the logic table per data source
    #[serde(default)]
    pub actual_data_nodes: Vec<DataNode>,
    #[serde(default)]
    pub database_sharding_columns: Vec<String>,
    #[serde(default)]
    pub table_sharding_columns: Vec<String>,
    /// Column whose value the middleware generates when an INSERT omits it
    #[serde(default)]
    pub generate_key_column: Option<String>,
}

impl TableRule {
    pub fn new(logic_table: impl Into<String>) -> Self {
        TableRule {
            logic_table: logic_table.into(),
            actual_data_nodes: Vec::new(),
            database_sharding_columns: Vec::new(),
            table_sharding_columns: Vec::new(),
            generate_key_column: None,
        }
    }

    pub fn with_data_nodes(mut self, nodes: Vec<DataNode>) -> Self {
        self.actual_data_nodes = nodes;
        self
    }

    pub fn with_database_sharding_columns(mut self, columns: &[&str]) -> Self {
        self.database_sharding_columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_table_sharding_columns(mut self, columns: &[&str]) -> Self {
        self.table_sharding_columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_generate_key_column(mut self, column: &str) -> Self {
        self.generate_key_column = Some(column.to_string());
        self
    }

    /// Whether the rule names the given logic table, ignoring case
    pub fn matches(&self, logic_table: &str) -> bool {
        self.logic_table.eq_ignore_ascii_case(logic_table)
    }

    /// Database and table sharding columns, without duplicates
    pub fn sharding_columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = Vec::new();
        for column in self.database_sharding_columns.iter().chain(&self.table_sharding_columns) {
            if !columns.iter().any(|c| c.eq_ignore_ascii_case(column)) {
                columns.push(column.as_str());
            }
        }
        columns
    }

    /// Physical tables, falling back to the logic table in every data source
    pub fn data_nodes(&self, data_sources: &[String]) -> Vec<DataNode> {
        if !self.actual_data_nodes.is_empty() {
            return self.actual_data_nodes.clone();
        }
        data_sources
            .iter()
            .map(|ds| DataNode::new(ds.as_str(), self.logic_table.as_str()))
            .collect()
    }
}

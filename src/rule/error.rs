use thiserror::Error;

/// Errors raised while loading or validating a sharding rule
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Failed to read sharding rule: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed sharding rule: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid data node '{0}', expected <data_source>.<table>")]
    InvalidDataNode(String),
    #[error("Data node '{node}' references unknown data source '{data_source}'")]
    UnknownDataSource { node: String, data_source: String },
    #[error("Logic table {0} is configured more than once")]
    DuplicateTable(String),
    #[error("Binding table {0} has no table rule")]
    UnknownBindingTable(String),
    #[error("Sharding rule declares no data sources")]
    EmptyDataSources,
}

/// Result type for sharding rule operations
pub type RuleResult<T> = Result<T, RuleError>;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// SQL dialect whose grammar quirks apply to a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatabaseType {
    H2,
    MySQL,
    Oracle,
    SQLServer,
    PostgreSQL,
}

impl DatabaseType {
    /// All supported dialects, in declaration order
    pub const ALL: [DatabaseType; 5] = [
        DatabaseType::H2,
        DatabaseType::MySQL,
        DatabaseType::Oracle,
        DatabaseType::SQLServer,
        DatabaseType::PostgreSQL,
    ];

    /// Product name as reported by the database driver
    pub fn product_name(&self) -> &'static str {
        match self {
            DatabaseType::H2 => "H2",
            DatabaseType::MySQL => "MySQL",
            DatabaseType::Oracle => "Oracle",
            DatabaseType::SQLServer => "Microsoft SQL Server",
            DatabaseType::PostgreSQL => "PostgreSQL",
        }
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.product_name())
    }
}

/// Error returned when a dialect name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported database type: {0}")]
pub struct UnknownDatabaseType(pub String);

impl FromStr for DatabaseType {
    type Err = UnknownDatabaseType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "h2" => Ok(DatabaseType::H2),
            "mysql" => Ok(DatabaseType::MySQL),
            "oracle" => Ok(DatabaseType::Oracle),
            "sqlserver" | "mssql" | "microsoft sql server" => Ok(DatabaseType::SQLServer),
            "postgresql" | "postgres" => Ok(DatabaseType::PostgreSQL),
            _ => Err(UnknownDatabaseType(s.to_string())),
        }
    }
}

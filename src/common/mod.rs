// Common definitions shared across the parsing and rule layers

pub mod database_type;

pub use self::database_type::{DatabaseType, UnknownDatabaseType};

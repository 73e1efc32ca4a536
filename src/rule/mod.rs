// Sharding Rule Module
//
// Describes how logic tables map onto physical tables across data sources.
// The parsers only read it; nothing here computes shard targets.

pub mod error;
pub mod table_rule;
pub mod sharding_rule;

pub use self::error::{RuleError, RuleResult};
pub use self::table_rule::{DataNode, TableRule};
pub use self::sharding_rule::{ShardingRule, ShardingRuleBuilder};

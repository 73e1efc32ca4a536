// SQL Statement Representation
//
// The result of parsing one statement: its family, the tables it touches and
// the token positions a rewriter needs to substitute physical table names.

use std::fmt;

use crate::parsing::lexer::DefaultKeyword;
use crate::rule::ShardingRule;

/// Coarse SQL category
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlType {
    DQL,
    DML,
    DDL,
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Statement family, named by its leading keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementType {
    Select,
    Insert,
    Update,
    Delete,
    Create,
    Alter,
    Drop,
    Truncate,
}

impl StatementType {
    pub const ALL: [StatementType; 8] = [
        StatementType::Select,
        StatementType::Insert,
        StatementType::Update,
        StatementType::Delete,
        StatementType::Create,
        StatementType::Alter,
        StatementType::Drop,
        StatementType::Truncate,
    ];

    pub fn sql_type(&self) -> SqlType {
        match self {
            StatementType::Select => SqlType::DQL,
            StatementType::Insert | StatementType::Update | StatementType::Delete => SqlType::DML,
            StatementType::Create | StatementType::Alter | StatementType::Drop | StatementType::Truncate => {
                SqlType::DDL
            }
        }
    }

    /// The reserved keyword that starts statements of this family
    pub fn keyword(&self) -> DefaultKeyword {
        match self {
            StatementType::Select => DefaultKeyword::SELECT,
            StatementType::Insert => DefaultKeyword::INSERT,
            StatementType::Update => DefaultKeyword::UPDATE,
            StatementType::Delete => DefaultKeyword::DELETE,
            StatementType::Create => DefaultKeyword::CREATE,
            StatementType::Alter => DefaultKeyword::ALTER,
            StatementType::Drop => DefaultKeyword::DROP,
            StatementType::Truncate => DefaultKeyword::TRUNCATE,
        }
    }
}

impl fmt::Display for StatementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword().as_str())
    }
}

/// Table referenced by a statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Unquoted table name
    pub name: String,
    /// Unquoted aliases in order of appearance; a self-join has several
    pub aliases: Vec<String>,
}

impl Table {
    pub fn new(name: String, alias: Option<String>) -> Self {
        Table {
            name,
            aliases: alias.into_iter().collect(),
        }
    }

    /// First alias the table was given
    pub fn alias(&self) -> Option<&str> {
        self.aliases.first().map(String::as_str)
    }
}

/// Distinct tables of a statement, in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tables {
    tables: Vec<Table>,
}

impl Tables {
    /// Add a table, merging its aliases into an entry of the same name
    pub fn add(&mut self, table: Table) {
        let existing = self.tables.iter_mut().find(|t| t.name.eq_ignore_ascii_case(&table.name));
        let Some(existing) = existing else {
            self.tables.push(table);
            return;
        };
        for alias in table.aliases {
            if !existing.aliases.iter().any(|a| a.eq_ignore_ascii_case(&alias)) {
                existing.aliases.push(alias);
            }
        }
    }

    /// Find a table by name, then by alias, ignoring case
    pub fn find(&self, name_or_alias: &str) -> Option<&Table> {
        self.tables
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name_or_alias))
            .or_else(|| {
                self.tables
                    .iter()
                    .find(|t| t.aliases.iter().any(|a| a.eq_ignore_ascii_case(name_or_alias)))
            })
    }

    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn is_single_table(&self) -> bool {
        self.tables.len() == 1
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }
}

/// Position of a table name in the original SQL text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableToken {
    /// Char offset where the table name begins
    pub begin_position: usize,
    /// Table name as written, quotes included
    pub original_literals: String,
}

impl TableToken {
    /// Table name without identifier quotes
    pub fn table_name(&self) -> &str {
        crate::parsing::lexer::token::unquote_identifier(&self.original_literals)
    }
}

/// Markers into the SQL text for later rewriting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlToken {
    Table(TableToken),
}

/// Auto-generated key column of an INSERT target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedKey {
    pub column: String,
    /// Whether the statement itself provides a value for the column
    pub supplied: bool,
}

/// Parsed SQL statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlStatement {
    pub statement_type: StatementType,
    pub tables: Tables,
    pub sql_tokens: Vec<SqlToken>,
    /// Insert column names in statement order; empty for other statements
    pub insert_columns: Vec<String>,
    pub generated_key: Option<GeneratedKey>,
}

impl SqlStatement {
    pub fn new(statement_type: StatementType) -> Self {
        SqlStatement {
            statement_type,
            tables: Tables::default(),
            sql_tokens: Vec::new(),
            insert_columns: Vec::new(),
            generated_key: None,
        }
    }

    pub fn sql_type(&self) -> SqlType {
        self.statement_type.sql_type()
    }

    /// Tables of this statement that are logic tables of the rule
    pub fn sharded_tables<'s>(&'s self, sharding_rule: &ShardingRule) -> Vec<&'s str> {
        self.tables
            .iter()
            .filter(|t| sharding_rule.is_logic_table(&t.name))
            .map(|t| t.name.as_str())
            .collect()
    }

    /// Whether any table of this statement is sharded by the rule
    pub fn is_sharded(&self, sharding_rule: &ShardingRule) -> bool {
        self.tables.iter().any(|t| sharding_rule.is_logic_table(&t.name))
    }

    /// Table tokens in order of appearance
    pub fn table_tokens(&self) -> impl Iterator<Item = &TableToken> {
        self.sql_tokens.iter().map(|token| match token {
            SqlToken::Table(table_token) => table_token,
        })
    }
}

impl fmt::Display for SqlStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} statement ({})", self.statement_type, self.sql_type())
    }
}

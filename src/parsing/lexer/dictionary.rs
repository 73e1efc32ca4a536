// Keyword Dictionaries
//
// Maps upper-cased words to their keyword token type. Each dialect sees the
// shared reserved words plus its own.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::common::DatabaseType;
use super::token::{
    DefaultKeyword, MySQLKeyword, OracleKeyword, PostgreSQLKeyword, SQLServerKeyword, TokenType,
};

/// Keyword lookup table for one dialect
#[derive(Debug)]
pub struct Dictionary {
    tokens: HashMap<&'static str, TokenType>,
}

impl Dictionary {
    fn new<I>(dialect_keywords: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, TokenType)>,
    {
        let mut tokens: HashMap<&'static str, TokenType> = DefaultKeyword::KEYWORDS
            .iter()
            .map(|k| (k.as_str(), TokenType::Default(*k)))
            .collect();
        // Dialect words never shadow a reserved word of the shared scheme
        for (word, token_type) in dialect_keywords {
            tokens.entry(word).or_insert(token_type);
        }
        Dictionary { tokens }
    }

    /// Dictionary used when lexing SQL of the given dialect
    pub fn for_database(db_type: DatabaseType) -> &'static Dictionary {
        match db_type {
            DatabaseType::H2 | DatabaseType::MySQL => &*MYSQL_DICTIONARY,
            DatabaseType::Oracle => &*ORACLE_DICTIONARY,
            DatabaseType::SQLServer => &*SQLSERVER_DICTIONARY,
            DatabaseType::PostgreSQL => &*POSTGRESQL_DICTIONARY,
        }
    }

    /// Look up a word case-insensitively
    pub fn find_token_type(&self, literals: &str) -> Option<TokenType> {
        self.tokens.get(literals.to_uppercase().as_str()).copied()
    }

    /// Number of keywords known to this dictionary
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

static MYSQL_DICTIONARY: Lazy<Dictionary> = Lazy::new(|| {
    Dictionary::new(MySQLKeyword::KEYWORDS.iter().map(|k| (k.as_str(), TokenType::MySQL(*k))))
});

static ORACLE_DICTIONARY: Lazy<Dictionary> = Lazy::new(|| {
    Dictionary::new(OracleKeyword::KEYWORDS.iter().map(|k| (k.as_str(), TokenType::Oracle(*k))))
});

static SQLSERVER_DICTIONARY: Lazy<Dictionary> = Lazy::new(|| {
    Dictionary::new(SQLServerKeyword::KEYWORDS.iter().map(|k| (k.as_str(), TokenType::SQLServer(*k))))
});

static POSTGRESQL_DICTIONARY: Lazy<Dictionary> = Lazy::new(|| {
    Dictionary::new(PostgreSQLKeyword::KEYWORDS.iter().map(|k| (k.as_str(), TokenType::PostgreSQL(*k))))
});

// Dialect Syntax Hooks
//
// The statement parsers are generic over a dialect; each dialect decides which
// modifiers it tolerates between the statement keywords and the table names.

use crate::parsing::error::ParseResult;
use crate::parsing::lexer::{
    DefaultKeyword, LexerEngine, MySQLKeyword, OracleKeyword, PostgreSQLKeyword, SQLServerKeyword,
    Symbol,
};

/// Per-dialect variations of statement prefixes
pub trait DialectSyntax: 'static {
    /// INSERT may omit INTO
    const INSERT_INTO_OPTIONAL: bool = false;
    /// INSERT accepts `SET column = value, ...` instead of a column list
    const INSERT_SET_CLAUSE: bool = false;
    /// DROP TABLE accepts a comma separated list of tables
    const MULTIPLE_DROP_TABLES: bool = true;
    /// TRUNCATE accepts a comma separated list of tables
    const MULTIPLE_TRUNCATE_TABLES: bool = false;
    /// TRUNCATE must be followed by TABLE
    const TRUNCATE_TABLE_REQUIRED: bool = false;
    /// CREATE TABLE IF NOT EXISTS and DROP TABLE IF EXISTS are accepted
    const IF_EXISTS_GUARDS: bool = false;

    /// Skip modifiers between SELECT and the select list
    fn skip_select_modifiers(engine: &mut LexerEngine) -> ParseResult<()> {
        engine.skip_all(&[DefaultKeyword::DISTINCT.into(), DefaultKeyword::ALL.into()])
    }

    /// Skip index or locking hints after a table reference
    fn skip_table_hints(_engine: &mut LexerEngine) -> ParseResult<()> {
        Ok(())
    }

    /// Skip modifiers between INSERT and INTO
    fn skip_insert_modifiers(_engine: &mut LexerEngine) -> ParseResult<()> {
        Ok(())
    }

    /// Skip modifiers between UPDATE and the table name
    fn skip_update_modifiers(_engine: &mut LexerEngine) -> ParseResult<()> {
        Ok(())
    }

    /// Consume everything between DELETE and the table name
    fn skip_delete_prefix(engine: &mut LexerEngine) -> ParseResult<()> {
        engine.accept(DefaultKeyword::FROM.into())?;
        Ok(())
    }

    /// Skip modifiers between CREATE and TABLE
    fn skip_create_table_modifiers(_engine: &mut LexerEngine) -> ParseResult<()> {
        Ok(())
    }

    /// Skip modifiers between DROP and TABLE
    fn skip_drop_modifiers(_engine: &mut LexerEngine) -> ParseResult<()> {
        Ok(())
    }

    /// Skip an inheritance guard before the table of ALTER or TRUNCATE
    fn skip_only(_engine: &mut LexerEngine) -> ParseResult<()> {
        Ok(())
    }
}

/// MySQL syntax, also used for H2 in MySQL compatibility mode
#[derive(Debug)]
pub struct MySQLSyntax;

impl DialectSyntax for MySQLSyntax {
    const INSERT_INTO_OPTIONAL: bool = true;
    const INSERT_SET_CLAUSE: bool = true;
    const IF_EXISTS_GUARDS: bool = true;

    fn skip_select_modifiers(engine: &mut LexerEngine) -> ParseResult<()> {
        engine.skip_all(&[
            DefaultKeyword::DISTINCT.into(),
            DefaultKeyword::ALL.into(),
            MySQLKeyword::DISTINCTROW.into(),
            MySQLKeyword::HIGH_PRIORITY.into(),
            MySQLKeyword::STRAIGHT_JOIN.into(),
            MySQLKeyword::SQL_CALC_FOUND_ROWS.into(),
            MySQLKeyword::SQL_NO_CACHE.into(),
        ])
    }

    /// `USE | FORCE | IGNORE {INDEX | KEY} [FOR {JOIN | ORDER BY | GROUP BY}] (...)`
    fn skip_table_hints(engine: &mut LexerEngine) -> ParseResult<()> {
        while engine.skip_if_equal(&[
            MySQLKeyword::USE.into(),
            MySQLKeyword::FORCE.into(),
            MySQLKeyword::IGNORE.into(),
        ])? {
            engine.skip_if_equal(&[DefaultKeyword::INDEX.into(), DefaultKeyword::KEY.into()])?;
            if engine.skip_if_equal(&[DefaultKeyword::FOR.into()])? {
                engine.skip_all(&[
                    DefaultKeyword::JOIN.into(),
                    DefaultKeyword::ORDER.into(),
                    DefaultKeyword::GROUP.into(),
                    DefaultKeyword::BY.into(),
                ])?;
            }
            engine.skip_parentheses()?;
        }
        Ok(())
    }

    fn skip_insert_modifiers(engine: &mut LexerEngine) -> ParseResult<()> {
        engine.skip_all(&[
            MySQLKeyword::LOW_PRIORITY.into(),
            MySQLKeyword::DELAYED.into(),
            MySQLKeyword::HIGH_PRIORITY.into(),
            MySQLKeyword::IGNORE.into(),
        ])
    }

    fn skip_update_modifiers(engine: &mut LexerEngine) -> ParseResult<()> {
        engine.skip_all(&[MySQLKeyword::LOW_PRIORITY.into(), MySQLKeyword::IGNORE.into()])
    }

    fn skip_delete_prefix(engine: &mut LexerEngine) -> ParseResult<()> {
        engine.skip_all(&[
            MySQLKeyword::LOW_PRIORITY.into(),
            MySQLKeyword::QUICK.into(),
            MySQLKeyword::IGNORE.into(),
        ])?;
        engine.accept(DefaultKeyword::FROM.into())?;
        Ok(())
    }

    fn skip_create_table_modifiers(engine: &mut LexerEngine) -> ParseResult<()> {
        engine.skip_if_equal(&[DefaultKeyword::TEMPORARY.into()])?;
        Ok(())
    }

    fn skip_drop_modifiers(engine: &mut LexerEngine) -> ParseResult<()> {
        engine.skip_if_equal(&[DefaultKeyword::TEMPORARY.into()])?;
        Ok(())
    }
}

#[derive(Debug)]
pub struct OracleSyntax;

impl DialectSyntax for OracleSyntax {
    const MULTIPLE_DROP_TABLES: bool = false;
    const TRUNCATE_TABLE_REQUIRED: bool = true;

    fn skip_update_modifiers(engine: &mut LexerEngine) -> ParseResult<()> {
        engine.skip_if_equal(&[DefaultKeyword::ONLY.into()])?;
        Ok(())
    }

    fn skip_delete_prefix(engine: &mut LexerEngine) -> ParseResult<()> {
        engine.skip_if_equal(&[DefaultKeyword::FROM.into()])?;
        engine.skip_if_equal(&[DefaultKeyword::ONLY.into()])?;
        Ok(())
    }

    fn skip_create_table_modifiers(engine: &mut LexerEngine) -> ParseResult<()> {
        if engine.skip_if_equal(&[OracleKeyword::GLOBAL.into()])? {
            engine.accept(DefaultKeyword::TEMPORARY.into())?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct SQLServerSyntax;

impl SQLServerSyntax {
    /// `TOP (n) | TOP n [PERCENT] [WITH TIES]`
    fn skip_top(engine: &mut LexerEngine) -> ParseResult<()> {
        if !engine.skip_if_equal(&[SQLServerKeyword::TOP.into()])? {
            return Ok(());
        }
        if engine.equal_any(&[Symbol::LeftParen.into()]) {
            engine.skip_parentheses()?;
        } else {
            engine.next_token()?;
        }
        engine.skip_if_equal(&[SQLServerKeyword::PERCENT.into()])?;
        if engine.skip_if_equal(&[DefaultKeyword::WITH.into()])? {
            engine.accept(SQLServerKeyword::TIES.into())?;
        }
        Ok(())
    }
}

impl DialectSyntax for SQLServerSyntax {
    const INSERT_INTO_OPTIONAL: bool = true;
    const IF_EXISTS_GUARDS: bool = true;

    fn skip_select_modifiers(engine: &mut LexerEngine) -> ParseResult<()> {
        engine.skip_all(&[DefaultKeyword::DISTINCT.into(), DefaultKeyword::ALL.into()])?;
        Self::skip_top(engine)
    }

    /// `WITH (NOLOCK, ...)`
    fn skip_table_hints(engine: &mut LexerEngine) -> ParseResult<()> {
        if engine.skip_if_equal(&[DefaultKeyword::WITH.into()])? {
            engine.skip_parentheses()?;
        }
        Ok(())
    }

    fn skip_update_modifiers(engine: &mut LexerEngine) -> ParseResult<()> {
        Self::skip_top(engine)
    }

    fn skip_delete_prefix(engine: &mut LexerEngine) -> ParseResult<()> {
        Self::skip_top(engine)?;
        engine.skip_if_equal(&[DefaultKeyword::FROM.into()])?;
        Ok(())
    }
}

#[derive(Debug)]
pub struct PostgreSQLSyntax;

impl DialectSyntax for PostgreSQLSyntax {
    const MULTIPLE_TRUNCATE_TABLES: bool = true;
    const IF_EXISTS_GUARDS: bool = true;

    fn skip_update_modifiers(engine: &mut LexerEngine) -> ParseResult<()> {
        engine.skip_if_equal(&[DefaultKeyword::ONLY.into()])?;
        Ok(())
    }

    fn skip_delete_prefix(engine: &mut LexerEngine) -> ParseResult<()> {
        engine.accept(DefaultKeyword::FROM.into())?;
        engine.skip_if_equal(&[DefaultKeyword::ONLY.into()])?;
        Ok(())
    }

    fn skip_create_table_modifiers(engine: &mut LexerEngine) -> ParseResult<()> {
        engine.skip_if_equal(&[PostgreSQLKeyword::GLOBAL.into(), PostgreSQLKeyword::LOCAL.into()])?;
        engine.skip_if_equal(&[
            DefaultKeyword::TEMPORARY.into(),
            PostgreSQLKeyword::TEMP.into(),
            PostgreSQLKeyword::UNLOGGED.into(),
        ])?;
        Ok(())
    }

    fn skip_only(engine: &mut LexerEngine) -> ParseResult<()> {
        engine.skip_if_equal(&[DefaultKeyword::ONLY.into()])?;
        Ok(())
    }
}

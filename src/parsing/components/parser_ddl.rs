// DDL Statement Parser Implementation
//
// This module implements parsing for SQL DDL (Data Definition Language) statements:
// CREATE TABLE, ALTER TABLE, DROP TABLE and TRUNCATE TABLE

use std::marker::PhantomData;

use crate::parsing::error::{ParseError, ParseResult};
use crate::parsing::lexer::{DefaultKeyword, LexerEngine, Symbol};
use crate::parsing::statement::{SqlStatement, StatementType};
use crate::rule::ShardingRule;
use super::dialect::DialectSyntax;
use super::parser_core::{parse_table, skip_to_statement_end, SqlStatementParser};

/// Only table definitions are routed; other objects fail with the statement head
fn expect_table(engine: &mut LexerEngine, statement_type: StatementType) -> ParseResult<()> {
    if engine.skip_if_equal(&[DefaultKeyword::TABLE.into()])? {
        return Ok(());
    }
    Err(ParseError::UnsupportedStatement(format!(
        "{} {}",
        statement_type,
        engine.current_token().literals
    )))
}

/// `IF EXISTS`
fn skip_if_exists<D: DialectSyntax>(engine: &mut LexerEngine) -> ParseResult<()> {
    if D::IF_EXISTS_GUARDS && engine.skip_if_equal(&[DefaultKeyword::IF.into()])? {
        engine.accept(DefaultKeyword::EXISTS.into())?;
    }
    Ok(())
}

/// `IF NOT EXISTS`
fn skip_if_not_exists<D: DialectSyntax>(engine: &mut LexerEngine) -> ParseResult<()> {
    if D::IF_EXISTS_GUARDS && engine.skip_if_equal(&[DefaultKeyword::IF.into()])? {
        engine.accept(DefaultKeyword::NOT.into())?;
        engine.accept(DefaultKeyword::EXISTS.into())?;
    }
    Ok(())
}

/// Parser for CREATE TABLE statements of dialect `D`
pub struct CreateParser<'a, D> {
    lexer_engine: &'a mut LexerEngine,
    dialect: PhantomData<D>,
}

impl<'a, D: DialectSyntax> CreateParser<'a, D> {
    pub fn new(_sharding_rule: &'a ShardingRule, lexer_engine: &'a mut LexerEngine) -> Self {
        CreateParser {
            lexer_engine,
            dialect: PhantomData,
        }
    }
}

impl<D: DialectSyntax> SqlStatementParser for CreateParser<'_, D> {
    fn parse(&mut self) -> ParseResult<SqlStatement> {
        let engine = &mut *self.lexer_engine;
        let mut statement = SqlStatement::new(StatementType::Create);

        engine.accept(DefaultKeyword::CREATE.into())?;
        D::skip_create_table_modifiers(engine)?;
        expect_table(engine, StatementType::Create)?;
        skip_if_not_exists::<D>(engine)?;
        parse_table(engine, &mut statement)?;

        // Column and constraint definitions
        skip_to_statement_end(engine)?;
        Ok(statement)
    }
}

/// Parser for ALTER TABLE statements of dialect `D`
pub struct AlterParser<'a, D> {
    lexer_engine: &'a mut LexerEngine,
    dialect: PhantomData<D>,
}

impl<'a, D: DialectSyntax> AlterParser<'a, D> {
    pub fn new(_sharding_rule: &'a ShardingRule, lexer_engine: &'a mut LexerEngine) -> Self {
        AlterParser {
            lexer_engine,
            dialect: PhantomData,
        }
    }
}

impl<D: DialectSyntax> SqlStatementParser for AlterParser<'_, D> {
    fn parse(&mut self) -> ParseResult<SqlStatement> {
        let engine = &mut *self.lexer_engine;
        let mut statement = SqlStatement::new(StatementType::Alter);

        engine.accept(DefaultKeyword::ALTER.into())?;
        expect_table(engine, StatementType::Alter)?;
        skip_if_exists::<D>(engine)?;
        D::skip_only(engine)?;
        parse_table(engine, &mut statement)?;

        skip_to_statement_end(engine)?;
        Ok(statement)
    }
}

/// Parser for DROP TABLE statements of dialect `D`
pub struct DropParser<'a, D> {
    lexer_engine: &'a mut LexerEngine,
    dialect: PhantomData<D>,
}

impl<'a, D: DialectSyntax> DropParser<'a, D> {
    pub fn new(_sharding_rule: &'a ShardingRule, lexer_engine: &'a mut LexerEngine) -> Self {
        DropParser {
            lexer_engine,
            dialect: PhantomData,
        }
    }
}

impl<D: DialectSyntax> SqlStatementParser for DropParser<'_, D> {
    fn parse(&mut self) -> ParseResult<SqlStatement> {
        let engine = &mut *self.lexer_engine;
        let mut statement = SqlStatement::new(StatementType::Drop);

        engine.accept(DefaultKeyword::DROP.into())?;
        D::skip_drop_modifiers(engine)?;
        expect_table(engine, StatementType::Drop)?;
        skip_if_exists::<D>(engine)?;

        parse_table(engine, &mut statement)?;
        while engine.equal_any(&[Symbol::COMMA.into()]) {
            if !D::MULTIPLE_DROP_TABLES {
                return Err(engine.unexpected());
            }
            engine.next_token()?;
            parse_table(engine, &mut statement)?;
        }

        // CASCADE, RESTRICT, PURGE
        skip_to_statement_end(engine)?;
        Ok(statement)
    }
}

/// Parser for TRUNCATE TABLE statements of dialect `D`
pub struct TruncateParser<'a, D> {
    lexer_engine: &'a mut LexerEngine,
    dialect: PhantomData<D>,
}

impl<'a, D: DialectSyntax> TruncateParser<'a, D> {
    pub fn new(_sharding_rule: &'a ShardingRule, lexer_engine: &'a mut LexerEngine) -> Self {
        TruncateParser {
            lexer_engine,
            dialect: PhantomData,
        }
    }
}

impl<D: DialectSyntax> SqlStatementParser for TruncateParser<'_, D> {
    fn parse(&mut self) -> ParseResult<SqlStatement> {
        let engine = &mut *self.lexer_engine;
        let mut statement = SqlStatement::new(StatementType::Truncate);

        engine.accept(DefaultKeyword::TRUNCATE.into())?;
        if D::TRUNCATE_TABLE_REQUIRED {
            engine.accept(DefaultKeyword::TABLE.into())?;
        } else {
            engine.skip_if_equal(&[DefaultKeyword::TABLE.into()])?;
        }
        D::skip_only(engine)?;
        parse_table(engine, &mut statement)?;
        while engine.equal_any(&[Symbol::COMMA.into()]) {
            if !D::MULTIPLE_TRUNCATE_TABLES {
                return Err(engine.unexpected());
            }
            engine.next_token()?;
            D::skip_only(engine)?;
            parse_table(engine, &mut statement)?;
        }

        // RESTART IDENTITY, CASCADE
        skip_to_statement_end(engine)?;
        Ok(statement)
    }
}

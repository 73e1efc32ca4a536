// SELECT Statement Parser Implementation
//
// Collects the tables of a SELECT. The select list, join conditions and the
// trailing clauses are skipped, not parsed.

use std::marker::PhantomData;

use crate::parsing::error::ParseResult;
use crate::parsing::lexer::{
    DefaultKeyword, LexerEngine, MySQLKeyword, OracleKeyword, PostgreSQLKeyword, SQLServerKeyword,
    Symbol, TokenType,
};
use crate::parsing::statement::{SqlStatement, StatementType};
use crate::rule::ShardingRule;
use super::dialect::DialectSyntax;
use super::parser_core::{parse_alias, parse_aliased_table, SqlStatementParser};

const SET_OPERATORS: [TokenType; 4] = [
    TokenType::Default(DefaultKeyword::UNION),
    TokenType::Default(DefaultKeyword::EXCEPT),
    TokenType::Default(DefaultKeyword::INTERSECT),
    TokenType::Default(DefaultKeyword::MINUS),
];

pub(super) const JOIN_MODIFIERS: [TokenType; 7] = [
    TokenType::Default(DefaultKeyword::NATURAL),
    TokenType::Default(DefaultKeyword::LEFT),
    TokenType::Default(DefaultKeyword::RIGHT),
    TokenType::Default(DefaultKeyword::FULL),
    TokenType::Default(DefaultKeyword::INNER),
    TokenType::Default(DefaultKeyword::OUTER),
    TokenType::Default(DefaultKeyword::CROSS),
];

pub(super) const JOIN_KEYWORDS: [TokenType; 2] = [
    TokenType::Default(DefaultKeyword::JOIN),
    TokenType::MySQL(MySQLKeyword::STRAIGHT_JOIN),
];

const DUAL: [TokenType; 2] = [
    TokenType::MySQL(MySQLKeyword::DUAL),
    TokenType::Oracle(OracleKeyword::DUAL),
];

/// Tokens that end a join condition
const CONDITION_TERMINATORS: [TokenType; 11] = [
    TokenType::Symbol(Symbol::COMMA),
    TokenType::Symbol(Symbol::SEMICOLON),
    TokenType::Default(DefaultKeyword::WHERE),
    TokenType::Default(DefaultKeyword::GROUP),
    TokenType::Default(DefaultKeyword::HAVING),
    TokenType::Default(DefaultKeyword::ORDER),
    TokenType::Default(DefaultKeyword::UNION),
    TokenType::Default(DefaultKeyword::EXCEPT),
    TokenType::Default(DefaultKeyword::INTERSECT),
    TokenType::Default(DefaultKeyword::MINUS),
    TokenType::Default(DefaultKeyword::FOR),
];

/// Dialect clauses that may follow the last join condition
const DIALECT_CLAUSES: [TokenType; 10] = [
    TokenType::MySQL(MySQLKeyword::LIMIT),
    TokenType::MySQL(MySQLKeyword::OFFSET),
    TokenType::Oracle(OracleKeyword::CONNECT),
    TokenType::Oracle(OracleKeyword::START),
    TokenType::Oracle(OracleKeyword::FETCH),
    TokenType::SQLServer(SQLServerKeyword::OFFSET),
    TokenType::SQLServer(SQLServerKeyword::FETCH),
    TokenType::PostgreSQL(PostgreSQLKeyword::LIMIT),
    TokenType::PostgreSQL(PostgreSQLKeyword::OFFSET),
    TokenType::PostgreSQL(PostgreSQLKeyword::RETURNING),
];

/// Parser for SELECT statements of dialect `D`
pub struct SelectParser<'a, D> {
    lexer_engine: &'a mut LexerEngine,
    dialect: PhantomData<D>,
}

impl<'a, D: DialectSyntax> SelectParser<'a, D> {
    pub fn new(_sharding_rule: &'a ShardingRule, lexer_engine: &'a mut LexerEngine) -> Self {
        SelectParser {
            lexer_engine,
            dialect: PhantomData,
        }
    }
}

impl<D: DialectSyntax> SqlStatementParser for SelectParser<'_, D> {
    fn parse(&mut self) -> ParseResult<SqlStatement> {
        let engine = &mut *self.lexer_engine;
        let mut statement = SqlStatement::new(StatementType::Select);

        engine.accept(DefaultKeyword::SELECT.into())?;
        D::skip_select_modifiers(engine)?;
        skip_select_list(engine)?;

        if engine.skip_if_equal(&[DefaultKeyword::FROM.into()])? {
            parse_table_references::<D>(engine, &mut statement)?;
        }

        skip_select_rest(engine)?;
        Ok(statement)
    }
}

/// Skip the select list up to FROM; sub-queries are skipped whole
fn skip_select_list(engine: &mut LexerEngine) -> ParseResult<()> {
    loop {
        if engine.is_end()
            || engine.equal_any(&[DefaultKeyword::FROM.into(), Symbol::SEMICOLON.into()])
            || engine.equal_any(&SET_OPERATORS)
        {
            return Ok(());
        }
        if engine.equal_any(&[Symbol::LeftParen.into()]) {
            engine.skip_parentheses()?;
        } else {
            engine.next_token()?;
        }
    }
}

/// Parse `table_factor {, table_factor | join table_factor [ON ... | USING (...)]}`
fn parse_table_references<D: DialectSyntax>(
    engine: &mut LexerEngine,
    statement: &mut SqlStatement,
) -> ParseResult<()> {
    parse_table_factor::<D>(engine, statement)?;
    loop {
        if engine.skip_if_equal(&[Symbol::COMMA.into()])? {
            parse_table_factor::<D>(engine, statement)?;
        } else if skip_join_type(engine)? {
            parse_table_factor::<D>(engine, statement)?;
            skip_join_condition(engine)?;
        } else {
            return Ok(());
        }
    }
}

fn parse_table_factor<D: DialectSyntax>(
    engine: &mut LexerEngine,
    statement: &mut SqlStatement,
) -> ParseResult<()> {
    // Derived tables are opaque here
    if engine.equal_any(&[Symbol::LeftParen.into()]) {
        engine.skip_parentheses()?;
        parse_alias(engine)?;
        return Ok(());
    }
    if engine.skip_if_equal(&DUAL)? {
        return Ok(());
    }
    parse_aliased_table(engine, statement)?;
    D::skip_table_hints(engine)
}

/// Consume `[NATURAL] [LEFT | RIGHT | FULL] [INNER | OUTER | CROSS] JOIN`
fn skip_join_type(engine: &mut LexerEngine) -> ParseResult<bool> {
    if !engine.equal_any(&JOIN_MODIFIERS) && !engine.equal_any(&JOIN_KEYWORDS) {
        return Ok(false);
    }
    engine.skip_all(&JOIN_MODIFIERS)?;
    if !engine.skip_if_equal(&JOIN_KEYWORDS)? {
        return Err(engine.unexpected());
    }
    Ok(true)
}

fn skip_join_condition(engine: &mut LexerEngine) -> ParseResult<()> {
    if engine.skip_if_equal(&[DefaultKeyword::USING.into()])? {
        engine.skip_parentheses()?;
        return Ok(());
    }
    if !engine.skip_if_equal(&[DefaultKeyword::ON.into()])? {
        return Ok(());
    }
    // Dialect words after a qualifier are column names
    let mut qualified = false;
    loop {
        if engine.is_end()
            || engine.equal_any(&CONDITION_TERMINATORS)
            || engine.equal_any(&JOIN_MODIFIERS)
            || engine.equal_any(&JOIN_KEYWORDS)
            || (!qualified && engine.equal_any(&DIALECT_CLAUSES))
        {
            return Ok(());
        }
        qualified = engine.equal_any(&[Symbol::DOT.into()]);
        if engine.equal_any(&[Symbol::LeftParen.into()]) {
            engine.skip_parentheses()?;
        } else {
            engine.next_token()?;
        }
    }
}

/// Skip the trailing clauses; combined queries are not supported
fn skip_select_rest(engine: &mut LexerEngine) -> ParseResult<()> {
    loop {
        engine.unsupported_if_equal(&SET_OPERATORS)?;
        if engine.is_end() || engine.skip_if_equal(&[Symbol::SEMICOLON.into()])? {
            return Ok(());
        }
        if engine.equal_any(&[Symbol::LeftParen.into()]) {
            engine.skip_parentheses()?;
        } else {
            engine.next_token()?;
        }
    }
}

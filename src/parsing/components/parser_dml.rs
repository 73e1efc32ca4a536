// DML Statement Parser Implementation
//
// This module implements parsing for SQL DML (Data Manipulation Language) statements:
// INSERT, UPDATE, and DELETE

use std::marker::PhantomData;

use crate::parsing::error::ParseResult;
use crate::parsing::lexer::{DefaultKeyword, LexerEngine, Symbol, TokenType};
use crate::parsing::statement::{GeneratedKey, SqlStatement, StatementType};
use crate::rule::ShardingRule;
use super::dialect::DialectSyntax;
use super::parser_select::{JOIN_KEYWORDS, JOIN_MODIFIERS};
use super::parser_core::{
    parse_aliased_table, parse_column_name, parse_table, skip_to_statement_end, SqlStatementParser,
};

/// Multi-table forms that cannot be routed as a single-table DML
const MULTIPLE_TABLE_MARKERS: [TokenType; 2] = [
    TokenType::Symbol(Symbol::COMMA),
    TokenType::Default(DefaultKeyword::USING),
];

/// Fail when another table follows the target table
fn reject_multiple_tables(engine: &LexerEngine) -> ParseResult<()> {
    engine.unsupported_if_equal(&MULTIPLE_TABLE_MARKERS)?;
    engine.unsupported_if_equal(&JOIN_MODIFIERS)?;
    engine.unsupported_if_equal(&JOIN_KEYWORDS)
}

/// Parser for INSERT statements of dialect `D`
pub struct InsertParser<'a, D> {
    sharding_rule: &'a ShardingRule,
    lexer_engine: &'a mut LexerEngine,
    dialect: PhantomData<D>,
}

impl<'a, D: DialectSyntax> InsertParser<'a, D> {
    pub fn new(sharding_rule: &'a ShardingRule, lexer_engine: &'a mut LexerEngine) -> Self {
        InsertParser {
            sharding_rule,
            lexer_engine,
            dialect: PhantomData,
        }
    }
}

impl<D: DialectSyntax> SqlStatementParser for InsertParser<'_, D> {
    fn parse(&mut self) -> ParseResult<SqlStatement> {
        let sharding_rule = self.sharding_rule;
        let engine = &mut *self.lexer_engine;
        let mut statement = SqlStatement::new(StatementType::Insert);

        engine.accept(DefaultKeyword::INSERT.into())?;
        D::skip_insert_modifiers(engine)?;
        if D::INSERT_INTO_OPTIONAL {
            engine.skip_if_equal(&[DefaultKeyword::INTO.into()])?;
        } else {
            engine.accept(DefaultKeyword::INTO.into())?;
        }
        parse_table(engine, &mut statement)?;

        if engine.equal_any(&[Symbol::LeftParen.into()]) {
            parse_insert_columns(engine, &mut statement)?;
        } else if D::INSERT_SET_CLAUSE && engine.skip_if_equal(&[DefaultKeyword::SET.into()])? {
            parse_set_columns(engine, &mut statement)?;
        }

        statement.generated_key = generated_key(sharding_rule, &statement);
        skip_to_statement_end(engine)?;
        Ok(statement)
    }
}

/// Parse `(column, ...)`
fn parse_insert_columns(engine: &mut LexerEngine, statement: &mut SqlStatement) -> ParseResult<()> {
    engine.accept(Symbol::LeftParen.into())?;
    loop {
        statement.insert_columns.push(parse_column_name(engine)?);
        if !engine.skip_if_equal(&[Symbol::COMMA.into()])? {
            break;
        }
    }
    engine.accept(Symbol::RightParen.into())?;
    Ok(())
}

/// Parse `column = value, ...`, keeping the column names only
fn parse_set_columns(engine: &mut LexerEngine, statement: &mut SqlStatement) -> ParseResult<()> {
    loop {
        statement.insert_columns.push(parse_column_name(engine)?);
        engine.accept(Symbol::EQUALS.into())?;
        skip_assigned_value(engine)?;
        if !engine.skip_if_equal(&[Symbol::COMMA.into()])? {
            return Ok(());
        }
    }
}

fn skip_assigned_value(engine: &mut LexerEngine) -> ParseResult<()> {
    loop {
        if engine.is_end()
            || engine.equal_any(&[
                Symbol::COMMA.into(),
                Symbol::SEMICOLON.into(),
                DefaultKeyword::ON.into(),
            ])
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

/// The generated key of the insert target; a statement without a column list supplies every column
fn generated_key(sharding_rule: &ShardingRule, statement: &SqlStatement) -> Option<GeneratedKey> {
    let table = statement.tables.iter().next()?;
    let column = sharding_rule.generate_key_column(&table.name)?;
    let supplied = statement.insert_columns.is_empty()
        || statement.insert_columns.iter().any(|c| c.eq_ignore_ascii_case(column));
    Some(GeneratedKey {
        column: column.to_string(),
        supplied,
    })
}

/// Parser for UPDATE statements of dialect `D`
pub struct UpdateParser<'a, D> {
    lexer_engine: &'a mut LexerEngine,
    dialect: PhantomData<D>,
}

impl<'a, D: DialectSyntax> UpdateParser<'a, D> {
    pub fn new(_sharding_rule: &'a ShardingRule, lexer_engine: &'a mut LexerEngine) -> Self {
        UpdateParser {
            lexer_engine,
            dialect: PhantomData,
        }
    }
}

impl<D: DialectSyntax> SqlStatementParser for UpdateParser<'_, D> {
    fn parse(&mut self) -> ParseResult<SqlStatement> {
        let engine = &mut *self.lexer_engine;
        let mut statement = SqlStatement::new(StatementType::Update);

        engine.accept(DefaultKeyword::UPDATE.into())?;
        D::skip_update_modifiers(engine)?;
        parse_aliased_table(engine, &mut statement)?;
        reject_multiple_tables(engine)?;
        D::skip_table_hints(engine)?;
        engine.accept(DefaultKeyword::SET.into())?;

        skip_update_rest(engine)?;
        Ok(statement)
    }
}

/// Skip assignments and conditions; `UPDATE ... FROM other_table` is not supported
fn skip_update_rest(engine: &mut LexerEngine) -> ParseResult<()> {
    loop {
        engine.unsupported_if_equal(&[DefaultKeyword::FROM.into()])?;
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

/// Parser for DELETE statements of dialect `D`
pub struct DeleteParser<'a, D> {
    lexer_engine: &'a mut LexerEngine,
    dialect: PhantomData<D>,
}

impl<'a, D: DialectSyntax> DeleteParser<'a, D> {
    pub fn new(_sharding_rule: &'a ShardingRule, lexer_engine: &'a mut LexerEngine) -> Self {
        DeleteParser {
            lexer_engine,
            dialect: PhantomData,
        }
    }
}

impl<D: DialectSyntax> SqlStatementParser for DeleteParser<'_, D> {
    fn parse(&mut self) -> ParseResult<SqlStatement> {
        let engine = &mut *self.lexer_engine;
        let mut statement = SqlStatement::new(StatementType::Delete);

        engine.accept(DefaultKeyword::DELETE.into())?;
        D::skip_delete_prefix(engine)?;
        parse_aliased_table(engine, &mut statement)?;
        reject_multiple_tables(engine)?;

        skip_to_statement_end(engine)?;
        Ok(statement)
    }
}

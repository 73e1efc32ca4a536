// Core Parser Functionality
//
// The capability every statement parser exposes, plus the table-name helpers
// the statement families share.

use crate::parsing::error::ParseResult;
use crate::parsing::lexer::token::unquote_identifier;
use crate::parsing::lexer::{DefaultKeyword, LexerEngine, Literals, Symbol, Token, TokenType};
use crate::parsing::statement::{SqlStatement, SqlToken, Table, TableToken};

/// Parses the statement under a lexer cursor
pub trait SqlStatementParser {
    /// Parse the current statement, consuming it from the token stream
    fn parse(&mut self) -> ParseResult<SqlStatement>;
}

/// Whether a token can name a table, column or alias
///
/// Dialect keywords are not reserved in the shared scheme, so they still count.
pub fn is_name_token(token_type: TokenType) -> bool {
    token_type == TokenType::Literal(Literals::IDENTIFIER) || token_type.is_dialect_keyword()
}

fn expect_name(engine: &mut LexerEngine) -> ParseResult<Token> {
    if !is_name_token(engine.current_token().token_type) {
        return Err(engine.unexpected());
    }
    let token = engine.current_token().clone();
    engine.next_token()?;
    Ok(token)
}

/// Parse a possibly owner-qualified table name and record its table token
pub fn parse_table_name(engine: &mut LexerEngine, statement: &mut SqlStatement) -> ParseResult<String> {
    let mut token = expect_name(engine)?;
    while engine.skip_if_equal(&[Symbol::DOT.into()])? {
        token = expect_name(engine)?;
    }
    statement.sql_tokens.push(SqlToken::Table(TableToken {
        begin_position: token.begin_position,
        original_literals: token.literals.clone(),
    }));
    Ok(unquote_identifier(&token.literals).to_string())
}

/// Parse a column name, keeping only the last part of `table.column`
pub fn parse_column_name(engine: &mut LexerEngine) -> ParseResult<String> {
    let mut token = expect_name(engine)?;
    while engine.skip_if_equal(&[Symbol::DOT.into()])? {
        token = expect_name(engine)?;
    }
    Ok(unquote_identifier(&token.literals).to_string())
}

/// Parse an optional alias, with or without `AS`
pub fn parse_alias(engine: &mut LexerEngine) -> ParseResult<Option<String>> {
    if engine.skip_if_equal(&[DefaultKeyword::AS.into()])? {
        let token = expect_name(engine)?;
        return Ok(Some(unquote_identifier(&token.literals).to_string()));
    }
    if engine.equal_any(&[Literals::IDENTIFIER.into()]) {
        let token = expect_name(engine)?;
        return Ok(Some(unquote_identifier(&token.literals).to_string()));
    }
    Ok(None)
}

/// Parse a table name without alias and add it to the statement
pub fn parse_table(engine: &mut LexerEngine, statement: &mut SqlStatement) -> ParseResult<()> {
    let name = parse_table_name(engine, statement)?;
    statement.tables.add(Table::new(name, None));
    Ok(())
}

/// Parse a table name with an optional alias and add it to the statement
pub fn parse_aliased_table(engine: &mut LexerEngine, statement: &mut SqlStatement) -> ParseResult<()> {
    let name = parse_table_name(engine, statement)?;
    let alias = parse_alias(engine)?;
    statement.tables.add(Table::new(name, alias));
    Ok(())
}

/// Skip the remainder of the statement, including its terminating `;`
pub fn skip_to_statement_end(engine: &mut LexerEngine) -> ParseResult<()> {
    engine.skip_until(&[Symbol::SEMICOLON.into()])?;
    engine.skip_if_equal(&[Symbol::SEMICOLON.into()])?;
    Ok(())
}

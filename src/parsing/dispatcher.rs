// SQL Statement Parser Dispatcher
//
// Routes the leading keyword of a statement to the parser of its family. Routing
// depends on the dialect and the keyword only; the sharding rule and the cursor
// are handed to the selected factory untouched.

use log::debug;

use crate::common::DatabaseType;
use crate::parsing::components::{DefaultParserFactories, ParserFactories, ParserHandle};
use crate::parsing::error::{ParseError, ParseResult};
use crate::parsing::lexer::{DefaultKeyword, LexerEngine, TokenType};
use crate::rule::ShardingRule;

/// Create the parser for the statement starting at `token_type`
///
/// Uses the built-in dialect parsers. See [`dispatch`] for the routing rules.
pub fn new_instance<'a>(
    db_type: DatabaseType,
    token_type: TokenType,
    sharding_rule: &'a ShardingRule,
    lexer_engine: &'a mut LexerEngine,
) -> ParseResult<ParserHandle<'a>> {
    dispatch(&DefaultParserFactories, db_type, token_type, sharding_rule, lexer_engine)
}

/// Create the parser for the statement starting at `token_type` through `factories`
///
/// Only reserved statement keywords are routed. Any other classification fails with
/// [`ParseError::UnsupportedTokenClassification`] carrying `token_type`. A reserved
/// keyword that starts none of the eight families fails with
/// [`ParseError::UnsupportedStatementKeyword`] carrying the type of the token the
/// cursor is on, which is not necessarily `token_type`. Factory errors are
/// returned as they are.
pub fn dispatch<'a, F: ParserFactories + ?Sized>(
    factories: &F,
    db_type: DatabaseType,
    token_type: TokenType,
    sharding_rule: &'a ShardingRule,
    lexer_engine: &'a mut LexerEngine,
) -> ParseResult<ParserHandle<'a>> {
    let TokenType::Default(keyword) = token_type else {
        return Err(ParseError::UnsupportedTokenClassification(token_type));
    };

    debug!("Dispatching {} statement for {}", keyword, db_type);
    match keyword {
        DefaultKeyword::SELECT => factories.select(db_type, sharding_rule, lexer_engine),
        DefaultKeyword::INSERT => factories.insert(db_type, sharding_rule, lexer_engine),
        DefaultKeyword::UPDATE => factories.update(db_type, sharding_rule, lexer_engine),
        DefaultKeyword::DELETE => factories.delete(db_type, sharding_rule, lexer_engine),
        DefaultKeyword::CREATE => factories.create(db_type, sharding_rule, lexer_engine),
        DefaultKeyword::ALTER => factories.alter(db_type, sharding_rule, lexer_engine),
        DefaultKeyword::DROP => factories.drop(db_type, sharding_rule, lexer_engine),
        DefaultKeyword::TRUNCATE => factories.truncate(db_type, sharding_rule, lexer_engine),
        _ => Err(ParseError::UnsupportedStatementKeyword(
            lexer_engine.current_token().token_type,
        )),
    }
}

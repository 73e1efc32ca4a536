// SQL Lexer Implementation
//
// Breaks SQL text into classified tokens. Dialect differences are limited to the
// keyword dictionary and a handful of quoting and comment rules.

use crate::parsing::error::{ParseError, ParseResult};
use super::dictionary::Dictionary;
use super::token::{Assist, Literals, Symbol, Token, TokenType};

/// Dialect-specific lexical rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexerRules {
    /// `#` starts a line comment
    pub hash_comments: bool,
    /// Backticks quote identifiers
    pub backtick_quotes: bool,
    /// `[..]` quotes identifiers
    pub bracket_quotes: bool,
    /// `@name` and `@@name` are variables
    pub variables: bool,
}

/// SQL Lexer for breaking a query string into tokens
#[derive(Debug)]
pub struct Lexer {
    input: Vec<char>,
    offset: usize,
    dictionary: &'static Dictionary,
    rules: LexerRules,
}

impl Lexer {
    /// Create a new lexer over the given SQL text
    pub fn new(input: &str, dictionary: &'static Dictionary, rules: LexerRules) -> Self {
        Lexer {
            input: input.chars().collect(),
            offset: 0,
            dictionary,
            rules,
        }
    }

    /// Char offset of the next unread character
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.input.get(offset).copied()
    }

    fn current_char(&self, lookahead: usize) -> Option<char> {
        self.char_at(self.offset + lookahead)
    }

    fn literals(&self, begin: usize, end: usize) -> String {
        self.input[begin..end].iter().collect()
    }

    /// Skip whitespace and comments
    fn skip_ignored(&mut self) {
        loop {
            match (self.current_char(0), self.current_char(1)) {
                (Some(ch), _) if ch.is_whitespace() => self.offset += 1,
                (Some('-'), Some('-')) => self.skip_line_comment(),
                (Some('#'), _) if self.rules.hash_comments => self.skip_line_comment(),
                (Some('/'), Some('*')) => self.skip_block_comment(),
                _ => break,
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.current_char(0) {
            self.offset += 1;
            if ch == '\n' {
                break;
            }
        }
    }

    fn skip_block_comment(&mut self) {
        self.offset += 2;
        while let Some(ch) = self.current_char(0) {
            if ch == '*' && self.current_char(1) == Some('/') {
                self.offset += 2;
                return;
            }
            self.offset += 1;
        }
    }

    /// Get the next token from the input
    pub fn next_token(&mut self) -> ParseResult<Token> {
        self.skip_ignored();
        let begin = self.offset;

        let ch = match self.current_char(0) {
            Some(ch) => ch,
            None => return Ok(Token::new(TokenType::Assist(Assist::END), "", begin, begin)),
        };

        if ch == '@' && self.rules.variables {
            return Ok(self.scan_variable());
        }
        if is_identifier_begin(ch) {
            return Ok(self.scan_identifier());
        }
        if ch == '0' && matches!(self.current_char(1), Some('x') | Some('X')) {
            return Ok(self.scan_hex());
        }
        if ch.is_ascii_digit() || (ch == '.' && self.current_char(1).is_some_and(|c| c.is_ascii_digit())) {
            return Ok(self.scan_number());
        }
        match ch {
            '\'' => self.scan_chars(),
            '"' => self.scan_quoted_identifier('"'),
            '`' if self.rules.backtick_quotes => self.scan_quoted_identifier('`'),
            '[' if self.rules.bracket_quotes => self.scan_quoted_identifier(']'),
            _ => self.scan_symbol(),
        }
    }

    fn scan_while<F: Fn(char) -> bool>(&mut self, predicate: F) {
        while self.current_char(0).is_some_and(&predicate) {
            self.offset += 1;
        }
    }

    fn finish(&self, token_type: TokenType, begin: usize) -> Token {
        Token::new(token_type, self.literals(begin, self.offset), begin, self.offset)
    }

    fn scan_variable(&mut self) -> Token {
        let begin = self.offset;
        self.offset += 1;
        if self.current_char(0) == Some('@') {
            self.offset += 1;
        }
        self.scan_while(|c| is_identifier_char(c) || c == '.');
        self.finish(TokenType::Literal(Literals::VARIABLE), begin)
    }

    fn scan_identifier(&mut self) -> Token {
        let begin = self.offset;
        self.scan_while(is_identifier_char);
        let literals = self.literals(begin, self.offset);
        let token_type = self
            .dictionary
            .find_token_type(&literals)
            .unwrap_or(TokenType::Literal(Literals::IDENTIFIER));
        Token::new(token_type, literals, begin, self.offset)
    }

    fn scan_hex(&mut self) -> Token {
        let begin = self.offset;
        self.offset += 2;
        self.scan_while(|c| c.is_ascii_hexdigit());
        self.finish(TokenType::Literal(Literals::HEX), begin)
    }

    fn scan_number(&mut self) -> Token {
        let begin = self.offset;
        let mut is_float = false;

        self.scan_while(|c| c.is_ascii_digit());
        if self.current_char(0) == Some('.') {
            is_float = true;
            self.offset += 1;
            self.scan_while(|c| c.is_ascii_digit());
        }
        if matches!(self.current_char(0), Some('e') | Some('E')) {
            let sign = matches!(self.current_char(1), Some('+') | Some('-'));
            let digit_at = if sign { 2 } else { 1 };
            if self.current_char(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                is_float = true;
                self.offset += digit_at;
                self.scan_while(|c| c.is_ascii_digit());
            }
        }

        let literals = if is_float { Literals::FLOAT } else { Literals::INT };
        self.finish(TokenType::Literal(literals), begin)
    }

    /// Read a string literal; `''` inside the quotes is an escaped quote
    fn scan_chars(&mut self) -> ParseResult<Token> {
        let begin = self.offset;
        self.offset += 1;
        let mut value = String::new();

        loop {
            match self.current_char(0) {
                Some('\'') if self.current_char(1) == Some('\'') => {
                    value.push('\'');
                    self.offset += 2;
                }
                Some('\'') => {
                    self.offset += 1;
                    return Ok(Token::new(TokenType::Literal(Literals::CHARS), value, begin, self.offset));
                }
                Some(ch) => {
                    value.push(ch);
                    self.offset += 1;
                }
                None => {
                    return Err(ParseError::IllegalInput {
                        position: begin,
                        literals: self.literals(begin, self.offset),
                    })
                }
            }
        }
    }

    fn scan_quoted_identifier(&mut self, closing: char) -> ParseResult<Token> {
        let begin = self.offset;
        self.offset += 1;
        self.scan_while(|c| c != closing);
        if self.current_char(0).is_none() {
            return Err(ParseError::IllegalInput {
                position: begin,
                literals: self.literals(begin, self.offset),
            });
        }
        self.offset += 1;
        Ok(self.finish(TokenType::Literal(Literals::IDENTIFIER), begin))
    }

    fn scan_symbol(&mut self) -> ParseResult<Token> {
        let begin = self.offset;
        let two_chars = match (self.current_char(0), self.current_char(1)) {
            (Some('<'), Some('=')) => Some(Symbol::LessEqual),
            (Some('>'), Some('=')) => Some(Symbol::GreaterEqual),
            (Some('<'), Some('>')) | (Some('!'), Some('=')) => Some(Symbol::NotEqual),
            (Some('|'), Some('|')) => Some(Symbol::CONCAT),
            _ => None,
        };
        if let Some(symbol) = two_chars {
            self.offset += 2;
            return Ok(self.finish(TokenType::Symbol(symbol), begin));
        }

        let symbol = match self.current_char(0) {
            Some('(') => Symbol::LeftParen,
            Some(')') => Symbol::RightParen,
            Some(',') => Symbol::COMMA,
            Some(';') => Symbol::SEMICOLON,
            Some('.') => Symbol::DOT,
            Some('=') => Symbol::EQUALS,
            Some('<') => Symbol::LessThan,
            Some('>') => Symbol::GreaterThan,
            Some('+') => Symbol::PLUS,
            Some('-') => Symbol::MINUS,
            Some('*') => Symbol::MULTIPLY,
            Some('/') => Symbol::DIVIDE,
            Some('%') => Symbol::MODULO,
            Some('?') => Symbol::QUESTION,
            _ => {
                return Err(ParseError::IllegalInput {
                    position: begin,
                    literals: self.literals(begin, begin + 1),
                })
            }
        };
        self.offset += 1;
        Ok(self.finish(TokenType::Symbol(symbol), begin))
    }
}

/// Check if a character can start an identifier
fn is_identifier_begin(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_' || ch == '$'
}

fn is_identifier_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$' || ch == '#'
}

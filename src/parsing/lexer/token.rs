// SQL Token Definitions
//
// Token types are grouped by classification scheme: the reserved keywords every
// dialect shares, per-dialect keywords, literals, symbols and assist markers.

use std::fmt;

/// Declares a keyword enum together with its spelling table
macro_rules! keyword_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every keyword of this scheme
            pub const KEYWORDS: &'static [$name] = &[$($name::$variant),+];

            /// Upper-case spelling of the keyword
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

keyword_enum! {
    /// Reserved words shared by every dialect
    DefaultKeyword {
        // Statement keywords
        SELECT, INSERT, UPDATE, DELETE, CREATE, ALTER, DROP, TRUNCATE,
        MERGE, GRANT, REVOKE, COMMIT, ROLLBACK, SAVEPOINT,
        // Objects
        SCHEMA, DATABASE, TABLE, COLUMN, VIEW, INDEX, TRIGGER, PROCEDURE,
        FUNCTION, SEQUENCE, TABLESPACE,
        // Clauses
        DISTINCT, ALL, FROM, WHERE, INTO, VALUES, SET, AS, ON, USING,
        JOIN, INNER, LEFT, RIGHT, FULL, OUTER, CROSS, NATURAL,
        GROUP, BY, ORDER, HAVING, UNION, EXCEPT, INTERSECT, MINUS, ASC, DESC,
        WITH, FOR,
        // Predicates
        AND, OR, NOT, NULL, IS, IN, LIKE, BETWEEN, EXISTS,
        CASE, WHEN, THEN, ELSE, END, TRUE, FALSE,
        // Definitions
        IF, TEMPORARY, ONLY, DEFAULT, PRIMARY, KEY, UNIQUE, FOREIGN,
        REFERENCES, CONSTRAINT, CHECK, ADD, RENAME, TO,
    }
}

keyword_enum! {
    /// Keywords only MySQL (and H2 in MySQL mode) reserves
    MySQLKeyword {
        SHOW, DUAL, LIMIT, OFFSET, VALUE, IGNORE, REPLACE, DUPLICATE,
        LOW_PRIORITY, DELAYED, HIGH_PRIORITY, QUICK, STRAIGHT_JOIN,
        SQL_CALC_FOUND_ROWS, SQL_NO_CACHE, DISTINCTROW, FORCE, USE,
    }
}

keyword_enum! {
    /// Keywords only Oracle reserves
    OracleKeyword {
        DUAL, GLOBAL, ROWNUM, CONNECT, START, PRIOR, NOCYCLE, SIBLINGS,
        NOWAIT, PURGE, FETCH, ROWS,
    }
}

keyword_enum! {
    /// Keywords only SQL Server reserves
    SQLServerKeyword {
        TOP, PERCENT, TIES, OUTPUT, NOLOCK, APPLY, OFFSET, FETCH, NEXT, ROWS,
    }
}

keyword_enum! {
    /// Keywords only PostgreSQL reserves
    PostgreSQLKeyword {
        LIMIT, OFFSET, RETURNING, GLOBAL, LOCAL, TEMP, UNLOGGED, ILIKE,
        CASCADE, RESTRICT,
    }
}

/// Literal token kinds
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Literals {
    INT,
    FLOAT,
    HEX,
    CHARS,
    IDENTIFIER,
    VARIABLE,
}

/// Operators and punctuation
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    LeftParen,      // (
    RightParen,     // )
    COMMA,          // ,
    SEMICOLON,      // ;
    DOT,            // .
    EQUALS,         // =
    NotEqual,       // <> or !=
    LessThan,       // <
    LessEqual,      // <=
    GreaterThan,    // >
    GreaterEqual,   // >=
    PLUS,           // +
    MINUS,          // -
    MULTIPLY,       // *
    DIVIDE,         // /
    MODULO,         // %
    QUESTION,       // ?
    CONCAT,         // ||
}

impl Symbol {
    /// Source spelling of the symbol
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::LeftParen => "(",
            Symbol::RightParen => ")",
            Symbol::COMMA => ",",
            Symbol::SEMICOLON => ";",
            Symbol::DOT => ".",
            Symbol::EQUALS => "=",
            Symbol::NotEqual => "<>",
            Symbol::LessThan => "<",
            Symbol::LessEqual => "<=",
            Symbol::GreaterThan => ">",
            Symbol::GreaterEqual => ">=",
            Symbol::PLUS => "+",
            Symbol::MINUS => "-",
            Symbol::MULTIPLY => "*",
            Symbol::DIVIDE => "/",
            Symbol::MODULO => "%",
            Symbol::QUESTION => "?",
            Symbol::CONCAT => "||",
        }
    }
}

/// Markers produced by the lexer that carry no SQL text
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Assist {
    END,
}

/// Classification of a token, tagged by the scheme it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    Default(DefaultKeyword),
    MySQL(MySQLKeyword),
    Oracle(OracleKeyword),
    SQLServer(SQLServerKeyword),
    PostgreSQL(PostgreSQLKeyword),
    Literal(Literals),
    Symbol(Symbol),
    Assist(Assist),
}

impl TokenType {
    /// Whether the token is a keyword of any scheme
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenType::Default(_)
                | TokenType::MySQL(_)
                | TokenType::Oracle(_)
                | TokenType::SQLServer(_)
                | TokenType::PostgreSQL(_)
        )
    }

    /// Whether the token is a dialect keyword, which may still name a table
    pub fn is_dialect_keyword(&self) -> bool {
        self.is_keyword() && !matches!(self, TokenType::Default(_))
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Default(k) => write!(f, "{}", k),
            TokenType::MySQL(k) => write!(f, "{}", k),
            TokenType::Oracle(k) => write!(f, "{}", k),
            TokenType::SQLServer(k) => write!(f, "{}", k),
            TokenType::PostgreSQL(k) => write!(f, "{}", k),
            TokenType::Literal(l) => write!(f, "{:?}", l),
            TokenType::Symbol(s) => write!(f, "'{}'", s.as_str()),
            TokenType::Assist(a) => write!(f, "{:?}", a),
        }
    }
}

impl From<DefaultKeyword> for TokenType {
    fn from(keyword: DefaultKeyword) -> Self {
        TokenType::Default(keyword)
    }
}

impl From<MySQLKeyword> for TokenType {
    fn from(keyword: MySQLKeyword) -> Self {
        TokenType::MySQL(keyword)
    }
}

impl From<OracleKeyword> for TokenType {
    fn from(keyword: OracleKeyword) -> Self {
        TokenType::Oracle(keyword)
    }
}

impl From<SQLServerKeyword> for TokenType {
    fn from(keyword: SQLServerKeyword) -> Self {
        TokenType::SQLServer(keyword)
    }
}

impl From<PostgreSQLKeyword> for TokenType {
    fn from(keyword: PostgreSQLKeyword) -> Self {
        TokenType::PostgreSQL(keyword)
    }
}

impl From<Literals> for TokenType {
    fn from(literals: Literals) -> Self {
        TokenType::Literal(literals)
    }
}

impl From<Symbol> for TokenType {
    fn from(symbol: Symbol) -> Self {
        TokenType::Symbol(symbol)
    }
}

impl From<Assist> for TokenType {
    fn from(assist: Assist) -> Self {
        TokenType::Assist(assist)
    }
}

/// A Token represents a lexical unit in the SQL text
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub token_type: TokenType,
    /// Source text of the token; quoted identifiers keep their quotes
    pub literals: String,
    /// Char offset of the first character
    pub begin_position: usize,
    /// Char offset just past the last character
    pub end_position: usize,
}

impl Token {
    pub fn new(token_type: TokenType, literals: impl Into<String>, begin_position: usize, end_position: usize) -> Self {
        Token {
            token_type,
            literals: literals.into(),
            begin_position,
            end_position,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})@{}", self.token_type, self.literals, self.begin_position)
    }
}

/// Strip identifier quotes (`"`, backtick, `[]`) from a literal
pub fn unquote_identifier(literals: &str) -> &str {
    let mut chars = literals.chars();
    match (chars.next(), chars.next_back()) {
        (Some('`'), Some('`')) | (Some('"'), Some('"')) | (Some('['), Some(']')) => {
            &literals[1..literals.len() - 1]
        }
        _ => literals,
    }
}

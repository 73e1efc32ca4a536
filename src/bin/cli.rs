use std::path::PathBuf;
use anyhow::{Result, Context};
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use rustyline::error::ReadlineError;
use rustyline::Editor;
use rustyline::history::DefaultHistory;

use shardsql::{DatabaseType, ShardingRule, SqlParsingEngine, SqlStatement, StatementType};

const HISTORY_FILE: &str = ".shardsql_history";

#[derive(Parser)]
#[command(author, version, about = "ShardSQL CLI - Parse SQL the way the sharding middleware sees it")]
struct Cli {
    /// SQL dialect (mysql, h2, oracle, sqlserver, postgresql)
    #[arg(short, long, default_value = "mysql")]
    dialect: DatabaseType,

    /// Sharding rule file (JSON)
    #[arg(short, long)]
    rule: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive shell
    Shell,

    /// Parse a single SQL statement
    Parse {
        /// SQL statement to parse
        sql: String,
    },

    /// List the statement keywords the parser routes
    Keywords,
}

/// Parsing session: dialect plus the loaded sharding rule
struct Session {
    db_type: DatabaseType,
    sharding_rule: ShardingRule,
}

impl Session {
    fn new(db_type: DatabaseType, rule_path: Option<&PathBuf>) -> Result<Self> {
        let sharding_rule = match rule_path {
            Some(path) => {
                let rule = ShardingRule::from_json_file(path)
                    .with_context(|| format!("Failed to load sharding rule from {}", path.display()))?;
                info!(
                    "Loaded sharding rule from {} with {} table rules",
                    path.display(),
                    rule.table_rules.len()
                );
                rule
            }
            None => ShardingRule::default(),
        };

        Ok(Session {
            db_type,
            sharding_rule,
        })
    }

    fn parse(&self, sql: &str) -> Result<SqlStatement> {
        SqlParsingEngine::new(self.db_type, sql, &self.sharding_rule)
            .parse()
            .with_context(|| format!("Failed to parse {} statement", self.db_type))
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn run_shell(session: &mut Session) -> Result<()> {
    println!(
        "Welcome to ShardSQL CLI ({}). Type 'help' for assistance or 'exit' to quit.",
        session.db_type
    );

    let mut rl = Editor::<(), DefaultHistory>::new()?;
    if let Err(err) = rl.load_history(HISTORY_FILE) {
        if !err.to_string().contains("No such file or directory") {
            println!("Error loading history: {}", err);
        }
    }

    loop {
        let readline = rl.readline("shardsql> ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);

                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let lower = line.to_lowercase();
                match lower.as_str() {
                    "exit" | "quit" => {
                        println!("Goodbye!");
                        break;
                    }
                    "help" => {
                        print_help();
                    }
                    "keywords" => {
                        print_keywords(session.db_type);
                    }
                    _ if lower.starts_with("dialect ") => {
                        match line["dialect ".len()..].trim().parse::<DatabaseType>() {
                            Ok(db_type) => {
                                session.db_type = db_type;
                                println!("Dialect set to {}", db_type);
                            }
                            Err(err) => println!("Error: {}", err),
                        }
                    }
                    _ => {
                        // Assume it's a SQL statement
                        match session.parse(line) {
                            Ok(statement) => display_statement(&statement, &session.sharding_rule),
                            Err(err) => println!("Error: {:#}", err),
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {}", err);
                break;
            }
        }
    }

    if let Err(err) = rl.save_history(HISTORY_FILE) {
        println!("Error saving history: {}", err);
    }
    Ok(())
}

fn print_help() {
    println!("Available commands:");
    println!("  SELECT ... FROM <table>       - Parse a query");
    println!("  INSERT INTO <table> ...       - Parse an insert");
    println!("  UPDATE <table> SET ...        - Parse an update");
    println!("  DELETE FROM <table>           - Parse a delete");
    println!("  CREATE | ALTER | DROP | TRUNCATE TABLE <table> ...");
    println!();
    println!("Other commands:");
    println!("  dialect <name>                - Switch the SQL dialect");
    println!("  keywords                      - List the routed statement keywords");
    println!("  help                          - Display this help message");
    println!("  exit                          - Exit the CLI");
}

fn print_keywords(db_type: DatabaseType) {
    println!("Statement keywords for {}:", db_type);
    for statement_type in StatementType::ALL {
        println!("  {:<10} {}", statement_type.keyword(), statement_type.sql_type());
    }
}

fn display_statement(statement: &SqlStatement, sharding_rule: &ShardingRule) {
    println!("Statement: {}", statement);

    let sharded = statement.sharded_tables(sharding_rule);
    println!("Tables ({}):", statement.tables.len());
    for table in statement.tables.iter() {
        let marker = if sharded.contains(&table.name.as_str()) { " [sharded]" } else { "" };
        if table.aliases.is_empty() {
            println!("  {}{}", table.name, marker);
        } else {
            println!("  {} AS {}{}", table.name, table.aliases.join(", "), marker);
        }
    }

    if let Some(key) = &statement.generated_key {
        let source = if key.supplied { "supplied" } else { "generated" };
        println!("Generated key: {} ({})", key.column, source);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut session = Session::new(cli.dialect, cli.rule.as_ref())
        .context("Failed to initialize session")?;

    match &cli.command {
        Some(Commands::Shell) => {
            run_shell(&mut session)?;
        }
        Some(Commands::Parse { sql }) => {
            let statement = session.parse(sql)?;
            display_statement(&statement, &session.sharding_rule);
        }
        Some(Commands::Keywords) => {
            print_keywords(session.db_type);
        }
        None => {
            // Default to shell if no command is specified
            run_shell(&mut session)?;
        }
    }

    Ok(())
}

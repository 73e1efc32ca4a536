use anyhow::Result;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::NamedTempFile;

#[path = "../common/mod.rs"]
mod common;

const BIN: &str = env!("CARGO_BIN_EXE_shardsql");

/// Test that the CLI parses a statement and marks sharded tables
#[test]
fn test_cli_parse_with_rule() -> Result<()> {
    let rule_file = common::write_rule_file(common::ORDER_RULE_JSON)?;

    let output = Command::new(BIN)
        .args([
            "--rule",
            &rule_file.path().to_string_lossy(),
            "parse",
            "INSERT INTO t_order (user_id, status) VALUES (10, 'INIT')",
        ])
        .output()?;

    assert!(output.status.success(), "CLI parse command failed");

    let output_str = String::from_utf8(output.stdout)?;
    assert!(output_str.contains("Statement: INSERT statement (DML)"), "Statement summary not found");
    assert!(output_str.contains("t_order [sharded]"), "Sharded table marker not found");
    assert!(output_str.contains("Generated key: order_id (generated)"), "Generated key not found");

    Ok(())
}

/// Test that dialect-specific syntax is accepted with --dialect
#[test]
fn test_cli_parse_dialect() -> Result<()> {
    let output = Command::new(BIN)
        .args(["--dialect", "sqlserver", "parse", "SELECT TOP 10 * FROM [t_user] u WITH (NOLOCK)"])
        .output()?;

    assert!(output.status.success(), "CLI parse command failed");

    let output_str = String::from_utf8(output.stdout)?;
    assert!(output_str.contains("Statement: SELECT statement (DQL)"));
    assert!(output_str.contains("t_user AS u"));
    assert!(!output_str.contains("[sharded]"), "No rule was loaded");

    Ok(())
}

/// Test that parse failures exit non-zero with the error on stderr
#[test]
fn test_cli_parse_error() -> Result<()> {
    let output = Command::new(BIN)
        .args(["--dialect", "oracle", "parse", "MERGE INTO t_order USING t_src ON (1 = 1)"])
        .output()?;

    assert!(!output.status.success(), "Unsupported statement should fail");

    let output_str = String::from_utf8(output.stderr)?;
    assert!(output_str.contains("Error"), "Error message not found");
    assert!(output_str.contains("Unsupported statement keyword"), "Cause not found");

    Ok(())
}

/// Test that an invalid rule file is reported
#[test]
fn test_cli_invalid_rule_file() -> Result<()> {
    let rule_file = common::write_rule_file(r#"{"table_rules": [{"logic_table": "t_order"}]}"#)?;

    let output = Command::new(BIN)
        .args(["--rule", &rule_file.path().to_string_lossy(), "keywords"])
        .output()?;

    assert!(!output.status.success(), "Invalid rule should fail");
    let output_str = String::from_utf8(output.stderr)?;
    assert!(output_str.contains("Failed to load sharding rule"));

    Ok(())
}

/// Test the keywords command
#[test]
fn test_cli_keywords() -> Result<()> {
    let output = Command::new(BIN).args(["--dialect", "postgres", "keywords"]).output()?;

    assert!(output.status.success(), "CLI keywords command failed");

    let output_str = String::from_utf8(output.stdout)?;
    assert!(output_str.contains("Statement keywords for PostgreSQL:"));
    for keyword in ["SELECT", "INSERT", "UPDATE", "DELETE", "CREATE", "ALTER", "DROP", "TRUNCATE"] {
        assert!(output_str.contains(keyword), "Keyword {} not listed", keyword);
    }

    Ok(())
}

/// Test the CLI shell functionality with input redirection
#[test]
fn test_cli_shell_interaction() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;

    // Create a temporary file with shell commands
    let mut input_file = NamedTempFile::new()?;
    writeln!(input_file, "SELECT * FROM t_order WHERE order_id = 1;")?;
    writeln!(input_file, "dialect oracle")?;
    writeln!(input_file, "TRUNCATE t_order")?;
    writeln!(input_file, "help")?;
    writeln!(input_file, "exit")?;
    input_file.flush()?;

    // Run the CLI in shell mode with input redirection
    let output = Command::new(BIN)
        .current_dir(temp_dir.path())
        .stdin(Stdio::from(input_file.reopen()?))
        .output()?;

    assert!(output.status.success(), "CLI shell interaction failed");

    let output_str = String::from_utf8(output.stdout)?;
    assert!(output_str.contains("Welcome to ShardSQL CLI"), "Welcome message not found");
    assert!(output_str.contains("Statement: SELECT statement (DQL)"), "Parse result not found");
    assert!(output_str.contains("Dialect set to Oracle"), "Dialect switch not found");
    assert!(output_str.contains("Error:"), "Oracle TRUNCATE without TABLE should fail");
    assert!(output_str.contains("Available commands:"), "Help message not found");
    assert!(output_str.contains("Goodbye!"), "Exit message not found");

    Ok(())
}

/// Test CLI help output
#[test]
fn test_cli_help_output() -> Result<()> {
    let output = Command::new(BIN).args(["--help"]).output()?;

    assert!(output.status.success(), "CLI help command failed");

    let output_str = String::from_utf8(output.stdout)?;
    assert!(output_str.contains("Usage:"), "Help usage section not found");
    assert!(output_str.contains("Options:"), "Help options section not found");
    assert!(output_str.contains("Commands:"), "Help commands section not found");
    assert!(output_str.contains("--dialect"), "Dialect option not found");

    Ok(())
}

use assert_cmd::prelude::*;
use predicates::str::contains;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

const BIN: &str = "aco_maze";

#[test]
fn missing_maze_file_fails_naming_the_path() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args(["--maze", "no/such/maze.txt", "--suppress-events"]);

    cmd.assert().failure().stderr(contains("no/such/maze.txt"));

    Ok(())
}

#[test]
fn malformed_layout_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut f = NamedTempFile::new()?;
    writeln!(f, "3 2\n1 1 1\n1 1")?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args(["--maze", f.path().to_str().unwrap(), "--suppress-events"]);

    cmd.assert().failure().stderr(contains("Parse"));

    Ok(())
}

#[test]
fn blocked_goal_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut f = NamedTempFile::new()?;
    writeln!(f, "2 2\n1 1\n1 0")?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args(["--maze", f.path().to_str().unwrap(), "--suppress-events"]);

    cmd.assert().failure().stderr(contains("InvalidParameter"));

    Ok(())
}

#[test]
fn out_of_range_rho_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut f = NamedTempFile::new()?;
    writeln!(f, "1 1\n1")?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args(["--maze", f.path().to_str().unwrap(), "--rho", "1.5"]);

    cmd.assert().failure().stderr(contains("rho must be in (0, 1]"));

    Ok(())
}

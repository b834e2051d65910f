use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

const SAMPLE: &str = "# sample\nname=\"pothole\"\nlibs=[\n  \"a\",\n  \"b \\\"q\\\"\"\n]\nbroken line\n";

fn sample_file(contents: &str) -> Result<NamedTempFile, Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", contents)?;
    Ok(tmp)
}

#[test]
fn help_works() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("potconf"))
        .arg("--help")
        .assert()
        .success();
    Ok(())
}

#[test]
fn prints_json_by_default() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = sample_file(SAMPLE)?;
    let output = Command::new(assert_cmd::cargo::cargo_bin!("potconf"))
        .arg(tmp.path())
        .output()?;
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout)?;
    let v: serde_json::Value = serde_json::from_str(&out)?;
    assert_eq!(v, serde_json::json!({"name": "pothole", "libs": ["a", "b \"q\""]}));
    Ok(())
}

#[test]
fn reads_stdin_and_prints_debug() -> Result<(), Box<dyn std::error::Error>> {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("potconf"))
        .args(["--format", "debug"])
        .write_stdin("k=v\nl=[\"x\"]\n")
        .assert()
        .success()
        .stdout("{\"k\": \"v\", \"l\": [\"x\"]}\n");
    Ok(())
}

#[test]
fn conf_output_is_canonical() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = sample_file(SAMPLE)?;
    Command::new(assert_cmd::cargo::cargo_bin!("potconf"))
        .args(["--format", "conf"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout("name=\"pothole\"\nlibs=[\"a\", \"b \\\"q\\\"\"]\n");
    Ok(())
}

#[test]
fn unterminated_array_fails_with_line() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = sample_file("a=1\nlist=[\"x\",\n")?;
    Command::new(assert_cmd::cargo::cargo_bin!("potconf"))
        .arg(tmp.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unterminated array opened at line 2"));
    Ok(())
}

#[test]
fn allow_partial_prints_what_was_read() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = sample_file("a=1\nlist=[\"x\",\n")?;
    Command::new(assert_cmd::cargo::cargo_bin!("potconf"))
        .arg("--allow-partial")
        .arg(tmp.path())
        .assert()
        .failure()
        .stdout("{\"a\":\"1\"}\n");
    Ok(())
}

#[test]
fn stats_go_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = sample_file(SAMPLE)?;
    Command::new(assert_cmd::cargo::cargo_bin!("potconf"))
        .arg("--stats")
        .arg(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("malformed 1"));
    Ok(())
}

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn yamlbuddy() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("yamlbuddy"))
}

fn yaml_file(contents: &str) -> Result<NamedTempFile, Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", contents)?;
    Ok(tmp)
}

#[test]
fn help_works() -> Result<(), Box<dyn std::error::Error>> {
    yamlbuddy().arg("--help").assert().success();
    Ok(())
}

#[test]
fn json_from_positional_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = yaml_file("a: 1\nb: [true, null, x]\n")?;
    let output = yamlbuddy().arg("--json").arg(tmp.path()).output()?;
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout)?;
    assert!(out.ends_with("}\n"));
    let v: serde_json::Value = serde_json::from_str(&out)?;
    assert_eq!(v, serde_json::json!({"a": 1, "b": [true, null, "x"]}));
    Ok(())
}

#[test]
fn json_output_is_two_space_indented() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = yaml_file("- []\n- - k: v\n")?;
    yamlbuddy()
        .arg("--json")
        .arg("--in")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout("[\n  [],\n  [\n    {\n      \"k\": \"v\"\n    }\n  ]\n]\n");
    Ok(())
}

#[test]
fn in_flag_wins_over_positional() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = yaml_file("x: 1\n")?;
    yamlbuddy()
        .arg("--json")
        .arg("--in")
        .arg(tmp.path())
        .arg("does-not-exist.yaml")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"x\": 1"));
    Ok(())
}

#[test]
fn reads_stdin_by_default() -> Result<(), Box<dyn std::error::Error>> {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("yamlbuddy"))
        .arg("--json")
        .write_stdin("name: demo\n")
        .assert()
        .success()
        .stdout("{\n  \"name\": \"demo\"\n}\n");
    Ok(())
}

#[test]
fn empty_input_succeeds_without_output() -> Result<(), Box<dyn std::error::Error>> {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("yamlbuddy"))
        .arg("--json")
        .write_stdin("")
        .assert()
        .success()
        .stdout("");
    Ok(())
}

#[test]
fn non_string_key_fails() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = yaml_file("true: yes\n")?;
    yamlbuddy()
        .arg("--json")
        .arg(tmp.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("cannot convert key true to string"));
    Ok(())
}

#[test]
fn validation_without_json_prints_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = yaml_file("1: one\n")?;
    yamlbuddy().arg(tmp.path()).assert().success().stdout("");
    Ok(())
}

#[test]
fn check_reports_syntax_ok() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = yaml_file("a: b\n")?;
    yamlbuddy()
        .arg("--check")
        .arg(tmp.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("syntax ok"));
    Ok(())
}

#[test]
fn check_fails_on_bad_syntax() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = yaml_file("a: [1, 2\n")?;
    yamlbuddy()
        .arg("--check")
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error parsing"));
    Ok(())
}

#[test]
fn missing_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    yamlbuddy()
        .arg("--in")
        .arg("definitely/not/here.yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not open input file"));
    Ok(())
}

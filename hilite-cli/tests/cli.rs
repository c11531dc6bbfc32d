use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn highlights_stdin_as_html() {
    let mut cmd = cargo_bin_cmd!("hilite");
    cmd.arg("--lang").arg("javascript").write_stdin("const x = 1;\n");

    let output_pred = predicate::str::contains("<span class=\"token keyword\">const</span>")
        .and(predicate::str::contains("<span class=\"token number\">1</span>"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn unknown_language_is_escaped() {
    let mut cmd = cargo_bin_cmd!("hilite");
    cmd.arg("-l").arg("cobol").write_stdin("a < b");

    cmd.assert()
        .success()
        .stdout(predicate::eq("a &lt; b\n"));
}

#[test]
fn block_format_wraps_output() {
    let mut cmd = cargo_bin_cmd!("hilite");
    cmd.args(["-l", "json", "--format", "block"])
        .write_stdin("true");

    cmd.assert().success().stdout(predicate::eq(
        "<pre class=\"language-json\"><code class=\"language-json\"><span class=\"token boolean\">true</span></code></pre>\n",
    ));
}

#[test]
fn tokens_format_dumps_json() {
    let mut cmd = cargo_bin_cmd!("hilite");
    cmd.args(["-l", "yml", "-f", "tokens"]).write_stdin("key: 1");

    let output_pred = predicate::str::contains("\"language\": \"yaml\"")
        .and(predicate::str::contains("\"kind\": \"property\""))
        .and(predicate::str::contains("\"text\": \"key\""));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn class_prefix_flag_overrides_default() {
    let mut cmd = cargo_bin_cmd!("hilite");
    cmd.args(["-l", "json", "--class-prefix", "hl"])
        .write_stdin("null");

    cmd.assert()
        .success()
        .stdout(predicate::eq("<span class=\"hl boolean\">null</span>\n"));
}

#[test]
fn language_is_inferred_from_extension() {
    let mut file = tempfile::Builder::new()
        .suffix(".py")
        .tempfile()
        .expect("temp file");
    file.write_all(b"def f(): pass\n").expect("write source");

    let mut cmd = cargo_bin_cmd!("hilite");
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<span class=\"token keyword\">def</span>"));
}

#[test]
fn missing_file_fails() {
    let mut cmd = cargo_bin_cmd!("hilite");
    cmd.arg("/definitely/not/here.js");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error reading"));
}

#[test]
fn lists_languages_with_aliases() {
    let mut cmd = cargo_bin_cmd!("hilite");
    cmd.arg("--list-languages");

    let output_pred = predicate::str::contains("Available languages:")
        .and(predicate::str::contains("  yaml"))
        .and(predicate::str::contains("aliases: yml"))
        .and(predicate::str::contains("JavaScript"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn config_file_adds_custom_grammar() {
    let mut config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    config
        .write_all(
            br#"
[render]
class_prefix = "c"

[languages.custom.ini]
description = "INI files"
rules = [{ pattern = ';.*', kind = "comment" }]
"#,
        )
        .expect("write config");

    let mut cmd = cargo_bin_cmd!("hilite");
    cmd.arg("--config")
        .arg(config.path())
        .args(["-l", "ini"])
        .write_stdin("x ; note");

    cmd.assert()
        .success()
        .stdout(predicate::eq("x <span class=\"c comment\">; note</span>\n"));
}

#[test]
fn invalid_config_pattern_fails() {
    let mut config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    config
        .write_all(b"[languages.custom.bad]\nrules = [{ pattern = '(', kind = \"string\" }]\n")
        .expect("write config");

    let mut cmd = cargo_bin_cmd!("hilite");
    cmd.arg("--config").arg(config.path()).arg("--list-languages");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

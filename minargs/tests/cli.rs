use std::io::Write;
use std::process::{Command, Output, Stdio};

use googletest::prelude::*;
use serde_json::{Value, json};

fn minargs() -> Command {
    Command::new(env!("CARGO_BIN_EXE_minargs"))
}

fn with_stdin(mut cmd: Command, input: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn minargs");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");

    child.wait_with_output().expect("failed to wait for minargs")
}

fn stdout_json(out: &Output) -> Value {
    assert!(
        out.status.success(),
        "minargs failed:\nstatus: {}\nstderr:\n{}",
        out.status,
        String::from_utf8_lossy(&out.stderr),
    );
    serde_json::from_slice(&out.stdout).expect("stdout is not JSON")
}

#[test]
fn it_should_parse_args_flag() {
    let out = minargs()
        .arg(r#"--args=--foo=bar -ab "c d" -- rest"#)
        .output()
        .expect("failed to run minargs");

    let json = stdout_json(&out);
    assert_that!(json["args"], eq(&json!({ "foo": ["bar"], "a": [""], "b": [""] })));
    assert_that!(json["positionals"], eq(&json!(["c d"])));
    assert_that!(json["remainder"], eq(&json!(["rest"])));
}

#[test]
fn it_should_parse_stdin() {
    let mut cmd = minargs();
    cmd.args(["--positionalValues", "-a", "f:foo"]);

    let json = stdout_json(&with_stdin(cmd, "-f bar baz\n"));
    assert_that!(json["args"], eq(&json!({ "foo": ["bar"] })));
    assert_that!(json["positionals"], eq(&json!(["baz"])));
}

#[test]
fn it_should_honor_multiple_and_known() {
    let out = minargs()
        .args(["--args", "--m=1 --m=2 --o=1 --o=2", "-m", "m", "-k", "k"])
        .output()
        .expect("failed to run minargs");

    let json = stdout_json(&out);
    assert_that!(json["values"], eq(&json!({ "k": "", "m": ["1", "2"], "o": "2" })));
    assert_that!(json["present"]["k"], eq(&json!(false)));
}

#[test]
fn it_should_fail_on_unknown_option_in_strict_mode() {
    let out = minargs()
        .args(["--args=--foo", "--known", "bar", "--strict"])
        .output()
        .expect("failed to run minargs");

    assert_that!(out.status.code(), eq(Some(1)));
    assert_that!(out.stdout.is_empty(), eq(true));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_that!(stderr.contains("unknown option `foo`"), eq(true));
}

#[test]
fn it_should_parse_json_input() {
    let mut cmd = minargs();
    cmd.arg("--json");

    let json = stdout_json(&with_stdin(cmd, r#"["--foo", null, 1]"#));
    assert_that!(json["args"], eq(&json!({ "foo": [""] })));
    assert_that!(json["positionals"], eq(&json!(["null", "1"])));
}

#[test]
fn it_should_degrade_on_json_non_list() {
    let mut cmd = minargs();
    cmd.arg("--json");

    let json = stdout_json(&with_stdin(cmd, r#"{"foo": 1}"#));
    assert_that!(json["args"], eq(&json!({})));
    assert_that!(json["argv"], eq(&json!([])));

    let mut cmd = minargs();
    cmd.args(["--json", "--strict"]);

    let out = with_stdin(cmd, "null");
    assert_that!(out.status.code(), eq(Some(1)));
}

#[test]
fn it_should_print_usage() {
    let out = minargs()
        .arg("--help")
        .output()
        .expect("failed to run minargs --help");

    assert_that!(out.status.success(), eq(true));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_that!(stdout.contains("Options:"), eq(true));
    assert_that!(stdout.contains("-p, --positionalValues"), eq(true));
}

#[test]
fn it_should_reject_malformed_alias() {
    let out = minargs()
        .args(["--args=-f", "--alias", "f"])
        .output()
        .expect("failed to run minargs");

    assert_that!(out.status.code(), eq(Some(1)));
}

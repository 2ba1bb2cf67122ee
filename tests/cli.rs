// End-to-end tests for the offline CLI paths: flag handling, exit codes
// and input validation. Anything touching the service itself is covered
// by the unit tests on the response interpreter instead.

use assert_cmd::Command;
use predicates::prelude::*;

fn lovli() -> Command {
    Command::cargo_bin("lovli").unwrap()
}

#[test]
fn help_prints_usage_and_exits_zero() {
    lovli()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_prints_version_and_exits_zero() {
    lovli()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_argument_is_a_usage_error() {
    lovli()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    lovli().arg("-x").assert().code(2);
}

#[test]
fn whitespace_only_url_is_rejected_before_any_network_call() {
    // Endpoint points at a closed port: if the binary tried to connect,
    // the error line would say "transport error", not "invalid URL".
    lovli()
        .env("LOVLI_ENDPOINT", "http://127.0.0.1:1")
        .arg("   ")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("invalid URL\n");
}

#[test]
fn transport_failure_exits_one_with_a_transport_error() {
    lovli()
        .env("LOVLI_ENDPOINT", "http://127.0.0.1:1")
        .arg("https://long.url.example.com")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("transport error ("));
}

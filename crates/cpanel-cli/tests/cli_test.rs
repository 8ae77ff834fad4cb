//! Command-line behaviour of the certbot-dns-cpanel binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("certbot-dns-cpanel").unwrap();
    cmd.env_remove("CERTBOT_DOMAIN")
        .env_remove("CERTBOT_VALIDATION")
        .env_remove("CPANEL_CREDENTIALS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("perform"))
        .stdout(predicate::str::contains("cleanup"))
        .stdout(predicate::str::contains("records"));
}

#[test]
fn test_perform_requires_domain() {
    cmd()
        .args(["perform", "--validation", "token"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--domain"));
}

#[test]
fn test_missing_credentials_prints_instructions() {
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .arg("--credentials")
        .arg(dir.path().join("config"))
        .args(["perform", "--domain", "example.com", "--validation", "token"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"))
        .stderr(predicate::str::contains("~/.cpanel/config"));
}

#[test]
fn test_malformed_credentials_from_env() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{\"domain\": \"example.com\"}").unwrap();

    cmd()
        .env("CPANEL_CREDENTIALS", file.path())
        .env("CERTBOT_DOMAIN", "example.com")
        .env("CERTBOT_VALIDATION", "token")
        .arg("cleanup")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid credentials JSON"));
}

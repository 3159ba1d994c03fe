//! Integration tests for the `ldap-options` binary.
//!
//! Responsibilities:
//! - Validate table and JSON output against real files and environment variables.
//! - Ensure secrets never reach stdout or the debug log.
//! - Ensure unreadable configuration files fail with a clear message.

mod common;

use common::ldap_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_help() {
    let home = TempDir::new().unwrap();

    ldap_cmd(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Show LDAP client options")
                .and(predicate::str::contains("--seconds"))
                .and(predicate::str::contains("--output")),
        );
}

#[test]
fn test_no_init_prints_nothing_resolved() {
    let home = TempDir::new().unwrap();

    ldap_cmd(home.path())
        .env("LDAPNOINIT", "1")
        .assert()
        .success()
        .stdout("No LDAP options resolved.\n");
}

#[test]
fn test_home_rc_and_env_in_json() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join(".ldaprc"),
        "# user settings\nBASE dc=example,dc=com\n",
    )
    .unwrap();

    let output = ldap_cmd(home.path())
        .env("LDAPPASSWORD", "s3cr3t")
        .env("LDAPURI", "ldap://env:389")
        .args(["-o", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("s3cr3t"));

    let rows: Vec<serde_json::Value> = serde_json::from_str(&stdout).unwrap();
    let row = |key: &str| rows.iter().find(|r| r["key"] == key).cloned().unwrap();

    assert_eq!(row("BASE")["value"], "dc=example,dc=com");
    assert_eq!(
        row("BASE")["origin"],
        &*home.path().join(".ldaprc").to_string_lossy()
    );
    assert_eq!(row("URI")["origin"], "env");
    assert_eq!(row("PASSWORD")["value"], "****");
    assert_eq!(row("TLS_REQCERT")["origin"], "default");
}

#[test]
fn test_seconds_for_selected_keys() {
    let home = TempDir::new().unwrap();

    ldap_cmd(home.path())
        .env("LDAPTIMEOUT", "5")
        .env("LDAPNETWORK_TIMEOUT", "later")
        .args(["--seconds", "timeout", "network_timeout"])
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(r"TIMEOUT\s+5\s+env")
                .unwrap()
                .and(predicate::str::is_match(r"NETWORK_TIMEOUT\s+0\s+env").unwrap()),
        );
}

#[test]
fn test_debug_log_never_contains_password() {
    let home = TempDir::new().unwrap();

    ldap_cmd(home.path())
        .env("RUST_LOG", "debug")
        .env("LDAPPASSWORD", "s3cr3t")
        .env("LDAPBINDDN", "cn=admin")
        .assert()
        .success()
        .stderr(
            predicate::str::contains("Read LDAP option")
                .and(predicate::str::contains("cn=admin"))
                .and(predicate::str::contains("s3cr3t").not()),
        )
        .stdout(predicate::str::contains("s3cr3t").not());
}

#[test]
fn test_unreadable_override_file_fails() {
    let home = TempDir::new().unwrap();
    let conf_dir = home.path().join("conf.d");
    std::fs::create_dir(&conf_dir).unwrap();

    ldap_cmd(home.path())
        .env("LDAPCONF", &conf_dir)
        .assert()
        .failure()
        .code(1)
        .stderr(
            predicate::str::contains("Failed to resolve LDAP options")
                .and(predicate::str::contains("LDAPCONF file")),
        );
}

//! Resolution tests against the real process environment and filesystem.
//!
//! Responsibilities:
//! - Test `SystemProvider` end to end with `HOME`, `LDAPCONF`, `LDAPRC` and
//!   `LDAP<NAME>` variables.
//! - Test read failures on real files.

use std::path::Path;
use std::time::Duration;

use serial_test::serial;
use tempfile::TempDir;

use super::env_lock;
use crate::constants::{ENV_CONF, ENV_NO_INIT, ENV_RC, KNOWN_OPTIONS};
use crate::loader::builder::{Stage, initialize};
use crate::loader::error::ConfigError;
use crate::provider::SystemProvider;
use crate::types::Origin;

/// Every variable the resolver reads, unset, followed by `overrides`.
fn isolated_vars(overrides: &[(&str, &str)]) -> Vec<(String, Option<String>)> {
    let mut vars: Vec<(String, Option<String>)> = KNOWN_OPTIONS
        .iter()
        .map(|name| (format!("LDAP{name}"), None))
        .chain([ENV_NO_INIT, ENV_CONF, ENV_RC].map(|name| (name.to_string(), None)))
        .collect();
    for (name, value) in overrides {
        vars.retain(|(n, _)| n.as_str() != *name);
        vars.push((name.to_string(), Some(value.to_string())));
    }
    vars
}

fn write(dir: &Path, name: &str, contents: &[u8]) -> String {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
#[serial]
fn test_no_init_returns_empty_store() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(isolated_vars(&[(ENV_NO_INIT, "yes")]), || {
        let options = initialize(&SystemProvider).unwrap();
        assert!(options.is_empty());
    });
}

#[test]
#[serial]
fn test_home_override_and_env_layers() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let home = temp_dir.path().to_string_lossy().into_owned();
    let dotrc = write(temp_dir.path(), ".ldaprc", b"BASE dc=home\nTIMEOUT 12\n");
    let conf = write(temp_dir.path(), "override.conf", b"URI ldap://override:389\n");

    let vars = isolated_vars(&[
        ("HOME", home.as_str()),
        (ENV_CONF, conf.as_str()),
        ("LDAPNETWORK_TIMEOUT", "5"),
    ]);
    temp_env::with_vars(vars, || {
        let options = initialize(&SystemProvider).unwrap();

        assert_eq!(options.get_string("BASE"), "dc=home");
        assert_eq!(options.get("BASE").unwrap().origin, Origin::File(dotrc.clone().into()));
        assert_eq!(options.get_seconds("TIMEOUT"), Duration::from_secs(12));
        assert_eq!(options.get_string("URI"), "ldap://override:389");
        assert_eq!(options.get_seconds("NETWORK_TIMEOUT"), Duration::from_secs(5));
        assert_eq!(options.get("NETWORK_TIMEOUT").unwrap().origin, Origin::Env);
    });
}

#[test]
#[serial]
fn test_named_rc_in_home() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let home = temp_dir.path().to_string_lossy().into_owned();
    write(temp_dir.path(), ".customrc", b"SASL_MECH EXTERNAL\n");

    temp_env::with_vars(isolated_vars(&[("HOME", home.as_str()), (ENV_RC, "customrc")]), || {
        let options = initialize(&SystemProvider).unwrap();
        assert_eq!(options.get_string("SASL_MECH"), "EXTERNAL");
    });
}

#[test]
#[serial]
fn test_invalid_utf8_override_file_fails() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let home = temp_dir.path().to_string_lossy().into_owned();
    let conf = write(temp_dir.path(), "broken.conf", b"URI ldap://dir\nBASE \xff\xfe\n");

    temp_env::with_vars(isolated_vars(&[("HOME", home.as_str()), (ENV_CONF, conf.as_str())]), || {
        let err = initialize(&SystemProvider).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }), "got: {err:?}");
        assert_eq!(err.stage(), Stage::OverrideFile);
    });
}

#[cfg(unix)]
#[test]
#[serial]
fn test_directory_candidate_fails_to_read() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let home = temp_dir.path().to_string_lossy().into_owned();
    let dir = temp_dir.path().join("conf.d");
    std::fs::create_dir(&dir).unwrap();
    let dir = dir.to_string_lossy().into_owned();

    temp_env::with_vars(isolated_vars(&[("HOME", home.as_str()), (ENV_CONF, dir.as_str())]), || {
        let err = initialize(&SystemProvider).unwrap_err();
        assert_eq!(err.stage(), Stage::OverrideFile);
        assert_eq!(err.path().to_string_lossy(), dir);
    });
}

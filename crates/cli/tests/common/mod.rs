//! Shared test utilities for ldap-options integration tests.
//!
//! Invariants / Assumptions:
//! - Every `LDAP*` variable the resolver reads is cleared from the child environment.
//! - `HOME` and the working directory point at a test-owned temporary directory.

use assert_cmd::Command;
use std::path::Path;

const LDAP_VARS: &[&str] = &[
    "LDAPNOINIT",
    "LDAPCONF",
    "LDAPRC",
    "LDAPBASE",
    "LDAPBINDDN",
    "LDAPPASSWORD",
    "LDAPREFERRALS",
    "LDAPSASL_AUTHCID",
    "LDAPSASL_AUTHZID",
    "LDAPSASL_MECH",
    "LDAPTIMEOUT",
    "LDAPTLS_REQCERT",
    "LDAPNETWORK_TIMEOUT",
    "LDAPURI",
];

/// Returns a hermetic `ldap-options` command rooted at `home`.
pub fn ldap_cmd(home: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ldap-options");

    for var in LDAP_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd.env("HOME", home).current_dir(home);

    cmd
}

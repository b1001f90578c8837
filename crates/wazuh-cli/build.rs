//! Stamps the CLI version with the commit it was built from.
//!
//! `wazuh --version` prints `<package version>` followed by the short commit
//! hash in parentheses when built from a git checkout, e.g.
//! `wazuh 0.1.0 (3f2a9c1-dirty)`. Packagers building from a tarball can set
//! `WAZUH_CLI_BUILD_COMMIT` instead.

use std::process::Command;

const COMMIT_OVERRIDE: &str = "WAZUH_CLI_BUILD_COMMIT";

fn main() {
    // The crate lives two levels below the workspace root.
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs/");
    println!("cargo:rerun-if-env-changed={COMMIT_OVERRIDE}");

    let package = env!("CARGO_PKG_VERSION");
    let commit = std::env::var(COMMIT_OVERRIDE)
        .ok()
        .filter(|c| !c.trim().is_empty())
        .or_else(git_commit);

    let version = match commit {
        Some(commit) => format!("{package} ({})", commit.trim()),
        None => package.to_string(),
    };

    println!("cargo:rustc-env=WAZUH_CLI_VERSION={version}");
}

fn git_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty", "--abbrev=7", "--exclude=*"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let commit = String::from_utf8(output.stdout).ok()?;
    let commit = commit.trim();
    (!commit.is_empty()).then(|| commit.to_string())
}

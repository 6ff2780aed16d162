use std::error::Error;

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn tree_prints_the_seeded_sections() -> Result<(), Box<dyn Error>> {
    Command::cargo_bin("pagedesk-cli")?
        .arg("tree")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Private")
                .and(predicate::str::contains("  📄 Getting Started (page-1)"))
                .and(predicate::str::contains("Teamspaces"))
                .and(predicate::str::contains("  ✅ Issue Tracking (page-2)"))
                .and(predicate::str::contains("    🐛 Bug Reports (page-3)"))
                .and(predicate::str::contains("    ✨ Feature Requests (page-4)")),
        );

    Ok(())
}

#[test]
fn tree_json_emits_a_snapshot() -> Result<(), Box<dyn Error>> {
    Command::cargo_bin("pagedesk-cli")?
        .args(["tree", "--json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"revision\": 0")
                .and(predicate::str::contains("\"page-1\""))
                .and(predicate::str::contains("\"Issue Tracking\""))
                .and(predicate::str::contains("\"trashed_pages\": []")),
        );

    Ok(())
}

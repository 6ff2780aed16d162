use std::error::Error;

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn search_matches_titles_case_insensitively() -> Result<(), Box<dyn Error>> {
    Command::cargo_bin("pagedesk-cli")?
        .args(["search", "BUG"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Search \"BUG\" (1 hits)")
                .and(predicate::str::contains("[teamspace] 🐛 Bug Reports (page-3)")),
        );

    Ok(())
}

#[test]
fn search_reports_when_nothing_matches() -> Result<(), Box<dyn Error>> {
    Command::cargo_bin("pagedesk-cli")?
        .args(["search", "does-not-exist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matches found."));

    Ok(())
}

#[test]
fn regex_mode_supports_anchors() -> Result<(), Box<dyn Error>> {
    Command::cargo_bin("pagedesk-cli")?
        .args(["search", "^(bug|feature)", "--regex"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("(2 hits)")
                .and(predicate::str::contains("Bug Reports"))
                .and(predicate::str::contains("Feature Requests")),
        );

    Ok(())
}

#[test]
fn invalid_regex_fails_with_a_message() -> Result<(), Box<dyn Error>> {
    Command::cargo_bin("pagedesk-cli")?
        .args(["search", "[unclosed", "--regex"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid pattern"));

    Ok(())
}

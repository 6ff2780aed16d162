use std::error::Error;
use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn script_walks_the_full_operation_set() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let script = dir.path().join("session.pds");
    fs::write(
        &script,
        "# trash a nested page, bring it back, then poke around\n\
         sub page-2 Roadmap\n\
         delete page-3\n\
         restore page-3\n\
         purge page-99\n\
         open mail\n",
    )?;

    Command::cargo_bin("pagedesk-cli")?
        .arg("script")
        .arg(&script)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("added page-100 \"Roadmap\" under page-2")
                .and(predicate::str::contains("trashed page-3 \"Bug Reports\""))
                .and(predicate::str::contains("restored page-3 to private"))
                .and(predicate::str::contains(
                    "no trashed page matches \"page-99\"; nothing changed",
                ))
                .and(predicate::str::contains("active: app mail"))
                .and(predicate::str::contains("-- final state (revision 4)"))
                .and(predicate::str::contains("  🐛 Bug Reports (page-3)"))
                .and(predicate::str::contains("Trash (empty)")),
        );

    Ok(())
}

#[test]
fn script_nesting_against_unknown_parent_changes_nothing() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let script = dir.path().join("noop.pds");
    fs::write(&script, "sub nonexistent Drafts\nadd private Journal\n")?;

    Command::cargo_bin("pagedesk-cli")?
        .arg("script")
        .arg(&script)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("no page matches \"nonexistent\"; nothing changed")
                // The failed nested add consumed no id: the next page gets page-100.
                .and(predicate::str::contains("added page-100 \"Journal\" to private")),
        );

    Ok(())
}

#[test]
fn script_rejects_unknown_commands_with_line_numbers() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let script = dir.path().join("broken.pds");
    fs::write(&script, "frobnicate page-1\n")?;

    Command::cargo_bin("pagedesk-cli")?
        .arg("script")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 1").and(predicate::str::contains("frobnicate")));

    Ok(())
}

#[test]
fn script_for_a_missing_file_fails_with_context() -> Result<(), Box<dyn Error>> {
    Command::cargo_bin("pagedesk-cli")?
        .args(["script", "/no/such/script.pds"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read script"));

    Ok(())
}

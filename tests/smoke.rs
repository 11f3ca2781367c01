// Integration tests for the binary using assert_cmd.
// These tests shell out the compiled binary, feed the menu over stdin,
// and validate observable behavior.

use assert_cmd::prelude::*;
use assert_cmd::Command;
use predicates::str::contains;

const BIN: &str = "ant_farm"; // change if your binary name differs

#[test]
fn banner_menu_and_clean_exit() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--plain").write_stdin("7\n");

    cmd.assert()
        .success()
        .stdout(contains("Welcome to the Ant Farm Simulation!"))
        .stdout(contains("--- Ant Farm Simulation ---"))
        .stdout(contains("1. Spawn Colony"))
        .stdout(contains("7. Exit"))
        .stdout(contains("Exiting simulation. Goodbye!"));

    Ok(())
}

#[test]
fn spawn_grant_attack_and_summary() -> Result<(), Box<dyn std::error::Error>> {
    // Red gets 3 warriors, Blue gets 2; Red attacks and wins.
    let script = "1\nRed\nFire\n\
                  1\nBlue\nCarpenter\n\
                  2\n1\n5\n3\n\
                  2\n2\n5\n2\n\
                  4\n1\n2\n\
                  5\n1\n\
                  5\n2\n\
                  7\n";

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--plain").write_stdin(script);

    cmd.assert()
        .success()
        .stdout(contains("Colony Red of species Fire created."))
        .stdout(contains("Resources added to colony Blue."))
        .stdout(contains("Red defeated Blue!"))
        .stdout(contains("Ant Kills: 7"))
        .stdout(contains("Colony Kills: 1 (Blue)"))
        .stdout(contains("Status: Killed by Red"));

    Ok(())
}

#[test]
fn tie_attack_leaves_defender_standing() -> Result<(), Box<dyn std::error::Error>> {
    let script = "1\nRed\nFire\n\
                  1\nBlue\nCarpenter\n\
                  2\n1\n0\n4\n\
                  2\n2\n0\n4\n\
                  4\n1\n2\n\
                  5\n2\n\
                  7\n";

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--plain").write_stdin(script);

    cmd.assert()
        .success()
        .stdout(contains("Blue defended successfully!"))
        .stdout(contains("Status: Alive"));

    Ok(())
}

#[test]
fn capacity_limit_rejects_extra_spawn() -> Result<(), Box<dyn std::error::Error>> {
    // With --capacity 1 the second spawn must be refused.
    let script = "1\nRed\nFire\n\
                  1\nBlue\nCarpenter\n\
                  6\n\
                  7\n";

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args(["--plain", "--capacity", "1"]).write_stdin(script);

    cmd.assert()
        .success()
        .stdout(contains("Cannot create more colonies. Maximum limit of 1 reached."))
        .stdout(contains("1. Red (Fire)"));

    Ok(())
}

#[test]
fn invalid_menu_choice_keeps_loop_alive() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--plain").write_stdin("42\n6\n7\n");

    cmd.assert()
        .success()
        .stdout(contains("Invalid choice. Please try again."))
        .stdout(contains("Current Colonies:"))
        .stdout(contains("Exiting simulation. Goodbye!"));

    Ok(())
}

#[test]
fn attack_on_dead_colony_is_refused() -> Result<(), Box<dyn std::error::Error>> {
    // Red kills Blue, then tries again; second attack must be refused.
    let script = "1\nRed\nFire\n\
                  1\nBlue\nCarpenter\n\
                  2\n1\n0\n3\n\
                  4\n1\n2\n\
                  4\n1\n2\n\
                  7\n";

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--plain").write_stdin(script);

    cmd.assert()
        .success()
        .stdout(contains("Red defeated Blue!"))
        .stdout(contains("Both colonies must be alive to attack."));

    Ok(())
}

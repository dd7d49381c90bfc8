use assert_cmd::Command;
use predicates::prelude::{predicate::str, PredicateBooleanExt};

fn maze_path() -> Command {
    Command::cargo_bin("maze-path").unwrap()
}

#[test]
fn detour_path_from_file() {
    let mut cmd = maze_path();
    cmd.arg("tests/inputs/detour.txt");

    cmd.assert()
        .success()
        .stdout("0 0\n0 1\n0 2\n1 2\n2 2\n2 1\n2 0\n.\n");
}

#[test]
fn detour_path_from_stdin() {
    let mut cmd = maze_path();
    cmd.write_stdin("3 3\n1 1 1\n0 0 1\n1 1 1\n0 0 2 0\n");

    cmd.assert()
        .success()
        .stdout("0 0\n0 1\n0 2\n1 2\n2 2\n2 1\n2 0\n.\n");
}

#[test]
fn cost_flag_prints_total_cost() {
    let mut cmd = maze_path();
    cmd.arg("--cost").arg("tests/inputs/detour.txt");

    cmd.assert().success().stdout(str::ends_with(".\ncost 7\n"));
}

#[test]
fn same_start_and_end_prints_single_cell() {
    let mut cmd = maze_path();
    cmd.write_stdin("2 2\n5 1\n1 1\n1 1 1 1\n");

    cmd.assert().success().stdout("1 1\n.\n");
}

#[test]
fn no_path_is_not_an_error() {
    let mut cmd = maze_path();
    cmd.arg("tests/inputs/walled.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("no path from (0, 0) to (2, 2)"))
        .stdout(str::contains("\n.\n").not());
}

#[test]
fn start_out_of_bounds_fails() {
    let mut cmd = maze_path();
    cmd.write_stdin("2 2\n1 1\n1 1\n2 0 0 0\n");

    cmd.assert()
        .failure()
        .stdout("")
        .stderr(str::contains("Start cell (2, 0) is outside of the 2x2 grid."));
}

#[test]
fn negative_end_is_out_of_bounds() {
    let mut cmd = maze_path();
    cmd.write_stdin("2 2\n1 1\n1 1\n0 0 0 -1\n");

    cmd.assert()
        .failure()
        .stdout("")
        .stderr(str::contains("End cell (0, -1) is outside"));
}

#[test]
fn blocked_end_fails() {
    let mut cmd = maze_path();
    cmd.write_stdin("2 2\n1 1\n1 0\n0 0 1 1\n");

    cmd.assert()
        .failure()
        .stdout("")
        .stderr(str::contains("End cell (1, 1) is a wall."));
}

#[test]
fn short_grid_row_fails() {
    let mut cmd = maze_path();
    cmd.write_stdin("2 3\n1 1 1\n1 1\n0 0 1 1\n");

    cmd.assert()
        .failure()
        .stdout("")
        .stderr(str::contains("Expect 3 value(s) in line 3, given 2."));
}

#[test]
fn non_integer_token_fails() {
    let mut cmd = maze_path();
    cmd.write_stdin("2 2\n1 x\n1 1\n0 0 1 1\n");

    cmd.assert()
        .failure()
        .stderr(str::contains("Invalid integer text(x) in line 2."));
}

#[test]
fn truncated_input_fails() {
    let mut cmd = maze_path();
    cmd.write_stdin("2 2\n1 1\n1 1\n");

    cmd.assert()
        .failure()
        .stderr(str::contains("start and end cells"));
}

#[test]
fn missing_file_fails() {
    let mut cmd = maze_path();
    cmd.arg("tests/inputs/does_not_exist.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Failed to open given file"));
}

#[test]
fn malformed_file_names_file_once() {
    let mut cmd = maze_path();
    cmd.arg("tests/inputs/bad_token.txt");

    cmd.assert()
        .failure()
        .stdout("")
        .stderr(str::contains(
            "Failed to read problem from given file(tests/inputs/bad_token.txt).",
        ))
        .stderr(str::contains("Invalid integer text(z) in line 3."))
        .stderr(str::contains("bad_token.txt").count(1));
}

//! End-to-end tests of the headless command line.

use assert_cmd::Command;
use predicates::prelude::*;

fn linestep() -> Command {
    Command::cargo_bin("linestep").unwrap()
}

#[test]
fn test_print_basic_table() {
    linestep()
        .args(["--print", "--x1", "0", "--y1", "0", "--x2", "3", "--y2", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Y(start)"))
        .stdout(predicate::str::contains("Y(end)"))
        .stdout(predicate::function(|out: &str| out.lines().count() == 2 + 4));
}

#[test]
fn test_print_dda_table() {
    linestep()
        .args(["--print", "--mode", "dda"])
        .args(["--x1", "0", "--y1", "0", "--x2", "4", "--y2", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(rX, rY)"))
        .stdout(predicate::str::contains("(2, 1)"))
        .stdout(predicate::str::contains("(4, 2)"));
}

#[test]
fn test_negative_inputs() {
    linestep()
        .args(["--print", "--mode", "dda"])
        .args(["--x1", "-2", "--y1", "-1", "--x2", "-4", "--y2", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(-4, -1)"));
}

#[test]
fn test_invalid_input_is_reported_not_fatal() {
    linestep()
        .args(["--print", "--x1", "abc", "--y1", "0", "--x2", "3", "--y2", "3"])
        .assert()
        .success()
        .stderr(predicate::str::contains("X1 is not a number"))
        .stdout(predicate::function(|out: &str| out.lines().count() == 2));
}

#[test]
fn test_vertical_basic_line() {
    linestep()
        .args(["--print", "--x1", "2", "--y1", "0", "--x2", "2", "--y2", "5"])
        .assert()
        .success()
        .stderr(predicate::str::contains("nothing to step"));
}

#[test]
fn test_step_limit() {
    linestep()
        .args(["--print", "--mode", "dda", "--max-steps", "5"])
        .args(["--x1", "0", "--y1", "0", "--x2", "100", "--y2", "0"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Too many steps"));
}

#[test]
fn test_svg_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("line.svg");

    linestep()
        .args(["--mode", "dda", "--x1", "0", "--y1", "0", "--x2", "3", "--y2", "1"])
        .arg("--svg")
        .arg(&path)
        .assert()
        .success();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches("<circle").count(), 4);
    assert_eq!(svg.matches(r#"stroke="blue""#).count(), 3);
}

#[test]
fn test_svg_export_of_degenerate_line_is_blank() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.svg");

    linestep()
        .args(["--x1", "1", "--y1", "1", "--x2", "1", "--y2", "1"])
        .arg("--svg")
        .arg(&path)
        .assert()
        .success();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(!svg.contains("<circle"));
    assert!(!svg.contains("<line"));
}

#[test]
fn test_non_positive_surface_options_are_rejected() {
    for (flag, value) in [("--min-extent", "0"), ("--width", "0"), ("--marker-radius", "0")] {
        linestep()
            .args(["--print", "--x1", "0", "--y1", "0", "--x2", "3", "--y2", "3"])
            .args([flag, value])
            .assert()
            .failure()
            .stderr(predicate::str::contains(format!("{} must be a positive number", flag)));
    }
}

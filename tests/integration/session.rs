use crate::common::{make_temp_dir, normalized_lines, run_with_input};

fn stdout_lines(input: &str) -> Vec<String> {
    let dir = make_temp_dir("session");
    let output = run_with_input(&dir, input);
    assert!(output.status.success(), "binary should exit cleanly");
    normalized_lines(&output.stdout)
}

fn has_line(lines: &[String], expected: &str) -> bool {
    lines.iter().any(|l| l == expected)
}

#[test]
fn startup_prints_banner_and_help() {
    let lines = stdout_lines("exit\n");
    assert!(lines.iter().any(|l| l.contains("G R A D E B O O K")));
    assert!(has_line(&lines, "Supported commands:"));
    assert!(lines.iter().any(|l| l.starts_with("add")));
    assert!(lines.iter().any(|l| l.starts_with("filter")));
}

#[test]
fn add_then_list_shows_average_with_two_decimals() {
    let lines = stdout_lines("add\nIvan Petrov\n5 4 5 3\nlist\nexit\n");
    assert!(has_line(
        &lines,
        "Student 'Ivan Petrov' added. Average grade: 4.25"
    ));
    assert!(has_line(&lines, "Ivan Petrov | [5 4 5 3] | 4.25"));
    assert_eq!(lines.last().map(String::as_str), Some("Goodbye!"));
}

#[test]
fn rejected_grades_do_not_create_a_record() {
    let lines = stdout_lines("add\nIvan\n6 3\nadd\nPetr\nabc 3\nlist\nexit\n");
    assert!(has_line(&lines, "Error: grade '6.0' must be between 2 and 5"));
    assert!(has_line(&lines, "Error: invalid grade: 'abc'"));
    assert!(has_line(&lines, "The student list is empty."));
}

#[test]
fn empty_store_list_and_filter_print_notices() {
    let lines = stdout_lines("list\nfilter\n4\nexit\n");
    assert!(has_line(&lines, "The student list is empty."));
    assert!(has_line(
        &lines,
        "No students with an average grade below 4.00"
    ));
}

#[test]
fn filter_keeps_only_lower_average() {
    let lines = stdout_lines("add\nLow\n3 3\nadd\nHigh\n4 5\nfilter\n4\nexit\n");
    let low_row = format!("{:<9} | {:<6} | 3.00", "Low", "[3 3]");
    assert!(has_line(&lines, &low_row));
    assert!(!lines.iter().any(|l| l.starts_with("High ")));
}

#[test]
fn invalid_threshold_and_unknown_command_keep_running() {
    let lines = stdout_lines("filter\nfour\nfrobnicate\nlist\nexit\n");
    assert!(has_line(&lines, "Invalid number: 'four'."));
    assert!(has_line(
        &lines,
        "Unknown command. Available: add, list, filter, exit"
    ));
    assert!(has_line(&lines, "The student list is empty."));
    assert!(has_line(&lines, "Goodbye!"));
}

#[test]
fn end_of_input_mid_add_terminates_quietly() {
    let dir = make_temp_dir("session");
    let output = run_with_input(&dir, "add\nIvan\n");
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    let lines = normalized_lines(&output.stdout);
    assert!(!has_line(&lines, "Goodbye!"));
}

#[test]
fn default_run_creates_no_files() {
    let dir = make_temp_dir("session");
    let output = run_with_input(&dir, "add\nIvan\n5\nexit\n");
    assert!(output.status.success());
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
}

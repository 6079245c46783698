use crate::common::{
    make_temp_dir, normalized_lines, read_log_contents, run_with_args, run_with_input,
    write_config,
};

#[test]
fn average_list_order_from_config_is_applied() {
    let dir = make_temp_dir("config");
    write_config(&dir, "average-asc", "False");
    let output = run_with_input(&dir, "add\nAnna\n5\nadd\nZed\n2\nlist\nexit\n");
    assert!(output.status.success());

    let lines = normalized_lines(&output.stdout);
    let zed = lines.iter().position(|l| l.starts_with("Zed ")).unwrap();
    let anna = lines.iter().position(|l| l.starts_with("Anna ")).unwrap();
    assert!(zed < anna);
}

#[test]
fn file_logging_writes_session_audit_trail() {
    let dir = make_temp_dir("config");
    write_config(&dir, "name-asc", "True");
    let output = run_with_input(&dir, "add\nIvan\n5 4\nfilter\n4\nexit\n");
    assert!(output.status.success());

    let log = read_log_contents(&dir).expect("log file should exist");
    assert!(log.contains("Session started."));
    assert!(log.contains("Config LIST_ORDER = name-asc"));
    assert!(log.contains("Command run: add"));
    assert!(log.contains("Stored student: Ivan | [5 4] | 4.50"));
    assert!(log.contains("Filter below 4.00 matched 0 of 1 student(s)."));
    assert!(log.contains("Session finished."));
}

#[test]
fn malformed_config_fails_startup() {
    let dir = make_temp_dir("config");
    std::fs::write(dir.join("gradebook.json"), "{ not json").unwrap();
    let output = run_with_input(&dir, "exit\n");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to start with config"));
    assert!(stderr.contains("Invalid JSON"));
}

#[test]
fn config_and_logs_paths_can_be_overridden() {
    let dir = make_temp_dir("config");
    let cfg = dir.join("custom.json");
    std::fs::write(
        &cfg,
        r#"{ "file_logging_enabled": { "value": "True", "description": "x" } }"#,
    )
    .unwrap();
    let logs = dir.join("audit");
    let output = run_with_args(
        &dir,
        &[
            "--config",
            cfg.to_str().unwrap(),
            "--logs",
            logs.to_str().unwrap(),
        ],
        "exit\n",
    );

    assert!(output.status.success());
    assert_eq!(std::fs::read_dir(&logs).unwrap().count(), 1);
}

#[test]
fn unknown_flag_is_rejected() {
    let dir = make_temp_dir("config");
    let output = run_with_args(&dir, &["--verbose"], "exit\n");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown argument: --verbose"));
}

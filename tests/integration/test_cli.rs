// main.rsとエントリーポイントのテスト
use super::binary_path;
use std::io::Write;
use std::process::{Command, Stdio};

#[test]
fn test_cli_help() {
    let output = Command::new(binary_path())
        .arg("--help")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("process_demos"));
    assert!(stdout.contains("dual"));
    assert!(stdout.contains("pool"));
    // ワーカー用のサブコマンドはヘルプに出ない
    assert!(!stdout.contains("pool-worker"));
}

#[test]
fn test_cli_version() {
    let output = Command::new(binary_path())
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("process_demos"));
}

#[test]
fn test_dual_command_output() {
    let output = Command::new(binary_path())
        .arg("dual")
        .output()
        .expect("Failed to execute dual command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(stdout.contains("Numbers: [0, 1, 2, 3, 4]"));
    assert!(stdout.contains("Letters: ['A', 'B', 'C', 'D', 'E']"));
    assert!(lines[..2].iter().all(|line| line.starts_with("Process ID: ")));
    // 完了メッセージは必ず両ワーカーの出力の後
    assert_eq!(lines[2], "Both processes have finished execution.");
}

#[test]
fn test_dual_workers_report_their_own_pids() {
    let output = Command::new(binary_path())
        .arg("dual")
        .output()
        .expect("Failed to execute dual command");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let pids: Vec<u32> = stdout
        .lines()
        .filter_map(|line| line.strip_prefix("Process ID: "))
        .filter_map(|rest| rest.split(' ').next())
        .map(|pid| pid.parse().unwrap())
        .collect();

    assert_eq!(pids.len(), 2);
    assert_ne!(pids[0], pids[1]);
}

#[test]
fn test_pool_command_default_output() {
    let output = Command::new(binary_path())
        .arg("pool")
        .output()
        .expect("Failed to execute pool command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "[1, 4, 9, 16, 25]\n");
}

#[test]
fn test_pool_command_is_deterministic() {
    let run = || {
        let output = Command::new(binary_path())
            .args(["pool", "--max-workers", "2", "6", "-4", "0", "11"])
            .output()
            .expect("Failed to execute pool command");
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap()
    };

    let first = run();
    assert_eq!(first, "[36, 16, 0, 121]\n");
    assert_eq!(first, run());
}

#[test]
fn test_pool_command_overflow_fails() {
    let output = Command::new(binary_path())
        .args(["pool", "3", &i64::MAX.to_string()])
        .output()
        .expect("Failed to execute pool command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("overflow"));
}

#[test]
fn test_pool_command_rejects_zero_workers() {
    let output = Command::new(binary_path())
        .args(["pool", "--max-workers", "0"])
        .output()
        .expect("Failed to execute pool command");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("max_workers"));
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let output = Command::new(binary_path())
        .args(["--verbose", "pool", "2"])
        .output()
        .expect("Failed to execute pool command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "[4]\n");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("pool-worker-0"));
    assert!(stderr.contains("Pool completed"));
}

#[test]
fn test_pool_worker_protocol() {
    let mut child = Command::new(binary_path())
        .args(["pool-worker", "square"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn pool worker");

    {
        let mut stdin = child.stdin.take().unwrap();
        writeln!(stdin, r#"{{"index":0,"input":5}}"#).unwrap();
        writeln!(stdin, r#"{{"index":1,"input":{}}}"#, i64::MAX).unwrap();
    }

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let responses: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["outcome"]["ok"], 25);
    assert!(responses[1]["outcome"]["err"]
        .as_str()
        .unwrap()
        .contains("overflow"));
}

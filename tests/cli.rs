use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("naca-cli-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn naca() -> Command {
    Command::new(env!("CARGO_BIN_EXE_naca"))
}

#[test]
fn test_cli_prints_label_without_saving() {
    let output = naca()
        .args(["--camber", "0.02", "--position", "0.4", "--thickness", "0.12", "--no-save"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!("NACA 2412 Airfoil", stdout.trim());
}

#[test]
fn test_cli_code_writes_csv() {
    let dir = scratch_dir("csv");
    let output = naca()
        .args(["--code", "0012", "--points", "5", "--out-dir"])
        .arg(&dir)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("NACA 0012 Airfoil"));
    assert!(stdout.contains("naca_airfoil_coordinates.csv"));

    let text = fs::read_to_string(dir.join("naca_airfoil_coordinates.csv")).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!("x,y", lines[0]);
    assert_eq!(10, lines.len());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_cli_second_run_gets_new_name() {
    let dir = scratch_dir("collide");
    for _ in 0..2 {
        let status = naca()
            .args(["-c", "2412", "-n", "10", "-f", "json", "-o"])
            .arg(&dir)
            .status()
            .expect("Failed to execute command");
        assert!(status.success());
    }

    assert!(dir.join("naca_airfoil_coordinates.json").exists());
    assert!(dir.join("naca_airfoil_coordinates_1.json").exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_cli_rejects_single_point() {
    let output = naca()
        .args(["--code", "2412", "--points", "1", "--no-save"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("at least 2 points"));
}

#[test]
fn test_cli_rejects_malformed_code() {
    let output = naca()
        .args(["--code", "24x2", "--no-save"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("24x2"));
}

#[test]
fn test_cli_requires_parameters() {
    let output = naca().arg("--no-save").output().expect("Failed to execute command");
    assert!(!output.status.success());
}

#[test]
fn test_cli_reads_config_file() {
    let dir = scratch_dir("config");
    fs::create_dir_all(&dir).unwrap();
    let config_path = dir.join("config.json");
    let out_dir = dir.join("out");
    let config = serde_json::json!({
        "point_count": 7,
        "export": {"directory": out_dir, "base_name": "wing"}
    });
    fs::write(&config_path, config.to_string()).unwrap();

    let output = naca()
        .args(["-c", "4415", "--config"])
        .arg(&config_path)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let text = fs::read_to_string(out_dir.join("wing.csv")).unwrap();
    assert_eq!(14, text.lines().count());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_cli_code_label_is_not_truncated() {
    let output = naca()
        .args(["--code", "2429", "--no-save"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!("NACA 2429 Airfoil", stdout.trim());
}

#[test]
fn test_cli_accepts_negative_parameters() {
    let output = naca()
        .args(["--camber", "-0.02", "--position", "0.4", "--thickness", "0.12", "--no-save"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!("NACA -2412 Airfoil", stdout.trim());
}

#[test]
fn test_cli_reports_extents_of_clipped_section() {
    let output = naca()
        .args(["-m", "0.0", "-p", "0.0", "-t", "1.5", "-n", "11", "--no-save"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("fall outside the plot frame"));
    assert!(stderr.contains("extents"));
}

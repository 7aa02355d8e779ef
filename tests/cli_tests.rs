use std::net::TcpListener;
use std::process::Command;
use tempfile::TempDir;

fn iplocator(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_iplocator"));
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env_remove("IPL__SERVICE__BASE_URL");
    cmd
}

fn unused_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

#[test]
fn test_cli_help_command() {
    let dir = TempDir::new().unwrap();
    let output = iplocator(&dir).arg("--help").output().unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("lookup"));
    assert!(stdout.contains("config"));
}

#[test]
fn test_config_generate_then_refuse_overwrite() {
    let dir = TempDir::new().unwrap();

    let output = iplocator(&dir)
        .args(["config", "generate", "sample.toml"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let content = std::fs::read_to_string(dir.path().join("sample.toml")).unwrap();
    assert!(content.contains("[service]"));

    let output = iplocator(&dir)
        .args(["config", "generate", "sample.toml"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--force"));
}

#[test]
fn test_config_show_reflects_service_url_override() {
    let dir = TempDir::new().unwrap();
    let output = iplocator(&dir)
        .args(["config", "show", "--service-url", "http://geo.internal:9000"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("http://geo.internal:9000"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    let output = iplocator(&dir)
        .args(["-c", "does-not-exist.toml", "config", "show"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_lookup_against_unreachable_service_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let url = format!("http://127.0.0.1:{}", unused_port());

    let output = iplocator(&dir)
        .args(["lookup", "1.2.3.4", "--service-url", &url])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("get ip location fail"));
}

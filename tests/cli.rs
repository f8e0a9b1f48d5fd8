use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

use scanner_qr::QrDecoder;

const EXAMPLE_URL: &str = "https://example.de/wp-admin/admin-ajax.php?action=wjt_scanner_page";

struct Sandbox {
    cwd: TempDir,
    xdg: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            cwd: TempDir::new().expect("create cwd"),
            xdg: TempDir::new().expect("create xdg dir"),
        }
    }

    fn run(&self, args: &[&str]) -> Output {
        self.run_with_env(args, &[])
    }

    fn run_with_env(&self, args: &[&str], vars: &[(&str, &str)]) -> Output {
        let mut command = Command::new(env!("CARGO_BIN_EXE_scanner-qr"));
        command
            .args(args)
            .current_dir(self.cwd.path())
            .env("XDG_CONFIG_HOME", self.xdg.path())
            .env_remove("SCANNER_QR_LOG_LEVEL")
            .env_remove("SCANNER_QR_LOG_FILE")
            .env_remove("SCANNER_QR_LOG_COLOR")
            .env_remove("SCANNER_QR_LOG_ROTATION");
        for (key, value) in vars {
            command.env(key, value);
        }
        command.output().expect("spawn scanner-qr")
    }

    fn files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = fs::read_dir(self.cwd.path())
            .expect("read cwd")
            .map(|entry| entry.expect("dir entry").path())
            .collect();
        files.sort();
        files
    }

    fn path(&self, name: &str) -> PathBuf {
        self.cwd.path().join(name)
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn decode(path: &Path) -> String {
    QrDecoder::new()
        .decode_file(path)
        .expect("decode written image")
        .as_str()
        .expect("utf-8 payload")
        .to_string()
}

#[test]
fn no_arguments_prints_usage_and_exits_1() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&[]);

    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2, "unexpected usage output: {text}");
    assert!(lines[0].starts_with("Usage:"));
    assert!(lines[1].starts_with("Example:"));
    assert!(sandbox.files().is_empty());
}

#[test]
fn two_arguments_prints_usage_and_exits_1() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["example.de", "second.de"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("Usage:"));
    assert!(sandbox.files().is_empty());
}

#[test]
fn single_domain_writes_one_decodable_png() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["example.de"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let text = stdout(&output);
    assert_eq!(text.lines().count(), 3, "unexpected output: {text}");
    assert!(text.contains("scanner-qr-example-de.png"));
    assert!(text.contains(EXAMPLE_URL));

    let expected = sandbox.path("scanner-qr-example-de.png");
    assert_eq!(sandbox.files(), vec![expected.clone()]);
    assert_eq!(decode(&expected), EXAMPLE_URL);

    let image = image::open(&expected).expect("open png");
    assert_eq!((image.width(), image.height()), (410, 410));
}

#[test]
fn repeated_run_overwrites_same_file() {
    let sandbox = Sandbox::new();
    let target = sandbox.path("scanner-qr-example-de.png");
    fs::write(&target, b"not an image").expect("seed stale file");

    assert!(sandbox.run(&["example.de"]).status.success());
    let first = fs::read(&target).expect("read first");
    assert!(sandbox.run(&["example.de"]).status.success());
    let second = fs::read(&target).expect("read second");

    assert_eq!(first, second);
    assert_eq!(sandbox.files(), vec![target]);
}

#[test]
fn domain_without_dots_keeps_name() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["localhost"]);

    assert!(output.status.success());
    let expected = sandbox.path("scanner-qr-localhost.png");
    assert_eq!(sandbox.files(), vec![expected.clone()]);
    assert_eq!(
        decode(&expected),
        "https://localhost/wp-admin/admin-ajax.php?action=wjt_scanner_page"
    );
}

#[test]
fn json_output_with_verification() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--json", "--verify", "tickets.example.de"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let payload: Value = serde_json::from_slice(&output.stdout).expect("parse json output");
    assert_eq!(payload["filename"], "scanner-qr-tickets-example-de.png");
    assert_eq!(
        payload["url"],
        "https://tickets.example.de/wp-admin/admin-ajax.php?action=wjt_scanner_page"
    );
    assert_eq!(payload["verified"], true);
    assert!(payload["version"].as_i64().unwrap_or_default() > 1);
}

#[test]
fn render_settings_cannot_be_overridden() {
    let sandbox = Sandbox::new();
    fs::write(
        sandbox.path("scanner-qr.toml"),
        "[render]\nbox_size = 5\nborder = 0\nfit = false\n",
    )
    .expect("write config");

    let output = sandbox.run_with_env(
        &["example.de"],
        &[("SCANNER_QR_BOX_SIZE", "1"), ("SCANNER_QR_BORDER", "0")],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let target = sandbox.path("scanner-qr-example-de.png");
    let image = image::open(&target).expect("open png");
    assert_eq!((image.width(), image.height()), (410, 410));
    assert_eq!(decode(&target), EXAMPLE_URL);
}

#[test]
fn domain_starting_with_hyphen_is_accepted() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["-shop.de"]);

    assert!(output.status.success(), "stdout: {}", stdout(&output));
    let expected = sandbox.path("scanner-qr--shop-de.png");
    assert_eq!(sandbox.files(), vec![expected.clone()]);
    assert_eq!(
        decode(&expected),
        "https://-shop.de/wp-admin/admin-ajax.php?action=wjt_scanner_page"
    );
}

#[test]
fn log_file_receives_debug_events() {
    let sandbox = Sandbox::new();
    let logs = TempDir::new().expect("create log dir");
    let log_path = logs.path().join("nested").join("scanner-qr.log");

    let output = sandbox.run_with_env(
        &["example.de"],
        &[
            ("SCANNER_QR_LOG_LEVEL", "debug"),
            ("SCANNER_QR_LOG_FILE", log_path.to_str().expect("utf-8 log path")),
            ("SCANNER_QR_LOG_COLOR", "off"),
        ],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    // Console logging stays off stdout.
    assert_eq!(stdout(&output).lines().count(), 3);

    let contents = fs::read_to_string(&log_path).expect("read log file");
    assert!(contents.contains("DEBUG"), "log file: {contents}");
    assert!(contents.contains("Wrote scanner QR image"), "log file: {contents}");
    assert!(!contents.contains('\u{1b}'), "log file has ANSI escapes");
}

#[test]
fn empty_domain_fails_without_writing() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&[""]);

    assert_eq!(output.status.code(), Some(1));
    assert!(sandbox.files().is_empty());
}

// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests that drive the compiled binary.
//!
//! Each test writes its own config pointing at a temp directory and runs the
//! binary with `--config`, so no user data or config is touched.

use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new(backend: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let config = format!(
            r#"
[app]
log_level = "warn"

[storage]
backend = "{backend}"
database_path = "{db}"
data_dir = "{kv}"

[ocr]
delay_ms = 0
"#,
            db = dir.path().join("thoughts.db").display(),
            kv = dir.path().join("kv").display(),
        );
        std::fs::write(dir.path().join("thoughtbox.toml"), config).unwrap();
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn run(&self, args: &[&str]) -> Output {
        self.run_with_input(args, "")
    }

    fn run_with_input(&self, args: &[&str], input: &str) -> Output {
        use std::io::Write;

        let mut child = Command::new(env!("CARGO_BIN_EXE_thoughtbox"))
            .arg("--config")
            .arg(self.path().join("thoughtbox.toml"))
            .arg("--plain")
            .args(args)
            .current_dir(self.path())
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();
        child
            .stdin
            .take()
            .unwrap()
            .write_all(input.as_bytes())
            .unwrap();
        child.wait_with_output().unwrap()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn list_json(sandbox: &Sandbox, extra: &[&str]) -> Vec<serde_json::Value> {
    let mut args = vec!["list", "--json"];
    args.extend_from_slice(extra);
    let output = sandbox.run(&args);
    assert!(output.status.success(), "{}", stderr(&output));
    serde_json::from_str(&stdout(&output)).unwrap()
}

#[test]
fn add_list_recategorize_delete_on_sqlite() {
    let sandbox = Sandbox::new("sqlite");

    assert!(sandbox.run(&["add", "first", "idea"]).status.success());
    assert!(
        sandbox
            .run(&["add", "second", "-c", "Category 2"])
            .status
            .success()
    );

    let rows = list_json(&sandbox, &[]);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["content"], "second");
    assert_eq!(rows[1]["content"], "first idea");
    assert_eq!(rows[1]["category"], "Category 1");

    let second_id = rows[0]["id"].as_str().unwrap().to_string();
    let first_id = rows[1]["id"].as_str().unwrap().to_string();

    assert!(
        sandbox
            .run(&["recategorize", &first_id, "Category 2"])
            .status
            .success()
    );
    assert_eq!(list_json(&sandbox, &["-c", "Category 2"]).len(), 2);
    assert!(list_json(&sandbox, &["-c", "Category 1"]).is_empty());

    let output = sandbox.run(&["delete", &second_id, "--yes"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let rows = list_json(&sandbox, &[]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], first_id.as_str());
}

#[test]
fn blank_content_is_rejected() {
    let sandbox = Sandbox::new("file");
    let output = sandbox.run(&["add", "   "]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Please enter some content before saving."));
    assert!(!sandbox.path().join("kv").join("thoughts.json").exists());
}

#[test]
fn delete_prompt_declined_keeps_thought() {
    let sandbox = Sandbox::new("file");
    assert!(sandbox.run(&["add", "keep"]).status.success());
    let id = list_json(&sandbox, &[])[0]["id"].as_str().unwrap().to_string();

    let output = sandbox.run_with_input(&["delete", &id], "n\n");
    assert!(output.status.success());
    assert!(stdout(&output).contains("Are you sure you want to delete this thought?"));
    assert_eq!(list_json(&sandbox, &[]).len(), 1);
}

#[test]
fn capture_saves_mock_text() {
    let sandbox = Sandbox::new("file");
    let image = sandbox.path().join("photo.jpg");
    std::fs::write(&image, b"not really a jpeg").unwrap();

    let output = sandbox.run(&["capture", image.to_str().unwrap()]);
    assert!(output.status.success(), "{}", stderr(&output));
    let rows = list_json(&sandbox, &[]);
    assert_eq!(rows.len(), 1);
    assert!(!rows[0]["content"].as_str().unwrap().is_empty());
}

#[test]
fn capture_of_missing_file_saves_nothing() {
    let sandbox = Sandbox::new("file");
    let output = sandbox.run(&["capture", "missing.jpg"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to extract text from image. Please try again."));
    assert!(list_json(&sandbox, &[]).is_empty());
}

#[test]
fn corrupt_collection_lists_empty_and_survives() {
    let sandbox = Sandbox::new("file");
    let kv = sandbox.path().join("kv");
    std::fs::create_dir_all(&kv).unwrap();
    std::fs::write(kv.join("thoughts.json"), "{oops").unwrap();

    let output = sandbox.run(&["list"]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("could not be read"));

    let output = sandbox.run(&["add", "new"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to save thought. Please try again."));
    assert_eq!(
        std::fs::read_to_string(kv.join("thoughts.json")).unwrap(),
        "{oops"
    );
}

#[test]
fn invalid_config_exits_non_zero() {
    let sandbox = Sandbox::new("file");
    std::fs::write(
        sandbox.path().join("thoughtbox.toml"),
        "[display]\ncategries = [\"All\"]\n",
    )
    .unwrap();
    let output = sandbox.run(&["categories"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("categories"));
}

#[test]
fn missing_config_file_exits_before_touching_storage() {
    let sandbox = Sandbox::new("file");
    let output = Command::new(env!("CARGO_BIN_EXE_thoughtbox"))
        .arg("--config")
        .arg(sandbox.path().join("typo.toml"))
        .args(["--plain", "add", "lost"])
        .current_dir(sandbox.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(stderr(&output).contains("typo.toml"));
    assert!(!sandbox.path().join("kv").exists());
}

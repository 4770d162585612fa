use std::fs;
use std::process::Command;

fn stager() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stager"));
    cmd.env_remove("PROJECT_DIR");
    cmd
}

#[test]
fn hook_reports_each_copy() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join("assets")).unwrap();
    fs::write(root.path().join("assets").join("index.html"), "<p>hi</p>").unwrap();

    let output = stager()
        .env("PROJECT_DIR", root.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        [
            "Copying assets to data directory for SPIFFS upload...",
            "Copied: index.html",
            "SPIFFS data upload configured",
        ]
    );
    assert!(root.path().join("data").join("index.html").exists());
}

#[test]
fn missing_assets_prints_only_completion() {
    let root = tempfile::tempdir().unwrap();

    let output = stager()
        .arg("--project-dir")
        .arg(root.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end(), "SPIFFS data upload configured");
    assert!(root.path().join("data").is_dir());
}

#[test]
fn flags_override_config_file() {
    let root = tempfile::tempdir().unwrap();
    fs::write(
        root.path().join("stager.toml"),
        "[stage]\nsource = \"web\"\ndestination = \"fs\"\n",
    )
    .unwrap();
    fs::create_dir(root.path().join("web")).unwrap();
    fs::write(root.path().join("web").join("app.js"), "main()").unwrap();

    let status = stager()
        .arg("--project-dir")
        .arg(root.path())
        .args(["--destination", "spiffs"])
        .status()
        .unwrap();

    assert!(status.success());
    assert!(root.path().join("spiffs").join("app.js").exists());
    assert!(!root.path().join("fs").exists());
}

#[test]
fn broken_config_fails_the_build_step() {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("stager.toml"), "[stage\n").unwrap();

    let output = stager()
        .arg("--project-dir")
        .arg(root.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("stager.toml"));
    assert!(!root.path().join("data").exists());
}

#[test]
fn staging_a_directory_onto_itself_fails() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join("data")).unwrap();
    fs::write(root.path().join("data").join("index.html"), "<p>hi</p>").unwrap();

    let output = stager()
        .arg("--project-dir")
        .arg(root.path())
        .args(["--source", "data"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(
        fs::read_to_string(root.path().join("data").join("index.html")).unwrap(),
        "<p>hi</p>"
    );
}

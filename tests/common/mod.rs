#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn index_emails_cmd() -> Command {
    let mut cmd = Command::cargo_bin("index-emails").unwrap();
    cmd.env_remove("INDEX_EMAILS_DIR");
    cmd.env_remove("INDEX_EMAILS_API_URL");
    cmd.env_remove("INDEX_EMAILS_API_KEY");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Command against `dir` whose git calls cannot reach any repository
pub fn isolated_cmd(dir: &Path, api_url: &str) -> Command {
    let mut cmd = index_emails_cmd();
    cmd.arg("--dir")
        .arg(dir)
        .env("INDEX_EMAILS_API_URL", api_url)
        .env("GIT_DIR", dir.join("no-such-git-dir"));
    cmd
}

pub fn write_record(dir: &Path, name: &str, json: &str) {
    fs::create_dir_all(dir.join("infos")).unwrap();
    fs::write(dir.join("infos").join(format!("{}.json", name)), json).unwrap();
}

pub fn read_record(dir: &Path, name: &str) -> serde_json::Value {
    let contents = fs::read_to_string(dir.join("infos").join(format!("{}.json", name))).unwrap();
    serde_json::from_str(&contents).unwrap()
}

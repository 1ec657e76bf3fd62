#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn shl() -> Command {
    cargo_bin_cmd!("shelflog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shelflog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB (schema only, --test keeps the user config untouched)
pub fn init_db(db_path: &str) {
    shl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add one book via the CLI.
pub fn add_book(db_path: &str, title: &str, author: &str, category: &str) {
    shl()
        .args([
            "--db", db_path, "add", title, "--author", author, "--category", category,
        ])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add_book(db_path, "紅樓夢", "曹雪芹", "已看-1");
    add_book(db_path, "西遊記", "吳承恩", "待借");
    add_book(db_path, "料理之王", "施建發", "食譜");
}

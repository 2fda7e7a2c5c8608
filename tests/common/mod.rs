#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn savory_cmd() -> Command {
    let mut cmd = Command::cargo_bin("savory").unwrap();
    cmd.env_remove("SAVORY_HOME");
    cmd.env_remove("SPOONACULAR_API_KEY");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Command running against the given data directory
pub fn savory_at(home: &Path) -> Command {
    let mut cmd = savory_cmd();
    cmd.env("SAVORY_HOME", home);
    cmd
}

/// Fresh, initialized data directory without an API key
pub fn initialized_home() -> TempDir {
    let temp = TempDir::new().unwrap();
    savory_at(temp.path()).arg("init").assert().success();
    temp
}

/// Write a raw storage value, as a previous run would have
pub fn write_item(home: &Path, key: &str, value: &str) {
    fs::write(home.join("storage").join(key), value).unwrap();
}

pub fn read_item(home: &Path, key: &str) -> Option<String> {
    fs::read_to_string(home.join("storage").join(key)).ok()
}

pub const BURGER_RESULTS: &str = r#"[
    {"id": 1, "title": "Classic Beef Burger", "image": "burger.jpg", "readyInMinutes": 35, "servings": 4, "summary": "A juicy burger"},
    {"id": 2, "title": "Veggie Burger", "image": "veggie.jpg", "readyInMinutes": 25, "servings": 2, "summary": "Plant based"}
]"#;

/// Seed a finished search for "burger" spanning three pages
pub fn seed_burger_search(home: &Path) {
    write_item(home, "searchResults", BURGER_RESULTS);
    write_item(home, "lastQuery", "burger");
    write_item(home, "searchPage", r#"{"offset":0,"number":12,"totalResults":30}"#);
}

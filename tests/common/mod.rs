use assert_cmd::Command;
use std::path::Path;

pub fn repodeck_cmd() -> Command {
    let mut cmd = Command::cargo_bin("repodeck").unwrap();
    cmd.env_remove("REPODECK_ROOT");
    cmd.env_remove("REPODECK_LOG");
    cmd
}

/// Ids in the registry at `root`, in list order
#[allow(dead_code)]
pub fn stored_ids(root: &Path) -> Vec<String> {
    let contents =
        std::fs::read_to_string(root.join(".repodeck").join("repositories.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}

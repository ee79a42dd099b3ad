pub mod mock_clipboard;
pub mod mock_opener;

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Runs the `waopen` binary against an isolated config directory
pub struct CliContext {
    pub temp_dir: TempDir,
}

impl CliContext {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir_all(temp_dir.path().join("config"))
            .expect("Failed to create config dir");
        Self { temp_dir }
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config/waopen/config.json")
    }

    pub fn write_config(&self, json: &str) {
        let path = self.config_path();
        std::fs::create_dir_all(path.parent().unwrap()).expect("Failed to create config dir");
        std::fs::write(path, json).expect("Failed to write config");
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_waopen"))
            .args(args)
            .env("XDG_CONFIG_HOME", self.temp_dir.path().join("config"))
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run waopen")
    }
}

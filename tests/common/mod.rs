//! Common test utilities for sitestack integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch directory the binary runs in
pub struct TestDir {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to directory root
    pub path: PathBuf,
}

impl TestDir {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file relative to the directory root
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file relative to the directory root
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }
}

/// The sitestack binary, isolated from the caller's environment
#[allow(deprecated)]
pub fn sitestack_cmd(dir: &TestDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("sitestack").expect("sitestack binary");
    cmd.current_dir(&dir.path)
        .env_remove("SITESTACK_CONTEXT_FILE")
        .env_remove("CDK_DEFAULT_ACCOUNT")
        .env_remove("RUST_LOG");
    cmd
}

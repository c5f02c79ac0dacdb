#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the streamchart binary.
#[macro_export]
macro_rules! streamchart {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("streamchart"))
    };
}

pub const MODELS_CSV: &str = "\
Date,GPT-4,Claude,Llama
2024-01-01,10,5,8
2024-01-15,12,9,3
2024-02-01,20,0,12
2024-03-01,15,25,3
2024-04-01,30,10,40
";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a local streamchart config file.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".streamchart.toml", content)
    }

    /// Creates `models.csv` with three series over four months.
    pub fn create_models_csv(&self) -> PathBuf {
        self.create_file("models.csv", MODELS_CSV)
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

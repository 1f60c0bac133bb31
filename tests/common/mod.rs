//! Common test infrastructure for Swatch integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]

use std::path::PathBuf;

use swatch::SwatchConfig;
use tempfile::TempDir;

/// A scratch directory holding fixture files for one test.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Write `content` to `name` inside the fixture directory.
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// Write a config file and load it.
    pub fn config(&self, yaml: &str) -> SwatchConfig {
        let path = self.file("swatch.yaml", yaml);
        SwatchConfig::load(&path).expect("Failed to load fixture config")
    }
}

/// Datasets shared by the limits tests.
pub mod datasets {
    pub const ONE_TO_TEN: &str = "[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]";

    pub const CITIES: &str = r#"[
        {"name": "Olten", "pop": 18000},
        {"name": "Basel", "pop": 173000},
        {"name": "Bern", "pop": 134000},
        {"name": "Zug", "pop": 30000}
    ]"#;

    pub const BY_NAME: &str = r#"{"a": 4, "b": null, "c": 16, "d": 64}"#;
}

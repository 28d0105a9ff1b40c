//! Test fixtures for property file integration tests
//!
//! Builds throwaway project folders populated with property files.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use sdk_project_props::PropertyType;
use tempfile::TempDir;

/// A temporary project folder
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp project"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, kind: PropertyType) -> PathBuf {
        self.root().join(kind.filename())
    }

    /// Write raw contents to the `kind` file
    pub fn with_file(self, kind: PropertyType, contents: &str) -> Self {
        fs::write(self.file(kind), contents).expect("write property file");
        self
    }

    pub fn read(&self, kind: PropertyType) -> String {
        fs::read_to_string(self.file(kind)).expect("read property file")
    }
}

/// A `default.properties` as the tools write it
pub const DEFAULT_FILE: &str = "\
# This file is automatically generated by Android Tools.
# Do not modify this file -- YOUR CHANGES WILL BE ERASED!
# 
# This file must be checked in Version Control Systems.

# Project target.
target=android-3
apk-configurations=european
apk-config-european=en,fr,it,de,es
";

/// A hand-edited `build.properties`
pub const BUILD_FILE: &str = "\
# overrides
out-folder=out
target=android-4
";

/// A `local.properties` pointing at an SDK
pub const LOCAL_FILE: &str = "sdk-location=/opt/android-sdk\n";

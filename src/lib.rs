//! SDK project properties
//!
//! Loads, merges, edits and saves the `key=value` property files that
//! configure an SDK project's build: `build.properties`,
//! `default.properties` and `local.properties`.

pub mod apk_config;
pub mod properties;
pub mod target;

pub use properties::{
    DefaultProperties, ProjectProperties, PropertiesError, PropertySource, PropertyType,
};
pub use target::{AddOnTarget, BuildTarget, PlatformTarget};

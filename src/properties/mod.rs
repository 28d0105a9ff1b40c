//! Project property files
//!
//! Loads, merges and saves the three property files of an SDK project:
//! - `build.properties`: checked-in overrides for the Ant build
//! - `default.properties`: generated, checked-in project settings
//! - `local.properties`: machine-specific settings, never checked in

mod catalog;
mod default_props;
mod error;
mod kind;
mod store;

pub use catalog::{comment_for, PROPERTY_APK_CONFIGS, PROPERTY_SDK, PROPERTY_TARGET};
pub use default_props::DefaultProperties;
pub use error::PropertiesError;
pub use kind::{PropertyType, PropertyTypeMetadata};
pub use store::{check_property, ProjectProperties, PropertySource};

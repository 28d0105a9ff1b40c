//! `default.properties` store
//!
//! The project target is only ever written to `default.properties`, so
//! the mutation lives on a store type that can only hold that kind.

use std::ops::{Deref, DerefMut};
use std::path::Path;

use super::catalog::PROPERTY_TARGET;
use super::error::PropertiesError;
use super::kind::PropertyType;
use super::store::ProjectProperties;
use crate::target::BuildTarget;

/// A [`ProjectProperties`] of kind [`PropertyType::Default`]
#[derive(Debug, Clone)]
pub struct DefaultProperties(ProjectProperties);

impl DefaultProperties {
    /// Load `default.properties` from `project_root`, see [`ProjectProperties::load`].
    pub fn load(project_root: impl AsRef<Path>) -> Option<Self> {
        ProjectProperties::load(project_root, PropertyType::Default).map(Self)
    }

    /// Create an empty `default.properties` store.
    pub fn create(project_root: impl AsRef<Path>) -> Self {
        Self(ProjectProperties::create(project_root, PropertyType::Default))
    }

    /// Set the `target` property to the target's hash string.
    pub fn set_android_target<T: BuildTarget + ?Sized>(&mut self, target: &T) {
        self.0.set_property(PROPERTY_TARGET, target.hash_string());
    }

    pub fn android_target(&self) -> Option<&str> {
        self.0.get_property(PROPERTY_TARGET)
    }

    pub fn into_inner(self) -> ProjectProperties {
        self.0
    }
}

impl TryFrom<ProjectProperties> for DefaultProperties {
    type Error = PropertiesError;

    fn try_from(props: ProjectProperties) -> Result<Self, Self::Error> {
        match props.kind() {
            PropertyType::Default => Ok(Self(props)),
            found => Err(PropertiesError::WrongKind {
                expected: PropertyType::Default,
                found,
            }),
        }
    }
}

impl Deref for DefaultProperties {
    type Target = ProjectProperties;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DefaultProperties {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::{AddOnTarget, PlatformTarget};
    use tempfile::TempDir;

    #[test]
    fn test_set_platform_target() {
        let mut props = DefaultProperties::create("/tmp");
        props.set_android_target(&PlatformTarget::new(4));

        assert_eq!(props.android_target(), Some("android-4"));
        assert_eq!(props.get_property("target"), Some("android-4"));
        assert_eq!(props.kind(), PropertyType::Default);
    }

    #[test]
    fn test_set_addon_target_replaces() {
        let mut props = DefaultProperties::create("/tmp");
        props.set_android_target(&PlatformTarget::new(3));
        props.set_android_target(&AddOnTarget::new("Google Inc.", "Google APIs", 3));

        assert_eq!(props.android_target(), Some("Google Inc.:Google APIs:3"));
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn test_set_opaque_target() {
        let mut props = DefaultProperties::create("/tmp");
        props.set_android_target("android-7");
        assert_eq!(props.android_target(), Some("android-7"));
    }

    #[test]
    fn test_try_from_rejects_other_kinds() {
        let local = ProjectProperties::create("/tmp", PropertyType::Local);
        let err = DefaultProperties::try_from(local).unwrap_err();
        assert!(matches!(
            err,
            PropertiesError::WrongKind {
                expected: PropertyType::Default,
                found: PropertyType::Local,
            }
        ));
    }

    #[test]
    fn test_try_from_accepts_default() {
        let mut props = ProjectProperties::create("/tmp", PropertyType::Default);
        props.set_property("a", "1");
        let default = DefaultProperties::try_from(props).unwrap();
        assert_eq!(default.into_inner().get_property("a"), Some("1"));
    }

    #[test]
    fn test_save_and_load_target() {
        let dir = TempDir::new().unwrap();
        let mut props = DefaultProperties::create(dir.path());
        props.set_android_target(&PlatformTarget::new(3));
        props.save().unwrap();

        let contents = std::fs::read_to_string(dir.path().join("default.properties")).unwrap();
        assert!(contents.ends_with("# Project target.\ntarget=android-3\n"));

        let loaded = DefaultProperties::load(dir.path()).unwrap();
        assert_eq!(loaded.android_target(), Some("android-3"));
    }
}

//! Build targets
//!
//! A project records its target as a single hash string in
//! `default.properties`. Target registries live outside this crate; they
//! only need to implement [`BuildTarget`].

/// A platform or add-on a project can be built against
pub trait BuildTarget {
    /// Stable string identifying this target, written as the `target` property.
    fn hash_string(&self) -> String;
}

/// A platform target, e.g. `android-4`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformTarget {
    pub api_level: u32,
}

impl PlatformTarget {
    pub fn new(api_level: u32) -> Self {
        Self { api_level }
    }
}

impl BuildTarget for PlatformTarget {
    fn hash_string(&self) -> String {
        format!("android-{}", self.api_level)
    }
}

/// An add-on target, identified by vendor, name and API level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOnTarget {
    pub vendor: String,
    pub name: String,
    pub api_level: u32,
}

impl AddOnTarget {
    pub fn new(vendor: impl Into<String>, name: impl Into<String>, api_level: u32) -> Self {
        Self {
            vendor: vendor.into(),
            name: name.into(),
            api_level,
        }
    }
}

impl BuildTarget for AddOnTarget {
    fn hash_string(&self) -> String {
        format!("{}:{}:{}", self.vendor, self.name, self.api_level)
    }
}

/// An already-computed hash string, used as-is
impl BuildTarget for str {
    fn hash_string(&self) -> String {
        self.to_string()
    }
}

impl BuildTarget for String {
    fn hash_string(&self) -> String {
        self.clone()
    }
}

//! Property file kinds
//!
//! Each kind binds one on-disk file name to the header block written at
//! the top of that file on save.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::PropertiesError;

const LOCAL_HEADER: &str = "\
# This file is automatically generated by Android Tools.
# Do not modify this file -- YOUR CHANGES WILL BE ERASED!
# 
# This file must *NOT* be checked in Version Control Systems,
# as it contains information specific to your local configuration.

";

const DEFAULT_HEADER: &str = "\
# This file is automatically generated by Android Tools.
# Do not modify this file -- YOUR CHANGES WILL BE ERASED!
# 
# This file must be checked in Version Control Systems.
# 
# To customize properties used by the Ant build system use,
# \"build.properties\", and override values to adapt the script to your
# project structure.

";

const BUILD_HEADER: &str = "\
# This file is used to override default values used by the Ant build system.
# 
# This file must be checked in Version Control Systems, as it is
# integral to the build system of your project.

# The name of your application package as defined in the manifest.
# Used by the 'uninstall' rule.
#application-package=com.example.myproject

# The name of the source folder.
#source-folder=src

# The name of the output folder.
#out-folder=bin

";

/// Kind of project property file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    /// `build.properties`: checked-in overrides for the Ant build
    Build,
    /// `default.properties`: generated, checked-in project settings
    Default,
    /// `local.properties`: machine-specific, never checked in
    Local,
}

/// Constant metadata bound to a [`PropertyType`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyTypeMetadata {
    pub filename: &'static str,
    pub header: &'static str,
}

impl PropertyType {
    /// All kinds, in the order the build layers them.
    pub const ALL: [PropertyType; 3] = [
        PropertyType::Build,
        PropertyType::Default,
        PropertyType::Local,
    ];

    pub const fn metadata(self) -> PropertyTypeMetadata {
        match self {
            PropertyType::Build => PropertyTypeMetadata {
                filename: "build.properties",
                header: BUILD_HEADER,
            },
            PropertyType::Default => PropertyTypeMetadata {
                filename: "default.properties",
                header: DEFAULT_HEADER,
            },
            PropertyType::Local => PropertyTypeMetadata {
                filename: "local.properties",
                header: LOCAL_HEADER,
            },
        }
    }

    /// File name of this kind inside a project folder
    pub const fn filename(self) -> &'static str {
        self.metadata().filename
    }

    /// Header block written verbatim at the top of the saved file
    pub const fn header(self) -> &'static str {
        self.metadata().header
    }

    fn name(self) -> &'static str {
        match self {
            PropertyType::Build => "build",
            PropertyType::Default => "default",
            PropertyType::Local => "local",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PropertyType {
    type Err = PropertiesError;

    /// Accepts a kind name (`build`, `default`, `local`) or its file name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s) || kind.filename() == s)
            .ok_or_else(|| PropertiesError::UnknownKind(s.to_string()))
    }
}

//! Well-known property keys and the comments written above them on save.

use std::sync::OnceLock;

use crate::apk_config::CONFIG_PREFIX;

/// Build target of the project
pub const PROPERTY_TARGET: &str = "target";

/// Comma-separated list of apk configuration names
pub const PROPERTY_APK_CONFIGS: &str = "apk-configurations";

/// Location of the SDK on this machine
pub const PROPERTY_SDK: &str = "sdk-location";

const TARGET_COMMENT: &str = "# Project target.\n";

const SDK_COMMENT: &str = "\
# location of the SDK. This is only used by Ant
# For customization when using a Version Control System, please read the
# header note.
";

/// Comment documenting `key`, if it is a well-known key.
pub fn comment_for(key: &str) -> Option<&'static str> {
    match key {
        PROPERTY_TARGET => Some(TARGET_COMMENT),
        PROPERTY_APK_CONFIGS => Some(apk_configs_comment()),
        PROPERTY_SDK => Some(SDK_COMMENT),
        _ => None,
    }
}

fn apk_configs_comment() -> &'static str {
    static COMMENT: OnceLock<String> = OnceLock::new();
    COMMENT.get_or_init(|| {
        format!(
            "# apk configurations. This property allows creation of APK files with limited\n\
             # resources. For example, if your application contains many locales and\n\
             # you wish to release multiple smaller apks instead of a large one, you can\n\
             # define configuration to create apks with limited language sets.\n\
             # Format is a comma separated list of configuration names. For each\n\
             # configuration, a property will declare the resource configurations to\n\
             # include. Example:\n\
             #     {PROPERTY_APK_CONFIGS}=european,northamerica\n\
             #     {CONFIG_PREFIX}european=en,fr,it,de,es\n\
             #     {CONFIG_PREFIX}northamerica=en,es\n"
        )
    })
}

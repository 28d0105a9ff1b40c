//! APK configuration helpers
//!
//! `apk-configurations` holds a comma-separated list of configuration
//! names. Each name `foo` has its resource filter stored under
//! `apk-config-foo`.

use indexmap::IndexMap;

use crate::properties::{ProjectProperties, PROPERTY_APK_CONFIGS};

/// Prefix of the per-configuration property names
pub const CONFIG_PREFIX: &str = "apk-config-";

fn config_names(properties: &ProjectProperties) -> Vec<String> {
    properties
        .get_property(PROPERTY_APK_CONFIGS)
        .map(|list| list.split(',').map(|name| name.trim().to_string()).collect())
        .unwrap_or_default()
}

/// Configured apk configurations, name to resource filter, in list order.
///
/// Names listed without a matching `apk-config-` property are skipped.
pub fn get_configs(properties: &ProjectProperties) -> IndexMap<String, String> {
    config_names(properties)
        .into_iter()
        .filter_map(|name| {
            let filter = properties.get_property(&format!("{CONFIG_PREFIX}{name}"))?;
            Some((name, filter.to_string()))
        })
        .collect()
}

/// Replace the apk configurations.
///
/// Every `apk-config-` property named by the current list is removed first,
/// then the new ones are written and the list is rewritten.
pub fn set_configs(properties: &mut ProjectProperties, configs: &IndexMap<String, String>) {
    for name in config_names(properties) {
        properties.remove_property(&format!("{CONFIG_PREFIX}{name}"));
    }

    for (name, filter) in configs {
        properties.set_property(format!("{CONFIG_PREFIX}{name}"), filter.clone());
    }

    let list: Vec<&str> = configs.keys().map(String::as_str).collect();
    properties.set_property(PROPERTY_APK_CONFIGS, list.join(","));
}

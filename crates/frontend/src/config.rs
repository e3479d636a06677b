//! Frontend configuration

use quizy_core::NavigationConfig;

/// Settings compiled into the bundle
const NAVIGATION_TOML: &str = include_str!("../navigation.toml");

/// Load the embedded navigation settings.
///
/// Returns the defaults together with the error message when the embedded
/// document is invalid, so the caller can report it once logging is up.
pub fn load() -> (NavigationConfig, Option<String>) {
    match NavigationConfig::from_toml(NAVIGATION_TOML) {
        Ok(config) => (config, None),
        Err(err) => (NavigationConfig::default(), Some(err.to_string())),
    }
}

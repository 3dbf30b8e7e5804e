//! App Configuration
//!
//! Static settings, provided to components via context.

use log::LevelFilter;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Where the extension list is fetched from
    pub data_url: String,
    /// localStorage key holding the theme preference
    pub theme_key: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_url: "./data.json".to_string(),
            theme_key: "theme".to_string(),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}

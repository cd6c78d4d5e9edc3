//! src/configuration.rs
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub executor: ExecutorSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ExecutorSettings {
    pub mode: ExecutorMode,
    /// Lines per map split; the unit the combiner pre-aggregates over.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub split_lines: usize,
}

#[derive(serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExecutorMode {
    Sequential,
    Parallel,
}

/// Layered settings: built-in defaults, then `configuration/flowstat.yaml`
/// if present, then `FLOWSTAT_`-prefixed environment variables
/// (e.g. `FLOWSTAT_EXECUTOR__MODE=parallel`).
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory.");
    let config_dir = base_path.join("configuration");

    let settings = config::Config::builder()
        .set_default("executor.mode", "sequential")?
        .set_default("executor.split_lines", 1000)?
        .add_source(config::File::from(config_dir.join("flowstat.yaml")).required(false))
        .add_source(
            config::Environment::with_prefix("FLOWSTAT")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;
    settings.try_deserialize::<Settings>()
}

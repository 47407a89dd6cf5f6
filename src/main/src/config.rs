use core::time::Duration;

use anyhow::{Context, Result};
use log::*;

use control::{ConfigOverrides, CoreConfig};

mod store;

pub use store::{MemoryStore, OverrideStore};

#[cfg(feature = "espidf")]
pub use store::NvsStore;

#[toml_cfg::toml_config]
pub struct TomlConfig {
    #[default("circpump")]
    nvs_namespace: &'static str,
    #[default("overrides")]
    nvs_key: &'static str,
    #[default(0x48)]
    adc_address: u8,
    #[default(3300.0)]
    adc_reference_mv: f32,
}

// Where the override blob lives in flash: (namespace, key)
pub fn nvs_location() -> (&'static str, &'static str) {
    (TOML_CONFIG.nvs_namespace, TOML_CONFIG.nvs_key)
}

// ADS1015 bus address and the divider supply voltage in millivolts
pub fn adc_settings() -> (u8, f32) {
    (TOML_CONFIG.adc_address, TOML_CONFIG.adc_reference_mv)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub scan_interval: Duration,
    pub core: CoreConfig,
    // Whether any override was applied on top of the defaults
    pub customised: bool,
}

pub fn parse_overrides(blob: &str) -> Result<ConfigOverrides> {
    serde_json::from_str(blob).context("Malformed configuration overrides")
}

impl Config {
    /// Read the override blob once and merge it over the defaults.
    ///
    /// A store that cannot be read or a blob that does not parse both fall
    /// back to defaults; the controller always gets a configuration.
    pub fn load(store: &mut impl OverrideStore) -> Self {
        let overrides = match store.load_override_config() {
            Ok(Some(blob)) => parse_overrides(&blob).unwrap_or_else(|err| {
                warn!("Ignoring stored configuration: {:#}", err);
                ConfigOverrides::default()
            }),
            Ok(None) => ConfigOverrides::default(),
            Err(err) => {
                warn!("Failed to read stored configuration: {:#}", err);
                ConfigOverrides::default()
            }
        };

        let config = Config::from(overrides);
        if config.customised {
            info!("Loaded custom configuration: {:?}", config.core);
        } else {
            info!("Using default configuration");
        }

        if !config.core.hysteresis_is_ordered() {
            warn!(
                "Stop hysteresis {} is not below start hysteresis {}, the pump may cycle",
                config.core.stop_hysteresis, config.core.start_hysteresis
            );
        }
        if !config.core.sensors_are_distinct() {
            warn!("Tank and source use the same sensor {:?}", config.core.tank_sensor);
        }

        config
    }
}

impl From<ConfigOverrides> for Config {
    fn from(overrides: ConfigOverrides) -> Self {
        let core = CoreConfig::build(&overrides);
        Config {
            scan_interval: Duration::from_secs(u64::from(core.scan_interval_seconds)),
            core,
            customised: !overrides.is_empty(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::from(ConfigOverrides::default())
    }
}

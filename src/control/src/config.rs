use serde::Deserialize;

use crate::state::{SensorId, Temperature};

pub const DEFAULT_TANK_SENSOR: SensorId = SensorId::new(100);
pub const DEFAULT_SOURCE_SENSOR: SensorId = SensorId::new(101);

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CoreConfig {
    // How often the scheduler evaluates, the controller itself never looks at this
    pub scan_interval_seconds: u32,

    // Probe in the storage tank
    pub tank_sensor: SensorId,

    // Probe on the boiler / solar loop
    pub source_sensor: SensorId,

    // Pump must not run with the tank at or above this
    pub max_tank_temperature: Temperature,

    // Source must be this much hotter than the tank to start pumping
    pub start_hysteresis: f32,

    // Source must stay more than this much hotter than the tank to keep pumping
    pub stop_hysteresis: f32,

    // Emit the rationale of every decision
    pub verbose_logging: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        CoreConfig {
            scan_interval_seconds: 30,
            tank_sensor: DEFAULT_TANK_SENSOR,
            source_sensor: DEFAULT_SOURCE_SENSOR,
            max_tank_temperature: Temperature::new(65.0),
            start_hysteresis: 7.0,
            stop_hysteresis: 5.0,
            verbose_logging: false,
        }
    }
}

/// Sparse set of user overrides, as stored next to the device.
///
/// Keys nobody recognises are dropped on the floor; range checking is the
/// job of whoever writes the store.
#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigOverrides {
    pub scan_interval: Option<u32>,
    pub tank_sensor_id: Option<SensorId>,
    pub source_sensor_id: Option<SensorId>,
    pub max_water_temp: Option<Temperature>,
    pub start_hysteresis: Option<f32>,
    pub stop_hysteresis: Option<f32>,
    pub verbose_logging: Option<bool>,
}

impl ConfigOverrides {
    pub fn is_empty(&self) -> bool {
        *self == ConfigOverrides::default()
    }
}

impl CoreConfig {
    /// Defaults with every present override written over them.
    pub fn build(overrides: &ConfigOverrides) -> CoreConfig {
        let defaults = CoreConfig::default();
        CoreConfig {
            scan_interval_seconds: overrides
                .scan_interval
                .unwrap_or(defaults.scan_interval_seconds),
            tank_sensor: overrides.tank_sensor_id.unwrap_or(defaults.tank_sensor),
            source_sensor: overrides.source_sensor_id.unwrap_or(defaults.source_sensor),
            max_tank_temperature: overrides
                .max_water_temp
                .unwrap_or(defaults.max_tank_temperature),
            start_hysteresis: overrides.start_hysteresis.unwrap_or(defaults.start_hysteresis),
            stop_hysteresis: overrides.stop_hysteresis.unwrap_or(defaults.stop_hysteresis),
            verbose_logging: overrides.verbose_logging.unwrap_or(defaults.verbose_logging),
        }
    }

    // The pump oscillates unless it takes a bigger gap to start than to keep running
    pub fn hysteresis_is_ordered(&self) -> bool {
        self.stop_hysteresis < self.start_hysteresis
    }

    pub fn sensors_are_distinct(&self) -> bool {
        self.tank_sensor != self.source_sensor
    }
}

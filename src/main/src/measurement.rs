use embedded_hal::i2c::I2c;
use log::*;

use control::{temperature_from_voltage, CoreConfig, Reading, SensorId, Temperature, TemperatureSensor};

use crate::adc::{Ads1015, AnalogInput};

/// Anything that can sample a single ended analog input in millivolts.
pub trait MillivoltSource {
    fn read_millivolts(&mut self, input: AnalogInput) -> anyhow::Result<f32>;
}

impl<I2C: I2c> MillivoltSource for Ads1015<I2C> {
    fn read_millivolts(&mut self, input: AnalogInput) -> anyhow::Result<f32> {
        self.read(input)
    }
}

// Tank probe on AIN0, source probe on AIN1, whatever ids they answer to
fn wiring(config: &CoreConfig) -> [(SensorId, AnalogInput); 2] {
    [
        (config.tank_sensor, AnalogInput::SingleEndedAni0),
        (config.source_sensor, AnalogInput::SingleEndedAni1),
    ]
}

/// Two NTC probes in voltage dividers: tank on AIN0, source on AIN1.
pub struct ThermistorSensors<A> {
    adc: A,
    channels: [(SensorId, AnalogInput); 2],
    reference_mv: f32,
}

impl<A: MillivoltSource> ThermistorSensors<A> {
    pub fn new(adc: A, config: &CoreConfig, reference_mv: f32) -> Self {
        ThermistorSensors {
            adc,
            channels: wiring(config),
            reference_mv,
        }
    }

    fn channel(&self, sensor: SensorId) -> Option<AnalogInput> {
        self.channels
            .iter()
            .find(|(id, _)| *id == sensor)
            .map(|(_, input)| *input)
    }
}

impl<A: MillivoltSource> TemperatureSensor for ThermistorSensors<A> {
    fn bind(&mut self, config: &CoreConfig) {
        self.channels = wiring(config);
    }

    fn read_temperature(&mut self, sensor: SensorId) -> Reading {
        let Some(input) = self.channel(sensor) else {
            warn!("No probe wired for sensor {:?}", sensor);
            return Reading::failed(sensor);
        };

        let millivolts = match self.adc.read_millivolts(input) {
            Ok(millivolts) => millivolts,
            Err(err) => {
                warn!("Failed to read sensor {:?}: {:#}", sensor, err);
                return Reading::failed(sensor);
            }
        };

        match temperature_from_voltage(self.reference_mv, millivolts) {
            Some(temperature) => {
                debug!("Sensor {:?}: {} mV, {:.1} C", sensor, millivolts, temperature);
                Reading::ok(sensor, Temperature::new(temperature))
            }
            None => {
                warn!("Sensor {:?} reads {} mV, probe open or shorted", sensor, millivolts);
                Reading::failed(sensor)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use control::{DEFAULT_SOURCE_SENSOR, DEFAULT_TANK_SENSOR};

    struct FixedAdc {
        ain0: Option<f32>,
        ain1: Option<f32>,
    }

    impl MillivoltSource for FixedAdc {
        fn read_millivolts(&mut self, input: AnalogInput) -> anyhow::Result<f32> {
            let value = match input {
                AnalogInput::SingleEndedAni0 => self.ain0,
                AnalogInput::SingleEndedAni1 => self.ain1,
            };
            value.ok_or_else(|| anyhow!("no answer on {:?}", input))
        }
    }

    fn sensors(ain0: Option<f32>, ain1: Option<f32>) -> ThermistorSensors<FixedAdc> {
        ThermistorSensors::new(FixedAdc { ain0, ain1 }, &CoreConfig::default(), 3300.0)
    }

    #[test]
    fn test_tank_and_source_map_to_their_channels() {
        let mut sensors = sensors(Some(1650.0), Some(1000.0));

        let tank = sensors.read_temperature(DEFAULT_TANK_SENSOR);
        let source = sensors.read_temperature(DEFAULT_SOURCE_SENSOR);

        assert_eq!(tank, Reading::ok(DEFAULT_TANK_SENSOR, Temperature::new(25.0)));
        assert!(source.value > tank.value, "{:?} > {:?}", source, tank);
    }

    #[test]
    fn test_adc_error_is_failed_reading() {
        let mut sensors = sensors(Some(1650.0), None);
        assert!(sensors.read_temperature(DEFAULT_SOURCE_SENSOR).is_failed());
    }

    #[test]
    fn test_open_probe_is_failed_reading() {
        let mut sensors = sensors(Some(3300.0), Some(0.0));
        assert!(sensors.read_temperature(DEFAULT_TANK_SENSOR).is_failed());
        assert!(sensors.read_temperature(DEFAULT_SOURCE_SENSOR).is_failed());
    }

    #[test]
    fn test_bind_follows_new_sensor_ids() {
        let mut sensors = sensors(Some(1650.0), Some(1000.0));
        let config = CoreConfig {
            tank_sensor: SensorId::new(3),
            source_sensor: SensorId::new(4),
            ..CoreConfig::default()
        };

        sensors.bind(&config);

        let tank = sensors.read_temperature(SensorId::new(3));
        assert_eq!(tank, Reading::ok(SensorId::new(3), Temperature::new(25.0)));
        assert!(!sensors.read_temperature(SensorId::new(4)).is_failed());
        assert!(sensors.read_temperature(DEFAULT_TANK_SENSOR).is_failed());
    }

    #[test]
    fn test_unknown_sensor_is_failed_reading() {
        let mut sensors = sensors(Some(1650.0), Some(1650.0));
        let reading = sensors.read_temperature(SensorId::new(9));
        assert_eq!(reading, Reading::failed(SensorId::new(9)));
    }
}

#![no_std]

use core::fmt;

mod config;
mod pump;
mod state;
mod thermistor;

pub use config::{ConfigOverrides, CoreConfig, DEFAULT_SOURCE_SENSOR, DEFAULT_TANK_SENSOR};
pub use pump::{apply, Actuator, Outcome, TemperatureSensor};
pub use state::{PumpState, Reading, SensorId, Temperature};
pub use thermistor::{temperature_from_resistance, temperature_from_voltage};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PumpAction {
    Start,
    Stop,
    Hold,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FailedSensor {
    Tank(SensorId),
    Source(SensorId),
    Both,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Reason {
    SensorFault(FailedSensor),
    MaximumTemperature,
    DifferenceTooLow,
    SourceHotEnough,
    NoChange,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::SensorFault(FailedSensor::Tank(id)) => {
                write!(f, "tank sensor {} read failed", u16::from(*id))
            }
            Reason::SensorFault(FailedSensor::Source(id)) => {
                write!(f, "source sensor {} read failed", u16::from(*id))
            }
            Reason::SensorFault(FailedSensor::Both) => write!(f, "both sensor reads failed"),
            Reason::MaximumTemperature => write!(f, "maximum temperature reached"),
            Reason::DifferenceTooLow => write!(f, "temperature difference too low"),
            Reason::SourceHotEnough => write!(f, "heating source hot enough"),
            Reason::NoChange => write!(f, "no change"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Decision {
    pub action: PumpAction,
    pub reason: Reason,
}

impl Decision {
    fn new(action: PumpAction, reason: Reason) -> Decision {
        Decision { action, reason }
    }

    pub fn hold(reason: Reason) -> Decision {
        Decision::new(PumpAction::Hold, reason)
    }
}

fn sensor_fault(tank: &Reading, source: &Reading) -> Option<FailedSensor> {
    match (tank.is_failed(), source.is_failed()) {
        (true, true) => Some(FailedSensor::Both),
        (true, false) => Some(FailedSensor::Tank(tank.sensor)),
        (false, true) => Some(FailedSensor::Source(source.sensor)),
        (false, false) => None,
    }
}

/// Decide what the pump should do this tick.
///
/// Rules are checked in priority order: sensor faults, then the tank
/// maximum, then the stop gap, and only then the start gap. Comparisons
/// are exact, so a tank sitting exactly on the maximum is cut off and is
/// never started.
pub fn evaluate(
    tank: &Reading,
    source: &Reading,
    pump: PumpState,
    config: &CoreConfig,
) -> Decision {
    let (tank_temperature, source_temperature) = match (tank.value, source.value) {
        (Some(tank_temperature), Some(source_temperature)) => {
            (f32::from(tank_temperature), f32::from(source_temperature))
        }
        _ => {
            // Fail safe: leave the pump as it is rather than act on a guess
            let failed = sensor_fault(tank, source).unwrap_or(FailedSensor::Both);
            return Decision::hold(Reason::SensorFault(failed));
        }
    };
    let max_temperature = f32::from(config.max_tank_temperature);
    let running = pump.is_running();

    if running && tank_temperature >= max_temperature {
        return Decision::new(PumpAction::Stop, Reason::MaximumTemperature);
    }

    if running && source_temperature <= tank_temperature + config.stop_hysteresis {
        return Decision::new(PumpAction::Stop, Reason::DifferenceTooLow);
    }

    if !running
        && tank_temperature < max_temperature
        && source_temperature >= tank_temperature + config.start_hysteresis
    {
        return Decision::new(PumpAction::Start, Reason::SourceHotEnough);
    }

    Decision::hold(Reason::NoChange)
}

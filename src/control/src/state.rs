use serde::Deserialize;

// Temperature in degrees celcius
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy, Deserialize)]
#[serde(transparent)]
pub struct Temperature(f32);

impl Temperature {
    pub fn new(value: f32) -> Self {
        Self(value)
    }
}

impl From<Temperature> for f32 {
    fn from(value: Temperature) -> f32 {
        value.0
    }
}

// Identifier of a temperature probe, as understood by the sensor collaborator
#[derive(Debug, PartialEq, Eq, Clone, Copy, Deserialize)]
#[serde(transparent)]
pub struct SensorId(u16);

impl SensorId {
    pub const fn new(value: u16) -> Self {
        Self(value)
    }
}

impl From<SensorId> for u16 {
    fn from(value: SensorId) -> u16 {
        value.0
    }
}

/// One temperature sample. A failed read carries no value.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Reading {
    pub sensor: SensorId,
    pub value: Option<Temperature>,
}

impl Reading {
    pub fn ok(sensor: SensorId, value: Temperature) -> Self {
        Self {
            sensor,
            value: Some(value),
        }
    }

    pub fn failed(sensor: SensorId) -> Self {
        Self {
            sensor,
            value: None,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.value.is_none()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PumpState {
    Running,
    Stopped,
}

impl PumpState {
    pub fn is_running(self) -> bool {
        matches!(self, PumpState::Running)
    }
}

impl From<bool> for PumpState {
    fn from(running: bool) -> PumpState {
        if running {
            PumpState::Running
        } else {
            PumpState::Stopped
        }
    }
}

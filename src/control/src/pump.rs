use anyhow::Result;

use crate::config::CoreConfig;
use crate::state::{PumpState, Reading, SensorId};
use crate::{Decision, PumpAction};

/// The relay (or smart switch) driving the circulation pump.
pub trait Actuator {
    /// Current physical state. Queried every tick, never cached by the caller.
    fn is_running(&mut self) -> bool;

    fn set_running(&mut self, on: bool) -> Result<()>;
}

pub trait TemperatureSensor {
    /// Must return within bounded time; an unavailable probe gives [`Reading::failed`].
    fn read_temperature(&mut self, sensor: SensorId) -> Reading;

    /// Follow the sensor ids of the configuration about to be evaluated.
    fn bind(&mut self, _config: &CoreConfig) {}
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Outcome {
    Unchanged,
    Switched(PumpState),
}

/// Hand a decision to the actuator. `Hold` sends nothing.
///
/// A failed command is returned as is; the next tick re-evaluates and
/// will try again if the conditions still call for it.
pub fn apply(decision: &Decision, actuator: &mut impl Actuator) -> Result<Outcome> {
    let target = match decision.action {
        PumpAction::Start => PumpState::Running,
        PumpAction::Stop => PumpState::Stopped,
        PumpAction::Hold => return Ok(Outcome::Unchanged),
    };

    actuator.set_running(target.is_running())?;
    Ok(Outcome::Switched(target))
}

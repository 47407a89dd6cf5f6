use log::*;

use control::{
    apply, evaluate, Actuator, Decision, Outcome, PumpAction, PumpState, Reading, Reason,
    TemperatureSensor,
};

use crate::config::Config;
use crate::sink::EventSink;

/// What one scheduled evaluation ended up doing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    Unchanged(Decision),
    Switched(Decision, PumpState),
    // The actuator refused; the next tick re-evaluates
    CommandFailed(Decision),
}

impl Tick {
    pub fn decision(&self) -> Decision {
        match self {
            Tick::Unchanged(decision)
            | Tick::Switched(decision, _)
            | Tick::CommandFailed(decision) => *decision,
        }
    }
}

/// Runs the decision rule against live collaborators, one tick at a time.
#[derive(Debug, Clone)]
pub struct Controller {
    config: Config,
}

fn describe(reading: &Reading) -> String {
    match reading.value {
        Some(temperature) => format!("{:.1}", f32::from(temperature)),
        None => "--".to_owned(),
    }
}

impl Controller {
    pub fn new(config: Config) -> Self {
        Controller { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Swap in a new configuration. Takes effect from the next tick.
    pub fn reconfigure(&mut self, config: Config) {
        info!("Reconfigured: {:?}", config.core);
        self.config = config;
    }

    pub fn tick(
        &self,
        sensors: &mut impl TemperatureSensor,
        pump: &mut impl Actuator,
        sink: &mut impl EventSink,
    ) -> Tick {
        let core = &self.config.core;

        sensors.bind(core);
        let tank = sensors.read_temperature(core.tank_sensor);
        let source = sensors.read_temperature(core.source_sensor);
        let state = PumpState::from(pump.is_running());

        let decision = evaluate(&tank, &source, state, core);

        if let Reason::SensorFault(_) = decision.reason {
            warn!("Holding pump {:?}: {}", state, decision.reason);
        }
        if core.verbose_logging {
            sink.emit(&format!(
                "tank={} source={} pump={:?} action={:?}: {}",
                describe(&tank),
                describe(&source),
                state,
                decision.action,
                decision.reason
            ));
        }

        match apply(&decision, pump) {
            Ok(Outcome::Unchanged) => Tick::Unchanged(decision),
            Ok(Outcome::Switched(new_state)) => {
                info!("Pump {:?} -> {:?}: {}", state, new_state, decision.reason);
                Tick::Switched(decision, new_state)
            }
            Err(err) => {
                let verb = match decision.action {
                    PumpAction::Start => "start",
                    _ => "stop",
                };
                error!("Failed to {} pump: {:#}", verb, err);
                Tick::CommandFailed(decision)
            }
        }
    }
}

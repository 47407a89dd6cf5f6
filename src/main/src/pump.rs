use anyhow::{anyhow, Result};
use embedded_hal::digital::StatefulOutputPin;
use log::*;

use control::{Actuator, PumpState};

/// Circulation pump switched by a relay on a GPIO output. High is on.
pub struct RelayPump<P> {
    enable: P,
}

impl<P: StatefulOutputPin> RelayPump<P> {
    pub fn new(enable: P) -> Self {
        RelayPump { enable }
    }
}

impl<P: StatefulOutputPin> Actuator for RelayPump<P> {
    fn is_running(&mut self) -> bool {
        // A pin we cannot query is reported as off; switching it again is harmless
        self.enable.is_set_high().unwrap_or_else(|err| {
            warn!("Failed to query pump relay: {:?}", err);
            false
        })
    }

    fn set_running(&mut self, on: bool) -> Result<()> {
        match (on, self.is_running()) {
            (true, false) => {
                info!("Turning on pump output");
                self.enable
                    .set_high()
                    .map_err(|err| anyhow!("Failed to switch pump on: {:?}", err))?;
            }
            (false, true) => {
                info!("Turning off pump output");
                self.enable
                    .set_low()
                    .map_err(|err| anyhow!("Failed to switch pump off: {:?}", err))?;
            }
            (desired_state, _) => {
                info!(
                    "Pump is already in desired state {:?}",
                    PumpState::from(desired_state)
                );
            }
        }
        Ok(())
    }
}

//! Property tests for the decision rule.
//!
//! Host only.

#![cfg(not(target_os = "espidf"))]

use control::{
    evaluate, ConfigOverrides, CoreConfig, PumpAction, PumpState, Reading, Temperature,
    DEFAULT_SOURCE_SENSOR, DEFAULT_TANK_SENSOR,
};
use proptest::prelude::*;

fn arb_pump() -> impl Strategy<Value = PumpState> {
    prop_oneof![Just(PumpState::Running), Just(PumpState::Stopped)]
}

fn arb_reading(sensor: control::SensorId) -> impl Strategy<Value = Reading> {
    prop_oneof![
        1 => Just(Reading::failed(sensor)),
        4 => (-20.0f32..120.0).prop_map(move |t| Reading::ok(sensor, Temperature::new(t))),
    ]
}

// Hysteresis pairs with stop strictly below start
fn arb_config() -> impl Strategy<Value = CoreConfig> {
    (30.0f32..95.0, 0.0f32..10.0, 0.1f32..10.0).prop_map(|(max, stop, extra)| {
        CoreConfig::build(&ConfigOverrides {
            max_water_temp: Some(Temperature::new(max)),
            stop_hysteresis: Some(stop),
            start_hysteresis: Some(stop + extra),
            ..ConfigOverrides::default()
        })
    })
}

fn apply_to(state: PumpState, action: PumpAction) -> PumpState {
    match action {
        PumpAction::Start => PumpState::Running,
        PumpAction::Stop => PumpState::Stopped,
        PumpAction::Hold => state,
    }
}

proptest! {
    #[test]
    fn failed_reading_always_holds(
        tank in arb_reading(DEFAULT_TANK_SENSOR),
        source in arb_reading(DEFAULT_SOURCE_SENSOR),
        pump in arb_pump(),
        config in arb_config(),
    ) {
        prop_assume!(tank.is_failed() || source.is_failed());
        let decision = evaluate(&tank, &source, pump, &config);
        prop_assert_eq!(decision.action, PumpAction::Hold);
    }

    #[test]
    fn evaluation_is_idempotent(
        tank in arb_reading(DEFAULT_TANK_SENSOR),
        source in arb_reading(DEFAULT_SOURCE_SENSOR),
        pump in arb_pump(),
        config in arb_config(),
    ) {
        let first = evaluate(&tank, &source, pump, &config);
        let second = evaluate(&tank, &source, pump, &config);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unchanged_inputs_never_oscillate(
        tank in -20.0f32..120.0,
        source in -20.0f32..120.0,
        pump in arb_pump(),
        config in arb_config(),
    ) {
        let tank = Reading::ok(DEFAULT_TANK_SENSOR, Temperature::new(tank));
        let source = Reading::ok(DEFAULT_SOURCE_SENSOR, Temperature::new(source));

        let first = evaluate(&tank, &source, pump, &config);
        let next_state = apply_to(pump, first.action);
        let second = evaluate(&tank, &source, next_state, &config);

        // Once the pump has followed the first decision, the same readings leave it alone
        prop_assert_eq!(second.action, PumpAction::Hold);
    }

    #[test]
    fn never_starts_at_or_above_maximum(
        over in 0.0f32..40.0,
        source in -20.0f32..160.0,
        pump in arb_pump(),
        config in arb_config(),
    ) {
        let tank = f32::from(config.max_tank_temperature) + over;
        let decision = evaluate(
            &Reading::ok(DEFAULT_TANK_SENSOR, Temperature::new(tank)),
            &Reading::ok(DEFAULT_SOURCE_SENSOR, Temperature::new(source)),
            pump,
            &config,
        );
        prop_assert_ne!(decision.action, PumpAction::Start);
        if pump.is_running() {
            prop_assert_eq!(decision.action, PumpAction::Stop);
        }
    }

    #[test]
    fn starts_when_gap_is_wide_enough(
        tank_below in 0.1f32..60.0,
        gap_above in 0.0f32..30.0,
        config in arb_config(),
    ) {
        let tank = f32::from(config.max_tank_temperature) - tank_below;
        let source = tank + config.start_hysteresis + gap_above;
        let decision = evaluate(
            &Reading::ok(DEFAULT_TANK_SENSOR, Temperature::new(tank)),
            &Reading::ok(DEFAULT_SOURCE_SENSOR, Temperature::new(source)),
            PumpState::Stopped,
            &config,
        );
        prop_assert_eq!(decision.action, PumpAction::Start);
    }

    #[test]
    fn stops_when_gap_closes(
        tank in -20.0f32..120.0,
        gap_below in 0.0f32..30.0,
        config in arb_config(),
    ) {
        let source = tank + config.stop_hysteresis - gap_below;
        let decision = evaluate(
            &Reading::ok(DEFAULT_TANK_SENSOR, Temperature::new(tank)),
            &Reading::ok(DEFAULT_SOURCE_SENSOR, Temperature::new(source)),
            PumpState::Running,
            &config,
        );
        prop_assert_eq!(decision.action, PumpAction::Stop);
    }
}

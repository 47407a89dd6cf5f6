use micromath::F32Ext;

static KELVIN_OFFSET: f32 = 273.15;

pub struct ThermistorProperties {
    beta: f32,
    r1: f32,
    t1: f32,
    // Fixed resistor on the high side of the divider
    series_resistance: f32,
}

// 10k NTC probes as fitted to tank pockets and collector outlets
static THERMISTOR_PROPERTIES: ThermistorProperties = ThermistorProperties {
    beta: 3950.0,
    r1: 10000.0,
    t1: 25.0,
    series_resistance: 10000.0,
};

pub fn temperature_from_resistance(r2: f32) -> f32 {
    //                     1
    // t2 =  ------------------------------
    //           ln(rNtc / r1)        1
    //           -------------   +  ----
    //               beta            t1

    let r1 = THERMISTOR_PROPERTIES.r1;

    if r1 == r2 {
        return THERMISTOR_PROPERTIES.t1;
    }

    let beta = THERMISTOR_PROPERTIES.beta;
    let t1 = THERMISTOR_PROPERTIES.t1 + KELVIN_OFFSET;

    let resistance_ratio = r2 / r1;

    let t2 = 1.0 / ((resistance_ratio.ln() / beta) + (1.0 / t1));

    t2 - KELVIN_OFFSET
}

/// Temperature of the NTC on the low side of a divider fed from `reference_mv`.
///
/// A reading on (or past) either rail means an open or shorted probe and
/// gives `None`.
pub fn temperature_from_voltage(reference_mv: f32, measured_mv: f32) -> Option<f32> {
    if measured_mv <= 0.0 || measured_mv >= reference_mv {
        return None;
    }

    //               Vout
    // rNtc = rs * -----------
    //             Vref - Vout
    let resistance =
        THERMISTOR_PROPERTIES.series_resistance * measured_mv / (reference_mv - measured_mv);

    Some(temperature_from_resistance(resistance))
}

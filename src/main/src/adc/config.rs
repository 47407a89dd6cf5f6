#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalogInput {
    SingleEndedAni0,
    SingleEndedAni1,
}

// PGA 000: +/-6.144 V full scale, the 12 bit result counts in 3 mV steps
const GAIN_FSR_6144: u8 = 0b000 << 1;
pub const MILLIVOLTS_PER_COUNT: f32 = 3.0;

const MODE_SINGLE_SHOT: u8 = 0b1;

const DATA_RATE_1600_SPS: u8 = 0b100 << 5;

// Comparator off: traditional, active low, non-latching, queue disabled
const COMPARATOR_DISABLED: u8 = 0b0_0_0_11;

#[derive(Clone, Copy, Debug)]
pub struct AdcConfig {
    pub address: u8,
}

impl AdcConfig {
    pub fn new(address: u8) -> Self {
        AdcConfig { address }
    }

    /// Config register contents for one conversion of `input`.
    pub fn to_u8_array(&self, input: AnalogInput, begin: bool) -> [u8; 2] {
        let start_bit = u8::from(begin);
        let config_high = start_bit << 7 | u8::from(input) | GAIN_FSR_6144 | MODE_SINGLE_SHOT;
        let config_low = DATA_RATE_1600_SPS | COMPARATOR_DISABLED;

        [config_high, config_low]
    }
}

impl Default for AdcConfig {
    fn default() -> Self {
        AdcConfig::new(0b1001000)
    }
}

impl From<AnalogInput> for u8 {
    fn from(input: AnalogInput) -> u8 {
        let value: u8 = match input {
            AnalogInput::SingleEndedAni0 => 0b100,
            AnalogInput::SingleEndedAni1 => 0b101,
        };
        value << 4
    }
}

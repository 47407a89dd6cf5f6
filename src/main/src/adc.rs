use anyhow::{anyhow, bail, Result};
use embedded_hal::i2c::I2c;

mod config;

pub use config::*;

const CONVERSION_REGISTER: u8 = 0b00;
const CONFIG_REGISTER: u8 = 0b01;

// A conversion takes well under a millisecond at 1600 SPS
const MAX_POLLS: usize = 50;

/// ADS1015 on an I2C bus, doing one single-shot conversion per read.
pub struct Ads1015<I2C> {
    driver: I2C,
    config: AdcConfig,
}

impl<I2C: I2c> Ads1015<I2C> {
    pub fn new(driver: I2C, config: AdcConfig) -> Self {
        Ads1015 { driver, config }
    }

    pub fn read(&mut self, input: AnalogInput) -> Result<f32> {
        let address = self.config.address;
        let config_bytes = self.config.to_u8_array(input, true);
        let write_buffer: [u8; 3] = [CONFIG_REGISTER, config_bytes[0], config_bytes[1]];
        self.driver
            .write(address, &write_buffer)
            .map_err(|err| anyhow!("ADC config write failed: {:?}", err))?;

        for _ in 0..MAX_POLLS {
            let mut buf: [u8; 2] = [0; 2];
            self.driver
                .write_read(address, &[CONFIG_REGISTER], &mut buf)
                .map_err(|err| anyhow!("ADC status read failed: {:?}", err))?;
            if buf[0] >> 7 == 0b1 {
                buf = [0; 2];
                self.driver
                    .write_read(address, &[CONVERSION_REGISTER], &mut buf)
                    .map_err(|err| anyhow!("ADC conversion read failed: {:?}", err))?;
                // 12 bit two's complement, left aligned
                let counts = i16::from_be_bytes(buf) >> 4;
                return Ok(f32::from(counts) * MILLIVOLTS_PER_COUNT);
            }
        }

        bail!("ADC conversion on {:?} did not complete", input)
    }
}

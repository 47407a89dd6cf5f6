use anyhow::Result;
use esp_idf_svc::{
    hal::{
        delay,
        gpio::{AnyOutputPin, PinDriver},
        prelude::{FromValueType, Peripherals},
    },
    nvs::EspDefaultNvsPartition,
    timer::EspTaskTimerService,
};
use log::*;

use circulation_pump::adc::{Ads1015, AdcConfig};
use circulation_pump::config::{adc_settings, Config, NvsStore};
use circulation_pump::i2c;
use circulation_pump::measurement::ThermistorSensors;
use circulation_pump::pump::RelayPump;
use circulation_pump::{Controller, LogSink};

fn main() -> Result<()> {
    // It is necessary to call this function once. Otherwise some patches to the runtime
    // implemented by esp-idf-sys might not link properly. See https://github.com/esp-rs/esp-idf-template/issues/71
    esp_idf_svc::sys::link_patches();

    // Bind the log crate to the ESP Logging facilities
    esp_idf_svc::log::EspLogger::initialize_default();

    let peripherals = Peripherals::take()?;

    // Pump relay must be off before anything else can go wrong
    let pump_enable_pin: AnyOutputPin = peripherals.pins.gpio11.into();
    let mut pump_enable = PinDriver::output(pump_enable_pin)?;
    pump_enable.set_low()?;
    let mut pump = RelayPump::new(pump_enable);

    let mut store = NvsStore::new(EspDefaultNvsPartition::take()?)?;
    let config = Config::load(&mut store);

    let (adc_address, adc_reference_mv) = adc_settings();
    let i2c = peripherals.i2c0;
    let sda = peripherals.pins.gpio6;
    let scl = peripherals.pins.gpio7;
    let i2c_driver = i2c::init_i2c_driver(i2c, sda.into(), scl.into(), 100.kHz().into())?;
    let adc = Ads1015::new(i2c_driver, AdcConfig::new(adc_address));
    let mut sensors = ThermistorSensors::new(adc, &config.core, adc_reference_mv);

    let controller = Controller::new(config);
    let mut sink = LogSink;

    // The timer service runs one callback at a time, so ticks never overlap
    let timer_service = EspTaskTimerService::new()?;
    let scan_timer = timer_service.timer(move || {
        let tick = controller.tick(&mut sensors, &mut pump, &mut sink);
        debug!("Tick finished: {:?}", tick);
    })?;

    info!("Evaluating every {:?}", config.scan_interval);
    scan_timer.every(config.scan_interval)?;

    loop {
        // fixme we should go into a low-power state until reacting to an event
        delay::FreeRtos::delay_ms(1000);
    }
}

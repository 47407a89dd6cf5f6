//! Differential-temperature pump controller firmware.
//!
//! The decision logic lives in the `control` crate. This crate wires it to
//! the outside world: the override store, the temperature probes, the pump
//! relay and the log. Everything that only makes sense on the device is
//! behind the `espidf` feature, the rest builds and tests on a host.

#![deny(unused_must_use)]

pub mod adc;
pub mod config;
pub mod controller;
pub mod measurement;
pub mod pump;
pub mod sink;

#[cfg(feature = "espidf")]
pub mod i2c;

pub use config::Config;
pub use controller::{Controller, Tick};
pub use sink::{EventSink, LogSink};

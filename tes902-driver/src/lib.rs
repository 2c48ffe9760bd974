//! Receive driver for the TES902 CO₂ sensor
//!
//! The TES902 reports CO₂ concentration over a 9600 baud UART link using
//! the frame format implemented in `tes902-protocol`. This crate provides
//! the transport-agnostic receive path:
//!
//! - [`ByteSource`] and [`MeasurementSink`] traits as the seams toward
//!   the host's UART peripheral and data consumer
//! - [`Tes902Driver`], which drains a byte source, feeds the frame
//!   parser and publishes decoded readings
//! - Link configuration with validation of the sensor's fixed settings
//!
//! The driver never blocks: [`Tes902Driver::poll`] processes exactly the
//! bytes that are already waiting and returns. Scheduling of the polls is
//! the host's concern.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod receiver;
pub mod traits;

pub use config::{ConfigError, Tes902Config, BAUD_RATE};
pub use receiver::{LinkStats, Tes902Driver};
pub use traits::{ByteSource, MeasurementSink};

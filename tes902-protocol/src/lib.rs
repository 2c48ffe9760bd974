//! TES902 CO₂ Sensor UART Protocol
//!
//! This crate implements the wire protocol the TES902 sensor uses to
//! report readings over its 9600 baud serial link. The sensor answers
//! periodic polls; the host only ever receives.
//!
//! # Protocol Overview
//!
//! All responses use a simple binary frame format:
//! ```text
//! ┌───────┬───────┬──────┬────────┬─────────┬────────────────┐
//! │ SYNC1 │ SYNC2 │ TYPE │ LENGTH │ PAYLOAD │ CRC-16 (lo,hi) │
//! │ 0xBB  │ 0x66  │ 1B   │ 1B     │ 0–6B    │ 2B             │
//! └───────┴───────┴──────┴────────┴─────────┴────────────────┘
//! ```
//!
//! The CRC-16 covers TYPE, LENGTH and PAYLOAD; the sync pair is a framing
//! marker only. The parser consumes one byte per call and resynchronizes
//! after any amount of line noise.

#![no_std]
#![deny(unsafe_code)]

pub mod crc;
pub mod frame;
pub mod response;

pub use crc::crc16;
pub use frame::{
    Frame, FrameError, FrameParser, MAX_BUFFER_SIZE, MAX_FRAME_SIZE, MAX_PAYLOAD_SIZE, SYNC1,
    SYNC2,
};
pub use response::{Measurement, RESP_MEASUREMENT};

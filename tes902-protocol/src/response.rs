//! Typed responses decoded from TES902 frames.
//!
//! The sensor answers each poll with a measurement frame. Only the
//! response types listed here are decoded; a structurally valid,
//! checksum-correct frame of any other type is simply not forwarded.

use crate::frame::{Frame, FrameError};

/// Response type carrying a CO₂ measurement
pub const RESP_MEASUREMENT: u8 = 0x15;

/// A decoded CO₂ reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// CO₂ concentration in parts per million
    pub co2_ppm: u16,
}

impl Measurement {
    /// Decode a measurement from a verified frame
    ///
    /// The reading is the first two payload bytes, little-endian; any
    /// payload bytes after it are ignored. Returns `None` for response
    /// types this crate does not understand and for measurement frames
    /// whose payload is shorter than the reading.
    pub fn from_frame(frame: &Frame) -> Option<Self> {
        if frame.resp_type != RESP_MEASUREMENT || frame.payload.len() < 2 {
            return None;
        }

        Some(Self {
            co2_ppm: u16::from_le_bytes([frame.payload[0], frame.payload[1]]),
        })
    }

    /// Encode this measurement into a frame (for testing or simulation)
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        Frame::new(RESP_MEASUREMENT, &self.co2_ppm.to_le_bytes())
    }
}

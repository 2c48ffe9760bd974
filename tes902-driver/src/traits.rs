//! Host integration traits
//!
//! These traits define the seams between the driver and the host: where
//! received bytes come from and where decoded readings go.

use tes902_protocol::Measurement;

/// Non-blocking byte supply from the UART receive side
pub trait ByteSource {
    /// Take the next received byte, or `None` when nothing is waiting.
    ///
    /// Must not block. The driver calls this repeatedly and stops at the
    /// first `None`.
    fn read_byte(&mut self) -> Option<u8>;
}

/// Destination for decoded sensor readings
pub trait MeasurementSink {
    /// Publish one reading.
    ///
    /// Called at most once per checksum-verified measurement frame.
    fn publish(&mut self, measurement: Measurement);
}

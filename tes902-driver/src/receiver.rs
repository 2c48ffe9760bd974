//! Frame reception and measurement publication.
//!
//! One [`Tes902Driver`] owns the parser state for one UART stream. The
//! host calls [`Tes902Driver::poll`] whenever bytes may be waiting; the
//! driver drains the source without blocking and publishes every
//! verified measurement frame to the sink.

use tes902_protocol::{FrameError, FrameParser, Measurement};

use crate::config::{ConfigError, Tes902Config};
use crate::traits::{ByteSource, MeasurementSink};

/// Diagnostic counters for one receive stream
///
/// None of these conditions is fatal; the counters exist so the host can
/// surface link quality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkStats {
    /// Frames that passed the checksum
    pub frames_ok: u32,
    /// Candidate frames dropped on a checksum mismatch
    pub crc_errors: u32,
    /// Candidate frames dropped for malformed structure
    /// (declared length beyond buffer capacity)
    pub malformed: u32,
    /// Verified frames skipped because their type is not decoded
    pub ignored: u32,
}

/// Receive driver for one TES902 stream
pub struct Tes902Driver<S> {
    source: S,
    parser: FrameParser,
    config: Tes902Config,
    stats: LinkStats,
}

impl<S: ByteSource> Tes902Driver<S> {
    /// Create a driver with the default link configuration
    pub fn new(source: S) -> Self {
        Self {
            source,
            parser: FrameParser::new(),
            config: Tes902Config::default(),
            stats: LinkStats::default(),
        }
    }

    /// Create a driver after validating a host-supplied configuration
    pub fn with_config(source: S, config: Tes902Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            source,
            parser: FrameParser::new(),
            config,
            stats: LinkStats::default(),
        })
    }

    /// Drain the byte source and publish decoded measurements
    ///
    /// Feeds every byte currently waiting into the frame parser and
    /// returns once the source runs dry; never blocks. Each verified
    /// measurement frame is published exactly once, in arrival order.
    pub fn poll(&mut self, sink: &mut impl MeasurementSink) {
        while let Some(byte) = self.source.read_byte() {
            match self.parser.feed(byte) {
                Ok(Some(frame)) => {
                    self.stats.frames_ok += 1;
                    match Measurement::from_frame(&frame) {
                        Some(measurement) => sink.publish(measurement),
                        None => self.stats.ignored += 1,
                    }
                }
                Ok(None) => {}
                Err(FrameError::InvalidChecksum { .. }) => self.stats.crc_errors += 1,
                Err(_) => self.stats.malformed += 1,
            }
        }
    }

    /// Diagnostic counters accumulated since creation
    pub fn stats(&self) -> LinkStats {
        self.stats
    }

    /// The link configuration this driver was created with
    pub fn config(&self) -> &Tes902Config {
        &self.config
    }
}

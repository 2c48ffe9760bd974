//! Link configuration for the TES902.
//!
//! The sensor ships with fixed UART settings that the host cannot
//! negotiate. Validating here turns a mis-configured transport into a
//! construction-time error instead of silent framing noise.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// UART baud rate the sensor is hard-wired to
pub const BAUD_RATE: u32 = 9_600;

/// Default polling interval in milliseconds
pub const DEFAULT_UPDATE_INTERVAL_MS: u32 = 10_000;

/// Errors from configuration validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The sensor only speaks 9600 baud
    UnsupportedBaudRate,
    /// The update interval must be nonzero
    ZeroUpdateInterval,
}

/// Host-facing configuration for one sensor link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tes902Config {
    /// UART baud rate; must match [`BAUD_RATE`]
    pub baudrate: u32,
    /// How often the host scheduler should poll for new readings
    pub update_interval_ms: u32,
}

impl Default for Tes902Config {
    fn default() -> Self {
        Self {
            baudrate: BAUD_RATE,
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
        }
    }
}

impl Tes902Config {
    /// Check the configuration against what the sensor supports
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.baudrate != BAUD_RATE {
            return Err(ConfigError::UnsupportedBaudRate);
        }
        if self.update_interval_ms == 0 {
            return Err(ConfigError::ZeroUpdateInterval);
        }
        Ok(())
    }
}

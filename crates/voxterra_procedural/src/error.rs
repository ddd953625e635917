//! # World Error Types
//!
//! Everything that can go wrong is a configuration problem caught before
//! a grid is allocated. Out-of-bounds access is not an error.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when configuring a world.
#[derive(Error, Debug)]
pub enum WorldError {
    /// Width or height was zero.
    #[error("invalid world dimensions: width {width}, height {height} (both must be positive)")]
    InvalidDimensions {
        /// Requested X/Z extent.
        width: u32,
        /// Requested Y extent.
        height: u32,
    },

    /// Noise scale was zero, negative or not finite.
    #[error("invalid noise scale {0}: must be finite and positive")]
    InvalidScale(f64),

    /// A fractional option fell outside [0, 1].
    #[error("invalid option {name} = {value}: must be within [0, 1]")]
    InvalidOption {
        /// Option name.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// The grid would not fit in memory on this platform.
    #[error("world of {width}x{height}x{width} cells is too large")]
    TooLarge {
        /// Requested X/Z extent.
        width: u32,
        /// Requested Y extent.
        height: u32,
    },

    /// Config file was not valid TOML for a world.
    #[error("invalid world config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config file could not be read.
    #[error("failed to read world config {}: {source}", .path.display())]
    ConfigRead {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for world operations.
pub type WorldResult<T> = Result<T, WorldError>;

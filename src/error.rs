//! Error types for the crate
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and controller bring-up ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration or frame buffer construction
//! - [`Error`] - Errors during controller setup
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level bus errors
//!
//! Commands never return errors. Unrecognized input is defaulted and
//! dropped commands are silent, so only setup can fail.
//!
//! ## Example
//!
//! ```
//! use robo_eyes::{Builder, BuilderError, Dimensions};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Height must be a whole number of pages
//! let result = Dimensions::new(128, 60);
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Maximum column count of the SH1106 display RAM
///
/// NOTE: Most modules only wire 128 of the 132 columns; the remainder is
/// skipped with the interface's column offset.
pub const MAX_COLUMNS: u16 = 132;

/// Maximum row count supported by the SH1106 controller
pub const MAX_ROWS: u16 = 64;

/// Errors that can occur while bringing up the controller
///
/// Generic over the interface type to preserve the specific error type.
pub enum Error<I: DisplayInterface> {
    /// Interface error (bus NACK, wiring, ...)
    ///
    /// Wraps the underlying error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// Setup already ran once for this boot
    ///
    /// A failed probe is not retried; the controller stays uninitialized
    /// until the device restarts.
    SetupAlreadyAttempted,
}

impl<I: DisplayInterface> core::fmt::Debug for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => f.debug_tuple("Interface").field(e).finish(),
            Self::SetupAlreadyAttempted => write!(f, "SetupAlreadyAttempted"),
        }
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::SetupAlreadyAttempted => write!(f, "Setup already attempted"),
        }
    }
}

impl<I: DisplayInterface> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width in pixels requested
        width: u16,
        /// Height in pixels requested
        height: u16,
    },
    /// Frame buffer is too small for the display
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_COLUMNS}x{MAX_ROWS}, height must be multiple of 8)"
            ),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
        }
    }
}

impl core::error::Error for BuilderError {}

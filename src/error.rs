//! Error types for sampling and plotting waveforms
//!
//! This module defines the failures encountered when sampling the comparison
//! signals or rendering them, along with a convenient `Result` alias.

/// Errors that can occur while sampling or rendering a waveform.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Cannot sample a waveform with this many points.
    ///
    /// At least one sample is required; a single sample is pinned to the start of the domain.
    #[error("Cannot sample a waveform with {0} points; at least 1 is required")]
    InvalidSampleCount(usize),

    /// A numeric value could not be cast to the target type. This is usually a custom type much smaller than f64/f32
    #[error("Failed to cast value to target type")]
    CastFailed,

    /// The plotting backend failed to draw or present the chart, including when no display is available.
    ///
    /// Backend errors borrow the drawing root, so they are carried as text.
    #[error("Failed to render plot: {0}")]
    Render(String),
}

/// Result type for waveform sampling and plotting
pub type Result<T> = std::result::Result<T, Error>;

//! # sinecmp
//! ## How much flatter is sin⁴ than sin?
//!
//! Samples `sin(x)` and `sin(x)^4` over `[0, π]` and draws them on one chart so the two
//! shapes can be compared by eye: the fourth power keeps the peak at `π/2` but hugs zero
//! for much longer on either side.
//!
//! The simplest use-case is a single call (needs the `window` feature and a display):
//! ```rust,ignore
//! // Opens a window with the chart and returns once it is closed
//! sinecmp::plot_sine_vs_sine_squared(100).expect("Failed to plot");
//! ```
//!
//! # Core Concepts
//! - A [`Waveform`] is the sampled data: a domain of `N` evenly spaced points from `0` to `π`
//!   inclusive, `sin(x)` at each point, and `sin(x)^4` at each point.
//!     - Sampling is pure and deterministic; the same `N` always gives the same values.
//!     - `N = 1` gives a single sample at `x = 0`; `N = 0` is an error.
//! - A [`plotting::PlotBackend`] turns labelled series into a picture.
//!     - `plotting::plotters::Backend` draws with `plotters` into a PNG file or an in-memory frame
//!       (`plotting` feature, on by default).
//!     - `plotting::window::Backend` draws the same chart and shows it in an SDL2 window
//!       (`window` feature, needs the SDL2 library).
//!     - Implement the trait yourself to draw into a UI or capture the calls in tests.
//! - [`render_comparison`] draws a waveform's two signals with any backend.
//!
//! # Implementation Details
//!
//! Sampling is generic over [`value::Value`], which builds on `nalgebra`'s `RealField`;
//! the top-level plot uses `f64`.
//!
//! Logging goes through the `log` facade. Nothing is printed unless the host installs a logger.
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)] // I don't care about this one
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod test;

#[cfg(feature = "plotting")]
#[cfg_attr(docsrs, doc(cfg(feature = "plotting")))]
pub mod plotting;

pub mod error;
pub mod value;

mod waveform;

pub use waveform::{Waveform, DERIVED_LABEL, DERIVED_POWER, PRIMARY_LABEL};

pub use nalgebra;

/// Sample count used by the `sine_plot` binary when none is given
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Draw both signals of a waveform onto a backend root, labelled `sin(x)` and `sin(x)^4`.
///
/// Axis ranges come from the primary signal unless `options` overrides them;
/// `sin(x)^4` never leaves the range of `sin(x)` on `[0, π]`.
///
/// # Errors
/// Returns [`error::Error::Render`] if the backend fails at any step.
#[cfg(feature = "plotting")]
#[cfg_attr(docsrs, doc(cfg(feature = "plotting")))]
pub fn render_comparison<P, T>(
    root: P::Root,
    waveform: &Waveform<T>,
    options: plotting::PlotOptions<T>,
) -> error::Result<()>
where
    P: plotting::PlotBackend,
    T: value::Value,
{
    let render = |e: P::Error| error::Error::Render(e.to_string());

    let [primary, derived] = waveform.points();
    let mut plot = plotting::Plot::<P, T>::new(root, options, &primary).map_err(render)?;
    plot.with_element(&derived).map_err(render)?;
    plot.finish().map_err(render)
}

/// Plot `sin(x)` and `sin(x)^4` over `[0, π]` with `length` samples each.
///
/// The chart is wide (1000 × 600), has a legend, a grid, `x (radians)` on the x-axis and
/// `Amplitude` on the y-axis. It is shown in a window, and this call blocks until the
/// window is closed. Nothing is written to disk.
///
/// # Errors
/// - [`error::Error::InvalidSampleCount`] if `length` is zero; nothing is drawn.
/// - [`error::Error::Render`] if drawing fails or no display is available.
#[cfg(feature = "window")]
#[cfg_attr(docsrs, doc(cfg(feature = "window")))]
pub fn plot_sine_vs_sine_squared(length: usize) -> error::Result<()> {
    let waveform = Waveform::<f64>::sample(length)?;

    let options = plotting::PlotOptions::comparison();
    let window = plotting::window::Window::new(options.title.clone());
    render_comparison::<plotting::window::Backend, _>(window, &waveform, options)?;

    log::info!("Plotted {length} samples of sin(x) and sin(x)^4");
    Ok(())
}

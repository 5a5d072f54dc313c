//! Utilities for plotting waveforms and other series
//!
//! Mainly used through [`crate::render_comparison`], or [`crate::plot_sine_vs_sine_squared`]
//! with the `window` feature.
//!
//! You can also use the [`Plot`] struct directly for more control, with any [`PlotBackend`]
//! (I also expose [`plotters`] directly)

use std::ops::Range;

use crate::value::Value;

mod backend;
pub use backend::*;

mod element;
pub use element::*;

mod palette;
pub use palette::ColorSource;

/// Options for plotting
#[derive(Debug, Clone)]
pub struct PlotOptions<T>
where
    T: Value,
{
    /// Caption for the plot
    pub title: String,

    /// X-axis label
    pub x_label: Option<String>,

    /// Y-axis label
    pub y_label: Option<String>,

    /// Size of the chart in pixels
    pub size: (u32, u32),

    /// X-axis range; bounds given in the wrong order are swapped
    pub x_range: Option<Range<T>>,

    /// Y-axis range; bounds given in the wrong order are swapped
    pub y_range: Option<Range<T>>,

    /// Stroke width of each line, in pixels
    pub line_width: u32,

    /// Whether to hide the legend
    pub hide_legend: bool,

    /// Whether to draw the background grid
    pub show_grid: bool,
}
impl<T: Value> Default for PlotOptions<T> {
    fn default() -> Self {
        Self {
            title: "Graph Output".into(),
            x_label: None,
            y_label: None,
            size: (1000, 600),
            x_range: None,
            y_range: None,
            line_width: 2,

            hide_legend: false,
            show_grid: true,
        }
    }
}
impl<T: Value> PlotOptions<T> {
    /// Options for the `sin(x)` vs `sin(x)^4` comparison chart
    ///
    /// Wide canvas, both axes labelled, legend and grid shown.
    #[must_use]
    pub fn comparison() -> Self {
        Self {
            title: "sin(x) vs sin(x)^4".into(),
            x_label: Some("x (radians)".into()),
            y_label: Some("Amplitude".into()),
            ..Default::default()
        }
    }
}

/// A plot of one or more elements (signals, data, etc) using a given backend.
#[allow(clippy::struct_field_names)]
pub struct Plot<P, T>
where
    P: PlotBackend,
    T: Value,
{
    plot: P,
    options: PlotOptions<T>,
}

impl<P, T> Plot<P, T>
where
    P: PlotBackend,
    T: Value,
{
    /// Create a new plot with the given root, options, and primary element.
    /// The primary element is used to determine the axis ranges if they are not specified in the options,
    /// or if the ones specified are empty, NaN or infinite.
    ///
    /// # Errors
    /// Returns an error if the plot cannot be created.
    pub fn new(
        root: P::Root,
        options: PlotOptions<T>,
        function: &impl AsPlottingElement<T>,
    ) -> Result<Self, P::Error> {
        let prime = function.as_plotting_element();

        //
        // Range overrides
        let x_range = axis_range(options.x_range.clone(), || prime.x_range());
        let y_range = axis_range(options.y_range.clone(), || prime.y_range());

        let mut plot = P::new_plot(root, &options, x_range, y_range)?;
        log::debug!("Adding series '{}' ({} points)", prime.label(), prime.points().len());
        plot.add_element(&prime, options.line_width)?;
        Ok(Self { plot, options })
    }

    /// Add another plotting element to this plot.
    ///
    /// # Errors
    /// Returns an error if the element cannot be added.
    pub fn with_element(
        &mut self,
        element: &impl AsPlottingElement<T>,
    ) -> Result<&mut Self, P::Error> {
        let element = element.as_plotting_element();
        log::debug!("Adding series '{}' ({} points)", element.label(), element.points().len());
        self.plot.add_element(&element, self.options.line_width)?;
        Ok(self)
    }

    /// Finalize the plot and present it on the backend's root.
    ///
    /// # Errors
    /// Returns an error if the plot cannot be finalized.
    pub fn finish(self) -> Result<(), P::Error> {
        self.plot.finalize()
    }
}

/// An axis range override, in ascending order, or the fallback if it cannot be drawn
fn axis_range<T: Value>(range: Option<Range<T>>, fallback: impl FnOnce() -> Range<T>) -> Range<T> {
    let Some(range) = range else {
        return fallback();
    };

    let finite = num_traits::float::FloatCore::is_finite(range.start)
        && num_traits::float::FloatCore::is_finite(range.end);
    if !finite || range.start == range.end {
        log::warn!("Ignoring axis range {:e}..{:e}", range.start, range.end);
        return fallback();
    }

    if range.start < range.end {
        range
    } else {
        range.end..range.start
    }
}

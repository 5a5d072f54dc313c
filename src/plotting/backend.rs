use std::ops::Range;

use crate::{
    plotting::{PlotOptions, PlottingElement},
    value::Value,
};

pub mod plotters;

#[cfg(feature = "window")]
#[cfg_attr(docsrs, doc(cfg(feature = "window")))]
pub mod window;

/// Trait for plot backends
///
/// A backend owns its drawing root for the lifetime of one plot, receives the
/// series to draw, and presents the finished chart in [`PlotBackend::finalize`].
pub trait PlotBackend {
    /// Error type for the plot backend
    type Error: std::error::Error;

    /// Root type for the plot backend
    type Root;

    /// Color type for the plot backend
    type Color: Clone;

    /// Get the next color in the palette
    fn next_color(&mut self) -> Self::Color;

    /// Create a new plot on the given root, with labels and layout from `options`
    ///
    /// `x_range` and `y_range` are the final axis ranges; any overrides in
    /// `options` have already been applied.
    ///
    /// # Errors
    /// Returns an error if the plot cannot be created.
    fn new_plot<T: Value>(
        root: Self::Root,
        options: &PlotOptions<T>,
        x_range: Range<T>,
        y_range: Range<T>,
    ) -> Result<Self, Self::Error>
    where
        Self: Sized;

    /// Add a line to the plot
    ///
    /// # Errors
    /// Returns an error if the plot cannot be modified.
    fn add_line<T: Value>(
        &mut self,
        data: &[(T, T)],
        label: &str,
        width: u32,
        color: Self::Color,
    ) -> Result<(), Self::Error>;

    /// Finalize the plot: axes, grid, legend, and presenting the result
    ///
    /// # Errors
    /// Returns an error if the plot cannot be drawn.
    fn finalize(self) -> Result<(), Self::Error>;

    /// Add a plotting element to the plot
    ///
    /// # Errors
    /// Returns an error if the element cannot be drawn.
    fn add_element<T: Value>(
        &mut self,
        element: &PlottingElement<T>,
        width: u32,
    ) -> Result<(), Self::Error> {
        let color = self.next_color();
        self.add_line(element.points(), element.label(), width, color)
    }
}

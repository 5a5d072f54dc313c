use std::ops::Range;

use crate::{
    value::{CoordExt, Value},
    Waveform,
};

/// Elements that can be plotted
#[derive(Debug, Clone, PartialEq)]
pub enum PlottingElement<T: Value> {
    /// A named signal evaluated over a domain
    ///
    /// (points, label)
    Signal(Vec<(T, T)>, String),

    /// Raw data points
    Data(Vec<(T, T)>, Option<String>),
}
impl<T: Value> PlottingElement<T> {
    /// Creates a new plotting element from a labelled signal
    pub fn from_signal(data: impl Iterator<Item = (T, T)>, label: impl Into<String>) -> Self {
        Self::Signal(data.collect(), label.into())
    }

    /// Creates a new plotting element from raw data
    pub fn from_data(data: impl Iterator<Item = (T, T)>, label: Option<String>) -> Self {
        Self::Data(data.collect(), label)
    }

    /// Returns the points of this element
    #[must_use]
    pub fn points(&self) -> &[(T, T)] {
        match self {
            PlottingElement::Signal(data, _) | PlottingElement::Data(data, _) => data,
        }
    }

    /// Returns the legend label for this element
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            PlottingElement::Signal(_, label) => label,
            PlottingElement::Data(_, label) => label.as_deref().unwrap_or("Data"),
        }
    }

    /// Returns the x-axis range for this element
    ///
    /// A single point is widened to one unit to the right of it.
    #[must_use]
    pub fn x_range(&self) -> Range<T> {
        match self.points().x_range() {
            Some(r) if r.start < r.end => r,
            Some(r) => r.start..(r.start + T::one()),
            None => T::zero()..T::one(),
        }
    }

    /// Returns the y-axis range for this element, padded by 5% of its span
    ///
    /// A flat signal is padded by one unit on each side.
    #[must_use]
    pub fn y_range(&self) -> Range<T> {
        let Some(range) = self.points().y_range() else {
            return T::zero()..T::one();
        };

        let span = range.end - range.start;
        let padding = if span > T::zero() {
            span / T::try_cast(20).unwrap_or(T::one())
        } else {
            T::one()
        };
        (range.start - padding)..(range.end + padding)
    }
}

/// A trait for types that can be converted to a plotting element
pub trait AsPlottingElement<T: Value> {
    /// Converts this to a plotting element
    fn as_plotting_element(&self) -> PlottingElement<T>;
}

impl<T: Value> AsPlottingElement<T> for PlottingElement<T> {
    fn as_plotting_element(&self) -> PlottingElement<T> {
        self.clone()
    }
}

impl<T: Value> AsPlottingElement<T> for &[(T, T)] {
    fn as_plotting_element(&self) -> PlottingElement<T> {
        PlottingElement::from_data(self.iter().copied(), None)
    }
}

impl<T: Value> AsPlottingElement<T> for Vec<(T, T)> {
    fn as_plotting_element(&self) -> PlottingElement<T> {
        PlottingElement::Data(self.clone(), None)
    }
}

impl<T: Value> AsPlottingElement<T> for (&[(T, T)], &str) {
    fn as_plotting_element(&self) -> PlottingElement<T> {
        PlottingElement::Signal(self.0.to_vec(), self.1.to_string())
    }
}

impl<T: Value> AsPlottingElement<T> for (Vec<(T, T)>, &str) {
    fn as_plotting_element(&self) -> PlottingElement<T> {
        PlottingElement::Signal(self.0.clone(), self.1.to_string())
    }
}

/// The primary signal of a waveform, `sin(x)`
impl<T: Value> AsPlottingElement<T> for Waveform<T> {
    fn as_plotting_element(&self) -> PlottingElement<T> {
        PlottingElement::Signal(self.primary_points(), crate::waveform::PRIMARY_LABEL.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_close;

    #[test]
    fn test_ranges() {
        let element = PlottingElement::from_signal([(0.0, 0.0), (2.0, 1.0)].into_iter(), "s");
        assert_eq!(element.x_range(), 0.0..2.0);

        let y = element.y_range();
        assert_close!(y.start, -0.05);
        assert_close!(y.end, 1.05);
    }

    #[test]
    fn test_degenerate_ranges() {
        let element = PlottingElement::from_signal(std::iter::once((0.0, 0.0)), "s");
        assert_eq!(element.x_range(), 0.0..1.0);
        assert_eq!(element.y_range(), -1.0..1.0);

        let empty = PlottingElement::<f64>::from_data(std::iter::empty(), None);
        assert_eq!(empty.x_range(), 0.0..1.0);
        assert_eq!(empty.y_range(), 0.0..1.0);
        assert_eq!(empty.label(), "Data");
    }

    #[test]
    fn test_waveform_element() {
        let wave = Waveform::<f64>::sample(3).unwrap();
        let element = wave.as_plotting_element();
        assert_eq!(element.label(), "sin(x)");
        assert_eq!(element.points(), wave.primary_points().as_slice());
    }
}

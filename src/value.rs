//! Numeric types and iteration utilities for sampled signals.
//!
//! This module defines the [`Value`] trait, which abstracts the numeric
//! types that can be used when sampling and plotting waveforms, ensuring
//! compatibility with nalgebra, floating-point operations, and formatting.
//!
//! # Traits
//!
//! - [`Value`]: Extends `FloatCore`, `Scalar`, and `RealField` to provide:
//!   - `try_cast` for safe type conversion with error handling.
//!   - `machine_epsilon` for tolerance checks.
//!   - `sin` and `powi` without the method ambiguity of the underlying traits.
//! - [`CoordExt`]: Accessors and ranges over sequences of `(x, y)` points.
//!
//! # Iterators
//!
//! - [`LinearSpace`]: A fixed number of evenly spaced values over a closed interval,
//!   useful for generating the domain a signal is evaluated on.
//!
//! # Example
//!
//! ```rust
//! use sinecmp::value::LinearSpace;
//!
//! // 5 values from 0.0 to 1.0 inclusive
//! let space = LinearSpace::new(0.0..=1.0, 5).unwrap();
//! let values: Vec<f64> = space.collect();
//! assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
//! ```
use std::ops::{Range, RangeInclusive};

use crate::error::{Error, Result};

/// Numeric type for signals
pub trait Value:
    nalgebra::Scalar
    + nalgebra::ComplexField<RealField = Self>
    + nalgebra::RealField
    + num_traits::float::FloatCore
    + std::fmt::LowerExp
{
    /// Tries to cast a value to the target type
    ///
    /// # Errors
    /// Returns an error if the cast fails
    fn try_cast<U: num_traits::NumCast>(n: U) -> Result<Self> {
        num_traits::cast(n).ok_or(Error::CastFailed)
    }

    /// Machine epsilon for the type
    #[must_use]
    fn machine_epsilon() -> Self {
        <Self as num_traits::float::FloatCore>::epsilon()
    }

    /// Sine of the value, in radians
    #[must_use]
    fn sin(self) -> Self {
        nalgebra::ComplexField::sin(self)
    }

    /// Raises the value to the power of an integer
    #[must_use]
    fn powi(self, n: i32) -> Self {
        nalgebra::ComplexField::powi(self, n)
    }

    /// Get the absolute value for a numeric type
    #[must_use]
    fn abs(self) -> Self {
        nalgebra::ComplexField::abs(self)
    }

    /// Returns the absolute difference between two values.
    #[must_use]
    fn abs_sub(self, other: Self) -> Self {
        nalgebra::ComplexField::abs(self - other)
    }
}

impl<T> Value for T where
    T: nalgebra::Scalar
        + nalgebra::ComplexField<RealField = Self>
        + nalgebra::RealField
        + num_traits::float::FloatCore
        + std::fmt::LowerExp
{
}

/// Iterator over a fixed number of evenly spaced values in a closed interval.
///
/// Yields `count` values starting at `range.start()`. With more than one value the
/// last one is exactly `range.end()`; with a single value only the start is yielded.
#[derive(Debug, Clone)]
pub struct LinearSpace<T: Value> {
    start: T,
    end: T,
    step: T,
    count: usize,
    index: usize,
}
impl<T: Value> LinearSpace<T> {
    /// Creates a new iterator over `count` evenly spaced values in `range`
    ///
    /// # Errors
    /// Returns [`Error::InvalidSampleCount`] if `count` is zero, or [`Error::CastFailed`]
    /// if the count cannot be represented as `T`.
    pub fn new(range: RangeInclusive<T>, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(Error::InvalidSampleCount(count));
        }

        let (start, end) = range.into_inner();
        let step = if count > 1 {
            (end - start) / T::try_cast(count - 1)?
        } else {
            T::zero()
        };

        Ok(Self {
            start,
            end,
            step,
            count,
            index: 0,
        })
    }

    /// Distance between consecutive values
    pub fn step(&self) -> T {
        self.step
    }

    /// Value at the given position, without advancing the iterator
    fn value_at(&self, index: usize) -> Option<T> {
        match index {
            i if i >= self.count => None,
            0 => Some(self.start),
            i if i == self.count - 1 => Some(self.end),
            i => Some(self.start + T::try_cast(i).ok()? * self.step),
        }
    }
}
impl<T: Value> Iterator for LinearSpace<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.value_at(self.index)?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}
impl<T: Value> ExactSizeIterator for LinearSpace<T> {}

/// Extension trait for accessing the `x` and `y` coordinates of a type.
///
/// This trait is intended for any type that conceptually represents a sequence of
/// 2D points. Implementations provide iterators over the respective coordinates.
///
/// # Examples
///
/// ```
/// # use sinecmp::value::CoordExt;
/// let data = vec![(1.5, -2.0), (2.0, 3.0), (0.0, 1.0)];
/// assert_eq!(data.y_range(), Some(-2.0..3.0));
/// assert_eq!(data.x_range(), Some(0.0..2.0));
/// ```
pub trait CoordExt<T: Value> {
    /// Returns an iterator over the x-coordinates of this value.
    fn x_iter(&self) -> impl Iterator<Item = T>;

    /// Returns an iterator over the y-coordinates of this value.
    fn y_iter(&self) -> impl Iterator<Item = T>;

    /// Returns the range of x-coordinates of this value.
    fn x_range(&self) -> Option<Range<T>> {
        min_max(self.x_iter())
    }

    /// Returns the range of y-coordinates of this value.
    fn y_range(&self) -> Option<Range<T>> {
        min_max(self.y_iter())
    }

    /// Converts the coordinates of this value to `f64`.
    ///
    /// # Errors
    /// Returns an error if any of the coordinates cannot be converted to `f64`.
    fn as_f64(&self) -> Result<Vec<(f64, f64)>> {
        self.x_iter()
            .zip(self.y_iter())
            .map(|(x, y)| Ok((f64::try_cast(x)?, f64::try_cast(y)?)))
            .collect()
    }
}
impl<T: Value> CoordExt<T> for Vec<(T, T)> {
    fn x_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(x, _)| *x)
    }

    fn y_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(_, y)| *y)
    }
}
impl<T: Value> CoordExt<T> for &[(T, T)] {
    fn x_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(x, _)| *x)
    }

    fn y_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(_, y)| *y)
    }
}

fn min_max<T: Value>(values: impl Iterator<Item = T>) -> Option<Range<T>> {
    let bounds = values.fold(None, |acc: Option<(T, T)>, v| {
        Some(match acc {
            Some((min, max)) => (
                nalgebra::RealField::min(min, v),
                nalgebra::RealField::max(max, v),
            ),
            None => (v, v),
        })
    });
    bounds.map(|(start, end)| start..end)
}

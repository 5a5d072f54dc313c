//! Sampled comparison signals over a shared domain.
//!
//! A [`Waveform`] holds a domain `x` evenly spaced over `[0, π]`, the primary
//! signal `sin(x)` and the derived signal `sin(x)^4`, all index-aligned.
use crate::{
    error::Result,
    value::{LinearSpace, Value},
};

/// Label of the primary signal, as shown in legends
pub const PRIMARY_LABEL: &str = "sin(x)";

/// Label of the derived signal, as shown in legends
pub const DERIVED_LABEL: &str = "sin(x)^4";

/// Power the primary signal is raised to for the derived signal
pub const DERIVED_POWER: i32 = 4;

/// A sine waveform and its fourth power, sampled over `[0, π]`.
///
/// # Example
/// ```rust
/// use sinecmp::Waveform;
///
/// let wave = Waveform::<f64>::sample(5).unwrap();
/// assert_eq!(wave.len(), 5);
/// assert_eq!(wave.domain()[0], 0.0);
/// assert_eq!(wave.domain()[4], std::f64::consts::PI);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform<T: Value> {
    domain: Vec<T>,
    primary: Vec<T>,
    derived: Vec<T>,
}
impl<T: Value> Waveform<T> {
    /// Samples `length` evenly spaced points from `0` to `π` inclusive.
    ///
    /// - `primary[i] = sin(domain[i])`
    /// - `derived[i] = primary[i]^4`
    ///
    /// A single sample is placed at `0`.
    ///
    /// # Errors
    /// Returns [`crate::error::Error::InvalidSampleCount`] if `length` is zero.
    pub fn sample(length: usize) -> Result<Self> {
        let space = LinearSpace::new(T::zero()..=T::pi(), length)?;
        log::debug!("Sampling {length} points over [0, pi], step {:e}", space.step());

        let domain: Vec<T> = space.collect();
        let primary: Vec<T> = domain.iter().map(|&x| Value::sin(x)).collect();
        let derived: Vec<T> = primary
            .iter()
            .map(|&s| Value::powi(s, DERIVED_POWER))
            .collect();

        Ok(Self {
            domain,
            primary,
            derived,
        })
    }

    /// Number of samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    /// Returns true if there are no samples, which `sample` never produces
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    /// The domain values, in radians
    #[must_use]
    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    /// `sin(x)` for each domain value
    #[must_use]
    pub fn primary(&self) -> &[T] {
        &self.primary
    }

    /// `sin(x)^4` for each domain value
    #[must_use]
    pub fn derived(&self) -> &[T] {
        &self.derived
    }

    /// `(x, sin(x))` pairs
    #[must_use]
    pub fn primary_points(&self) -> Vec<(T, T)> {
        zip_points(&self.domain, &self.primary)
    }

    /// `(x, sin(x)^4)` pairs
    #[must_use]
    pub fn derived_points(&self) -> Vec<(T, T)> {
        zip_points(&self.domain, &self.derived)
    }

    /// Both signals as labelled point series, primary first
    #[must_use]
    pub fn points(&self) -> [(Vec<(T, T)>, &'static str); 2] {
        [
            (self.primary_points(), PRIMARY_LABEL),
            (self.derived_points(), DERIVED_LABEL),
        ]
    }
}

fn zip_points<T: Value>(xs: &[T], ys: &[T]) -> Vec<(T, T)> {
    xs.iter().copied().zip(ys.iter().copied()).collect()
}

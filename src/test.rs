//! Assertions for checking sampled signals in tests.
//!
//! ### [`crate::assert_close`]
//! Asserts that two floating-point values are approximately equal within a tolerance.
//! - Uses the machine epsilon for the floating-point type unless `tol = ...` is given.
//! - `assert_eq!` equivalent for floats.
//!
//! ### [`crate::assert_all_close`]
//! Element-wise [`crate::assert_close`] over two slices of the same length.
//!
//! ```rust
//! # use sinecmp::{assert_all_close, assert_close, Waveform};
//! let wave = Waveform::<f64>::sample(3).unwrap();
//! assert_close!(wave.primary()[1], 1.0);
//! assert_all_close!(wave.derived(), [0.0, 1.0, 0.0], tol = 1e-12);
//! ```

/// Asserts that two floating-point values are approximately equal.
///
/// The tolerance is the machine epsilon of the value type, or the one given with `tol = ...`.
///
/// # Parameters
/// - `$a`, `$b`: Values to compare, of the same [`crate::value::Value`] type.
/// - `tol = $tol`: *(optional)* Largest accepted absolute difference.
/// - `$msg`: *(optional)* Custom failure message. Supports formatting arguments just like `format!`.
///
/// # Panics
/// If the values differ by more than the tolerance.
///
/// # Examples
/// ```
/// # use sinecmp::assert_close;
/// assert_close!(0.1 + 0.2, 0.3);
/// assert_close!(std::f64::consts::PI, 3.142, tol = 1e-3, "pi to {} places", 3);
/// ```
#[macro_export]
macro_rules! assert_close {
    ($a:expr, $b:expr, tol = $tol:expr $(, $msg:literal $(, $args:expr)*)?) => { #[allow(clippy::float_cmp)] {
        #[allow(unused_mut, unused_assignments)] let mut msg = "Values not close".to_string();
        $( msg = format!($msg $(, $args)*); )?

        let (a, b, tol) = ($a, $b, $tol);
        assert!(
            a == b || $crate::value::Value::abs_sub(a, b) <= tol,
            "{msg}: {a} != {b} (tolerance {tol:e})"
        );
    }};

    ($a:expr, $b:expr $(, $msg:literal $(, $args:expr)*)?) => {{
        fn epsilon<T: $crate::value::Value>(_: T) -> T {
            T::machine_epsilon()
        }

        let a = $a;
        $crate::assert_close!(a, $b, tol = epsilon(a) $(, $msg $(, $args)*)?);
    }};
}

/// Asserts that two slices of floating-point values are approximately equal element-wise.
///
/// - Uses the machine epsilon for the floating-point type unless `tol = ...` is given.
/// - Element-wise [`crate::assert_close`].
///
/// # Parameters
/// - `$src`: Source slice (implements `iter()`).
/// - `$dst`: Destination slice (same length as `$src`).
/// - `tol = $tol`: *(optional)* Largest accepted absolute difference.
/// - `$msg`: *(optional)* Custom failure message. Defaults to `"{len} elements"`.
///
/// # Panics
/// - If the lengths differ.
/// - If any pair of elements differ by more than the tolerance.
///
/// # Examples
/// ```
/// # use sinecmp::assert_all_close;
/// let a = [1.0, 2.0, 3.0];
/// let b = [1.0, 2.0 + 1e-16, 3.0];
/// assert_all_close!(a, b);
/// ```
#[macro_export]
macro_rules! assert_all_close {
    ($src:expr, $dst:expr $(, tol = $tol:expr)? $(, $msg:literal $(, $args:expr)*)?) => {{
        let (src, dst) = (&$src, &$dst);

        #[allow(unused_assignments, unused_mut)]
        let mut msg = format!("{} elements", src.len());
        $( msg = format!($msg $(, $args)*); )?

        assert_eq!(src.len(), dst.len(), "{msg} - length mismatch");

        for (i, (s, d)) in src.iter().zip(dst.iter()).enumerate() {
            $crate::assert_close!(*s, *d $(, tol = $tol)?, "{} - src[{}]", msg, i);
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_assert_close_macro() {
        assert_close!(1.0 + 1e-16, 1.0, "Values should be close");
        assert_close!(1.0f32, 1.0001, tol = 1e-3);
    }

    #[test]
    #[should_panic(expected = "Values not close")]
    fn test_assert_close_fails() {
        assert_close!(1.0, 1.1);
    }

    #[test]
    fn test_assert_all_close_macro() {
        let a = [1.0, 2.0, 3.0];
        let b = vec![1.0, 2.0 + 1e-16, 3.0];
        assert_all_close!(a, b);
        assert_all_close!(a, [1.01, 2.0, 2.99], tol = 0.02, "loose");
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn test_assert_all_close_length() {
        assert_all_close!([1.0, 2.0], [1.0]);
    }
}

use crate::error::{Error, Result};

/// Extends float slices that represent cell-edge arrays
///
/// Grid edges are strictly increasing by construction, so the scans here are
/// simple linear walks. Grids are small enough (hundreds of edges) that a
/// binary search buys nothing.
pub trait EdgeExt {
    /// Greatest index `i` with `self[i] < value`
    ///
    /// Returns `None` when `value` sits at or below the first edge, i.e. the
    /// position is inside or below the innermost cell.
    ///
    /// ```rust
    /// # use wtools_utils::EdgeExt;
    /// let edges = [1.0, 2.0, 3.0];
    ///
    /// assert_eq!(edges.find_below(2.5), Some(1));
    /// assert_eq!(edges.find_below(2.0), Some(0));
    /// assert_eq!(edges.find_below(0.5), None);
    /// assert_eq!(edges.find_below(9.0), Some(2));
    /// ```
    fn find_below(&self, value: f64) -> Option<usize>;

    /// Minimum value, rejecting empty and non-finite input
    ///
    /// ```rust
    /// # use wtools_utils::{EdgeExt, Error};
    /// assert_eq!([2.0, 1.0, 3.0].try_min(), Ok(1.0));
    /// assert_eq!([1.0, f64::NAN].try_min(), Err(Error::NonFiniteValues));
    /// assert_eq!(Vec::<f64>::new().try_min(), Err(Error::EmptySlice));
    /// ```
    fn try_min(&self) -> Result<f64>;

    /// Maximum value, rejecting empty and non-finite input
    ///
    /// ```rust
    /// # use wtools_utils::{EdgeExt, Error};
    /// assert_eq!([2.0, 1.0, 3.0].try_max(), Ok(3.0));
    /// assert_eq!([1.0, f64::INFINITY].try_max(), Err(Error::NonFiniteValues));
    /// ```
    fn try_max(&self) -> Result<f64>;

    /// Check the array is strictly increasing
    ///
    /// The index of the first out-of-order pair is reported in the error.
    ///
    /// ```rust
    /// # use wtools_utils::{EdgeExt, Error};
    /// assert!([1.0, 2.0, 3.0].ensure_increasing().is_ok());
    /// assert_eq!([1.0, 1.0].ensure_increasing(), Err(Error::NotMonotonic(1)));
    /// ```
    fn ensure_increasing(&self) -> Result<()>;
}

impl<S> EdgeExt for S
where
    S: AsRef<[f64]>,
{
    fn find_below(&self, value: f64) -> Option<usize> {
        let edges = self.as_ref();
        let mut idx = None;
        for (i, edge) in edges.iter().enumerate() {
            if *edge < value {
                idx = Some(i);
            } else {
                break;
            }
        }
        idx
    }

    fn try_min(&self) -> Result<f64> {
        fold_finite(self.as_ref(), f64::min)
    }

    fn try_max(&self) -> Result<f64> {
        fold_finite(self.as_ref(), f64::max)
    }

    fn ensure_increasing(&self) -> Result<()> {
        let edges = self.as_ref();
        for (i, pair) in edges.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(Error::NotMonotonic(i + 1));
            }
        }
        Ok(())
    }
}

/// Fold a slice with `op`, erroring on empty or non-finite content
fn fold_finite(values: &[f64], op: fn(f64, f64) -> f64) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::EmptySlice);
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(Error::NonFiniteValues);
    }
    Ok(values.iter().copied().fold(values[0], op))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_below_is_strict() {
        let edges = vec![10.0, 45.0, 80.0];
        // a value equal to an edge belongs to the cell below it
        assert_eq!(edges.find_below(45.0), Some(0));
        assert_eq!(edges.find_below(45.1), Some(1));
    }

    #[test]
    fn extrema_reject_bad_input() {
        assert_eq!(Vec::<f64>::new().try_max(), Err(Error::EmptySlice));
        assert_eq!(vec![0.0, f64::NAN].try_max(), Err(Error::NonFiniteValues));
        assert_eq!(vec![-1.0, 4.0, 2.0].try_max(), Ok(4.0));
        assert_eq!(vec![-1.0, 4.0, 2.0].try_min(), Ok(-1.0));
    }

    #[test]
    fn monotonic_reports_first_violation() {
        assert_eq!(
            [1.0, 2.0, 2.0, 3.0].ensure_increasing(),
            Err(Error::NotMonotonic(2))
        );
    }
}

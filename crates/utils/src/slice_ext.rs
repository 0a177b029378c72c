use crate::error::{Error, Result};

/// Extends functionality for slices of `f64` values
pub trait SliceExt {
    /// Find the minimum value in a float array
    ///
    /// Only provides the minimum value from a collection of valid numbers. Any
    /// NAN values, infinite values, or empty slices will return an error.
    ///
    /// ```rust
    /// # use flashy_utils::SliceExt;
    /// # use flashy_utils::Error;
    /// // Successful cases
    /// assert_eq!([1.1, 0.5, 2.2].try_min(), Ok(0.5));
    /// assert_eq!([1.1, f64::MIN, 2.2].try_min(), Ok(f64::MIN));
    ///
    /// // Error cases
    /// assert_eq!([1.1, f64::NAN, 2.2].try_min(), Err(Error::SliceContainsUndefinedValues));
    /// assert_eq!(Vec::<f64>::new().try_min(), Err(Error::SliceContainsNoValues));
    /// ```
    ///
    /// Uses `total_cmp` to always produce an ordering in accordance to the
    /// totalOrder predicate of IEEE 754 (2008 revision).
    fn try_min(&self) -> Result<f64>;

    /// Find the maximum value in a float array
    ///
    /// Only provides the maximum value from a collection of valid numbers. Any
    /// NAN values, infinite values, or empty slices will return an error.
    ///
    /// ```rust
    /// # use flashy_utils::SliceExt;
    /// # use flashy_utils::Error;
    /// assert_eq!([1.1, 0.5, 2.2].try_max(), Ok(2.2));
    /// assert_eq!([1.1, f64::INFINITY].try_max(), Err(Error::SliceContainsUndefinedValues));
    /// ```
    fn try_max(&self) -> Result<f64>;

    /// Find index bin containing 'value', where bins are low <= value < high
    ///
    /// A value on a bin edge returns the bin above. Values equal to the highest
    /// bound are considered part of the last bin. Zero-width bins (repeated
    /// edges) can never be returned, which is exactly what linear
    /// interpolation over repeated sample times needs.
    ///
    /// ```text
    ///     edges  : 0.0 0.1 1.0 20.0
    ///
    ///     0.0 <= bin 0 < 0.1
    ///     0.1 <= bin 1 < 1.0
    ///     1.0 <= bin 2 <= 20.0
    /// ```
    ///
    /// ```rust
    /// # use flashy_utils::SliceExt;
    /// let bounds = vec![0.0, 0.1, 1.0, 20.0];
    ///
    /// // Find values in the array
    /// assert_eq!(bounds.find_bin_exclusive(0.0 ), Ok(0));
    /// assert_eq!(bounds.find_bin_exclusive(0.5 ), Ok(1));
    /// assert_eq!(bounds.find_bin_exclusive(1.0 ), Ok(2));
    /// assert_eq!(bounds.find_bin_exclusive(20.0), Ok(2));
    ///
    /// // Values outside the bin bounds are an error case
    /// assert!(bounds.find_bin_exclusive(-1.0).is_err());
    /// assert!(bounds.find_bin_exclusive(21.0).is_err());
    /// ```
    fn find_bin_exclusive(&self, value: f64) -> Result<usize>;
}

impl SliceExt for [f64] {
    fn try_min(&self) -> Result<f64> {
        if self.iter().any(|v| !v.is_finite()) {
            return Err(Error::SliceContainsUndefinedValues);
        };

        self.iter()
            .min_by(|a, b| a.total_cmp(b))
            .copied()
            .ok_or(Error::SliceContainsNoValues)
    }

    fn try_max(&self) -> Result<f64> {
        if self.iter().any(|v| !v.is_finite()) {
            return Err(Error::SliceContainsUndefinedValues);
        };

        self.iter()
            .max_by(|a, b| a.total_cmp(b))
            .copied()
            .ok_or(Error::SliceContainsNoValues)
    }

    fn find_bin_exclusive(&self, value: f64) -> Result<usize> {
        // make sure there are bin edges to check against
        let n = self.len();
        let (Some(lower_bound), Some(upper_bound)) = (self.first(), self.last()) else {
            return Err(Error::BelowMinimumSliceLength {
                length: n,
                minimum_required: 2,
            });
        };

        if n < 2 {
            return Err(Error::BelowMinimumSliceLength {
                length: n,
                minimum_required: 2,
            });
        }

        // is the value relevant?
        if &value < lower_bound || &value > upper_bound {
            return Err(Error::ValueOutsideOfBounds {
                value,
                lower_bound: *lower_bound,
                upper_bound: *upper_bound,
            });
        }

        // special case for being on the upper edge
        if &value == upper_bound {
            return Ok(n - 2);
        }

        // try to find the bin index, range EXCLUSIVE of upper edge
        self.windows(2)
            .position(|edges| edges[0] <= value && value < edges[1])
            .ok_or(Error::UncapturedErrorCondition)
    }
}

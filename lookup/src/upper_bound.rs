// Copyright 2026 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

/// Finds the smallest element of `values` that is greater than or equal to
/// `target`, together with the number of halving iterations performed.
///
/// `values` MUST be sorted in ascending order; the result is unspecified
/// otherwise. The bound is `PartialOrd` so float slices work; an element
/// that does not compare with `target` (such as a NaN) is treated as
/// smaller.
///
/// Returns `(iterations, None)` when every element is smaller than `target`,
/// and `(0, None)` for an empty slice.
///
/// # Examples
///
/// ```
/// let data = [0.1, 1.5, 2.0, 2.7, 3.14, 5.5, 5.5, 6.1];
///
/// let (iterations, bound) = lookup::upper_bound(&data, &3.0);
///
/// assert_eq!(bound, Some(&3.14));
/// assert_eq!(iterations, 3);
/// ```
#[must_use]
pub fn upper_bound<'a, T>(values: &'a [T], target: &T) -> (usize, Option<&'a T>)
where
    T: PartialOrd,
{
    // Closed-interval halving; signed cursors let `right` pass below zero
    // when the bound sits at the front of the slice.
    let mut left: isize = 0;
    let mut right: isize = values.len() as isize - 1;

    let mut iterations = 0;
    let mut result = None;

    while left <= right {
        iterations += 1;
        let mid = left + (right - left) / 2;
        let candidate = &values[mid as usize];

        if *candidate >= *target {
            // A possible bound; anything smaller must sit to the left
            result = Some(candidate);
            right = mid - 1;
        } else {
            left = mid + 1;
        }
    }

    (iterations, result)
}

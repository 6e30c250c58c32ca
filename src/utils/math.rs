//! Mathematical utility functions.

/// Computes the integer square root of `n` using Newton's method.
///
/// Returns `w` such that `w * w == n` for perfect squares and the floor of the real
/// square root otherwise. The iteration only uses truncating integer division, so the
/// fixed point it reaches is exact and shape validation can rely on it.
///
/// The first step evaluates `(n + 1) / 2` as `n / 2 + n % 2` so that `usize::MAX`
/// does not overflow.
///
/// # Examples
///
/// ```rust
/// use bltable::utils::isqrt;
///
/// assert_eq!(isqrt(0), 0);
/// assert_eq!(isqrt(16), 4);
/// assert_eq!(isqrt(17), 4);   // floor(sqrt(17))
/// assert_eq!(isqrt(24), 4);
/// assert_eq!(isqrt(25), 5);
/// ```
#[must_use]
pub fn isqrt(n: usize) -> usize {
    if n == 0 {
        return 0;
    }

    let mut left = n;
    let mut right = left / 2 + left % 2;
    while right < left {
        left = right;
        right = (left + n / left) / 2;
    }

    left
}

/// Returns `true` if `n` has an exact integer square root.
///
/// # Examples
///
/// ```rust
/// use bltable::utils::is_perfect_square;
///
/// assert!(is_perfect_square(0));
/// assert!(is_perfect_square(1));
/// assert!(is_perfect_square(64));
/// assert!(!is_perfect_square(5));
/// ```
#[must_use]
pub fn is_perfect_square(n: usize) -> bool {
    let width = isqrt(n);
    width * width == n
}

//! Truncated power series evaluated in exact rational arithmetic.
//!
//! Accuracy is governed only by the caller's term count; no intermediate
//! value is ever rounded.

use log::debug;
use num_traits::{CheckedMul, One, Zero};

use super::error::{Result, SeriesError};
use super::rational::{add, divide, multiply, small, small_integer, subtract, ExactRational};

/// Taylor approximation of e raised to `power`, summing the first `terms`
/// terms of `power^t / t!`.
///
/// Zero terms give the empty sum and one term gives exactly `1`.
pub fn exp<R: ExactRational>(power: &R, terms: i64) -> Result<R> {
    if terms < 0 {
        return Err(SeriesError::NegativeTerms);
    } else if terms == 0 {
        return Ok(R::zero());
    } else if terms == 1 {
        return Ok(R::one());
    }
    debug!("exp series: {terms} terms");

    let mut xn = R::one();
    let mut factorial = R::Integer::one();
    let mut sum = R::one();
    for t in 1..terms {
        xn = multiply(&xn, power)?;
        factorial = factorial
            .checked_mul(&small_integer::<R>(t)?)
            .ok_or(SeriesError::Overflow)?;
        sum = add(&sum, &divide(&xn, &R::from_integer(factorial.clone()))?)?;
    }

    Ok(sum)
}

/// Approximates the natural logarithm of `x` with `terms` terms of
/// `2 * artanh((x - 1) / (x + 1))`.
///
/// The base factor is `1 / (2n + 1)` with `n = 1 / (x - 1)`, so `x == 1`
/// fails with [`SeriesError::DivisionByZero`]. Convergence slows as `x`
/// moves away from 1.
pub fn ln<R: ExactRational>(x: &R, terms: i64) -> Result<R> {
    if terms < 0 {
        return Err(SeriesError::NegativeTerms);
    }
    if *x <= R::zero() {
        return Err(SeriesError::NonPositiveArgument);
    }

    let one = R::one();
    // x == 1 fails here for every term count
    let n = divide(&one, &subtract(x, &one)?)?;
    if terms == 0 {
        return Ok(R::zero());
    }
    debug!("ln series: {terms} terms");

    let two = add(&one, &one)?;
    let mut factor = divide(&one, &add(&multiply(&two, &n)?, &one)?)?;
    let factor_squared = multiply(&factor, &factor)?;
    let mut total = factor.clone();
    for term in 1..terms {
        // odd powers only: 3, 5, 7, ...
        let power = small::<R>(2 * term + 1)?;
        factor = multiply(&factor, &factor_squared)?;
        total = add(&total, &divide(&factor, &power)?)?;
    }

    multiply(&two, &total)
}

use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, FromPrimitive, One, Zero};

use super::error::{Result, SeriesError};

/// Exact fraction arithmetic needed by the series expansions.
///
/// Operators return new values and never round. The series only use the
/// checked forms: with `BigRational` nothing can overflow, while a
/// fixed-width `Ratio<T>` reports [`SeriesError::Overflow`] instead of
/// wrapping.
pub trait ExactRational:
    Clone + PartialOrd + Zero + One + CheckedAdd + CheckedSub + CheckedMul + CheckedDiv
{
    /// Integer used for factorial accumulation.
    type Integer: Clone + One + CheckedMul + FromPrimitive;

    fn from_integer(n: Self::Integer) -> Self;
}

impl<T> ExactRational for Ratio<T>
where
    T: Clone + Integer + CheckedAdd + CheckedSub + CheckedMul + FromPrimitive,
{
    type Integer = T;

    fn from_integer(n: T) -> Self {
        Ratio::from_integer(n)
    }
}

pub(crate) fn small_integer<R: ExactRational>(n: i64) -> Result<R::Integer> {
    R::Integer::from_i64(n).ok_or(SeriesError::TermOutOfRange(n))
}

/// Builds `n` as a rational.
pub fn small<R: ExactRational>(n: i64) -> Result<R> {
    small_integer::<R>(n).map(R::from_integer)
}

pub fn add<R: ExactRational>(lhs: &R, rhs: &R) -> Result<R> {
    lhs.checked_add(rhs).ok_or(SeriesError::Overflow)
}

pub fn subtract<R: ExactRational>(lhs: &R, rhs: &R) -> Result<R> {
    lhs.checked_sub(rhs).ok_or(SeriesError::Overflow)
}

pub fn multiply<R: ExactRational>(lhs: &R, rhs: &R) -> Result<R> {
    lhs.checked_mul(rhs).ok_or(SeriesError::Overflow)
}

/// `lhs / rhs`, with a zero divisor reported as [`SeriesError::DivisionByZero`].
pub fn divide<R: ExactRational>(lhs: &R, rhs: &R) -> Result<R> {
    if rhs.is_zero() {
        return Err(SeriesError::DivisionByZero);
    }
    lhs.checked_div(rhs).ok_or(SeriesError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Num;

    #[test]
    fn small_builds_integers() {
        assert_eq!(small::<Num>(7).unwrap(), num!(7, 1));
        assert_eq!(small::<Num>(-3).unwrap(), num!(-3, 1));
    }

    #[test]
    fn small_rejects_values_outside_the_integer_type() {
        assert_eq!(
            small::<Ratio<i8>>(300),
            Err(SeriesError::TermOutOfRange(300))
        );
    }

    #[test]
    fn divide_by_zero_is_an_error() {
        assert_eq!(
            divide(&num!(1, 2), &Num::zero()),
            Err(SeriesError::DivisionByZero)
        );
        assert_eq!(divide(&num!(1, 2), &num!(3, 4)).unwrap(), num!(2, 3));
    }

    #[test]
    fn fixed_width_overflow_is_an_error() {
        let big = Ratio::<i8>::new(100, 1);
        let half = Ratio::<i8>::new(1, 2);
        assert_eq!(add(&big, &big), Err(SeriesError::Overflow));
        assert_eq!(subtract(&-big, &big), Err(SeriesError::Overflow));
        assert_eq!(multiply(&big, &big), Err(SeriesError::Overflow));
        assert_eq!(divide(&big, &half), Err(SeriesError::Overflow));
        assert_eq!(divide(&big, &Ratio::zero()), Err(SeriesError::DivisionByZero));
    }
}

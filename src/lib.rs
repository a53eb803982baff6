//! Exact rational approximations of `e^x` and `ln(x)` by truncated power series.
//!
//! ```
//! use qseries::math::{series, parsefmt, base::NumberBase};
//!
//! let x = parsefmt::parse("2").unwrap();
//! let ln2 = series::ln(&x, 50).unwrap();
//! assert!(parsefmt::fmt(&ln2, NumberBase::Decimal, 10).starts_with("0.6931471805"));
//! ```

#[macro_use]
pub mod math;
pub mod config;

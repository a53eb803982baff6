macro_rules! num {
    ($numer:expr, $denom:expr) => {
        $crate::math::Num::new(
            $crate::math::NumComponent::from($numer),
            $crate::math::NumComponent::from($denom),
        )
    };
}

pub mod base;
pub mod error;
pub mod parsefmt;
pub mod rational;
pub mod series;

pub type Num = num_rational::BigRational;
pub type NumComponent = num_bigint::BigInt;

pub use error::{Result, SeriesError};
pub use rational::ExactRational;

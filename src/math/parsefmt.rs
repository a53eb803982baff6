use std::str::FromStr;

use num_traits::{Signed, Zero};

use super::{
    Num,
    NumComponent,
    base::NumberBase,
};

// only parse b10 numbers at the moment
pub fn parse(s: &str) -> Option<Num> {
    let s = s.trim();
    if let Some((numer, denom)) = s.split_once('/') {
        if denom.contains('/') {
            return None;
        }
        let numer = parse(numer)?;
        let denom = parse(denom)?;
        if denom.is_zero() {
            return None;
        }
        return Some(numer / denom);
    }

    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let n = parse_unsigned(digits)?;
    Some(if negative { -n } else { n })
}

fn parse_unsigned(s: &str) -> Option<Num> {
    if s.is_empty() || s.starts_with(['-', '+']) {
        return None;
    }
    let parts = s.split('.').collect::<Vec<&str>>();
    match parts.as_slice() {
        [int] => {
            let int = NumComponent::from_str(int).ok()?;
            Some(num!(int, 1))
        },
        [int, fract] => {
            // "5." and ".5" are both accepted, but not a bare "."
            if int.is_empty() && fract.is_empty() {
                return None;
            }
            let int = if int.is_empty() {
                NumComponent::zero()
            } else {
                NumComponent::from_str(int).ok()?
            };
            let fract = if fract.is_empty() {
                Num::zero()
            } else {
                parse_fract(fract)?
            };
            Some(num!(int, 1) + fract)
        },
        _ => None,
    }
}

fn parse_fract(s: &str) -> Option<Num> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let comp = NumComponent::from_str(s).ok()?;
    // the digit count, not the value, fixes the denominator ("05" is 5/100)
    let bound = num_traits::pow(NumComponent::from(10), s.len());
    Some(Num::new(comp, bound))
}

pub fn fmt(n: &Num, base: NumberBase, max_fractional_places: u32) -> String {
    let int = n.abs().to_integer();
    let fract = if !n.is_integer() && max_fractional_places > 0 {
        fmt_fract(n.abs().fract(), base, max_fractional_places)
    } else {
        "".to_owned()
    };
    // truncation can leave nothing but zeros, which gets no sign
    let shown_zero = int.is_zero() && fract.bytes().all(|b| b == b'0');
    let sign = if n.is_negative() && !shown_zero { "-" } else { "" };

    let mut out = format!("{sign}{}", fmt_int(int, base));
    if !fract.is_empty() {
        out += ".";
        out += fract.as_str();
    }
    out
}

/// The exact `numer/denom` form, or just the integer when the denominator is one.
pub fn fmt_fraction(n: &Num) -> String {
    if n.is_integer() {
        format!("{}", n.numer())
    } else {
        format!("{}/{}", n.numer(), n.denom())
    }
}

fn fmt_int(n: NumComponent, base: NumberBase) -> String {
    let prefix = base.prefix();
    match base {
        NumberBase::Binary => {
            format!("{prefix}{n:b}")
        },
        NumberBase::Decimal => {
            format!("{prefix}{n}")
        },
        NumberBase::Hexadecimal => {
            format!("{prefix}{n:X}")
        }
    }
}

fn fmt_fract(n: Num, base: NumberBase, max_places: u32) -> String {
    let mut out = "".to_owned();

    let mut n = n;
    let placevalue = num!(base.place_value(), 1);

    for _ in 0..max_places {
        n = n * placevalue.clone();// multiply by base to get a single digit in the integer part
        let int = n.trunc().to_integer();
        out += match base {// format the digit and add it to output
            NumberBase::Binary => {format!("{:b}", int)},
            NumberBase::Decimal => {format!("{}", int)},
            NumberBase::Hexadecimal => {format!("{:X}", int)},
        }.as_str();
        n = n.fract();// cut off the integer part and repeat
        if n.is_zero() {break}// no trailing zeros
    }

    out
}

#[test]
fn fmt_test() {
    assert_eq!(fmt(&num!(1, 3), NumberBase::Decimal, 128),
    // 128 decimal places of 3 !!
    "0.33333333333333333333333333333333333333333333333333333333333333333333333333333333333333333333333333333333333333333333333333333333".to_owned()
    );

    assert_eq!(fmt(&num!(1, 2), NumberBase::Binary, 128),
    "0b0.1".to_owned()
    );

    assert_eq!(fmt(&num!(7, 1), NumberBase::Hexadecimal, 128),
    "0x7".to_owned()
    );

    assert_eq!(fmt(&num!(1, 4), NumberBase::Binary, 128),
    "0b0.01".to_owned()
    );
}

#[test]
fn fmt_truncates_and_signs() {
    assert_eq!(fmt(&num!(2, 3), NumberBase::Decimal, 4), "0.6666");
    assert_eq!(fmt(&num!(-5, 2), NumberBase::Decimal, 10), "-2.5");
    assert_eq!(fmt(&num!(-1, 4), NumberBase::Decimal, 10), "-0.25");
    assert_eq!(fmt(&num!(7, 2), NumberBase::Decimal, 0), "3");
    assert_eq!(fmt(&num!(255, 16), NumberBase::Hexadecimal, 8), "0xF.F");
    assert_eq!(fmt(&num!(-5, 2), NumberBase::Binary, 8), "-0b10.1");
}

#[test]
fn fmt_drops_sign_of_truncated_zero() {
    assert_eq!(fmt(&num!(-1, 4), NumberBase::Decimal, 0), "0");
    assert_eq!(fmt(&num!(-1, 1000), NumberBase::Decimal, 2), "0.00");
    assert_eq!(fmt(&num!(-1, 1000), NumberBase::Decimal, 3), "-0.001");
    assert_eq!(fmt(&num!(-1, 4), NumberBase::Decimal, 1), "-0.2");
}

#[test]
fn fmt_fraction_test() {
    assert_eq!(fmt_fraction(&num!(6, 4)), "3/2");
    assert_eq!(fmt_fraction(&num!(-8, 2)), "-4");
}

#[test]
fn parse_test() {
    assert_eq!(
        parse("3.14159"),
        Some(num!(314159,100000))
    );
    assert_eq!(parse("1.05"), Some(num!(21, 20)));
    assert_eq!(parse("-2.5"), Some(num!(-5, 2)));
    assert_eq!(parse("+.5"), Some(num!(1, 2)));
    assert_eq!(parse("22/7"), Some(num!(22, 7)));
    assert_eq!(parse(" -1/3 "), Some(num!(-1, 3)));
    assert_eq!(parse("1.5/0.5"), Some(num!(3, 1)));
}

#[test]
fn parse_rejects_garbage() {
    assert_eq!(parse(""), None);
    assert_eq!(parse("."), None);
    assert_eq!(parse("1/0"), None);
    assert_eq!(parse("1.2.3"), None);
    assert_eq!(parse("1/2/3"), None);
    assert_eq!(parse("--4"), None);
    assert_eq!(parse("2.-5"), None);
    assert_eq!(parse("e"), None);
}

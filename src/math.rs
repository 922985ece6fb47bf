//! Degree-based trigonometry and math utilities for solar calculations.
//!
//! All solar geometry formulas in this crate work in degrees, so the usual
//! radian functions are wrapped here once. The inverse functions come in two
//! flavours: checked ([`asind`], [`acosd`]) which return a [`Domain`] error
//! for arguments outside [-1, 1], and clamping ([`asind_clamped`],
//! [`acosd_clamped`]) for the documented call sites where floating-point
//! drift can push a cosine sum marginally out of range.
//!
//! [`Domain`]: crate::Error::Domain

#![allow(clippy::many_single_char_names)]

use crate::{Error, Result};

#[cfg(not(feature = "std"))]
use libm;

/// Degrees-to-radians conversion factor.
pub const TO_RAD: f64 = core::f64::consts::PI / 180.0;

/// Radians-to-degrees conversion factor.
pub const TO_DEG: f64 = 180.0 / core::f64::consts::PI;

/// Computes the sine of an angle given in degrees.
#[inline]
#[must_use]
pub fn sind(degrees: f64) -> f64 {
    #[cfg(feature = "std")]
    return (TO_RAD * degrees).sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(TO_RAD * degrees);
}

/// Computes the cosine of an angle given in degrees.
#[inline]
#[must_use]
pub fn cosd(degrees: f64) -> f64 {
    #[cfg(feature = "std")]
    return (TO_RAD * degrees).cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(TO_RAD * degrees);
}

/// Computes the tangent of an angle given in degrees.
#[inline]
#[must_use]
pub fn tand(degrees: f64) -> f64 {
    #[cfg(feature = "std")]
    return (TO_RAD * degrees).tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(TO_RAD * degrees);
}

/// Computes the arcsine of `x`, in degrees.
///
/// # Errors
/// Returns [`Error::Domain`] if `x` is outside [-1, 1] or not finite.
pub fn asind(x: f64) -> Result<f64> {
    check_unit_range(x, "arcsine argument outside [-1, 1]")?;
    Ok(asind_clamped(x))
}

/// Computes the arccosine of `x`, in degrees.
///
/// # Errors
/// Returns [`Error::Domain`] if `x` is outside [-1, 1] or not finite.
pub fn acosd(x: f64) -> Result<f64> {
    check_unit_range(x, "arccosine argument outside [-1, 1]")?;
    Ok(acosd_clamped(x))
}

/// Computes the arcsine of `x` clamped into [-1, 1], in degrees.
///
/// Intended for formulas where rounding in a preceding cosine sum can push
/// the argument marginally past 1. A NaN argument clamps to 1.
#[inline]
#[must_use]
pub fn asind_clamped(x: f64) -> f64 {
    let x = clamp_unit(x);

    #[cfg(feature = "std")]
    return TO_DEG * x.asin();

    #[cfg(not(feature = "std"))]
    return TO_DEG * libm::asin(x);
}

/// Computes the arccosine of `x` clamped into [-1, 1], in degrees.
///
/// Intended for formulas where rounding in a preceding cosine sum can push
/// the argument marginally past 1. A NaN argument clamps to 1.
#[inline]
#[must_use]
pub fn acosd_clamped(x: f64) -> f64 {
    let x = clamp_unit(x);

    #[cfg(feature = "std")]
    return TO_DEG * x.acos();

    #[cfg(not(feature = "std"))]
    return TO_DEG * libm::acos(x);
}

/// Computes the arctangent of `x`, in degrees.
#[inline]
#[must_use]
pub fn atand(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return TO_DEG * x.atan();

    #[cfg(not(feature = "std"))]
    return TO_DEG * libm::atan(x);
}

/// Clamps `x` into [-1, 1]. NaN clamps to 1.
#[inline]
#[must_use]
pub fn clamp_unit(x: f64) -> f64 {
    if x < -1.0 {
        -1.0
    } else if x <= 1.0 {
        x
    } else {
        1.0
    }
}

/// Wraps an angle in degrees into the range (-180, 180].
#[must_use]
pub fn normalize_degrees_symmetric(degrees: f64) -> f64 {
    let mut normalized = degrees % 360.0;
    if normalized > 180.0 {
        normalized -= 360.0;
    } else if normalized <= -180.0 {
        normalized += 360.0;
    }
    normalized
}

/// Computes a polynomial using Horner's method for numerical stability.
///
/// Coefficients are ordered [a₀, a₁, a₂, ...] for a₀ + a₁x + a₂x² + ...
#[must_use]
pub fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    let Some(&last) = coeffs.last() else {
        return 0.0;
    };

    // Horner's method: reverse iteration for numerical stability
    let mut result = last;
    for &coeff in coeffs.iter().rev().skip(1) {
        result = mul_add(result, x, coeff);
    }
    result
}

/// Computes e^x using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn exp(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.exp();

    #[cfg(not(feature = "std"))]
    return libm::exp(x);
}

/// Computes x^y using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn powf(x: f64, y: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.powf(y);

    #[cfg(not(feature = "std"))]
    return libm::pow(x, y);
}

/// Computes x^n for integer n.
#[inline]
#[must_use]
pub fn powi(x: f64, n: i32) -> f64 {
    #[cfg(feature = "std")]
    return x.powi(n);

    #[cfg(not(feature = "std"))]
    return libm::pow(x, f64::from(n));
}

/// Computes (x * a) + b with only one rounding error (fused multiply-add).
#[inline]
#[must_use]
pub fn mul_add(x: f64, a: f64, b: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.mul_add(a, b);

    #[cfg(not(feature = "std"))]
    return libm::fma(x, a, b);
}

fn check_unit_range(x: f64, message: &'static str) -> Result<()> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(Error::domain(message, x));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_degree_trig() {
        assert!(sind(0.0).abs() < EPSILON);
        assert!((sind(90.0) - 1.0).abs() < EPSILON);
        assert!((sind(30.0) - 0.5).abs() < EPSILON);
        assert!((cosd(0.0) - 1.0).abs() < EPSILON);
        assert!((cosd(60.0) - 0.5).abs() < EPSILON);
        assert!((tand(45.0) - 1.0).abs() < EPSILON);
        assert!((atand(1.0) - 45.0).abs() < EPSILON);
    }

    #[test]
    fn test_inverse_round_trips() {
        assert!((asind(sind(23.45)).unwrap() - 23.45).abs() < EPSILON);
        assert!((acosd(cosd(35.16)).unwrap() - 35.16).abs() < EPSILON);
        assert!((asind(0.5).unwrap() - 30.0).abs() < EPSILON);
        assert!((acosd(0.5).unwrap() - 60.0).abs() < EPSILON);
    }

    #[test]
    fn test_checked_inverses_reject_out_of_range() {
        assert!(asind(1.0000001).is_err());
        assert!(asind(-1.0000001).is_err());
        assert!(acosd(2.0).is_err());
        assert!(acosd(f64::NAN).is_err());
        assert!(acosd(f64::INFINITY).is_err());
    }

    #[test]
    fn test_clamped_inverses_absorb_drift() {
        assert!((acosd_clamped(1.0 + 1e-15)).abs() < EPSILON);
        assert!((asind_clamped(-1.0 - 1e-15) + 90.0).abs() < EPSILON);
        assert_eq!(clamp_unit(5.0), 1.0);
        assert_eq!(clamp_unit(-5.0), -1.0);
        assert_eq!(clamp_unit(0.3), 0.3);
    }

    #[test]
    fn test_normalize_degrees_symmetric() {
        assert_eq!(normalize_degrees_symmetric(0.0), 0.0);
        assert_eq!(normalize_degrees_symmetric(180.0), 180.0);
        assert_eq!(normalize_degrees_symmetric(-180.0), 180.0);
        assert_eq!(normalize_degrees_symmetric(190.0), -170.0);
        assert_eq!(normalize_degrees_symmetric(-190.0), 170.0);
        assert_eq!(normalize_degrees_symmetric(540.0), 180.0);
        assert_eq!(normalize_degrees_symmetric(-370.0), -10.0);
    }

    #[test]
    fn test_polynomial() {
        assert_eq!(polynomial(&[], 5.0), 0.0);
        assert_eq!(polynomial(&[3.0], 5.0), 3.0);
        assert_eq!(polynomial(&[2.0, 3.0], 4.0), 14.0);
        assert!((polynomial(&[1.0, 2.0, 3.0], 2.0) - 17.0).abs() < EPSILON);
    }
}

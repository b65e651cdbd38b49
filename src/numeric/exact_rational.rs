// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign},
};

use num_traits::{One, Zero};
use rug::Rational;

use crate::{
    error::MeshError,
    geometry::util::{f64_next_down, f64_next_up},
    numeric::scalar::{Scalar, Sign},
};

/// Arbitrary-precision rational backed by GMP.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExactRational(pub Rational);

impl ExactRational {
    /// `num / den`. Panics if `den` is zero.
    pub fn from_ratio(num: i64, den: i64) -> Self {
        ExactRational(Rational::from((num, den)))
    }
}

impl<'a, 'b> Add<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn add(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result += &rhs.0;
        ExactRational(result)
    }
}

impl<'a, 'b> Sub<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn sub(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result -= &rhs.0;
        ExactRational(result)
    }
}

impl<'a, 'b> Mul<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn mul(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result *= &rhs.0;
        ExactRational(result)
    }
}

impl<'a, 'b> Div<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn div(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result /= &rhs.0;
        ExactRational(result)
    }
}

impl Add for ExactRational {
    type Output = ExactRational;

    fn add(mut self, rhs: ExactRational) -> ExactRational {
        self.0 += rhs.0;
        self
    }
}

impl Sub for ExactRational {
    type Output = ExactRational;

    fn sub(mut self, rhs: ExactRational) -> ExactRational {
        self.0 -= rhs.0;
        self
    }
}

impl Mul for ExactRational {
    type Output = ExactRational;

    fn mul(mut self, rhs: ExactRational) -> ExactRational {
        self.0 *= rhs.0;
        self
    }
}

impl Div for ExactRational {
    type Output = ExactRational;

    fn div(mut self, rhs: ExactRational) -> ExactRational {
        self.0 /= rhs.0;
        self
    }
}

impl Neg for ExactRational {
    type Output = ExactRational;

    fn neg(self) -> ExactRational {
        ExactRational(-self.0)
    }
}

impl<'a> AddAssign<&'a ExactRational> for ExactRational {
    fn add_assign(&mut self, rhs: &'a ExactRational) {
        self.0 += &rhs.0;
    }
}

impl<'a> SubAssign<&'a ExactRational> for ExactRational {
    fn sub_assign(&mut self, rhs: &'a ExactRational) {
        self.0 -= &rhs.0;
    }
}

impl<'a> MulAssign<&'a ExactRational> for ExactRational {
    fn mul_assign(&mut self, rhs: &'a ExactRational) {
        self.0 *= &rhs.0;
    }
}

impl Zero for ExactRational {
    fn zero() -> Self {
        ExactRational(Rational::new())
    }

    fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }
}

impl One for ExactRational {
    fn one() -> Self {
        ExactRational(Rational::from(1))
    }
}

impl From<i32> for ExactRational {
    fn from(value: i32) -> Self {
        ExactRational(Rational::from(value))
    }
}

impl From<Rational> for ExactRational {
    fn from(value: Rational) -> Self {
        ExactRational(value)
    }
}

impl TryFrom<f64> for ExactRational {
    type Error = MeshError;

    /// Exact conversion; every finite `f64` is a dyadic rational.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Rational::from_f64(value)
            .map(ExactRational)
            .ok_or(MeshError::NonFiniteCoordinate(value))
    }
}

impl fmt::Display for ExactRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Scalar for ExactRational {
    fn bbox_bounds(&self) -> (f64, f64) {
        // to_f64 rounds to nearest, so the exact value is within one ulp
        let approx = self.0.to_f64();
        (f64_next_down(approx), f64_next_up(approx))
    }

    fn sign(&self) -> Sign {
        match self.0.cmp0() {
            Ordering::Less => Sign::Negative,
            Ordering::Equal => Sign::Zero,
            Ordering::Greater => Sign::Positive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_is_exact() {
        let third = ExactRational::from_ratio(1, 3);
        let sum = third.clone() + third.clone() + third;
        assert_eq!(sum, ExactRational::one());

        let a = ExactRational::from_ratio(1, 10);
        let b = ExactRational::from_ratio(2, 10);
        assert_eq!(&a + &b, ExactRational::from_ratio(3, 10));
    }

    #[test]
    fn bbox_bounds_contain_value() {
        let third = ExactRational::from_ratio(1, 3);
        let (lo, hi) = third.bbox_bounds();
        assert!(ExactRational::try_from(lo).unwrap() <= third);
        assert!(ExactRational::try_from(hi).unwrap() >= third);
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(ExactRational::try_from(f64::NAN).is_err());
        assert!(ExactRational::try_from(f64::INFINITY).is_err());
        assert_eq!(
            ExactRational::try_from(0.5).unwrap(),
            ExactRational::from_ratio(1, 2)
        );
    }
}

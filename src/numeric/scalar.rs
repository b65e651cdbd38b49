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

use num_traits::{One, Zero};

use std::{
    cmp::Ordering,
    fmt::Debug,
    ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// Sign of a predicate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    pub fn is_zero(self) -> bool {
        self == Sign::Zero
    }

    /// Both signs are non-zero and equal.
    pub fn same_strict(self, other: Sign) -> bool {
        self != Sign::Zero && self == other
    }
}

/// Number type carried by points, vectors and predicates.
///
/// Implemented for `f64` (inexact) and [`ExactRational`](super::exact_rational::ExactRational)
/// (exact). Predicates are only as exact as the scalar they are evaluated with.
pub trait Scalar:
    Clone
    + Debug
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + Zero
    + One
    + From<i32>
    + Send
    + Sync
    + 'static
{
    /// An `f64` interval guaranteed to contain this value.
    fn bbox_bounds(&self) -> (f64, f64);

    fn sign(&self) -> Sign {
        match self.partial_cmp(&Self::zero()) {
            Some(Ordering::Less) => Sign::Negative,
            Some(Ordering::Greater) => Sign::Positive,
            // NaN compares as zero
            _ => Sign::Zero,
        }
    }

    fn is_positive(&self) -> bool {
        self.sign() == Sign::Positive
    }

    fn is_negative(&self) -> bool {
        self.sign() == Sign::Negative
    }

    fn abs(&self) -> Self {
        if self.is_negative() {
            -self.clone()
        } else {
            self.clone()
        }
    }
}

impl Scalar for f64 {
    fn bbox_bounds(&self) -> (f64, f64) {
        (*self, *self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f64_sign() {
        assert_eq!((-2.0f64).sign(), Sign::Negative);
        assert_eq!(0.0f64.sign(), Sign::Zero);
        assert_eq!(3.5f64.sign(), Sign::Positive);
        assert_eq!(f64::NAN.sign(), Sign::Zero);
    }

    #[test]
    fn strict_sign_agreement() {
        assert!(Sign::Positive.same_strict(Sign::Positive));
        assert!(!Sign::Zero.same_strict(Sign::Zero));
        assert!(!Sign::Negative.same_strict(Sign::Positive));
    }
}

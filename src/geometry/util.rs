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

/// Next representable `f64` above `x`. NaN and `+inf` map to themselves.
#[inline(always)]
pub fn f64_next_up(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY {
        return x;
    }
    if x == 0.0 {
        return f64::from_bits(1);
    }
    let bits = x.to_bits();
    f64::from_bits(if x > 0.0 { bits + 1 } else { bits - 1 })
}

/// Next representable `f64` below `x`. NaN and `-inf` map to themselves.
#[inline(always)]
pub fn f64_next_down(x: f64) -> f64 {
    -f64_next_up(-x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_up_and_down_bracket() {
        for x in [1.0, -1.0, 0.1, -1e300, 3.5e-200] {
            assert!(f64_next_down(x) < x);
            assert!(f64_next_up(x) > x);
        }
        assert!(f64_next_up(0.0) > 0.0);
        assert!(f64_next_down(0.0) < 0.0);
        assert_eq!(f64_next_up(f64::INFINITY), f64::INFINITY);
        assert_eq!(f64_next_down(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert_eq!(f64_next_up(f64::MAX), f64::INFINITY);
        assert_eq!(f64_next_down(1.0), 1.0 - f64::EPSILON / 2.0);
    }
}

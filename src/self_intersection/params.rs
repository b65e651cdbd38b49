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

/// Configuration of a self-intersection scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfIntersectionParams {
    /// Working-set size at or below which the broad phase stops splitting
    /// and tests every pair directly. `0` behaves as `1`.
    pub cutoff: usize,
    /// Run independent partitions on the rayon thread pool.
    pub parallel: bool,
    /// Partitions smaller than this are scanned on the current thread even
    /// when `parallel` is set.
    pub parallel_grain: usize,
    /// Seed for the sampled split-value selection. Scans with the same seed
    /// visit partitions identically.
    pub seed: u64,
}

impl Default for SelfIntersectionParams {
    fn default() -> Self {
        Self {
            cutoff: 2000,
            parallel: false,
            parallel_grain: 4096,
            seed: 0x5eed_cafe_f00d_d00d,
        }
    }
}

impl SelfIntersectionParams {
    pub fn with_cutoff(mut self, cutoff: usize) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Enable or disable the rayon driver.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_parallel_grain(mut self, grain: usize) -> Self {
        self.parallel_grain = grain;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Cutoff actually used by the broad phase.
    pub fn effective_cutoff(&self) -> usize {
        self.cutoff.max(1)
    }
}

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

use thiserror::Error;

/// Result type alias for mesh construction.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors raised while building a [`Mesh`](crate::mesh::core::Mesh).
///
/// Construction is atomic: a face rejected with one of these errors leaves
/// the mesh exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    #[error("face references vertex {index}, but the mesh has {vertex_count} vertices")]
    InvalidVertexIndex { index: usize, vertex_count: usize },

    #[error("face has {0} vertices, at least 3 are required")]
    TooFewVertices(usize),

    #[error("vertex {0} appears more than once in the same face")]
    RepeatedVertex(usize),

    #[error("directed edge ({from}, {to}) is already bound to face {face}")]
    NonManifoldEdge { from: usize, to: usize, face: usize },

    #[error("coordinate {0} is not finite")]
    NonFiniteCoordinate(f64),
}

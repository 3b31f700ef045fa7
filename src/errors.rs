//! Error types raised during degree sequence validation.
//!
//! All errors surface before the first edge of a sample is emitted. Once the
//! construction loop has started, a failure would be an implementation bug
//! and is caught by assertions instead.

use thiserror::Error;

/// Reasons a degree sequence can be rejected by the samplers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// The sequence contains a negative entry, or its stub sum is odd where
    /// an even sum is required.
    #[error("invalid degree sequence")]
    InvalidDegree,

    /// No simple graph realizes the sequence: the sum is odd, an entry is at
    /// least the number of vertices, or the Erdős–Gallai inequalities fail.
    #[error("the degree sequence is not graphical")]
    NotGraphical,

    /// No loop-free multigraph realizes the sequence: the sum is odd or
    /// smaller than twice the largest degree.
    #[error("the degree sequence is not multigraphical")]
    NotMultigraphical,

    /// No connected realization exists: the sequence is empty, a vertex is
    /// isolated while others are present, or there are fewer edges than
    /// needed to reach every vertex.
    #[error("the degree sequence is not potentially connected")]
    NotPotentiallyConnected,
}

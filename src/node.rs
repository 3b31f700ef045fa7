/*!
# Nodes & Degrees

Vertices are unlabelled and numbered `0` to `n - 1`. We represent them as
`u32`, which suffices for any degree sequence this crate can realistically
process and halves the memory footprint compared to `u64/usize`.

A vertex of degree `d` owns `d` *stubs* (half-edges). Degrees shrink as the
samplers lay down edges, so a [`Degree`] is always the *residual* stub count
of a vertex, not necessarily its final degree in the output graph.
*/

use stream_bitset::bitset::BitSetImpl;

/// A vertex, identified by its 0-based index.
pub type Node = u32;

/// Number of nodes in a graph. There can be at most `2^32 - 1` of them.
pub type NumNodes = u32;

/// Residual stub count of a single vertex.
///
/// For simple graphs a degree is always smaller than the number of vertices;
/// loop-free multigraphs carry no such bound.
pub type Degree = u32;

/// BitSet over nodes, used for per-vertex exclusion masks.
pub type NodeBitSet = BitSetImpl<Node>;

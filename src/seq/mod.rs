/*!
# Degree Sequences

Mutable residual degree sequences, one flavor per graph class:

- [`DegreeSequence`] serves the simple-graph samplers. It keeps its vertices
  sorted by residual degree at all times (at `O(1)` cost per stub update) and
  offers the Erdős–Gallai graphicality test plus the watershed computation
  that drives candidate selection.
- [`MultiDegreeSequence`] serves the loop-free multigraph samplers and only
  tracks the running maximum and sum, which is all multigraphicality needs.

Both are constructed once per sample, consumed by the sampler as the graph
is built, and discarded afterwards.
*/

pub mod multi;
pub mod simple;

pub use multi::MultiDegreeSequence;
pub use simple::DegreeSequence;

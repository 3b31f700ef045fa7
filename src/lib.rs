/*!
`degsample` draws random graphs whose vertices have **prescribed degrees**,
using an incremental construction that never backtracks: every draw is a
valid graph realizing the exact target degree sequence, together with the
log-probability under which it was produced. Reweighting draws by that
probability turns them into unbiased estimators over all realizations
(importance sampling).

Four sampling problems are covered, chosen by two independent switches:

- **simple** graphs vs. loop-free **multigraphs** (parallel edges allowed,
  self-loops never),
- **unconstrained** vs. **connected** output.

# Representation

Nodes are `u32` indices in `0..n`; edges are the tuple struct
[`Edge(u, v)`](edge::Edge) in construction order. Degree sequences enter as
`i64` slices so invalid (negative) input is representable and rejected with
a domain error.

# How it works

The samplers process vertices in index order and repeatedly connect the
current vertex to a partner chosen from a *feasible* candidate set:

- for simple graphs, feasibility comes from the Erdős–Gallai inequalities,
  evaluated incrementally via a "watershed" degree on a
  [`DegreeSequence`](seq::DegreeSequence) that stays sorted under stub
  updates;
- for multigraphs, from the inequality `dsum >= 2 * dmax` on a
  [`MultiDegreeSequence`](seq::MultiDegreeSequence);
- for connected output, additionally from a union-find
  [`ConnTracker`](conn::ConnTracker) over the components built so far.

Candidates are weighted by `degree^alpha` (`alpha = 1` is
proportional-to-stub-count); every pick's probability accumulates into the
reported log-probability.

# Usage

```
use degsample::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

let rng = &mut Pcg64Mcg::seed_from_u64(42);

// Draw a connected simple graph on six vertices.
let ds = DegreeSequence::new(&[2, 3, 1, 2, 2, 2]).unwrap();
let draw = sample_conn(ds, 1.0, rng).unwrap();

assert_eq!(draw.edges.len(), 6);
assert!(draw.log_prob <= 0.0);
```

Callers that draw repeatedly can bind the sequence and a seedable PRNG once
via [`GraphSampler`](sample::GraphSampler).
*/

pub mod conn;
pub mod edge;
pub mod errors;
pub mod io;
pub mod node;
pub mod sample;
pub mod seq;
pub mod utils;

/// `degsample::prelude` includes the node/edge definitions, the degree
/// sequences, the connectivity tracker, the error type, and all samplers.
pub mod prelude {
    pub use super::{conn::*, edge::*, errors::*, node::*, sample::*, seq::*};
}

/*!
# Samplers

Four procedures draw a random graph realizing a prescribed degree sequence:

| | unconstrained | connected |
|---|---|---|
| **simple graph** | [`sample`] | [`sample_conn`] |
| **loop-free multigraph** | [`sample_multi`] | [`sample_conn_multi`] |

All four share one skeleton. Vertices are processed in index order; the
current vertex repeatedly picks a partner `u > vertex` from a candidate set
guaranteed to keep the residual sequence realizable, so construction never
backtracks and every draw is a valid graph. Candidates are weighted by
their residual degree (tilted by the exponent `alpha` for the simple
variants), and each pick's probability `weight / total` accumulates into
the returned log-probability: the log of the sampler's own law, ready for
importance reweighting.

The builder-style [`GraphSampler`] wraps the four procedures behind a bound
degree sequence and a seedable PRNG for callers that draw repeatedly.

# Example
```
use degsample::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

let rng = &mut Pcg64Mcg::seed_from_u64(42);
let ds = DegreeSequence::new(&[2, 2, 2, 2]).unwrap();
let draw = sample(ds, 1.0, rng).unwrap();

assert_eq!(draw.edges.len(), 4);
assert!(draw.log_prob <= 0.0);
```
*/

use rand::{Rng, SeedableRng};
use rand_distr::{weighted::WeightedIndex, Distribution};
use rand_pcg::Pcg64Mcg;

use crate::{
    edge::EdgeList,
    errors::SampleError,
    node::*,
    seq::{DegreeSequence, MultiDegreeSequence},
};

pub mod multi;
pub mod simple;

pub use multi::{sample_conn_multi, sample_multi};
pub use simple::{sample, sample_conn};

/// One draw: the sampled edge list and the natural log of the probability
/// with which this sampler produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Edges in construction order, 0-based endpoints.
    pub edges: EdgeList,
    /// Log-probability of this draw under the sampler's own law.
    pub log_prob: f64,
}

/// Draws one entry from `allowed` with probability proportional to its
/// weight. Returns the chosen node, its weight, and the weight total.
pub(crate) fn draw_weighted<R>(allowed: &[Node], weights: &[f64], rng: &mut R) -> (Node, f64, f64)
where
    R: Rng,
{
    debug_assert_eq!(allowed.len(), weights.len());

    let total: f64 = weights.iter().sum();
    let choose = WeightedIndex::new(weights).unwrap();
    let idx = choose.sample(rng);

    (allowed[idx], weights[idx], total)
}

/// A degree sequence bound to a seedable PRNG, drawing one graph per call.
///
/// Configure the variant with the builder setters, then call
/// [`draw`](Self::draw) as often as needed; every call advances the internal
/// generator, and re-seeding reproduces the draw stream bit for bit.
///
/// # Example
/// ```
/// use degsample::prelude::*;
///
/// let mut sampler = GraphSampler::new(&[2, 2, 2, 2])
///     .unwrap()
///     .connected(true);
/// sampler.seed(7);
///
/// let first = sampler.draw().unwrap();
/// let second = sampler.draw().unwrap();
///
/// sampler.seed(7);
/// assert_eq!(sampler.draw().unwrap(), first);
/// assert_eq!(sampler.draw().unwrap(), second);
/// ```
#[derive(Debug, Clone)]
pub struct GraphSampler {
    degrees: Vec<Degree>,
    alpha: f64,
    connected: bool,
    multi: bool,
    rng: Pcg64Mcg,
}

impl GraphSampler {
    /// Binds a sampler to a degree sequence, with a nondeterministic seed,
    /// `alpha = 1` and the plain simple-graph variant.
    ///
    /// # Errors
    /// [`SampleError::InvalidDegree`] if any entry is negative. Whether the
    /// sequence is realizable is checked per variant on each
    /// [`draw`](Self::draw).
    pub fn new(degrees: &[i64]) -> Result<Self, SampleError> {
        if degrees.iter().any(|&d| d < 0) {
            return Err(SampleError::InvalidDegree);
        }

        Ok(Self {
            degrees: degrees.iter().map(|&d| d as Degree).collect(),
            alpha: 1.0,
            connected: false,
            multi: false,
            rng: Pcg64Mcg::from_rng(&mut rand::rng()),
        })
    }

    /// Resets the internal PRNG to a fixed seed.
    pub fn seed(&mut self, seed: u64) {
        self.rng = Pcg64Mcg::seed_from_u64(seed);
    }

    /// Sets the selection exponent: candidates are weighted by
    /// `degree^alpha` (mutable setter).
    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }

    /// Sets the selection exponent and returns the sampler (builder style).
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.set_alpha(alpha);
        self
    }

    /// Restricts draws to connected graphs (mutable setter).
    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    /// Restricts draws to connected graphs and returns the sampler
    /// (builder style).
    pub fn connected(mut self, connected: bool) -> Self {
        self.set_connected(connected);
        self
    }

    /// Switches between simple graphs and loop-free multigraphs
    /// (mutable setter).
    pub fn set_multi(&mut self, multi: bool) {
        self.multi = multi;
    }

    /// Switches between simple graphs and loop-free multigraphs and returns
    /// the sampler (builder style).
    pub fn multi(mut self, multi: bool) -> Self {
        self.set_multi(multi);
        self
    }

    /// The bound degree sequence.
    #[inline]
    pub fn degrees(&self) -> &[Degree] {
        &self.degrees
    }

    /// Number of vertices per degree value, indexed by degree.
    pub fn degree_histogram(&self) -> Vec<NumNodes> {
        let Some(&dmax) = self.degrees.iter().max() else {
            return Vec::new();
        };

        let mut counts = vec![0; dmax as usize + 1];
        for &d in &self.degrees {
            counts[d as usize] += 1;
        }
        counts
    }

    /// Returns `true` if the bound sequence is realizable as a simple graph.
    pub fn is_graphical(&self) -> bool {
        DegreeSequence::new(&self.signed())
            .map(|ds| ds.is_graphical())
            .unwrap_or(false)
    }

    /// Draws one graph with the configured variant and exponent.
    ///
    /// # Errors
    /// The realizability errors of the selected variant; see [`sample`],
    /// [`sample_conn`], [`sample_multi`] and [`sample_conn_multi`].
    pub fn draw(&mut self) -> Result<Sample, SampleError> {
        let degrees = self.signed();
        match (self.multi, self.connected) {
            (false, false) => sample(DegreeSequence::new(&degrees)?, self.alpha, &mut self.rng),
            (false, true) => {
                sample_conn(DegreeSequence::new(&degrees)?, self.alpha, &mut self.rng)
            }
            (true, false) => sample_multi(
                MultiDegreeSequence::new(&degrees)?,
                self.alpha,
                &mut self.rng,
            ),
            (true, true) => sample_conn_multi(
                MultiDegreeSequence::new(&degrees)?,
                self.alpha,
                &mut self.rng,
            ),
        }
    }

    fn signed(&self) -> Vec<i64> {
        self.degrees.iter().map(|&d| d as i64).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_degrees() {
        assert_eq!(
            GraphSampler::new(&[2, -1]).unwrap_err(),
            SampleError::InvalidDegree
        );
    }

    #[test]
    fn front_end_queries() {
        let sampler = GraphSampler::new(&[2, 2, 2, 2]).unwrap();
        assert_eq!(sampler.degrees(), &[2, 2, 2, 2]);
        assert_eq!(sampler.degree_histogram(), vec![0, 0, 4]);
        assert!(sampler.is_graphical());

        // entry >= n: not realizable as a simple graph
        assert!(!GraphSampler::new(&[3, 1, 1]).unwrap().is_graphical());

        assert!(GraphSampler::new(&[]).unwrap().degree_histogram().is_empty());
    }

    #[test]
    fn draw_dispatches_on_variant() {
        let mut sampler = GraphSampler::new(&[3, 1, 1, 1]).unwrap();
        sampler.seed(3);

        // the star is the unique simple realization
        let draw = sampler.draw().unwrap();
        assert_eq!(draw.edges.len(), 3);

        sampler.set_multi(true);
        sampler.set_connected(true);
        let draw = sampler.draw().unwrap();
        assert_eq!(draw.edges.len(), 3);

        // a matching cannot be connected
        let mut sampler = GraphSampler::new(&[1, 1, 1, 1]).unwrap().connected(true);
        assert_eq!(
            sampler.draw().unwrap_err(),
            SampleError::NotPotentiallyConnected
        );
    }
}

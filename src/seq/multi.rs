//! Residual degree sequence for loop-free multigraph sampling.

use std::ops::Index;

use crate::{errors::SampleError, node::*};

/// A degree sequence tracking only what multigraphicality needs: the raw
/// degrees, their sum, and the running maximum.
///
/// A sequence is realizable as a loop-free multigraph iff its sum is even
/// and at least twice its largest entry, so no sort order or histogram is
/// required.
///
/// # Example
/// ```
/// use degsample::seq::MultiDegreeSequence;
///
/// let ds = MultiDegreeSequence::new(&[5, 1, 1, 1]).unwrap();
/// assert!(!ds.is_multigraphical()); // 8 < 2 * 5
///
/// let ds = MultiDegreeSequence::new(&[4, 2, 1, 1]).unwrap();
/// assert!(ds.is_multigraphical());
/// ```
#[derive(Debug, Clone)]
pub struct MultiDegreeSequence {
    /// Current residual degree of each vertex
    degrees: Vec<Degree>,
    /// Largest residual degree, or `0` if all stubs are consumed
    dmax: Degree,
    /// Sum of all residual degrees
    dsum: u64,
}

impl MultiDegreeSequence {
    /// Builds the sequence in `O(n)`.
    ///
    /// # Errors
    /// [`SampleError::InvalidDegree`] if any entry is negative. Unlike the
    /// simple-graph sequence, entries may reach or exceed the vertex count.
    pub fn new(degrees: &[i64]) -> Result<Self, SampleError> {
        let mut ds = Self {
            degrees: Vec::with_capacity(degrees.len()),
            dmax: 0,
            dsum: 0,
        };

        for &d in degrees {
            if d < 0 {
                return Err(SampleError::InvalidDegree);
            }
            let d = d as Degree;

            ds.dmax = ds.dmax.max(d);
            ds.dsum += d as u64;
            ds.degrees.push(d);
        }

        Ok(ds)
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    /// Returns `true` if the sequence has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    /// Current residual degrees, indexed by vertex.
    #[inline]
    pub fn degrees(&self) -> &[Degree] {
        &self.degrees
    }

    /// Largest residual degree, or `0` if all stubs are consumed.
    #[inline]
    pub fn dmax(&self) -> Degree {
        self.dmax
    }

    /// Sum of all residual degrees.
    #[inline]
    pub fn dsum(&self) -> u64 {
        self.dsum
    }

    /// Removes one stub from vertex `u`, amortized `O(1)`.
    ///
    /// A linear rescan restores `dmax` when the decremented vertex held it.
    /// The maximum only ever moves downward during a sample, so the rescans
    /// cost `O(n)` at most `dmax` times in total.
    pub fn decrement(&mut self, u: Node) {
        debug_assert!(self.degrees[u as usize] > 0, "vertex {u} has no stubs left");

        self.degrees[u as usize] -= 1;
        self.dsum -= 1;

        if self.degrees[u as usize] == self.dmax - 1 {
            self.dmax -= 1;
            for &d in &self.degrees {
                if d > self.dmax {
                    self.dmax = d;
                    break;
                }
            }
        }
    }

    /// Consumes one stub on each endpoint. Pure bookkeeping: the edge itself
    /// is recorded by the caller.
    #[inline]
    pub fn connect(&mut self, u: Node, v: Node) {
        self.decrement(u);
        self.decrement(v);
    }

    /// Multigraphicality test in `O(1)`: the stub sum must be even and no
    /// vertex may hold more than half of all stubs.
    #[inline]
    pub fn is_multigraphical(&self) -> bool {
        self.dsum % 2 == 0 && self.dsum >= 2 * self.dmax as u64
    }
}

impl Index<Node> for MultiDegreeSequence {
    type Output = Degree;

    #[inline]
    fn index(&self, v: Node) -> &Degree {
        &self.degrees[v as usize]
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::errors::SampleError;

    #[test]
    fn construction() {
        assert_eq!(
            MultiDegreeSequence::new(&[2, -3]).unwrap_err(),
            SampleError::InvalidDegree
        );

        // Degrees beyond the vertex count are fine for multigraphs.
        let ds = MultiDegreeSequence::new(&[7, 4, 3]).unwrap();
        assert_eq!(ds.degrees(), &[7, 4, 3]);
        assert_eq!(ds.dmax(), 7);
        assert_eq!(ds.dsum(), 14);
        assert!(ds.is_multigraphical());

        let ds = MultiDegreeSequence::new(&[]).unwrap();
        assert!(ds.is_empty());
        assert!(ds.is_multigraphical());
    }

    #[test]
    fn multigraphicality() {
        // odd sum
        assert!(!MultiDegreeSequence::new(&[2, 1]).unwrap().is_multigraphical());
        // one vertex holds more than half of all stubs
        assert!(!MultiDegreeSequence::new(&[5, 1, 1, 1]).unwrap().is_multigraphical());
        // double edge
        assert!(MultiDegreeSequence::new(&[2, 2]).unwrap().is_multigraphical());
        // exhausted
        assert!(MultiDegreeSequence::new(&[0, 0]).unwrap().is_multigraphical());
    }

    #[test]
    fn dmax_tracks_decrements() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [2usize, 5, 10, 30] {
            for _ in 0..20 {
                let degrees = (0..n)
                    .map(|_| rng.random_range(0..3 * n as i64))
                    .collect_vec();
                let mut ds = MultiDegreeSequence::new(&degrees).unwrap();

                loop {
                    let alive = (0..n as Node).filter(|&v| ds[v] > 0).collect_vec();
                    if alive.is_empty() {
                        break;
                    }
                    let u = alive[rng.random_range(0..alive.len())];

                    ds.decrement(u);

                    assert_eq!(
                        ds.dmax(),
                        ds.degrees().iter().copied().max().unwrap_or(0)
                    );
                    assert_eq!(
                        ds.dsum(),
                        ds.degrees().iter().map(|&d| d as u64).sum::<u64>()
                    );
                }
            }
        }
    }
}

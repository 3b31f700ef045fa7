//! Residual degree sequence for simple-graph sampling.

use std::ops::Index;

use crate::{errors::SampleError, node::*};

/// A degree sequence of `n` degrees `0 <= d < n`, kept sorted by degree.
///
/// Beyond the raw degrees, the struct maintains a degree histogram, its
/// prefix sums, and a permutation of the vertices sorted non-decreasingly by
/// current degree. The sort order survives [`decrement`](Self::decrement) /
/// [`increment`](Self::increment) at `O(1)` cost: the moved vertex swaps
/// with the vertex sitting on the boundary of its new degree class.
///
/// # Example
/// ```
/// use degsample::seq::DegreeSequence;
///
/// let ds = DegreeSequence::new(&[2, 2, 2, 2]).unwrap();
/// assert!(ds.is_graphical());
///
/// let ds = DegreeSequence::new(&[3, 1, 1, 1, 1]).unwrap();
/// assert!(!ds.is_graphical()); // odd sum
/// ```
#[derive(Debug, Clone)]
pub struct DegreeSequence {
    /// Current residual degree of each vertex
    degrees: Vec<Degree>,
    /// `deg_counts[d]` is the number of vertices with residual degree `d`
    deg_counts: Vec<NumNodes>,
    /// `accum_counts[d]` is the number of vertices with residual degree `<= d`
    accum_counts: Vec<NumNodes>,
    /// Vertex indices sorted non-decreasingly by residual degree
    sorted_verts: Vec<Node>,
    /// Inverse of `sorted_verts`: `sorted_verts[sorted_index[u]] == u`
    sorted_index: Vec<NumNodes>,
    /// Largest non-zero residual degree, or `0` if none remain
    dmax: Degree,
    /// Smallest non-zero residual degree, or `0` if none remain
    dmin: Degree,
    /// Number of vertices with non-zero residual degree
    n_nonzero: NumNodes,
    /// Sum of all residual degrees
    dsum: u64,
}

impl DegreeSequence {
    /// Builds the sequence and all auxiliary structures in `O(n log n)`.
    ///
    /// # Errors
    /// - [`SampleError::InvalidDegree`] if any entry is negative
    /// - [`SampleError::NotGraphical`] if any entry is at least `n` (such a
    ///   sequence cannot be realized by a simple graph)
    ///
    /// The Erdős–Gallai inequalities are *not* checked here; call
    /// [`is_graphical`](Self::is_graphical) for that.
    pub fn new(degrees: &[i64]) -> Result<Self, SampleError> {
        let n = degrees.len();

        let mut checked = Vec::with_capacity(n);
        let mut deg_counts = vec![0 as NumNodes; n];
        let mut dmax: Degree = 0;
        let mut dmin = Degree::MAX;
        let mut n_nonzero: NumNodes = 0;
        let mut dsum: u64 = 0;

        for &d in degrees {
            if d < 0 {
                return Err(SampleError::InvalidDegree);
            }
            if d >= n as i64 {
                return Err(SampleError::NotGraphical);
            }
            let d = d as Degree;

            if d != 0 {
                dmin = dmin.min(d);
                dmax = dmax.max(d);
                n_nonzero += 1;
            }

            deg_counts[d as usize] += 1;
            dsum += d as u64;
            checked.push(d);
        }

        if n_nonzero == 0 {
            dmin = 0;
        }

        let mut sorted_verts: Vec<Node> = (0..n as Node).collect();
        sorted_verts.sort_by_key(|&v| checked[v as usize]);

        let mut sorted_index = vec![0 as NumNodes; n];
        for (i, &v) in sorted_verts.iter().enumerate() {
            sorted_index[v as usize] = i as NumNodes;
        }

        let mut accum_counts = vec![0 as NumNodes; n];
        let mut acc = 0;
        for (count, accum) in deg_counts.iter().zip(accum_counts.iter_mut()) {
            acc += count;
            *accum = acc;
        }

        Ok(Self {
            degrees: checked,
            deg_counts,
            accum_counts,
            sorted_verts,
            sorted_index,
            dmax,
            dmin,
            n_nonzero,
            dsum,
        })
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

    /// Number of vertices per residual degree value, indexed by degree.
    #[inline]
    pub fn degree_histogram(&self) -> &[NumNodes] {
        &self.deg_counts
    }

    /// Largest non-zero residual degree, or `0` if all stubs are consumed.
    #[inline]
    pub fn dmax(&self) -> Degree {
        self.dmax
    }

    /// Smallest non-zero residual degree, or `0` if all stubs are consumed.
    #[inline]
    pub fn dmin(&self) -> Degree {
        self.dmin
    }

    /// Sum of all residual degrees.
    #[inline]
    pub fn dsum(&self) -> u64 {
        self.dsum
    }

    /// Vertices in non-increasing order of residual degree.
    #[inline]
    pub(crate) fn sorted_desc(&self) -> impl Iterator<Item = Node> + '_ {
        self.sorted_verts.iter().rev().copied()
    }

    /// `d_i` of the non-increasingly sorted sequence, 1-based.
    #[inline]
    fn d(&self, i: i64) -> Degree {
        self.degrees[self.sorted_verts[self.len() - i as usize] as usize]
    }

    /// Removes one stub from vertex `u` in `O(1)`.
    ///
    /// The vertex moves to the rightmost slot of its new degree class by a
    /// single swap with the current class boundary.
    pub fn decrement(&mut self, u: Node) {
        let d = self.degrees[u as usize];
        debug_assert!(d > 0, "vertex {u} has no stubs left");

        self.degrees[u as usize] = d - 1;
        self.deg_counts[d as usize] -= 1;
        self.deg_counts[(d - 1) as usize] += 1;
        self.dsum -= 1;

        if self.deg_counts[self.dmax as usize] == 0 {
            self.dmax -= 1;
        }

        if d == 1 {
            self.n_nonzero -= 1;
        }

        if self.n_nonzero == 0 {
            self.dmin = 0;
        } else if d == 1 {
            // the vertex left the non-zero set; it may have been the last
            // one holding dmin
            while self.deg_counts[self.dmin as usize] == 0 {
                self.dmin += 1;
            }
        } else if d == self.dmin {
            self.dmin = d - 1;
        }

        let si_old = self.sorted_index[u as usize] as usize;
        let si_new = self.accum_counts[(d - 1) as usize] as usize;

        let v = self.sorted_verts[si_new];
        self.sorted_index[u as usize] = si_new as NumNodes;
        self.sorted_index[v as usize] = si_old as NumNodes;
        self.sorted_verts.swap(si_old, si_new);

        self.accum_counts[(d - 1) as usize] += 1;
    }

    /// Restores one stub on vertex `u` in `O(1)`. Inverse of
    /// [`decrement`](Self::decrement).
    pub fn increment(&mut self, u: Node) {
        let d = self.degrees[u as usize];
        debug_assert!(
            (d as usize) + 1 < self.len(),
            "degree of vertex {u} would reach the vertex count"
        );

        self.degrees[u as usize] = d + 1;
        self.deg_counts[d as usize] -= 1;
        self.deg_counts[(d + 1) as usize] += 1;
        self.dsum += 1;

        if d == self.dmax {
            self.dmax += 1;
        }

        if d == 0 {
            self.n_nonzero += 1;
            self.dmin = 1;
        } else if d == self.dmin && self.deg_counts[d as usize] == 0 {
            while self.deg_counts[self.dmin as usize] == 0 {
                self.dmin += 1;
            }
        }

        let si_old = self.sorted_index[u as usize] as usize;
        let si_new = self.accum_counts[d as usize] as usize - 1;

        let v = self.sorted_verts[si_new];
        self.sorted_index[u as usize] = si_new as NumNodes;
        self.sorted_index[v as usize] = si_old as NumNodes;
        self.sorted_verts.swap(si_old, si_new);

        self.accum_counts[d as usize] -= 1;
    }

    /// Consumes one stub on each endpoint. Pure bookkeeping: the edge itself
    /// is recorded by the caller.
    #[inline]
    pub fn connect(&mut self, u: Node, v: Node) {
        self.decrement(u);
        self.decrement(v);
    }

    /// Erdős–Gallai graphicality test in `O(n)`.
    ///
    /// Rejects odd sums outright, accepts exhausted sequences and sequences
    /// satisfying the Zverovich–Zverovich condition without a scan, and
    /// otherwise walks the degree classes from `dmax` down, checking the
    /// inequality at every left-partition boundary.
    pub fn is_graphical(&self) -> bool {
        if self.dsum % 2 == 1 {
            return false;
        }

        if self.n_nonzero == 0
            || 4 * self.dmin as u64 * self.n_nonzero as u64
                >= ((self.dmax + self.dmin + 1) as u64).pow(2)
        {
            return true;
        }

        let n = self.len() as i64;
        let mut k: i64 = 0;
        let mut sum_deg: i64 = 0;
        let mut sum_ni: i64 = 0;
        let mut sum_ini: i64 = 0;

        for dk in (self.dmin..=self.dmax).rev() {
            let dk = dk as i64;
            if dk < k + 1 {
                return true;
            }

            let mut run_size = self.deg_counts[dk as usize] as i64;
            if run_size > 0 {
                if dk < k + run_size {
                    run_size = dk - k;
                }
                sum_deg += run_size * dk;
                for v in 0..run_size {
                    let count = self.deg_counts[(k + v) as usize] as i64;
                    sum_ni += count;
                    sum_ini += (k + v) * count;
                }
                k += run_size;
                if sum_deg > k * (n - 1) - k * sum_ni + sum_ini {
                    return false;
                }
            }
        }

        true
    }

    /// The smallest degree a stub may be connected to without breaking
    /// graphicality, in `O(n)`.
    ///
    /// Callers must have consumed all but one stub of the active vertex
    /// against its forced high-degree partners and then removed the final
    /// stub, so the residual sum is odd. The running Erdős–Gallai slack over
    /// the non-increasing order then pins down the watershed: a slack of one
    /// at position `k` forces partners of degree at least `d_k`.
    pub fn watershed(&self) -> Degree {
        debug_assert!(self.dsum % 2 == 1, "watershed requires an odd stub sum");

        let n = self.len() as i64;
        let mut wd: Degree = 0;

        let mut lhs: i64 = 0;
        let mut s = n;
        let mut r: i64 = 0;

        for k in 1..=n {
            lhs += self.d(k) as i64;

            while s >= k && (self.d(s) as i64) < k {
                r += self.d(s) as i64;
                s -= 1;
            }

            if s < k {
                break;
            }

            let rhs = k * (s - 1) + r;
            let diff = lhs - rhs;

            debug_assert!(diff <= 1);

            if diff == 1 {
                return self.d(k);
            }

            if diff == 0 {
                wd = (k + 1) as Degree;
            }
        }

        wd
    }
}

impl Index<Node> for DegreeSequence {
    type Output = Degree;

    #[inline]
    fn index(&self, v: Node) -> &Degree {
        &self.degrees[v as usize]
    }
}

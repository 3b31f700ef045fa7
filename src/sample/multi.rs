//! Samplers for loop-free multigraphs, unconstrained and connected.

use rand::Rng;

use super::{draw_weighted, Sample};
use crate::{
    conn::ConnTracker,
    edge::{edge_multiplicities, Edge, EdgeList},
    errors::SampleError,
    node::*,
    seq::MultiDegreeSequence,
    utils::log_factorial,
};

/// Collects the feasible partners of `vertex` into `allowed`, weighted by
/// their raw residual degree.
///
/// Multigraphicality only requires `dsum >= 2 * dmax`, which yields two
/// regimes: while the inequality is loose (or the current vertex itself
/// holds the maximum), any vertex with a stub left is feasible; at equality
/// the maximum-degree vertex must take part in every edge, so only
/// maximum-degree partners are admitted.
pub(crate) fn candidates(
    ds: &MultiDegreeSequence,
    vertex: Node,
    mut tracker: Option<&mut ConnTracker>,
    allowed: &mut Vec<Node>,
    weights: &mut Vec<f64>,
) {
    let full = ds.dsum() > 2 * ds.dmax() as u64 || ds[vertex] == ds.dmax();

    for v in (vertex + 1)..ds.len() as Node {
        let dv = ds[v];
        if dv == 0 || (!full && dv != ds.dmax()) {
            continue;
        }

        if tracker
            .as_deref_mut()
            .map_or(true, |t| t.connectable(vertex, v))
        {
            allowed.push(v);
            weights.push(dv as f64);
        }
    }
}

/// Shared construction loop of [`sample_multi`] and [`sample_conn_multi`].
/// Validation happens in the callers.
fn sample_multigraph<R>(
    mut ds: MultiDegreeSequence,
    alpha: f64,
    mut tracker: Option<ConnTracker>,
    rng: &mut R,
) -> Result<Sample, SampleError>
where
    R: Rng,
{
    let n = ds.len();

    let mut edges = EdgeList::new();
    let mut log_prob = 0.0;

    if n == 0 {
        return Ok(Sample { edges, log_prob });
    }

    let mut vertex: Node = 0;
    let mut allowed: Vec<Node> = Vec::new();
    let mut weights: Vec<f64> = Vec::new();

    loop {
        if ds[vertex] == 0 {
            if vertex as usize == n - 1 {
                break;
            }

            vertex += 1;
            continue;
        }

        allowed.clear();
        weights.clear();
        candidates(&ds, vertex, tracker.as_mut(), &mut allowed, &mut weights);

        assert!(!allowed.is_empty(), "no feasible partner for vertex {vertex}");

        let (u, weight, total) = draw_weighted(&allowed, &weights, rng);
        log_prob += weight.ln() - total.ln() + (alpha - 1.0) * (ds[u] as f64).ln();

        ds.connect(u, vertex);
        if let Some(t) = tracker.as_mut() {
            t.connect(u, vertex);
        }
        edges.push(Edge(vertex, u));
    }

    // Parallel edges are interchangeable, so the construction tree reaches
    // each multigraph through `prod m_uv!` equally weighted leaves. Fold
    // that factor into the reported weight.
    for multiplicity in edge_multiplicities(&edges).into_values() {
        if multiplicity > 1 {
            log_prob -= log_factorial(multiplicity as u64);
        }
    }

    Ok(Sample { edges, log_prob })
}

/// Draws one loop-free multigraph realizing the degree sequence.
///
/// Partners are chosen proportionally to their residual degree; the
/// reported log-probability additionally carries the `(alpha - 1) * ln d`
/// tilt per pick and the multiplicity correction for parallel edges.
///
/// # Errors
/// [`SampleError::NotMultigraphical`] if the degree sum is odd or smaller
/// than twice the largest degree.
///
/// # Example
/// ```
/// use degsample::prelude::*;
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64Mcg;
///
/// let rng = &mut Pcg64Mcg::seed_from_u64(11);
/// let ds = MultiDegreeSequence::new(&[2, 2]).unwrap();
/// let draw = sample_multi(ds, 1.0, rng).unwrap();
///
/// // The double edge is the only realization.
/// assert_eq!(draw.edges, vec![Edge(0, 1), Edge(0, 1)]);
/// ```
pub fn sample_multi<R>(
    ds: MultiDegreeSequence,
    alpha: f64,
    rng: &mut R,
) -> Result<Sample, SampleError>
where
    R: Rng,
{
    if !ds.is_multigraphical() {
        return Err(SampleError::NotMultigraphical);
    }

    sample_multigraph(ds, alpha, None, rng)
}

/// Draws one *connected* loop-free multigraph realizing the degree
/// sequence.
///
/// Identical to [`sample_multi`] except that every candidate partner must
/// also keep a connected realization reachable; see
/// [`ConnTracker::connectable`].
///
/// # Errors
/// - [`SampleError::NotPotentiallyConnected`] for the empty sequence, for
///   stranded zero-degree vertices, or with fewer edges than needed to span
///   all vertices
/// - [`SampleError::NotMultigraphical`] if the degree sum is odd or smaller
///   than twice the largest degree
pub fn sample_conn_multi<R>(
    ds: MultiDegreeSequence,
    alpha: f64,
    rng: &mut R,
) -> Result<Sample, SampleError>
where
    R: Rng,
{
    if ds.is_empty() {
        return Err(SampleError::NotPotentiallyConnected);
    }

    if !ds.is_multigraphical() {
        return Err(SampleError::NotMultigraphical);
    }

    let tracker = ConnTracker::new(ds.degrees())?;
    if !tracker.is_potentially_connected() {
        return Err(SampleError::NotPotentiallyConnected);
    }

    sample_multigraph(ds, alpha, Some(tracker), rng)
}

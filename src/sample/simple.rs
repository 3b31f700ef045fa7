//! Samplers for simple graphs, unconstrained and connected.

use rand::Rng;

use super::{draw_weighted, Sample};
use crate::{
    conn::ConnTracker,
    edge::{Edge, EdgeList},
    errors::SampleError,
    node::*,
    seq::DegreeSequence,
};

/// Collects the feasible partners of `vertex` into `allowed`, weighted by
/// `degree^alpha`.
///
/// The `d - 1` highest-degree non-excluded vertices are always feasible
/// ("saturating prefix"): they are connected tentatively in the scratch copy
/// `work` so that, once the final stub of `vertex` is removed, the watershed
/// of the residual sequence yields the smallest degree that any further
/// partner must have. The descending walk then continues until it drops
/// below the watershed.
///
/// With a connectivity tracker present, every partner is additionally
/// filtered through [`ConnTracker::connectable`].
#[allow(clippy::too_many_arguments)]
pub(crate) fn candidates(
    ds: &DegreeSequence,
    work: &mut DegreeSequence,
    vertex: Node,
    exclusion: &NodeBitSet,
    mut tracker: Option<&mut ConnTracker>,
    alpha: f64,
    allowed: &mut Vec<Node>,
    weights: &mut Vec<f64>,
) {
    work.clone_from(ds);

    let mut order = ds.sorted_desc();
    let mut d = ds[vertex];

    while d > 1 {
        let v = order
            .next()
            .expect("ran out of partners inside the saturating prefix");
        if v == vertex || exclusion.get_bit(v) {
            continue;
        }

        work.connect(vertex, v);
        if tracker
            .as_deref_mut()
            .map_or(true, |t| t.connectable(vertex, v))
        {
            allowed.push(v);
            weights.push((ds[v] as f64).powf(alpha));
        }
        d -= 1;
    }

    work.decrement(vertex);

    // A partner must still own a stub, so never admit degree zero.
    let wd = work.watershed().max(1);

    for v in order {
        if ds[v] < wd {
            break;
        }
        if v == vertex || exclusion.get_bit(v) {
            continue;
        }
        if tracker
            .as_deref_mut()
            .map_or(true, |t| t.connectable(vertex, v))
        {
            allowed.push(v);
            weights.push((ds[v] as f64).powf(alpha));
        }
    }
}

/// Shared construction loop of [`sample`] and [`sample_conn`]. Validation
/// happens in the callers; from here on an empty candidate set is a bug.
fn sample_simple<R>(
    mut ds: DegreeSequence,
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

    // The current vertex we are connecting up; once it connects to a
    // partner, the partner is excluded for the rest of this vertex's stubs.
    let mut vertex: Node = 0;
    let mut exclusion = NodeBitSet::new(n as NumNodes);

    let mut allowed: Vec<Node> = Vec::new();
    let mut weights: Vec<f64> = Vec::new();
    let mut work = ds.clone();

    loop {
        if ds[vertex] == 0 {
            if vertex as usize == n - 1 {
                return Ok(Sample { edges, log_prob });
            }

            vertex += 1;
            exclusion.clear_all();
            continue;
        }

        allowed.clear();
        weights.clear();
        candidates(
            &ds,
            &mut work,
            vertex,
            &exclusion,
            tracker.as_mut(),
            alpha,
            &mut allowed,
            &mut weights,
        );

        assert!(!allowed.is_empty(), "no feasible partner for vertex {vertex}");

        let (u, weight, total) = draw_weighted(&allowed, &weights, rng);
        log_prob += weight.ln() - total.ln();

        exclusion.set_bit(u);
        ds.connect(u, vertex);
        if let Some(t) = tracker.as_mut() {
            t.connect(u, vertex);
        }
        edges.push(Edge(vertex, u));
    }
}

/// Draws one simple graph realizing the degree sequence.
///
/// Partners are chosen with weight `degree^alpha`; `alpha = 1` chooses
/// stubs uniformly. The returned log-probability is the log of the product
/// of all choice probabilities, i.e. the exact law under which this edge
/// list was produced.
///
/// # Errors
/// [`SampleError::NotGraphical`] if the sequence fails Erdős–Gallai.
///
/// # Example
/// ```
/// use degsample::prelude::*;
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64Mcg;
///
/// let rng = &mut Pcg64Mcg::seed_from_u64(11);
/// let ds = DegreeSequence::new(&[1, 1]).unwrap();
/// let draw = sample(ds, 1.0, rng).unwrap();
///
/// assert_eq!(draw.edges, vec![Edge(0, 1)]);
/// assert_eq!(draw.log_prob, 0.0);
/// ```
pub fn sample<R>(ds: DegreeSequence, alpha: f64, rng: &mut R) -> Result<Sample, SampleError>
where
    R: Rng,
{
    if !ds.is_graphical() {
        return Err(SampleError::NotGraphical);
    }

    sample_simple(ds, alpha, None, rng)
}

/// Draws one *connected* simple graph realizing the degree sequence.
///
/// Identical to [`sample`] except that every candidate partner must also
/// keep a connected realization reachable; see
/// [`ConnTracker::connectable`].
///
/// # Errors
/// - [`SampleError::NotPotentiallyConnected`] for the empty sequence (the
///   null graph is not considered connected), for sequences with stranded
///   zero-degree vertices, or with fewer edges than needed to span all
///   vertices
/// - [`SampleError::NotGraphical`] if the sequence fails Erdős–Gallai
pub fn sample_conn<R>(ds: DegreeSequence, alpha: f64, rng: &mut R) -> Result<Sample, SampleError>
where
    R: Rng,
{
    if ds.is_empty() {
        return Err(SampleError::NotPotentiallyConnected);
    }

    if !ds.is_graphical() {
        return Err(SampleError::NotGraphical);
    }

    let tracker = ConnTracker::new(ds.degrees())?;
    if !tracker.is_potentially_connected() {
        return Err(SampleError::NotPotentiallyConnected);
    }

    sample_simple(ds, alpha, Some(tracker), rng)
}

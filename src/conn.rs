/*!
# Connectivity Tracking

While a connected sampler lays down edges, the partial graph is a forest of
components ("supernodes") that must eventually merge into one. This module
tracks those components with a union-find whose class roots carry the sum of
residual stubs inside their class.

Two quantities decide feasibility: the number of remaining edges (half the
residual stub count) and the number of supernodes. A partial state can still
reach a connected graph iff no component has run out of stubs while others
remain, and enough edges are left to bridge all components.

The union-find parent link is an index into an owned element array rather
than a pointer, so a deep copy of the tracker is a plain [`Clone`] and
trackers can move freely across threads.
*/

use crate::{errors::SampleError, node::*};

/// One vertex slot in the union-find.
#[derive(Debug, Copy, Clone)]
struct ClassElem {
    /// Parent index; roots point to themselves.
    parent: Node,
    /// Sum of residual stubs over the class. Only meaningful on roots.
    class_deg: u64,
}

/// Tracks the connected components of a partially constructed graph.
///
/// # Example
/// ```
/// use degsample::conn::ConnTracker;
///
/// // A perfect matching on four vertices can never be connected.
/// let tracker = ConnTracker::new(&[1, 1, 1, 1]).unwrap();
/// assert!(!tracker.is_potentially_connected());
///
/// let mut tracker = ConnTracker::new(&[2, 2, 2]).unwrap();
/// assert!(tracker.is_potentially_connected());
/// tracker.connect(0, 1);
/// assert_eq!(tracker.component_count(), 2);
/// assert_eq!(tracker.edge_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ConnTracker {
    elems: Vec<ClassElem>,
    /// Number of supernodes (components, counting untouched singletons).
    n_supernodes: NumNodes,
    /// Half the total residual stub count: edges still to be placed.
    n_edges: u64,
    /// Latches `true` once any supernode runs out of stubs prematurely.
    closed: bool,
}

impl ConnTracker {
    /// Initializes one singleton class per vertex, carrying its degree.
    ///
    /// The tracker starts out `closed` if some vertex has no stubs while
    /// others exist: that vertex can never join the rest.
    ///
    /// # Errors
    /// [`SampleError::InvalidDegree`] if the stub sum is odd.
    pub fn new(degrees: &[Degree]) -> Result<Self, SampleError> {
        let n = degrees.len();

        let mut stubs: u64 = 0;
        let mut closed = false;
        let elems = degrees
            .iter()
            .enumerate()
            .map(|(i, &d)| {
                stubs += d as u64;
                if d == 0 && n > 1 {
                    closed = true;
                }
                ClassElem {
                    parent: i as Node,
                    class_deg: d as u64,
                }
            })
            .collect();

        if stubs % 2 == 1 {
            return Err(SampleError::InvalidDegree);
        }

        Ok(Self {
            elems,
            n_supernodes: n as NumNodes,
            n_edges: stubs / 2,
            closed,
        })
    }

    /// Number of supernodes (connected components so far, with untouched
    /// vertices counting as singletons).
    #[inline]
    pub fn component_count(&self) -> NumNodes {
        self.n_supernodes
    }

    /// Number of edges still to be placed.
    #[inline]
    pub fn edge_count(&self) -> u64 {
        self.n_edges
    }

    /// Root of the class containing `u`, with full path compression: after
    /// locating the root, a second pass repoints every element on the chain.
    pub fn get_class(&mut self, u: Node) -> Node {
        let mut root = u;
        while self.elems[root as usize].parent != root {
            root = self.elems[root as usize].parent;
        }

        let mut cur = u;
        while self.elems[cur as usize].parent != cur {
            let next = self.elems[cur as usize].parent;
            self.elems[cur as usize].parent = root;
            cur = next;
        }

        root
    }

    /// Residual stub count of the class containing `u`.
    #[inline]
    pub fn class_degree(&mut self, u: Node) -> u64 {
        let root = self.get_class(u);
        self.elems[root as usize].class_deg
    }

    /// Records the edge `(a, b)`: one stub is consumed on each side, and
    /// distinct classes merge into one.
    ///
    /// If the combined class runs out of stubs while edges remain elsewhere,
    /// the tracker latches `closed`.
    pub fn connect(&mut self, a: Node, b: Node) {
        self.n_edges -= 1;

        let root_a = self.get_class(a);
        let root_b = self.get_class(b);

        if root_a != root_b {
            self.n_supernodes -= 1;

            let deg_a = self.elems[root_a as usize].class_deg;
            let deg_b = self.elems[root_b as usize].class_deg;
            debug_assert!(deg_a >= 1 && deg_b >= 1);

            self.elems[root_a as usize].parent = root_b;
            self.elems[root_b as usize].class_deg = deg_a + deg_b - 2;
        } else {
            debug_assert!(self.elems[root_b as usize].class_deg >= 2);
            self.elems[root_b as usize].class_deg -= 2;
        }

        if self.elems[root_b as usize].class_deg == 0 && self.n_edges > 0 {
            self.closed = true;
        }
    }

    /// Returns `true` if the edge `(a, b)` keeps a connected realization
    /// reachable.
    ///
    /// The edge may close a cycle inside a component only if that does not
    /// strand another component, and may cross between components only if at
    /// least one side keeps a stub beyond its single bridge, unless it is
    /// literally the last edge.
    pub fn connectable(&mut self, a: Node, b: Node) -> bool {
        if self.n_supernodes == 1 || self.n_edges == 1 {
            return true;
        }

        let class_a = self.get_class(a);
        let class_b = self.get_class(b);
        let deg_a = self.elems[class_a as usize].class_deg;

        if deg_a > 2 && self.n_edges > (self.n_supernodes - 1) as u64 {
            return true;
        }

        class_a != class_b && (deg_a > 1 || self.elems[class_b as usize].class_deg > 1)
    }

    /// Returns `true` if the current state can still reach a single
    /// connected component: no class has been stranded and the remaining
    /// edges suffice to bridge all supernodes.
    #[inline]
    pub fn is_potentially_connected(&self) -> bool {
        !self.closed && self.n_edges + 1 >= self.n_supernodes as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SampleError;

    #[test]
    fn construction() {
        assert_eq!(
            ConnTracker::new(&[2, 1]).unwrap_err(),
            SampleError::InvalidDegree
        );

        // Isolated vertex among others: closed from the start.
        let tracker = ConnTracker::new(&[2, 0, 2]).unwrap();
        assert!(!tracker.is_potentially_connected());

        // A single isolated vertex is trivially connected.
        let tracker = ConnTracker::new(&[0]).unwrap();
        assert!(tracker.is_potentially_connected());

        // Too few edges: a matching cannot bridge four vertices.
        let tracker = ConnTracker::new(&[1, 1, 1, 1]).unwrap();
        assert!(!tracker.is_potentially_connected());

        let tracker = ConnTracker::new(&[2, 2, 2, 2]).unwrap();
        assert!(tracker.is_potentially_connected());
        assert_eq!(tracker.component_count(), 4);
        assert_eq!(tracker.edge_count(), 4);
    }

    #[test]
    fn merging_classes() {
        let mut tracker = ConnTracker::new(&[2, 2, 2, 2]).unwrap();

        tracker.connect(0, 1);
        assert_eq!(tracker.component_count(), 3);
        assert_eq!(tracker.edge_count(), 3);
        assert_eq!(tracker.get_class(0), tracker.get_class(1));
        assert_eq!(tracker.class_degree(0), 2);

        tracker.connect(2, 3);
        assert_eq!(tracker.component_count(), 2);

        tracker.connect(1, 2);
        assert_eq!(tracker.component_count(), 1);
        assert_eq!(tracker.class_degree(3), 2);

        // Closing the cycle consumes the last edge; still one component.
        tracker.connect(3, 0);
        assert_eq!(tracker.component_count(), 1);
        assert_eq!(tracker.edge_count(), 0);
        assert!(tracker.is_potentially_connected());
    }

    #[test]
    fn premature_closure_latches() {
        // Two triangles' worth of stubs: closing the first triangle strands
        // the second.
        let mut tracker = ConnTracker::new(&[2, 2, 2, 2, 2, 2]).unwrap();
        tracker.connect(0, 1);
        tracker.connect(1, 2);
        assert!(tracker.is_potentially_connected());

        tracker.connect(2, 0);
        assert!(!tracker.is_potentially_connected());

        // closed is sticky even if later merges would look fine
        tracker.connect(3, 4);
        assert!(!tracker.is_potentially_connected());
    }

    #[test]
    fn connectable_rules() {
        // [2,2,2,2]: a second edge inside {0,1} would strand {2,3}.
        let mut tracker = ConnTracker::new(&[2, 2, 2, 2]).unwrap();
        tracker.connect(0, 1);
        assert!(!tracker.connectable(0, 1));
        assert!(tracker.connectable(0, 2));

        // Cross edges between two one-stub classes are fine only as the
        // last edge overall.
        let mut tracker = ConnTracker::new(&[1, 1]).unwrap();
        assert!(tracker.connectable(0, 1));

        let mut tracker = ConnTracker::new(&[1, 1, 1, 1]).unwrap();
        assert!(!tracker.connectable(0, 1));

        // A high-degree class may close internal cycles while slack remains.
        let mut tracker = ConnTracker::new(&[3, 3, 1, 1]).unwrap();
        tracker.connect(0, 1);
        assert!(tracker.connectable(0, 1));
    }

    #[test]
    fn deep_copy_is_independent() {
        let mut tracker = ConnTracker::new(&[2, 2, 2, 2]).unwrap();
        tracker.connect(0, 1);

        let mut copy = tracker.clone();
        copy.connect(1, 2);
        copy.connect(2, 3);

        assert_eq!(copy.component_count(), 1);
        assert_eq!(tracker.component_count(), 3);
        assert_eq!(tracker.edge_count(), 3);
        assert_eq!(tracker.class_degree(0), 2);
        assert_eq!(copy.class_degree(0), 2);
    }
}

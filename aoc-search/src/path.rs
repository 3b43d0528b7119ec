//! Backward-linked path nodes and path reconstruction.

use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::cost::Cost;

/// One discovered state in a search, linked backward to the state it was
/// reached from.
///
/// Parents are immutable once created and shared between children through
/// `Rc`, so the nodes of a search form a DAG of ancestor pointers rooted at
/// the start. A node also records its cost from the start and, for guided
/// searches, its estimated total cost; both stay at zero/cost for the engines
/// that do not use them.
///
/// Equality and hashing are defined solely on the carried state: two nodes for
/// the same state are equal regardless of cost or ancestry. Ordering decisions
/// must therefore consult the cost fields directly, never node equality.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use aoc_search::PathNode;
///
/// let door = Rc::new(PathNode::<&str>::start("door"));
/// let hall = Rc::new(PathNode::child(&door, "hall", 1));
/// let vault = PathNode::child(&hall, "vault", 1);
///
/// // The start state is excluded: the path is the steps taken.
/// assert_eq!(vault.states(), vec!["hall", "vault"]);
/// assert_eq!(vault.cost(), 2);
/// ```
#[derive(Debug)]
pub struct PathNode<S, C = i64> {
    state: S,
    cost: C,
    estimate: C,
    parent: Option<Rc<PathNode<S, C>>>,
}

impl<S, C: Cost> PathNode<S, C> {
    /// The root of a search: no parent, zero cost.
    pub fn start(state: S) -> Self {
        Self {
            state,
            cost: C::zero(),
            estimate: C::zero(),
            parent: None,
        }
    }

    /// A root carrying a heuristic estimate of the total cost to a goal.
    pub fn start_toward(state: S, estimate: C) -> Self {
        Self {
            state,
            cost: C::zero(),
            estimate,
            parent: None,
        }
    }

    /// A node reached from `parent` by a move costing `step`.
    pub fn child(parent: &Rc<Self>, state: S, step: C) -> Self {
        let cost = parent.cost + step;
        Self {
            state,
            cost,
            estimate: cost,
            parent: Some(Rc::clone(parent)),
        }
    }

    /// A node reached from `parent` by a move costing `step`, with an
    /// estimated `remaining` cost to the goal.
    pub fn child_toward(parent: &Rc<Self>, state: S, step: C, remaining: C) -> Self {
        let cost = parent.cost + step;
        Self {
            state,
            cost,
            estimate: cost + remaining,
            parent: Some(Rc::clone(parent)),
        }
    }
}

impl<S, C> PathNode<S, C> {
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The parent this node was discovered from; `None` for the start.
    pub fn parent(&self) -> Option<&Rc<PathNode<S, C>>> {
        self.parent.as_ref()
    }
}

impl<S, C: Copy> PathNode<S, C> {
    /// Accumulated cost of the moves from the start to this node.
    pub fn cost(&self) -> C {
        self.cost
    }

    /// Cost from the start plus the estimated remaining cost to the goal.
    /// Equal to [`cost`](Self::cost) for nodes built without an estimate.
    pub fn estimate(&self) -> C {
        self.estimate
    }
}

impl<S: Clone, C> PathNode<S, C> {
    /// The states from immediately after the start up to this node, in travel
    /// order. The start state itself is excluded. O(depth).
    pub fn states(&self) -> Vec<S> {
        let mut states = Vec::new();
        let mut node = self;
        while let Some(parent) = node.parent.as_deref() {
            states.push(node.state.clone());
            node = parent;
        }
        states.reverse();
        states
    }
}

impl<S: PartialEq, C> PartialEq for PathNode<S, C> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<S: Eq, C> Eq for PathNode<S, C> {}

impl<S: Hash, C> Hash for PathNode<S, C> {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.state.hash(hasher);
    }
}

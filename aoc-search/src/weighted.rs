//! Weighted graph protocol and the Dijkstra engine.

use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use num_traits::Zero;

use crate::cost::Cost;
use crate::graph::Graph;
use crate::heap::BinaryHeap;
use crate::path::PathNode;

/// Outcome of a weighted search: the terminating node, if the goal was
/// reached, and the best known cost for every explored state.
pub(crate) struct WeightedSearch<S, C> {
    pub(crate) goal: Option<Rc<PathNode<S, C>>>,
    pub(crate) best: HashMap<S, C>,
}

/// Min-heap-driven search over cost-bearing moves, shared by the Dijkstra and
/// A* engines. `remaining` is the heuristic estimate of the cost still to go;
/// a constant zero degenerates to Dijkstra ordering.
///
/// Relaxation is decrease-key by insertion: a candidate strictly cheaper than
/// the recorded best for its state replaces that record and is inserted;
/// superseded heap entries stay behind. A popped entry whose cost no longer
/// matches the recorded best is stale and is skipped, so a stale entry can
/// never terminate the search. States are never reopened after an
/// authoritative pop; with non-negative move costs (and, for guided searches,
/// a consistent estimate) the popped cost is final.
pub(crate) fn weighted_search<S, C, F, H, G>(
    mut next: F,
    mut remaining: H,
    start: S,
    mut until: G,
) -> WeightedSearch<S, C>
where
    S: Clone + Eq + Hash,
    C: Cost,
    F: FnMut(&S) -> Vec<(S, C)>,
    H: FnMut(&S) -> C,
    G: FnMut(&S) -> bool,
{
    let mut best = HashMap::new();
    let mut frontier = BinaryHeap::new(|a: &Rc<PathNode<S, C>>, b: &Rc<PathNode<S, C>>| {
        a.estimate() < b.estimate()
    });

    best.insert(start.clone(), C::zero());
    let estimate = remaining(&start);
    frontier.insert(Rc::new(PathNode::start_toward(start, estimate)));

    while let Some(node) = frontier.remove_root() {
        if best
            .get(node.state())
            .is_some_and(|&known| known < node.cost())
        {
            continue;
        }
        if until(node.state()) {
            return WeightedSearch {
                goal: Some(node),
                best,
            };
        }
        for (state, step) in next(node.state()) {
            let cost = node.cost() + step;
            if best.get(&state).is_some_and(|&known| known <= cost) {
                continue;
            }
            best.insert(state.clone(), cost);
            let left = remaining(&state);
            frontier.insert(Rc::new(PathNode::child_toward(&node, state, step, left)));
        }
    }

    WeightedSearch { goal: None, best }
}

/// Adjacency view of a graph whose moves carry a cost.
///
/// Implement [`neighbors`](Self::neighbors) to get cheapest-path queries by
/// Dijkstra's algorithm: expansion ordered by cost from the start, so the
/// first time the goal is reached its cost is minimal. Move costs must be
/// non-negative; negative costs are not detected and void the cheapest-path
/// guarantee.
///
/// # Example
///
/// ```
/// use aoc_search::WeightedGraph;
///
/// struct Tolls;
///
/// impl WeightedGraph for Tolls {
///     type Node = char;
///     type Cost = u32;
///
///     fn neighbors(&self, city: &char) -> Vec<(char, u32)> {
///         match city {
///             'a' => vec![('e', 100), ('b', 10)],
///             'b' => vec![('c', 10)],
///             'c' => vec![('e', 10)],
///             _ => Vec::new(),
///         }
///     }
/// }
///
/// // The expensive direct hop loses to the cheap detour.
/// assert_eq!(Tolls.shortest_path_to('a', &'e'), vec!['b', 'c', 'e']);
/// assert_eq!(Tolls.cost_of_path_to('a', &'e'), 30);
/// ```
pub trait WeightedGraph {
    type Node: Clone + Eq + Hash;
    type Cost: Cost;

    /// One-step moves out of `node`, paired with the cost of each move.
    fn neighbors(&self, node: &Self::Node) -> Vec<(Self::Node, Self::Cost)>;

    /// Cheapest path from `start` to the first node satisfying `until`
    /// (start excluded), or an empty path when no reachable node does.
    fn shortest_path(
        &self,
        start: Self::Node,
        until: impl FnMut(&Self::Node) -> bool,
    ) -> Vec<Self::Node> {
        weighted_search(
            |node| self.neighbors(node),
            |_| Self::Cost::zero(),
            start,
            until,
        )
        .goal
        .map(|node| node.states())
        .unwrap_or_default()
    }

    /// Cheapest path from `start` to `goal`, or an empty path when `goal` is
    /// unreachable.
    fn shortest_path_to(&self, start: Self::Node, goal: &Self::Node) -> Vec<Self::Node> {
        self.shortest_path(start, |node| node == goal)
    }

    /// Total cost of the cheapest path to the first node satisfying `until`.
    ///
    /// Returns zero when no reachable node satisfies `until`; zero is also
    /// the answer when the start itself does, so callers needing to tell the
    /// two apart should check [`shortest_path`](Self::shortest_path) for
    /// emptiness.
    fn cost_of_path(
        &self,
        start: Self::Node,
        until: impl FnMut(&Self::Node) -> bool,
    ) -> Self::Cost {
        weighted_search(
            |node| self.neighbors(node),
            |_| Self::Cost::zero(),
            start,
            until,
        )
        .goal
        .map(|node| node.cost())
        .unwrap_or_else(|| Self::Cost::zero())
    }

    /// Total cost of the cheapest path from `start` to `goal`, or zero when
    /// `goal` is unreachable.
    fn cost_of_path_to(&self, start: Self::Node, goal: &Self::Node) -> Self::Cost {
        self.cost_of_path(start, |node| node == goal)
    }

    /// Best known cost for every state explored from `start`, frontier
    /// exhausted. The start appears at cost zero.
    fn nodes_accessible(&self, start: Self::Node) -> HashMap<Self::Node, Self::Cost> {
        weighted_search(
            |node| self.neighbors(node),
            |_| Self::Cost::zero(),
            start,
            |_| false,
        )
        .best
    }

    /// Like [`nodes_accessible`](Self::nodes_accessible), stopping early once
    /// a node satisfying `until` is expanded.
    fn nodes_accessible_until(
        &self,
        start: Self::Node,
        until: impl FnMut(&Self::Node) -> bool,
    ) -> HashMap<Self::Node, Self::Cost> {
        weighted_search(
            |node| self.neighbors(node),
            |_| Self::Cost::zero(),
            start,
            until,
        )
        .best
    }
}

/// Weighted view of an unweighted graph, charging one per move.
///
/// This is the unit-cost specialization: any [`Graph`] becomes a
/// [`WeightedGraph`] with `i64` costs, so edge count and path cost coincide.
///
/// ```
/// use aoc_search::{Graph, UnitCost, WeightedGraph};
///
/// struct Line;
///
/// impl Graph for Line {
///     type Node = u8;
///
///     fn neighbors(&self, node: &u8) -> Vec<u8> {
///         match node {
///             0 => vec![1],
///             1 => vec![2],
///             _ => Vec::new(),
///         }
///     }
/// }
///
/// assert_eq!(UnitCost(Line).cost_of_path_to(0, &2), 2);
/// ```
pub struct UnitCost<G>(pub G);

impl<G: Graph> WeightedGraph for UnitCost<G> {
    type Node = G::Node;
    type Cost = i64;

    fn neighbors(&self, node: &Self::Node) -> Vec<(Self::Node, i64)> {
        self.0
            .neighbors(node)
            .into_iter()
            .map(|next| (next, 1))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 0 -> 1 costs 10 directly, but 2 via 0 -> 2 -> 1. Node 1's first heap
    /// entry goes stale when the cheaper route lands, and the expensive edge
    /// to 3 keeps that stale entry ahead of the goal in the heap, so it is
    /// popped (and must be skipped) before the search finishes.
    struct StaleRoute;

    impl WeightedGraph for StaleRoute {
        type Node = u8;
        type Cost = u32;

        fn neighbors(&self, node: &u8) -> Vec<(u8, u32)> {
            match node {
                0 => vec![(1, 10), (2, 1)],
                2 => vec![(1, 1)],
                1 => vec![(3, 20)],
                _ => Vec::new(),
            }
        }
    }

    #[test]
    fn stale_entries_are_skipped() {
        assert_eq!(StaleRoute.shortest_path_to(0, &3), vec![2, 1, 3]);
        assert_eq!(StaleRoute.cost_of_path_to(0, &3), 22);
    }

    #[test]
    fn cost_map_holds_relaxed_costs() {
        let costs = StaleRoute.nodes_accessible(0);
        assert_eq!(costs[&0], 0);
        assert_eq!(costs[&1], 2);
        assert_eq!(costs[&2], 1);
        assert_eq!(costs[&3], 22);
    }

    #[test]
    fn unreachable_goal_yields_empty_path_and_zero_cost() {
        assert!(StaleRoute.shortest_path_to(3, &0).is_empty());
        assert_eq!(StaleRoute.cost_of_path_to(3, &0), 0);
    }

    #[test]
    fn early_stop_explores_less_than_exhaustion() {
        let stopped = StaleRoute.nodes_accessible_until(0, |node| *node == 2);
        let full = StaleRoute.nodes_accessible(0);
        assert!(stopped.len() <= full.len());
        assert_eq!(full.len(), 4);
    }
}

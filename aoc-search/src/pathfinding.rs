//! State-space search protocol and the A* engine.

use std::hash::Hash;

use num_traits::Zero;

use crate::cost::Cost;
use crate::graph::{Frontier, traverse};
use crate::weighted::weighted_search;

/// Minimal contract for searching a state space: successor states plus a goal
/// test. Unlike [`Graph`](crate::Graph), which walks nodes that exist up
/// front, a pathfinding state is usually synthesized on demand (a position
/// plus collected keys, a bitmask of valves, and so on).
///
/// # Example
///
/// ```
/// use aoc_search::PathfindingGraph;
///
/// /// Doubling or incrementing a counter.
/// struct Doubler;
///
/// impl PathfindingGraph for Doubler {
///     type State = u64;
///
///     fn next_states(&self, n: &u64) -> Vec<u64> {
///         vec![n + 1, n * 2]
///     }
/// }
///
/// let path = Doubler.breadth_first_path(1, &9);
/// assert_eq!(path.last(), Some(&9));
/// assert_eq!(path.len(), 4); // 2, 4, 8, 9
/// ```
pub trait PathfindingGraph {
    type State: Clone + Eq + Hash;

    /// All states reachable from `state` with one move.
    fn next_states(&self, state: &Self::State) -> Vec<Self::State>;

    /// Whether `state` satisfies the goal.
    ///
    /// Defaults to exact equality. Override for fuzzy goals, e.g. "any state
    /// holding every key" regardless of position.
    fn matches_goal(&self, state: &Self::State, goal: &Self::State) -> bool {
        state == goal
    }

    /// Minimum-move path from `start` to the first state matching `goal`
    /// (start excluded), or an empty path when the space is exhausted.
    fn breadth_first_path(&self, start: Self::State, goal: &Self::State) -> Vec<Self::State> {
        traverse(
            Frontier::queue(),
            |state| self.next_states(state),
            start,
            |_| {},
            |state| self.matches_goal(state, goal),
        )
        .map(|node| node.states())
        .unwrap_or_default()
    }

    /// Some path from `start` to the first state matching `goal`, found
    /// depth-first; not necessarily minimal.
    fn depth_first_path(&self, start: Self::State, goal: &Self::State) -> Vec<Self::State> {
        traverse(
            Frontier::stack(),
            |state| self.next_states(state),
            start,
            |_| {},
            |state| self.matches_goal(state, goal),
        )
        .map(|node| node.states())
        .unwrap_or_default()
    }
}

/// Heuristic-guided extension of [`PathfindingGraph`] for A* search.
///
/// A* expands states in order of estimated total cost (cost so far plus the
/// estimate to the goal), reaching the goal with far fewer expansions than
/// Dijkstra on large spaces when the estimate is informative.
///
/// # Example
///
/// ```
/// use aoc_search::{AStarGraph, PathfindingGraph};
///
/// /// Walking the number line one step at a time.
/// struct NumberLine;
///
/// impl PathfindingGraph for NumberLine {
///     type State = i64;
///
///     fn next_states(&self, n: &i64) -> Vec<i64> {
///         vec![n - 1, n + 1]
///     }
/// }
///
/// impl AStarGraph for NumberLine {
///     type Cost = i64;
///
///     fn cost_to_move(&self, _from: &i64, _to: &i64) -> i64 {
///         1
///     }
///
///     fn estimated_cost(&self, from: &i64, goal: &i64) -> i64 {
///         (goal - from).abs()
///     }
/// }
///
/// assert_eq!(NumberLine.path(0, &3), vec![1, 2, 3]);
/// assert_eq!(NumberLine.path_cost(0, &3), 3);
/// ```
pub trait AStarGraph: PathfindingGraph {
    type Cost: Cost;

    /// Exact cost of the move between two adjacent states.
    fn cost_to_move(&self, from: &Self::State, to: &Self::State) -> Self::Cost;

    /// Estimated cost still to pay from `from` to `goal`.
    ///
    /// The estimate must never overestimate the true remaining cost, or the
    /// returned path may not be cheapest. Expanded states are never reopened,
    /// so the estimate should also respect the triangle inequality across
    /// moves; a plain distance metric (Manhattan, Euclidean) does.
    fn estimated_cost(&self, from: &Self::State, goal: &Self::State) -> Self::Cost;

    /// Cheapest path from `start` to the first state matching `goal` (start
    /// excluded), or an empty path when the space is exhausted.
    fn path(&self, start: Self::State, goal: &Self::State) -> Vec<Self::State> {
        weighted_search(
            |state| {
                self.next_states(state)
                    .into_iter()
                    .map(|next| {
                        let step = self.cost_to_move(state, &next);
                        (next, step)
                    })
                    .collect()
            },
            |state| self.estimated_cost(state, goal),
            start,
            |state| self.matches_goal(state, goal),
        )
        .goal
        .map(|node| node.states())
        .unwrap_or_default()
    }

    /// Total cost of [`path`](Self::path), or zero when the goal is
    /// unreachable (also zero when the start already matches the goal).
    fn path_cost(&self, start: Self::State, goal: &Self::State) -> Self::Cost {
        weighted_search(
            |state| {
                self.next_states(state)
                    .into_iter()
                    .map(|next| {
                        let step = self.cost_to_move(state, &next);
                        (next, step)
                    })
                    .collect()
            },
            |state| self.estimated_cost(state, goal),
            start,
            |state| self.matches_goal(state, goal),
        )
        .goal
        .map(|node| node.cost())
        .unwrap_or_else(|| Self::Cost::zero())
    }
}

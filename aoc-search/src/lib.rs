//! Generic pathfinding and graph traversal for Advent of Code puzzles
//!
//! Puzzle graphs rarely exist as data structures; they are implied by a grid,
//! a rule, or a state machine. This library therefore keeps every engine
//! generic over a caller-defined node/state type and asks only for a small
//! protocol implementation, leaving parsing and puzzle bookkeeping to the
//! caller. All engines are synchronous, pure, and allocation-local: each call
//! owns its frontier and explored set, so independent searches can run on
//! independent threads.
//!
//! # Overview
//!
//! - [`Graph`]: neighbors-only protocol with BFS/DFS traversal, shortest
//!   paths in edge count, reachability maps, and furthest-node queries
//! - [`WeightedGraph`]: neighbors-with-cost protocol with Dijkstra
//!   cheapest-path and cost-map queries; [`UnitCost`] lifts a [`Graph`] into
//!   it at one cost per move
//! - [`PathfindingGraph`] / [`AStarGraph`]: state-space protocol (successor
//!   states, overridable goal test) and the heuristic-guided A* engine
//! - [`BinaryHeap`]: the comparator-parameterized heap under the weighted
//!   engines
//! - [`PathNode`]: the shared backward-chain path representation the engines
//!   reconstruct answers from
//!
//! "No path" is never an error: engines return an empty path (or a zero
//! cost), and callers that must distinguish an empty path from a goal
//! satisfied at the start check the goal themselves.
//!
//! # Quick Example
//!
//! ```
//! use aoc_search::{Graph, UnitCost, WeightedGraph};
//!
//! struct Caves;
//!
//! impl Graph for Caves {
//!     type Node = &'static str;
//!
//!     fn neighbors(&self, cave: &&'static str) -> Vec<&'static str> {
//!         match *cave {
//!             "entrance" => vec!["fork"],
//!             "fork" => vec!["pit", "ledge"],
//!             "ledge" => vec!["exit"],
//!             _ => Vec::new(),
//!         }
//!     }
//! }
//!
//! let path = Caves.shortest_path_to("entrance", &"exit");
//! assert_eq!(path, vec!["fork", "ledge", "exit"]);
//!
//! // The same graph, charged one per step.
//! assert_eq!(UnitCost(Caves).cost_of_path_to("entrance", &"exit"), 3);
//! ```

mod cost;
mod graph;
mod heap;
mod path;
mod pathfinding;
mod weighted;

pub use cost::Cost;
pub use graph::Graph;
pub use heap::BinaryHeap;
pub use path::PathNode;
pub use pathfinding::{AStarGraph, PathfindingGraph};
pub use weighted::{UnitCost, WeightedGraph};

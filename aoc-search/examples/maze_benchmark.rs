//! Benchmark comparing the search engines on randomly generated grid mazes.
//!
//! Run with: cargo run --example maze_benchmark --release
//!
//! Each maze is a grid with scattered walls; the task is a corner-to-corner
//! shortest path. The same maze is solved three ways:
//! - BFS over the unweighted grid graph (baseline for unit-cost grids)
//! - Dijkstra over the same graph through the unit-cost adapter
//! - A* with the Manhattan-distance estimate
//!
//! All three must agree on path length; the timing difference shows what the
//! estimate buys on large open grids.

use std::time::Instant;

use aoc_grid::{Grid, Point};
use aoc_search::{AStarGraph, Graph, PathfindingGraph, UnitCost, WeightedGraph};

const SIZE: usize = 150;
const NUM_MAZES: usize = 20;
const WALL_PERCENT: u64 = 25;

/// Grid maze; `true` cells are walls.
struct Maze {
    grid: Grid<bool>,
}

impl Maze {
    fn open(&self, point: Point) -> bool {
        self.grid.get(point).is_some_and(|&wall| !wall)
    }
}

impl Graph for Maze {
    type Node = Point;

    fn neighbors(&self, point: &Point) -> Vec<Point> {
        self.grid
            .orthogonal_neighbors(*point)
            .into_iter()
            .filter(|&p| self.open(p))
            .collect()
    }
}

impl PathfindingGraph for Maze {
    type State = Point;

    fn next_states(&self, point: &Point) -> Vec<Point> {
        self.neighbors(point)
    }
}

impl AStarGraph for Maze {
    type Cost = i64;

    fn cost_to_move(&self, _from: &Point, _to: &Point) -> i64 {
        1
    }

    fn estimated_cost(&self, from: &Point, goal: &Point) -> i64 {
        from.manhattan_distance(*goal)
    }
}

/// Deterministic maze from a seed; corners are kept open.
fn generate_maze(seed: u64) -> Maze {
    let mut rng = seed;
    let mut grid = Grid::new(SIZE, SIZE, false);
    for point in grid.positions().collect::<Vec<_>>() {
        rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1);
        grid[point] = (rng >> 33) % 100 < WALL_PERCENT;
    }
    grid[Point::new(0, 0)] = false;
    grid[Point::new(SIZE as i64 - 1, SIZE as i64 - 1)] = false;
    Maze { grid }
}

fn main() {
    println!("Grid Maze Search Benchmark");
    println!("==========================\n");
    println!(
        "{} mazes of {}x{} cells, {}% walls\n",
        NUM_MAZES, SIZE, SIZE, WALL_PERCENT
    );

    let mazes: Vec<Maze> = (0..NUM_MAZES as u64).map(generate_maze).collect();
    let start = Point::new(0, 0);
    let goal = Point::new(SIZE as i64 - 1, SIZE as i64 - 1);

    println!("Running BFS...");
    let clock = Instant::now();
    let bfs_lengths: Vec<usize> = mazes
        .iter()
        .map(|maze| maze.shortest_path_to(start, &goal).len())
        .collect();
    let bfs_time = clock.elapsed();
    println!("BFS:       {:?}", bfs_time);

    println!("Running Dijkstra (unit-cost adapter)...");
    let clock = Instant::now();
    let dijkstra_costs: Vec<i64> = mazes
        .iter()
        .map(|maze| UnitCost(maze).cost_of_path_to(start, &goal))
        .collect();
    let dijkstra_time = clock.elapsed();
    println!("Dijkstra:  {:?}", dijkstra_time);

    println!("Running A* (Manhattan estimate)...");
    let clock = Instant::now();
    let astar_costs: Vec<i64> = mazes
        .iter()
        .map(|maze| maze.path_cost(start, &goal))
        .collect();
    let astar_time = clock.elapsed();
    println!("A*:        {:?}", astar_time);

    println!("\nVerifying results...");
    let mut mismatches = 0;
    let mut solved = 0;
    for i in 0..NUM_MAZES {
        if bfs_lengths[i] > 0 {
            solved += 1;
        }
        if bfs_lengths[i] as i64 != dijkstra_costs[i] || dijkstra_costs[i] != astar_costs[i] {
            println!(
                "Mismatch at maze {}: bfs={}, dijkstra={}, astar={}",
                i, bfs_lengths[i], dijkstra_costs[i], astar_costs[i]
            );
            mismatches += 1;
        }
    }
    if mismatches == 0 {
        println!("✓ All engines agree on {}/{} solvable mazes", solved, NUM_MAZES);
    } else {
        println!("✗ {} mismatches found!", mismatches);
    }

    println!("\n=== Performance Summary ===");
    println!("BFS:       {:?}", bfs_time);
    println!("Dijkstra:  {:?}", dijkstra_time);
    println!("A*:        {:?}", astar_time);
    println!(
        "\nA* vs Dijkstra: {:.2}x faster",
        dijkstra_time.as_secs_f64() / astar_time.as_secs_f64()
    );
    println!(
        "A* vs BFS:      {:.2}x faster",
        bfs_time.as_secs_f64() / astar_time.as_secs_f64()
    );
}

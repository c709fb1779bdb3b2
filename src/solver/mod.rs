pub(crate) mod a_star;

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashSet;
use log::{debug, info, trace};

use crate::config::Config;
use crate::grid::Grid;
use crate::moves::Moves;
use crate::Solve;

pub use self::a_star::Stats;

use self::a_star::SearchNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    StateLimit(usize),
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::StateLimit(limit) => {
                write!(f, "Gave up after creating {} states", limit)
            }
        }
    }
}

impl Error for SolverErr {}

pub struct SolverOk {
    /// Initial grid first, goal last. `None` if the goal is unreachable.
    pub path: Option<Vec<Grid>>,
    pub stats: Stats,
}

impl SolverOk {
    fn new(path: Option<Vec<Grid>>, stats: Stats) -> Self {
        Self { path, stats }
    }

    pub fn moves(&self) -> Option<Moves> {
        self.path.as_ref().and_then(|path| Moves::from_path(path))
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.path {
            None => writeln!(f, "No solution")?,
            Some(ref path) => writeln!(f, "Moves: {}", path.len() - 1)?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Grid {
    fn solve(&self, config: &Config, print_status: bool) -> Result<SolverOk, SolverErr> {
        search(*self, config, print_status)
    }
}

/// A* with the Manhattan distance.
///
/// Among states with equal cost the one created first is expanded first
/// (the arena index is the secondary key) so the result is always the same for the same input.
/// Closed grids are never reopened, the heuristic is consistent so the first time
/// a grid is expanded it's already reached by a shortest path.
fn search(initial: Grid, config: &Config, print_status: bool) -> Result<SolverOk, SolverErr> {
    debug!("Search called");
    if !initial.is_solvable() {
        info!("Odd permutation, expecting to exhaust all reachable states");
    }

    let mut stats = Stats::new();

    // all states ever created, indices into it are used instead of references to parents
    let mut nodes = Vec::new();
    let mut to_visit = BinaryHeap::new();
    let mut closed = FnvHashSet::default();

    let start = SearchNode::new(initial, None, 0);
    stats.add_created(&start);
    to_visit.push(Reverse((start.cost(), 0)));
    nodes.push(start);

    while let Some(Reverse((_, cur_index))) = to_visit.pop() {
        let cur_node = nodes[cur_index];

        if closed.contains(&cur_node.grid) {
            stats.add_reached_duplicate(&cur_node);
            continue;
        }
        if stats.add_unique_visited(&cur_node) && print_status {
            println!("Visited new depth: {}", cur_node.dist);
            println!("{:?}", stats);
        }

        if cur_node.grid.is_goal() {
            debug!("Solved, backtracking path");
            let path = backtrack_path(&nodes, cur_index);
            info!(
                "Found solution with {} moves, created {} states",
                path.len() - 1,
                stats.total_created()
            );
            return Ok(SolverOk::new(Some(path), stats));
        }

        trace!("Expanding {:?} (g={}, h={})", cur_node.grid, cur_node.dist, cur_node.h);
        closed.insert(cur_node.grid);

        for (_, neighbor) in cur_node.grid.neighbors() {
            if closed.contains(&neighbor) {
                continue;
            }
            if let Some(limit) = config.state_limit {
                if nodes.len() >= limit {
                    info!("Reached state limit {}", limit);
                    return Err(SolverErr::StateLimit(limit));
                }
            }

            let next_node = SearchNode::new(neighbor, Some(cur_index), cur_node.dist + 1);
            stats.add_created(&next_node);
            to_visit.push(Reverse((next_node.cost(), nodes.len())));
            nodes.push(next_node);
        }
    }

    info!(
        "No solution, visited {} unique states",
        stats.total_unique_visited()
    );
    Ok(SolverOk::new(None, stats))
}

fn backtrack_path(nodes: &[SearchNode], final_index: usize) -> Vec<Grid> {
    let mut ret = Vec::new();
    let mut index = Some(final_index);
    while let Some(i) = index {
        ret.push(nodes[i].grid);
        index = nodes[i].prev;
    }
    ret.reverse();
    ret
}

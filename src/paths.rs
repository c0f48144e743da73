//! Counting distinct paths from a start state to goal states.
//!
//! In both counters a path ends at the first goal state it reaches; goal states are not expanded further.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Number of distinct paths from `start` to any state satisfying `goal`, assuming the reachable graph is acyclic.
///
/// Counts are memoized per state, so the work is linear in the reachable states and edges.
/// On a graph with a cycle the result is meaningless; debug builds panic instead.
pub fn count_paths_dag<N, F, I, G>(start: N, mut neighbors: F, mut goal: G) -> u64
where
    N: Eq + Hash + Clone,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
    G: FnMut(&N) -> bool,
{
    let mut counts: HashMap<N, u64> = HashMap::new();
    // each frame holds a state and its successors; the state is finished once the successors are all counted
    let mut stack: Vec<(N, Vec<N>)> = Vec::new();
    let mut in_progress: HashSet<N> = HashSet::new();

    let mut enter = |state: N, stack: &mut Vec<(N, Vec<N>)>, counts: &mut HashMap<N, u64>, in_progress: &mut HashSet<N>| {
        if goal(&state) {
            counts.insert(state, 1);
        } else {
            let successors = neighbors(&state).into_iter().collect::<Vec<_>>();
            in_progress.insert(state.clone());
            stack.push((state, successors));
        }
    };

    enter(start.clone(), &mut stack, &mut counts, &mut in_progress);

    while let Some((state, successors)) = stack.last_mut() {
        match successors.iter().find(|successor| !counts.contains_key(*successor)).cloned() {
            Some(pending) => {
                debug_assert!(!in_progress.contains(&pending), "count_paths_dag called on a cyclic graph");
                if in_progress.contains(&pending) {
                    // a cycle; treat the back edge as a dead end rather than looping forever
                    successors.retain(|successor| *successor != pending);
                    continue;
                }
                enter(pending, &mut stack, &mut counts, &mut in_progress);
            }
            None => {
                let total: u64 = successors.iter().map(|successor| counts[successor]).sum();
                let state = state.clone();
                in_progress.remove(&state);
                counts.insert(state, total);
                stack.pop();
            }
        }
    }

    tracing::debug!(memoized = counts.len(), "dag path count done");
    counts.get(&start).copied().unwrap_or(0)
}

/// Number of distinct paths from `start` to any state satisfying `goal`, where no state repeats within a path.
///
/// Exhaustive backtracking; exponential in the worst case and intended for small state spaces.
#[tracing::instrument(skip_all)]
pub fn count_paths_cyclic<N, F, I, G>(start: N, mut neighbors: F, mut goal: G) -> u64
where
    N: Eq + Hash + Clone,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
    G: FnMut(&N) -> bool,
{
    fn walk<N, F, I, G>(current: N, on_path: &mut HashSet<N>, neighbors: &mut F, goal: &mut G) -> u64
    where
        N: Eq + Hash + Clone,
        F: FnMut(&N) -> I,
        I: IntoIterator<Item = N>,
        G: FnMut(&N) -> bool,
    {
        if goal(&current) {
            return 1;
        }

        let mut total = 0;
        for next in neighbors(&current) {
            if on_path.insert(next.clone()) {
                total += walk(next.clone(), on_path, neighbors, goal);
                on_path.remove(&next);
            }
        }

        total
    }

    let mut on_path = HashSet::from([start.clone()]);
    let total = walk(start, &mut on_path, &mut neighbors, &mut goal);
    tracing::debug!(total, "cyclic path count done");

    total
}

#[cfg(test)]
mod tests {
    use super::{count_paths_cyclic, count_paths_dag};

    fn dag(node: &u32) -> Vec<u32> {
        match node {
            0 => vec![1, 2],
            1 | 2 => vec![3],
            3 => vec![4],
            _ => vec![],
        }
    }

    #[test]
    fn two_routes_through_a_diamond() {
        assert_eq!(count_paths_dag(0, dag, |n| *n == 4), 2);
        assert_eq!(count_paths_cyclic(0, dag, |n| *n == 4), 2);
    }

    #[test]
    fn cycle_is_not_followed_twice() {
        let count = count_paths_cyclic(0, |n: &u32| match n {
            0 => vec![1],
            1 => vec![2],
            2 => vec![3, 0],
            _ => vec![],
        }, |n| *n == 3);

        assert_eq!(count, 1);
    }

    #[test]
    fn start_on_goal_is_one_path() {
        assert_eq!(count_paths_dag(4, dag, |n| *n == 4), 1);
        assert_eq!(count_paths_cyclic(4, dag, |n| *n == 4), 1);
    }

    #[test]
    fn no_route_is_zero() {
        assert_eq!(count_paths_dag(4, dag, |n| *n == 0), 0);
        assert_eq!(count_paths_cyclic(4, dag, |n| *n == 0), 0);
    }

    #[test]
    fn layered_dag_counts_multiply() {
        // ten layers of two nodes, fully connected between consecutive layers: 2^10 paths to the sink
        let neighbors = |n: &(u32, u32)| match n.0 {
            10 => vec![(11, 0)],
            layer if layer < 10 => vec![(layer + 1, 0), (layer + 1, 1)],
            _ => vec![],
        };
        let goal = |n: &(u32, u32)| n.0 == 11;

        assert_eq!(count_paths_dag((0, 0), neighbors, goal), 1024);
        assert_eq!(count_paths_cyclic((0, 0), neighbors, goal), 1024);
    }

    #[test]
    fn long_chain_does_not_overflow_the_stack() {
        let count = count_paths_dag(0u32, |n| if *n < 200_000 { vec![n + 1] } else { vec![] }, |n| *n == 200_000);
        assert_eq!(count, 1);
    }
}

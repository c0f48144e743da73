//! Unweighted traversal over implicit graphs.
//!
//! A graph is described by a start state and a neighbor function `FnMut(&N) -> I` yielding the states one step away.
//! States only need to be `Eq + Hash + Clone`; nothing else about their structure is assumed.
//!
//! A neighbor function should be deterministic for the duration of a call.
//! Traversal terminates only if the reachable state space is finite or a goal is found first.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// Walk predecessor links back from `end` and return the path from the root to `end`, root first.
///
/// The root is the state whose predecessor is [`None`].
pub(crate) fn reconstruct_path<N>(parents: &HashMap<N, Option<N>>, end: N) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path = Vec::new();
    let mut node = Some(end);
    while let Some(current) = node {
        node = parents.get(&current).cloned().flatten();
        path.push(current);
    }
    path.reverse();

    path
}

/// Shortest hop count from `start` to every reachable state, `start` included at distance 0.
pub fn bfs_distances<N, F, I>(start: N, mut neighbors: F) -> HashMap<N, usize>
where
    N: Eq + Hash + Clone,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut distances = HashMap::from([(start.clone(), 0)]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        let next_distance = distances[&current] + 1;
        for neighbor in neighbors(&current) {
            // marked at discovery so every state is queued at most once
            if let Entry::Vacant(slot) = distances.entry(neighbor) {
                queue.push_back(slot.key().clone());
                slot.insert(next_distance);
            }
        }
    }

    tracing::debug!(reachable = distances.len(), "bfs exhausted frontier");
    distances
}

/// A shortest path from `start` to the first dequeued state satisfying `goal`, or [`None`] if no such state is reachable.
///
/// If `start` satisfies `goal`, the path is `[start]`.
pub fn bfs_path<N, F, I, G>(start: N, mut neighbors: F, mut goal: G) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
    G: FnMut(&N) -> bool,
{
    let mut parents: HashMap<N, Option<N>> = HashMap::from([(start.clone(), None)]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        if goal(&current) {
            tracing::debug!(visited = parents.len(), "bfs reached goal");
            return Some(reconstruct_path(&parents, current));
        }

        for neighbor in neighbors(&current) {
            if let Entry::Vacant(slot) = parents.entry(neighbor) {
                queue.push_back(slot.key().clone());
                slot.insert(Some(current.clone()));
            }
        }
    }

    tracing::debug!(visited = parents.len(), "bfs found no path");
    None
}

/// States grouped by their BFS distance from `start`; `levels[d]` holds every state exactly `d` steps away.
pub fn bfs_levels<N, F, I>(start: N, mut neighbors: F) -> Vec<Vec<N>>
where
    N: Eq + Hash + Clone,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut seen = HashSet::from([start.clone()]);
    let mut levels = vec![vec![start]];

    loop {
        let mut next = Vec::new();
        for current in levels.last().into_iter().flatten() {
            for neighbor in neighbors(current) {
                if seen.insert(neighbor.clone()) {
                    next.push(neighbor);
                }
            }
        }

        if next.is_empty() {
            break;
        }
        levels.push(next);
    }

    levels
}

/// Some path from `start` to a state satisfying `goal`, found depth-first; [`None`] if none is reachable.
///
/// The path is not necessarily the shortest.
/// A state that was fully explored without reaching the goal is never retried.
pub fn dfs_path<N, F, I, G>(start: N, mut neighbors: F, mut goal: G) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
    G: FnMut(&N) -> bool,
{
    // parents doubles as the visited set; a state is entered when it is popped
    let mut parents: HashMap<N, Option<N>> = HashMap::new();
    let mut stack: Vec<(N, Option<N>)> = vec![(start, None)];

    while let Some((current, parent)) = stack.pop() {
        match parents.entry(current.clone()) {
            Entry::Occupied(_) => continue,
            Entry::Vacant(slot) => {
                slot.insert(parent);
            }
        }

        if goal(&current) {
            tracing::debug!(visited = parents.len(), "dfs reached goal");
            return Some(reconstruct_path(&parents, current));
        }

        for neighbor in neighbors(&current) {
            if !parents.contains_key(&neighbor) {
                stack.push((neighbor, Some(current.clone())));
            }
        }
    }

    tracing::debug!(visited = parents.len(), "dfs found no path");
    None
}

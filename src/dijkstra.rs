//! Cheapest-path search over weighted implicit graphs.
//!
//! Edge costs must be non-negative; negative costs are not supported and give meaningless results.
//! Any `Copy + Ord + Default + Add` type works as a cost, with [`Default`] taken as the zero cost, so every integer type qualifies.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;
use std::ops::Add;

use crate::search::reconstruct_path;

/// Frontier entry ordered by accumulated cost, then by insertion order.
///
/// Only `cost` and `seq` take part in the ordering, so states need not be [`Ord`].
struct HeapEntry<N, C> {
    cost: C,
    seq: u64,
    state: N,
}

impl<N, C: Ord> PartialEq for HeapEntry<N, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N, C: Ord> Eq for HeapEntry<N, C> {}

impl<N, C: Ord> PartialOrd for HeapEntry<N, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, C: Ord> Ord for HeapEntry<N, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost.cmp(&other.cost).then(self.seq.cmp(&other.seq))
    }
}

/// Min-heap frontier with lazy deletion: stale entries stay queued and are skipped when popped.
struct Frontier<N, C> {
    heap: BinaryHeap<Reverse<HeapEntry<N, C>>>,
    next_seq: u64,
}

impl<N, C: Ord> Frontier<N, C> {
    fn new() -> Self {
        Self { heap: BinaryHeap::new(), next_seq: 0 }
    }

    fn push(&mut self, state: N, cost: C) {
        self.heap.push(Reverse(HeapEntry { cost, seq: self.next_seq, state }));
        self.next_seq += 1;
    }

    fn pop(&mut self) -> Option<(N, C)> {
        self.heap.pop().map(|Reverse(entry)| (entry.state, entry.cost))
    }
}

/// One run of Dijkstra's algorithm, stopping early when `stop` accepts a settled state.
///
/// Returns the state that stopped the search, if any, together with every tentative cost and predecessor recorded so far.
fn run<N, C, F, I, S>(start: N, mut neighbors: F, mut stop: S) -> (Option<N>, HashMap<N, C>, HashMap<N, Option<N>>)
where
    N: Eq + Hash + Clone,
    C: Copy + Ord + Default + Add<Output = C>,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, C)>,
    S: FnMut(&N) -> bool,
{
    let mut costs = HashMap::from([(start.clone(), C::default())]);
    let mut parents = HashMap::from([(start.clone(), None)]);
    let mut settled = HashSet::new();
    let mut frontier = Frontier::new();
    frontier.push(start, C::default());

    while let Some((current, cost)) = frontier.pop() {
        if !settled.insert(current.clone()) {
            continue;
        }

        if stop(&current) {
            tracing::debug!(settled = settled.len(), "dijkstra reached goal");
            return (Some(current), costs, parents);
        }

        for (neighbor, step_cost) in neighbors(&current) {
            if settled.contains(&neighbor) {
                continue;
            }

            let candidate = cost + step_cost;
            if costs.get(&neighbor).map_or(true, |known| candidate < *known) {
                costs.insert(neighbor.clone(), candidate);
                parents.insert(neighbor.clone(), Some(current.clone()));
                frontier.push(neighbor, candidate);
            }
        }
    }

    tracing::debug!(settled = settled.len(), "dijkstra exhausted frontier");
    (None, costs, parents)
}

/// Minimal total cost from `start` to every reachable state, `start` included at zero cost.
pub fn dijkstra_distances<N, C, F, I>(start: N, neighbors: F) -> HashMap<N, C>
where
    N: Eq + Hash + Clone,
    C: Copy + Ord + Default + Add<Output = C>,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, C)>,
{
    let (_, costs, _) = run(start, neighbors, |_| false);
    costs
}

/// Minimal total cost from `start` to `goal`, or [`None`] if `goal` is unreachable.
///
/// The search stops as soon as `goal` is settled.
pub fn dijkstra_cost<N, C, F, I>(start: N, neighbors: F, goal: &N) -> Option<C>
where
    N: Eq + Hash + Clone,
    C: Copy + Ord + Default + Add<Output = C>,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, C)>,
{
    let (found, costs, _) = run(start, neighbors, |state| state == goal);
    found.and_then(|state| costs.get(&state).copied())
}

/// A cheapest path from `start` to the first settled state satisfying `goal`, with its cost.
pub fn dijkstra_path<N, C, F, I, G>(start: N, neighbors: F, goal: G) -> Option<(C, Vec<N>)>
where
    N: Eq + Hash + Clone,
    C: Copy + Ord + Default + Add<Output = C>,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, C)>,
    G: FnMut(&N) -> bool,
{
    let (found, costs, parents) = run(start, neighbors, goal);
    let end = found?;
    let cost = *costs.get(&end)?;

    Some((cost, reconstruct_path(&parents, end)))
}

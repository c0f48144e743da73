//! Cliques in explicit undirected graphs.
//!
//! Graphs are given as an [`AdjacencyMap`] and must be symmetric: if `a` lists `b` as a neighbor, `b` must list `a`.
//! Symmetry is not checked.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use petgraph::graphmap::{NodeTrait, UnGraphMap};

/// An explicit graph: each node mapped to the set of its neighbors.
pub type AdjacencyMap<N> = HashMap<N, HashSet<N>>;

/// Build a symmetric [`AdjacencyMap`] from undirected edges.
pub fn undirected_adjacency<N, It>(edges: It) -> AdjacencyMap<N>
where
    N: Eq + Hash + Clone,
    It: IntoIterator<Item = (N, N)>,
{
    let mut graph: AdjacencyMap<N> = HashMap::new();
    for (a, b) in edges {
        graph.entry(a.clone()).or_default().insert(b.clone());
        graph.entry(b).or_default().insert(a);
    }

    graph
}

fn neighbors_of<'a, N>(graph: &'a AdjacencyMap<N>, node: &N) -> impl Iterator<Item = &'a N> + 'a
where
    N: Eq + Hash + Clone,
{
    let node = node.clone();
    graph.get(&node).into_iter().flatten().filter(move |neighbor| **neighbor != node)
}

fn restricted<N>(graph: &AdjacencyMap<N>, set: &HashSet<N>, node: &N) -> HashSet<N>
where
    N: Eq + Hash + Clone,
{
    neighbors_of(graph, node).filter(|neighbor| set.contains(*neighbor)).cloned().collect()
}

struct MaxCliqueSearch<'a, N> {
    graph: &'a AdjacencyMap<N>,
    best: Vec<N>,
    branches: u64,
}

impl<N> MaxCliqueSearch<'_, N>
where
    N: Eq + Hash + Clone,
{
    fn expand(&mut self, clique: &mut Vec<N>, mut candidates: HashSet<N>, mut excluded: HashSet<N>) {
        self.branches += 1;

        if candidates.is_empty() {
            if clique.len() > self.best.len() {
                self.best = clique.clone();
            }
            return;
        }

        while let Some(node) = candidates.iter().next().cloned() {
            // even taking every remaining candidate could not beat the best so far
            if clique.len() + candidates.len() <= self.best.len() {
                return;
            }

            candidates.remove(&node);
            let next_candidates = restricted(self.graph, &candidates, &node);
            let next_excluded = restricted(self.graph, &excluded, &node);

            clique.push(node.clone());
            self.expand(clique, next_candidates, next_excluded);
            clique.pop();

            excluded.insert(node);
        }
    }
}

/// One largest set of pairwise-adjacent nodes; empty for an empty graph.
///
/// Bron-Kerbosch branching with a size bound: a branch is abandoned once the current clique plus every remaining candidate could not exceed the best found.
/// When several maximum cliques exist, which one is returned is unspecified.
#[tracing::instrument(skip_all, fields(nodes = graph.len()))]
pub fn find_max_clique<N>(graph: &AdjacencyMap<N>) -> HashSet<N>
where
    N: Eq + Hash + Clone,
{
    let mut search = MaxCliqueSearch {
        graph,
        best: Vec::new(),
        branches: 0,
    };
    search.expand(&mut Vec::new(), graph.keys().cloned().collect(), HashSet::new());
    tracing::debug!(branches = search.branches, size = search.best.len(), "max clique found");

    search.best.into_iter().collect()
}

/// [`find_max_clique`] over a petgraph [`UnGraphMap`].
pub fn find_max_clique_in<N, E>(graph: &UnGraphMap<N, E>) -> HashSet<N>
where
    N: NodeTrait,
{
    find_max_clique(&adjacency_of(graph))
}

/// The [`AdjacencyMap`] of an [`UnGraphMap`], including isolated nodes.
pub fn adjacency_of<N, E>(graph: &UnGraphMap<N, E>) -> AdjacencyMap<N>
where
    N: NodeTrait,
{
    graph.nodes()
        .map(|node| (node, graph.neighbors(node).collect()))
        .collect()
}

/// Every maximal clique, found by Bron-Kerbosch with pivoting.
pub fn maximal_cliques<N>(graph: &AdjacencyMap<N>) -> Vec<HashSet<N>>
where
    N: Eq + Hash + Clone,
{
    fn expand<N: Eq + Hash + Clone>(
        graph: &AdjacencyMap<N>,
        clique: &mut Vec<N>,
        mut candidates: HashSet<N>,
        mut excluded: HashSet<N>,
        found: &mut Vec<HashSet<N>>,
    ) {
        if candidates.is_empty() && excluded.is_empty() {
            found.push(clique.iter().cloned().collect());
            return;
        }

        // the pivot with the most candidate neighbors leaves the fewest branches to try
        let pivot = candidates.union(&excluded)
            .max_by_key(|node| neighbors_of(graph, node).filter(|neighbor| candidates.contains(*neighbor)).count())
            .cloned();
        let pivot_neighbors = pivot.map(|pivot| restricted(graph, &candidates, &pivot)).unwrap_or_default();

        let branches = candidates.difference(&pivot_neighbors).cloned().collect::<Vec<_>>();
        for node in branches {
            let next_candidates = restricted(graph, &candidates, &node);
            let next_excluded = restricted(graph, &excluded, &node);

            clique.push(node.clone());
            expand(graph, clique, next_candidates, next_excluded, found);
            clique.pop();

            candidates.remove(&node);
            excluded.insert(node);
        }
    }

    let mut found = Vec::new();
    if graph.is_empty() {
        return found;
    }
    expand(graph, &mut Vec::new(), graph.keys().cloned().collect(), HashSet::new(), &mut found);

    found
}

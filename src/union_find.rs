//! Disjoint-set membership over arbitrary hashable elements.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use petgraph::graphmap::{NodeTrait, UnGraphMap};

/// A disjoint-set forest over arbitrary hashable elements.
///
/// Elements are added lazily the first time they are mentioned, each as a singleton component.
/// [`find`](Self::find) applies full path compression and [`union`](Self::union) attaches the smaller component under the larger.
/// There is no way to remove an element or split a component.
#[derive(Clone, Debug)]
pub struct UnionFind<T>
where
    T: Eq + Hash + Clone,
{
    parent: HashMap<T, T>,
    // keyed by root only
    size: HashMap<T, usize>,
}

impl<T> UnionFind<T>
where
    T: Eq + Hash + Clone,
{
    /// An empty forest.
    pub fn new() -> Self {
        Self {
            parent: HashMap::new(),
            size: HashMap::new(),
        }
    }

    /// Build the components of an explicit adjacency map; every key becomes an element even if it has no neighbors.
    pub fn from_adjacency(graph: &HashMap<T, HashSet<T>>) -> Self {
        let mut uf = Self::new();
        for (node, neighbors) in graph {
            uf.find(node.clone());
            for neighbor in neighbors {
                uf.union(node.clone(), neighbor.clone());
            }
        }

        uf
    }

    /// The representative of the component containing `x`, registering `x` as a singleton if it is new.
    pub fn find(&mut self, x: T) -> T {
        if !self.parent.contains_key(&x) {
            self.parent.insert(x.clone(), x.clone());
            self.size.insert(x.clone(), 1);
            return x;
        }

        let mut root = x.clone();
        while let Some(parent) = self.parent.get(&root).filter(|parent| **parent != root) {
            root = parent.clone();
        }

        // point everything on the walked chain straight at the root
        let mut current = x;
        while current != root {
            let next = self.parent.insert(current, root.clone()).unwrap_or_else(|| root.clone());
            current = next;
        }

        root
    }

    /// Merge the components containing `x` and `y`.
    ///
    /// Returns `true` if they were previously separate.
    pub fn union(&mut self, x: T, y: T) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        let size_x = self.size.get(&root_x).copied().unwrap_or(1);
        let size_y = self.size.get(&root_y).copied().unwrap_or(1);
        let (big, small) = if size_x >= size_y { (root_x, root_y) } else { (root_y, root_x) };

        self.size.remove(&small);
        self.size.insert(big.clone(), size_x + size_y);
        self.parent.insert(small, big);

        true
    }

    /// Whether `x` and `y` are in the same component.
    pub fn connected(&mut self, x: T, y: T) -> bool {
        self.find(x) == self.find(y)
    }

    /// Each root mapped to the number of elements in its component.
    pub fn get_component_sizes(&self) -> HashMap<T, usize> {
        self.size.clone()
    }

    /// The number of disjoint components.
    pub fn count_components(&self) -> usize {
        self.size.len()
    }

    /// The number of elements seen so far.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether no element has been seen yet.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Every component as a set of its members.
    pub fn components(&mut self) -> Vec<HashSet<T>> {
        let elements = self.parent.keys().cloned().collect::<Vec<_>>();
        let mut grouped: HashMap<T, HashSet<T>> = HashMap::with_capacity(self.size.len());
        for element in elements {
            let root = self.find(element.clone());
            grouped.entry(root).or_default().insert(element);
        }

        grouped.into_values().collect()
    }
}

impl<T> Default for UnionFind<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UnionFind<T>
where
    T: NodeTrait,
{
    /// Build the components of an undirected [`UnGraphMap`]; isolated nodes become singletons.
    pub fn from_graph<E>(graph: &UnGraphMap<T, E>) -> Self {
        let mut uf = Self::new();
        for node in graph.nodes() {
            uf.find(node);
        }
        for (a, b, _) in graph.all_edges() {
            uf.union(a, b);
        }

        uf
    }
}

impl<T> Extend<(T, T)> for UnionFind<T>
where
    T: Eq + Hash + Clone,
{
    fn extend<It: IntoIterator<Item = (T, T)>>(&mut self, edges: It) {
        for (x, y) in edges {
            self.union(x, y);
        }
    }
}

impl<T> FromIterator<(T, T)> for UnionFind<T>
where
    T: Eq + Hash + Clone,
{
    fn from_iter<It: IntoIterator<Item = (T, T)>>(edges: It) -> Self {
        let mut uf = Self::new();
        uf.extend(edges);
        uf
    }
}

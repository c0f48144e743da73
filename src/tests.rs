#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};
    use std::num::NonZero;

    use itertools::Itertools;
    use proptest::prelude::*;

    use crate::builder::{Builder, MazeBuilder};
    use crate::clique::{find_max_clique, maximal_cliques, undirected_adjacency, AdjacencyMap};
    use crate::connectivity::flood_fill;
    use crate::dijkstra::{dijkstra_cost, dijkstra_distances};
    use crate::grid::Grid;
    use crate::input::{char_grid, graph_edges};
    use crate::location::Location;
    use crate::paths::{count_paths_cyclic, count_paths_dag};
    use crate::search::{bfs_distances, bfs_path, dfs_path};
    use crate::shape::SquareStep;
    use crate::union_find::UnionFind;

    fn letters() -> AdjacencyMap<char> {
        HashMap::from([
            ('A', HashSet::from(['B', 'C'])),
            ('B', HashSet::from(['A', 'C'])),
            ('C', HashSet::from(['A', 'B'])),
            ('D', HashSet::from(['E'])),
            ('E', HashSet::from(['D'])),
        ])
    }

    fn chain(n: &u32) -> Vec<u32> {
        if *n < 4 { vec![n + 1] } else { vec![] }
    }

    #[test]
    fn triangle_and_pair() {
        let graph = letters();
        assert_eq!(find_max_clique(&graph), HashSet::from(['A', 'B', 'C']));

        let uf = UnionFind::from_adjacency(&graph);
        assert_eq!(uf.count_components(), 2);
    }

    #[test]
    fn chain_of_five() {
        assert_eq!(bfs_path(0, chain, |n| *n == 4), Some(vec![0, 1, 2, 3, 4]));
        let unit = |n: &u32| chain(n).into_iter().map(|m| (m, 1u32)).collect_vec();
        assert_eq!(dijkstra_cost(0, unit, &4), Some(4));
    }

    #[test]
    fn open_three_by_three_fills_from_a_corner() {
        let grid = Grid::filled((NonZero::new(3).unwrap(), NonZero::new(3).unwrap()), '.');
        let region = flood_fill(&grid, Location(0, 0), |c| *c == '.');
        assert_eq!(region.len(), 9);
        assert_eq!(region, grid.locations().collect::<HashSet<_>>());
    }

    #[test]
    fn lan_party() {
        let edges = "kh-tc\nqp-kh\nde-cg\nka-co\nyn-aq\nqp-ub\ncg-tb\nvc-aq\ntb-ka\nwh-tc\nyn-cg\nkh-ub\nta-co\nde-co\ntc-td\ntb-wq\nwh-td\nta-ka\ntd-qp\naq-cg\nwq-ub\nub-vc\nde-ta\nwq-aq\nwq-vc\nwh-yn\nka-de\nkh-ta\nco-tc\nwh-qp\ntb-vc\ntd-yn";
        let graph = graph_edges(edges, "-", false).unwrap();
        let clique = find_max_clique(&graph);
        assert_eq!(clique.into_iter().sorted().join(","), "co,de,ka,ta");
    }

    #[test]
    fn maze_from_text() {
        let grid = char_grid("S.#.\n..#.\n.#..\n...E").unwrap();
        let start = grid.find_first(&'S').unwrap();
        let end = grid.find_first(&'E').unwrap();
        let maze = MazeBuilder::<SquareStep>::from_grid(&grid, |c| *c != '#').build().unwrap();

        let path = maze.shortest_path(start, end).unwrap();
        assert_eq!(path.len() - 1, 6);
        assert_eq!(maze.count_components(), 1);
        assert_eq!(maze.to_string(), "..#.\n..#.\n.#..\n....\n");
    }

    fn arb_graph(max_nodes: u32, max_edges: usize) -> impl Strategy<Value = (u32, Vec<(u32, u32)>)> {
        (1..=max_nodes).prop_flat_map(move |n| (Just(n), prop::collection::vec((0..n, 0..n), 0..=max_edges)))
    }

    fn directed(n: u32, edges: &[(u32, u32)]) -> HashMap<u32, Vec<u32>> {
        let mut out: HashMap<u32, Vec<u32>> = (0..n).map(|node| (node, Vec::new())).collect();
        for (a, b) in edges {
            out.entry(*a).or_default().push(*b);
        }
        out
    }

    fn brute_force_clique_size(graph: &AdjacencyMap<u32>) -> usize {
        let nodes = graph.keys().copied().sorted().collect_vec();
        (0..=nodes.len()).rev()
            .find(|size| nodes.iter().combinations(*size).any(|subset| {
                subset.iter().tuple_combinations().all(|(a, b)| graph[*a].contains(*b))
            }))
            .unwrap_or(0)
    }

    fn floyd_warshall(n: usize, edges: &[(u32, u32, u32)]) -> Vec<Vec<Option<u32>>> {
        let mut dist = vec![vec![None; n]; n];
        for (node, row) in dist.iter_mut().enumerate() {
            row[node] = Some(0);
        }
        for (a, b, w) in edges {
            let slot = &mut dist[*a as usize][*b as usize];
            *slot = Some(slot.map_or(*w, |known| known.min(*w)));
        }
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    if let (Some(ik), Some(kj)) = (dist[i][k], dist[k][j]) {
                        if dist[i][j].map_or(true, |known| ik + kj < known) {
                            dist[i][j] = Some(ik + kj);
                        }
                    }
                }
            }
        }
        dist
    }

    proptest! {
        #[test]
        fn bfs_matches_unit_dijkstra((n, edges) in arb_graph(12, 30), start in 0u32..12) {
            let start = start % n;
            let graph = directed(n, &edges);
            let hops = bfs_distances(start, |node| graph[node].clone());
            let costs = dijkstra_distances(start, |node| graph[node].iter().map(|next| (*next, 1usize)).collect_vec());
            prop_assert_eq!(hops, costs);
        }

        #[test]
        fn found_paths_follow_edges((n, edges) in arb_graph(12, 30), goal in 0u32..12) {
            let goal = goal % n;
            let graph = directed(n, &edges);
            let distances = bfs_distances(0, |node| graph[node].clone());

            let bfs = bfs_path(0, |node| graph[node].clone(), |node| *node == goal);
            let dfs = dfs_path(0, |node| graph[node].clone(), |node| *node == goal);
            prop_assert_eq!(bfs.is_some(), distances.contains_key(&goal));
            prop_assert_eq!(dfs.is_some(), distances.contains_key(&goal));

            for path in bfs.iter().chain(dfs.iter()) {
                prop_assert_eq!(path.first(), Some(&0));
                prop_assert_eq!(path.last(), Some(&goal));
                for (a, b) in path.iter().tuple_windows() {
                    prop_assert!(graph[a].contains(b));
                }
            }
            if let Some(path) = bfs {
                prop_assert_eq!(path.len() - 1, distances[&goal]);
            }
        }

        #[test]
        fn dag_and_cyclic_counts_agree((n, edges) in arb_graph(9, 20)) {
            // only keep edges pointing to a higher node, which makes the graph acyclic
            let forward = edges.into_iter().filter(|(a, b)| a < b).collect_vec();
            let graph = directed(n, &forward);
            let goal = n - 1;

            let dag = count_paths_dag(0, |node| graph[node].clone(), |node| *node == goal);
            let cyclic = count_paths_cyclic(0, |node| graph[node].clone(), |node| *node == goal);
            prop_assert_eq!(dag, cyclic);
        }

        #[test]
        fn union_find_tracks_connectivity((n, edges) in arb_graph(15, 20)) {
            let mut uf = UnionFind::new();
            for node in 0..n {
                uf.find(node);
            }
            uf.extend(edges.iter().copied());

            let graph = undirected_adjacency(edges.iter().copied());
            for a in 0..n {
                let reachable = bfs_distances(a, |node| graph.get(node).cloned().unwrap_or_default());
                for b in 0..n {
                    prop_assert_eq!(uf.connected(a, b), reachable.contains_key(&b));
                }
            }

            let components = uf.count_components();
            uf.extend(edges.iter().copied());
            prop_assert_eq!(uf.count_components(), components);
            prop_assert_eq!(uf.components().iter().map(HashSet::len).sum::<usize>(), n as usize);
        }

        #[test]
        fn max_clique_is_valid_and_maximum((n, edges) in arb_graph(8, 20)) {
            let mut graph = undirected_adjacency(edges.into_iter().filter(|(a, b)| a != b));
            for node in 0..n {
                graph.entry(node).or_default();
            }

            let clique = find_max_clique(&graph);
            for (a, b) in clique.iter().tuple_combinations() {
                prop_assert!(graph[a].contains(b));
            }
            prop_assert_eq!(clique.len(), brute_force_clique_size(&graph));

            let largest = maximal_cliques(&graph).iter().map(HashSet::len).max().unwrap_or(0);
            prop_assert_eq!(largest, clique.len());
        }

        #[test]
        fn dijkstra_matches_floyd_warshall(
            (n, edges) in (1..=8u32).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n, 0..10u32), 0..=24))),
            start in 0u32..8,
        ) {
            let start = start % n;
            let mut graph: HashMap<u32, Vec<(u32, u32)>> = (0..n).map(|node| (node, Vec::new())).collect();
            for (a, b, w) in &edges {
                graph.entry(*a).or_default().push((*b, *w));
            }
            let oracle = floyd_warshall(n as usize, &edges);
            let expected = &oracle[start as usize];

            let mut settled = Vec::new();
            let distances = dijkstra_distances(start, |node: &u32| {
                settled.push(*node);
                graph[node].clone()
            });

            for goal in 0..n {
                prop_assert_eq!(distances.get(&goal).copied(), expected[goal as usize]);
                prop_assert_eq!(dijkstra_cost(start, |node: &u32| graph[node].clone(), &goal), expected[goal as usize]);
            }

            // states are expanded in the order they are settled
            let settled_costs = settled.iter().map(|node| distances[node]).collect_vec();
            prop_assert!(settled_costs.iter().tuple_windows().all(|(a, b)| a <= b), "settle order {:?}", settled_costs);
            prop_assert_eq!(settled.len(), distances.len());
        }

        #[test]
        fn maze_fill_matches_grid_fill(cells in prop::collection::vec(any::<bool>(), 16)) {
            let rows = cells.chunks(4).map(|row| row.to_vec()).collect_vec();
            let grid = Grid::from_rows(rows).unwrap();
            let maze = MazeBuilder::<SquareStep>::from_grid(&grid, |open| *open).build().unwrap();

            for location in grid.locations() {
                prop_assert_eq!(maze.flood_fill(location), flood_fill(&grid, location, |open| *open));
            }
        }
    }
}

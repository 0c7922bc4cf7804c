//! Phase 2 tests: Shortest paths, topological sort and path rendering.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wordgraph::engine::{PathPrinter, ShortestPath, TopologicalSort};
use wordgraph::graph::{Graph, GraphBuilder};
use wordgraph::types::error::GraphError;
use wordgraph::types::{NodeId, UNVISITED};

// ==================== Helper ====================

fn word_graph(words: &[&str]) -> Graph {
    let mut builder = GraphBuilder::word_distance();
    builder.add_nodes(words.iter().copied());
    builder.build().unwrap()
}

fn pair_graph(nodes: &[&str], edges: &[(&str, &str)]) -> Graph {
    let mut builder = GraphBuilder::explicit_pair();
    builder.add_nodes(nodes.iter().copied());
    for (source, dest) in edges {
        builder.link(*source, *dest);
    }
    builder.build().unwrap()
}

/// Random directed graph over `n` nodes named `n0..`.
fn random_graph(rng: &mut StdRng, n: usize, edge_chance: f64) -> Graph {
    let names: Vec<String> = (0..n).map(|i| format!("n{}", i)).collect();
    let mut builder = GraphBuilder::explicit_pair();
    builder.add_nodes(names.iter().cloned());
    for a in &names {
        for b in &names {
            if a != b && rng.gen_bool(edge_chance) {
                builder.link(a.clone(), b.clone());
            }
        }
    }
    builder.build().unwrap()
}

/// All-pairs shortest edge counts by Floyd–Warshall.
fn brute_force_distances(graph: &Graph) -> Vec<Vec<Option<usize>>> {
    let n = graph.node_count();
    let mut dist = vec![vec![None; n]; n];
    for (id, _) in graph.nodes() {
        dist[id.index()][id.index()] = Some(0);
        for &w in graph.adjacent(id) {
            if w != id {
                dist[id.index()][w.index()] = Some(1);
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (dist[i][k], dist[k][j]) {
                    let via = a + b;
                    if dist[i][j].map_or(true, |d| via < d) {
                        dist[i][j] = Some(via);
                    }
                }
            }
        }
    }
    dist
}

fn position(order: &[NodeId], id: NodeId) -> usize {
    order.iter().position(|&x| x == id).unwrap()
}

// ==================== Shortest Path Tests ====================

#[test]
fn test_bfs_word_ladder() {
    let graph = word_graph(&["cold", "cord", "card", "ward", "warm", "corm", "worm"]);
    let paths = ShortestPath::run_from(&graph, "cold").unwrap();

    let warm = graph.lookup("warm").unwrap();
    assert_eq!(paths.distance(warm), Some(4));
    let rendered = PathPrinter::render(&graph, &paths, warm);
    assert_eq!(rendered.len(), 5);
    assert_eq!(rendered.first(), Some(&"cold"));
    assert_eq!(rendered.last(), Some(&"warm"));
}

#[test]
fn test_bfs_source_distance_zero() {
    let graph = word_graph(&["cat", "cot", "cog", "dog"]);
    let cat = graph.lookup("cat").unwrap();
    let paths = ShortestPath::run(&graph, cat).unwrap();

    assert_eq!(paths.source(), cat);
    assert_eq!(paths.distance(cat), Some(0));
    assert!(paths.predecessor_chain(cat).is_empty());
    assert_eq!(PathPrinter::render(&graph, &paths, cat), vec!["cat"]);
    assert_eq!(paths.visit_order().first(), Some(&cat));
}

#[test]
fn test_bfs_unreachable_nodes() {
    let graph = word_graph(&["cat", "cot", "fish"]);
    let paths = ShortestPath::run_from(&graph, "cat").unwrap();
    let fish = graph.lookup("fish").unwrap();

    assert_eq!(paths.distance(fish), None);
    assert_eq!(paths.distance_or_unvisited(fish), UNVISITED);
    assert!(!paths.is_reachable(fish));
    assert!(paths.predecessor_chain(fish).is_empty());
    assert_eq!(PathPrinter::render(&graph, &paths, fish), vec!["fish"]);
    assert_eq!(paths.reachable_count(), 2);
}

#[test]
fn test_bfs_first_discovered_predecessor_wins() {
    // Diamond: A -> B -> D and A -> C -> D
    let graph = pair_graph(
        &["A", "B", "C", "D"],
        &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
    );
    let paths = ShortestPath::run_from(&graph, "A").unwrap();
    let d = graph.lookup("D").unwrap();

    assert_eq!(paths.distance(d), Some(2));
    assert_eq!(paths.predecessor(d), graph.lookup("B"));
    assert_eq!(PathPrinter::render_line(&graph, &paths, d), "A -> B -> D");
}

#[test]
fn test_bfs_directed_edges_respected() {
    let graph = pair_graph(&["A", "B", "C"], &[("A", "B"), ("C", "B")]);
    let paths = ShortestPath::run_from(&graph, "A").unwrap();
    let c = graph.lookup("C").unwrap();
    assert!(!paths.is_reachable(c));
}

#[test]
fn test_bfs_layer_invariant() {
    let graph = word_graph(&[
        "lead", "load", "goad", "gold", "lode", "lore", "lord", "word", "ward", "card",
    ]);
    let paths = ShortestPath::run_from(&graph, "lead").unwrap();

    for &id in paths.visit_order() {
        if let Some(prev) = paths.predecessor(id) {
            assert_eq!(
                paths.distance(id).unwrap(),
                paths.distance(prev).unwrap() + 1
            );
        }
    }
    // Visit order never decreases in distance
    let distances: Vec<usize> = paths
        .visit_order()
        .iter()
        .map(|&id| paths.distance(id).unwrap())
        .collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_bfs_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..25 {
        let n = rng.gen_range(1..9);
        let graph = random_graph(&mut rng, n, 0.25);
        let expected = brute_force_distances(&graph);

        for source in graph.node_ids() {
            let paths = ShortestPath::run(&graph, source).unwrap();
            for target in graph.node_ids() {
                assert_eq!(
                    paths.distance(target),
                    expected[source.index()][target.index()]
                );
                if let Some(d) = paths.distance(target) {
                    // Chain excludes the target itself
                    assert_eq!(paths.predecessor_chain(target).len(), d);
                }
            }
        }
    }
}

#[test]
fn test_bfs_repeated_runs_independent() {
    let graph = word_graph(&["cat", "cot", "cog", "dog"]);
    let from_cat = ShortestPath::run_from(&graph, "cat").unwrap();
    let from_dog = ShortestPath::run_from(&graph, "dog").unwrap();
    let again = ShortestPath::run_from(&graph, "cat").unwrap();

    let dog = graph.lookup("dog").unwrap();
    let cat = graph.lookup("cat").unwrap();
    assert_eq!(from_cat.distance(dog), Some(3));
    assert_eq!(from_dog.distance(cat), Some(3));
    assert_eq!(from_dog.distance(dog), Some(0));
    assert_eq!(again.distance(dog), Some(3));
}

#[test]
fn test_bfs_unknown_source() {
    let graph = word_graph(&["cat"]);
    match ShortestPath::run_from(&graph, "dog") {
        Err(GraphError::UnknownNode(name)) => assert_eq!(name, "dog"),
        other => panic!("Expected UnknownNode, got {:?}", other),
    }
}

// ==================== Path Printer Tests ====================

#[test]
fn test_path_printer_idempotent() {
    let graph = word_graph(&["cat", "cot", "cog", "dog"]);
    let paths = ShortestPath::run_from(&graph, "cat").unwrap();
    let dog = graph.lookup("dog").unwrap();

    let first = PathPrinter::render(&graph, &paths, dog);
    let second = PathPrinter::render(&graph, &paths, dog);
    assert_eq!(first, second);
    assert_eq!(first, vec!["cat", "cot", "cog", "dog"]);
    assert_eq!(
        PathPrinter::render_line(&graph, &paths, dog),
        "cat -> cot -> cog -> dog"
    );
}

// ==================== Topological Sort Tests ====================

#[test]
fn test_topo_simple_chain() {
    let graph = pair_graph(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
    let order = TopologicalSort::run_named(&graph).unwrap();
    assert_eq!(order, vec!["A", "B", "C"]);
}

#[test]
fn test_topo_cycle_detected() {
    let graph = pair_graph(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")]);
    match TopologicalSort::run(&graph) {
        Err(GraphError::CycleFound {
            message,
            processed,
            total,
        }) => {
            assert!(!message.is_empty());
            assert_eq!(processed, 0);
            assert_eq!(total, 3);
        }
        other => panic!("Expected CycleFound, got {:?}", other),
    }
}

#[test]
fn test_topo_partial_cycle_counts() {
    // R is free, X <-> Y form a cycle, Z hangs off the cycle
    let graph = pair_graph(
        &["R", "X", "Y", "Z"],
        &[("R", "X"), ("X", "Y"), ("Y", "X"), ("Y", "Z")],
    );
    match TopologicalSort::run(&graph) {
        Err(GraphError::CycleFound {
            processed, total, ..
        }) => {
            assert_eq!(processed, 1);
            assert_eq!(total, 4);
            assert!(processed < total);
        }
        other => panic!("Expected CycleFound, got {:?}", other),
    }
}

#[test]
fn test_topo_self_loop_is_cycle() {
    let graph = pair_graph(&["A"], &[("A", "A")]);
    assert!(matches!(
        TopologicalSort::run(&graph),
        Err(GraphError::CycleFound { .. })
    ));
}

#[test]
fn test_topo_ties_follow_declaration_order() {
    let graph = pair_graph(
        &["shoes", "socks", "pants", "belt"],
        &[("socks", "shoes"), ("pants", "shoes"), ("pants", "belt")],
    );
    let order = TopologicalSort::run_named(&graph).unwrap();
    assert_eq!(order, vec!["socks", "pants", "shoes", "belt"]);
}

#[test]
fn test_topo_does_not_mutate_graph() {
    let graph = pair_graph(&["A", "B", "C"], &[("A", "B"), ("A", "C"), ("B", "C")]);
    let before: Vec<usize> = graph.nodes().map(|(_, n)| n.indegree()).collect();

    let first = TopologicalSort::run(&graph).unwrap();
    let second = TopologicalSort::run(&graph).unwrap();

    let after: Vec<usize> = graph.nodes().map(|(_, n)| n.indegree()).collect();
    assert_eq!(before, after);
    assert_eq!(first, second);
}

#[test]
fn test_topo_empty_graph() {
    let graph = Graph::explicit_pair();
    assert!(TopologicalSort::run(&graph).unwrap().is_empty());
}

#[test]
fn test_topo_random_dags() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..25 {
        let n = rng.gen_range(1..12);
        let names: Vec<String> = (0..n).map(|i| format!("t{}", i)).collect();
        let mut builder = GraphBuilder::explicit_pair();
        builder.add_nodes(names.iter().cloned());
        // Edges only point from lower to higher index, so the graph is acyclic
        let mut edges = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.gen_bool(0.3) {
                    builder.link(names[i].clone(), names[j].clone());
                    edges.push((i, j));
                }
            }
        }
        let graph = builder.build().unwrap();
        let order = TopologicalSort::run(&graph).unwrap();

        assert_eq!(order.len(), graph.node_count());
        let mut seen = order.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), graph.node_count());

        for (i, j) in edges {
            let u = graph.lookup(&names[i]).unwrap();
            let w = graph.lookup(&names[j]).unwrap();
            assert!(position(&order, u) < position(&order, w));
        }
    }
}

#[test]
fn test_topo_on_word_graph_reports_cycle() {
    // Word edges run both ways, so any linked pair blocks the sort
    let graph = word_graph(&["cat", "cot", "fish"]);
    match TopologicalSort::run(&graph) {
        Err(GraphError::CycleFound {
            processed, total, ..
        }) => {
            assert_eq!(processed, 1);
            assert_eq!(total, 3);
        }
        other => panic!("Expected CycleFound, got {:?}", other),
    }
}

use kgraph_core::KnowledgeGraphError;
use kgraph_core::ancestors::NO_COMMON_ANCESTOR;
use kgraph_core::knowledge::KnowledgeGraph;

fn make_kg(entities: &[&str], relations: &[(&str, &str, f32)]) -> KnowledgeGraph {
    let mut kg = KnowledgeGraph::new();
    for e in entities {
        kg.add_entity(*e).unwrap();
    }
    for (from, to, weight) in relations {
        kg.add_relation(from, to, *weight).unwrap();
    }
    kg
}

#[test]
fn test_chain_scenario() {
    let kg = make_kg(&["A", "B", "C"], &[("A", "B", 1.0), ("B", "C", 2.0)]);

    assert_eq!(kg.bfs("A").unwrap(), "A B C");
    assert_eq!(kg.dfs("A").unwrap(), "A B C");
    assert_eq!(kg.relation_weight("A", "B").unwrap(), 1.0);
    assert_eq!(kg.relation_weight("B", "C").unwrap(), 2.0);
    assert!(!kg.is_reachable("A", "C").unwrap());
    assert!(kg.is_reachable("A", "B").unwrap());
}

#[test]
fn test_common_ancestor_scenario() {
    let kg = make_kg(
        &["A", "B", "C"],
        &[("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 1.0)],
    );
    assert_eq!(
        kg.find_common_ancestors("B", "C").unwrap(),
        Some("A".to_string())
    );
}

#[test]
fn test_no_common_ancestor() {
    let kg = make_kg(&["A", "B", "C", "D"], &[("A", "B", 1.0), ("C", "D", 1.0)]);
    let found = kg.find_common_ancestors("B", "D").unwrap();
    assert_eq!(found, None);
    assert_eq!(
        found.as_deref().unwrap_or(NO_COMMON_ANCESTOR),
        "No common ancestor"
    );
}

#[test]
fn test_entity_not_found_everywhere() {
    let mut kg = make_kg(&["A"], &[]);
    let missing = KnowledgeGraphError::EntityNotFound("Z".to_string());

    assert_eq!(kg.add_relation("A", "Z", 1.0), Err(missing.clone()));
    assert_eq!(kg.get_neighbors("Z"), Err(missing.clone()));
    assert_eq!(kg.bfs("Z"), Err(missing.clone()));
    assert_eq!(kg.dfs("Z"), Err(missing.clone()));
    assert_eq!(kg.is_reachable("Z", "A"), Err(missing.clone()));
    assert_eq!(kg.has_path("A", "Z"), Err(missing.clone()));
    assert_eq!(kg.get_related_entities("Z", 2), Err(missing.clone()));
    assert_eq!(kg.find_common_ancestors("A", "Z"), Err(missing.clone()));
    assert_eq!(kg.collect_ancestors("Z"), Err(missing));
}

#[test]
fn test_entity_exists() {
    let mut kg = make_kg(&["A"], &[]);
    assert_eq!(
        kg.add_entity("A"),
        Err(KnowledgeGraphError::EntityExists("A".to_string()))
    );
}

#[test]
fn test_relation_is_idempotent() {
    let mut kg = make_kg(&["A", "B"], &[("A", "B", 1.0)]);
    kg.add_relation("A", "B", 4.0).unwrap();
    assert_eq!(kg.get_neighbors("A").unwrap(), vec!["B"]);
    assert_eq!(kg.relation_weight("A", "B").unwrap(), 1.0);
}

#[test]
fn test_neighbors_in_insertion_order() {
    let kg = make_kg(
        &["root", "c1", "c2", "c3"],
        &[("root", "c3", 1.0), ("root", "c1", 1.0), ("root", "c2", 1.0)],
    );
    assert_eq!(kg.get_neighbors("root").unwrap(), vec!["c3", "c1", "c2"]);
}

#[test]
fn test_related_entities_diamond() {
    // A -> B, A -> C, B -> D, C -> D, D -> E
    let kg = make_kg(
        &["A", "B", "C", "D", "E"],
        &[
            ("A", "B", 1.0),
            ("A", "C", 1.0),
            ("B", "D", 1.0),
            ("C", "D", 1.0),
            ("D", "E", 1.0),
        ],
    );
    assert_eq!(kg.get_related_entities("A", 0).unwrap(), Vec::<String>::new());
    assert_eq!(kg.get_related_entities("A", 1).unwrap(), vec!["B", "C"]);
    assert_eq!(
        kg.get_related_entities_default("A").unwrap(),
        vec!["B", "C", "D"]
    );
    assert_eq!(
        kg.get_related_entities("A", 3).unwrap(),
        vec!["B", "C", "D", "E"]
    );
}

#[test]
fn test_render_knowledge_graph() {
    let kg = make_kg(&["A", "B"], &[("A", "B", 1.0)]);
    assert_eq!(kg.to_string(), "Vertex: A\n  Edges:\n    -> A->B\nVertex: B\n");
    assert_eq!(kg.graph().describe_vertex(&"A".to_string()).unwrap(), "A 0 1");
}

#[test]
fn test_default_knowledge_graph_is_empty() {
    let mut kg = KnowledgeGraph::default();
    assert!(kg.get_all_entities().is_empty());
    assert!(kg.graph().is_empty());
    kg.add_entity("A").unwrap();
    assert_eq!(kg.bfs("A").unwrap(), "A");
}

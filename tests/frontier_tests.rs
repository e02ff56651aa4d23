use route_solver::data_structures::Frontier;

#[test]
fn test_entries_pop_in_priority_order() {
    let mut frontier = Frontier::new();
    frontier.push("b", 5u32);
    frontier.push("a", 1);
    frontier.push("c", 3);

    assert_eq!(frontier.pop(), Some(("a", 1)));
    assert_eq!(frontier.pop(), Some(("c", 3)));
    assert_eq!(frontier.pop(), Some(("b", 5)));
    assert_eq!(frontier.pop(), None);
}

#[test]
fn test_reinserted_vertex_keeps_both_entries() {
    // Improving a tentative distance appends a second entry for the same
    // vertex; the better one must surface first
    let mut frontier = Frontier::new();
    frontier.push("a", 7u32);
    frontier.push("a", 2);

    assert_eq!(frontier.len(), 2);
    assert_eq!(frontier.pop(), Some(("a", 2)));
    assert_eq!(frontier.pop(), Some(("a", 7)));
}

#[test]
fn test_len_tracks_entries() {
    let mut frontier = Frontier::new();
    assert!(frontier.is_empty());

    frontier.push(1usize, 10u32);
    frontier.push(2, 20);
    assert_eq!(frontier.len(), 2);

    frontier.pop();
    assert_eq!(frontier.len(), 1);
    assert!(!frontier.is_empty());
}

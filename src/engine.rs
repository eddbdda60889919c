use crate::{pos, Generation, Pos};

/// computes the generation following the passed one, over the whole plane.
///
/// pure and allocation-local: the input is untouched and no state survives
/// the call. only cells touching a live neighborhood can change, so those are
/// the only ones evaluated.
pub fn next_generation(alive: &Generation) -> Generation {
    let candidates: Generation = alive.iter().flat_map(Pos::neighborhood).collect();

    candidates
        .iter()
        .filter(|&cell| will_be_alive(alive.contains(cell), live_neighbor_count(alive, cell)))
        .collect()
}

/// live cells of the moore neighborhood, the cell itself excluded.
fn live_neighbor_count(alive: &Generation, cell: Pos) -> usize {
    cell.neighborhood()
        .filter(|&pos| pos != cell && alive.contains(pos))
        .count()
}

// B3/S23
fn will_be_alive(alive: bool, neighbors: usize) -> bool {
    match (alive, neighbors) {
        (true, 2 | 3) => true,
        (false, 3) => true,
        _ => false,
    }
}

#[test]
fn test_ruleset() {
    assert!(!will_be_alive(true, 0));
    assert!(!will_be_alive(true, 1));
    assert!(will_be_alive(true, 2));
    assert!(will_be_alive(true, 3));
    assert!(!will_be_alive(true, 4));
    assert!(!will_be_alive(true, 8));
    assert!(will_be_alive(false, 3));
    assert!(!will_be_alive(false, 2));
    assert!(!will_be_alive(false, 4));
}

#[test]
fn test_neighbor_count_excludes_self() {
    let alive: Generation = [(0, 0)].into_iter().collect();
    assert_eq!(live_neighbor_count(&alive, pos!(0, 0)), 0);
}

#[test]
fn test_neighbor_count_is_chebyshev_one() {
    let alive: Generation = [(1, 1), (2, 2), (3, 3), (0, 3)].into_iter().collect();
    // (1,1) and (3,3) touch (2,2) diagonally, (0,3) does not touch it.
    assert_eq!(live_neighbor_count(&alive, pos!(2, 2)), 2);
}

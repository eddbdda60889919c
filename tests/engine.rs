use golgen::{next_generation, Generation, Pos};

fn generation(cells: &[(i64, i64)]) -> Generation {
    cells.iter().copied().collect()
}

fn offset(x: i64, y: i64) -> Pos {
    Pos::from((x, y))
}

#[test]
fn canonical_scenario() {
    let current = generation(&[(0, 0), (2, 0), (1, 1), (1, 2), (2, 2)]);
    let expected = generation(&[(1, 0), (0, 1), (1, 2), (2, 2)]);
    assert_eq!(next_generation(&current), expected);
}

#[test]
fn empty_generation_is_a_fixed_point() {
    assert_eq!(next_generation(&Generation::new()), Generation::new());
}

#[test]
fn stepping_is_deterministic() {
    let current = generation(&[(0, 0), (2, 0), (1, 1), (1, 2), (2, 2)]);
    assert_eq!(next_generation(&current), next_generation(&current));
}

#[test]
fn input_is_not_mutated() {
    let current = generation(&[(0, 0), (1, 0), (0, 1)]);
    let snapshot = current.clone();
    next_generation(&current);
    assert_eq!(current, snapshot);
}

#[test]
fn insertion_order_does_not_matter() {
    let cells = [(0, 0), (2, 0), (1, 1), (1, 2), (2, 2)];
    let mut reversed = cells;
    reversed.reverse();
    assert_eq!(
        next_generation(&generation(&cells)),
        next_generation(&generation(&reversed)),
    );
}

#[test]
fn isolated_cell_dies() {
    let lone = generation(&[(4, -7)]);
    assert_eq!(next_generation(&lone), Generation::new());
}

#[test]
fn l_triomino_becomes_a_block() {
    // every live cell has exactly 2 neighbors and survives, the shared
    // corner has 3 and is born.
    let current = generation(&[(0, 0), (1, 0), (0, 1)]);
    let expected = generation(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(next_generation(&current), expected);
}

#[test]
fn block_is_a_still_life() {
    let block = generation(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(next_generation(&block), block);
}

#[test]
fn blinker_oscillates_with_period_two() {
    let horizontal = generation(&[(0, 1), (1, 1), (2, 1)]);
    let vertical = generation(&[(1, 0), (1, 1), (1, 2)]);
    assert_eq!(next_generation(&horizontal), vertical);
    assert_eq!(next_generation(&vertical), horizontal);
}

#[test]
fn glider_translates_after_four_steps() {
    let glider = generation(&[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
    let mut stepped = glider.clone();
    for _ in 0..4 {
        stepped = next_generation(&stepped);
    }
    assert_eq!(stepped, glider.translate(offset(1, 1)));
}

#[test]
fn stepping_commutes_with_translation() {
    let current = generation(&[(0, 0), (2, 0), (1, 1), (1, 2), (2, 2)]);
    let stepped = next_generation(&current);
    for (dx, dy) in [(5, 9), (-7, -3), (1_000_000, -1_000_000)] {
        let moved = current.translate(offset(dx, dy));
        assert_eq!(
            next_generation(&moved),
            stepped.translate(offset(dx, dy)),
            "translation by ({dx},{dy}) changed the outcome",
        );
    }
}

#[test]
fn far_apart_cells_do_not_interact() {
    // two l-triominoes out of each other's reach close into blocks
    // independently.
    let current = generation(&[
        (0, 0),
        (1, 0),
        (0, 1),
        (100, 100),
        (101, 100),
        (100, 101),
    ]);
    let expected = generation(&[
        (0, 0),
        (1, 0),
        (0, 1),
        (1, 1),
        (100, 100),
        (101, 100),
        (100, 101),
        (101, 101),
    ]);
    assert_eq!(next_generation(&current), expected);
}

#[test]
fn negative_coordinates_behave_like_positive_ones() {
    let current = generation(&[(-2, -1), (-1, -1), (0, -1)]);
    let expected = generation(&[(-1, -2), (-1, -1), (-1, 0)]);
    assert_eq!(next_generation(&current), expected);
}

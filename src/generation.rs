use std::collections::HashSet;
use std::fmt::{self, Write};
use std::str::FromStr;

use metrohash::MetroBuildHasher;
use rand::Rng;
use thiserror::Error;

use crate::{pos, Pos};

/// a set of live cells at one simulation step.
///
/// cells are keyed structurally by coordinate, so a generation can never hold
/// the same cell twice and membership is independent of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generation {
    cells: HashSet<Pos, MetroBuildHasher>,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// inserts a live cell, returns false if it was already present.
    pub fn insert(&mut self, pos: Pos) -> bool {
        self.cells.insert(pos)
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells.iter().copied()
    }

    /// returns every cell shifted by the given offset.
    pub fn translate(&self, offset: Pos) -> Self {
        self.iter().map(|pos| pos + offset).collect()
    }

    /// corners of the smallest rectangle containing all live cells,
    /// or `None` when there are none.
    pub fn bounds(&self) -> Option<(Pos, Pos)> {
        let mut cells = self.iter();
        let first = cells.next()?;
        let (min, max) = cells.fold((first, first), |(min, max), p| {
            (
                pos!(min.x.min(p.x), min.y.min(p.y)),
                pos!(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some((min, max))
    }

    /// seeds a random generation over `[0, width) x [0, height)`, each cell
    /// live with probability `density` (must be within `0.0..=1.0`).
    pub fn soup(width: i64, height: i64, density: f64, rng: &mut impl Rng) -> Self {
        let mut cells = Self::new();
        for y in 0..height {
            for x in 0..width {
                if rng.random_bool(density) {
                    cells.insert(pos!(x, y));
                }
            }
        }
        cells
    }
}

impl FromIterator<Pos> for Generation {
    fn from_iter<I: IntoIterator<Item = Pos>>(iter: I) -> Self {
        let cells = iter.into_iter().collect();
        Self { cells }
    }
}

impl FromIterator<(i64, i64)> for Generation {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        iter.into_iter().map(Pos::from).collect()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unrecognized character {found:?} at line {line}, column {column}")]
    UnrecognizedChar {
        found: char,
        line: usize,
        column: usize,
    },
}

/// plaintext seed format: `#` or `O` marks a live cell, `.`, `_` and space
/// mark dead ones, each line is one row counted downward from y = 0.
impl FromStr for Generation {
    type Err = ParseError;

    fn from_str(str: &str) -> Result<Self, Self::Err> {
        let mut cells = Self::new();
        for (y, row) in str.lines().enumerate() {
            for (x, c) in row.chars().enumerate() {
                match c {
                    '#' | 'O' => {
                        cells.insert(pos!(x as i64, y as i64));
                    }
                    '.' | '_' | ' ' => (),
                    found => {
                        return Err(ParseError::UnrecognizedChar {
                            found,
                            line: y + 1,
                            column: x + 1,
                        })
                    }
                }
            }
        }
        Ok(cells)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((min, max)) = self.bounds() else {
            return Ok(());
        };
        for y in min.y..=max.y {
            if y > min.y {
                f.write_char('\n')?;
            }
            for x in min.x..=max.x {
                f.write_char(if self.contains(pos!(x, y)) { '#' } else { '.' })?;
            }
        }
        Ok(())
    }
}

#[test]
fn test_parse() {
    let parsed: Generation = ".#.\n..#\n###".parse().unwrap();
    let expected: Generation = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]
        .into_iter()
        .collect();
    assert_eq!(parsed, expected);
}

#[test]
fn test_parse_rejects_unknown_chars() {
    let result = "..#\n.x.".parse::<Generation>();
    assert_eq!(
        result,
        Err(ParseError::UnrecognizedChar {
            found: 'x',
            line: 2,
            column: 2,
        })
    );
}

#[test]
fn test_display_covers_bounding_box() {
    let cells: Generation = [(-1, -1), (1, 0)].into_iter().collect();
    assert_eq!(cells.to_string(), "#..\n..#");
}

#[test]
fn test_display_parse_round_trip() {
    let cells: Generation = [(0, 0), (2, 0), (1, 1), (1, 2), (2, 2)].into_iter().collect();
    let reparsed: Generation = cells.to_string().parse().unwrap();
    assert_eq!(reparsed, cells);
}

#[test]
fn test_collect_deduplicates() {
    let cells: Generation = [(3, 3), (3, 3), (3, 3)].into_iter().collect();
    assert_eq!(cells.len(), 1);
}

#[test]
fn test_translate() {
    let cells: Generation = [(0, 0), (1, 2)].into_iter().collect();
    let moved = cells.translate(pos!(-4, 1));
    let expected: Generation = [(-4, 1), (-3, 3)].into_iter().collect();
    assert_eq!(moved, expected);
}

#[test]
fn test_soup_stays_in_bounds() {
    use rand::{rngs::StdRng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(7);
    let soup = Generation::soup(8, 8, 0.5, &mut rng);
    assert!(!soup.is_empty());
    for pos in soup.iter() {
        assert!((0..8).contains(&pos.x) && (0..8).contains(&pos.y));
    }
}

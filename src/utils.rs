use std::ops::{Add, Sub};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Pos {
    pub x: i64,
    pub y: i64,
}

#[macro_export]
macro_rules! pos {
    ($x:expr, $y:expr) => {
        Pos { x: $x, y: $y }
    };
}

impl Pos {
    /// iterates the 3x3 block centered on this cell, the cell itself included.
    pub fn neighborhood(self) -> impl Iterator<Item = Pos> {
        (-1..=1).flat_map(move |dy| (-1..=1).map(move |dx| self + pos!(dx, dy)))
    }
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Pos {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        pos!(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i64, i64)> for Pos {
    fn from((x, y): (i64, i64)) -> Self {
        pos!(x, y)
    }
}

#[test]
fn test_arithmetic() {
    assert_eq!(pos!(2, -3) + pos!(-1, 5), pos!(1, 2));
    assert_eq!(pos!(2, -3) - pos!(-1, 5), pos!(3, -8));
}

#[test]
fn test_neighborhood() {
    let block: Vec<_> = pos!(2, -3).neighborhood().collect();
    assert_eq!(block.len(), 9);
    assert!(block.contains(&pos!(2, -3)));
    assert!(block.contains(&pos!(1, -4)));
    assert!(block.contains(&pos!(3, -2)));
    assert!(!block.contains(&pos!(4, -3)));
}

use std::{cmp::Ordering, fmt::Display};

/// A cell position, `x` is the column and `y` the row.
///
/// Components are signed so that out of range input can be reported instead
/// of being unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: isize,
    pub y: isize,
}

impl Coordinate {
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    pub(crate) fn within(&self, grid_size: usize) -> bool {
        let within = |c: isize| usize::try_from(c).is_ok_and(|c| c < grid_size);
        within(self.x) && within(self.y)
    }
}

// Row-major, so sorted cells read like the rendered grid.
impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(isize, isize)> for Coordinate {
    fn from((x, y): (isize, isize)) -> Self {
        Self { x, y }
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

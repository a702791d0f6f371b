/// Direction the snake's head is currently moving toward.
///
/// Headings map onto indices 0..4 arranged clockwise:
/// Up = 0, Right = 1, Down = 2, Left = 3. The mapping is spelled out in
/// [`Heading::index`] and [`Heading::from_index`] rather than relying on
/// declaration order, because turn application is pure modular arithmetic
/// over these indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Right,
    Down,
    Left,
}

impl Heading {
    /// Clockwise index of this heading.
    pub fn index(self) -> i8 {
        match self {
            Heading::Up => 0,
            Heading::Right => 1,
            Heading::Down => 2,
            Heading::Left => 3,
        }
    }

    /// Heading for a clockwise index, taken mod 4.
    pub fn from_index(index: i8) -> Self {
        match index.rem_euclid(4) {
            0 => Heading::Up,
            1 => Heading::Right,
            2 => Heading::Down,
            3 => Heading::Left,
            _ => unreachable!("rem_euclid(4) is always in 0..4"),
        }
    }

    /// Apply a relative turn, yielding the new heading.
    pub fn apply_turn(self, turn: Turn) -> Self {
        Self::from_index(self.index() + turn.delta())
    }

    /// Returns the (row, col) delta for one step in this heading.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::Up => (-1, 0),
            Heading::Right => (0, 1),
            Heading::Down => (1, 0),
            Heading::Left => (0, -1),
        }
    }

    /// The heading pointing the opposite way (where the tail trails).
    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }
}

/// A relative rotation applied to the current heading each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Straight,
    Right,
}

impl Turn {
    /// Signed index delta: Left = -1 (counter-clockwise), Right = +1
    /// (clockwise), Straight = 0.
    pub fn delta(self) -> i8 {
        match self {
            Turn::Left => -1,
            Turn::Straight => 0,
            Turn::Right => 1,
        }
    }
}

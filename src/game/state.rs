use std::collections::VecDeque;
use std::fmt;

use super::action::Heading;

/// A position on the game grid, in (row, col) coordinates.
///
/// Signed so that one step past the boundary is representable and can be
/// rejected by the bounds check instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Move position by delta
    pub fn moved_by(&self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Move position one cell in a heading
    pub fn moved_in(&self, heading: Heading) -> Self {
        let (drow, dcol) = heading.delta();
        self.moved_by(drow, dcol)
    }
}

/// The bounded square board. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    dimension: usize,
}

impl Grid {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The cell the snake is initially placed on.
    pub fn center(&self) -> Position {
        let mid = (self.dimension / 2) as i32;
        Position::new(mid, mid)
    }

    /// Check if a position is within the grid bounds
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.row < self.dimension as i32
            && pos.col >= 0
            && pos.col < self.dimension as i32
    }
}

/// Why a movement step was rejected.
///
/// These are expected, frequent game endings, not faults, so they travel as
/// an explicit `Err` variant from [`Snake::step`] rather than as a panic or
/// an `anyhow` error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepFailure {
    /// The new head would leave the grid.
    OutOfBounds,
    /// The new head would land on the snake's own body.
    SelfCollision,
}

/// Placement could not fit the requested snake on the grid.
///
/// Unlike [`StepFailure`], this is a fatal configuration error: the grid is
/// too small for the requested length at the requested spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementError {
    pub cell: Position,
    pub length: usize,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot place a snake of length {}: cell ({}, {}) is out of bounds",
            self.length, self.cell.row, self.cell.col
        )
    }
}

impl std::error::Error for PlacementError {}

/// The snake: body segments with the head at the front.
///
/// The body is a deque because every successful step does exactly one
/// push-front and one pop-back, keeping the length fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Place a snake of `length` cells with its head at `head`, the tail
    /// trailing behind the direction of travel (opposite of `heading`).
    ///
    /// Every generated cell is bounds-checked; any cell falling outside the
    /// grid fails the whole placement rather than truncating the snake.
    pub fn place(
        grid: &Grid,
        head: Position,
        heading: Heading,
        length: usize,
    ) -> Result<Self, PlacementError> {
        let (back_drow, back_dcol) = heading.opposite().delta();
        let mut body = VecDeque::with_capacity(length);

        for offset in 0..length as i32 {
            let cell = head.moved_by(back_drow * offset, back_dcol * offset);
            if !grid.in_bounds(cell) {
                return Err(PlacementError { cell, length });
            }
            body.push_back(cell);
        }

        Ok(Self { body })
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        *self.body.front().expect("snake body is never empty")
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        *self.body.back().expect("snake body is never empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Body cells head-first.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    /// Advance one cell in `heading`.
    ///
    /// On success the tail is removed and the new head inserted, so the
    /// length never changes. On either failure the snake is left untouched.
    /// The tail cell vacates during the step, so a new head landing exactly
    /// on the old tail is not a collision.
    pub fn step(&mut self, grid: &Grid, heading: Heading) -> Result<(), StepFailure> {
        let new_head = self.head().moved_in(heading);

        if !grid.in_bounds(new_head) {
            return Err(StepFailure::OutOfBounds);
        }

        let body_without_tail = self.body.len() - 1;
        if self.body.iter().take(body_without_tail).any(|&c| c == new_head) {
            return Err(StepFailure::SelfCollision);
        }

        self.body.pop_back();
        self.body.push_front(new_head);
        Ok(())
    }
}

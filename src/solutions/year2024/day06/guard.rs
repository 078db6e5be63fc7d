//! The patrolling guard: a position and a facing that can step and turn.

use nalgebra::{Point2, Vector2};

/// The direction a guard faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) enum Facing {
    Up,
    Right,
    Down,
    Left,
}

/// An error creating a [`Facing`] from a [`char`].
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("character is not a guard facing marker: {0:?}")]
pub(super) struct InvalidFacing(char);

impl TryFrom<char> for Facing {
    type Error = InvalidFacing;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '^' => Ok(Self::Up),
            '>' => Ok(Self::Right),
            'v' => Ok(Self::Down),
            '<' => Ok(Self::Left),
            _ => Err(InvalidFacing(value)),
        }
    }
}

impl Facing {
    pub(super) fn rotate_clockwise(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
        }
    }

    /// The unit step for the facing, with `y` growing downward across rows.
    fn to_vector2(self) -> Vector2<i32> {
        match self {
            Self::Up => -Vector2::y(),
            Self::Right => Vector2::x(),
            Self::Down => Vector2::y(),
            Self::Left => -Vector2::x(),
        }
    }
}

/// A guard that remembers where it started so a patrol can be replayed.
///
/// Steps are not checked against the lab; that's the patrol engine's job.
#[derive(Debug, Clone)]
pub(super) struct Guard {
    position: Point2<i32>,
    facing: Facing,
    start_position: Point2<i32>,
    start_facing: Facing,
}

impl Guard {
    pub(super) fn new(position: Point2<i32>, facing: Facing) -> Self {
        Self {
            position,
            facing,
            start_position: position,
            start_facing: facing,
        }
    }

    pub(super) fn position(&self) -> Point2<i32> {
        self.position
    }

    pub(super) fn facing(&self) -> Facing {
        self.facing
    }

    pub(super) fn start_position(&self) -> Point2<i32> {
        self.start_position
    }

    /// Return to the starting position and facing.
    pub(super) fn reset(&mut self) {
        self.position = self.start_position;
        self.facing = self.start_facing;
    }

    pub(super) fn rotate_clockwise(&mut self) {
        self.facing = self.facing.rotate_clockwise();
    }

    pub(super) fn step_forward(&mut self) {
        self.position += self.facing.to_vector2();
    }

    pub(super) fn step_backward(&mut self) {
        self.position -= self.facing.to_vector2();
    }
}

use std::fmt;

/// Discrete grid position expressed as `(row, col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Manhattan distance between two coordinates.
    pub fn manhattan(self, other: Coordinate) -> u32 {
        self.row
            .abs_diff(other.row)
            .saturating_add(self.col.abs_diff(other.col))
    }

    /// Coordinate one unit away in the direction of `mv`.
    pub fn offset(self, mv: Move) -> Coordinate {
        let (dr, dc) = mv.delta();
        Coordinate::new(self.row + dr, self.col + dc)
    }

    /// Coordinate displaced by `shift` copies of `(dr, dc)`, or `None` when
    /// the result does not fit in `i32`.
    pub fn shifted(self, (dr, dc): (i32, i32), shift: i32) -> Option<Coordinate> {
        let row = self.row.checked_add(shift.checked_mul(dr)?)?;
        let col = self.col.checked_add(shift.checked_mul(dc)?)?;
        Some(Coordinate::new(row, col))
    }

    /// Component-wise difference `self - other`, saturating at the `i32` range.
    pub fn displacement_from(self, other: Coordinate) -> (i32, i32) {
        (
            self.row.saturating_sub(other.row),
            self.col.saturating_sub(other.col),
        )
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One discrete move emitted per tick.
///
/// `Stay` is the zero vector returned when no direction can be determined or
/// the tick failed.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Move {
    #[default]
    Stay,
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Fixed enumeration order for neighbor registration and fallback moves.
    pub const DIRECTIONS: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Unit vector as `(d_row, d_col)`.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Move::Stay => (0, 0),
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub const fn is_stay(self) -> bool {
        matches!(self, Move::Stay)
    }
}

//! The 15-puzzle as a unit-cost A* problem.
//!
//! A board is the row-major 4×4 grid with `0` as the blank. A move names the
//! direction the blank travels. The heuristic counts misplaced tiles,
//! ignoring the blank; it is admissible and consistent under unit moves.

use rand::Rng;
use serde::Serialize;

use arbor_search::contract::InformedProblem;

use super::ValidationError;

pub const SIDE: usize = 4;
pub const CELLS: usize = SIDE * SIDE;

/// Tiles `1..=15` in order, blank last.
pub const GOAL: Board = Board([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0]);

/// Direction the blank moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Successor generation order.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A valid board: a permutation of `0..=15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Board([u8; CELLS]);

impl Board {
    /// # Errors
    ///
    /// Returns [`ValidationError`] unless `tiles` is a permutation of `0..=15`.
    pub fn new(tiles: [u8; CELLS]) -> Result<Self, ValidationError> {
        let mut seen = [false; CELLS];
        for (index, &tile) in tiles.iter().enumerate() {
            let Some(slot) = seen.get_mut(usize::from(tile)) else {
                return Err(ValidationError::TileOutOfRange {
                    index,
                    tile: u32::from(tile),
                });
            };
            if *slot {
                return Err(ValidationError::DuplicateTile { tile });
            }
            *slot = true;
        }
        Ok(Self(tiles))
    }

    /// Board from any sequence of numbers.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BoardLength`] unless there are exactly 16
    /// numbers, then as [`Board::new`].
    pub fn from_slice(numbers: &[u32]) -> Result<Self, ValidationError> {
        if numbers.len() != CELLS {
            return Err(ValidationError::BoardLength {
                actual: numbers.len(),
            });
        }
        let mut tiles = [0u8; CELLS];
        for (index, (&n, cell)) in numbers.iter().zip(tiles.iter_mut()).enumerate() {
            *cell = u8::try_from(n)
                .ok()
                .filter(|&t| usize::from(t) < CELLS)
                .ok_or(ValidationError::TileOutOfRange { index, tile: n })?;
        }
        Self::new(tiles)
    }

    /// Parse a comma-separated list such as `"1, 2, 3, ..., 15, 0"`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TileNotANumber`] for a cell that is not a
    /// non-negative integer, then as [`Board::from_slice`].
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let numbers = input
            .split(',')
            .map(str::trim)
            .enumerate()
            .map(|(index, raw)| {
                raw.parse::<u32>()
                    .map_err(|_| ValidationError::TileNotANumber {
                        index,
                        raw: raw.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_slice(&numbers)
    }

    #[must_use]
    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.0
    }

    /// Index of the blank.
    #[must_use]
    pub fn blank(&self) -> usize {
        self.0.iter().position(|&t| t == 0).unwrap_or(CELLS - 1)
    }

    #[must_use]
    pub fn is_goal(&self) -> bool {
        *self == GOAL
    }

    /// Non-blank tiles not on their goal cell.
    #[must_use]
    pub fn misplaced_tiles(&self) -> u32 {
        let count = self
            .0
            .iter()
            .zip(GOAL.0.iter())
            .filter(|&(&tile, &goal)| tile != 0 && tile != goal)
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// The board after moving the blank one cell in `direction`, if that
    /// stays on the grid.
    #[must_use]
    pub fn slide(&self, direction: Direction) -> Option<Board> {
        let blank = self.blank();
        let (row, col) = (blank / SIDE, blank % SIDE);
        let target = match direction {
            Direction::Up if row > 0 => blank - SIDE,
            Direction::Down if row + 1 < SIDE => blank + SIDE,
            Direction::Left if col > 0 => blank - 1,
            Direction::Right if col + 1 < SIDE => blank + 1,
            _ => return None,
        };
        let mut tiles = self.0;
        tiles.swap(blank, target);
        Some(Board(tiles))
    }

    /// Legal moves and their boards, in [`Direction::ALL`] order.
    #[must_use]
    pub fn successors(&self) -> Vec<(Direction, Board)> {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.slide(d).map(|b| (d, b)))
            .collect()
    }

    /// Whether the goal is reachable from this board.
    ///
    /// On a 4-wide grid the board is solvable iff the inversion count plus
    /// the blank's row counted from the bottom (1-based) is odd.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        let tiles: Vec<u8> = self.0.iter().copied().filter(|&t| t != 0).collect();
        let inversions = tiles
            .iter()
            .enumerate()
            .map(|(i, a)| tiles[i + 1..].iter().filter(|&b| b < a).count())
            .sum::<usize>();
        let row_from_bottom = SIDE - self.blank() / SIDE;
        (inversions + row_from_bottom) % 2 == 1
    }

    /// Apply `moves` random legal blank moves starting from the goal.
    ///
    /// The result is always solvable; it may be closer than `moves` to the
    /// goal since moves can cancel.
    pub fn scramble<R: Rng + ?Sized>(rng: &mut R, moves: usize) -> Board {
        let mut board = GOAL;
        for _ in 0..moves {
            let options = board.successors();
            let pick = rng.random_range(0..options.len());
            board = options[pick].1;
        }
        board
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, tile) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}

/// The 15-puzzle with the misplaced-tiles heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct FifteenPuzzle;

impl InformedProblem for FifteenPuzzle {
    type State = Board;
    type Move = Direction;

    fn successors(&self, state: &Board) -> Vec<(Direction, Board)> {
        state.successors()
    }

    fn heuristic(&self, state: &Board) -> u32 {
        state.misplaced_tiles()
    }

    fn is_goal(&self, state: &Board) -> bool {
        state.is_goal()
    }
}

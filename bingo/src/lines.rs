use serde::{Deserialize, Serialize};

use crate::{Assignment, CellsSet, Team, BOARD_SIDE, TEAMS};

/// One of the 12 lines of five cells that win the game when a single team
/// holds all of them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Line {
    /// Row 0 is the top row.
    Row(u8),
    /// Column 0 is the leftmost column.
    Column(u8),
    /// Top-left to bottom-right: 0, 6, 12, 18, 24.
    Diagonal,
    /// Top-right to bottom-left: 4, 8, 12, 16, 20.
    AntiDiagonal,
}

/// All lines, in the order in which [`check_win()`] scans them.
pub static LINES: [Line; 12] = [
    Line::Row(0),
    Line::Row(1),
    Line::Row(2),
    Line::Row(3),
    Line::Row(4),
    Line::Column(0),
    Line::Column(1),
    Line::Column(2),
    Line::Column(3),
    Line::Column(4),
    Line::Diagonal,
    Line::AntiDiagonal,
];

impl Line {
    /// The board indices on this line, in ascending order.
    pub fn cells(self) -> [usize; BOARD_SIDE] {
        let mut cells = [0; BOARD_SIDE];
        for (k, cell) in cells.iter_mut().enumerate() {
            *cell = match self {
                Line::Row(r) => r as usize * BOARD_SIDE + k,
                Line::Column(c) => k * BOARD_SIDE + c as usize,
                Line::Diagonal => k * (BOARD_SIDE + 1),
                Line::AntiDiagonal => (k + 1) * (BOARD_SIDE - 1),
            };
        }
        cells
    }

    pub fn as_set(self) -> CellsSet {
        CellsSet::from_cells(self.cells())
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row(r) => write!(f, "row {}", r + 1),
            Line::Column(c) => write!(f, "column {}", c + 1),
            Line::Diagonal => write!(f, "diagonal"),
            Line::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// A completed line and the team holding it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    pub team: Team,
    pub line: Line,
}

/// Finds the first line held entirely by one team.
///
/// Lines are scanned in the order of [`LINES`], and for each line team A is
/// tested before team B. If several lines are complete, only the first one
/// found is reported.
pub fn check_win(assignment: &Assignment) -> Option<Win> {
    for line in LINES {
        let line_cells = line.as_set();
        for team in TEAMS {
            if assignment.cells_of(team).is_superset(line_cells) {
                return Some(Win { team, line });
            }
        }
    }
    None
}

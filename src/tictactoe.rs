//! Tic-Tac-Toe as a second instance of the [`Game`](crate::game::Game)
//! contract. It exists to keep the search core honest about genericity.

use crate::game::Game;
use crate::types::Side;

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A 3x3 grid; White moves first. Cells are row-major from the top left.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Grid {
    cells: [Option<Side>; 9],
    to_move: Side,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    pub fn new() -> Self {
        Self { cells: [None; 9], to_move: Side::White }
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn mark_at(&self, cell: usize) -> Option<Side> {
        self.cells.get(cell).copied().flatten()
    }

    /// Place the side to move's mark on an empty cell.
    pub fn play(&self, cell: usize) -> Option<Grid> {
        if cell >= 9 || self.cells[cell].is_some() || self.winner().is_some() {
            return None;
        }
        let mut next = self.clone();
        next.cells[cell] = Some(self.to_move);
        next.to_move = self.to_move.opponent();
        Some(next)
    }

    pub fn winner(&self) -> Option<Side> {
        for line in LINES {
            if let Some(side) = self.cells[line[0]] {
                if self.cells[line[1]] == Some(side) && self.cells[line[2]] == Some(side) {
                    return Some(side);
                }
            }
        }
        None
    }

    pub fn full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }
}

impl Game for Grid {
    fn successors(&self) -> Vec<Grid> {
        if self.winner().is_some() {
            return Vec::new();
        }
        (0..9).filter_map(|cell| self.play(cell)).collect()
    }

    fn evaluate(&self) -> f64 {
        // per line: marks count only while the opponent has no stake in it
        const WEIGHT: [f64; 4] = [0.0, 0.1, 1.0, 100.0];
        let mut score = 0.0;
        for line in LINES {
            let mut mine = 0;
            let mut theirs = 0;
            for cell in line {
                match self.cells[cell] {
                    Some(s) if s == self.to_move => mine += 1,
                    Some(_) => theirs += 1,
                    None => {}
                }
            }
            if theirs == 0 {
                score += WEIGHT[mine];
            }
            if mine == 0 {
                score -= WEIGHT[theirs];
            }
        }
        score
    }

    fn is_win(&self) -> bool {
        self.winner() == Some(self.to_move)
    }

    fn is_loss(&self) -> bool {
        self.winner() == Some(self.to_move.opponent())
    }

    fn is_tie(&self) -> bool {
        self.winner().is_none() && self.full()
    }

    fn same_position(&self, other: &Grid) -> bool {
        self == other
    }
}

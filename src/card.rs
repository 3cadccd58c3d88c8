// bingo/src/card.rs
// This module handles bingo card generation, marking and win detection.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::defs::{CARD_SIZE, FREE_COL, FREE_ROW, FREE_SPACE, Number, column_range};

/// A line that completes a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Column(usize),
    Diagonal,
    AntiDiagonal,
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row(row) => write!(f, "row {}", row + 1),
            Line::Column(col) => write!(f, "column {}", col + 1),
            Line::Diagonal => write!(f, "diagonal"),
            Line::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// One player's 5×5 card: numbers plus a parallel grid of marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    numbers: [[Number; CARD_SIZE]; CARD_SIZE],
    marks: [[bool; CARD_SIZE]; CARD_SIZE],
}

impl Card {
    /// Generate a random card. Each column gets five distinct numbers from its
    /// own 15-number range, kept in draw order.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut numbers = [[FREE_SPACE; CARD_SIZE]; CARD_SIZE];

        for col in 0..CARD_SIZE {
            let (first, last) = column_range(col);
            let mut column_numbers: Vec<Number> = (first..=last).collect();
            let (picked, _) = column_numbers.partial_shuffle(rng, CARD_SIZE);

            for (row, &number) in picked.iter().enumerate() {
                numbers[row][col] = number;
            }
        }

        Self::from_numbers(numbers)
    }

    /// Build a card from a fixed grid. The centre is always replaced by the
    /// free space.
    pub fn from_numbers(mut numbers: [[Number; CARD_SIZE]; CARD_SIZE]) -> Self {
        let mut marks = [[false; CARD_SIZE]; CARD_SIZE];
        numbers[FREE_ROW][FREE_COL] = FREE_SPACE;
        marks[FREE_ROW][FREE_COL] = true;
        Card { numbers, marks }
    }

    pub fn number(&self, row: usize, col: usize) -> Number {
        self.numbers[row][col]
    }

    pub fn is_marked(&self, row: usize, col: usize) -> bool {
        self.marks[row][col]
    }

    pub fn is_free_space(row: usize, col: usize) -> bool {
        row == FREE_ROW && col == FREE_COL
    }

    pub fn marked_count(&self) -> usize {
        self.marks.iter().flatten().filter(|&&marked| marked).count()
    }

    /// Mark every cell holding `number`. Returns true if a cell matched.
    pub fn mark_number(&mut self, number: Number) -> bool {
        if number == FREE_SPACE {
            return false;
        }

        let mut found = false;
        for row in 0..CARD_SIZE {
            for col in 0..CARD_SIZE {
                if self.numbers[row][col] == number {
                    self.marks[row][col] = true;
                    found = true;
                }
            }
        }
        found
    }

    pub fn is_bingo(&self) -> bool {
        self.winning_line().is_some()
    }

    /// First complete line, checking rows, then columns, then both diagonals.
    pub fn winning_line(&self) -> Option<Line> {
        let m = &self.marks;

        if let Some(row) = (0..CARD_SIZE).find(|&row| m[row].iter().all(|&marked| marked)) {
            return Some(Line::Row(row));
        }
        if let Some(col) = (0..CARD_SIZE).find(|&col| (0..CARD_SIZE).all(|row| m[row][col])) {
            return Some(Line::Column(col));
        }
        if (0..CARD_SIZE).all(|i| m[i][i]) {
            return Some(Line::Diagonal);
        }
        if (0..CARD_SIZE).all(|i| m[i][CARD_SIZE - 1 - i]) {
            return Some(Line::AntiDiagonal);
        }
        None
    }
}

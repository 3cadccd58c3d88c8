// bingo/src/board.rs
// This module keeps the sequence of numbers drawn so far.

use crate::defs::Number;

// Drawn numbers, in draw order.
#[derive(Debug, Default, Clone)]
pub struct Board(Vec<Number>);

impl Board {
    pub fn new() -> Self {
        Board(Vec::new())
    }

    pub fn push(&mut self, number: Number) {
        self.0.push(number);
    }

    pub fn numbers(&self) -> &[Number] {
        &self.0
    }

    pub fn contains(&self, number: Number) -> bool {
        self.0.contains(&number)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<Number> {
        self.0.last().copied()
    }

    /// Up to `n` numbers drawn before the last one, most recent first.
    pub fn get_last_numbers(&self, n: usize) -> Vec<Number> {
        if self.0.len() <= 1 {
            return Vec::new();
        }

        let available_previous = self.0.len() - 1;
        let numbers_to_show = std::cmp::min(n, available_previous);
        let start_index = self.0.len() - numbers_to_show - 1;
        let end_index = self.0.len() - 1;

        let mut result = self.0[start_index..end_index].to_vec();
        result.reverse();
        result
    }
}

// bingo/src/pouch.rs
// The numbers still waiting to be drawn.

use rand::Rng;

use crate::defs::{FIRSTNUMBER, LASTNUMBER, Number};

pub struct Pouch {
    numbers: Vec<Number>,
}

impl Default for Pouch {
    fn default() -> Self {
        Self::new()
    }
}

impl Pouch {
    pub fn new() -> Self {
        Pouch {
            numbers: (FIRSTNUMBER..=LASTNUMBER).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Remove a uniformly chosen number, or `None` once the pouch is empty.
    pub fn extract<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Number> {
        if self.is_empty() {
            return None;
        }
        let random_index = rng.random_range(0..self.len());
        Some(self.numbers.swap_remove(random_index))
    }
}

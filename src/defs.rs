// bingo/src/defs.rs
// Shared constants for the 75-ball bingo game.

pub type Number = u8;

pub const CARD_SIZE: usize = 5; // rows and columns per card
pub const NUMBERS_PER_COLUMN: Number = 15; // width of each column's number range

pub const FIRSTNUMBER: Number = 1;
pub const LASTNUMBER: Number = CARD_SIZE as Number * NUMBERS_PER_COLUMN - 1 + FIRSTNUMBER;

// Centre cell, always marked
pub const FREE_SPACE: Number = 0;
pub const FREE_ROW: usize = CARD_SIZE / 2;
pub const FREE_COL: usize = CARD_SIZE / 2;

pub const PLAYERS: usize = 2;

// First and last number allowed in a card column
pub const fn column_range(col: usize) -> (Number, Number) {
    let first = FIRSTNUMBER + col as Number * NUMBERS_PER_COLUMN;
    (first, first + NUMBERS_PER_COLUMN - 1)
}

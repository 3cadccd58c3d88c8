// lib.rs
// Library modules for the bingo game

pub mod defs;
pub mod logging;
pub mod config;
pub mod card;
pub mod pouch;
pub mod board;
pub mod terminal;
pub mod game;

// bingo/src/game.rs
// This module provides the Game struct that owns the cards, the pouch, the
// board of drawn numbers and the random generator, and runs the draw loop.

use std::error::Error;
use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::card::{Card, Line};
use crate::config::GameConfig;
use crate::defs::Number;
use crate::logging::{log_info, log_warning};
use crate::pouch::Pouch;
use crate::terminal;

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// At least one card completed a line
    Bingo { draws: usize },
    /// Input ended before anyone won
    Stopped { draws: usize },
}

pub struct Game<R: Rng = StdRng> {
    cards: Vec<Card>,
    board: Board,
    pouch: Pouch,
    rng: R,
}

impl Game<StdRng> {
    /// Create a game with `players` cards and a generator seeded from the OS
    pub fn new(players: usize) -> Self {
        Self::with_rng(players, StdRng::from_os_rng())
    }
}

impl<R: Rng> Game<R> {
    /// Create a game with `players` cards drawn from the given generator
    pub fn with_rng(players: usize, mut rng: R) -> Self {
        let cards = (0..players).map(|_| Card::generate(&mut rng)).collect();
        Self {
            cards,
            board: Board::new(),
            pouch: Pouch::new(),
            rng,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Numbers still in the pouch
    pub fn remaining(&self) -> usize {
        self.pouch.len()
    }

    /// Draw one unused number, record it and mark it on every card.
    pub fn draw(&mut self) -> Result<Number, String> {
        let drawn = self
            .pouch
            .extract(&mut self.rng)
            .ok_or_else(|| "No numbers remaining in pouch".to_string())?;

        self.board.push(drawn);
        for card in &mut self.cards {
            card.mark_number(drawn);
        }
        Ok(drawn)
    }

    pub fn has_winner(&self) -> bool {
        self.cards.iter().any(Card::is_bingo)
    }

    /// Every winning card with its first complete line, in card order
    pub fn winners(&self) -> Vec<(usize, Line)> {
        self.cards
            .iter()
            .enumerate()
            .filter_map(|(index, card)| card.winning_line().map(|line| (index, line)))
            .collect()
    }

    /// Show the cards, then draw one number per input line until a card wins
    /// or the input ends.
    pub fn run<I, O>(
        &mut self,
        mut input: I,
        output: &mut O,
        config: &GameConfig,
    ) -> Result<Outcome, Box<dyn Error>>
    where
        I: BufRead,
        O: Write,
    {
        log_info(&format!("Starting game with {} cards", self.cards.len()));
        terminal::show_cards(output, &self.cards, config)?;

        while !self.has_winner() {
            if terminal::hitkey(&mut input, output)? {
                let draws = self.board.len();
                log_warning(&format!("Input closed after {draws} draws, stopping the game"));
                writeln!(output, "Input closed. Game stopped.")?;
                output.flush()?;
                return Ok(Outcome::Stopped { draws });
            }

            let drawn = self.draw()?;
            log_info(&format!("Drew {drawn}, {} left in pouch", self.remaining()));
            terminal::show_draw(output, &self.board, config)?;
        }

        let winners = self.winners();
        for (index, line) in &winners {
            log_info(&format!("Card {} completed {}", index + 1, line));
        }
        terminal::show_winners(output, &self.cards, &winners, self.board.len(), config)?;
        output.flush()?;

        Ok(Outcome::Bingo { draws: self.board.len() })
    }
}

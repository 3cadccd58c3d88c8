// bingo/src/terminal.rs
// This module handles console input/output for the bingo game.

use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;

use crate::board::Board;
use crate::card::{Card, Line};
use crate::config::GameConfig;
use crate::defs::{CARD_SIZE, Number};

pub const HEADER: &str = "B  I  N  G  O";

pub fn render_card<W: Write>(out: &mut W, card: &Card, config: &GameConfig) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    for row in 0..CARD_SIZE {
        let cells: Vec<String> = (0..CARD_SIZE)
            .map(|col| {
                if card.is_marked(row, col) {
                    format!("{:>2}", config.marker)
                } else {
                    format!("{:02}", card.number(row, col))
                }
            })
            .collect();
        writeln!(out, "{}", cells.join(" "))?;
    }
    Ok(())
}

pub fn show_cards<W: Write>(out: &mut W, cards: &[Card], config: &GameConfig) -> io::Result<()> {
    for (i, card) in cards.iter().enumerate() {
        writeln!(out, "Card {}:", i + 1)?;
        render_card(out, card, config)?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn show_draw<W: Write>(out: &mut W, board: &Board, config: &GameConfig) -> io::Result<()> {
    let Some(drawn) = board.last() else {
        return Ok(());
    };
    if config.color {
        writeln!(out, "Number drawn: {}", drawn.to_string().bold().green())?;
    } else {
        writeln!(out, "Number drawn: {drawn}")?;
    }
    let previous: Vec<Number> = board.get_last_numbers(3);
    if !previous.is_empty() {
        writeln!(out, "Previous numbers: {previous:?}")?;
    }
    Ok(())
}

pub fn show_winners<W: Write>(
    out: &mut W,
    cards: &[Card],
    winners: &[(usize, Line)],
    draws: usize,
    config: &GameConfig,
) -> io::Result<()> {
    writeln!(out)?;
    if config.color {
        writeln!(out, "{}", "Bingo!".bold().yellow())?;
    } else {
        writeln!(out, "Bingo!")?;
    }
    for &(index, line) in winners {
        writeln!(out, "Card {} wins with {} after {} draws", index + 1, line, draws)?;
    }
    writeln!(out)?;
    show_cards(out, cards, config)
}

/// Wait for the player to press enter. Returns true when input has ended
/// and the game should stop.
pub fn hitkey<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<bool> {
    writeln!(out, "Press Enter to draw a number...")?;
    out.flush()?;

    // Content is discarded, so it need not be valid UTF-8
    let mut line = Vec::new();
    let read = input.read_until(b'\n', &mut line)?;
    Ok(read == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn plain() -> GameConfig {
        GameConfig { color: false, ..GameConfig::default() }
    }

    fn fixed_card() -> Card {
        let mut numbers = [[0; CARD_SIZE]; CARD_SIZE];
        for (row, cells) in numbers.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = (1 + col * 15 + row) as Number;
            }
        }
        Card::from_numbers(numbers)
    }

    #[test]
    fn test_render_fresh_card() {
        let mut out = Vec::new();
        render_card(&mut out, &fixed_card(), &plain()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let expected = "\
B  I  N  G  O
01 16 31 46 61
02 17 32 47 62
03 18  X 48 63
04 19 34 49 64
05 20 35 50 65
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_marked_cells_use_marker() {
        let mut card = fixed_card();
        card.mark_number(16);
        let config = GameConfig { marker: '*', ..plain() };
        let mut out = Vec::new();
        render_card(&mut out, &card, &config).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\n01  * 31 46 61\n"));
        assert!(text.contains("\n03 18  * 48 63\n"));
    }

    #[test]
    fn test_show_cards_numbers_each_card() {
        let cards = vec![fixed_card(), fixed_card()];
        let mut out = Vec::new();
        show_cards(&mut out, &cards, &plain()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Card 1:\n"));
        assert!(text.contains("Card 2:\n"));
        assert_eq!(text.matches(HEADER).count(), 2);
    }

    #[test]
    fn test_show_draw() {
        let mut board = Board::new();
        let mut out = Vec::new();
        show_draw(&mut out, &board, &plain()).unwrap();
        assert!(out.is_empty());

        for number in [5, 12, 70] {
            board.push(number);
        }
        show_draw(&mut out, &board, &plain()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Number drawn: 70\nPrevious numbers: [12, 5]\n");
    }

    #[test]
    fn test_hitkey_reads_one_line() {
        let mut input = Cursor::new("anything\n\n");
        let mut out = Vec::new();
        assert!(!hitkey(&mut input, &mut out).unwrap());
        assert!(!hitkey(&mut input, &mut out).unwrap());
        assert!(hitkey(&mut input, &mut out).unwrap());
        assert!(String::from_utf8(out).unwrap().starts_with("Press Enter"));
    }

    #[test]
    fn test_hitkey_accepts_non_utf8_line() {
        let mut input = Cursor::new(vec![0xff, 0xfe, b'\n', b'\n']);
        let mut out = Vec::new();
        assert!(!hitkey(&mut input, &mut out).unwrap());
        assert!(!hitkey(&mut input, &mut out).unwrap());
        assert!(hitkey(&mut input, &mut out).unwrap());
    }

    #[test]
    fn test_hitkey_last_line_without_newline() {
        let mut input = Cursor::new("go");
        let mut out = Vec::new();
        assert!(!hitkey(&mut input, &mut out).unwrap());
        assert!(hitkey(&mut input, &mut out).unwrap());
    }

    #[test]
    fn test_show_draw_with_color_keeps_text() {
        let mut board = Board::new();
        board.push(9);
        board.push(44);
        let mut out = Vec::new();
        show_draw(&mut out, &board, &GameConfig::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Number drawn: "));
        assert!(text.contains("44"));
        assert!(text.contains("\x1b["));
        assert!(text.contains("Previous numbers: [9]"));
    }

    #[test]
    fn test_show_winners_with_color_keeps_text() {
        let mut card = fixed_card();
        for col in 0..CARD_SIZE {
            card.mark_number(card.number(0, col));
        }
        let cards = vec![card];
        let winners = vec![(0, Line::Row(0))];
        let mut out = Vec::new();
        show_winners(&mut out, &cards, &winners, 4, &GameConfig::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Bingo!"));
        assert!(text.contains("\x1b["));
        assert!(text.contains("Card 1 wins with row 1 after 4 draws"));
        assert!(text.contains(" X  X  X  X  X\n"));
    }

    #[test]
    fn test_show_winners_plain() {
        let cards = vec![fixed_card()];
        let mut out = Vec::new();
        show_winners(&mut out, &cards, &[(0, Line::Diagonal)], 12, &plain()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\nBingo!\nCard 1 wins with diagonal after 12 draws\n"));
        assert!(!text.contains("\x1b["));
    }
}

// src/main.rs
// This is the main entry point for the bingo game.

use std::io;

use clap::Parser;

use bingo::config::GameConfig;
use bingo::defs::PLAYERS;
use bingo::game::{Game, Outcome};
use bingo::logging::{self, log_error, log_info};

#[derive(Parser)]
#[command(name = env!("CARGO_BIN_NAME"))]
#[command(about = "Bingo - draw numbers until one of the cards completes a line")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {}

fn main() {
    let _args = Args::parse();

    let (config, source) = GameConfig::load_or_default();
    logging::set_level(config.log_level);
    source.log();

    let mut game = Game::new(PLAYERS);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    match game.run(stdin.lock(), &mut stdout, &config) {
        Ok(Outcome::Bingo { draws }) => log_info(&format!("Game over after {draws} draws")),
        Ok(Outcome::Stopped { draws }) => log_info(&format!("Game stopped after {draws} draws")),
        Err(e) => {
            log_error(&format!("Game aborted: {e}"));
            std::process::exit(1);
        }
    }
}

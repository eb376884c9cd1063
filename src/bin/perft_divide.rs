//! Print per-move perft counts for a position.
//!
//! Usage: `perft_divide [--fen "<fen>"] [--depth N] [--threads]`
//!
//! Output matches the `move: nodes` format of common engines so the lines can
//! be diffed directly.

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use chess_core::game_state::chess_rules::STARTING_POSITION_FEN;
use chess_core::game_state::game_state::GameState;
use chess_core::move_generation::perft::{perft_divide, perft_multi_threaded};

struct Options {
    fen: String,
    depth: u8,
    threads: bool,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        fen: STARTING_POSITION_FEN.to_owned(),
        depth: 4,
        threads: false,
    };

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--fen" => {
                options.fen = iter.next().ok_or("--fen expects a value")?.clone();
            }
            "--depth" => {
                let value = iter.next().ok_or("--depth expects a value")?;
                options.depth = value
                    .parse()
                    .map_err(|_| format!("invalid depth '{value}'"))?;
            }
            "--threads" => options.threads = true,
            other => return Err(format!("unknown argument '{other}'")),
        }
    }

    Ok(options)
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("usage: perft_divide [--fen \"<fen>\"] [--depth N] [--threads]");
            return ExitCode::FAILURE;
        }
    };

    let game = match GameState::from_fen(&options.fen) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    if options.threads {
        let nodes = perft_multi_threaded(&game, options.depth);
        println!("\nNodes searched: {nodes}");
    } else {
        let divide = perft_divide(&game, options.depth);
        for (mv, nodes) in &divide.moves {
            println!("{mv}: {nodes}");
        }
        println!("\nNodes searched: {}", divide.total);
    }
    println!("Time: {} ms", start.elapsed().as_millis());

    ExitCode::SUCCESS
}

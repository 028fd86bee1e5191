//! Self-play driver for the Gomoku engine
//!
//! Plays the engine against itself from the standard center opening and
//! prints the board after every move. Useful for eyeballing move quality
//! at different depths:
//!
//! ```text
//! gomoku --depth 3 --max-moves 60
//! ```

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gomoku::search::has_five;
use gomoku::{AIEngine, Board, EngineError, Pos, Stone, BOARD_SIZE};

#[derive(Parser, Debug)]
#[command(name = "gomoku", about = "Gomoku AI self-play", version)]
struct Args {
    /// Search depth for the alpha-beta fallback
    #[arg(long, default_value_t = 3)]
    depth: i8,

    /// Stop after this many moves if nobody has won
    #[arg(long, default_value_t = 60)]
    max_moves: u32,
}

fn main() -> Result<(), EngineError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut board = Board::new();
    let mut black = AIEngine::with_depth(args.depth)?;
    let mut white = AIEngine::with_depth(args.depth)?;

    // Black always opens on the center point
    let center = Pos::new((BOARD_SIZE / 2) as u8, (BOARD_SIZE / 2) as u8);
    board.place_stone(center, Stone::Black);
    info!(%center, "opening move");
    print_board(&board);

    let mut color = Stone::White;
    for move_number in 2..=args.max_moves {
        let engine = match color {
            Stone::Black => &mut black,
            _ => &mut white,
        };

        let result = match engine.select_move(&mut board, color) {
            Ok(result) => result,
            Err(EngineError::NoMoveAvailable) => {
                println!("No move available after {move_number} moves: draw");
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        println!(
            "Move {move_number}: {:?} plays {} ({:?}, score {}, {} nodes, {} ms)",
            color, result.pos, result.search_type, result.score, result.nodes, result.time_ms
        );
        print_board(&board);

        if has_five(&board, color) {
            println!("{color:?} wins with five in a row");
            return Ok(());
        }

        color = color.opponent();
    }

    println!("Move limit reached: draw");
    Ok(())
}

fn print_board(board: &Board) {
    print!("   ");
    for col in 0..BOARD_SIZE {
        print!("{col:>2} ");
    }
    println!();

    for row in 0..BOARD_SIZE {
        print!("{row:>2} ");
        for col in 0..BOARD_SIZE {
            let cell = match board.get(Pos::new(row as u8, col as u8)) {
                Stone::Black => " X ",
                Stone::White => " O ",
                Stone::Empty => " . ",
            };
            print!("{cell}");
        }
        println!();
    }
    println!();
}

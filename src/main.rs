use anyhow::{Context, Result, bail};
use tracing::info;

use gambit_game::{Game, MoveOutcome, parse_request};

/// Replay coordinate moves given on the command line and print the result.
///
/// Usage: `gambit [--fen "<FEN>"] e2e4 e7e5 ...`
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("gambit starting");

    let mut args = std::env::args().skip(1);
    let mut fen = None;
    let mut moves = Vec::new();
    while let Some(arg) = args.next() {
        if arg == "--fen" {
            fen = Some(args.next().context("--fen needs a FEN string")?);
        } else {
            moves.push(arg);
        }
    }

    let mut game = match fen {
        Some(fen) => Game::from_fen(&fen).with_context(|| format!("cannot set up \"{fen}\""))?,
        None => Game::new(),
    };

    for text in &moves {
        let request = parse_request(text).with_context(|| format!("bad move \"{text}\""))?;
        let outcome = match request.promotion {
            Some(piece) => game.request_move_promoting(request.from, request.to, piece),
            None => game.request_move(request.from, request.to),
        }
        .with_context(|| format!("while playing {request}"))?;

        if let MoveOutcome::Rejected(reason) = outcome {
            bail!("{request} rejected: {reason}");
        }
    }

    println!("{}", game.board().pretty());
    println!();
    println!("fen:    {}", game.board());
    println!("status: {} ({} to move)", game.status(), game.current_turn().name());
    if let Some(winner) = game.winner() {
        println!("winner: {}", winner.name());
    }
    let log: Vec<String> = game.move_log().iter().map(|mv| mv.to_string()).collect();
    println!("moves:  {}", log.join(" "));
    Ok(())
}

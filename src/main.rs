use anyhow::Result;
use arrocco_core::{Game, GameStatus, Square};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("arrocco starting");

    // Scripted fool's mate, driving the full per-ply pipeline.
    let mut game = Game::new();
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
        let from = Square::from_algebraic(from).expect("valid square literal");
        let to = Square::from_algebraic(to).expect("valid square literal");
        game.try_move(from, to)?;
        info!(%from, %to, status = ?game.status(), "played");
    }

    if let GameStatus::Checkmate(loser) = game.status() {
        info!(%loser, "game over\n{}", game.board().pretty());
    }
    Ok(())
}

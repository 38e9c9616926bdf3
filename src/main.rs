use anyhow::{Context, Result};
use tracing::info;

use ply_core::Game;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let game = match std::env::args().nth(1) {
        Some(placement) => placement
            .parse::<Game>()
            .with_context(|| format!("could not load position \"{placement}\""))?,
        None => Game::new(),
    };

    info!(position = %game, turn = %game.turn(), "ply starting");
    println!("{}", game.board().pretty());
    info!(
        status = %game.status(),
        moves = game.all_valid_moves(game.turn()).len(),
        "position loaded"
    );
    Ok(())
}

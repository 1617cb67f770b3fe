use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{init_logging, Game, StdConsole};

/// Two-player hot-seat Battleship in the terminal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Place a ship randomly when a setup prompt is answered with an
    /// empty line.
    #[arg(long)]
    auto_place: bool,

    /// Fix the RNG seed for reproducible automatic placement (e.g., --seed 12345).
    #[arg(long)]
    seed: Option<u64>,

    /// Keep the screen as-is when the turn passes between players.
    #[arg(long)]
    no_clear: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut console = StdConsole::new(!cli.no_clear);
    let mut game = Game::new(cli.auto_place);
    game.run(&mut console, &mut rng)?;
    Ok(())
}

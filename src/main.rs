use std::fs::File;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use shield_engine::console::{ConsoleDisplay, ConsoleInput, DEFAULT_NAMES};
use shield_engine::{BoardBuilder, GameRng, InputProvider, RandomInput, ShieldConfig};
use simplelog::{LevelFilter, WriteLogger};

/// Play a game of Shield.
#[derive(Debug, Parser)]
#[command(name = "shield", version)]
struct Cli {
    /// Player names, in seating order before the shuffle
    names: Vec<String>,

    /// Seed for shuffles (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Let every seat play random moves
    #[arg(long)]
    auto: bool,

    /// Write a debug log to shield.debug.log
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.debug {
        setup_logging();
    }

    match play(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("shield: {err}");
            ExitCode::FAILURE
        }
    }
}

fn play(cli: &Cli) -> shield_engine::Result<()> {
    let mut rng = cli.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    let input_rng = rng.fork();

    let names: Vec<String> = if cli.names.is_empty() {
        DEFAULT_NAMES.iter().map(|n| (*n).to_owned()).collect()
    } else {
        cli.names.clone()
    };

    let mut board = BoardBuilder::new()
        .players(names)
        .config(ShieldConfig::default())
        .build_with_rng(rng)?;

    let mut input: Box<dyn InputProvider> = if cli.auto {
        Box::new(RandomInput::new(input_rng))
    } else {
        Box::new(ConsoleInput::new(io::stdin().lock(), io::stdout()))
    };
    let mut display = ConsoleDisplay::new(io::stdout());

    board.run(&mut *input, &mut display)?;
    Ok(())
}

fn setup_logging() {
    let file = match File::create("shield.debug.log") {
        Ok(file) => file,
        Err(err) => {
            eprintln!("shield: cannot create debug log: {err}");
            return;
        }
    };
    let config = simplelog::ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .build();
    if let Err(err) = WriteLogger::init(LevelFilter::Debug, config, file) {
        eprintln!("shield: cannot start logger: {err}");
    }
}

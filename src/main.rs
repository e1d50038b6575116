use std::{env::args, process::exit};

use squarelife::{Args, Config, Error, Result, Sim, TermConsole};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let args = Args::parse(args())?;
    let mut console = TermConsole::new();
    let config = Config::resolve(args, &mut console)?;
    info!(?config, "starting simulation");

    let mut simulation = Sim::from_config(&config, console)?;
    simulation.run()?;
    info!(
        generation = simulation.board().generation(),
        population = simulation.board().population(),
        "simulation over"
    );
    Ok(())
}

pub fn main() {
    init_logging();

    match run() {
        Ok(()) => (),
        Err(Error::Args(error)) => error.exit(),
        Err(error) => {
            eprintln!("[error] {error}");
            exit(1);
        }
    }
}

mod cli;

use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use super_startrek::io::{InputReader, OutputWriter, TerminalIO};
use super_startrek::models::errors::GameResult;
use super_startrek::GameEngine;

use cli::Args;

fn main() -> ExitCode {
    // Diagnostics go to stderr so the narrative on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> GameResult<()> {
    let ruleset = args.ruleset()?;
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, rank = ruleset.rank, "starting game");

    let mut engine = GameEngine::new(seed, ruleset);
    let mut terminal = TerminalIO;

    loop {
        for line in engine.take_output() {
            terminal.writeln(&line.text);
        }
        if engine.is_ended() {
            break;
        }
        let prompt = if engine.prompt().is_some() { "? " } else { "COMMAND? " };
        let Some(input) = terminal.read_line(prompt)? else {
            break;
        };
        engine.process_input(&input);
    }

    if args.stats_json {
        println!("{}", serde_json::to_string_pretty(&engine.mission_stats())?);
    }
    Ok(())
}

//! Cognitive Agent Simulation REPL
//!
//! Thin interactive front end over the simulation core: parses text
//! commands, invokes the facade, and prints the results. All numeric
//! behavior lives in the library; this binary only does I/O.

use std::io::{self, BufRead, Write};

use clap::Parser;

use cog_core::output::{load_snapshot, save_snapshot, EventLogger};
use cog_core::{setup, SimError, Simulation, TuningConfig};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "cogsim")]
#[command(about = "An interactive cognitive agent drift simulation")]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Path to the tuning file (falls back to compiled-in defaults)
    #[arg(long)]
    tuning: Option<String>,

    /// Resume from a previously saved snapshot
    #[arg(long)]
    resume: Option<String>,

    /// Where `save snapshot` writes its output
    #[arg(long, default_value = "cogsim_snapshot.json")]
    snapshot_path: String,

    /// Append drift events to this JSONL file
    #[arg(long)]
    events_log: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.tuning {
        Some(path) => match TuningConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("could not load {}: {}. Using defaults.", path, e);
                TuningConfig::default()
            }
        },
        None => TuningConfig::load_or_default(),
    };

    let mut sim = match &args.resume {
        Some(path) => match load_snapshot(path) {
            Ok(snapshot) => {
                tracing::info!(tick = snapshot.tick, "resumed from {}", path);
                Simulation::from_snapshot(snapshot, config, args.seed)
            }
            Err(e) => {
                eprintln!("Could not resume from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Simulation::with_population(config, args.seed, setup::default_population()),
    };

    let mut events = match &args.events_log {
        Some(path) => match EventLogger::new(path) {
            Ok(logger) => logger,
            Err(e) => {
                tracing::warn!("could not open {}: {}. Events will be discarded.", path, e);
                EventLogger::null()
            }
        },
        None => EventLogger::null(),
    };

    println!("Cognitive Agent Simulation Started.");
    println!("Seed: {}  Agents: {}  Tick: {}", args.seed, sim.agents().len(), sim.tick());
    print_usage();

    let stdin = io::stdin();
    loop {
        print!("\nYour input: ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("Input error: {}", e);
                break;
            }
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match dispatch(input, &mut sim, &mut events, &args.snapshot_path) {
            Command::Continue => {}
            Command::Exit => break,
        }
    }

    println!("Exiting simulation.");
}

enum Command {
    Continue,
    Exit,
}

fn print_usage() {
    println!("Commands:");
    println!("  talk to <agent>: <message>");
    println!("  advance <number>");
    println!("  print shared");
    println!("  save snapshot");
    println!("  recall all");
    println!("  exit");
}

fn dispatch(
    input: &str,
    sim: &mut Simulation,
    events: &mut EventLogger,
    snapshot_path: &str,
) -> Command {
    let lowered = input.to_lowercase();

    if lowered == "exit" {
        return Command::Exit;
    }

    if lowered == "print shared" {
        let promoted = sim.consolidate();
        if !promoted.is_empty() {
            println!("Consolidated {} fact(s) into shared memory.", promoted.len());
        }
        println!("--- Shared Facts Known by Multiple Agents ---");
        for fact in sim.shared_pool().facts() {
            println!("- {}", fact);
        }
        return Command::Continue;
    }

    if lowered == "save snapshot" {
        match save_snapshot(&sim.snapshot(), snapshot_path) {
            Ok(()) => println!("Snapshot saved to {}", snapshot_path),
            Err(e) => eprintln!("Could not save snapshot: {}", e),
        }
        return Command::Continue;
    }

    if lowered == "recall all" {
        for agent in sim.agents() {
            println!("\n{} Memory:", agent.identity);
            for fact in agent.memory.iter() {
                println!("  - {}", fact);
            }
            println!("{} Drift Logs:", agent.identity);
            for entry in &agent.drift_log {
                println!("  - {}", entry);
            }
        }
        return Command::Continue;
    }

    if let Some(rest) = strip_prefix_ci(input, "talk to ") {
        let Some((name, message)) = rest.split_once(':') else {
            println!("Invalid format. Use: talk to <agent>: <message>");
            return Command::Continue;
        };
        match sim.respond(name.trim(), message.trim()) {
            Ok(reply) => println!("{}", reply),
            Err(SimError::UnknownAgent(name)) => println!("Agent '{}' not found.", name),
            Err(e) => println!("{}", e),
        }
        return Command::Continue;
    }

    if let Some(rest) = strip_prefix_ci(input, "advance ") {
        match rest.trim().parse::<u64>() {
            Ok(ticks) => {
                let fired = sim.advance(ticks);
                if let Err(e) = events.log_batch(&fired) {
                    tracing::warn!("could not log drift events: {}", e);
                }
                for event in &fired {
                    println!("∴ {}", event.line);
                }
                println!("Advanced {} tick(s). Current tick: {}", ticks, sim.tick());
            }
            Err(_) => {
                let err = SimError::InvalidTickCount(rest.trim().to_string());
                println!("{}. Use: advance <number>", err);
            }
        }
        return Command::Continue;
    }

    println!("Command not recognized.");
    print_usage();
    Command::Continue
}

/// Case-insensitive prefix strip that returns the original-cased rest.
fn strip_prefix_ci<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let head = input.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&input[prefix.len()..])
    } else {
        None
    }
}

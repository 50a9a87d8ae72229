//! Chord Trainer terminal front end
//!
//! Reads one command per line from stdin:
//!
//! ```text
//! new                 generate a new chord
//! play [role]         play chord (default), soprano, alto, tenor or bass
//! stop                stop everything
//! guess <id>          guess the chord type (see `types`)
//! types               list chord type ids
//! status              show sounding voices
//! help | quit
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chord_trainer::{ChordType, LoggingLoader, Session, TrainerConfig, TrainerError, VoiceRole};

/// Chord Trainer - recognise four-voice chord types by ear
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible chord sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, PartialEq)]
enum Command {
    NewChord,
    Play(VoiceRole),
    StopAll,
    Guess(String),
    Types,
    Status,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Option<Command>, TrainerError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();

    let command = match verb.to_ascii_lowercase().as_str() {
        "new" | "n" => Command::NewChord,
        "play" | "p" => Command::Play(arg.map(str::parse::<VoiceRole>).transpose()?.unwrap_or(VoiceRole::Chord)),
        "stop" | "s" => Command::StopAll,
        "guess" | "g" => match arg {
            Some(id) => Command::Guess(id.to_string()),
            None => Command::Types,
        },
        "types" | "t" => Command::Types,
        "status" => Command::Status,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Help,
    };
    Ok(Some(command))
}

fn print_help() {
    println!("Commands:");
    println!("  new              generate a new chord");
    println!("  play [role]      play chord, soprano, alto, tenor or bass");
    println!("  stop             stop all voices");
    println!("  guess <id>       guess the chord type");
    println!("  types            list chord type ids");
    println!("  status           show sounding voices");
    println!("  quit");
}

fn print_types() {
    for chord_type in ChordType::ALL {
        println!("  {:<12} {}", chord_type.id(), chord_type.label());
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &args.config {
        Some(path) => TrainerConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => TrainerConfig::default(),
    };
    debug!(?config, "configuration");

    let loader = LoggingLoader::new(config.instrument.clone());
    let mut session = match args.seed {
        Some(seed) => Session::with_rng(config, loader, StdRng::seed_from_u64(seed)),
        None => Session::new(config, loader),
    };

    println!("Type `new` to start.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        let result = match command {
            Command::NewChord => {
                session.new_chord();
                println!("Chord ready - `play` it or listen to the single voices.");
                Ok(())
            }
            Command::Play(role) => session.play_voice(role).await,
            Command::StopAll => {
                session.stop_all();
                Ok(())
            }
            Command::Guess(id) => session.submit_guess(&id).map(|outcome| println!("{}", outcome)),
            Command::Types => {
                print_types();
                Ok(())
            }
            Command::Status => {
                let sounding = session.sounding_roles();
                if sounding.is_empty() {
                    println!("silent");
                } else {
                    let names: Vec<&str> = sounding.iter().map(|role| role.as_str()).collect();
                    println!("sounding: {}", names.join(", "));
                }
                Ok(())
            }
            Command::Help => {
                print_help();
                Ok(())
            }
            Command::Quit => break,
        };

        match result {
            Ok(()) => {}
            Err(TrainerError::NoChordReady) => println!("Run `new` first."),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    session.stop_all();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("new").unwrap(), Some(Command::NewChord));
        assert_eq!(parse_command("  ").unwrap(), None);
        assert_eq!(parse_command("play").unwrap(), Some(Command::Play(VoiceRole::Chord)));
        assert_eq!(parse_command("p bass").unwrap(), Some(Command::Play(VoiceRole::Bass)));
        assert_eq!(parse_command("guess Moll7").unwrap(), Some(Command::Guess("Moll7".to_string())));
        assert_eq!(parse_command("guess").unwrap(), Some(Command::Types));
        assert_eq!(parse_command("STOP").unwrap(), Some(Command::StopAll));
        assert_eq!(parse_command("q").unwrap(), Some(Command::Quit));
        assert_eq!(parse_command("xyz").unwrap(), Some(Command::Help));
    }

    #[test]
    fn test_parse_unknown_role() {
        assert_eq!(
            parse_command("play baritone"),
            Err(TrainerError::UnknownVoiceRole("baritone".to_string()))
        );
    }
}

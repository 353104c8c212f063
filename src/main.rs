//! tourney - interactive single-elimination bracket runner
//!
//! `run` resolves one undecided match and persists the bracket; `status`
//! prints the bracket and never writes.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tourney::{
    game::{
        interactive_controller::parse_selection, AdvanceOutcome, DecisionProvider, GameLoop,
        InteractiveController, ScriptedController, StatusReport, TourneyState, VerbosityLevel,
    },
    loader::{DecodeMode, DescriptionLoader, StatusFile},
    Result,
};

/// Output format for the status report
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportFormat {
    /// Human-readable listing
    Text,
    /// Machine-readable JSON
    Json,
}

/// Verbosity argument accepting both names and numbers
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "normal" | "1" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "2" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, normal/1, verbose/2)"
            )),
        }
    }
}

#[derive(Parser)]
#[command(name = "tourney")]
#[command(about = "Interactive single-elimination bracket runner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the next undecided match and persist the bracket
    Run {
        /// File describing the tournament (title line, then one candidate per line)
        #[arg(long, default_value = "description", value_name = "FILE")]
        description: PathBuf,

        /// File holding the persisted bracket state
        #[arg(long, default_value = "status", value_name = "FILE")]
        status: PathBuf,

        /// Set random seed for deterministic shuffles
        #[arg(long)]
        seed: Option<u64>,

        /// Decide non-interactively (left/right or 1/2) instead of prompting
        #[arg(long, value_name = "SIDE")]
        choose: Option<String>,

        /// Directory with per-candidate images for the match preview
        #[arg(long, value_name = "DIR")]
        images: Option<PathBuf>,

        /// Tolerate status-file stanzas whose recorded winner is neither side
        #[arg(long)]
        lenient: bool,

        /// Verbosity (0=silent, 1=normal, 2=verbose)
        #[arg(long, short = 'v', default_value = "normal")]
        verbosity: VerbosityArg,
    },

    /// Print the current bracket without mutating anything
    Status {
        /// File describing the tournament (title line, then one candidate per line)
        #[arg(long, default_value = "description", value_name = "FILE")]
        description: PathBuf,

        /// File holding the persisted bracket state
        #[arg(long, default_value = "status", value_name = "FILE")]
        status: PathBuf,

        /// Report output format
        #[arg(long, value_enum, default_value = "text")]
        format: ReportFormat,

        /// Tolerate status-file stanzas whose recorded winner is neither side
        #[arg(long)]
        lenient: bool,
    },
}

fn decode_mode(lenient: bool) -> DecodeMode {
    if lenient {
        DecodeMode::Lenient
    } else {
        DecodeMode::Strict
    }
}

fn run(
    description: PathBuf,
    status: PathBuf,
    seed: Option<u64>,
    choose: Option<String>,
    images: Option<PathBuf>,
    lenient: bool,
    verbosity: VerbosityLevel,
) -> Result<()> {
    let desc = DescriptionLoader::load_from_file(&description)?;
    let rounds = StatusFile::load_from_file(&status, decode_mode(lenient))?;

    let mut state = TourneyState::new(desc.title, desc.candidates, rounds);
    if let Some(seed) = seed {
        state.seed_rng(seed);
    }

    let mut provider: Box<dyn DecisionProvider> = match choose {
        Some(side) => Box::new(ScriptedController::new([parse_selection(side.trim())?])),
        None => Box::new(InteractiveController::with_images(images)),
    };

    if verbosity >= VerbosityLevel::Normal {
        println!("\ncurrent status:");
        print!("{}", StatusReport::build(&state));
    }

    let outcome =
        GameLoop::with_verbosity(&mut state, verbosity).run_next_match(provider.as_mut())?;

    match &outcome {
        AdvanceOutcome::Decided {
            winner,
            tournament_over,
            ..
        } => {
            if verbosity >= VerbosityLevel::Normal {
                println!("winner: {winner}");
                if *tournament_over {
                    println!("The tournament is completed");
                }
            }
        }
        AdvanceOutcome::AlreadyFinished => {
            if verbosity >= VerbosityLevel::Normal {
                println!("The tournament is completed");
            }
        }
    }

    // Single write, only after the decision fully applied
    StatusFile::save_to_file(&state.rounds, &status)
}

fn print_status(
    description: PathBuf,
    status: PathBuf,
    format: ReportFormat,
    lenient: bool,
) -> Result<()> {
    let desc = DescriptionLoader::load_from_file(&description)?;
    let rounds = StatusFile::load_from_file(&status, decode_mode(lenient))?;
    let state = TourneyState::new(desc.title, desc.candidates, rounds);

    let report = StatusReport::build(&state);
    match format {
        ReportFormat::Text => print!("{report}"),
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| tourney::TourneyError::SerializationError(e.to_string()))?;
            println!("{json}");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            description,
            status,
            seed,
            choose,
            images,
            lenient,
            verbosity,
        } => run(description, status, seed, choose, images, lenient, verbosity.0),
        Commands::Status {
            description,
            status,
            format,
            lenient,
        } => print_status(description, status, format, lenient),
    }
}

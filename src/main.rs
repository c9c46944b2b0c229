use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use padel_matcher::logging;
use padel_matcher::scheduler::{ConstraintMode, ScheduleStats};
use padel_matcher::{FileStore, MatcherConfig, MatcherError, Session};

#[derive(Parser, Debug)]
#[command(name = "padel-matcher")]
#[command(about = "Pair twelve padel players over three rounds without repeats")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the schedule snapshot (overrides the config file)
    #[arg(long)]
    store_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate and save a new schedule
    Generate {
        /// The twelve player names
        #[arg(num_args = 1..)]
        players: Vec<String>,

        /// Seed for a reproducible schedule
        #[arg(long)]
        seed: Option<u64>,

        /// Which repeats to forbid
        #[arg(long, value_enum)]
        mode: Option<ConstraintMode>,

        /// Maximum number of attempts before giving up
        #[arg(long)]
        max_attempts: Option<usize>,

        /// Print partnership statistics after the schedule
        #[arg(long)]
        stats: bool,
    },
    /// Show the last saved schedule
    Show,
    /// Delete the saved schedule
    Reset,
}

fn load_config(cli: &Cli) -> padel_matcher::Result<MatcherConfig> {
    let mut config = match &cli.config {
        Some(path) => MatcherConfig::from_file(path)?,
        None => MatcherConfig::default(),
    };
    if let Some(dir) = &cli.store_dir {
        config.store.dir = dir.clone();
    }
    if let Command::Generate {
        mode, max_attempts, ..
    } = &cli.command
    {
        if let Some(mode) = mode {
            config.generator.mode = *mode;
        }
        if let Some(max_attempts) = max_attempts {
            config.generator.max_attempts = *max_attempts;
        }
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: Cli) -> padel_matcher::Result<()> {
    let config = load_config(&cli)?;
    tracing::debug!("Config: {:?}", config);

    let store = FileStore::new(config.store.dir.clone());
    let mut session = Session::open(store, &config);

    match cli.command {
        Command::Generate {
            players,
            seed,
            stats,
            ..
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let schedule = session.generate(&players, &mut rng)?;
            print!("{schedule}");
            if stats {
                let stats = ScheduleStats::calculate(schedule);
                println!();
                println!(
                    "Partnerships: {} distinct, {} repeated",
                    stats.distinct_partnerships, stats.repeated_partnerships
                );
                println!(
                    "Match-ups: {} distinct, {} repeated",
                    stats.distinct_oppositions, stats.repeated_oppositions
                );
                println!("Field coverage: {:.0}%", stats.avg_coverage * 100.0);
            }
        }
        Command::Show => match session.current() {
            Some(schedule) => print!("{schedule}"),
            None => println!("No saved schedule. Run `padel-matcher generate` with 12 names."),
        },
        Command::Reset => {
            session.reset()?;
            println!("Schedule cleared.");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}", e.user_friendly_message());
            match e {
                MatcherError::InvalidRoster(_) | MatcherError::Exhausted(_) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

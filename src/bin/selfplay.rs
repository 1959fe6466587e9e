//! Self-play game generation CLI.
//!
//! Plays Nine Men's Morris games between two engine players and outputs one
//! JSON record per game.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --games N         Number of games to play (default: 10)
//!   --depth N         Search depth for both colors (default: 3)
//!   --white-depth N   Search depth for White
//!   --black-depth N   Search depth for Black
//!   --white-random    White plays uniformly random actions
//!   --black-random    Black plays uniformly random actions
//!   --max-plies N     Abandon games after N plies (default: 200)
//!   --threads N       Number of parallel threads (default: 4)
//!   --seed N          Random seed, 0 for entropy (default: 0)
//!   --output FILE     Output file path (default: stdout)
//!   --quiet           Suppress progress and summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;

use morris::selfplay::{self, SelfPlayConfig, SelfPlayError};

/// Reads the value following `args[*i]`, advancing `i`.
fn flag_value<T: FromStr>(args: &[String], i: &mut usize) -> Result<T, String> {
    let flag = &args[*i];
    *i += 1;
    let raw = args
        .get(*i)
        .ok_or_else(|| format!("missing value for {}", flag))?;
    raw.parse()
        .map_err(|_| format!("invalid {} value: {}", flag, raw))
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let mut config = SelfPlayConfig::default();
    let mut output_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        let parsed = match args[i].as_str() {
            "--games" => flag_value(&args, &mut i).map(|v| config.num_games = v),
            "--depth" => flag_value(&args, &mut i).map(|v| {
                config.white_depth = v;
                config.black_depth = v;
            }),
            "--white-depth" => flag_value(&args, &mut i).map(|v| config.white_depth = v),
            "--black-depth" => flag_value(&args, &mut i).map(|v| config.black_depth = v),
            "--white-random" => {
                config.white_random = true;
                Ok(())
            }
            "--black-random" => {
                config.black_random = true;
                Ok(())
            }
            "--max-plies" => flag_value(&args, &mut i).map(|v| config.max_plies = v),
            "--threads" => flag_value(&args, &mut i).map(|v| config.threads = v),
            "--seed" => flag_value(&args, &mut i).map(|v| config.seed = v),
            "--output" => flag_value(&args, &mut i).map(|v| output_path = Some(v)),
            "--quiet" => {
                config.quiet = true;
                Ok(())
            }
            "--help" | "-h" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            other => Err(format!("Unknown argument: {}", other)),
        };
        if let Err(msg) = parsed {
            eprintln!("{}", msg);
            print_usage();
            return ExitCode::FAILURE;
        }
        i += 1;
    }

    match run(&config, output_path.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("selfplay: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn player_label(depth: u32, random: bool) -> String {
    if random {
        "random".to_string()
    } else {
        format!("depth {}", depth)
    }
}

fn run(config: &SelfPlayConfig, output_path: Option<&str>) -> Result<(), SelfPlayError> {
    if !config.quiet {
        eprintln!(
            "Self-play: {} games, White {}, Black {}, max {} plies, {} threads",
            config.num_games,
            player_label(config.white_depth, config.white_random),
            player_label(config.black_depth, config.black_random),
            config.max_plies,
            config.threads
        );
    }

    let start = Instant::now();
    let games = selfplay::run_self_play(config)?;
    let elapsed = start.elapsed();

    if !config.quiet {
        eprintln!(
            "Completed {} games in {:.1}s",
            games.len(),
            elapsed.as_secs_f64()
        );
        selfplay::print_summary(&games);
    }

    match output_path {
        Some(path) => {
            let file = File::create(path)?;
            let mut writer = BufWriter::new(file);
            selfplay::write_jsonl(&games, &mut writer)?;
            if !config.quiet {
                eprintln!("Wrote {} games to {}", games.len(), path);
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            selfplay::write_jsonl(&games, &mut writer)?;
        }
    }
    Ok(())
}

fn print_usage() {
    eprintln!("Usage: selfplay [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N         Number of games to play (default: 10)");
    eprintln!("  --depth N         Search depth for both colors (default: 3)");
    eprintln!("  --white-depth N   Search depth for White");
    eprintln!("  --black-depth N   Search depth for Black");
    eprintln!("  --white-random    White plays uniformly random actions");
    eprintln!("  --black-random    Black plays uniformly random actions");
    eprintln!("  --max-plies N     Abandon games after N plies (default: 200)");
    eprintln!("  --threads N       Number of parallel threads (default: 4)");
    eprintln!("  --seed N          Random seed, 0 for entropy (default: 0)");
    eprintln!("  --output FILE     Output file path (default: stdout)");
    eprintln!("  --quiet           Suppress progress and summary output");
    eprintln!("  --help            Show this help");
}

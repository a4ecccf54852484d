use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;

use vecspan_cli::config::{load_run_config, PresetConfig};
use vecspan_cli::console::{Console, BANNER};
use vecspan_cli::session::Session;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("VECSPAN_LOG", "error,vecspan=warn"))
        .init();

    let matches = Command::new("vecspan")
        .version(clap::crate_version!())
        .author("Justin Sing <justincsing@gmail.com>")
        .about("Generate random integer vectors and report the dimension of their span")
        .arg(int_arg("n", 'n', "Number of dimensions of each vector"))
        .arg(int_arg("r", 'r', "Total number of vectors"))
        .arg(int_arg("lower", 'l', "Lower bound of the coordinate range (inclusive)"))
        .arg(int_arg("upper", 'u', "Upper bound of the coordinate range (exclusive)"))
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .help("Seed the random generator for reproducible vectors")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(
                    "Path to a JSON file with any of n, r, lower, upper, seed. \
                     Command line values take precedence.",
                )
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("once")
                .long("once")
                .help("Run a single time without asking to start again")
                .action(ArgAction::SetTrue),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Written by {author-with-newline}Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    let preset = preset_from_arguments(&matches)?;
    log::debug!("preset run parameters: {:?}", preset);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    console.say(BANNER)?;

    match Session::new(preset, matches.get_flag("once")).run(&mut console) {
        Ok(runs) => {
            log::info!("finished after {} runs", runs);
            Ok(())
        }
        Err(e) => {
            log::error!("vecspan failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn int_arg(name: &'static str, short: char, help: &'static str) -> Arg {
    Arg::new(name)
        .short(short)
        .long(name)
        .help(help)
        .allow_negative_numbers(true)
        .value_parser(clap::value_parser!(i64))
}

fn preset_from_arguments(matches: &ArgMatches) -> Result<PresetConfig> {
    let from_file = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            log::info!("loading run parameters from {:?}", path);
            load_run_config(path)?
        }
        None => PresetConfig::default(),
    };

    let from_flags = PresetConfig {
        n: matches.get_one::<i64>("n").copied(),
        r: matches.get_one::<i64>("r").copied(),
        lower: matches.get_one::<i64>("lower").copied(),
        upper: matches.get_one::<i64>("upper").copied(),
        seed: matches.get_one::<u64>("seed").copied(),
    };

    Ok(from_file.overridden_by(from_flags))
}

#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

mod console_config;
mod game_main;

use clap::{Command, arg};
use console_config::ConsoleConfig;

fn main() -> anyhow::Result<()> {
    // Stdout is reserved for the game output.
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("Checkers")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about("Sets up a board game session and prints the starting board")
        .subcommand_required(true)
        .subcommand(
            Command::new("run")
                .about("Create a game and run its setup")
                .arg(arg!([config_file] "Path to the configuration file: yaml-serialized ConsoleConfig."))
                .arg(arg!(--"game" <key> "Game to run; overrides the config").required(false))
                .arg(
                    arg!(-'n' --"participants" <n> "Number of participants; overrides the config")
                        .value_parser(clap::value_parser!(usize))
                        .required(false),
                )
                .arg(
                    arg!(--"seed" <seed> "Seed for the random value provider; overrides the config")
                        .value_parser(clap::value_parser!(u64))
                        .required(false),
                ),
        )
        .subcommand(Command::new("list-games").about("List games that can be run"))
        .get_matches();

    match matches.subcommand() {
        Some(("run", sub_matches)) => {
            let mut config = match sub_matches.get_one::<String>("config_file") {
                Some(filename) => console_config::read_config_file(filename)?,
                None => ConsoleConfig::default(),
            };
            config.apply_overrides(
                sub_matches.get_one::<String>("game").cloned(),
                sub_matches.get_one::<usize>("participants").copied(),
                sub_matches.get_one::<u64>("seed").copied(),
            );
            game_main::run(&config)
        }
        Some(("list-games", _)) => {
            game_main::list_games();
            Ok(())
        }
        _ => unreachable!("Exhausted list of subcommands and subcommand_required prevents `None`"),
    }
}

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use otter_refute::config::{Config, ControlStrategy, ResolutionRule};

use crate::shell::Mode;

pub fn cli() -> Command {
    Command::new("otter_refute")
        .about("Determines whether a clause follows from some premises, by refutation resolution")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("mode")
            .required(true)
            .value_name("MODE")
            .value_parser(clap::builder::ValueParser::new(mode_parser))
            .help("How to use the clauses (and tasks).")
            .long_help("How to use the clauses (and tasks).

  - resolution         : Resolve for the last clause, with all other clauses as premises.
  - cooking_test       : Perform each task, with all clauses as premises.
  - cooking_interactive: As cooking_test, then perform tasks read from standard input until 'exit'."))

        .arg(Arg::new("clauses")
            .required(true)
            .value_name("CLAUSES")
            .value_parser(value_parser!(PathBuf))
            .help("A file of clauses, one clause to a line."))

        .arg(Arg::new("tasks")
            .required(false)
            .value_name("TASKS")
            .value_parser(value_parser!(PathBuf))
            .help("A file of tasks, one task to a line."))

        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::SetTrue)
            .help("Display full reports, with a proof on refutation."))

        .arg(Arg::new("control_strategy")
            .long("strategy")
            .short('s')
            .value_name("STRATEGY")
            .value_parser(clap::builder::ValueParser::new(control_strategy_parser))
            .required(false)
            .num_args(1)
            .help(format!("The control strategy to use.
Default: {}", Config::default().control_strategy.value))
            .long_help(format!("The control strategy to use.
Default: {}

  - SupportSet        : Resolve only pairs with some clause derived from the goal.
  - SaturationByLevels: Resolve all pairs.", Config::default().control_strategy.value)))

        .arg(Arg::new("no_simplification")
            .long("no-simplification")
            .action(ArgAction::SetTrue)
            .help("Keep subsumed clauses and tautologies.")
            .long_help("Keep subsumed clauses and tautologies.

As tautologies are kept, clauses are resolved with the tautology-preserving rule."))

        .arg(Arg::new("keep_acquired_knowledge")
            .long("keep-knowledge")
            .short('k')
            .action(ArgAction::SetTrue)
            .help("Keep knowledge acquired by one inquiry for later inquiries."))
}

pub fn config_from_args(args: &ArgMatches) -> Config {
    let mut the_config = Config::default();

    if let Ok(Some(strategy)) = args.try_get_one::<ControlStrategy>("control_strategy") {
        the_config.control_strategy.value = *strategy
    };

    if let Ok(Some(true)) = args.try_get_one::<bool>("no_simplification") {
        the_config.simplification.clear();
    };

    if let Ok(Some(value)) = args.try_get_one::<bool>("keep_acquired_knowledge") {
        the_config.keep_acquired_knowledge.value = *value
    };

    the_config.resolution_rule.value = ResolutionRule::suited_to(&the_config.simplification);

    the_config
}

fn mode_parser(arg: &str) -> Result<Mode, std::io::Error> {
    arg.parse::<Mode>().map_err(|_| {
        std::io::Error::new(std::io::ErrorKind::NotFound, format!("{arg} is not a valid mode"))
    })
}

fn control_strategy_parser(arg: &str) -> Result<ControlStrategy, std::io::Error> {
    arg.parse::<ControlStrategy>().map_err(|_| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Unknown control strategy")
    })
}


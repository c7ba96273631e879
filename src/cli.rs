use std::path::PathBuf;

use clap::{
    Arg, ArgAction, ArgMatches, command, crate_authors, crate_description, crate_name,
    crate_version,
};

use crate::constants::{
    BASE_DIR_HELP, CONFIG_HELP, DEFAULT_BASE_DIR, DEFAULT_CONFIG_PATH, DRY_RUN_HELP,
    LOG_FILE_HELP, VERBOSE_HELP,
};
use crate::logging::LogLevel;

/// Builds the command-line interface
///
/// Every argument is optional; running without any performs the built-in
/// batch in the current directory.
pub fn build_command() -> clap::Command {
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .help(CONFIG_HELP)
        .default_value(DEFAULT_CONFIG_PATH);

    let arg_base_dir = Arg::new("base_dir")
        .short('b')
        .long("base-dir")
        .help(BASE_DIR_HELP)
        .default_value(DEFAULT_BASE_DIR);

    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(ArgAction::SetTrue);

    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    let arg_log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_config)
        .arg(arg_base_dir)
        .arg(arg_dry)
        .arg(arg_log_file)
        .arg(arg_verbose)
}

/// Parses the process arguments
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    LogLevel::from_occurrences(matches.get_count("verbose"))
}

pub fn get_config_path(matches: &ArgMatches) -> PathBuf {
    matches
        .get_one::<String>("config")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

pub fn get_base_dir(matches: &ArgMatches) -> PathBuf {
    matches
        .get_one::<String>("base_dir")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BASE_DIR))
}

pub fn get_log_file(matches: &ArgMatches) -> String {
    matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_default()
}

pub fn is_dry_run(matches: &ArgMatches) -> bool {
    matches.get_flag("dry")
}

#![forbid(unsafe_code)]

//! Command-line arguments, parsed by hand. Every flag has an environment
//! variable fallback so the binary can be configured without arguments.

use std::fmt;
use std::path::PathBuf;

pub const HELP: &str = "\
instacam - a mock photo-sharing app for the terminal

USAGE:
    instacam [OPTIONS]

OPTIONS:
    --screen <name>       Start on a screen (home, explore, upload, profile,
                          notifications, messages, settings)
    --state-file <path>   Where to persist session and theme
                          [default: instacam-state.json]
    --log-file <path>     Append structured logs to this file
    --log-filter <expr>   Log filter, e.g. info or instacam=debug
    -h, --help            Print help
    -V, --version         Print version

ENVIRONMENT:
    INSTACAM_SCREEN, INSTACAM_STATE_FILE, INSTACAM_LOG_FILE, INSTACAM_LOG
";

#[derive(Debug)]
pub enum CliError {
    MissingValue(String),
    UnknownFlag(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::MissingValue(flag) => write!(f, "flag {flag} requires a value"),
            CliError::UnknownFlag(flag) => write!(f, "unknown flag {flag}"),
        }
    }
}

impl std::error::Error for CliError {}

/// What the process should do after parsing.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Run(Args),
    PrintHelp,
    PrintVersion,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Args {
    pub screen: Option<String>,
    pub state_file: PathBuf,
    pub log_file: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            screen: std::env::var("INSTACAM_SCREEN").ok(),
            state_file: std::env::var("INSTACAM_STATE_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("instacam-state.json")),
            log_file: std::env::var("INSTACAM_LOG_FILE").ok().map(PathBuf::from),
            log_filter: std::env::var("INSTACAM_LOG").unwrap_or_else(|_| "info".to_owned()),
        }
    }
}

/// Parse arguments (without the program name). Flags override environment
/// variables, which override defaults. Both `--flag value` and
/// `--flag=value` are accepted.
pub fn parse(argv: impl IntoIterator<Item = String>) -> Result<Invocation, CliError> {
    let mut args = Args::default();
    let mut iter = argv.into_iter();

    while let Some(arg) = iter.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) => (flag.to_owned(), Some(value.to_owned())),
            None => (arg, None),
        };
        let mut value = |iter: &mut dyn Iterator<Item = String>| {
            inline
                .clone()
                .or_else(|| iter.next())
                .ok_or_else(|| CliError::MissingValue(flag.clone()))
        };
        match flag.as_str() {
            "-h" | "--help" => return Ok(Invocation::PrintHelp),
            "-V" | "--version" => return Ok(Invocation::PrintVersion),
            "--screen" => args.screen = Some(value(&mut iter)?),
            "--state-file" => args.state_file = PathBuf::from(value(&mut iter)?),
            "--log-file" => args.log_file = Some(PathBuf::from(value(&mut iter)?)),
            "--log-filter" => args.log_filter = value(&mut iter)?,
            other => return Err(CliError::UnknownFlag(other.to_owned())),
        }
    }
    Ok(Invocation::Run(args))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(argv: &[&str]) -> Result<Invocation, CliError> {
        parse(argv.iter().map(|s| (*s).to_owned()))
    }

    #[test]
    fn no_args_runs_with_defaults() {
        match run(&[]).unwrap() {
            Invocation::Run(args) => {
                assert_eq!(args.screen, None);
            }
            other => panic!("expected Run, got {other:?}"),
        }
    }

    #[test]
    fn screen_and_state_file_flags() {
        match run(&["--screen", "explore", "--state-file", "/tmp/s.json"]).unwrap() {
            Invocation::Run(args) => {
                assert_eq!(args.screen.as_deref(), Some("explore"));
                assert_eq!(args.state_file, PathBuf::from("/tmp/s.json"));
            }
            other => panic!("expected Run, got {other:?}"),
        }
    }

    #[test]
    fn help_and_version_short_circuit() {
        assert_eq!(run(&["--help"]).unwrap(), Invocation::PrintHelp);
        assert_eq!(run(&["-V", "--screen"]).unwrap(), Invocation::PrintVersion);
    }

    #[test]
    fn equals_form_is_accepted() {
        match run(&["--screen=profile", "--log-filter=instacam=debug"]).unwrap() {
            Invocation::Run(args) => {
                assert_eq!(args.screen.as_deref(), Some("profile"));
                assert_eq!(args.log_filter, "instacam=debug");
            }
            other => panic!("expected Run, got {other:?}"),
        }
    }

    #[test]
    fn missing_value_is_an_error() {
        assert!(matches!(
            run(&["--screen"]),
            Err(CliError::MissingValue(flag)) if flag == "--screen"
        ));
    }

    #[test]
    fn unknown_flag_is_an_error() {
        assert!(matches!(
            run(&["--frobnicate"]),
            Err(CliError::UnknownFlag(flag)) if flag == "--frobnicate"
        ));
    }
}

//! Command-line argument definitions using clap.

use clap::Parser;

/// Local Linux enumeration for privilege-escalation reconnaissance
///
/// Lists interesting users, busy processes, unusual root entries,
/// credential directories and readable private keys, then caches every
/// readable file on the system.
#[derive(Parser, Debug)]
#[command(name = "enum4w")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enumeration level 0-4 (1: list users, 2: include default accounts)
    #[arg(
        short = 'c',
        value_name = "LEVEL",
        num_args = 0..=1,
        value_parser = clap::value_parser!(u8).range(0..=4)
    )]
    pub level: Option<Option<u8>>,

    /// Disable colored output (also ANSI_COLORS_DISABLED or NO_COLOR)
    #[arg(long)]
    pub no_color: bool,

    /// Skip the full-filesystem readable file cache
    #[arg(long)]
    pub skip_cache: bool,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// What `-c` asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelRequest {
    /// `-c <level>` or no `-c` at all
    Level(u8),
    /// `-c` without a value
    Missing,
}

impl Cli {
    /// Resolve the `-c` flag, defaulting to level 1.
    #[must_use]
    pub fn level_request(&self) -> LevelRequest {
        match self.level {
            None => LevelRequest::Level(1),
            Some(Some(level)) => LevelRequest::Level(level),
            Some(None) => LevelRequest::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("enum4w").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_default_level() {
        assert_eq!(parse(&[]).level_request(), LevelRequest::Level(1));
    }

    #[test]
    fn test_explicit_level() {
        assert_eq!(parse(&["-c", "2"]).level_request(), LevelRequest::Level(2));
        assert_eq!(parse(&["-c2"]).level_request(), LevelRequest::Level(2));
    }

    #[test]
    fn test_missing_level() {
        assert_eq!(parse(&["-c"]).level_request(), LevelRequest::Missing);
    }

    #[test]
    fn test_level_out_of_range() {
        assert!(Cli::try_parse_from(["enum4w", "-c", "7"]).is_err());
        assert!(Cli::try_parse_from(["enum4w", "-c", "two"]).is_err());
    }

    #[test]
    fn test_flags() {
        let cli = parse(&["--no-color", "--skip-cache", "-vv"]);
        assert!(cli.no_color);
        assert!(cli.skip_cache);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

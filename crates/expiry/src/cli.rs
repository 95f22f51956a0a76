//! Command-line interface definition.

use clap::Parser;

/// Parsed command-line options.
///
/// Bad flags or a missing username are rendered by clap to stderr and exit
/// the process with status 2.
#[derive(Debug, Parser)]
#[command(name = "expiry")]
#[command(version)]
#[command(about = "Report password-expiration status for a system account")]
pub struct Args {
    /// Print extra information (display name, maximum and current age).
    #[arg(short, long)]
    pub verbose: bool,

    /// Name of the account to inspect.
    pub user: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_username() {
        let args = Args::try_parse_from(["expiry", "alice"]).unwrap();
        assert_eq!(args.user, "alice");
        assert!(!args.verbose);
    }

    #[test]
    fn parses_verbose_flag() {
        let args = Args::try_parse_from(["expiry", "-v", "alice"]).unwrap();
        assert!(args.verbose);
        let args = Args::try_parse_from(["expiry", "--verbose", "alice"]).unwrap();
        assert!(args.verbose);
    }

    #[test]
    fn missing_username_is_an_error() {
        let err = Args::try_parse_from(["expiry"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn unknown_flag_is_an_error() {
        let err = Args::try_parse_from(["expiry", "-x", "alice"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn extra_positional_is_an_error() {
        assert!(Args::try_parse_from(["expiry", "alice", "bob"]).is_err());
    }
}

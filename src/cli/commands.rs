//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Clone, Default, Subcommand, PartialEq)]
pub(crate) enum Commands {
    /// Show popular model pricing (default)
    #[default]
    Pricing,
    /// Show the gateway's home page content
    Home,
    /// Show the gateway notice unless dismissed today
    Notice {
        /// Hide the notice for the rest of today
        #[arg(long)]
        dismiss: bool,
    },
    /// List API endpoint URLs under the gateway base address
    Endpoints {
        /// Rotate through endpoints on a single line
        #[arg(short, long)]
        watch: bool,
        /// Number of rotation steps in watch mode
        #[arg(long, default_value_t = 12, requires = "watch")]
        cycles: usize,
        /// Endpoint index to start rotating from
        #[arg(long, default_value_t = 0, requires = "watch")]
        start: usize,
    },
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    fn command(args: &[&str]) -> Commands {
        Cli::try_parse_from(std::iter::once("pricecard").chain(args.iter().copied()))
            .unwrap()
            .command
            .unwrap_or_default()
    }

    #[test]
    fn pricing_is_default() {
        assert_eq!(command(&[]), Commands::Pricing);
    }

    #[test]
    fn notice_dismiss_flag() {
        assert_eq!(command(&["notice", "--dismiss"]), Commands::Notice { dismiss: true });
    }

    #[test]
    fn endpoints_watch_cycles() {
        assert_eq!(
            command(&["endpoints", "--watch", "--cycles", "3", "--start", "2"]),
            Commands::Endpoints {
                watch: true,
                cycles: 3,
                start: 2,
            }
        );
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["pricecard", "home", "--json", "-O"]).unwrap();
        assert!(cli.json);
        assert!(cli.offline);
    }
}

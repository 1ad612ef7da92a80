use std::path::PathBuf;

use clap::{Parser, Subcommand};
use peerbook_cluster_spec::cli::{network_parser, NetworkSelector};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, global = true, default_value_t = 3)]
    pub verbosity: u8,

    #[arg(
        long,
        global = true,
        help = "Load clusters from a .json, .yaml or .yml file instead of the built-in table"
    )]
    pub clusters_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print every known cluster
    #[command(name = "list")]
    List,

    /// Print one cluster
    #[command(name = "show")]
    Show(ShowCommand),

    /// Check a cluster table file without using it
    #[command(name = "validate")]
    Validate(ValidateCommand),
}

#[derive(Debug, Parser)]
pub struct ShowCommand {
    #[arg(
        help = "Network name (mainnet, ropsten, rinkeby) or numeric network id; names select the well-known ids",
        value_parser = network_parser
    )]
    pub network: NetworkSelector,
}

#[derive(Debug, Parser)]
pub struct ValidateCommand {
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_list_command() {
        let cli = Cli::parse_from(["program", "list", "--verbosity", "2"]);

        assert_eq!(cli.verbosity, 2);
        assert!(cli.clusters_file.is_none());
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn test_cli_show_command() {
        let cli = Cli::parse_from(["program", "--clusters-file", "custom.yaml", "show", "4"]);

        assert_eq!(cli.verbosity, 3);
        assert_eq!(cli.clusters_file, Some(PathBuf::from("custom.yaml")));
        match cli.command {
            Commands::Show(cmd) => assert_eq!(cmd.network, NetworkSelector::Id(4)),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_validate_command() {
        let cli = Cli::parse_from(["program", "validate", "clusters.json"]);

        match cli.command {
            Commands::Validate(cmd) => assert_eq!(cmd.file, PathBuf::from("clusters.json")),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_show_rejects_unknown_network() {
        assert!(Cli::try_parse_from(["program", "show", "goerli"]).is_err());
    }

    #[test]
    fn test_cli_requires_command() {
        assert!(Cli::try_parse_from(["program"]).is_err());
    }
}

//! CLI command implementations

use clap::Subcommand;

use crate::error::CliResult;

pub mod decline;
pub mod list;
pub mod serve;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the request/reply declension server
    Serve(serve::ServeArgs),

    /// Process request records once and print the results
    Decline(decline::DeclineArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List grammatical case tokens
    Cases,

    /// List gender tokens
    Genders,

    /// List recognized currency literals
    Currencies,

    /// List nouns available in the embedded lexicon
    Nouns,
}

impl Commands {
    /// Execute the selected command.
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Serve(args) => args.execute(),
            Commands::Decline(args) => args.execute(),
            Commands::List { subcommand } => list::execute(subcommand),
        }
    }
}

//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Fixed-arity tree engine: construction, traversal, mutation and structural analysis
#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (repeat for more verbosity)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive session on a loaded tree
    Repl,

    /// Render a tree with both traversal orders
    Render {
        /// Canned fixture to load
        #[arg(value_enum, default_value = "directory")]
        fixture: Fixture,

        /// Build a random tree of this size instead
        #[arg(short, long)]
        random: Option<usize>,
    },

    /// Run the timing battery over increasing tree sizes
    Bench {
        /// Tree sizes to measure (default: configured series)
        #[arg(short, long, num_args = 1..)]
        sizes: Option<Vec<usize>>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixture {
    /// Small asymmetric filesystem-shaped tree
    Directory,
    /// Complete two-level tree, full arity at both levels
    Full,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config path
    Path,
}

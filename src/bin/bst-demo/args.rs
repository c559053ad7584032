//! Command line flags, each with an environment variable fallback.

use clap::{ArgAction, Parser};

/// Builds a binary search tree from random values, knocks it out of balance
/// and rebalances it, printing the tree at each step.
#[derive(Parser, Debug)]
#[command(name = "bst-demo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// How many random values to draw (duplicates are dropped)
    #[arg(short, long, env = "BST_DEMO_COUNT", default_value_t = 15)]
    pub count: usize,

    /// Random values are drawn from `0..max`
    #[arg(short, long, env = "BST_DEMO_MAX", default_value_t = 100)]
    pub max: u32,

    /// How many values above `max` to insert to skew the tree
    #[arg(short, long, env = "BST_DEMO_SKEW", default_value_t = 5)]
    pub skew: u32,

    /// Seed for a reproducible run
    #[arg(long, env = "BST_DEMO_SEED")]
    pub seed: Option<u64>,

    /// Debug logging: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["bst-demo", "-c", "3", "--seed", "7", "-dd"]).unwrap();

        assert_eq!(cli.count, 3);
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.debug, 2);
    }
}

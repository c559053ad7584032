//! The demonstration itself. Only uses the public `Tree` API.

use std::fmt::Display;
use std::io::Write;

use balance_bst::Tree;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::args::Cli;
use crate::error::{DemoError, DemoResult};

/// Draws `count` values uniformly from `0..max`.
pub fn random_values<R: Rng>(rng: &mut R, count: usize, max: u32) -> DemoResult<Vec<u32>> {
    if max == 0 {
        return Err(DemoError::EmptyRange);
    }
    Ok((0..count).map(|_| rng.gen_range(0..max)).collect())
}

pub fn run<W: Write>(cli: &Cli, out: &mut W) -> DemoResult<()> {
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let values = random_values(&mut rng, cli.count, cli.max)?;
    info!(count = values.len(), "drew random values");

    let mut tree = Tree::from_values(values);
    write_report(out, "Built from random values", &tree)?;

    for offset in 0..cli.skew {
        let value = cli.max.saturating_add(rng.gen_range(0..cli.max)).saturating_add(offset);
        if !tree.insert(value) {
            debug!(value, "skew value already present");
        }
    }
    write_report(out, "After skewing inserts", &tree)?;

    tree.rebalance();
    write_report(out, "After rebalance", &tree)?;

    Ok(())
}

fn write_report<W: Write>(out: &mut W, title: &str, tree: &Tree<u32>) -> DemoResult<()> {
    writeln!(out, "{}", title.bold())?;
    writeln!(
        out,
        "balanced: {}  height: {}  values: {}",
        tree.is_balanced(),
        tree.height(),
        tree.len()
    )?;
    writeln!(out, "level order: {}", join(tree.iter_level_order()))?;
    writeln!(out, "pre-order:   {}", join(tree.iter_pre_order()))?;
    writeln!(out, "post-order:  {}", join(tree.iter_post_order()))?;
    writeln!(out, "in order:    {}", join(tree.iter_in_order()))?;
    writeln!(out, "{}", tree)?;
    Ok(())
}

fn join<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

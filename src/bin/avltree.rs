//! Builds a map of squares and prints one of its traversals.
//!
//! Usage:
//!   avltree [--count N] [--order pre|in|post|level] [--remove KEY]... [--remove-value VALUE]...

use avltree::{Map, Order};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "avltree")]
#[command(about = "Builds an AVL map from 0..COUNT to the squares of its keys and prints a traversal")]
struct Cli {
    /// Number of keys to insert, starting at 0
    #[arg(short, long, default_value_t = 10)]
    count: u64,

    /// Traversal order: pre, in, post or level
    #[arg(short, long, default_value_t = Order::Level)]
    order: Order,

    /// Key to remove after building the map (repeatable)
    #[arg(short, long = "remove", value_name = "KEY")]
    remove: Vec<u64>,

    /// Value to remove after building the map (repeatable)
    #[arg(long = "remove-value", value_name = "VALUE")]
    remove_value: Vec<u64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut map = Map::new();
    for key in 0..cli.count {
        map.insert(key, key.saturating_mul(key));
    }

    tracing::debug!(len = map.len(), height = map.height(), "built map");

    for key in &cli.remove {
        if map.remove(key).is_none() {
            tracing::warn!(key, "no such key");
        }
    }

    for value in &cli.remove_value {
        match map.remove_value(value) {
            Some((key, _)) => tracing::debug!(key, value, "removed by value"),
            None => tracing::warn!(value, "no such value"),
        }
    }

    for visit in map.traverse(cli.order) {
        println!("{}", visit);
    }
}

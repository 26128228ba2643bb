//! CLI argument definitions using clap

use clap::{ArgAction, Parser};

use crate::render::{Limits, DEFAULT_MAX_HEIGHT, MAX_RENDER_HEIGHT};
use crate::tree::{Key, Tree};

/// Build, query and draw an unbalanced binary search tree from an interactive menu
#[derive(Parser, Debug)]
#[command(name = "bst-explorer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed the tree with these keys and skip the seeding prompt (comma separated)
    #[arg(
        short,
        long,
        env = "BST_KEYS",
        value_delimiter = ',',
        allow_negative_numbers = true
    )]
    pub keys: Option<Vec<Key>>,

    /// Value that ends interactive seeding
    #[arg(
        short,
        long,
        env = "BST_SENTINEL",
        default_value_t = -1,
        allow_negative_numbers = true
    )]
    pub sentinel: Key,

    /// Tallest tree the visualizations will draw
    #[arg(
        long,
        env = "BST_MAX_RENDER_HEIGHT",
        default_value_t = DEFAULT_MAX_HEIGHT as u8,
        value_parser = clap::value_parser!(u8).range(0..=MAX_RENDER_HEIGHT as i64)
    )]
    pub max_render_height: u8,

    /// Debug level, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,
}

impl Cli {
    /// The tree described by `--keys`, empty when none were given.
    pub fn seed_tree(&self) -> Tree {
        self.keys.iter().flatten().copied().collect()
    }

    /// Renderer limits from `--max-render-height`.
    pub fn limits(&self) -> Limits {
        Limits {
            max_height: usize::from(self.max_render_height),
        }
    }
}

//! Errors surfaced by the tree and its renderers.

use thiserror::Error;

/// The ways a tree query or rendering can fail. Every other operation is total.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The tree has no nodes, so there is no minimum, maximum, or shape to draw.
    #[error("tree is empty")]
    EmptyTree,

    /// The tree is taller than the renderer is willing to lay out. Canvas width grows
    /// exponentially with height.
    #[error("tree of height {height} is too tall to render (limit is {max})")]
    TooTall {
        /// Height of the tree that was handed to the renderer.
        height: usize,
        /// The configured limit.
        max: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

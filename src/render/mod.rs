//! ASCII pictures of a [`Tree`]'s shape.
//!
//! There are two independent layouts. [`grid`] is the primary one: a wide,
//! generously spaced canvas with padded keys. [`level`] is the alternative: a
//! compact canvas whose children hug their parent. The two use different row
//! spacing and midpoint rules and produce different pictures for the same tree.
//!
//! Both return a [`Canvas`] and never touch the tree itself. [`visualize`]
//! wraps either one in the framing the menu prints.
//!
//! # Examples
//!
//! ```
//! use bst_explorer::render::{self, Layout, Limits};
//! use bst_explorer::Tree;
//!
//! let tree: Tree = [5, 3, 8].into_iter().collect();
//! let picture = render::visualize(&tree, Layout::Level, &Limits::default()).unwrap();
//!
//! assert!(picture.contains("3 8"));
//! ```

pub mod canvas;
pub mod grid;
pub mod level;

use std::fmt;

pub use canvas::{Canvas, Cell};

use crate::error::{Error, Result};
use crate::tree::Tree;

/// The tallest tree drawn by default. The grid layout is `2^(height+2)` columns
/// wide so this keeps a canvas in the tens of thousands of cells.
pub const DEFAULT_MAX_HEIGHT: usize = 12;

/// The tallest tree drawn whatever [`Limits`] say. Past this the grid canvas
/// runs to millions of cells.
pub const MAX_RENDER_HEIGHT: usize = 14;

/// Bounds on what the renderers will attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Trees taller than this are refused with [`Error::TooTall`]. Values
    /// above [`MAX_RENDER_HEIGHT`] are clamped to it.
    pub max_height: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

impl Limits {
    /// Returns the height of a non-empty `tree` if it can be drawn.
    pub(crate) fn check(&self, tree: &Tree) -> Result<usize> {
        let height = usize::try_from(tree.height()).map_err(|_| Error::EmptyTree)?;
        if height > self.ceiling() {
            return Err(self.too_tall(height));
        }
        Ok(height)
    }

    /// `2^(height + extra)`, refused rather than overflowing.
    pub(crate) fn columns(&self, height: usize, extra: usize) -> Result<usize> {
        height
            .checked_add(extra)
            .and_then(|shift| u32::try_from(shift).ok())
            .and_then(|shift| 1_usize.checked_shl(shift))
            .ok_or_else(|| self.too_tall(height))
    }

    fn ceiling(&self) -> usize {
        self.max_height.min(MAX_RENDER_HEIGHT)
    }

    fn too_tall(&self, height: usize) -> Error {
        Error::TooTall {
            height,
            max: self.ceiling(),
        }
    }
}

/// Which picture to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// [`grid::layout`].
    Grid,
    /// [`level::layout`].
    Level,
}

impl Layout {
    /// Draws `tree` with this layout.
    ///
    /// # Errors
    ///
    /// See [`grid::layout`] and [`level::layout`].
    pub fn draw(self, tree: &Tree, limits: &Limits) -> Result<Canvas> {
        match self {
            Self::Grid => grid::layout(tree, limits),
            Self::Level => level::layout(tree, limits),
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Grid => "===== Binary Search Tree Visualization =====",
            Self::Level => "===== Binary Search Tree Structure =====",
        }
    }

    fn rule(self) -> &'static str {
        match self {
            Self::Grid => "=========================================",
            Self::Level => "=====================================",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid => f.write_str("grid"),
            Self::Level => f.write_str("level"),
        }
    }
}

/// The notice printed in place of a picture when there is nothing to draw.
pub const EMPTY_NOTICE: &str = "Tree is empty!";

/// Draws `tree` between a title and a closing rule. An empty tree yields the
/// title followed by [`EMPTY_NOTICE`].
///
/// # Errors
///
/// [`Error::TooTall`] when the tree is taller than `limits` allow.
pub fn visualize(tree: &Tree, layout: Layout, limits: &Limits) -> Result<String> {
    let mut out = format!("\n{}\n", layout.title());
    match layout.draw(tree, limits) {
        Ok(canvas) => {
            out.push_str(&canvas.to_string());
            out.push_str(layout.rule());
            out.push('\n');
        }
        Err(Error::EmptyTree) => {
            out.push_str(EMPTY_NOTICE);
            out.push('\n');
        }
        Err(e) => return Err(e),
    }
    Ok(out)
}

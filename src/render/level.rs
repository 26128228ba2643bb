//! The alternative visualization: a tighter canvas `2^(height+1) - 1` columns
//! wide where each child is drawn inside the half of its parent's span that
//! borders the parent, with short diagonal connectors whose length shrinks with
//! the span.

use crate::error::{Error, Result};
use crate::render::canvas::{Canvas, Cell};
use crate::render::Limits;
use crate::tree::{Node, Tree};

/// Lays `tree` out on a canvas of `2 * height + 1` rows.
///
/// # Errors
///
/// [`Error::EmptyTree`] for an empty tree and [`Error::TooTall`] when the tree
/// is taller than `limits` allow.
pub fn layout(tree: &Tree, limits: &Limits) -> Result<Canvas> {
    let root = tree.root().ok_or(Error::EmptyTree)?;
    let height = limits.check(tree)?;
    let width = limits.columns(height, 1)? - 1;

    let mut canvas = Canvas::new(2 * height + 1, width);
    place(&mut canvas, root, 0, 0, width as i64);
    Ok(canvas)
}

/// Draws `node` in the half open span `[left, right)`.
fn place(canvas: &mut Canvas, node: &Node, row: i64, left: i64, right: i64) {
    let mid = (left + right) / 2;
    let reach = (right - left) / 4;
    canvas.put(row, mid, Cell::Label(node.key().to_string()));

    if let Some(child) = node.left().root() {
        for i in 1..reach {
            canvas.put(row + 1, mid - i, Cell::Glyph('/'));
        }
        place(canvas, child, row + 2, left, mid);
    }
    if let Some(child) = node.right().root() {
        for i in 1..reach {
            canvas.put(row + 1, mid + i, Cell::Glyph('\\'));
        }
        place(canvas, child, row + 2, mid, right);
    }
}

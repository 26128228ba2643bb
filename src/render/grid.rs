//! The primary visualization. Every level of the tree gets a row for its keys
//! followed by a row of connectors, and each node sits in the middle of a column
//! span that halves at every level. The canvas is far wider than the tree needs
//! so that sibling labels never collide.

use crate::error::{Error, Result};
use crate::render::canvas::{Canvas, Cell};
use crate::render::Limits;
use crate::tree::{Key, Node, Tree};

/// Lays `tree` out on a canvas `2^(height+2)` columns wide.
///
/// # Errors
///
/// [`Error::EmptyTree`] for an empty tree and [`Error::TooTall`] when the tree
/// is taller than `limits` allow.
pub fn layout(tree: &Tree, limits: &Limits) -> Result<Canvas> {
    let root = tree.root().ok_or(Error::EmptyTree)?;
    let height = limits.check(tree)?;
    let width = limits.columns(height, 2)?;

    let mut canvas = Canvas::new(2 * height + 1, width);
    place(&mut canvas, root, 0, 0, width as i64 - 1);
    Ok(canvas)
}

/// Pads short keys so one and two digit keys line up.
pub fn format_key(key: Key) -> String {
    let s = key.to_string();
    match s.len() {
        0 | 1 => format!(" {s} "),
        2 => format!("{s} "),
        _ => s,
    }
}

fn place(canvas: &mut Canvas, node: &Node, row: i64, left: i64, right: i64) {
    let mid = (left + right) / 2;
    let label = format_key(node.key());
    let label_width = label.len() as i64;
    canvas.put(row, mid, Cell::Label(label));

    if !node.left().is_empty() {
        let next_mid = (left + mid) / 2;
        for col in (next_mid + 1..mid).rev() {
            canvas.put(row + 1, col, Cell::Glyph('/'));
        }
    }
    if !node.right().is_empty() {
        let next_mid = (mid + right) / 2;
        for col in mid + label_width..next_mid {
            canvas.put(row + 1, col, Cell::Glyph('\\'));
        }
    }

    if let Some(child) = node.left().root() {
        place(canvas, child, row + 2, left, mid - 1);
    }
    if let Some(child) = node.right().root() {
        place(canvas, child, row + 2, mid + 1, right);
    }
}

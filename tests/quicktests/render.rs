use bst_explorer::render::{grid, level, Canvas, Cell, Layout, Limits};
use bst_explorer::{Error, Key, Tree};

fn labels(canvas: &Canvas) -> Vec<String> {
    (0..canvas.height())
        .flat_map(|row| (0..canvas.width()).map(move |col| (row, col)))
        .filter_map(|(row, col)| match canvas.get(row, col) {
            Some(Cell::Label(label)) => Some(label.clone()),
            _ => None,
        })
        .collect()
}

fn label_count(canvas: &Canvas) -> usize {
    labels(canvas).len()
}

/// Inserts the middle of `sorted` first and then each half the same way, which
/// yields a tree as balanced as the key count allows.
fn balanced_order(sorted: &[Key], out: &mut Vec<Key>) {
    if sorted.is_empty() {
        return;
    }
    let mid = sorted.len() / 2;
    out.push(sorted[mid]);
    balanced_order(&sorted[..mid], out);
    balanced_order(&sorted[mid + 1..], out);
}

#[quickcheck]
fn grid_places_every_key_once(xs: Vec<i8>) -> bool {
    let tree: Tree = xs.into_iter().map(i32::from).collect();
    let limits = Limits::default();

    match grid::layout(&tree, &limits) {
        Ok(canvas) => {
            let height = tree.height() as usize;
            let text = canvas.to_string();
            canvas.height() == 2 * height + 1
                && canvas.width() == 1 << (height + 2)
                && label_count(&canvas) == tree.len()
                && tree
                    .inorder()
                    .into_iter()
                    .all(|key| text.contains(&grid::format_key(key)))
        }
        Err(Error::EmptyTree) => tree.is_empty(),
        Err(Error::TooTall { height, max }) => {
            height == tree.height() as usize && max == limits.max_height
        }
    }
}

#[quickcheck]
fn level_canvas_has_expected_shape(xs: Vec<i8>) -> bool {
    let tree: Tree = xs.into_iter().map(i32::from).collect();
    let limits = Limits::default();

    match level::layout(&tree, &limits) {
        Ok(canvas) => {
            let height = tree.height() as usize;
            canvas.height() == 2 * height + 1
                && canvas.width() == (1 << (height + 1)) - 1
                && label_count(&canvas) >= 1
        }
        Err(Error::EmptyTree) => tree.is_empty(),
        Err(Error::TooTall { height, .. }) => height > limits.max_height,
    }
}

#[quickcheck]
fn level_shows_every_key_of_a_balanced_tree(xs: Vec<i8>) -> bool {
    let mut keys: Vec<Key> = xs.into_iter().map(i32::from).collect();
    keys.sort_unstable();
    keys.dedup();
    let mut order = Vec::with_capacity(keys.len());
    balanced_order(&keys, &mut order);
    let tree: Tree = order.into_iter().collect();

    match level::layout(&tree, &Limits::default()) {
        Ok(canvas) => {
            let mut shown = labels(&canvas);
            shown.sort_unstable();
            let mut expected: Vec<String> = keys.iter().map(ToString::to_string).collect();
            expected.sort_unstable();
            shown == expected
        }
        Err(e) => e == Error::EmptyTree && keys.is_empty(),
    }
}

#[quickcheck]
fn rendering_never_mutates(xs: Vec<i8>) -> bool {
    let tree: Tree = xs.into_iter().map(i32::from).collect();
    let before = tree.clone();

    let _ = Layout::Grid.draw(&tree, &Limits::default());
    let _ = Layout::Level.draw(&tree, &Limits::default());

    tree == before
}

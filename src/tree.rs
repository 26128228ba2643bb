//! An unbalanced BST over integer keys. This is modeled after a BST one would
//! see in a functional language: a subtree is either a [`Leaf`][Tree::Leaf] or
//! a [`Node`], and operations that change the tree (`insert` and `delete`)
//! consume the subtree and return the new one. Every node exclusively owns its
//! two children so there are no parent pointers to keep in sync.
//!
//! # Examples
//!
//! ```
//! use bst_explorer::Tree;
//!
//! let tree: Tree = [5, 3, 8, 1].into_iter().collect();
//!
//! assert!(tree.contains(3));
//! assert!(!tree.contains(4));
//! assert_eq!(tree.min(), Ok(1));
//! assert_eq!(tree.max(), Ok(8));
//!
//! // `insert` and `delete` hand back the new tree.
//! let tree = tree.insert(4).delete(5);
//! assert_eq!(tree.inorder(), vec![1, 3, 4, 8]);
//! ```

use std::cmp;
use std::fmt;
use std::mem;

use crate::error::{Error, Result};

/// The type of every key stored in a [`Tree`].
pub type Key = i32;

/// A Binary Search Tree of unique integer keys. No balancing is done so the
/// shape depends entirely on insertion order.
#[derive(Clone, PartialEq, Eq)]
pub enum Tree {
    /// A marker for the empty pointer at the bottom of a subtree.
    Leaf,
    /// A `Node` that has a key and two children (which are both `Tree`s).
    /// This enum trivially wraps the [`Node`] struct.
    Node(Node),
}

/// A `Node` has a key that is used for searching/sorting. It always has two
/// children although those children may be [`Leaf`][Tree::Leaf]s.
#[derive(Clone, PartialEq, Eq)]
pub struct Node {
    key: Key,
    left: Box<Tree>,
    right: Box<Tree>,
}

/// The classical depth-first orders a [`Tree`] can be walked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Left subtree, node, right subtree. Yields keys in sorted order.
    Inorder,
    /// Node, left subtree, right subtree.
    Preorder,
    /// Left subtree, right subtree, node.
    Postorder,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Inorder => "Inorder Traversal",
            Self::Preorder => "Preorder Traversal",
            Self::Postorder => "Postorder Traversal",
        };
        f.write_str(label)
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Leaf
    }

    /// Returns the tree with a node for `key` added. If the key is already
    /// present the tree is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_explorer::Tree;
    ///
    /// let tree = Tree::new().insert(2).insert(1).insert(2);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.preorder(), vec![2, 1]);
    /// ```
    #[must_use]
    pub fn insert(mut self, key: Key) -> Self {
        let mut cur = &mut self;
        while let Self::Node(n) = cur {
            cur = match key.cmp(&n.key) {
                cmp::Ordering::Less => &mut *n.left,
                cmp::Ordering::Equal => return self,
                cmp::Ordering::Greater => &mut *n.right,
            };
        }
        *cur = Self::Node(Node::new(key));
        self
    }

    /// Returns whether a node with exactly `key` exists. Only the single path
    /// picked out by the ordering is visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_explorer::Tree;
    ///
    /// let tree = Tree::new().insert(1);
    ///
    /// assert!(tree.contains(1));
    /// assert!(!tree.contains(42));
    /// ```
    pub fn contains(&self, key: Key) -> bool {
        let mut cur = self;
        while let Self::Node(n) = cur {
            cur = match key.cmp(&n.key) {
                cmp::Ordering::Less => n.left(),
                cmp::Ordering::Equal => return true,
                cmp::Ordering::Greater => n.right(),
            };
        }
        false
    }

    /// Returns the tree without a node for `key`. If the tree never contained
    /// the key it is returned unchanged.
    ///
    /// A node with two children takes the key of its inorder successor (the
    /// smallest key in its right subtree) and the successor's node is removed
    /// from the right subtree instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_explorer::Tree;
    ///
    /// let tree: Tree = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    /// let tree = tree.delete(5);
    ///
    /// assert_eq!(tree.inorder(), vec![1, 3, 4, 7, 8, 9]);
    /// assert_eq!(tree.preorder()[0], 7);
    /// ```
    #[must_use]
    pub fn delete(self, key: Key) -> Self {
        let Self::Node(mut n) = self else {
            return Self::Leaf;
        };
        match key.cmp(&n.key) {
            cmp::Ordering::Less => *n.left = mem::take(&mut *n.left).delete(key),
            cmp::Ordering::Greater => *n.right = mem::take(&mut *n.right).delete(key),
            cmp::Ordering::Equal => match (mem::take(&mut *n.left), mem::take(&mut *n.right)) {
                (Self::Leaf, child) | (child, Self::Leaf) => return child,
                (left, Self::Node(right)) => {
                    let successor = right.min_key();
                    n.key = successor;
                    *n.left = left;
                    *n.right = Self::Node(right).delete(successor);
                }
            },
        }
        Self::Node(n)
    }

    /// Returns the smallest key in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if the tree has no nodes.
    pub fn min(&self) -> Result<Key> {
        self.root().map(Node::min_key).ok_or(Error::EmptyTree)
    }

    /// Returns the largest key in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if the tree has no nodes.
    pub fn max(&self) -> Result<Key> {
        self.root().map(Node::max_key).ok_or(Error::EmptyTree)
    }

    /// Gets the height of this tree: the number of edges on the longest path
    /// from the root to a leaf. An empty tree has a height of -1 and a tree
    /// with a single node has a height of 0.
    pub fn height(&self) -> isize {
        match self {
            Self::Leaf => -1,
            Self::Node(n) => 1 + n.left.height().max(n.right.height()),
        }
    }

    /// Returns whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// Counts the nodes in the tree.
    pub fn len(&self) -> usize {
        match self {
            Self::Leaf => 0,
            Self::Node(n) => 1 + n.left.len() + n.right.len(),
        }
    }

    /// The root node, if there is one.
    pub fn root(&self) -> Option<&Node> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(n),
        }
    }

    /// Collects every key in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_explorer::{Order, Tree};
    ///
    /// let tree: Tree = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.traverse(Order::Inorder), vec![1, 2, 3]);
    /// assert_eq!(tree.traverse(Order::Preorder), vec![2, 1, 3]);
    /// assert_eq!(tree.traverse(Order::Postorder), vec![1, 3, 2]);
    /// ```
    pub fn traverse(&self, order: Order) -> Vec<Key> {
        let mut keys = Vec::with_capacity(self.len());
        self.walk(order, &mut keys);
        keys
    }

    /// Keys in sorted order.
    pub fn inorder(&self) -> Vec<Key> {
        self.traverse(Order::Inorder)
    }

    /// Keys with every node before its subtrees.
    pub fn preorder(&self) -> Vec<Key> {
        self.traverse(Order::Preorder)
    }

    /// Keys with every node after its subtrees.
    pub fn postorder(&self) -> Vec<Key> {
        self.traverse(Order::Postorder)
    }

    fn walk(&self, order: Order, keys: &mut Vec<Key>) {
        if let Self::Node(n) = self {
            if order == Order::Preorder {
                keys.push(n.key);
            }
            n.left.walk(order, keys);
            if order == Order::Inorder {
                keys.push(n.key);
            }
            n.right.walk(order, keys);
            if order == Order::Postorder {
                keys.push(n.key);
            }
        }
    }
}

impl FromIterator<Key> for Tree {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::insert)
    }
}

impl Extend<Key> for Tree {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        let tree = std::mem::take(self);
        *self = iter.into_iter().fold(tree, Self::insert);
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf => f.write_str("Leaf"),
            Self::Node(n) => fmt::Debug::fmt(n, f),
        }
    }
}

impl Node {
    /// Construct a new childless `Node` with the given `key`.
    fn new(key: Key) -> Self {
        Self {
            key,
            left: Box::new(Tree::Leaf),
            right: Box::new(Tree::Leaf),
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> Key {
        self.key
    }

    /// The subtree holding every smaller key.
    pub fn left(&self) -> &Tree {
        &self.left
    }

    /// The subtree holding every larger key.
    pub fn right(&self) -> &Tree {
        &self.right
    }

    /// Follows left children until there are none.
    fn min_key(&self) -> Key {
        let mut node = self;
        while let Tree::Node(left) = node.left.as_ref() {
            node = left;
        }
        node.key
    }

    /// Follows right children until there are none.
    fn max_key(&self) -> Key {
        let mut node = self;
        while let Tree::Node(right) = node.right.as_ref() {
            node = right;
        }
        node.key
    }
}

// The derived drop recurses once per level, which a long chain of increasing
// keys turns into a stack overflow. Detached subtrees are parked on a heap
// stack instead, so each node is dropped with two leaf children.
impl Drop for Node {
    fn drop(&mut self) {
        fn detach(node: &mut Node, pending: &mut Vec<Tree>) {
            for child in [&mut node.left, &mut node.right] {
                if !child.is_empty() {
                    pending.push(mem::take(&mut **child));
                }
            }
        }

        let mut pending = Vec::new();
        detach(self, &mut pending);
        while let Some(mut tree) = pending.pop() {
            if let Tree::Node(n) = &mut tree {
                detach(n, &mut pending);
            }
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

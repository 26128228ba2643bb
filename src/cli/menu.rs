//! The numbered menu: one [`Session`] owns the tree and every choice the user
//! makes is turned into a [`Command`] and dispatched against it.

use std::fmt;
use std::io::{BufRead, Write};

use tracing::{debug, info, instrument, warn};

use crate::cli::error::CliResult;
use crate::cli::input::{Token, Tokens};
use crate::render::{self, Layout, Limits, EMPTY_NOTICE};
use crate::tree::{Key, Order, Tree};

/// Everything the menu offers, in the order it is listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Add a key.
    Insert,
    /// Remove a key.
    Delete,
    /// Report whether a key is present.
    Search,
    /// Print the keys in one of the depth-first orders.
    Traverse(Order),
    /// Print the smallest key.
    Min,
    /// Print the largest key.
    Max,
    /// Print the height.
    Height,
    /// Draw the tree.
    Visualize(Layout),
    /// End the session.
    Exit,
}

impl Command {
    /// Every command, indexed by its menu number minus one.
    pub const ALL: [Self; 12] = [
        Self::Insert,
        Self::Delete,
        Self::Search,
        Self::Traverse(Order::Inorder),
        Self::Traverse(Order::Preorder),
        Self::Traverse(Order::Postorder),
        Self::Min,
        Self::Max,
        Self::Height,
        Self::Visualize(Layout::Grid),
        Self::Visualize(Layout::Level),
        Self::Exit,
    ];

    /// The command listed under menu number `choice`.
    pub fn from_choice(choice: Key) -> Option<Self> {
        let index = usize::try_from(choice).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// Whether the command reads from the tree and so needs it to be non-empty.
    fn needs_keys(self) -> bool {
        !matches!(self, Self::Insert | Self::Exit)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Insert => "Insert a number",
            Self::Delete => "Delete a number",
            Self::Search => "Search for a number",
            Self::Traverse(Order::Inorder) => "Display inorder traversal",
            Self::Traverse(Order::Preorder) => "Display preorder traversal",
            Self::Traverse(Order::Postorder) => "Display postorder traversal",
            Self::Min => "Find minimum value",
            Self::Max => "Find maximum value",
            Self::Height => "Calculate height of the tree",
            Self::Visualize(Layout::Grid) => "Visualize tree (Primary)",
            Self::Visualize(Layout::Level) => "Visualize tree (Alternative)",
            Self::Exit => "Exit",
        };
        f.write_str(label)
    }
}

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// The state of one interactive run: the tree plus the settings that shape
/// how it is seeded and drawn.
#[derive(Debug)]
pub struct Session {
    tree: Tree,
    limits: Limits,
    sentinel: Key,
}

impl Session {
    /// A session starting from `tree`.
    pub fn new(tree: Tree, limits: Limits, sentinel: Key) -> Self {
        Self {
            tree,
            limits,
            sentinel,
        }
    }

    /// The tree as it stands.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Prints the greeting.
    pub fn banner<W: Write>(&self, out: &mut W) -> CliResult<()> {
        writeln!(out, "Binary Search Tree Operations")?;
        writeln!(out, "-----------------------------")?;
        Ok(())
    }

    /// Inserts keys until the sentinel or the end of input.
    #[instrument(level = "debug", skip_all, fields(sentinel = self.sentinel))]
    pub fn seed<R: BufRead, W: Write>(
        &mut self,
        tokens: &mut Tokens<R>,
        out: &mut W,
    ) -> CliResult<()> {
        writeln!(
            out,
            "Enter numbers to insert into BST (enter {} to stop):",
            self.sentinel
        )?;
        out.flush()?;

        while let Some(token) = tokens.next_token()? {
            match token {
                Token::Key(key) if key == self.sentinel => break,
                Token::Key(key) => {
                    debug!(key, "seeding");
                    self.tree = std::mem::take(&mut self.tree).insert(key);
                }
                Token::Invalid(word) => {
                    warn!(%word, "ignoring non-integer seed");
                    writeln!(out, "Invalid input! Please enter an integer.")?;
                }
            }
        }
        info!(keys = self.tree.len(), "seeded");
        Ok(())
    }

    /// Shows the menu and runs commands until Exit or the end of input.
    #[instrument(level = "debug", skip_all)]
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        tokens: &mut Tokens<R>,
        out: &mut W,
    ) -> CliResult<()> {
        loop {
            Self::print_menu(out)?;
            let choice = match tokens.next_token()? {
                None => {
                    debug!("input closed");
                    writeln!(out)?;
                    return Ok(());
                }
                Some(Token::Invalid(word)) => {
                    warn!(%word, "non-integer menu choice");
                    writeln!(out, "Invalid input! Please enter an integer.")?;
                    continue;
                }
                Some(Token::Key(choice)) => choice,
            };

            let Some(command) = Command::from_choice(choice) else {
                writeln!(out, "Invalid choice! Please try again.")?;
                continue;
            };
            if self.dispatch(command, tokens, out)? == Flow::Stop {
                return Ok(());
            }
        }
    }

    fn print_menu<W: Write>(out: &mut W) -> CliResult<()> {
        writeln!(out, "\nBST Operations Menu:")?;
        for (i, command) in Command::ALL.iter().enumerate() {
            writeln!(out, "{}. {command}", i + 1)?;
        }
        write!(out, "Enter your choice: ")?;
        out.flush()?;
        Ok(())
    }

    fn dispatch<R: BufRead, W: Write>(
        &mut self,
        command: Command,
        tokens: &mut Tokens<R>,
        out: &mut W,
    ) -> CliResult<Flow> {
        debug!(?command, "dispatching");
        if command.needs_keys() && self.tree.is_empty() {
            writeln!(out, "{EMPTY_NOTICE}")?;
            return Ok(Flow::Continue);
        }

        match command {
            Command::Insert => {
                let Some(key) = Self::prompt_key(tokens, out, "insert")? else {
                    return Ok(Flow::Continue);
                };
                self.tree = std::mem::take(&mut self.tree).insert(key);
                info!(key, "inserted");
                writeln!(out, "{key} inserted successfully.")?;
            }
            Command::Delete => {
                let Some(key) = Self::prompt_key(tokens, out, "delete")? else {
                    return Ok(Flow::Continue);
                };
                if self.tree.contains(key) {
                    self.tree = std::mem::take(&mut self.tree).delete(key);
                    info!(key, "deleted");
                    writeln!(out, "{key} deleted successfully.")?;
                } else {
                    writeln!(out, "{key} not found in the tree.")?;
                }
            }
            Command::Search => {
                let Some(key) = Self::prompt_key(tokens, out, "search")? else {
                    return Ok(Flow::Continue);
                };
                if self.tree.contains(key) {
                    writeln!(out, "{key} found in the tree.")?;
                } else {
                    writeln!(out, "{key} not found in the tree.")?;
                }
            }
            Command::Traverse(order) => {
                let keys: String = self
                    .tree
                    .traverse(order)
                    .iter()
                    .map(|key| format!("{key} "))
                    .collect();
                writeln!(out, "{order}: {keys}")?;
            }
            Command::Min => writeln!(out, "Minimum value: {}", self.tree.min()?)?,
            Command::Max => writeln!(out, "Maximum value: {}", self.tree.max()?)?,
            Command::Height => writeln!(out, "Height of the tree: {}", self.tree.height())?,
            Command::Visualize(layout) => {
                match render::visualize(&self.tree, layout, &self.limits) {
                    Ok(picture) => write!(out, "{picture}")?,
                    Err(e) => {
                        warn!(%layout, error = %e, "cannot draw tree");
                        writeln!(out, "Cannot draw the tree: {e}")?;
                    }
                }
            }
            Command::Exit => {
                writeln!(out, "Exiting the program...")?;
                return Ok(Flow::Stop);
            }
        }
        Ok(Flow::Continue)
    }

    /// Asks for the key to `verb`. `None` means no usable key was entered.
    fn prompt_key<R: BufRead, W: Write>(
        tokens: &mut Tokens<R>,
        out: &mut W,
        verb: &str,
    ) -> CliResult<Option<Key>> {
        write!(out, "Enter the number to {verb}: ")?;
        out.flush()?;
        match tokens.next_token()? {
            Some(Token::Key(key)) => Ok(Some(key)),
            Some(Token::Invalid(word)) => {
                warn!(%word, "non-integer key");
                writeln!(out, "Invalid input! Please enter an integer.")?;
                Ok(None)
            }
            None => {
                writeln!(out)?;
                Ok(None)
            }
        }
    }
}

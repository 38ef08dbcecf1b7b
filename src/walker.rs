//! Capabilities the generator consumes from the automaton side.
//!
//! Building the automaton of a declarative specification, bounding its run
//! lengths and stepping through it at random all happen outside this crate.
//! The generator only needs a walker it can rewind and step, plus an archive
//! translating the walker's symbols into task names.
//!
//! # Example
//!
//! ```
//! use declare_logmaker::{BoundedWalker, Symbol, TaskCharArchive, SymbolArchive};
//!
//! /// Always walks `a b` and stops.
//! struct Fixed {
//!     pos: usize,
//! }
//!
//! impl BoundedWalker for Fixed {
//!     fn reset_to_start(&mut self) {
//!         self.pos = 0;
//!     }
//!
//!     fn step(&mut self) -> Option<Symbol> {
//!         let next = ['a', 'b'].get(self.pos).copied();
//!         self.pos += 1;
//!         next
//!     }
//! }
//!
//! let archive: TaskCharArchive = [('a', "Send docs"), ('b', "Receive grant")]
//!     .into_iter()
//!     .collect();
//! assert_eq!(archive.resolve('b'), Some("Receive grant"));
//! ```

use crate::model::Symbol;
use std::collections::BTreeMap;

/// A random walk over an automaton whose runs are already bounded to the
/// configured trace lengths.
pub trait BoundedWalker {
    /// Rewind the walk to the automaton's initial state.
    fn reset_to_start(&mut self);

    /// Take one step. Returns the symbol of the fired transition, or `None`
    /// once the walk decides to end the trace.
    fn step(&mut self) -> Option<Symbol>;
}

impl<W: BoundedWalker + ?Sized> BoundedWalker for &mut W {
    fn reset_to_start(&mut self) {
        (**self).reset_to_start();
    }

    fn step(&mut self) -> Option<Symbol> {
        (**self).step()
    }
}

impl<W: BoundedWalker + ?Sized> BoundedWalker for Box<W> {
    fn reset_to_start(&mut self) {
        (**self).reset_to_start();
    }

    fn step(&mut self) -> Option<Symbol> {
        (**self).step()
    }
}

/// Translation table from walk symbols to task names.
///
/// The mapping must stay fixed for the whole generation run.
pub trait SymbolArchive {
    /// Task name for `symbol`, if the archive knows it.
    fn resolve(&self, symbol: Symbol) -> Option<&str>;

    /// The full mapping, in the order it should appear in legends.
    fn entries(&self) -> Vec<(Symbol, &str)>;
}

/// In-memory [`SymbolArchive`] ordered by symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCharArchive {
    tasks: BTreeMap<Symbol, String>,
}

impl TaskCharArchive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `symbol` to `task_name`, returning the previous task if any.
    pub fn insert(&mut self, symbol: Symbol, task_name: impl Into<String>) -> Option<String> {
        self.tasks.insert(symbol, task_name.into())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(Symbol, S)> for TaskCharArchive {
    fn from_iter<I: IntoIterator<Item = (Symbol, S)>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().map(|(c, name)| (c, name.into())).collect(),
        }
    }
}

impl SymbolArchive for TaskCharArchive {
    fn resolve(&self, symbol: Symbol) -> Option<&str> {
        self.tasks.get(&symbol).map(String::as_str)
    }

    fn entries(&self) -> Vec<(Symbol, &str)> {
        self.tasks.iter().map(|(c, name)| (*c, name.as_str())).collect()
    }
}

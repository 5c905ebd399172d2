//! Symbol tables mapping `i32` keys to `i32` values.
//!
//! Three interchangeable implementations share the [`SymbolTable`] trait:
//!
//! * [`BstTable`]: binary search tree, ordered by key, with Hibbard deletion.
//!   All operations are linear in the height of the tree.
//! * [`ListTable`]: sequential search through a singly linked list.
//! * [`HashTable`]: separate chaining over a fixed number of buckets.
//!
//! Each table also provides a cursor implementing [`TableCursor`], which can
//! be consumed as a standard iterator through [`Entries`].

pub use crate::error_types::{SessionError, TableError};
use enum_dispatch::*;

mod bsttable;
mod hashtable;
mod listing;
mod lltable;
mod session;
mod settings;

pub use bsttable::*;
pub use hashtable::*;
pub use listing::*;
pub use lltable::*;
pub use session::*;
pub use settings::*;

#[enum_dispatch]
pub trait SymbolTable {
    /// Inserts or updates the entry for `key`.  Returns true on insertion
    /// and false when an existing value was overwritten.
    fn put(&mut self, key: i32, value: i32) -> bool;

    /// Removes the entry for `key`.  Returns false if there was none.
    fn delete(&mut self, key: i32) -> bool;

    /// Value associated with `key`.
    fn get(&self, key: i32) -> Result<i32, TableError>;

    fn contains(&self, key: i32) -> bool;

    /// Number of entries.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// All entries, in the traversal order of the table's cursor.
    fn entries(&self) -> Vec<(i32, i32)>;
}

/// Explicit-state traversal over the entries of a table.
///
/// A cursor is either positioned on an entry or exhausted.  Accessors fail
/// with [`TableError::IteratorExhausted`] once the traversal has completed,
/// and advancing an exhausted cursor does nothing.
pub trait TableCursor {
    fn is_exhausted(&self) -> bool;
    fn current_key(&self) -> Result<i32, TableError>;
    fn current_value(&self) -> Result<i32, TableError>;
    fn advance(&mut self);
}

/// Iterator adapter over any [`TableCursor`].
#[derive(Debug, Clone)]
pub struct Entries<C> {
    cursor: C,
}

impl<C: TableCursor> Entries<C> {
    pub fn new(cursor: C) -> Self {
        Self { cursor }
    }
}

impl<C: TableCursor> Iterator for Entries<C> {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor.current_key().ok()?;
        let value = self.cursor.current_value().ok()?;
        self.cursor.advance();
        Some((key, value))
    }
}

/// Any of the supported symbol tables, selected at runtime.
#[enum_dispatch(SymbolTable)]
#[derive(Debug, Clone)]
pub enum AnySymbolTable {
    BstTable,
    ListTable,
    HashTable,
}

impl AnySymbolTable {
    /// Creates an empty table of the kind given in `settings`.
    pub fn new(settings: &TableSettings) -> Self {
        match settings.kind {
            TableKind::Bst => BstTable::new().into(),
            TableKind::List => ListTable::new().into(),
            TableKind::Hash => HashTable::with_buckets(settings.hash_buckets).into(),
        }
    }

    pub fn kind(&self) -> TableKind {
        match self {
            AnySymbolTable::BstTable(_) => TableKind::Bst,
            AnySymbolTable::ListTable(_) => TableKind::List,
            AnySymbolTable::HashTable(_) => TableKind::Hash,
        }
    }
}

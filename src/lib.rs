//! __balgos__ is a collection of classic data structures from the basic
//! algorithms course, implemented in safe Rust and cross-checked against the
//! standard library containers.
//!
//! ## Disjoint-set forest
//!
//! [`UnionFind`](unionfind::UnionFind) partitions the sites `0..n` into
//! disjoint components.  Unions are weighted: the root of the smaller tree is
//! always attached under the root of the larger tree, so the height of every
//! tree stays below `log2(n)` even though `find` performs no path
//! compression.
//!
//! ```
//! use balgos::unionfind::UnionFind;
//!
//! let mut uf = UnionFind::new(3);
//! uf.union(0, 1).unwrap();
//! assert!(uf.connected(0, 1).unwrap());
//! assert_eq!(uf.count(), 2);
//! ```
//!
//! ## Symbol tables
//!
//! [`BstTable`](symtable::BstTable) maps `i32` keys to `i32` values using a
//! binary search tree with Hibbard deletion, and iterates in ascending key
//! order.  [`ListTable`](symtable::ListTable) and
//! [`HashTable`](symtable::HashTable) implement the same
//! [`SymbolTable`](symtable::SymbolTable) interface using sequential search
//! and separate chaining.
//!
//! ```
//! use balgos::symtable::{BstTable, SymbolTable};
//!
//! let mut st = BstTable::new();
//! st.put(3, 78);
//! st.put(1, 27);
//! assert!(!st.put(3, 5));
//! assert_eq!(st.iter().collect::<Vec<_>>(), vec![(1, 27), (3, 5)]);
//! ```
//!
//! ## Output
//!
//! [`TableSession`](symtable::TableSession) and
//! [`ForestSession`](unionfind::ForestSession) wrap the data structures with
//! a configurable print target (stdout, file, stream, buffer or sink) for
//! listings and, when `verbose` is set, a log of every operation.  See
//! [`ConfigurablePrintTarget`](io::ConfigurablePrintTarget).
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

pub mod error_types;
pub mod io;
pub mod symtable;
pub mod unionfind;

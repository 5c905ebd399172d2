//! Text listings of table contents.
//!
//! Listings are always sorted, so every table kind produces the same text
//! for the same contents:
//!
//! * keys or values: `[1, 2, 3]`
//! * entries, by key: `[(1;27), (2;37)]`

use super::SymbolTable;
use itertools::Itertools;

/// Sorted keys of `table`.
pub fn format_keys<S: SymbolTable + ?Sized>(table: &S) -> String {
    let keys = table.entries().into_iter().map(|(k, _)| k).sorted();
    format!("[{}]", keys.format(", "))
}

/// Sorted values of `table`.
pub fn format_values<S: SymbolTable + ?Sized>(table: &S) -> String {
    let values = table.entries().into_iter().map(|(_, v)| v).sorted();
    format!("[{}]", values.format(", "))
}

/// Entries of `table` in ascending key order.
pub fn format_entries<S: SymbolTable + ?Sized>(table: &S) -> String {
    let entries = table
        .entries()
        .into_iter()
        .sorted_by_key(|&(k, _)| k)
        .map(|(k, v)| format!("({};{})", k, v));
    format!("[{}]", entries.format(", "))
}

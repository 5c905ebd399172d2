use super::{Entries, SymbolTable, TableCursor};
use crate::error_types::TableError;

/// Default number of buckets of a [`HashTable`].
pub const DEFAULT_HASH_BUCKETS: usize = 37;

// Knuth's multiplicative constant, applied with 32 bit wraparound
const HASH_MULTIPLIER: i64 = 2654435761;

/// Symbol table using separate chaining.
///
/// The number of buckets is fixed when the table is created.  Operations
/// are amortized `O(1)` as long as the hash spreads keys evenly, and degrade
/// towards `O(n / buckets)` as the table fills up.
#[derive(Debug, Clone)]
pub struct HashTable {
    buckets: Vec<Vec<(i32, i32)>>,
    size: usize,
}

impl Default for HashTable {
    fn default() -> Self {
        Self::with_buckets(DEFAULT_HASH_BUCKETS)
    }
}

impl HashTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table with `buckets` chains.  At least one bucket is
    /// always allocated.
    pub fn with_buckets(buckets: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); buckets.max(1)],
            size: 0,
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Cursor over the entries, bucket by bucket.
    pub fn cursor(&self) -> HashCursor<'_> {
        HashCursor {
            table: self,
            bucket: self.next_occupied(0),
            pos: 0,
        }
    }

    pub fn iter(&self) -> Entries<HashCursor<'_>> {
        Entries::new(self.cursor())
    }

    fn bucket_of(&self, key: i32) -> usize {
        hash_key(key, self.buckets.len())
    }

    fn chain(&self, key: i32) -> &[(i32, i32)] {
        &self.buckets[self.bucket_of(key)]
    }

    // first non-empty bucket at or after `start`, or the bucket count
    fn next_occupied(&self, start: usize) -> usize {
        (start..self.buckets.len())
            .find(|&b| !self.buckets[b].is_empty())
            .unwrap_or(self.buckets.len())
    }
}

// bucket index for `key` among `len` buckets
fn hash_key(key: i32, len: usize) -> usize {
    let h = (key as i64).wrapping_mul(HASH_MULTIPLIER) as i32;
    h.unsigned_abs() as usize % len
}

impl SymbolTable for HashTable {
    fn put(&mut self, key: i32, value: i32) -> bool {
        let b = self.bucket_of(key);
        let chain = &mut self.buckets[b];
        match chain.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => {
                entry.1 = value;
                false
            }
            None => {
                chain.push((key, value));
                self.size += 1;
                true
            }
        }
    }

    fn delete(&mut self, key: i32) -> bool {
        let b = self.bucket_of(key);
        let chain = &mut self.buckets[b];
        match chain.iter().position(|&(k, _)| k == key) {
            Some(pos) => {
                chain.remove(pos);
                self.size -= 1;
                true
            }
            None => false,
        }
    }

    fn get(&self, key: i32) -> Result<i32, TableError> {
        self.chain(key)
            .iter()
            .find(|&&(k, _)| k == key)
            .map(|&(_, v)| v)
            .ok_or(TableError::KeyNotFound(key))
    }

    fn contains(&self, key: i32) -> bool {
        self.chain(key).iter().any(|&(k, _)| k == key)
    }

    fn size(&self) -> usize {
        self.size
    }

    fn entries(&self) -> Vec<(i32, i32)> {
        self.iter().collect()
    }
}

/// Cursor over a [`HashTable`].
#[derive(Debug, Clone)]
pub struct HashCursor<'a> {
    table: &'a HashTable,
    // equal to the bucket count once exhausted
    bucket: usize,
    pos: usize,
}

impl HashCursor<'_> {
    fn current(&self) -> Result<(i32, i32), TableError> {
        self.table
            .buckets
            .get(self.bucket)
            .and_then(|chain| chain.get(self.pos))
            .copied()
            .ok_or(TableError::IteratorExhausted)
    }
}

impl TableCursor for HashCursor<'_> {
    fn is_exhausted(&self) -> bool {
        self.bucket >= self.table.buckets.len()
    }

    fn current_key(&self) -> Result<i32, TableError> {
        self.current().map(|(k, _)| k)
    }

    fn current_value(&self) -> Result<i32, TableError> {
        self.current().map(|(_, v)| v)
    }

    fn advance(&mut self) {
        if self.is_exhausted() {
            return;
        }
        self.pos += 1;
        if self.pos >= self.table.buckets[self.bucket].len() {
            self.bucket = self.table.next_occupied(self.bucket + 1);
            self.pos = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_key() {
        assert_eq!(hash_key(0, 37), 0);
        // 2654435761 wraps to -1640531535 as an i32
        assert_eq!(hash_key(1, 37), 1640531535 % 37);
        assert_eq!(hash_key(-1, 37), 1640531535 % 37);
        assert!(hash_key(i32::MIN, 37) < 37);
        assert_eq!(hash_key(i32::MAX, 1), 0);
    }

    #[test]
    fn test_collisions() {
        // a single bucket degenerates to sequential search
        let mut table = HashTable::with_buckets(1);
        for key in 0..10 {
            assert!(table.put(key, key * 2));
        }
        assert!(!table.put(4, 0));
        assert!(table.delete(5));
        assert_eq!(table.size(), 9);
        assert_eq!(table.get(4), Ok(0));
        assert_eq!(table.get(5), Err(TableError::KeyNotFound(5)));
        assert_eq!(
            table.entries(),
            vec![(0, 0), (1, 2), (2, 4), (3, 6), (4, 0), (6, 12), (7, 14), (8, 16), (9, 18)]
        );
    }

    #[test]
    fn test_zero_buckets() {
        let mut table = HashTable::with_buckets(0);
        assert_eq!(table.bucket_count(), 1);
        assert!(table.put(1, 1));
        assert!(table.contains(1));
    }

    #[test]
    fn test_cursor_skips_empty_buckets() {
        let mut table = HashTable::new();
        assert!(table.cursor().is_exhausted());

        for key in [-40, 3, 17, 1000, 12345] {
            table.put(key, key);
        }
        let mut seen: Vec<i32> = table.iter().map(|(k, _)| k).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![-40, 3, 17, 1000, 12345]);

        let mut cursor = table.cursor();
        for _ in 0..5 {
            assert!(!cursor.is_exhausted());
            cursor.advance();
        }
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.current_key(), Err(TableError::IteratorExhausted));
        cursor.advance();
        assert!(cursor.is_exhausted());
    }
}

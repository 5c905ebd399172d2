use super::{Entries, SymbolTable, TableCursor};
use crate::error_types::TableError;

struct ListNode {
    key: i32,
    value: i32,
    next: Option<Box<ListNode>>,
}

/// Symbol table using sequential search through a singly linked list.
///
/// New keys are pushed at the head of the list, so the cursor visits entries
/// from the most recently inserted key to the oldest one.  Every operation
/// is `O(n)`.
#[derive(Default)]
pub struct ListTable {
    head: Option<Box<ListNode>>,
    size: usize,
}

impl ListTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> ListCursor<'_> {
        ListCursor {
            node: self.head.as_deref(),
        }
    }

    pub fn iter(&self) -> Entries<ListCursor<'_>> {
        Entries::new(self.cursor())
    }

    fn nodes(&self) -> impl Iterator<Item = &ListNode> {
        std::iter::successors(self.head.as_deref(), |node| node.next.as_deref())
    }
}

impl SymbolTable for ListTable {
    fn put(&mut self, key: i32, value: i32) -> bool {
        let mut cur = self.head.as_deref_mut();
        while let Some(node) = cur {
            if node.key == key {
                node.value = value;
                return false;
            }
            cur = node.next.as_deref_mut();
        }

        let next = self.head.take();
        self.head = Some(Box::new(ListNode { key, value, next }));
        self.size += 1;
        true
    }

    fn delete(&mut self, key: i32) -> bool {
        let Some(position) = self.nodes().position(|node| node.key == key) else {
            return false;
        };

        let mut link = &mut self.head;
        for _ in 0..position {
            match link {
                Some(node) => link = &mut node.next,
                None => return false,
            }
        }
        if let Some(node) = link.take() {
            *link = node.next;
        }

        self.size -= 1;
        true
    }

    fn get(&self, key: i32) -> Result<i32, TableError> {
        self.nodes()
            .find(|node| node.key == key)
            .map(|node| node.value)
            .ok_or(TableError::KeyNotFound(key))
    }

    fn contains(&self, key: i32) -> bool {
        self.nodes().any(|node| node.key == key)
    }

    fn size(&self) -> usize {
        self.size
    }

    fn entries(&self) -> Vec<(i32, i32)> {
        self.iter().collect()
    }
}

impl std::fmt::Debug for ListNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ListNode({}, {})", self.key, self.value)
    }
}

// Clone, Debug and Drop all walk the list iteratively.  The derived versions
// recurse once per node and overflow the stack on long lists.

impl Clone for ListTable {
    fn clone(&self) -> Self {
        let entries: Vec<(i32, i32)> = self.nodes().map(|node| (node.key, node.value)).collect();
        let mut table = ListTable::new();
        for (key, value) in entries.into_iter().rev() {
            let next = table.head.take();
            table.head = Some(Box::new(ListNode { key, value, next }));
        }
        table.size = self.size;
        table
    }
}

impl std::fmt::Debug for ListTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.nodes().map(|node| (node.key, node.value)))
            .finish()
    }
}

impl Drop for ListTable {
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

/// Cursor over a [`ListTable`], from head to tail.
#[derive(Debug, Clone)]
pub struct ListCursor<'a> {
    node: Option<&'a ListNode>,
}

impl TableCursor for ListCursor<'_> {
    fn is_exhausted(&self) -> bool {
        self.node.is_none()
    }

    fn current_key(&self) -> Result<i32, TableError> {
        self.node
            .map(|node| node.key)
            .ok_or(TableError::IteratorExhausted)
    }

    fn current_value(&self) -> Result<i32, TableError> {
        self.node
            .map(|node| node.value)
            .ok_or(TableError::IteratorExhausted)
    }

    fn advance(&mut self) {
        self.node = self.node.and_then(|node| node.next.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symtable::AnySymbolTable;

    #[test]
    fn test_head_insertion_order() {
        let mut table = ListTable::new();
        assert!(table.put(1, 10));
        assert!(table.put(2, 20));
        assert!(table.put(3, 30));
        assert!(!table.put(1, 11));
        assert_eq!(table.entries(), vec![(3, 30), (2, 20), (1, 11)]);
    }

    #[test]
    fn test_delete_positions() {
        let mut table = ListTable::new();
        for key in 0..5 {
            table.put(key, key);
        }
        // list is 4 3 2 1 0: remove head, middle and tail
        assert!(table.delete(4));
        assert!(table.delete(2));
        assert!(table.delete(0));
        assert!(!table.delete(0));
        assert_eq!(table.entries(), vec![(3, 3), (1, 1)]);
        assert_eq!(table.size(), 2);
        assert_eq!(table.get(2), Err(TableError::KeyNotFound(2)));
    }

    #[test]
    fn test_cursor() {
        let mut table = ListTable::new();
        let cursor = table.cursor();
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.current_value(), Err(TableError::IteratorExhausted));

        table.put(7, 49);
        let mut cursor = table.cursor();
        assert_eq!(cursor.current_key(), Ok(7));
        assert_eq!(cursor.current_value(), Ok(49));
        cursor.advance();
        assert!(cursor.is_exhausted());
        cursor.advance();
        assert_eq!(cursor.current_key(), Err(TableError::IteratorExhausted));
    }

    #[test]
    fn test_long_list_drop() {
        let mut table = ListTable::new();
        for key in 0..200_000 {
            table.head = Some(Box::new(ListNode {
                key,
                value: key,
                next: table.head.take(),
            }));
        }
        drop(table);
    }

    #[test]
    fn test_long_list_clone_and_format() {
        let mut table = ListTable::new();
        for key in 0..150_000 {
            table.head = Some(Box::new(ListNode {
                key,
                value: -key,
                next: table.head.take(),
            }));
            table.size += 1;
        }

        let copy = AnySymbolTable::from(table).clone();
        assert_eq!(copy.size(), 150_000);
        assert_eq!(copy.get(0), Ok(0));
        assert_eq!(copy.get(149_999), Ok(-149_999));

        let text = format!("{:?}", copy);
        assert!(text.starts_with("ListTable([(149999, -149999), (149998, -149998)"));
        assert!(text.ends_with("(0, 0)])"));
    }

    #[test]
    fn test_clone_keeps_order() {
        let mut table = ListTable::new();
        for key in [5, 1, 4] {
            table.put(key, key * 2);
        }
        let mut copy = table.clone();
        assert_eq!(copy.entries(), table.entries());
        assert_eq!(copy.size(), 3);

        // the copy is independent of the original
        copy.delete(1);
        assert_eq!(table.entries(), vec![(4, 8), (1, 2), (5, 10)]);
        assert_eq!(format!("{:?}", copy), "[(4, 8), (5, 10)]");
    }
}

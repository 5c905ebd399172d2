use super::{Entries, SymbolTable, TableCursor};
use crate::error_types::TableError;
use std::cmp::Ordering;

// Nodes live in an arena and refer to each other by slot index.  The
// left / right links are the ownership edges of the tree; the parent link
// is a back-reference used only to walk upwards during in-order traversal.
type NodeId = usize;

#[derive(Debug, Clone)]
struct Node {
    key: i32,
    value: i32,
    left: Option<NodeId>,
    right: Option<NodeId>,
    parent: Option<NodeId>,
}

/// Symbol table backed by an unbalanced binary search tree.
///
/// For every node, all keys in its left subtree are strictly smaller and all
/// keys in its right subtree strictly larger than its own key.  The cost of
/// every operation is linear in the height of the tree: about `ln(n)` for
/// random insertion orders, but `n` in the worst case (e.g. sorted keys).
/// All tree walks are iterative, so degenerate trees are safe to use.
#[derive(Debug, Clone, Default)]
pub struct BstTable {
    nodes: Vec<Node>,
    // vacated arena slots, available for reuse
    free: Vec<NodeId>,
    root: Option<NodeId>,
    size: usize,
}

impl BstTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor positioned on the smallest key.
    pub fn cursor(&self) -> BstCursor<'_> {
        BstCursor {
            table: self,
            node: self.first(),
        }
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> Entries<BstCursor<'_>> {
        Entries::new(self.cursor())
    }

    /// Smallest key in the table, if any.
    pub fn min_key(&self) -> Option<i32> {
        self.first().map(|id| self.nodes[id].key)
    }

    /// Largest key in the table, if any.
    pub fn max_key(&self) -> Option<i32> {
        let mut id = self.root?;
        while let Some(right) = self.nodes[id].right {
            id = right;
        }
        Some(self.nodes[id].key)
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[id];
            stack.extend(node.left.map(|c| (c, depth + 1)));
            stack.extend(node.right.map(|c| (c, depth + 1)));
        }
        height
    }

    fn first(&self) -> Option<NodeId> {
        self.root.map(|root| self.leftmost(root))
    }

    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.nodes[id].left {
            id = left;
        }
        id
    }

    fn find_node(&self, key: i32) -> Option<NodeId> {
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = &self.nodes[id];
            cur = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    // In-order successor:
    // - with a right child, the leftmost node of the right subtree
    // - otherwise the first ancestor reached from its left subtree
    fn successor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self.nodes[id].right {
            return Some(self.leftmost(right));
        }
        let mut child = id;
        let mut cur = self.nodes[id].parent;
        while let Some(parent) = cur {
            if self.nodes[parent].left == Some(child) {
                return Some(parent);
            }
            child = parent;
            cur = self.nodes[parent].parent;
        }
        None
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = node;
                id
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    // Puts `child` in the slot of `id` within its parent (or at the root),
    // then releases `id`.  `id` must have at most one child, namely `child`.
    fn splice(&mut self, id: NodeId, child: Option<NodeId>) {
        let parent = self.nodes[id].parent;
        if let Some(c) = child {
            self.nodes[c].parent = parent;
        }
        match parent {
            None => self.root = child,
            Some(p) if self.nodes[p].left == Some(id) => self.nodes[p].left = child,
            Some(p) => self.nodes[p].right = child,
        }

        let node = &mut self.nodes[id];
        node.left = None;
        node.right = None;
        node.parent = None;
        self.free.push(id);
    }
}

impl SymbolTable for BstTable {
    fn put(&mut self, key: i32, value: i32) -> bool {
        let mut parent = None;
        let mut cur = self.root;
        let mut ordering = Ordering::Equal;

        while let Some(id) = cur {
            let node = &mut self.nodes[id];
            ordering = key.cmp(&node.key);
            cur = match ordering {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => {
                    node.value = value;
                    return false;
                }
            };
            parent = Some(id);
        }

        let id = self.alloc(Node {
            key,
            value,
            left: None,
            right: None,
            parent,
        });
        match parent {
            None => self.root = Some(id),
            Some(p) if ordering == Ordering::Less => self.nodes[p].left = Some(id),
            Some(p) => self.nodes[p].right = Some(id),
        }
        self.size += 1;
        true
    }

    // Hibbard deletion.  A node with at most one child is replaced by that
    // child.  A node with two children takes the key / value of its
    // in-order successor, and the successor (which has no left child) is
    // spliced out of the right subtree instead.
    fn delete(&mut self, key: i32) -> bool {
        let Some(id) = self.find_node(key) else {
            return false;
        };

        match (self.nodes[id].left, self.nodes[id].right) {
            (None, right) => self.splice(id, right),
            (left, None) => self.splice(id, left),
            (Some(_), Some(right)) => {
                let succ = self.leftmost(right);
                let (succ_key, succ_value) = (self.nodes[succ].key, self.nodes[succ].value);
                let node = &mut self.nodes[id];
                node.key = succ_key;
                node.value = succ_value;
                let succ_right = self.nodes[succ].right;
                self.splice(succ, succ_right);
            }
        }

        self.size -= 1;
        if self.size == 0 {
            // nothing is reachable: release the arena
            self.nodes.clear();
            self.free.clear();
        }
        true
    }

    fn get(&self, key: i32) -> Result<i32, TableError> {
        self.find_node(key)
            .map(|id| self.nodes[id].value)
            .ok_or(TableError::KeyNotFound(key))
    }

    fn contains(&self, key: i32) -> bool {
        self.find_node(key).is_some()
    }

    fn size(&self) -> usize {
        self.size
    }

    fn entries(&self) -> Vec<(i32, i32)> {
        self.iter().collect()
    }
}

impl FromIterator<(i32, i32)> for BstTable {
    fn from_iter<I: IntoIterator<Item = (i32, i32)>>(iter: I) -> Self {
        let mut table = BstTable::new();
        for (key, value) in iter {
            table.put(key, value);
        }
        table
    }
}

impl<'a> IntoIterator for &'a BstTable {
    type Item = (i32, i32);
    type IntoIter = Entries<BstCursor<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order cursor over a [`BstTable`].
#[derive(Debug, Clone)]
pub struct BstCursor<'a> {
    table: &'a BstTable,
    // None once the traversal is exhausted
    node: Option<NodeId>,
}

impl BstCursor<'_> {
    /// Repositions the cursor on the smallest key.
    pub fn restart(&mut self) {
        self.node = self.table.first();
    }
}

impl TableCursor for BstCursor<'_> {
    fn is_exhausted(&self) -> bool {
        self.node.is_none()
    }

    fn current_key(&self) -> Result<i32, TableError> {
        self.node
            .map(|id| self.table.nodes[id].key)
            .ok_or(TableError::IteratorExhausted)
    }

    fn current_value(&self) -> Result<i32, TableError> {
        self.node
            .map(|id| self.table.nodes[id].value)
            .ok_or(TableError::IteratorExhausted)
    }

    fn advance(&mut self) {
        self.node = self.node.and_then(|id| self.table.successor(id));
    }
}

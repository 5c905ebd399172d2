//! Disjoint-set forest with weighted union.
//!
//! Each set is a tree identified by its root site.  Every site has a single
//! parent, and a root is its own parent.  Finding the set of a site walks the
//! parent links up to the root, so the cost of every operation is linear in
//! the height of the tree.  To keep trees shallow, a union always attaches the
//! root of the smaller tree to the root of the larger one, which bounds the
//! height of any tree over `n` sites by `floor(log2(n))` links.
//!
//! No path compression is performed: [`UnionFind::find`] takes `&self` and
//! leaves the forest untouched.

pub use crate::error_types::{SessionError, UnionFindError};

mod session;
pub use session::*;

/// Weighted quick-union forest over the sites `0..n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionFind {
    parents: Vec<usize>,
    // only meaningful at roots
    sizes: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Creates a forest of `n` singleton components.
    pub fn new(n: usize) -> Self {
        Self {
            parents: (0..n).collect(),
            sizes: vec![1; n],
            count: n,
        }
    }

    /// Number of sites in the forest.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Number of disjoint components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the root of the tree containing `site`.
    pub fn find(&self, site: usize) -> Result<usize, UnionFindError> {
        self.check(site)?;
        Ok(self.root(site))
    }

    /// Merges the components of `p` and `q`.
    ///
    /// Returns `Ok(true)` if two distinct components were merged and
    /// `Ok(false)` if `p` and `q` were already connected.  When both trees
    /// have the same size the root of `q` is placed under the root of `p`;
    /// callers should not rely on which root survives.
    pub fn union(&mut self, p: usize, q: usize) -> Result<bool, UnionFindError> {
        let pr = self.find(p)?;
        let qr = self.find(q)?;

        if pr == qr {
            return Ok(false);
        }

        let merged = self.sizes[pr] + self.sizes[qr];
        if self.sizes[pr] < self.sizes[qr] {
            self.parents[pr] = qr;
            self.sizes[qr] = merged;
        } else {
            self.parents[qr] = pr;
            self.sizes[pr] = merged;
        }
        self.count -= 1;

        Ok(true)
    }

    /// Returns true if `p` and `q` belong to the same component.
    pub fn connected(&self, p: usize, q: usize) -> Result<bool, UnionFindError> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Number of sites in the component containing `site`.
    pub fn component_size(&self, site: usize) -> Result<usize, UnionFindError> {
        let root = self.find(site)?;
        Ok(self.sizes[root])
    }

    /// Number of parent links between `site` and its root.
    pub fn depth(&self, site: usize) -> Result<usize, UnionFindError> {
        self.check(site)?;
        let mut p = site;
        let mut hops = 0;
        while p != self.parents[p] {
            p = self.parents[p];
            hops += 1;
        }
        Ok(hops)
    }

    /// Iterator over the root of each site `0..n`, in site order.
    pub fn site_roots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).map(|site| self.root(site))
    }

    /// Iterator over the root site of every component, in increasing order.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.parents
            .iter()
            .enumerate()
            .filter(|&(i, &p)| i == p)
            .map(|(i, _)| i)
    }

    // `site` must be in range
    fn root(&self, site: usize) -> usize {
        let mut p = site;
        while p != self.parents[p] {
            p = self.parents[p];
        }
        p
    }

    fn check(&self, site: usize) -> Result<(), UnionFindError> {
        if site < self.len() {
            Ok(())
        } else {
            Err(UnionFindError::OutOfRange {
                site,
                len: self.len(),
            })
        }
    }
}

impl TryFrom<i64> for UnionFind {
    type Error = UnionFindError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        let n = usize::try_from(n).map_err(|_| UnionFindError::InvalidArgument(n))?;
        Ok(Self::new(n))
    }
}

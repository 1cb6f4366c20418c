//! Unbalanced binary search tree keyed by ISBN
//!
//! Smaller ids go left; equal or greater ids go right. Each node owns its two
//! subtrees through `Option<Box<Node>>`, so there are no parent pointers and
//! no shared nodes. Removing a node with two children copies the in-order
//! successor's record into the node and detaches the successor instead.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::mem;
use tracing::{debug, trace};

use super::record::{Isbn, Record};
use crate::{BookshelfError, Result};

/// What `Catalog::add` does with an ISBN that is already present
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Keep both; the newer record goes into the right subtree
    #[default]
    Allow,
    /// Refuse the insert with `BookshelfError::DuplicateIsbn`
    Reject,
}

type Link = Option<Box<Node>>;

#[derive(Debug)]
struct Node {
    record: Record,
    left: Link,
    right: Link,
}

impl Node {
    fn leaf(record: Record) -> Box<Self> {
        Box::new(Self {
            record,
            left: None,
            right: None,
        })
    }
}

/// Ordered in-memory book catalog
#[derive(Debug, Default)]
pub struct Catalog {
    root: Link,
    len: usize,
    policy: DuplicatePolicy,
}

impl Catalog {
    /// Create an empty catalog that allows duplicate ISBNs
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty catalog with the given duplicate policy for `add`
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            root: None,
            len: 0,
            policy,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Number of records in the catalog, duplicates included
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert a record as a new leaf. Never fails; equal ids descend right.
    pub fn insert(&mut self, record: Record) {
        trace!(isbn = %record.isbn, "inserting record");
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if record.isbn < node.record.isbn {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Node::leaf(record));
        self.len += 1;
    }

    /// Insert a record unless a node with the same ISBN already exists.
    ///
    /// Any node with an equal id lies on the insertion path, so one descent
    /// is enough to detect the duplicate.
    pub fn insert_unique(&mut self, record: Record) -> Result<()> {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match record.isbn.cmp(&node.record.isbn) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    debug!(isbn = %record.isbn, "rejecting duplicate record");
                    return Err(BookshelfError::DuplicateIsbn(record.isbn.value()));
                }
            };
        }
        *slot = Some(Node::leaf(record));
        self.len += 1;
        Ok(())
    }

    /// Insert according to the catalog's duplicate policy
    pub fn add(&mut self, record: Record) -> Result<()> {
        match self.policy {
            DuplicatePolicy::Allow => {
                self.insert(record);
                Ok(())
            }
            DuplicatePolicy::Reject => self.insert_unique(record),
        }
    }

    /// Exact-key lookup. Returns the first matching node met on the way down,
    /// which for duplicated ids is the earliest inserted one.
    pub fn find(&self, isbn: Isbn) -> Option<&Record> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match isbn.cmp(&node.record.isbn) {
                Ordering::Equal => return Some(&node.record),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    pub fn contains(&self, isbn: Isbn) -> bool {
        self.find(isbn).is_some()
    }

    /// Remove the first node carrying `isbn`.
    ///
    /// Returns the removed record, or `None` (leaving the tree untouched) when
    /// the id is absent.
    pub fn remove(&mut self, isbn: Isbn) -> Option<Record> {
        let slot = find_slot(&mut self.root, isbn)?;
        let target = slot.as_mut()?;

        let removed = if target.left.is_some() && target.right.is_some() {
            let successor = take_min(&mut target.right)?;
            trace!(isbn = %isbn, successor = %successor.isbn, "splicing in-order successor");
            mem::replace(&mut target.record, successor)
        } else {
            let mut node = slot.take()?;
            *slot = node.left.take().or_else(|| node.right.take());
            node.record
        };

        self.len -= 1;
        debug!(isbn = %isbn, remaining = self.len, "removed record");
        Some(removed)
    }

    /// Materialize every record in ascending ISBN order
    pub fn enumerate(&self) -> Vec<&Record> {
        self.iter().collect()
    }

    /// In-order iterator over the records
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Length of the longest root-to-leaf path; 0 for an empty catalog
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node, usize)> = Vec::new();
        stack.extend(self.root.as_deref().map(|n| (n, 1)));
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        height
    }

    pub fn clear(&mut self) {
        drop_iteratively(self.root.take());
        self.len = 0;
    }
}

/// Slot holding the first node with `isbn` on the search path
fn find_slot(mut slot: &mut Link, isbn: Isbn) -> Option<&mut Link> {
    loop {
        let ordering = isbn.cmp(&slot.as_deref()?.record.isbn);
        if ordering == Ordering::Equal {
            return Some(slot);
        }
        let node = slot.as_mut()?;
        slot = if ordering == Ordering::Less {
            &mut node.left
        } else {
            &mut node.right
        };
    }
}

/// Detach the leftmost node of a subtree, moving its right child into its slot
fn take_min(mut slot: &mut Link) -> Option<Record> {
    while slot.as_ref().is_some_and(|node| node.left.is_some()) {
        slot = &mut slot.as_mut()?.left;
    }
    let mut min = slot.take()?;
    *slot = min.right.take();
    Some(min.record)
}

// A degenerate tree is a linked list; the default recursive drop would walk it
// on the call stack.
fn drop_iteratively(root: Link) {
    let mut stack: Vec<Box<Node>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

impl Drop for Catalog {
    fn drop(&mut self) {
        drop_iteratively(self.root.take());
    }
}

impl Extend<Record> for Catalog {
    fn extend<T: IntoIterator<Item = Record>>(&mut self, iter: T) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl FromIterator<Record> for Catalog {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut catalog = Catalog::new();
        catalog.extend(iter);
        catalog
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order traversal driven by an explicit stack of pending ancestors
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    fn new(root: Option<&'a Node>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

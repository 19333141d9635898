//! An unbalanced BST holding a set of unique `i32` keys. Every node owns its children and no node
//! knows its parent. Operations that need a parent instead hold the parent's owning slot (the
//! `Option<Box<Node>>` the current node lives in) while they descend.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(1));
//!
//! // Inserting an existing key changes nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.size(), 1);
//!
//! // Removing a key hands it back.
//! assert_eq!(tree.remove(1), Some(1));
//! assert!(!tree.contains(1));
//! ```

use std::cmp::Ordering;
use std::iter::FusedIterator;

use log::trace;

use crate::error::{self, InvalidArgument};

type Link = Option<Box<Node>>;

pub(crate) struct Node {
    pub(crate) key: i32,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    fn new_boxed(key: i32) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
        })
    }
}

/// An ordered set of unique `i32` keys stored in a Binary Search Tree. The tree is never
/// rebalanced, so its shape depends entirely on the order keys are inserted in.
#[derive(Default)]
pub struct OrderedTree {
    root: Link,
    size: usize,
}

impl Drop for OrderedTree {
    fn drop(&mut self) {
        // Unlink nodes one at a time so a list-shaped tree doesn't drop recursively.
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl Clone for OrderedTree {
    /// Re-inserts the keys in pre-order, which rebuilds exactly the same shape.
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        let mut stack: Vec<&Node> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            tree.insert(node.key);
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        tree
    }
}

/// Two trees are equal when they hold the same keys, whatever their shapes.
impl PartialEq for OrderedTree {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl Eq for OrderedTree {}

impl OrderedTree {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Builds a tree from a sequence of possibly absent keys, inserting them in order and skipping
    /// duplicates. The whole sequence is checked first, so an absent key means no tree is built.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{InvalidArgument, OrderedTree};
    ///
    /// let tree = OrderedTree::try_from_keys(vec![Some(2), Some(1), Some(2)]).unwrap();
    /// assert_eq!(tree.to_string(), "[1, 2]");
    ///
    /// let err = OrderedTree::try_from_keys(vec![Some(2), None]).unwrap_err();
    /// assert_eq!(err, InvalidArgument::AbsentElement { index: 1 });
    /// ```
    pub fn try_from_keys<I>(keys: I) -> Result<Self, InvalidArgument>
    where
        I: IntoIterator<Item = Option<i32>>,
    {
        let mut tree = Self::new();
        tree.try_insert_all(keys)?;
        Ok(tree)
    }

    /// Returns the number of keys in the tree. This doesn't walk the tree.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if `key` is in the tree.
    pub fn contains(&self, key: i32) -> bool {
        let mut link = self.root();
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Adds `key` to the tree. Returns `false`, leaving the tree untouched, if the key is already
    /// present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn insert(&mut self, key: i32) -> bool {
        let slot = slot_mut(&mut self.root, key);
        if slot.is_some() {
            trace!("key {} already present", key);
            return false;
        }

        *slot = Some(Node::new_boxed(key));
        self.size += 1;
        trace!("inserted key {}, size is now {}", key, self.size);
        true
    }

    /// Inserts every key in order. Keys already in the tree are skipped.
    pub fn insert_all<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = i32>,
    {
        for key in keys {
            self.insert(key);
        }
    }

    /// Like [`insert_all`][Self::insert_all] for a sequence that may hold absent keys. If any key
    /// is absent nothing is inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert!(tree.try_insert_all(vec![Some(1), None]).is_err());
    /// assert!(tree.is_empty());
    ///
    /// tree.try_insert_all(vec![Some(1), Some(0)]).unwrap();
    /// assert_eq!(tree.to_string(), "[0, 1]");
    /// ```
    pub fn try_insert_all<I>(&mut self, keys: I) -> Result<(), InvalidArgument>
    where
        I: IntoIterator<Item = Option<i32>>,
    {
        let keys = error::require_keys(keys)?;
        self.insert_all(keys);
        Ok(())
    }

    /// Removes `key` from the tree and returns it. If the tree does not contain the key, nothing
    /// happens and `None` is returned.
    ///
    /// A node with two children is not unlinked. Instead it takes the key of its in-order
    /// successor and the successor's node is unlinked in its place.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(5), Some(5));
    /// assert_eq!(tree.remove(5), None);
    /// assert_eq!(tree.to_string(), "[3, 8]");
    /// ```
    pub fn remove(&mut self, key: i32) -> Option<i32> {
        let slot = slot_mut(&mut self.root, key);
        let mut node = slot.take()?;

        *slot = match (node.left.take(), node.right.take()) {
            (None, None) => {
                trace!("removed leaf {}", key);
                None
            }
            (Some(child), None) | (None, Some(child)) => {
                trace!("removed {}, spliced in child {}", key, child.key);
                Some(child)
            }
            (Some(left), Some(right)) => {
                node.left = Some(left);
                node.right = Some(right);
                if let Some(successor) = take_leftmost(&mut node.right) {
                    trace!("removed {}, replaced by successor {}", key, successor.key);
                    node.key = successor.key;
                }
                Some(node)
            }
        };

        self.size -= 1;
        Some(key)
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        drop(std::mem::take(self));
    }

    /// Returns the number of levels in the tree. An empty tree has a height of 0 and a tree with
    /// only a root has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node> = self.root().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| [node.left.as_deref(), node.right.as_deref()])
                .flatten()
                .collect();
        }
        height
    }

    /// Iterates over the keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree = [2, 3, 1].into_iter().collect();
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root(), self.size)
    }

    pub(crate) fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }
}

/// Descends from `link` towards `key` and returns the slot that holds it, or the empty slot a
/// node with `key` would be linked into.
fn slot_mut(mut link: &mut Link, key: i32) -> &mut Link {
    loop {
        let ordering = link.as_ref().map(|node| key.cmp(&node.key));
        link = match (ordering, link) {
            (Some(Ordering::Less), Some(node)) => &mut node.left,
            (Some(Ordering::Greater), Some(node)) => &mut node.right,
            (_, link) => return link,
        };
    }
}

/// Unlinks the left-most node below `link`, splicing its right child into its slot.
fn take_leftmost(mut link: &mut Link) -> Option<Box<Node>> {
    loop {
        let has_left = link.as_ref().map_or(false, |node| node.left.is_some());
        link = match (has_left, link) {
            (true, Some(node)) => &mut node.left,
            (_, link) => {
                let mut node = link.take()?;
                *link = node.right.take();
                return Some(node);
            }
        };
    }
}

impl FromIterator<i32> for OrderedTree {
    fn from_iter<I: IntoIterator<Item = i32>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.insert_all(keys);
        tree
    }
}

impl Extend<i32> for OrderedTree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, keys: I) {
        self.insert_all(keys);
    }
}

impl From<&[i32]> for OrderedTree {
    fn from(keys: &[i32]) -> Self {
        keys.iter().copied().collect()
    }
}

impl<const N: usize> From<[i32; N]> for OrderedTree {
    fn from(keys: [i32; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a OrderedTree {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An in-order iterator over the keys of an [`OrderedTree`]. It keeps the path to the next key on
/// a stack instead of recursing.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    fn new(root: Option<&'a Node>, remaining: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> FusedIterator for Iter<'a> {}

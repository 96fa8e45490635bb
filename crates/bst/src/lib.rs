//! Unbalanced binary search tree.
//!
//! Elements are kept in strict order with duplicates rejected. There is no
//! rebalancing: inserting already-sorted input degrades the tree into a list
//! and every operation into O(n). `height` exposes how far a tree has drifted.

mod node;

use node::{Link, NodeShape, TreeNode};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

/// Generic binary search tree over a totally ordered element type.
///
/// Queries accept any `Q` the element borrows as, so a tree of wrapper
/// values can be probed with just the ordering key.
pub struct SearchTree<T> {
    root: Link<T>,
    /// Number of elements in the tree.
    len: usize,
}

impl<T: Ord> SearchTree<T> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Insert an element, returning false if an equal element is already present.
    pub fn insert(&mut self, item: T) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match item.cmp(&node.data) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *link = Some(TreeNode::leaf(item));
        self.len += 1;
        true
    }

    /// Returns true if an element comparing equal to `item` is present.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(item).is_some()
    }

    /// Returns the stored element comparing equal to `item`.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match probe(item, &node.data) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.data),
            };
        }
        None
    }

    /// Collect every element `x` with `min <= x <= max`, in ascending order.
    ///
    /// A subtree is skipped only when its whole key range falls outside the
    /// bounds. Returns nothing when `min > max`.
    pub fn search_range<Q>(&self, min: &Q, max: &Q) -> Vec<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut results = Vec::new();
        collect_range(&self.root, min, max, &mut results);
        results
    }

    /// Remove the element comparing equal to `item`.
    ///
    /// Returns true if the tree shrank by one.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let before = self.len;
        remove_from(&mut self.root, item, &mut self.len);
        self.len < before
    }
}

impl<T> SearchTree<T> {
    /// Number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every node and reset the count.
    pub fn clear(&mut self) {
        drop_subtree(self.root.take());
        self.len = 0;
    }

    /// All elements in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Lazy in-order (ascending) iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Smallest element.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.data)
    }

    /// Largest element.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.data)
    }

    /// Number of nodes on the longest root-to-leaf path (0 for an empty tree).
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&TreeNode<T>> = self.root.as_deref().into_iter().collect();
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
}

impl<T: Ord> Default for SearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SearchTree<T> {
    fn drop(&mut self) {
        drop_subtree(self.root.take());
    }
}

impl<T: fmt::Debug> fmt::Debug for SearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> Extend<T> for SearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for SearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a SearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`SearchTree`].
pub struct Iter<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a TreeNode<T>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Compare a probe key against a stored element.
fn probe<T, Q>(item: &Q, data: &T) -> Ordering
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    Q::cmp(item, <T as Borrow<Q>>::borrow(data))
}

fn collect_range<'a, T, Q>(link: &'a Link<T>, min: &Q, max: &Q, out: &mut Vec<&'a T>)
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let Some(node) = link else {
        return;
    };
    let min_vs_node = probe(min, &node.data);
    let max_vs_node = probe(max, &node.data);

    // Left only when node > min, right only when node < max.
    if min_vs_node == Ordering::Less {
        collect_range(&node.left, min, max, out);
    }
    if min_vs_node != Ordering::Greater && max_vs_node != Ordering::Less {
        out.push(&node.data);
    }
    if max_vs_node == Ordering::Greater {
        collect_range(&node.right, min, max, out);
    }
}

/// Remove `item` from the subtree rooted at `link`, keeping `len` in step.
///
/// A two-child node takes over its in-order successor's element. Detaching
/// the successor is a second removal that decrements `len` again, so the
/// branch adds one back to net a single decrement.
fn remove_from<T, Q>(link: &mut Link<T>, item: &Q, len: &mut usize)
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let Some(node) = link else {
        return;
    };

    match probe(item, &node.data) {
        Ordering::Less => remove_from(&mut node.left, item, len),
        Ordering::Greater => remove_from(&mut node.right, item, len),
        Ordering::Equal => {
            *len -= 1;
            match node.shape() {
                NodeShape::Leaf => *link = None,
                NodeShape::LeftOnly => *link = node.left.take(),
                NodeShape::RightOnly => *link = node.right.take(),
                NodeShape::Full => {
                    if let Some(successor) = take_min(&mut node.right, len) {
                        node.data = successor;
                    }
                    *len += 1;
                }
            }
        }
    }
}

/// Detach the smallest node of a subtree, splicing its right child up.
fn take_min<T>(mut link: &mut Link<T>, len: &mut usize) -> Option<T> {
    while link.as_ref().is_some_and(|node| node.left.is_some()) {
        link = &mut link.as_mut()?.left;
    }
    let mut node = link.take()?;
    *link = node.right.take();
    *len -= 1;
    Some(node.data)
}

/// Free a subtree without recursing, so degenerate trees cannot blow the stack.
fn drop_subtree<T>(root: Link<T>) {
    let mut stack: Vec<Box<TreeNode<T>>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

//! A Binary Search Tree that owns an optional root [`Node`]. The node does all of the work;
//! the tree tracks emptiness and stores back whatever node replaces the root after a removal.
//!
//! # Examples
//!
//! ```
//! use bstnode::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert_eq!(tree.depth(), None);
//! assert_eq!(tree.to_string(), "[]");
//!
//! assert!(tree.insert(2));
//! assert!(tree.insert(1));
//! assert!(!tree.insert(1));
//! assert_eq!(tree.to_string(), "[1, 2]");
//!
//! // Removing the last value empties the tree again.
//! assert!(tree.remove(&1));
//! assert!(tree.remove(&2));
//! assert!(tree.is_empty());
//! ```

use std::fmt;

use crate::error::OrderError;
use crate::node::Node;

/// An unbalanced Binary Search Tree without duplicates. This can be used for inserting,
/// finding, and removing values.
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root()).finish()
    }
}

/// Writes the sorted values wrapped in brackets, e.g. `[1, 2, 3]`, or `[]` for an empty tree.
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => write!(f, "[{root}]"),
            None => f.write_str("[]"),
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Inserts in iteration order. Values already in the tree are dropped.
impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// The root node, if the tree holds anything.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many values the tree holds.
    pub fn len(&self) -> usize {
        self.root().map_or(0, Node::size)
    }

    /// The depth of the root node, or `None` for an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstnode::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.depth(), None);
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.depth(), Some(0));
    ///
    /// tree.insert(2);
    /// assert_eq!(tree.depth(), Some(1));
    /// ```
    pub fn depth(&self) -> Option<usize> {
        self.root().map(Node::depth)
    }

    /// Drops every value in the tree.
    pub fn clear(&mut self) {
        self.root = None;
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Inserts `value`, returning `false` (and leaving the tree alone) if it was already present.
    pub fn insert(&mut self, value: T) -> bool {
        match &mut self.root {
            Some(root) => root.insert(value),
            None => {
                self.root = Some(Box::new(Node::new(value)));
                true
            }
        }
    }

    /// Whether the tree holds `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.root().is_some_and(|root| root.contains(value))
    }

    /// Removes `value` from the tree, returning whether it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstnode::tree::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert!(tree.remove(&5));
    /// assert!(!tree.remove(&5));
    /// assert_eq!(tree.to_string(), "[3, 8]");
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        if !self.contains(value) {
            return false;
        }
        self.root = self.root.take().and_then(|root| root.remove(value));
        true
    }
}

impl<T> Tree<T>
where
    T: Ord + fmt::Display,
{
    /// Checks that every value sits on the correct side of each of its ancestors. An empty tree
    /// is trivially ordered.
    pub fn check_order(&self) -> Result<(), OrderError> {
        self.root().map_or(Ok(()), Node::check_order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seven() -> Tree<i32> {
        [5, 3, 8, 1, 4, 7, 9].into_iter().collect()
    }

    #[test]
    fn test_empty() {
        let tree: Tree<i32> = Tree::new();

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.depth(), None);
        assert!(!tree.contains(&1));
        assert!(tree.root().is_none());
        assert_eq!(tree.to_string(), "[]");
        assert_eq!(tree.check_order(), Ok(()));
    }

    #[test]
    fn test_remove_from_empty() {
        let mut tree: Tree<i32> = Tree::default();

        assert!(!tree.remove(&1));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_seven() {
        let tree = seven();

        assert_eq!(tree.len(), 7);
        assert_eq!(tree.depth(), Some(2));
        assert_eq!(tree.to_string(), "[1, 3, 4, 5, 7, 8, 9]");
        assert_eq!(tree.root().map(Node::value), Some(&5));
    }

    #[test]
    fn test_remove_root_with_two_children() {
        let mut tree = seven();

        assert!(tree.remove(&5));
        assert_eq!(tree.root().map(Node::value), Some(&7));
        assert_eq!(tree.len(), 6);
        assert_eq!(tree.to_string(), "[1, 3, 4, 7, 8, 9]");
    }

    #[test]
    fn test_remove_root_with_one_child() {
        let mut tree: Tree<_> = [1, 2, 3].into_iter().collect();

        assert!(tree.remove(&1));
        assert_eq!(tree.root().map(Node::value), Some(&2));
        assert_eq!(tree.depth(), Some(1));
    }

    #[test]
    fn test_remove_last_value() {
        let mut tree: Tree<_> = [1].into_iter().collect();

        assert!(tree.remove(&1));
        assert!(tree.is_empty());
        assert_eq!(tree.to_string(), "[]");

        // The tree is usable again afterwards.
        assert!(tree.insert(2));
        assert_eq!(tree.to_string(), "[2]");
    }

    #[test]
    fn test_extend_drops_duplicates() {
        let mut tree = seven();
        tree.extend([5, 6, 6]);

        assert_eq!(tree.len(), 8);
        assert_eq!(tree.to_string(), "[1, 3, 4, 5, 6, 7, 8, 9]");
    }

    #[test]
    fn test_clear() {
        let mut tree = seven();
        tree.clear();

        assert!(tree.is_empty());
        assert!(!tree.contains(&5));
    }

    #[test]
    fn test_clone_is_independent() {
        let tree = seven();
        let mut other = tree.clone();
        other.remove(&1);

        assert!(tree.contains(&1));
        assert!(!other.contains(&1));
    }

    #[test]
    fn test_strings() {
        let tree: Tree<_> = ["pear", "apple", "fig"].into_iter().collect();
        assert_eq!(tree.to_string(), "[apple, fig, pear]");
    }
}

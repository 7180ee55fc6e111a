//! A single node of an unbalanced Binary Search Tree. Every `Node` is also the root of the
//! subtree hanging beneath it, so all operations here act on "the subtree rooted at this node".
//!
//! A `Node` always holds a value. There is no empty `Node`; an empty tree is the absence of a
//! root and is modeled by [`Tree`][crate::tree::Tree].
//!
//! # Examples
//!
//! ```
//! use bstnode::node::Node;
//!
//! let mut root = Box::new(Node::new(5));
//! assert!(root.insert(3));
//! assert!(root.insert(8));
//!
//! // Duplicates are rejected.
//! assert!(!root.insert(3));
//!
//! assert!(root.contains(&8));
//! assert_eq!(root.render(), "3, 5, 8");
//!
//! // Removal hands back whatever should now sit where `root` was.
//! let root = root.remove(&5).unwrap();
//! assert_eq!(root.render(), "3, 8");
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::OrderError;

/// A `Node` has a value and up to two children. Every value in the left subtree is strictly
/// smaller than `value` and every value in the right subtree is strictly larger.
pub struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Clone for Node<T>
where
    T: Clone,
{
    // TODO stack based Clone
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

/// Writes the in-order traversal of the subtree, separating values with `", "`.
impl<T> fmt::Display for Node<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(left) = &self.left {
            write!(f, "{left}, ")?;
        }
        write!(f, "{}", self.value)?;
        if let Some(right) = &self.right {
            write!(f, ", {right}")?;
        }
        Ok(())
    }
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns how many nodes are in the subtree rooted at this node, including this one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstnode::node::Node;
    ///
    /// let mut root = Node::new(2);
    /// assert_eq!(root.size(), 1);
    ///
    /// root.insert(1);
    /// root.insert(3);
    /// assert_eq!(root.size(), 3);
    /// ```
    pub fn size(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |left| left.size())
            + self.right.as_ref().map_or(0, |right| right.size())
    }

    /// Returns the number of edges on the longest path from this node down to a leaf. A leaf has
    /// a depth of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstnode::node::Node;
    ///
    /// let mut root = Node::new(1);
    /// assert_eq!(root.depth(), 0);
    ///
    /// // Ascending inserts build a chain.
    /// root.insert(2);
    /// root.insert(3);
    /// assert_eq!(root.depth(), 2);
    /// ```
    pub fn depth(&self) -> usize {
        let left_depth = self.left.as_ref().map_or(0, |left| left.depth() + 1);
        let right_depth = self.right.as_ref().map_or(0, |right| right.depth() + 1);
        left_depth.max(right_depth)
    }

    /// The smallest value in this subtree, i.e. the value of the leftmost node.
    fn find_min(&self) -> &T {
        match &self.left {
            Some(left) => left.find_min(),
            None => &self.value,
        }
    }

    /// Unlinks the leftmost node of this subtree. Returns its value and the subtree that remains.
    /// The leftmost node never has a left child so it's replaced by its right child.
    fn take_min(mut self: Box<Self>) -> (T, Option<Box<Self>>) {
        match self.left.take() {
            Some(left) => {
                let (min, new_left) = left.take_min();
                self.left = new_left;
                (min, Some(self))
            }
            None => {
                let Node { value, right, .. } = *self;
                (value, right)
            }
        }
    }
}

impl<T> Node<T>
where
    T: Ord,
{
    /// Inserts `value` into the subtree rooted at this node. Returns `true` if a new node was
    /// created and `false` if the value was already present, in which case nothing changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstnode::node::Node;
    ///
    /// let mut root = Node::new(5);
    /// assert!(root.insert(1));
    /// assert!(!root.insert(1));
    /// assert!(!root.insert(5));
    /// assert_eq!(root.size(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let child = match value.cmp(&self.value) {
            Ordering::Less => &mut self.left,
            Ordering::Equal => return false,
            Ordering::Greater => &mut self.right,
        };

        match child {
            Some(node) => node.insert(value),
            None => {
                *child = Some(Box::new(Node::new(value)));
                true
            }
        }
    }

    /// Whether `value` is stored anywhere in the subtree rooted at this node.
    pub fn contains(&self, value: &T) -> bool {
        let child = match value.cmp(&self.value) {
            Ordering::Less => &self.left,
            Ordering::Equal => return true,
            Ordering::Greater => &self.right,
        };

        child.as_ref().is_some_and(|node| node.contains(value))
    }

    /// Removes `value` from the subtree rooted at this node and returns the node that should take
    /// this node's place. The caller must store the result back wherever it got `self` from (a
    /// parent's child slot or the tree's root).
    ///
    /// If `value` isn't present the very same node is handed back untouched. If this node is a
    /// leaf holding `value`, `None` is returned.
    ///
    /// When the removed node has two children, its successor (the smallest value in its right
    /// subtree) is moved up into it and the successor's node is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstnode::node::Node;
    ///
    /// let mut root = Box::new(Node::new(5));
    /// root.insert(3);
    /// root.insert(8);
    /// root.insert(7);
    ///
    /// let root = root.remove(&5).unwrap();
    /// assert_eq!(*root.value(), 7);
    /// assert_eq!(root.render(), "3, 7, 8");
    ///
    /// let root = root.remove(&42).unwrap();
    /// assert_eq!(root.render(), "3, 7, 8");
    ///
    /// let leaf = Box::new(Node::new(1));
    /// assert!(leaf.remove(&1).is_none());
    /// ```
    pub fn remove(mut self: Box<Self>, value: &T) -> Option<Box<Self>> {
        match value.cmp(&self.value) {
            Ordering::Less => {
                if let Some(left) = self.left.take() {
                    self.left = left.remove(value);
                }
                Some(self)
            }
            Ordering::Greater => {
                if let Some(right) = self.right.take() {
                    self.right = right.remove(value);
                }
                Some(self)
            }
            Ordering::Equal => match (self.left.take(), self.right.take()) {
                (Some(left), Some(right)) => {
                    let (successor, new_right) = right.take_min();
                    self.value = successor;
                    self.left = Some(left);
                    self.right = new_right;

                    // The successor must still be smaller than everything left behind it.
                    if cfg!(debug_assertions) {
                        if let Some(right) = &self.right {
                            assert!(*right.find_min() > self.value);
                        }
                    }
                    Some(self)
                }
                (Some(child), None) | (None, Some(child)) => Some(child),
                (None, None) => None,
            },
        }
    }
}

impl<T> Node<T>
where
    T: fmt::Display,
{
    /// Renders the values of this subtree in sorted order separated by `", "`. This is the same
    /// text the `Display` implementation writes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstnode::node::Node;
    ///
    /// let mut root = Node::new("m");
    /// root.insert("z");
    /// root.insert("a");
    ///
    /// assert_eq!(root.render(), "a, m, z");
    /// ```
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<T> Node<T>
where
    T: Ord + fmt::Display,
{
    /// Walks the whole subtree and reports the first value found on the wrong side of one of its
    /// ancestors. A subtree built only through [`insert`][Node::insert] and
    /// [`remove`][Node::remove] with a well behaved `Ord` always passes.
    pub fn check_order(&self) -> Result<(), OrderError> {
        self.check_bounds(None, None)
    }

    /// `lower` is the nearest ancestor this node is right of and `upper` the nearest ancestor it
    /// is left of.
    fn check_bounds(&self, lower: Option<&T>, upper: Option<&T>) -> Result<(), OrderError> {
        if let Some(lower) = lower {
            if self.value <= *lower {
                return Err(OrderError::RightNotLarger {
                    ancestor: lower.to_string(),
                    found: self.value.to_string(),
                });
            }
        }
        if let Some(upper) = upper {
            if self.value >= *upper {
                return Err(OrderError::LeftNotSmaller {
                    ancestor: upper.to_string(),
                    found: self.value.to_string(),
                });
            }
        }

        if let Some(left) = &self.left {
            left.check_bounds(lower, Some(&self.value))?;
        }
        if let Some(right) = &self.right {
            right.check_bounds(Some(&self.value), upper)?;
        }
        Ok(())
    }
}

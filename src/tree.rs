//! An unbalanced BST that owns its nodes through `Box`es. Nothing is ever rotated - the shape of
//! the tree depends only on the order keys were inserted (and removed) in.
//!
//! Every algorithm here is iterative. Descending into the tree only ever needs the link that
//! points at the current node, and the traversals keep their own stack, so a tree that has
//! degenerated into a list can't overflow the call stack.
//!
//! # Examples
//!
//! ```
//! use plain_bst::Tree;
//!
//! let mut tree = Tree::from([12, 11, 90, 82, 7, 9]);
//!
//! assert!(tree.contains(&82));
//! assert_eq!(tree.inorder(), [7, 9, 11, 12, 82, 90]);
//!
//! // Duplicates are ignored.
//! assert!(!tree.insert(82));
//! assert_eq!(tree.len(), 6);
//!
//! assert!(tree.remove(&12));
//! assert_eq!(tree.root().map(|root| *root.key()), Some(82));
//!
//! let deepest = tree.find_deepest();
//! assert_eq!(deepest.depth, 3);
//! assert_eq!(deepest.values, [9]);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, trace};

use crate::node::{Link, Node};

/// A Binary Search Tree of unique keys. This can be used for inserting, finding, and removing
/// keys, walking them in order, and finding the deepest level of the tree.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

/// The result of [`Tree::find_deepest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deepest<K> {
    /// How many edges are between the root and the deepest nodes. The root is at depth `0`.
    pub depth: usize,
    /// The keys of every node at `depth`, in the order a breadth first search reaches them (so
    /// left to right, not sorted).
    pub values: Vec<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        // Dropping a `Box<Node>` drops its children recursively, so detach every child before
        // its parent goes away.
        let mut nodes: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = nodes.pop() {
            nodes.extend(node.left.take());
            nodes.extend(node.right.take());
        }
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    /// Copies the tree node for node, so the clone has exactly the same shape.
    fn clone(&self) -> Self {
        enum Visit<'a, K> {
            Enter(Option<&'a Node<K>>),
            Build(&'a Node<K>),
        }

        // Subtrees are built bottom up: a node is only built once both of its children are on
        // top of `built`.
        let mut visits = vec![Visit::Enter(self.root())];
        let mut built: Vec<Link<K>> = Vec::new();
        while let Some(visit) = visits.pop() {
            match visit {
                Visit::Enter(None) => built.push(None),
                Visit::Enter(Some(node)) => {
                    visits.push(Visit::Build(node));
                    visits.push(Visit::Enter(node.right()));
                    visits.push(Visit::Enter(node.left()));
                }
                Visit::Build(node) => {
                    let right = built.pop().flatten();
                    let left = built.pop().flatten();
                    built.push(Some(Box::new(Node {
                        key: node.key.clone(),
                        left,
                        right,
                    })));
                }
            }
        }

        Self {
            root: built.pop().flatten(),
            len: self.len,
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.walk(Side::Left)).finish()
    }
}

/// Two trees are equal when they hold the same keys, whatever their shapes.
impl<K> PartialEq for Tree<K>
where
    K: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.walk(Side::Left) == other.walk(Side::Left)
    }
}

impl<K> Eq for Tree<K> where K: Eq {}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    /// Inserts every key in iteration order. Keys already in the tree (including ones earlier in
    /// the same iterator) are skipped.
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}

impl<K, const N: usize> From<[K; N]> for Tree<K>
where
    K: Ord,
{
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<K> From<Vec<K>> for Tree<K>
where
    K: Ord,
{
    fn from(keys: Vec<K>) -> Self {
        keys.into_iter().collect()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The root node, if the tree isn't empty. Nodes are read only - they can be used to look at
    /// the shape of the tree but every change has to go through the `Tree`.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let tree = Tree::from([2, 1, 3]);
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.key(), &2);
    /// assert_eq!(root.left().map(|n| *n.key()), Some(1));
    /// assert_eq!(root.right().map(|n| *n.key()), Some(3));
    /// ```
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// How many keys are in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `key` into the tree. Returns `false`, leaving the tree as it was, if the key is
    /// already present.
    ///
    /// New keys always become leaves - the tree is never rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.inorder(), [1]);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let link = self.link_mut(&key);
        if link.is_some() {
            trace!(len = self.len, "duplicate key, skipping insert");
            return false;
        }

        *link = Some(Box::new(Node::new(key)));
        self.len += 1;
        true
    }

    /// Removes `key` from the tree. Returns `false` if there was nothing to remove.
    ///
    /// A node with at most one child is replaced by that child. A node with two children stays
    /// where it is and takes the key of its in-order successor, which is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::from([26, 82, 16, 92, 33, 33]);
    ///
    /// assert!(tree.remove(&33));
    /// assert!(!tree.remove(&33));
    /// assert_eq!(tree.inorder(), [16, 26, 82, 92]);
    /// ```
    pub fn remove(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let link = self.link_mut(key);
        let Some(node) = link.as_deref_mut() else {
            trace!(len = self.len, "key not found, skipping remove");
            return false;
        };

        if node.left.is_some() && node.right.is_some() {
            if let Some(successor) = take_leftmost(&mut node.right) {
                node.key = successor.key;
            }
        } else if let Some(removed) = link.take() {
            let removed = *removed;
            *link = removed.left.or(removed.right);
        }

        self.len -= 1;
        true
    }

    /// Finds the node holding `key`, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let tree = Tree::from([2, 1, 3]);
    ///
    /// assert!(tree.find(&3).unwrap().is_leaf());
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }

        None
    }

    /// Whether `key` is in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// Every key in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let tree = Tree::from([26, 82, 16, 92, 33]);
    /// assert_eq!(tree.inorder(), [16, 26, 33, 82, 92]);
    /// ```
    pub fn inorder(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.walk(Side::Left).into_iter().cloned().collect()
    }

    /// Every key, visiting each node's right subtree, then the node, then its left subtree. This
    /// is [`Tree::inorder`] run over the mirror image of the tree, so keys come out in descending
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let tree = Tree::from([12, 11, 90, 82, 7, 9]);
    /// assert_eq!(tree.postorder(), [90, 82, 12, 11, 9, 7]);
    /// ```
    pub fn postorder(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.walk(Side::Right).into_iter().cloned().collect()
    }

    /// Finds the deepest level of the tree and every key on it.
    ///
    /// An empty tree reports depth `0` with no keys; a tree with only a root reports depth `0`
    /// with the root's key.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::{Deepest, Tree};
    ///
    /// let tree = Tree::from([26, 82, 16, 92, 33]);
    /// assert_eq!(tree.find_deepest(), Deepest { depth: 2, values: vec![33, 92] });
    ///
    /// let empty = Tree::<i32>::new();
    /// assert_eq!(empty.find_deepest(), Deepest { depth: 0, values: vec![] });
    /// ```
    pub fn find_deepest(&self) -> Deepest<K>
    where
        K: Clone,
    {
        let mut deepest = Deepest {
            depth: 0,
            values: Vec::new(),
        };
        let Some(root) = self.root() else {
            return deepest;
        };

        let mut queue = VecDeque::from([(0, root)]);
        while let Some((depth, node)) = queue.pop_front() {
            if depth > deepest.depth {
                deepest.depth = depth;
                deepest.values.clear();
            }
            if depth == deepest.depth {
                deepest.values.push(node.key.clone());
            }

            queue.extend(node.left().map(|left| (depth + 1, left)));
            queue.extend(node.right().map(|right| (depth + 1, right)));
        }

        debug!(
            depth = deepest.depth,
            count = deepest.values.len(),
            "found deepest level"
        );
        deepest
    }

    /// Walks the tree with an explicit stack, going down the `first` side as far as possible,
    /// visiting the node at the top of the stack and then moving to its other child.
    /// `Side::Left` is an in-order walk.
    fn walk(&self, first: Side) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut current = self.root();

        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.child(first);
            }

            let Some(node) = stack.pop() else {
                break;
            };
            keys.push(&node.key);
            current = node.child(first.opposite());
        }

        keys
    }

    /// Returns the link that holds `key`, or the empty link where `key` would be attached.
    ///
    /// The returned link belongs to the parent of that position (or is the root link), which is
    /// all the context `insert` and `remove` need.
    fn link_mut(&mut self, key: &K) -> &mut Link<K>
    where
        K: Ord,
    {
        let mut link = &mut self.root;
        while let Some(ordering) = link.as_deref().map(|node| key.cmp(&node.key)) {
            if ordering == Ordering::Equal {
                break;
            }
            if let Some(node) = link {
                link = match ordering {
                    Ordering::Less => &mut node.left,
                    _ => &mut node.right,
                };
            }
        }

        link
    }
}

/// Unlinks the smallest node of the subtree in `link` and returns it, putting its right child
/// in its place.
///
/// The search only ever moves left, so the link that gets rewritten is either `link` itself or
/// the *left* link of the leftmost node's parent.
fn take_leftmost<K>(link: &mut Link<K>) -> Option<Box<Node<K>>> {
    let mut link = link;
    while link.as_deref().map_or(false, |node| node.left.is_some()) {
        if let Some(node) = link {
            link = &mut node.left;
        }
    }

    let mut leftmost = link.take()?;
    *link = leftmost.right.take();
    Some(leftmost)
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl<K> Node<K> {
    fn child(&self, side: Side) -> Option<&Self> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }
}

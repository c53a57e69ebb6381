/// An owned, possibly empty, child pointer.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A `Node` stores a key and owns up to two children. Nodes have no pointer back to their
/// parent - anything that needs the parent keeps track of it while walking down the tree.
///
/// Nodes can only be reached through [`Tree::root`][crate::Tree::root] and
/// [`Tree::find`][crate::Tree::find], so callers can inspect the shape of a tree but never
/// change it.
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree. Every key in it is smaller than [`Node::key`].
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree. Every key in it is larger than [`Node::key`].
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has a left or a right child.
    pub fn has_children(&self) -> bool {
        self.left.is_some() || self.right.is_some()
    }

    /// Whether this node has no children at all.
    pub fn is_leaf(&self) -> bool {
        !self.has_children()
    }
}

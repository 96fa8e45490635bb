//! Binary search tree node definitions.

/// Owned, optional subtree.
pub(crate) type Link<T> = Option<Box<TreeNode<T>>>;

/// Which children a node currently has.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NodeShape {
    /// No children.
    Leaf,
    /// Only a left subtree.
    LeftOnly,
    /// Only a right subtree.
    RightOnly,
    /// Both subtrees present.
    Full,
}

/// A tree node owning its element and both subtrees.
#[derive(Debug)]
pub(crate) struct TreeNode<T> {
    pub(crate) data: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> TreeNode<T> {
    /// Create a boxed node with no children.
    pub(crate) fn leaf(data: T) -> Box<Self> {
        Box::new(Self {
            data,
            left: None,
            right: None,
        })
    }

    /// Returns the node's shape.
    pub(crate) fn shape(&self) -> NodeShape {
        match (&self.left, &self.right) {
            (None, None) => NodeShape::Leaf,
            (Some(_), None) => NodeShape::LeftOnly,
            (None, Some(_)) => NodeShape::RightOnly,
            (Some(_), Some(_)) => NodeShape::Full,
        }
    }
}

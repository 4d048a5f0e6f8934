/// Anything that can be placed in a [`NodeTree`](crate::NodeTree).
///
/// A node names itself and, in order, the nodes below it. Child IDs may
/// point at nodes that never show up in the tree; the walker decides what
/// to do about those (see [`MissingChild`](crate::MissingChild)).
pub trait Node {
    /// Identifier, unique within one tree.
    fn node_id(&self) -> &str;

    /// Ordered child identifiers.
    fn node_children(&self) -> &[String];
}


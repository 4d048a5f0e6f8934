//! Rebuilding a tree out of a flat, parent-referencing node list.

use std::collections::{HashMap, HashSet};

use crate::node::Node;

/// An ID-indexed tree built from a flat collection of [`Node`]s.
///
/// Nodes are stored in input order. When two nodes share an identifier the
/// later one wins and the earlier one becomes unreachable.
///
/// Roots are the nodes that no indexed node lists as a child. They are kept
/// in input order so that walks are reproducible.
///
/// # Examples
///
/// ```
/// use dynalister::{FileEntry, Node, NodeTree};
///
/// let tree = NodeTree::new(vec![
///     FileEntry::folder("1", "Untitled").with_children(["2", "3"]),
///     FileEntry::document("2", "Inbox"),
///     FileEntry::folder("3", "Work").with_children(["4"]),
///     FileEntry::document("4", "Standup"),
/// ]);
///
/// let roots: Vec<&str> = tree.roots().map(|n| n.node_id()).collect();
/// assert_eq!(roots, ["1"]);
/// assert_eq!(tree.get("4").map(|f| f.title.as_str()), Some("Standup"));
/// assert!(tree.get("nope").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct NodeTree<N> {
    pub(crate) nodes: Vec<N>,
    pub(crate) by_id: HashMap<String, usize>,
    pub(crate) roots: Vec<usize>,
}

impl<N: Node> NodeTree<N> {
    /// Index `nodes` by identifier and infer the roots. Never fails; a later
    /// node with an already-seen identifier replaces the earlier one.
    pub fn new(nodes: impl IntoIterator<Item = N>) -> Self {
        let nodes: Vec<N> = nodes.into_iter().collect();

        let mut by_id = HashMap::with_capacity(nodes.len());
        for (index, node) in nodes.iter().enumerate() {
            by_id.insert(node.node_id().to_string(), index);
        }

        let roots = scan_roots(&nodes, &by_id);

        tracing::debug!(nodes = by_id.len(), roots = roots.len(), "built node tree");

        Self {
            nodes,
            by_id,
            roots,
        }
    }

    /// Look up a node by identifier.
    pub fn get(&self, id: &str) -> Option<&N> {
        self.by_id.get(id).map(|&index| &self.nodes[index])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Root nodes, in input order.
    pub fn roots(&self) -> impl Iterator<Item = &N> + '_ {
        self.roots.iter().map(|&index| &self.nodes[index])
    }

    /// Every indexed node, in input order. Shadowed duplicates are skipped.
    pub fn iter(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(index, node)| self.by_id.get(node.node_id()) == Some(index))
            .map(|(_, node)| node)
    }

    /// Number of distinct identifiers.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// All indexed nodes minus every ID that appears in some indexed node's child list.
fn scan_roots<N: Node>(nodes: &[N], by_id: &HashMap<String, usize>) -> Vec<usize> {
    let referenced: HashSet<&str> = by_id
        .values()
        .flat_map(|&index| nodes[index].node_children())
        .map(String::as_str)
        .collect();

    let mut roots: Vec<usize> = by_id
        .iter()
        .filter(|(id, _)| !referenced.contains(id.as_str()))
        .map(|(_, &index)| index)
        .collect();
    roots.sort_unstable();
    roots
}

//! Depth-first, pre-order traversal of a [`NodeTree`].

use std::collections::HashSet;

use crate::error::WalkError;
use crate::node::Node;
use crate::tree::NodeTree;

/// What to do when a node lists a child ID that isn't in the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingChild {
    /// Log a warning and carry on with the next sibling.
    #[default]
    Skip,
    /// Abort the walk with [`WalkError::MissingChild`].
    Fail,
}

/// Walk policy. The default skips dangling child references; cycles always
/// abort the walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkOptions {
    pub missing_child: MissingChild,
}

impl WalkOptions {
    /// Fail on dangling child references instead of skipping them.
    pub fn strict() -> Self {
        Self {
            missing_child: MissingChild::Fail,
        }
    }
}

struct Frame {
    index: usize,
    next_child: usize,
}

impl<N: Node> NodeTree<N> {
    /// Walk every root with default [`WalkOptions`].
    ///
    /// See [`NodeTree::walk_with`].
    pub fn walk<E, F>(&self, visit: F) -> Result<(), E>
    where
        E: From<WalkError>,
        F: FnMut(&[&N], &N) -> Result<(), E>,
    {
        self.walk_with(&WalkOptions::default(), visit)
    }

    /// Visit every node reachable from the roots, parents before children.
    ///
    /// `visit` receives the ancestors of the node (root first, parent last)
    /// and the node itself. Children are visited in the order their parent
    /// lists them. The first error returned by `visit` stops the walk and is
    /// returned as-is.
    ///
    /// A child that is already one of its own ancestors aborts the walk with
    /// [`WalkError::Cycle`]. A node reachable through two parents is visited
    /// once per parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynalister::{DocumentItem, Node, NodeTree, WalkOptions};
    ///
    /// let tree = NodeTree::new(vec![
    ///     DocumentItem::new("1", "a").with_children(["2", "3"]),
    ///     DocumentItem::new("2", "b"),
    ///     DocumentItem::new("3", "c").with_children(["4"]),
    ///     DocumentItem::new("4", "d"),
    /// ]);
    ///
    /// let mut seen = Vec::new();
    /// tree.walk_with(&WalkOptions::strict(), |ancestors, item| {
    ///     let path: Vec<&str> = ancestors.iter().map(|a| a.node_id()).collect();
    ///     seen.push((item.node_id().to_string(), path.join("/")));
    ///     Ok::<_, dynalister::Error>(())
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(
    ///     seen,
    ///     [
    ///         ("1".to_string(), "".to_string()),
    ///         ("2".to_string(), "1".to_string()),
    ///         ("3".to_string(), "1".to_string()),
    ///         ("4".to_string(), "1/3".to_string()),
    ///     ]
    /// );
    /// ```
    pub fn walk_with<E, F>(&self, options: &WalkOptions, mut visit: F) -> Result<(), E>
    where
        E: From<WalkError>,
        F: FnMut(&[&N], &N) -> Result<(), E>,
    {
        for &root in &self.roots {
            self.walk_from(root, options, &mut visit)?;
        }
        Ok(())
    }

    fn walk_from<E, F>(&self, root: usize, options: &WalkOptions, visit: &mut F) -> Result<(), E>
    where
        E: From<WalkError>,
        F: FnMut(&[&N], &N) -> Result<(), E>,
    {
        // `frames`, `ancestors` and `on_path` always describe the same path.
        let mut frames: Vec<Frame> = Vec::new();
        let mut ancestors: Vec<&N> = Vec::new();
        let mut on_path: HashSet<usize> = HashSet::new();

        visit(&ancestors, &self.nodes[root])?;
        frames.push(Frame {
            index: root,
            next_child: 0,
        });
        ancestors.push(&self.nodes[root]);
        on_path.insert(root);

        while let Some(frame) = frames.last_mut() {
            let parent = &self.nodes[frame.index];
            let Some(child_id) = parent.node_children().get(frame.next_child) else {
                let done = frame.index;
                frames.pop();
                ancestors.pop();
                on_path.remove(&done);
                continue;
            };
            frame.next_child += 1;

            let Some(&child) = self.by_id.get(child_id) else {
                match options.missing_child {
                    MissingChild::Skip => {
                        tracing::warn!(
                            parent = parent.node_id(),
                            child = child_id.as_str(),
                            "skipping dangling child reference"
                        );
                        continue;
                    }
                    MissingChild::Fail => {
                        return Err(WalkError::MissingChild {
                            parent: parent.node_id().to_string(),
                            child: child_id.clone(),
                        }
                        .into());
                    }
                }
            };

            if on_path.contains(&child) {
                return Err(WalkError::Cycle {
                    id: child_id.clone(),
                }
                .into());
            }

            visit(&ancestors, &self.nodes[child])?;
            frames.push(Frame {
                index: child,
                next_child: 0,
            });
            ancestors.push(&self.nodes[child]);
            on_path.insert(child);
        }

        Ok(())
    }
}

//! The path tree: segment-wise traversal, registration, and removal.
//!
//! [`PathTree`] owns an arena of nodes plus the root node (empty segment) and
//! exposes find / add / remove / normalize over it. One traversal routine
//! serves all three structural operations: a single walk determines whether
//! the full path exists, where a missing suffix would splice in, and the
//! parent/previous-sibling context needed for unlinking.
//!
//! Single-threaded by design: mutation takes `&mut self`, queries take
//! `&self`, and there is no internal synchronization.

use std::cmp::Ordering;

use tracing::debug;

use crate::node::{Node, NodeArena, NodeId};
use crate::normalize::Normalize;
use crate::segment;
use crate::token::OwnerToken;

/// In-memory ordered trie keyed by filesystem-style path segments.
///
/// Paths are registered with [`OwnerToken`]s; a node stays live while any
/// registration remains on it. Only the exact terminal node of a
/// caller-supplied path ever becomes live -- ancestors created along the
/// way are structural unless separately registered. A node is unlinked from
/// its parent the instant its last registration is removed, which orphans
/// whatever is still reachable beneath it (see [`PathTree::remove`]).
#[derive(Debug)]
pub struct PathTree {
    arena: NodeArena,
    root: NodeId,
    separator: char,
}

/// Outcome of the shared traversal walk.
enum Located {
    /// The full path exists. `parent` and `previous` describe the matched
    /// node's position in its parent's sibling list.
    Found {
        node: NodeId,
        parent: NodeId,
        previous: Option<NodeId>,
    },
    /// Some suffix of the path is missing. `from` is the index of the first
    /// unmatched segment, and `parent`/`previous` mark the splice point.
    Missing {
        parent: NodeId,
        previous: Option<NodeId>,
        from: usize,
    },
}

impl PathTree {
    /// Create a tree splitting paths on the host platform's separator.
    pub fn new() -> Self {
        Self::with_separator(std::path::MAIN_SEPARATOR)
    }

    /// Create a tree splitting paths on `separator`.
    pub fn with_separator(separator: char) -> Self {
        let mut arena = NodeArena::default();
        let root = arena.alloc("");
        Self {
            arena,
            root,
            separator,
        }
    }

    /// The separator this tree splits paths on.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Returns `true` if no paths have been added (or every top-level
    /// branch has been unlinked again).
    pub fn is_empty(&self) -> bool {
        self.arena.node(self.root).children_count == 0
    }

    /// Access a node by id.
    pub fn node(&self, id: NodeId) -> &Node {
        self.arena.node(id)
    }

    /// Mutable access to a node's registration multiset.
    ///
    /// [`Node::register`] and [`Node::unregister`] act on the node alone;
    /// emptying a multiset this way leaves the node linked in place (only
    /// [`PathTree::remove`] unlinks).
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.arena.node_mut(id)
    }

    /// Iterate the direct children of `id` in sibling order.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            cursor: self.arena.node(id).first_child,
        }
    }

    pub(crate) fn root(&self) -> NodeId {
        self.root
    }

    // ---------------------------------------------------------------
    // Lookup
    // ---------------------------------------------------------------

    /// Locate the node exactly matching `path`.
    ///
    /// Returns `None` when any segment fails to match, including for the
    /// empty path (the root is not addressable by callers).
    pub fn find(&self, path: &str) -> Option<NodeId> {
        let segments = segment::split(path, self.separator);
        match self.locate(&segments) {
            Located::Found { node, .. } => Some(node),
            Located::Missing { .. } => None,
        }
    }

    /// Single-pass walk shared by find, add, and remove.
    ///
    /// Descends depth by depth, scanning each parent's sibling list in
    /// ordinal segment order. A candidate sorting after the target means
    /// the target is absent at this depth and the gap sits just before the
    /// candidate; a candidate sorting before it is remembered as
    /// `previous`; an equal candidate either completes the match or is
    /// descended into, resetting `previous`.
    fn locate(&self, segments: &[&str]) -> Located {
        let mut parent = self.root;
        let mut previous = None;
        let mut index = 0;

        if segments.is_empty() {
            return Located::Missing {
                parent,
                previous,
                from: index,
            };
        }

        let mut current = self.arena.node(parent).first_child;
        while let Some(id) = current {
            let node = self.arena.node(id);
            match node.segment.as_str().cmp(segments[index]) {
                Ordering::Greater => break,
                Ordering::Less => {
                    previous = Some(id);
                    current = node.next;
                }
                Ordering::Equal => {
                    index += 1;
                    if index == segments.len() {
                        return Located::Found {
                            node: id,
                            parent,
                            previous,
                        };
                    }
                    parent = id;
                    previous = None;
                    current = node.first_child;
                }
            }
        }

        Located::Missing {
            parent,
            previous,
            from: index,
        }
    }

    // ---------------------------------------------------------------
    // Mutation
    // ---------------------------------------------------------------

    /// Register `owner` on the node for `path`, creating the path's chain
    /// first when it does not exist yet.
    ///
    /// Returns the matched or newly created leaf. Adding an existing path
    /// returns the identical node every time; only its registration
    /// multiset grows. Passing `None` locates or creates the structural
    /// node without recording a registration. The empty path addresses
    /// only the unaddressable root: a no-op returning `None`.
    pub fn add(&mut self, path: &str, owner: Option<OwnerToken>) -> Option<NodeId> {
        let segments = segment::split(path, self.separator);
        if segments.is_empty() {
            return None;
        }

        match self.locate(&segments) {
            Located::Found { node, .. } => {
                if let Some(token) = owner {
                    self.arena.node_mut(node).register(token);
                }
                Some(node)
            }
            Located::Missing {
                parent,
                previous,
                from,
            } => {
                // `from` is always short of the end here, so the chain is
                // never empty.
                let (head, leaf) = self.arena.build_chain(&segments, from)?;
                if let Some(token) = owner {
                    self.arena.node_mut(leaf).register(token);
                }
                self.insert_chain(head, parent, previous);
                debug!(path = %path, "spliced new chain");
                Some(leaf)
            }
        }
    }

    /// Unregister one occurrence of `token` from the node matching `path`.
    ///
    /// Returns `None` when the path is unmatched; otherwise the matched
    /// node, whether or not `token` was actually registered on it. When the
    /// removal empties the node's multiset the node is unlinked from its
    /// parent on the spot: everything beneath it becomes unreachable, even
    /// descendants whose own registrations were never removed. That
    /// orphaning is the contract, not a leak -- callers owning deeper paths
    /// must not rely on an ancestor staying registered.
    pub fn remove(&mut self, path: &str, token: OwnerToken) -> Option<NodeId> {
        let segments = segment::split(path, self.separator);
        let Located::Found {
            node,
            parent,
            previous,
        } = self.locate(&segments)
        else {
            return None;
        };

        if self.arena.node_mut(node).unregister(token) && !self.arena.node(node).is_live() {
            self.unlink(node, parent, previous);
            debug!(path = %path, "unlinked dead node");
        }
        Some(node)
    }

    /// Splice `head` (the first node of a freshly built chain) into
    /// `parent`'s sibling list directly after `previous`.
    ///
    /// The whole chain counts as one new child of `parent`: only the head
    /// attaches here.
    fn insert_chain(&mut self, head: NodeId, parent: NodeId, previous: Option<NodeId>) {
        self.arena.node_mut(parent).children_count += 1;

        let Some(previous) = previous else {
            // New first child.
            let old_first = self.arena.node(parent).first_child;
            self.arena.node_mut(head).next = old_first;
            let parent_node = self.arena.node_mut(parent);
            parent_node.first_child = Some(head);
            if old_first.is_none() {
                parent_node.last_child = Some(head);
            }
            return;
        };

        let after = self.arena.node(previous).next;
        self.arena.node_mut(previous).next = Some(head);
        self.arena.node_mut(head).next = after;
        if self.arena.node(parent).last_child == Some(previous) {
            self.arena.node_mut(parent).last_child = Some(head);
        }
    }

    /// Detach `node` from `parent`'s sibling list.
    ///
    /// Descendants of `node` are not visited or migrated; they simply stop
    /// being reachable from the root.
    fn unlink(&mut self, node: NodeId, parent: NodeId, previous: Option<NodeId>) {
        let next = self.arena.node(node).next;

        let parent_node = self.arena.node_mut(parent);
        if parent_node.first_child == Some(node) {
            parent_node.first_child = next;
        }
        if parent_node.last_child == Some(node) {
            parent_node.last_child = previous;
        }
        parent_node.children_count -= 1;

        if let Some(previous) = previous {
            self.arena.node_mut(previous).next = next;
        }
        self.arena.node_mut(node).next = None;
    }

    // ---------------------------------------------------------------
    // Views
    // ---------------------------------------------------------------

    /// Produce the level-limited collapsing view over live nodes.
    ///
    /// See [`Normalize`] for the emission rules. The iterator borrows the
    /// tree for its whole lifetime, so the tree cannot be mutated while a
    /// traversal is in progress.
    pub fn normalize(&self, max_count: usize) -> Normalize<'_> {
        Normalize::new(self, max_count)
    }
}

impl Default for PathTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the direct children of a node, in sibling order.
pub struct Children<'a> {
    tree: &'a PathTree,
    cursor: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.cursor?;
        self.cursor = self.tree.node(id).next_sibling();
        Some(id)
    }
}

//! Reference-counted path trie with bounded frontier views.
//!
//! `treeline` maintains an in-memory ordered trie keyed by filesystem-style
//! path segments. Each exactly-registered path carries a multiset of opaque
//! [`OwnerToken`]s and stays live while any registration remains;
//! [`PathTree::normalize`] collapses deep branches to render a size-capped
//! summary of the live paths without enumerating every leaf.
//!
//! # Key Types
//!
//! - [`PathTree`] -- The trie: find / add / remove / normalize
//! - [`Node`] / [`NodeId`] -- Arena-addressed path-segment nodes
//! - [`OwnerToken`] -- Opaque, identity-compared ownership handle
//! - [`Normalize`] -- Lazy level-limited collapsing iterator
//!
//! Single-threaded by design: mutation takes `&mut self`, and a
//! [`Normalize`] traversal borrows the tree immutably for its whole
//! lifetime, so the borrow checker rules out mutation mid-traversal.

pub mod dump;
pub mod node;
pub mod normalize;
pub mod segment;
pub mod token;
pub mod tree;

pub use node::{Node, NodeId};
pub use normalize::Normalize;
pub use token::OwnerToken;
pub use tree::{Children, PathTree};

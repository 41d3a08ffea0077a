//! Diagnostic tree rendering.
//!
//! Not part of the core contract: a pure helper that renders the whole
//! tree, dead nodes included, as indented text. Handy in test failures and
//! debug logging; production callers can simply not use it.

use crate::node::NodeId;
use crate::tree::PathTree;

/// Render the tree as indented `+- segment` lines, one node per line,
/// starting from the (empty-segment) root.
///
/// Ancestor levels that still have pending siblings show a `|`
/// continuation bar.
pub fn render(tree: &PathTree) -> String {
    let mut out = String::new();
    let mut levels: Vec<Vec<NodeId>> = vec![vec![tree.root()]];

    while let Some(depth) = levels.len().checked_sub(1) {
        if levels[depth].is_empty() {
            levels.pop();
            continue;
        }
        let id = levels[depth].remove(0);

        for level in &levels[..depth] {
            out.push_str(if level.is_empty() { "   " } else { "|  " });
        }
        out.push_str("+- ");
        out.push_str(tree.node(id).segment());
        out.push('\n');

        let children: Vec<NodeId> = tree.children(id).collect();
        if !children.is_empty() {
            levels.push(children);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::OwnerToken;

    #[test]
    fn renders_indented_branches_with_continuation_bars() {
        let t = OwnerToken::from_raw(1);
        let mut tree = PathTree::with_separator('/');
        for path in [
            "a/b/c",
            "a/b/d",
            "a/b/e",
            "a/b/f",
            "a/b/f/f1",
            "a/b/f/f2",
            "a/b/g",
            "a/b/g/g1",
            "a/b/g/g2",
        ] {
            tree.add(path, Some(t));
        }

        let rendered = render(&tree);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "+- ",
                "   +- a",
                "      +- b",
                "         +- c",
                "         +- d",
                "         +- e",
                "         +- f",
                "         |  +- f1",
                "         |  +- f2",
                "         +- g",
                "            +- g1",
                "            +- g2",
            ]
        );
    }

    #[test]
    fn empty_tree_renders_only_the_root() {
        let tree = PathTree::with_separator('/');
        assert_eq!(render(&tree), "+- \n");
    }
}

use std::fmt;

use crate::tree::{Node, OrderedTree};

/// Prefix repeated once per level of depth in the tree shape.
const INDENT: &str = "-~-";

/// Width of the right-justified field each key is printed in.
const KEY_WIDTH: usize = 3;

/// Prints the keys in ascending order, e.g. `[1, 2, 3, 5]`. An empty tree prints `[]`.
impl fmt::Display for OrderedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, key) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", key)?;
        }
        f.write_str("]")
    }
}

/// `{:?}` prints the set of keys. `{:#?}` prints the shape of the tree, one key per line with the
/// right subtree above its parent and the left subtree below.
impl fmt::Debug for OrderedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.as_tree_string())
        } else {
            f.debug_set().entries(self.iter()).finish()
        }
    }
}

impl OrderedTree {
    /// Renders the tree rotated a quarter turn counter-clockwise: the root sits at the left edge,
    /// right subtrees above their parent and left subtrees below. Each line is one key, indented
    /// once per level of depth.
    ///
    /// Inserting `[3, 1, 2, 5, 6, 4, 0]` renders as:
    ///
    /// ```text
    /// -~--~-  6
    /// -~-  5
    /// -~--~-  4
    ///   3
    /// -~--~-  2
    /// -~-  1
    /// -~--~-  0
    /// ```
    ///
    /// This recurses once per level, so its stack use grows with the height of the tree.
    pub(crate) fn as_tree_string(&self) -> String {
        let mut out = String::new();
        write_subtree(&mut out, self.root(), 0);
        out
    }
}

fn write_subtree(out: &mut String, node: Option<&Node>, depth: usize) {
    let Some(node) = node else {
        return;
    };
    write_subtree(out, node.right.as_deref(), depth + 1);
    out.push_str(&INDENT.repeat(depth));
    out.push_str(&format!("{:>width$}\n", node.key, width = KEY_WIDTH));
    write_subtree(out, node.left.as_deref(), depth + 1);
}

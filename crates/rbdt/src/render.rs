//! Indented text rendering of an induced tree.
//!
//! ```text
//! A_0
//! A_0 -> x
//!   A
//! A_0 -> y
//!   A_1
//!   A_1 -> DC
//!     B
//! ```
//!
//! Each node is printed on its own line, two spaces of indentation per level.
//! An internal node is followed by one `label -> value` line per branch, each
//! immediately followed by that branch's subtree.

use crate::node::Node;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const INDENT: &str = "  ";

pub fn render_tree(root: &Node) -> String {
    let mut out = String::new();
    render_node(root, 0, &mut out);
    out
}

fn render_node(node: &Node, depth: usize, out: &mut String) {
    let line = format!("{}{}", INDENT.repeat(depth), node.label());
    out.push_str(&line);
    out.push('\n');

    if let Some(branches) = node.branches() {
        for (value, child) in branches {
            out.push_str(&line);
            out.push_str(" -> ");
            out.push_str(value);
            out.push('\n');
            render_node(child, depth + 1, out);
        }
    }
}

pub fn write_tree(path: impl AsRef<Path>, root: &Node) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(render_tree(root).as_bytes())?;
    writer.flush()
}

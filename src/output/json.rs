//! JSON output formatting

use std::io::{self, Write};

use crate::tree::TreeNode;

/// Print tree node as pretty-printed JSON to stdout.
pub fn print_json(node: &TreeNode) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_json(node, &mut stdout)?;
    stdout.flush()
}

/// Write tree node as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(node: &TreeNode, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, node).map_err(io::Error::other)?;
    writeln!(out)
}

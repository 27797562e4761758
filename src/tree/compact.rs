//! Collapsing of single-child directory chains

use std::path::MAIN_SEPARATOR_STR;

use super::node::TreeNode;

/// Collapse every chain of single-child directories below `root` into one node.
///
/// A directory whose only child is a directory takes over that child's
/// children, path, size and status, and its name becomes `parent/child`.
/// This repeats until the chain reaches a directory with zero or several
/// children. The root keeps its own label.
pub fn compact(root: TreeNode) -> TreeNode {
    match root {
        TreeNode::Dir {
            name,
            path,
            children,
            size,
            status,
        } => TreeNode::Dir {
            name,
            path,
            children: children.into_iter().map(collapse_chain).collect(),
            size,
            status,
        },
        other => other,
    }
}

fn collapse_chain(node: TreeNode) -> TreeNode {
    let (mut name, mut path, mut children, mut size, mut status) = match node {
        TreeNode::Dir {
            name,
            path,
            children,
            size,
            status,
        } => (name, path, children, size, status),
        other => return other,
    };

    while children.len() == 1 && children[0].is_dir() {
        let Some(TreeNode::Dir {
            name: child_name,
            path: child_path,
            children: grandchildren,
            size: child_size,
            status: child_status,
        }) = children.pop()
        else {
            break;
        };
        name.push_str(MAIN_SEPARATOR_STR);
        name.push_str(&child_name);
        path = child_path;
        children = grandchildren;
        size = child_size;
        status = child_status;
    }

    TreeNode::Dir {
        name,
        path,
        children: children.into_iter().map(collapse_chain).collect(),
        size,
        status,
    }
}

//! Tree formatter for text output
//!
//! This module provides `TreeFormatter` which lays out a `TreeNode` as
//! connector-drawn lines, either as plain text or through a color-capable
//! writer.

use std::io::{self, Write};

use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{DirStatus, TreeNode};

use super::config::OutputConfig;
use super::utils::{TRUNCATED_MARKER, child_prefix, connector, format_size};

/// Formatter for text tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Format the tree as plain text, one line per entry, newline-terminated.
    pub fn format(&self, node: &TreeNode) -> String {
        let mut buffer = Buffer::no_color();
        // Writing into an in-memory buffer cannot fail
        let _ = self.write(node, &mut buffer);
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }

    /// Format the tree as plain text lines without terminators.
    pub fn lines(&self, node: &TreeNode) -> Vec<String> {
        self.format(node).lines().map(str::to_string).collect()
    }

    /// Print the tree to stdout, colored if the config asks for it.
    pub fn print(&self, node: &TreeNode) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write(node, &mut stdout)?;
        stdout.flush()
    }

    /// Write the tree to any color-capable writer.
    pub fn write<W: WriteColor>(&self, node: &TreeNode, out: &mut W) -> io::Result<()> {
        self.write_node(node, out, "", true, true)
    }

    fn write_node<W: WriteColor>(
        &self,
        node: &TreeNode,
        out: &mut W,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) -> io::Result<()> {
        if !is_root {
            write!(out, "{}{}", prefix, connector(is_last))?;
        }

        match node {
            TreeNode::File { name, size, .. } => {
                write!(out, "{}", name)?;
                self.write_size(out, Some(*size))?;
                writeln!(out)?;
            }
            TreeNode::Symlink { name, target, .. } => {
                writeln!(out, "{} -> {}", name, target.display())?;
            }
            TreeNode::Dir {
                name,
                children,
                size,
                status,
                ..
            } => {
                self.write_dir_label(out, name)?;
                self.write_size(out, *size)?;
                match status {
                    DirStatus::Complete => {}
                    DirStatus::Truncated => write!(out, " {}", TRUNCATED_MARKER)?,
                    DirStatus::Unreadable { reason } => {
                        write!(out, " [error opening dir: {}]", reason)?
                    }
                }
                writeln!(out)?;

                let new_prefix = if is_root {
                    String::new()
                } else {
                    child_prefix(prefix, is_last)
                };
                for (i, child) in children.iter().enumerate() {
                    let child_is_last = i == children.len() - 1;
                    self.write_node(child, out, &new_prefix, child_is_last, false)?;
                }
            }
        }
        Ok(())
    }

    fn write_dir_label<W: WriteColor>(&self, out: &mut W, name: &str) -> io::Result<()> {
        if !self.config.use_color {
            return write!(out, "{}", name);
        }
        out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(out, "{}", name)?;
        out.reset()
    }

    fn write_size<W: Write>(&self, out: &mut W, size: Option<u64>) -> io::Result<()> {
        match size {
            Some(bytes) if self.config.show_size => write!(out, " ({})", format_size(bytes)),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn file(name: &str, size: u64) -> TreeNode {
        TreeNode::File {
            name: name.to_string(),
            path: PathBuf::from(name),
            size,
        }
    }

    fn sample_tree() -> TreeNode {
        TreeNode::Dir {
            name: ".".to_string(),
            path: PathBuf::from("."),
            children: vec![
                file("Cargo.toml", 1024),
                TreeNode::Dir {
                    name: "src".to_string(),
                    path: PathBuf::from("src"),
                    children: vec![file("lib.rs", 0), file("main.rs", 2048)],
                    size: Some(2048),
                    status: DirStatus::Complete,
                },
            ],
            size: Some(3072),
            status: DirStatus::Complete,
        }
    }

    #[test]
    fn test_format_output() {
        let formatter = TreeFormatter::new(OutputConfig::default());
        let lines = formatter.lines(&sample_tree());

        assert_eq!(
            lines,
            vec![
                ".",
                "├── Cargo.toml",
                "└── src",
                "    ├── lib.rs",
                "    └── main.rs",
            ]
        );
    }

    #[test]
    fn test_nested_prefixes() {
        let tree = TreeNode::Dir {
            name: "root".to_string(),
            path: PathBuf::from("root"),
            children: vec![
                TreeNode::Dir {
                    name: "a".to_string(),
                    path: PathBuf::from("a"),
                    children: vec![file("x", 1)],
                    size: Some(1),
                    status: DirStatus::Complete,
                },
                file("z", 1),
            ],
            size: Some(2),
            status: DirStatus::Complete,
        };
        let formatter = TreeFormatter::new(OutputConfig::default());

        assert_eq!(
            formatter.format(&tree),
            "root\n├── a\n│   └── x\n└── z\n"
        );
    }

    #[test]
    fn test_sizes() {
        let formatter = TreeFormatter::new(OutputConfig {
            show_size: true,
            ..Default::default()
        });
        let lines = formatter.lines(&sample_tree());

        assert_eq!(lines[0], ". (3.0KB)");
        assert_eq!(lines[1], "├── Cargo.toml (1.0KB)");
        assert_eq!(lines[2], "└── src (2.0KB)");
        assert_eq!(lines[3], "    ├── lib.rs (0B)");
    }

    #[test]
    fn test_markers() {
        let tree = TreeNode::Dir {
            name: ".".to_string(),
            path: PathBuf::from("."),
            children: vec![
                TreeNode::Dir {
                    name: "deep".to_string(),
                    path: PathBuf::from("deep"),
                    children: Vec::new(),
                    size: None,
                    status: DirStatus::Truncated,
                },
                TreeNode::Dir {
                    name: "locked".to_string(),
                    path: PathBuf::from("locked"),
                    children: Vec::new(),
                    size: None,
                    status: DirStatus::Unreadable {
                        reason: "permission denied".to_string(),
                    },
                },
                TreeNode::Symlink {
                    name: "link".to_string(),
                    path: PathBuf::from("link"),
                    target: PathBuf::from("deep"),
                },
            ],
            size: None,
            status: DirStatus::Complete,
        };
        let formatter = TreeFormatter::new(OutputConfig {
            show_size: true,
            ..Default::default()
        });
        let lines = formatter.lines(&tree);

        assert_eq!(lines[0], ".");
        assert_eq!(lines[1], "├── deep [...]");
        assert_eq!(lines[2], "├── locked [error opening dir: permission denied]");
        assert_eq!(lines[3], "└── link -> deep");
    }

    #[test]
    fn test_color_only_on_directories() {
        let formatter = TreeFormatter::new(OutputConfig {
            use_color: true,
            show_size: false,
        });
        let mut buffer = Buffer::ansi();
        formatter.write(&sample_tree(), &mut buffer).unwrap();
        let output = String::from_utf8(buffer.into_inner()).unwrap();

        assert!(output.contains("\x1b[1m\x1b[34msrc\x1b[0m"), "{output:?}");
        assert!(output.contains("├── Cargo.toml\n"), "{output:?}");
        assert!(output.contains("└── main.rs\n"), "{output:?}");
    }

    #[test]
    fn test_plain_format_ignores_color() {
        let formatter = TreeFormatter::new(OutputConfig {
            use_color: true,
            show_size: false,
        });
        let output = formatter.format(&sample_tree());

        assert!(!output.contains('\x1b'));
        assert!(output.contains("└── src\n"));
    }
}

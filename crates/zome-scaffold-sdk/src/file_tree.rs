//! In-memory file trees produced by the generators.
//!
//! Generators never touch the file system. They return a [`FileNode`], and
//! the caller decides whether to print it or hand it to [`write_file_tree`].

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A generated file or a directory of generated nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FileNode {
    File {
        content: String,
    },
    Directory {
        #[serde(default)]
        children: BTreeMap<String, FileNode>,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum FileTreeError {
    #[error("invalid path in file tree: {}", .0.display())]
    InvalidPath(PathBuf),
    #[error("cannot insert below file '{}'", .0.display())]
    NotADirectory(PathBuf),
    #[error("refusing to overwrite existing file '{}'", .0.display())]
    AlreadyExists(PathBuf),
    #[error("failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl FileNode {
    pub fn file(content: impl Into<String>) -> Self {
        Self::File {
            content: content.into(),
        }
    }

    pub fn dir() -> Self {
        Self::Directory {
            children: BTreeMap::new(),
        }
    }

    /// File content, if this node is a file.
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::File { content } => Some(content),
            Self::Directory { .. } => None,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }

    /// Insert `node` at a relative `path`, creating intermediate directories.
    /// An existing node at the same path is replaced.
    pub fn insert(&mut self, path: impl AsRef<Path>, node: FileNode) -> Result<(), FileTreeError> {
        let path = path.as_ref();
        let segments = segments(path)?;
        let Some((last, parents)) = segments.split_last() else {
            return Err(FileTreeError::InvalidPath(path.to_path_buf()));
        };

        let mut current = self;
        for segment in parents {
            let Self::Directory { children } = current else {
                return Err(FileTreeError::NotADirectory(path.to_path_buf()));
            };
            current = children
                .entry(segment.clone())
                .or_insert_with(FileNode::dir);
        }

        match current {
            Self::Directory { children } => {
                children.insert(last.clone(), node);
                Ok(())
            }
            Self::File { .. } => Err(FileTreeError::NotADirectory(path.to_path_buf())),
        }
    }

    /// Look up the node at a relative `path`.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&FileNode> {
        let segments = segments(path.as_ref()).ok()?;
        let mut current = self;
        for segment in &segments {
            match current {
                Self::Directory { children } => current = children.get(segment)?,
                Self::File { .. } => return None,
            }
        }
        Some(current)
    }

    /// All files with their paths relative to this node, in path order.
    pub fn flatten(&self) -> Vec<(PathBuf, &str)> {
        let mut files = Vec::new();
        collect_files(self, PathBuf::new(), &mut files);
        files
    }
}

fn collect_files<'a>(node: &'a FileNode, prefix: PathBuf, out: &mut Vec<(PathBuf, &'a str)>) {
    match node {
        FileNode::File { content } => out.push((prefix, content.as_str())),
        FileNode::Directory { children } => {
            for (name, child) in children {
                collect_files(child, prefix.join(name), out);
            }
        }
    }
}

fn segments(path: &Path) -> Result<Vec<String>, FileTreeError> {
    path.components()
        .map(|c| match c {
            Component::Normal(s) => s
                .to_str()
                .map(str::to_string)
                .ok_or_else(|| FileTreeError::InvalidPath(path.to_path_buf())),
            _ => Err(FileTreeError::InvalidPath(path.to_path_buf())),
        })
        .collect()
}

/// Write a file tree below `root` and return the written file paths.
///
/// With `overwrite` off, nothing is written when any target file already
/// exists.
pub fn write_file_tree(
    root: &Path,
    tree: &FileNode,
    overwrite: bool,
) -> Result<Vec<PathBuf>, FileTreeError> {
    let files: Vec<(PathBuf, &str)> = tree
        .flatten()
        .into_iter()
        .map(|(relative, content)| (root.join(relative), content))
        .collect();

    if !overwrite {
        if let Some((existing, _)) = files.iter().find(|(path, _)| path.exists()) {
            return Err(FileTreeError::AlreadyExists(existing.clone()));
        }
    }

    let mut written = Vec::with_capacity(files.len());
    for (path, content) in files {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| FileTreeError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        std::fs::write(&path, content).map_err(|e| FileTreeError::Io {
            path: path.clone(),
            source: e,
        })?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote generated file");
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> FileNode {
        let mut tree = FileNode::dir();
        tree.insert("Cargo.toml", FileNode::file("[package]\n")).unwrap();
        tree.insert("src/lib.rs", FileNode::file("mod post;\n")).unwrap();
        tree.insert("src/post.rs", FileNode::file("pub struct Post;\n"))
            .unwrap();
        tree
    }

    #[test]
    fn test_insert_and_get() {
        let tree = sample_tree();
        assert_eq!(
            tree.get("src/lib.rs").and_then(FileNode::content),
            Some("mod post;\n")
        );
        assert!(!tree.get("src").unwrap().is_file());
        assert!(tree.get("src/missing.rs").is_none());
        assert!(tree.get("Cargo.toml/nested").is_none());
    }

    #[test]
    fn test_insert_replaces_existing() {
        let mut tree = sample_tree();
        tree.insert("src/post.rs", FileNode::file("replaced")).unwrap();
        assert_eq!(
            tree.get("src/post.rs").and_then(FileNode::content),
            Some("replaced")
        );
    }

    #[test]
    fn test_insert_below_file_fails() {
        let mut tree = sample_tree();
        let result = tree.insert("Cargo.toml/inner", FileNode::file(""));
        assert!(matches!(result, Err(FileTreeError::NotADirectory(_))));
    }

    #[test]
    fn test_insert_rejects_parent_components() {
        let mut tree = FileNode::dir();
        assert!(matches!(
            tree.insert("../escape.rs", FileNode::file("")),
            Err(FileTreeError::InvalidPath(_))
        ));
        assert!(matches!(
            tree.insert("", FileNode::file("")),
            Err(FileTreeError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_flatten_is_path_ordered() {
        let tree = sample_tree();
        let paths: Vec<PathBuf> = tree.flatten().into_iter().map(|(p, _)| p).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("Cargo.toml"),
                PathBuf::from("src/lib.rs"),
                PathBuf::from("src/post.rs"),
            ]
        );
    }

    #[test]
    fn test_serde_tagging() {
        let json = serde_json::to_value(FileNode::file("x")).unwrap();
        assert_eq!(json["type"], "file");
        assert_eq!(json["content"], "x");
    }

    #[test]
    fn test_write_file_tree() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_file_tree(dir.path(), &sample_tree(), false).unwrap();
        assert_eq!(written.len(), 3);
        let lib = std::fs::read_to_string(dir.path().join("src/lib.rs")).unwrap();
        assert_eq!(lib, "mod post;\n");
    }

    #[test]
    fn test_write_file_tree_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Cargo.toml"), "keep me").unwrap();

        let result = write_file_tree(dir.path(), &sample_tree(), false);
        assert!(matches!(result, Err(FileTreeError::AlreadyExists(_))));
        // Nothing else was written
        assert!(!dir.path().join("src").exists());
        assert_eq!(
            std::fs::read_to_string(dir.path().join("Cargo.toml")).unwrap(),
            "keep me"
        );
    }

    #[test]
    fn test_write_file_tree_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Cargo.toml"), "old").unwrap();
        write_file_tree(dir.path(), &sample_tree(), true).unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.path().join("Cargo.toml")).unwrap(),
            "[package]\n"
        );
    }
}

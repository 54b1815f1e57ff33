//! Read-only directory-tree accessors.
//!
//! The evaluator never touches the filesystem directly; it walks a `DirNode`
//! tree. `FsNode` binds the trait to a real on-disk directory in native
//! listing order, and `MemNode` provides an in-memory tree for tests and
//! embedders that already hold a materialized structure.

use std::fs;
use std::path::{Path, PathBuf};

/// Read-only handle over one filesystem entry.
///
/// The caller owns the tree; implementations must not mutate it. `children`
/// returns direct children in the tree's native listing order.
pub trait DirNode: Sized + Clone {
    /// Entry name (final path segment).
    fn name(&self) -> &str;
    /// Full path string used in issue locations.
    fn path(&self) -> &str;
    fn is_directory(&self) -> bool;
    /// Lowercase extension without the leading dot; empty if none.
    fn extension(&self) -> String;
    /// Direct children in listing order.
    fn children(&self) -> Vec<Self>;
    /// Direct child by exact name, if present.
    fn find_child(&self, name: &str) -> Option<Self>;
}

/// `DirNode` over a real filesystem path.
#[derive(Debug, Clone)]
pub struct FsNode {
    path: PathBuf,
    path_str: String,
    name: String,
    is_dir: bool,
}

impl FsNode {
    /// Open a node at `path`. Returns `None` when the entry does not exist.
    pub fn open(path: &Path) -> Option<FsNode> {
        let meta = fs::metadata(path).ok()?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Some(FsNode {
            path_str: path.to_string_lossy().to_string(),
            path: path.to_path_buf(),
            name,
            is_dir: meta.is_dir(),
        })
    }
}

impl DirNode for FsNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn path(&self) -> &str {
        &self.path_str
    }

    fn is_directory(&self) -> bool {
        self.is_dir
    }

    fn extension(&self) -> String {
        self.path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    }

    fn children(&self) -> Vec<FsNode> {
        if !self.is_dir {
            return Vec::new();
        }
        let Ok(entries) = fs::read_dir(&self.path) else {
            return Vec::new();
        };
        entries
            .flatten()
            .filter_map(|e| FsNode::open(&e.path()))
            .collect()
    }

    fn find_child(&self, name: &str) -> Option<FsNode> {
        if !self.is_dir || name.is_empty() {
            return None;
        }
        FsNode::open(&self.path.join(name))
    }
}

/// In-memory `DirNode` for tests and embedders.
///
/// Build with [`MemNode::dir`]/[`MemNode::file`] and fix absolute paths with
/// [`MemNode::rooted`]:
///
/// ```
/// use dirlint::tree::MemNode;
/// let root = MemNode::rooted(
///     "/repo",
///     vec![
///         MemNode::dir("src", vec![MemNode::file("main.rs")]),
///         MemNode::file("README.md"),
///     ],
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MemNode {
    name: String,
    path: String,
    is_dir: bool,
    children: Vec<MemNode>,
}

impl MemNode {
    /// A directory entry; path is assigned by [`MemNode::rooted`].
    pub fn dir(name: &str, children: Vec<MemNode>) -> MemNode {
        MemNode {
            name: name.to_string(),
            path: String::new(),
            is_dir: true,
            children,
        }
    }

    /// A file entry; path is assigned by [`MemNode::rooted`].
    pub fn file(name: &str) -> MemNode {
        MemNode {
            name: name.to_string(),
            path: String::new(),
            is_dir: false,
            children: Vec::new(),
        }
    }

    /// Anchor a tree at `path`, assigning full paths to every entry.
    pub fn rooted(path: &str, children: Vec<MemNode>) -> MemNode {
        let name = path.rsplit('/').next().unwrap_or(path).to_string();
        let mut root = MemNode {
            name,
            path: path.to_string(),
            is_dir: true,
            children,
        };
        root.assign_child_paths();
        root
    }

    fn assign_child_paths(&mut self) {
        for child in &mut self.children {
            child.path = format!("{}/{}", self.path, child.name);
            child.assign_child_paths();
        }
    }
}

impl DirNode for MemNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn is_directory(&self) -> bool {
        self.is_dir
    }

    fn extension(&self) -> String {
        match self.name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => ext.to_lowercase(),
            _ => String::new(),
        }
    }

    fn children(&self) -> Vec<MemNode> {
        self.children.clone()
    }

    fn find_child(&self, name: &str) -> Option<MemNode> {
        self.children.iter().find(|c| c.name == name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_mem_tree_paths_and_lookup() {
        let root = MemNode::rooted(
            "/repo",
            vec![
                MemNode::dir("src", vec![MemNode::file("main.rs")]),
                MemNode::file("README.md"),
            ],
        );
        assert_eq!(root.path(), "/repo");
        assert!(root.is_directory());
        let src = root.find_child("src").unwrap();
        assert_eq!(src.path(), "/repo/src");
        let main = src.find_child("main.rs").unwrap();
        assert_eq!(main.path(), "/repo/src/main.rs");
        assert_eq!(main.extension(), "rs");
        assert!(!main.is_directory());
        assert!(root.find_child("nope").is_none());
    }

    #[test]
    fn test_mem_extension_rules() {
        assert_eq!(MemNode::file("a.TXT").extension(), "txt");
        assert_eq!(MemNode::file("archive.tar.gz").extension(), "gz");
        assert_eq!(MemNode::file("Makefile").extension(), "");
        // Leading-dot names carry no extension.
        assert_eq!(MemNode::file(".gitignore").extension(), "");
    }

    #[test]
    fn test_fs_node_reflects_disk() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("src")).unwrap();
        fs::write(root.join("src").join("Main.RS"), "fn main() {}").unwrap();
        fs::write(root.join("README.md"), "# hi").unwrap();

        let node = FsNode::open(root).unwrap();
        assert!(node.is_directory());
        assert_eq!(node.children().len(), 2);

        let src = node.find_child("src").unwrap();
        assert!(src.is_directory());
        let main = src.find_child("Main.RS").unwrap();
        assert!(!main.is_directory());
        assert_eq!(main.extension(), "rs");

        assert!(node.find_child("absent").is_none());
        assert!(FsNode::open(&root.join("absent")).is_none());
    }
}

//! Repository tree data model
//!
//! Nodes live in an arena; a node refers to its parent by [`NodeId`] and
//! owns its children. Parent links are only used to rebuild paths.

use super::Change;

const SEPARATOR: char = '/';

/// Handle to a node in a [`RepoTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Kind of repository item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemKind {
    #[default]
    File,
    Directory,
}

/// One child reported by `svn list`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// Name without the trailing `/` of directories
    pub name: String,
    pub kind: ItemKind,
}

/// A node of the repository tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoItem {
    /// Path segment, or the full root path for the root
    pub name: String,
    pub kind: ItemKind,
    /// Has a directory listing ever completed for this node?
    pub listed: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl RepoItem {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_directory(&self) -> bool {
        self.kind == ItemKind::Directory
    }
}

/// Lazily populated repository tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoTree {
    nodes: Vec<Option<RepoItem>>,
    free: Vec<usize>,
    root: NodeId,
}

impl RepoTree {
    /// Create a tree holding only the root directory
    pub fn new(root_path: impl Into<String>) -> Self {
        let root = RepoItem {
            name: root_path.into(),
            kind: ItemKind::Directory,
            listed: false,
            parent: None,
            children: Vec::new(),
        };
        Self {
            nodes: vec![Some(root)],
            free: Vec::new(),
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&RepoItem> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    /// Children of `id` in listing order (empty for unknown nodes)
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(RepoItem::children).unwrap_or(&[])
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Full path of a node: its ancestors' names joined with `/`
    pub fn full_path(&self, id: NodeId) -> String {
        let mut segments = Vec::new();
        let mut current = self.get(id);
        while let Some(item) = current {
            segments.push(item.name.as_str());
            current = item.parent.and_then(|p| self.get(p));
        }

        let mut path = String::new();
        for segment in segments.iter().rev() {
            if !path.is_empty() && !path.ends_with(SEPARATOR) {
                path.push(SEPARATOR);
            }
            path.push_str(segment);
        }
        path
    }

    /// Find the node whose full path equals `full_path`
    pub fn find(&self, full_path: &str) -> Option<NodeId> {
        let mut stack = vec![(self.root, self.full_path(self.root))];
        while let Some((id, path)) = stack.pop() {
            if path == full_path {
                return Some(id);
            }
            if !full_path.starts_with(path.as_str()) {
                continue;
            }
            for &child in self.children(id).iter().rev() {
                if let Some(item) = self.get(child) {
                    stack.push((child, join_path(&path, &item.name)));
                }
            }
        }
        None
    }

    /// Replace the children of `id` wholesale
    ///
    /// The previous subtrees are released. Returns false when `id` is not
    /// a live node.
    pub fn replace_children(&mut self, id: NodeId, entries: Vec<ListEntry>) -> bool {
        let Some(item) = self.get(id) else {
            return false;
        };
        let old = item.children.clone();
        for child in old {
            self.release(child);
        }

        let children: Vec<NodeId> = entries
            .into_iter()
            .map(|entry| {
                self.insert(RepoItem {
                    name: entry.name,
                    kind: entry.kind,
                    listed: false,
                    parent: Some(id),
                    children: Vec::new(),
                })
            })
            .collect();

        if let Some(Some(item)) = self.nodes.get_mut(id.0) {
            item.children = children;
            item.listed = true;
        }
        true
    }

    /// Status code of the first change touching this node's path
    pub fn change_marker<'a>(&self, id: NodeId, changes: &'a [Change]) -> Option<&'a str> {
        let path = self.full_path(id);
        changes
            .iter()
            .find(|c| c.item.contains(path.as_str()))
            .map(|c| c.status.as_str())
    }

    /// Depth-first walk from the root, yielding (node, depth)
    pub fn walk(&self) -> Vec<(NodeId, usize)> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack = vec![(self.root, 0)];
        while let Some((id, depth)) = stack.pop() {
            out.push((id, depth));
            for &child in self.children(id).iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        out
    }

    fn insert(&mut self, item: RepoItem) -> NodeId {
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(item);
                NodeId(slot)
            }
            None => {
                self.nodes.push(Some(item));
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(item) = self.nodes.get_mut(current.0).and_then(Option::take) {
                stack.extend(item.children);
                self.free.push(current.0);
            }
        }
    }
}

fn join_path(parent: &str, name: &str) -> String {
    if parent.ends_with(SEPARATOR) {
        format!("{parent}{name}")
    } else {
        format!("{parent}{SEPARATOR}{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> ListEntry {
        ListEntry {
            name: name.to_string(),
            kind: ItemKind::File,
        }
    }

    fn dir(name: &str) -> ListEntry {
        ListEntry {
            name: name.to_string(),
            kind: ItemKind::Directory,
        }
    }

    #[test]
    fn test_root_path_is_its_name() {
        let tree = RepoTree::new("/home/me/wc");
        assert_eq!(tree.full_path(tree.root()), "/home/me/wc");
        assert!(tree.get(tree.root()).unwrap().is_directory());
    }

    #[test]
    fn test_full_path_inserts_separator() {
        let mut tree = RepoTree::new("/wc");
        let root = tree.root();
        tree.replace_children(root, vec![dir("src"), file("README")]);
        let src = tree.children(root)[0];
        tree.replace_children(src, vec![file("main.c")]);
        let main = tree.children(src)[0];

        assert_eq!(tree.full_path(src), "/wc/src");
        assert_eq!(tree.full_path(main), "/wc/src/main.c");
    }

    #[test]
    fn test_full_path_no_double_separator() {
        let mut tree = RepoTree::new("https://svn.example.org/repo/");
        let root = tree.root();
        tree.replace_children(root, vec![dir("trunk")]);
        let trunk = tree.children(root)[0];
        assert_eq!(tree.full_path(trunk), "https://svn.example.org/repo/trunk");
    }

    #[test]
    fn test_find_nested() {
        let mut tree = RepoTree::new("/wc");
        let root = tree.root();
        tree.replace_children(root, vec![dir("a"), dir("b")]);
        let b = tree.children(root)[1];
        tree.replace_children(b, vec![file("x.txt")]);

        assert_eq!(tree.find("/wc"), Some(root));
        assert_eq!(tree.find("/wc/b"), Some(b));
        assert_eq!(tree.find("/wc/b/x.txt"), Some(tree.children(b)[0]));
        assert_eq!(tree.find("/wc/c"), None);
    }

    #[test]
    fn test_replace_children_releases_old_subtree() {
        let mut tree = RepoTree::new("/wc");
        let root = tree.root();
        tree.replace_children(root, vec![dir("a")]);
        let a = tree.children(root)[0];
        tree.replace_children(a, vec![file("1"), file("2")]);
        assert_eq!(tree.len(), 4);

        tree.replace_children(root, vec![file("only")]);

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.find("/wc/a/1"), None);
        assert_eq!(tree.find("/wc/only"), Some(tree.children(root)[0]));
        assert!(tree.get(root).unwrap().listed);
    }

    #[test]
    fn test_replace_children_of_released_node_is_rejected() {
        let mut tree = RepoTree::new("/wc");
        let root = tree.root();
        tree.replace_children(root, vec![dir("a")]);
        let a = tree.children(root)[0];
        tree.replace_children(root, Vec::new());

        assert!(!tree.replace_children(a, vec![file("late")]));
    }

    #[test]
    fn test_change_marker() {
        let mut tree = RepoTree::new("/wc");
        let root = tree.root();
        tree.replace_children(root, vec![dir("src"), file("README")]);
        let src = tree.children(root)[0];
        let readme = tree.children(root)[1];
        let changes = vec![Change::new("M", "/wc/src/a.txt")];

        assert_eq!(tree.change_marker(src, &changes), Some("M"));
        assert_eq!(tree.change_marker(readme, &changes), None);
    }

    #[test]
    fn test_walk_is_depth_first() {
        let mut tree = RepoTree::new("/wc");
        let root = tree.root();
        tree.replace_children(root, vec![dir("a"), file("b")]);
        let a = tree.children(root)[0];
        tree.replace_children(a, vec![file("c")]);

        let names: Vec<(String, usize)> = tree
            .walk()
            .into_iter()
            .map(|(id, depth)| (tree.get(id).unwrap().name.clone(), depth))
            .collect();
        assert_eq!(
            names,
            vec![
                ("/wc".to_string(), 0),
                ("a".to_string(), 1),
                ("c".to_string(), 2),
                ("b".to_string(), 1),
            ]
        );
    }
}

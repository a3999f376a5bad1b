use std::collections::BTreeMap;

/// Lowercase a string one character at a time. A character whose lowercase
/// form is several characters (eg: 'İ') contributes all of them.
pub fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

#[derive(Debug, Default)]
struct Node {
    // Ordered so that traversal (and thus search results) is deterministic.
    children: BTreeMap<char, Node>,

    // Original-cased label ending at this node. Some(_) iff terminal.
    label: Option<String>,
}

impl Node {
    fn is_terminal(&self) -> bool {
        self.label.is_some()
    }
}

/// Case-insensitive prefix tree that hands back labels in their original casing.
#[derive(Debug, Default)]
pub struct PrefixIndex {
    root: Node,
    len: usize,
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a label. Labels that lowercase to the same string share a node
    /// and the most recently inserted casing wins.
    pub fn insert(&mut self, label: &str) {
        let mut node = &mut self.root;
        for c in fold(label) {
            node = node.children.entry(c).or_default();
        }

        if !node.is_terminal() {
            self.len += 1;
        }
        node.label = Some(label.to_string());
    }

    /// Return every label that starts with `prefix` (case-insensitive), in
    /// ascending lowercase order. A prefix that matches nothing returns an
    /// empty list.
    pub fn search(&self, prefix: &str) -> Vec<String> {
        let node = match self.find(prefix) {
            Some(n) => n,
            None => return Vec::new(),
        };

        let mut out = Vec::new();
        collect(node, &mut out);
        out
    }

    /// Check whether the exact label (case-insensitive) has been inserted.
    pub fn contains(&self, label: &str) -> bool {
        self.find(label).is_some_and(Node::is_terminal)
    }

    /// Number of distinct (lowercased) labels in the index.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total number of nodes including the root.
    pub fn node_count(&self) -> usize {
        count(&self.root)
    }

    /// Walk from the root along the lowercased prefix.
    fn find(&self, prefix: &str) -> Option<&Node> {
        let mut node = &self.root;
        for c in fold(prefix) {
            node = node.children.get(&c)?;
        }
        Some(node)
    }
}

/// Depth-first collection of terminal labels, a node before its children.
fn collect(node: &Node, out: &mut Vec<String>) {
    if let Some(label) = &node.label {
        out.push(label.clone());
    }
    for child in node.children.values() {
        collect(child, out);
    }
}

fn count(node: &Node) -> usize {
    1 + node.children.values().map(count).sum::<usize>()
}

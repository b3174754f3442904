//! Debug utilities: tree-shape dump and invariant checking.

use crate::node::{longest_common_prefix, Node};
use crate::tree::RadixTree;

impl<V> RadixTree<V> {
    /// Print the tree shape for debugging. Terminal nodes are marked with
    /// `*`; segments are rendered lossily as UTF-8, so binary keys print as
    /// replacement characters.
    pub fn debug_print(&self) {
        println!("++");
        for child in &self.root().children {
            Self::print_node(child, 1);
        }
    }

    fn print_node(node: &Node<V>, depth: usize) {
        let marker = if node.is_terminal() { "*" } else { " " };
        let indent = " ".repeat(depth);
        println!(
            "{marker}{indent}|-{}",
            String::from_utf8_lossy(&node.segment)
        );
        for child in &node.children {
            Self::print_node(child, depth + 1);
        }
    }

    /// Walk the whole tree and report every violated structural invariant.
    /// An empty result means the structure is sound.
    pub fn verify_integrity(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let root = self.root();
        if !root.segment.is_empty() {
            issues.push("root has a non-empty segment".to_string());
        }
        if root.is_terminal() {
            issues.push("root is terminal".to_string());
        }
        Self::verify_node(root, &mut issues, Vec::new());
        issues
    }

    fn verify_node(node: &Node<V>, issues: &mut Vec<String>, path: Vec<u8>) {
        for pair in node.children.windows(2) {
            if pair[0].segment[0] >= pair[1].segment[0] {
                issues.push(format!(
                    "children out of order at path {path:?}: {:#04x} before {:#04x}",
                    pair[0].segment[0], pair[1].segment[0]
                ));
            }
            if longest_common_prefix(&pair[0].segment, &pair[1].segment) > 0 {
                issues.push(format!(
                    "sibling segments share a leading run at path {path:?}"
                ));
            }
        }
        for child in &node.children {
            if child.segment.is_empty() {
                issues.push(format!("empty segment below path {path:?}"));
                continue;
            }
            if !child.is_terminal() && child.children.is_empty() {
                issues.push(format!(
                    "non-terminal childless node {:?} below path {path:?}",
                    child.segment
                ));
            }
            let mut child_path = path.clone();
            child_path.extend_from_slice(&child.segment);
            Self::verify_node(child, issues, child_path);
        }
    }
}

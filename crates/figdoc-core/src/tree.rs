//! The immutable document tree.
//!
//! A [`Tree`] pairs one [`Node`] with its ordered children. The representation
//! is private: trees are built with [`Tree::singleton`] and [`Tree::new`] and
//! read through accessors, a pre-order iterator, and [`Tree::fold`].
//!
//! Nothing here recurses on the native stack, so documents nested far deeper
//! than the thread's stack allows can still be folded, compared, cloned,
//! formatted with `Debug`, and dropped. The optional serde representation is
//! nested and does recurse.

use crate::node::Node;
use crate::types::NodeId;
use std::fmt;

/// An immutable multiway tree of document nodes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tree {
    node: Node,
    children: Vec<Tree>,
}

impl Tree {
    /// A tree with no children.
    pub fn singleton(node: Node) -> Self {
        Self {
            node,
            children: Vec::new(),
        }
    }

    /// A tree with the given children, kept in order.
    pub fn new(node: Node, children: Vec<Tree>) -> Self {
        Self { node, children }
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Immediate children, bottom-most first.
    pub fn children(&self) -> &[Tree] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Fold every node into one value.
    ///
    /// Nodes are visited exactly once, in pre-order: a node before its
    /// children, children left to right.
    pub fn fold<B, F>(&self, init: B, mut visit: F) -> B
    where
        F: FnMut(B, &Node) -> B,
    {
        self.iter().fold(init, |acc, tree| visit(acc, &tree.node))
    }

    /// Iterate over every subtree in pre-order.
    pub fn iter(&self) -> Traverse<'_> {
        Traverse { stack: vec![self] }
    }

    /// Total number of nodes, this one included.
    pub fn node_count(&self) -> usize {
        self.fold(0, |count, _| count + 1)
    }

    /// Find the first subtree, in pre-order, whose node has the given id.
    pub fn find(&self, id: &str) -> Option<&Tree> {
        self.iter().find(|tree| tree.node.id().as_str() == id)
    }

    /// Ids of every node, in pre-order.
    pub fn ids(&self) -> Vec<&NodeId> {
        self.iter().map(|tree| tree.node.id()).collect()
    }
}

impl Clone for Tree {
    fn clone(&self) -> Self {
        struct Pending<'a> {
            source: &'a Tree,
            next: usize,
            children: Vec<Tree>,
        }

        impl<'a> Pending<'a> {
            fn new(source: &'a Tree) -> Self {
                Self {
                    source,
                    next: 0,
                    children: Vec::with_capacity(source.children.len()),
                }
            }
        }

        let mut stack = vec![Pending::new(self)];
        while let Some(mut top) = stack.pop() {
            if let Some(child) = top.source.children.get(top.next) {
                top.next += 1;
                stack.push(top);
                stack.push(Pending::new(child));
                continue;
            }
            let tree = Tree::new(top.source.node.clone(), top.children);
            match stack.last_mut() {
                Some(parent) => parent.children.push(tree),
                None => return tree,
            }
        }
        unreachable!("clone stack emptied before the root was rebuilt")
    }
}

impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];
        while let Some((a, b)) = pairs.pop() {
            if a.node != b.node || a.children.len() != b.children.len() {
                return false;
            }
            pairs.extend(a.children.iter().zip(&b.children));
        }
        true
    }
}

impl Drop for Tree {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut tree) = pending.pop() {
            pending.append(&mut tree.children);
        }
    }
}

/// Formats as a flat pre-order list of `(depth, node)` pairs.
impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut stack = vec![(0usize, self)];
        while let Some((depth, tree)) = stack.pop() {
            list.entry(&(depth, &tree.node));
            stack.extend(tree.children.iter().rev().map(|child| (depth + 1, child)));
        }
        list.finish()
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = &'a Tree;
    type IntoIter = Traverse<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator over the subtrees of a [`Tree`].
pub struct Traverse<'a> {
    stack: Vec<&'a Tree>,
}

impl<'a> Iterator for Traverse<'a> {
    type Item = &'a Tree;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.stack.pop()?;
        // Push children in reverse order so they're processed left-to-right
        self.stack.extend(tree.children.iter().rev());
        Some(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::Identity;
    use crate::node::DocumentNode;
    use proptest::prelude::*;

    fn doc(id: &str) -> Node {
        Node::Document(DocumentNode {
            identity: Identity::new(id, id),
        })
    }

    fn sample() -> Tree {
        Tree::new(
            doc("root"),
            vec![
                Tree::new(doc("a"), vec![Tree::singleton(doc("a1")), Tree::singleton(doc("a2"))]),
                Tree::singleton(doc("b")),
            ],
        )
    }

    #[test]
    fn test_singleton() {
        let tree = Tree::singleton(doc("only"));
        assert!(tree.is_leaf());
        assert_eq!(tree.children().len(), 0);
        assert_eq!(tree.node().name(), "only");
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn test_fold_is_pre_order() {
        let names = sample().fold(Vec::new(), |mut acc, node| {
            acc.push(node.name().to_string());
            acc
        });
        assert_eq!(names, vec!["root", "a", "a1", "a2", "b"]);
    }

    #[test]
    fn test_children_keep_order() {
        let tree = sample();
        let names: Vec<_> = tree.children().iter().map(|t| t.node().name()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_find() {
        let tree = sample();
        assert_eq!(tree.find("a2").map(|t| t.node().name()), Some("a2"));
        assert!(tree.find("missing").is_none());
    }

    #[test]
    fn test_clone_and_eq() {
        let tree = sample();
        let copy = tree.clone();
        assert_eq!(tree, copy);
        assert_ne!(tree, Tree::singleton(doc("root")));
    }

    fn chain(depth: usize) -> Tree {
        let mut tree = Tree::singleton(doc("leaf"));
        for _ in 0..depth {
            tree = Tree::new(doc("link"), vec![tree]);
        }
        tree
    }

    #[test]
    fn test_deep_tree_does_not_overflow() {
        let tree = chain(200_000);
        assert_eq!(tree.node_count(), 200_001);
        let copy = tree.clone();
        assert!(copy == tree);
        let rendered = format!("{:?}", copy);
        assert!(rendered.starts_with("[(0, Document("));
        assert!(rendered.contains("(200000, Document("));
        drop(copy);
        drop(tree);
    }

    #[test]
    fn test_debug_lists_nodes_in_pre_order() {
        let rendered = format!("{:?}", sample());
        let order: Vec<usize> = ["\"root\"", "\"a\"", "\"a1\"", "\"a2\"", "\"b\""]
            .iter()
            .map(|name| rendered.find(name).unwrap())
            .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
        assert!(rendered.contains("(2, Document("));
    }

    #[derive(Debug, Clone)]
    struct Shape(Vec<Shape>);

    fn shape() -> impl Strategy<Value = Shape> {
        let leaf = Just(Shape(Vec::new()));
        leaf.prop_recursive(6, 64, 5, |inner| {
            prop::collection::vec(inner, 0..5).prop_map(Shape)
        })
    }

    fn build(shape: &Shape, counter: &mut usize) -> Tree {
        let node = doc(&counter.to_string());
        *counter += 1;
        let children = shape.0.iter().map(|s| build(s, counter)).collect();
        Tree::new(node, children)
    }

    proptest! {
        #[test]
        fn prop_fold_visits_each_node_once_in_pre_order(s in shape()) {
            let mut counter = 0;
            let tree = build(&s, &mut counter);
            let visited = tree.fold(Vec::new(), |mut acc, node| {
                acc.push(node.name().to_string());
                acc
            });
            let expected: Vec<String> = (0..counter).map(|i| i.to_string()).collect();
            prop_assert_eq!(visited, expected);
            prop_assert_eq!(tree.node_count(), counter);
        }
    }
}

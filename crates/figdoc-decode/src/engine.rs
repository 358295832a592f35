//! The tree decode engine.
//!
//! Dispatches on each node's `type`, decodes the payload, and for container
//! kinds descends into `children`. Descent uses an explicit work stack rather
//! than native recursion, so input depth is limited only by memory (or by
//! [`DecodeOptions::max_depth`]).

use crate::cursor::{Field, Object};
use crate::nodes::decode_node;
use crate::options::DecodeOptions;
use figdoc_core::{FieldPath, Node, NodeKind, Result, Tagged, Tree, ValueKind};
use log::{debug, trace};
use serde_json::Value;
use std::iter::Enumerate;
use std::slice;

/// A container whose children are still being decoded.
struct Pending<'a> {
    node: Node,
    depth: usize,
    /// Index among the parent's children; `None` for the root.
    position: Option<usize>,
    remaining: Enumerate<slice::Iter<'a, Value>>,
    children: Vec<Tree>,
}

enum Visited<'a> {
    Leaf(Tree),
    Container(Pending<'a>),
}

/// Decode a node value and everything below it.
///
/// Fails on the first error anywhere in the tree; no partial tree is built.
pub fn decode_tree(root: Field<'_>, options: &DecodeOptions) -> Result<Tree> {
    let base = root.path().clone();
    let mut decoded = 1usize;
    let mut stack = match visit(root, 0, None, options)? {
        Visited::Leaf(tree) => {
            debug!("decoded document tree with 1 node");
            return Ok(tree);
        }
        Visited::Container(pending) => vec![pending],
    };

    while let Some(mut top) = stack.pop() {
        if let Some((index, value)) = top.remaining.next() {
            // Children decode against relative paths; the absolute path is
            // only built when reporting an error.
            let child = Field::root(value);
            decoded += 1;
            let visited = visit(child, top.depth + 1, Some(index), options)
                .map_err(|err| err.within(&locate(&base, &stack, &top, index)))?;
            match visited {
                Visited::Leaf(tree) => {
                    top.children.push(tree);
                    stack.push(top);
                }
                Visited::Container(pending) => {
                    stack.push(top);
                    stack.push(pending);
                }
            }
            continue;
        }

        let tree = Tree::new(top.node, top.children);
        match stack.last_mut() {
            Some(parent) => parent.children.push(tree),
            None => {
                debug!("decoded document tree with {} nodes", decoded);
                return Ok(tree);
            }
        }
    }
    unreachable!("work stack emptied before the root was assembled")
}

fn visit<'a>(
    field: Field<'a>,
    depth: usize,
    position: Option<usize>,
    options: &DecodeOptions,
) -> Result<Visited<'a>> {
    if let Some(max_depth) = options.max_depth {
        if depth > max_depth {
            return Err(field.malformed(format!(
                "node nesting depth {} exceeds the limit of {}",
                depth, max_depth
            )));
        }
    }

    let obj = field.object()?;
    let kind: NodeKind = obj.tag("type")?;
    trace!("decoding {} node at depth {}", kind.tag(), depth);
    let node = decode_node(kind, &obj, options)?;

    if !kind.is_container() {
        return Ok(Visited::Leaf(Tree::singleton(node)));
    }

    let items = children(&obj)?;
    Ok(Visited::Container(Pending {
        node,
        depth,
        position,
        remaining: items.iter().enumerate(),
        children: Vec::with_capacity(items.len()),
    }))
}

/// The `children` array of a container node.
fn children<'a>(obj: &Object<'a>) -> Result<&'a [Value]> {
    let field = obj.required("children")?;
    match field.value() {
        Value::Array(items) => Ok(items.as_slice()),
        Value::Object(_) => {
            Err(field.malformed("children must be an array of nodes, found a single object"))
        }
        _ => Err(field.mismatch(ValueKind::Array)),
    }
}

/// Absolute path of child `index` of `parent`, whose ancestors are `stack`.
fn locate(base: &FieldPath, stack: &[Pending<'_>], parent: &Pending<'_>, index: usize) -> FieldPath {
    let mut path = base.clone();
    let positions = stack
        .iter()
        .chain(std::iter::once(parent))
        .filter_map(|pending| pending.position)
        .chain(std::iter::once(index));
    for position in positions {
        path.push_key("children");
        path.push_index(position);
    }
    path
}

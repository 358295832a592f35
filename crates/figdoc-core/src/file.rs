//! A decoded file response.

use crate::tree::Tree;
use crate::types::NodeId;
use indexmap::IndexMap;

/// Metadata of a component defined in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentMeta {
    pub name: String,
    pub description: String,
}

/// A whole design file.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct File {
    pub schema_version: i64,
    pub thumbnail_url: String,
    /// Document tree, rooted at a `Document` node.
    pub document: Tree,
    /// Components keyed by node id, in server order.
    pub components: IndexMap<NodeId, ComponentMeta>,
    pub name: Option<String>,
    pub last_modified: Option<String>,
    pub version: Option<String>,
}

impl File {
    /// Metadata for the component with the given node id.
    pub fn component(&self, id: &str) -> Option<&ComponentMeta> {
        self.components.get(&NodeId::from(id))
    }

    /// The subtree of the component's master node, when it lives in this file.
    pub fn component_tree(&self, id: &str) -> Option<&Tree> {
        self.components.get(&NodeId::from(id))?;
        self.document.find(id)
    }
}

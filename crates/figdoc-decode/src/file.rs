//! Decoding of a whole file response.

use crate::cursor::{Field, Object};
use crate::engine::decode_tree;
use crate::options::DecodeOptions;
use figdoc_core::{ComponentMeta, File, NodeId, Result};
use indexmap::IndexMap;
use log::debug;

/// Decode the top-level file object.
pub fn decode_file(root: Field<'_>, options: &DecodeOptions) -> Result<File> {
    let obj = root.object()?;
    let file = File {
        schema_version: obj.i64("schemaVersion")?,
        thumbnail_url: obj.string("thumbnailUrl")?,
        document: decode_tree(obj.required("document")?, options)?,
        components: components(&obj.object("components")?)?,
        name: obj.opt_string("name")?,
        last_modified: obj.opt_string("lastModified")?,
        version: obj.opt_string("version")?,
    };
    debug!(
        "decoded file {:?} with {} components",
        file.name.as_deref().unwrap_or(""),
        file.components.len()
    );
    Ok(file)
}

fn components(obj: &Object<'_>) -> Result<IndexMap<NodeId, ComponentMeta>> {
    obj.entries()
        .map(|(id, field)| {
            let meta = field.object()?;
            Ok((
                NodeId::from(id),
                ComponentMeta {
                    name: meta.string("name")?,
                    description: meta.string("description")?,
                },
            ))
        })
        .collect()
}

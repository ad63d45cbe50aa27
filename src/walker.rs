//! Category walker
//!
//! Discovers the named prompt collections of a catalog. A category is a
//! top-level array, or an array one level down inside a top-level object
//! (named `parent.child`). Anything deeper is ignored.

use serde_json::Value;

/// A named collection of prompt items, borrowed from the document
#[derive(Debug, Clone, PartialEq)]
pub struct Category<'a> {
    pub name: String,
    pub items: &'a [Value],
}

/// Walk a document and collect its categories in document order
///
/// Non-object roots yield no categories.
pub fn walk(document: &Value) -> Vec<Category<'_>> {
    let Some(root) = document.as_object() else {
        return Vec::new();
    };

    let mut categories = Vec::new();
    for (key, value) in root {
        match value {
            Value::Array(items) => categories.push(Category {
                name: key.clone(),
                items,
            }),
            Value::Object(children) => {
                for (subkey, subvalue) in children {
                    if let Value::Array(items) = subvalue {
                        categories.push(Category {
                            name: format!("{}.{}", key, subkey),
                            items,
                        });
                    }
                }
            }
            _ => {}
        }
    }

    categories
}

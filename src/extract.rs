//! Markdown extraction
//!
//! Renders a catalog as a markdown transcript. Unlike analyze and search,
//! nested groups keep their heading hierarchy (`##` group, `###` child)
//! instead of flattened `parent.child` names.

use serde_json::Value;

use crate::json::stringify;

const TITLE: &str = "Claude Code System Prompts";
const DESCRIPTION: &str = "Extracted prompts organized by category.";

/// Render a document as markdown
pub fn extract_to_markdown(document: &Value) -> String {
    let mut lines = vec![
        format!("# {}", TITLE),
        String::new(),
        DESCRIPTION.to_string(),
        String::new(),
    ];

    if let Some(root) = document.as_object() {
        for (key, value) in root {
            match value {
                Value::Array(items) => push_section(&mut lines, key, items, 2),
                Value::Object(children) => {
                    lines.push(format!("## {}", key));
                    lines.push(String::new());
                    for (subkey, subvalue) in children {
                        if let Value::Array(items) = subvalue {
                            push_section(&mut lines, subkey, items, 3);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    lines.join("\n")
}

fn push_section(lines: &mut Vec<String>, name: &str, items: &[Value], level: usize) {
    lines.push(format!("{} {}", "#".repeat(level), name));
    lines.push(String::new());

    for (i, item) in items.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, stringify(item)));
        lines.push(String::new());
    }
}

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::core::i18n::{Catalog, LocaleMessages, MessageNode, MessageTree};

/// A warning from scanning message files.
#[derive(Debug, Clone)]
pub struct MessageScanWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ScanMessagesResult {
    pub catalog: Catalog,
    pub warnings: Vec<MessageScanWarning>,
}

pub fn parse_json_file(path: &Path, locale: &str) -> Result<LocaleMessages> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;

    parse_json_str(&content, locale, &path.to_string_lossy())
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))
}

/// Parse the messages of one locale from JSON text.
///
/// The document must be an object. Nested objects become namespaces and
/// arrays become namespaces keyed by index (`faq.items.0.question`).
/// Numbers, booleans and nulls are not templates; their keys are recorded
/// in [`LocaleMessages::skipped`].
pub fn parse_json_str(content: &str, locale: &str, source: &str) -> Result<LocaleMessages> {
    let json: Value = serde_json::from_str(content)?;

    let Value::Object(map) = json else {
        bail!("Expected a JSON object at the top level of {}", source);
    };

    let mut messages = LocaleMessages::new(locale, source);
    for (key, value) in map {
        if let Some(node) = build_node(value, key.clone(), &mut messages.skipped) {
            messages.root.insert(key, node);
        }
    }
    Ok(messages)
}

fn build_node(value: Value, path: String, skipped: &mut Vec<String>) -> Option<MessageNode> {
    let children: Vec<(String, Value)> = match value {
        Value::String(s) => return Some(MessageNode::Text(s)),
        Value::Object(map) => map.into_iter().collect(),
        Value::Array(arr) => arr
            .into_iter()
            .enumerate()
            .map(|(index, v)| (index.to_string(), v))
            .collect(),
        Value::Null | Value::Bool(_) | Value::Number(_) => {
            skipped.push(path);
            return None;
        }
    };

    let mut tree = MessageTree::new();
    for (key, child) in children {
        let child_path = format!("{}.{}", path, key);
        if let Some(node) = build_node(child, child_path, skipped) {
            tree.insert(key, node);
        }
    }
    Some(MessageNode::Group(tree))
}

/// Extracts locale from filename.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "zh-CN.json" -> Some("zh-CN")
/// - "/path/to/messages/ja.json" -> Some("ja")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

/// Load every `<locale>.json` file of a directory into a catalog.
///
/// Files that fail to parse are reported as warnings and left out, so one
/// broken locale does not take the others down.
pub fn scan_message_files(message_dir: impl AsRef<Path>) -> Result<ScanMessagesResult> {
    let message_dir = message_dir.as_ref();
    let mut result = ScanMessagesResult::default();

    if !message_dir.exists() {
        bail!(
            "Messages directory '{}' does not exist.\n\
             Hint: Check your .voyagerrc.json 'messagesRoot' setting.",
            message_dir.display()
        );
    }

    if !message_dir.is_dir() {
        bail!("'{}' is not a directory.", message_dir.display());
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(message_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) == Some("json") {
            paths.push(path);
        }
    }
    paths.sort();

    for path in paths {
        let Some(locale) = extract_locale(&path) else {
            continue;
        };
        match parse_json_file(&path, &locale) {
            Ok(messages) => {
                result.catalog.insert(messages);
            }
            Err(e) => {
                result.warnings.push(MessageScanWarning {
                    file_path: path.to_string_lossy().to_string(),
                    error: format!("{:#}", e),
                });
            }
        }
    }

    Ok(result)
}

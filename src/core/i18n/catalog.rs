use std::collections::BTreeMap;

use anyhow::Result;

use crate::core::parsers::json::parse_json_str;

/// Nested message tree of one locale.
pub type MessageTree = BTreeMap<String, MessageNode>;

/// A node of a locale's message tree: either a template or a namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageNode {
    Text(String),
    Group(MessageTree),
}

/// All messages of a single locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleMessages {
    pub locale: String,
    /// Where the messages came from (file path, or `builtin:<locale>`).
    pub source: String,
    pub root: MessageTree,
    /// Dotted keys whose values were not strings and were left out.
    pub skipped: Vec<String>,
}

impl LocaleMessages {
    pub fn new(locale: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            source: source.into(),
            root: MessageTree::new(),
            skipped: Vec::new(),
        }
    }

    /// Walk `key` segment by segment. Returns `None` when a segment is
    /// missing, when the key stops on a namespace, or when the template is
    /// empty.
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut segments = key.split('.');
        let mut node = self.root.get(segments.next()?)?;
        for segment in segments {
            match node {
                MessageNode::Group(children) => node = children.get(segment)?,
                MessageNode::Text(_) => return None,
            }
        }
        match node {
            MessageNode::Text(text) if !text.is_empty() => Some(text.as_str()),
            _ => None,
        }
    }

    /// Number of templates (leaf strings).
    pub fn key_count(&self) -> usize {
        fn count(tree: &MessageTree) -> usize {
            tree.values()
                .map(|node| match node {
                    MessageNode::Text(_) => 1,
                    MessageNode::Group(children) => count(children),
                })
                .sum()
        }
        count(&self.root)
    }
}

const BUILTIN_MESSAGES: &[(&str, &str)] = &[
    ("de", include_str!("../../../messages/de.json")),
    ("en", include_str!("../../../messages/en.json")),
    ("es", include_str!("../../../messages/es.json")),
    ("fr", include_str!("../../../messages/fr.json")),
    ("it", include_str!("../../../messages/it.json")),
    ("ja", include_str!("../../../messages/ja.json")),
    ("pt", include_str!("../../../messages/pt.json")),
    ("zh", include_str!("../../../messages/zh.json")),
];

/// Translation catalog: locale code -> message tree.
///
/// Built once at startup and read-only afterwards; share it behind an
/// `Arc` when several resolvers need it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    locales: BTreeMap<String, LocaleMessages>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog bundled with the binary (`messages/*.json`).
    pub fn builtin() -> Result<Self> {
        let mut catalog = Catalog::new();
        for (locale, content) in BUILTIN_MESSAGES {
            let messages = parse_json_str(content, locale, &format!("builtin:{}", locale))?;
            catalog.insert(messages);
        }
        Ok(catalog)
    }

    /// Add or replace the messages of one locale.
    pub fn insert(&mut self, messages: LocaleMessages) {
        self.locales.insert(messages.locale.clone(), messages);
    }

    pub fn contains_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Known locale codes, sorted.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn get(&self, locale: &str) -> Option<&LocaleMessages> {
        self.locales.get(locale)
    }

    /// Messages of every locale, sorted by code.
    pub fn iter(&self) -> impl Iterator<Item = &LocaleMessages> {
        self.locales.values()
    }

    /// `(source, key)` of every value that was left out for not being a string.
    pub fn skipped_values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().flat_map(|messages| {
            messages
                .skipped
                .iter()
                .map(|key| (messages.source.as_str(), key.as_str()))
        })
    }

    /// Template for `key` in exactly `locale`, without fallback.
    pub fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.locales.get(locale)?.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }
}

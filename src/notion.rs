use serde_json::{Value, json};

use crate::block::{Block, Span};
use crate::config::Config;

/// Page metadata passed through to the document store untouched.
pub struct PageMeta<'a> {
    pub topic: &'a str,
    pub category: Option<&'a str>,
    pub keywords: &'a [String],
}

/// Convert blocks to the store's child block objects.
pub fn blocks_to_children(blocks: &[Block]) -> Vec<Value> {
    blocks.iter().map(block_to_value).collect()
}

fn block_to_value(block: &Block) -> Value {
    match block {
        Block::Heading { level: 2, content } => json!({
            "type": "heading_2",
            "heading_2": { "rich_text": rich_text(content) },
        }),
        Block::Heading { content, .. } => json!({
            "type": "heading_3",
            "heading_3": { "rich_text": rich_text(content) },
        }),
        Block::Paragraph { content } => json!({
            "type": "paragraph",
            "paragraph": { "rich_text": rich_text(content) },
        }),
        Block::CodeBlock { language, content } => json!({
            "type": "code",
            "code": {
                "rich_text": [{ "type": "text", "text": { "content": content } }],
                "language": language,
            },
        }),
        Block::BulletItem { content } => json!({
            "type": "bulleted_list_item",
            "bulleted_list_item": { "rich_text": rich_text(content) },
        }),
        Block::NumberedItem { content } => json!({
            "type": "numbered_list_item",
            "numbered_list_item": { "rich_text": rich_text(content) },
        }),
    }
}

fn rich_text(spans: &[Span]) -> Vec<Value> {
    spans.iter().map(span_to_value).collect()
}

fn span_to_value(span: &Span) -> Value {
    let annotations = match span {
        Span::Text(_) => json!({}),
        Span::Bold(_) => json!({ "bold": true }),
        Span::Italic(_) => json!({ "italic": true }),
        Span::Code(_) => json!({ "code": true }),
    };
    json!({
        "type": "text",
        "text": { "content": span.content() },
        "annotations": annotations,
    })
}

/// Build the full page-creation request body: parent database, page
/// properties, and child blocks.
pub fn page_request(meta: &PageMeta, children: Vec<Value>, config: &Config) -> Value {
    let mut properties = serde_json::Map::new();
    properties.insert(
        config.properties.title.clone(),
        json!({ "title": [{ "text": { "content": meta.topic } }] }),
    );
    if let Some(category) = meta.category {
        properties.insert(
            config.properties.category.clone(),
            json!({ "select": { "name": category } }),
        );
    }
    if !meta.keywords.is_empty() {
        let tags: Vec<Value> = meta
            .keywords
            .iter()
            .map(|kw| json!({ "name": kw }))
            .collect();
        properties.insert(
            config.properties.keywords.clone(),
            json!({ "multi_select": tags }),
        );
    }

    json!({
        "parent": { "database_id": config.database.id },
        "properties": properties,
        "children": children,
    })
}

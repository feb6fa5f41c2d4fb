mod block;
mod config;
mod inline;
mod notion;
mod parser;

pub use block::{Block, Span};
pub use config::Config;
pub use notion::PageMeta;
pub use parser::CHUNK_LIMIT;

use serde_json::Value;

/// Split a single line into styled text runs.
pub fn tokenize(line: &str) -> Vec<Span> {
    inline::tokenize(line)
}

/// Parse markdown text into a vector of blocks.
pub fn parse(markdown: &str) -> Vec<Block> {
    parser::parse(markdown)
}

/// Convert markdown to the store's child block objects.
pub fn markdown_to_children(markdown: &str) -> Vec<Value> {
    let blocks = parse(markdown);
    notion::blocks_to_children(&blocks)
}

/// Convert markdown to a full page-creation request body.
pub fn markdown_to_page(markdown: &str, meta: &PageMeta, config: &Config) -> Value {
    notion::page_request(meta, markdown_to_children(markdown), config)
}

/// Render the page-creation request as pretty-printed JSON.
pub fn markdown_to_page_json(
    markdown: &str,
    meta: &PageMeta,
    config: &Config,
) -> Result<String, String> {
    serde_json::to_string_pretty(&markdown_to_page(markdown, meta, config))
        .map_err(|e| format!("JSON serialization failed: {e}"))
}

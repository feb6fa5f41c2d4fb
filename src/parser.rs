use once_cell::sync::Lazy;
use regex::Regex;

use crate::block::Block;
use crate::inline::tokenize;

/// Maximum characters per text field, a conservative margin under the
/// document store's ~2000-character limit.
pub const CHUNK_LIMIT: usize = 1900;

static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[*+-]\s").unwrap());
static NUMBERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d+\.\s").unwrap());

/// Parse markdown text into a list of blocks.
///
/// One pass over the lines, in source order. Unrecognized syntax never
/// errors; at worst a line is kept as a paragraph.
pub fn parse(markdown: &str) -> Vec<Block> {
    let lines: Vec<&str> = markdown.split('\n').collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        // Longer heading prefixes first, so `### ` is not read as `## #`.
        // Both deeper prefixes map to level 3 in this dialect.
        if let Some(text) = line
            .strip_prefix("#### ")
            .or_else(|| line.strip_prefix("### "))
        {
            blocks.push(Block::Heading {
                level: 3,
                content: tokenize(text),
            });
        } else if let Some(text) = line.strip_prefix("## ") {
            blocks.push(Block::Heading {
                level: 2,
                content: tokenize(text),
            });
        } else if let Some(tag) = line.strip_prefix("```") {
            let tag = tag.trim();
            let language = if tag.is_empty() { "plaintext" } else { tag };

            // Accumulate the body verbatim, blank lines included. The
            // closing fence line is consumed; end of input also closes.
            let mut body = Vec::new();
            i += 1;
            while i < lines.len() && !lines[i].starts_with("```") {
                body.push(lines[i]);
                i += 1;
            }

            let content = body.join("\n");
            for chunk in chunks(&content) {
                blocks.push(Block::CodeBlock {
                    language: language.to_string(),
                    content: chunk.to_string(),
                });
            }
        } else if let Some(m) = BULLET.find(line) {
            blocks.push(Block::BulletItem {
                content: tokenize(&line[m.end()..]),
            });
        } else if let Some(m) = NUMBERED.find(line) {
            blocks.push(Block::NumberedItem {
                content: tokenize(&line[m.end()..]),
            });
        } else if !line.trim().is_empty() {
            // Each chunk is tokenized independently, so a style pair
            // straddling a chunk boundary is not recognized.
            for chunk in chunks(line) {
                blocks.push(Block::Paragraph {
                    content: tokenize(chunk),
                });
            }
        }

        i += 1;
    }

    blocks
}

/// Split text into chunks of at most `CHUNK_LIMIT` characters. Empty
/// text yields no chunks.
fn chunks(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let cut = rest
            .char_indices()
            .nth(CHUNK_LIMIT)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        out.push(&rest[..cut]);
        rest = &rest[cut..];
    }
    out
}

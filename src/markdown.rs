//! Markdown section files to LaTeX, via pulldown-cmark events.
//!
//! Soft breaks are promoted to hard breaks: every source line of a CV
//! section renders on its own output line, matching the plain-text path.

use std::fs;
use std::path::Path;

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

use crate::block::{Block, List, ListItem, Span};
use crate::error::{Error, Result};
use crate::latex;

/// Convert a `.md` section file. A missing path is a hard error; an
/// unreadable file is logged and skipped via `None`.
pub fn to_latex(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    match fs::read_to_string(path) {
        Ok(raw) => Ok(Some(markdown_to_latex(&raw))),
        Err(err) => {
            log::warn!("skipping {}: {err}", path.display());
            Ok(None)
        }
    }
}

/// Convert Markdown text to LaTeX.
pub fn markdown_to_latex(markdown: &str) -> String {
    latex::blocks_to_latex(&parse(markdown))
}

/// Parse markdown text into a list of blocks
pub fn parse(markdown: &str) -> Vec<Block> {
    let markdown = strip_frontmatter(markdown);
    let mut blocks = Vec::new();
    let mut state = ParseState::default();

    for event in Parser::new(markdown) {
        process_event(event, &mut state, &mut blocks);
    }

    blocks
}

/// Strip YAML frontmatter from the beginning of the content
fn strip_frontmatter(markdown: &str) -> &str {
    if !markdown.starts_with("---") {
        return markdown;
    }
    if let Some(end) = markdown[3..].find("\n---") {
        markdown[3 + end + 4..].trim_start_matches('\n')
    } else {
        markdown
    }
}

#[derive(Default)]
struct ParseState {
    // Current inline content being built
    spans: Vec<Span>,
    // Parent span buffers while inside bold/italic/link markers
    span_stack: Vec<Vec<Span>>,

    // Current heading level (if in a heading)
    heading_level: Option<u8>,

    // Code block state
    in_code_block: bool,
    code_content: String,

    // Link state
    link_url: Option<String>,

    // List state
    list_stack: Vec<ListBuilder>,
}

struct ListBuilder {
    ordered: bool,
    items: Vec<ListItem>,
    current_item_spans: Vec<Span>,
    current_item_nested: Option<Box<List>>,
}

fn process_event(event: Event, state: &mut ParseState, blocks: &mut Vec<Block>) {
    match event {
        // Headings
        Event::Start(Tag::Heading { level, .. }) => {
            state.heading_level = Some(heading_level_to_u8(level));
        }
        Event::End(TagEnd::Heading(_)) => {
            if let Some(level) = state.heading_level.take() {
                let content = std::mem::take(&mut state.spans);
                blocks.push(Block::Heading { level, content });
            }
        }

        // Paragraphs
        Event::Start(Tag::Paragraph) => {}
        Event::End(TagEnd::Paragraph) => {
            let content = std::mem::take(&mut state.spans);
            if !content.is_empty() {
                // Inside a list item, the paragraph belongs to that item
                if let Some(list) = state.list_stack.last_mut() {
                    list.current_item_spans.extend(content);
                } else {
                    blocks.push(Block::Paragraph { content });
                }
            }
        }

        // Text content
        Event::Text(text) => {
            if state.in_code_block {
                state.code_content.push_str(&text);
            } else {
                state.spans.push(Span::Text(text.into_string()));
            }
        }

        // Inline code
        Event::Code(code) => {
            state.spans.push(Span::Code(code.into_string()));
        }

        // Bold
        Event::Start(Tag::Strong) => {
            state.span_stack.push(std::mem::take(&mut state.spans));
        }
        Event::End(TagEnd::Strong) => {
            let bold_content = std::mem::take(&mut state.spans);
            if let Some(mut parent) = state.span_stack.pop() {
                parent.push(Span::Bold(bold_content));
                state.spans = parent;
            }
        }

        // Italic
        Event::Start(Tag::Emphasis) => {
            state.span_stack.push(std::mem::take(&mut state.spans));
        }
        Event::End(TagEnd::Emphasis) => {
            let italic_content = std::mem::take(&mut state.spans);
            if let Some(mut parent) = state.span_stack.pop() {
                parent.push(Span::Italic(italic_content));
                state.spans = parent;
            }
        }

        // Links
        Event::Start(Tag::Link { dest_url, .. }) => {
            state.link_url = Some(dest_url.into_string());
            state.span_stack.push(std::mem::take(&mut state.spans));
        }
        Event::End(TagEnd::Link) => {
            let link_content = std::mem::take(&mut state.spans);
            if let Some(mut parent) = state.span_stack.pop() {
                if let Some(url) = state.link_url.take() {
                    parent.push(Span::Link {
                        url,
                        content: link_content,
                    });
                }
                state.spans = parent;
            }
        }

        // Code blocks
        Event::Start(Tag::CodeBlock(_)) => {
            state.in_code_block = true;
            state.code_content.clear();
        }
        Event::End(TagEnd::CodeBlock) => {
            state.in_code_block = false;
            let content = std::mem::take(&mut state.code_content);
            blocks.push(Block::CodeBlock { content });
        }

        // Lists
        Event::Start(Tag::List(first_item)) => {
            // Text already seen belongs to the enclosing item, not the
            // nested list about to open
            if let Some(parent) = state.list_stack.last_mut() {
                parent.current_item_spans.extend(std::mem::take(&mut state.spans));
            }
            state.list_stack.push(ListBuilder {
                ordered: first_item.is_some(),
                items: Vec::new(),
                current_item_spans: Vec::new(),
                current_item_nested: None,
            });
        }
        Event::End(TagEnd::List(_)) => {
            if let Some(builder) = state.list_stack.pop() {
                let list = List {
                    ordered: builder.ordered,
                    items: builder.items,
                };
                // A nested list closes before its parent item does, so park
                // it on the item still being built
                if let Some(parent) = state.list_stack.last_mut() {
                    parent.current_item_nested = Some(Box::new(list));
                } else {
                    blocks.push(Block::List(list));
                }
            }
        }

        Event::Start(Tag::Item) => {
            if let Some(list) = state.list_stack.last_mut() {
                list.current_item_spans.clear();
                list.current_item_nested = None;
            }
        }
        Event::End(TagEnd::Item) => {
            let remaining = std::mem::take(&mut state.spans);
            if let Some(list) = state.list_stack.last_mut() {
                list.current_item_spans.extend(remaining);
                let content = std::mem::take(&mut list.current_item_spans);
                let nested = list.current_item_nested.take();
                list.items.push(ListItem { content, nested });
            }
        }

        // Horizontal rule
        Event::Rule => {
            blocks.push(Block::Rule);
        }

        // Every source line renders on its own line
        Event::SoftBreak | Event::HardBreak => {
            state.spans.push(Span::LineBreak);
        }

        // Ignore other events
        _ => {}
    }
}

fn heading_level_to_u8(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

use comrak::nodes::{AstNode, NodeValue};
use tracing::warn;

use crate::domain::{slug::AnchorSlugger, toc::Heading};

/// Collect every heading below `root` in document order.
pub(crate) fn extract_headings<'a>(root: &'a AstNode<'a>, markdown: &str) -> Vec<Heading> {
    let mut walker = HeadingWalker::new(markdown);
    walker.visit_nodes(root);
    walker.headings
}

struct HeadingWalker {
    line_starts: Vec<usize>,
    source_len: usize,
    slugger: AnchorSlugger,
    headings: Vec<Heading>,
}

impl HeadingWalker {
    fn new(markdown: &str) -> Self {
        Self {
            line_starts: line_starts(markdown),
            source_len: markdown.len(),
            slugger: AnchorSlugger::new(),
            headings: Vec::new(),
        }
    }

    fn visit_nodes(&mut self, node: &AstNode<'_>) {
        if let Some(level) = heading_level(node) {
            let text = collect_heading_text(node);
            let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
            let ordinal = self.headings.len() + 1;
            let id = match self.slugger.anchor_for(&normalized) {
                Ok(id) => id,
                Err(err) => {
                    warn!(
                        heading = %normalized,
                        ordinal,
                        error = %err,
                        "heading has no usable slug; falling back to ordinal anchor"
                    );
                    self.slugger.claim(format!("section-{ordinal}"))
                }
            };
            let position = self.byte_offset(node);
            self.headings
                .push(Heading::new(id, normalized, level, position));
        }

        let mut child = node.first_child();
        while let Some(next) = child {
            self.visit_nodes(next);
            child = next.next_sibling();
        }
    }

    fn byte_offset(&self, node: &AstNode<'_>) -> usize {
        let start = node.data.borrow().sourcepos.start;
        let line_start = start
            .line
            .checked_sub(1)
            .and_then(|idx| self.line_starts.get(idx))
            .copied()
            .unwrap_or(self.source_len);
        (line_start + start.column.saturating_sub(1)).min(self.source_len)
    }
}

fn line_starts(markdown: &str) -> Vec<usize> {
    std::iter::once(0)
        .chain(markdown.match_indices('\n').map(|(idx, _)| idx + 1))
        .collect()
}

fn heading_level(node: &AstNode<'_>) -> Option<u8> {
    let data = node.data.borrow();
    if let NodeValue::Heading(heading) = &data.value {
        Some(heading.level)
    } else {
        None
    }
}

fn collect_heading_text(node: &AstNode<'_>) -> String {
    fn walk(node: &AstNode<'_>, buffer: &mut String) {
        {
            let data = node.data.borrow();
            match &data.value {
                NodeValue::Text(text) => buffer.push_str(text),
                NodeValue::Code(code) => buffer.push_str(&code.literal),
                NodeValue::Math(math) => buffer.push_str(&math.literal),
                NodeValue::LineBreak | NodeValue::SoftBreak => buffer.push(' '),
                _ => {}
            }
        }
        let mut child = node.first_child();
        while let Some(next) = child {
            walk(next, buffer);
            child = next.next_sibling();
        }
    }

    let mut text = String::new();
    let mut child = node.first_child();
    while let Some(next) = child {
        walk(next, &mut text);
        child = next.next_sibling();
    }
    text
}

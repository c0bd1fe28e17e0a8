use askama::Template;
use serde::Serialize;
use thiserror::Error;

use crate::domain::toc::{TocBuilder, TocNode};

#[derive(Debug, Error)]
pub enum TocRenderError {
    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// A table-of-contents entry as handed to a renderer, carrying the position
/// a click on it should scroll to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntryView {
    pub id: String,
    pub text: String,
    pub level: u8,
    pub depth: u8,
    pub position: usize,
    pub scroll_position: usize,
    pub children: Vec<TocEntryView>,
}

impl TocEntryView {
    pub fn from_forest(forest: &[TocNode], builder: &TocBuilder, document: &str) -> Vec<Self> {
        forest
            .iter()
            .map(|node| Self::from_node(node, builder, document))
            .collect()
    }

    fn from_node(node: &TocNode, builder: &TocBuilder, document: &str) -> Self {
        Self {
            id: node.heading.id.clone(),
            text: node.heading.text.clone(),
            level: node.heading.level,
            depth: node.depth,
            position: node.heading.position,
            scroll_position: builder.scroll_target(node, document).position,
            children: Self::from_forest(&node.children, builder, document),
        }
    }
}

struct TocRow<'a> {
    indent: String,
    text: &'a str,
    id: &'a str,
    scroll_position: usize,
}

#[derive(Template)]
#[template(path = "toc.txt")]
struct TocOutlineTemplate<'a> {
    rows: Vec<TocRow<'a>>,
}

/// One line per entry in document order, indented by nominal depth.
pub fn render_text(
    forest: &[TocNode],
    builder: &TocBuilder,
    document: &str,
) -> Result<String, TocRenderError> {
    let rows = TocNode::walk(forest)
        .map(|node| TocRow {
            indent: "  ".repeat(usize::from(node.depth)),
            text: &node.heading.text,
            id: &node.heading.id,
            scroll_position: builder.scroll_target(node, document).position,
        })
        .collect();

    Ok(TocOutlineTemplate { rows }.render()?)
}

pub fn render_json(
    forest: &[TocNode],
    builder: &TocBuilder,
    document: &str,
) -> Result<String, TocRenderError> {
    let entries = TocEntryView::from_forest(forest, builder, document);
    Ok(serde_json::to_string_pretty(&entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::toc::{Heading, build_toc};

    fn sample() -> Vec<TocNode> {
        build_toc(&[
            Heading::new("intro", "Intro", 2, 10),
            Heading::new("details", "Details", 4, 20),
            Heading::new("wrap-up", "Wrap up", 2, 30),
        ])
    }

    #[test]
    fn text_outline_indents_by_nominal_depth() {
        let text = render_text(&sample(), &TocBuilder::default(), "Doc").expect("render");

        assert_eq!(
            text,
            "- Intro (#intro @10)\n    - Details (#details @20)\n- Wrap up (#wrap-up @30)\n"
        );
    }

    #[test]
    fn text_outline_reports_preview_positions() {
        let text = render_text(&sample(), &TocBuilder::preview(), "Doc\nbody").expect("render");

        assert!(text.starts_with("- Intro (#intro @16)\n"), "{text}");
    }

    #[test]
    fn json_entries_keep_source_and_scroll_positions() {
        let json = render_json(&sample(), &TocBuilder::preview(), "Doc").expect("render");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value[0]["id"], "intro");
        assert_eq!(value[0]["position"], 10);
        assert_eq!(value[0]["scroll_position"], 16);
        assert_eq!(value[0]["children"][0]["depth"], 2);
        assert_eq!(value[1]["children"].as_array().map(Vec::len), Some(0));
    }
}
